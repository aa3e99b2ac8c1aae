//! # Themes / 主题
//!
//! Light and dark palettes over the same semantic roles, and the provider
//! that applies one of them according to the host's dark-mode signal.
//!
//! 基于相同语义角色的明暗调色板，以及根据宿主暗色模式信号应用其一的主题提供者。

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::core::presentation::PresentationContext;
use crate::error::ConfigError;

/// Semantic color roles every palette must define.
pub const THEME_ROLES: [&str; 5] = ["background", "text", "render", "preCommit", "commit"];

static BUILTIN_THEME: Lazy<ThemePair> = Lazy::new(|| ThemePair {
    light: ThemePalette::from_pairs([
        ("background", "white"),
        ("text", "black"),
        ("render", "rgb(217, 232, 253)"),
        ("preCommit", "rgb(255, 242, 205)"),
        ("commit", "rgb(214, 231, 213)"),
    ]),
    dark: ThemePalette::from_pairs([
        ("background", "#24292E"),
        ("text", "white"),
        ("render", "#24292E"),
        ("preCommit", "#24292E"),
        ("commit", "#24292E"),
    ]),
});

/// Role name -> color value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemePalette(BTreeMap<String, String>);

impl ThemePalette {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    pub fn get(&self, role: &str) -> Option<&str> {
        self.0.get(role).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn roles_not_in(&self, other: &ThemePalette) -> Vec<String> {
        self.0
            .keys()
            .filter(|role| !other.0.contains_key(*role))
            .cloned()
            .collect()
    }
}

/// Light and dark palettes defining the same role names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePair {
    light: ThemePalette,
    dark: ThemePalette,
}

#[derive(Deserialize)]
struct ThemeFile {
    light: ThemePalette,
    dark: ThemePalette,
}

impl ThemePair {
    /// Validates that both palettes carry the same roles, including every [`THEME_ROLES`] entry.
    pub fn new(light: ThemePalette, dark: ThemePalette) -> Result<Self, ConfigError> {
        let light_only = light.roles_not_in(&dark);
        let dark_only = dark.roles_not_in(&light);
        if !light_only.is_empty() || !dark_only.is_empty() {
            return Err(ConfigError::MismatchedThemeRoles {
                light_only,
                dark_only,
            });
        }
        if let Some(missing) = THEME_ROLES.iter().find(|role| light.get(role).is_none()) {
            return Err(ConfigError::MissingThemeRole(missing.to_string()));
        }
        Ok(Self { light, dark })
    }

    pub fn builtin() -> Self {
        BUILTIN_THEME.clone()
    }

    /// Loads a TOML file with `[light]` and `[dark]` tables.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ThemeFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ThemeFile = toml::from_str(&content).map_err(|source| ConfigError::ThemeFileParse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(file.light, file.dark)
    }

    pub fn light(&self) -> &ThemePalette {
        &self.light
    }

    pub fn dark(&self) -> &ThemePalette {
        &self.dark
    }
}

/// The dark-mode signal. Owned by the host (OS preference or user override), not by this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" | "auto" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode '{}'", other)),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        })
    }
}

/// What the renderer should paint with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppliedTheme {
    Fixed(ThemePalette),
    /// Both palettes; the viewer's color-scheme preference chooses.
    FollowSystem {
        light: ThemePalette,
        dark: ThemePalette,
    },
}

/// Applies a validated [`ThemePair`] according to the dark-mode signal.
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    pair: ThemePair,
}

impl ThemeProvider {
    pub fn new(pair: ThemePair) -> Self {
        Self { pair }
    }

    pub fn pair(&self) -> &ThemePair {
        &self.pair
    }

    pub fn apply(&self, context: &mut PresentationContext, mode: ThemeMode) {
        let theme = match mode {
            ThemeMode::Light => AppliedTheme::Fixed(self.pair.light.clone()),
            ThemeMode::Dark => AppliedTheme::Fixed(self.pair.dark.clone()),
            ThemeMode::System => AppliedTheme::FollowSystem {
                light: self.pair.light.clone(),
                dark: self.pair.dark.clone(),
            },
        };
        debug!(%mode, "Applied theme");
        context.set_theme(theme);
    }
}
