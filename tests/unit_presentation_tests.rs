//! # Presentation and Theme Unit Tests / 呈现与主题单元测试
//!
//! Document language/direction sync and the light/dark theme provider.
//!
//! 测试文档语言/方向同步以及明暗主题提供者。

use lifecycle_diagram::core::presentation::{self, PresentationState};
use lifecycle_diagram::core::theme::{AppliedTheme, ThemePalette, THEME_ROLES};
use lifecycle_diagram::core::{
    PresentationContext, SupportedLocales, TextDirection, ThemeMode, ThemePair, ThemeProvider,
};
use lifecycle_diagram::error::ConfigError;
use std::fs;
use tempfile::tempdir;

fn palette(background: &str) -> ThemePalette {
    ThemePalette::from_pairs(THEME_ROLES.iter().map(|role| {
        let value = if *role == "background" { background } else { "gray" };
        (*role, value)
    }))
}

#[cfg(test)]
mod sync_tests {
    use super::*;

    #[test]
    fn test_context_starts_unsynced() {
        let context = PresentationContext::new();
        assert_eq!(context.lang(), None);
        assert_eq!(context.dir(), None);
        assert!(context.theme().is_none());
    }

    #[test]
    fn test_supported_locale() {
        let mut context = PresentationContext::new();
        let state = presentation::apply(&mut context, "fr-FR", &SupportedLocales::builtin());

        assert_eq!(state.language_tag, "fr-FR");
        assert_eq!(state.text_direction, TextDirection::Ltr);
        assert_eq!(context.lang(), Some("fr-FR"));
        assert_eq!(context.dir(), Some(TextDirection::Ltr));
    }

    #[test]
    fn test_rtl_locale() {
        let mut context = PresentationContext::new();
        presentation::apply(&mut context, "ar", &SupportedLocales::builtin());
        assert_eq!(context.lang(), Some("ar"));
        assert_eq!(context.dir(), Some(TextDirection::Rtl));
    }

    #[test]
    fn test_unsupported_locale_uses_default() {
        let mut context = PresentationContext::new();
        let state = presentation::apply(&mut context, "xx-XX", &SupportedLocales::builtin());
        assert_eq!(
            state,
            PresentationState {
                language_tag: "en-US".to_string(),
                text_direction: TextDirection::Ltr,
            }
        );
        assert_eq!(context.lang(), Some("en-US"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let supported = SupportedLocales::builtin();
        let mut once = PresentationContext::new();
        presentation::apply(&mut once, "fa-IR", &supported);
        let mut twice = once.clone();
        presentation::apply(&mut twice, "fa-IR", &supported);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_later_locale_replaces_earlier() {
        let supported = SupportedLocales::builtin();
        let mut context = PresentationContext::new();
        presentation::apply(&mut context, "ar", &supported);
        presentation::apply(&mut context, "de-DE", &supported);
        assert_eq!(context.lang(), Some("de-DE"));
        assert_eq!(context.dir(), Some(TextDirection::Ltr));
    }
}

#[cfg(test)]
mod theme_tests {
    use super::*;

    #[test]
    fn test_builtin_pair_defines_every_role() {
        let pair = ThemePair::builtin();
        for role in THEME_ROLES {
            assert!(pair.light().get(role).is_some(), "light lacks {}", role);
            assert!(pair.dark().get(role).is_some(), "dark lacks {}", role);
        }
        assert_eq!(pair.dark().get("background"), Some("#24292E"));
    }

    #[test]
    fn test_mismatched_roles_are_rejected() {
        let light = palette("white");
        let mut dark_pairs: Vec<(String, String)> = palette("black")
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        dark_pairs.push(("accent".to_string(), "red".to_string()));

        match ThemePair::new(light, ThemePalette::from_pairs(dark_pairs)) {
            Err(ConfigError::MismatchedThemeRoles {
                light_only,
                dark_only,
            }) => {
                assert!(light_only.is_empty());
                assert_eq!(dark_only, vec!["accent".to_string()]);
            }
            other => panic!("expected mismatched roles, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_role_is_rejected() {
        let partial = || ThemePalette::from_pairs([("background", "white"), ("text", "black")]);
        assert!(matches!(
            ThemePair::new(partial(), partial()),
            Err(ConfigError::MissingThemeRole(_))
        ));
    }

    #[test]
    fn test_provider_follows_mode() {
        let pair = ThemePair::new(palette("white"), palette("black")).unwrap();
        let provider = ThemeProvider::new(pair.clone());
        let mut context = PresentationContext::new();

        provider.apply(&mut context, ThemeMode::Dark);
        assert_eq!(context.theme(), Some(&AppliedTheme::Fixed(pair.dark().clone())));

        provider.apply(&mut context, ThemeMode::Light);
        assert_eq!(context.theme(), Some(&AppliedTheme::Fixed(pair.light().clone())));

        provider.apply(&mut context, ThemeMode::System);
        assert_eq!(
            context.theme(),
            Some(&AppliedTheme::FollowSystem {
                light: pair.light().clone(),
                dark: pair.dark().clone(),
            })
        );
    }

    #[test]
    fn test_theme_does_not_touch_language() {
        let mut context = PresentationContext::new();
        presentation::apply(&mut context, "ar", &SupportedLocales::builtin());
        ThemeProvider::new(ThemePair::builtin()).apply(&mut context, ThemeMode::Dark);
        assert_eq!(context.lang(), Some("ar"));
        assert_eq!(context.dir(), Some(TextDirection::Rtl));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("LIGHT".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("auto".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }
}

#[cfg(test)]
mod theme_file_tests {
    use super::*;

    #[test]
    fn test_load_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(
            &path,
            r##"
[light]
background = "#fafafa"
text = "#111"
render = "lightblue"
preCommit = "lightyellow"
commit = "lightgreen"

[dark]
background = "#000"
text = "#eee"
render = "navy"
preCommit = "olive"
commit = "darkgreen"
"##,
        )
        .unwrap();

        let pair = ThemePair::load(&path).unwrap();
        assert_eq!(pair.light().get("background"), Some("#fafafa"));
        assert_eq!(pair.dark().get("preCommit"), Some("olive"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = ThemePair::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::ThemeFileRead { .. })));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(&path, "[light\nbackground = ").unwrap();
        assert!(matches!(ThemePair::load(&path), Err(ConfigError::ThemeFileParse { .. })));
    }

    #[test]
    fn test_load_file_with_unpaired_roles() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(
            &path,
            "[light]\nbackground = \"white\"\n\n[dark]\nbackground = \"black\"\ntext = \"white\"\n",
        )
        .unwrap();
        assert!(matches!(
            ThemePair::load(&path),
            Err(ConfigError::MismatchedThemeRoles { .. })
        ));
    }
}
