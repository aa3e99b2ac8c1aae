//! # Locale Resolution / 语言环境解析
//!
//! Picks the initial locale from the stored preference or the environment's
//! preferred languages, guards against stale stored tags, and maps a locale to
//! its text direction.
//!
//! 根据存储的偏好或环境的首选语言选择初始语言环境，
//! 防止使用过期的存储标签，并将语言环境映射到其文本方向。
//!
//! ## Matching / 匹配
//!
//! For each preferred tag in order, an exact match wins; otherwise the first
//! supported locale with the same language subtag. Tags are compared
//! case-insensitively, with `_` treated as `-` (POSIX-style `fr_FR`).
//!
//! 按顺序检查每个首选标签：完全匹配优先，其次是语言子标签相同的第一个受支持语言环境。

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::core::store::{self, PreferenceStore};
use crate::error::ConfigError;

/// Locale used whenever nothing stored or detected is usable.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Locales that ship a translation table.
pub const BUILTIN_LOCALES: &[&str] = &[
    "ar", "de-DE", "en-US", "es-ES", "fa-IR", "fr-FR", "pl-PL", "zh-CN",
];

const RTL_LANGUAGES: &[&str] = &["ar", "fa"];

/// Text direction of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, non-empty set of locales the application can present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocales(Vec<String>);

impl SupportedLocales {
    pub fn new<I, S>(locales: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locales: Vec<String> = locales.into_iter().map(Into::into).collect();
        if locales.is_empty() {
            return Err(ConfigError::EmptyLocaleSet);
        }
        Ok(Self(locales))
    }

    /// The locales bundled with the crate.
    pub fn builtin() -> Self {
        Self(BUILTIN_LOCALES.iter().map(|l| l.to_string()).collect())
    }

    /// Exact membership test.
    pub fn contains(&self, locale: &str) -> bool {
        self.0.iter().any(|l| l == locale)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Best supported match for an ordered list of preferred language tags.
    pub fn matching<S: AsRef<str>>(&self, preferred: &[S]) -> Option<&str> {
        for wanted in preferred.iter().map(|w| normalize(w.as_ref())) {
            if wanted.is_empty() {
                continue;
            }
            if let Some(exact) = self.iter().find(|l| normalize(l) == wanted) {
                return Some(exact);
            }
            let language = language_subtag(&wanted);
            if let Some(same_language) = self
                .iter()
                .find(|l| language_subtag(&normalize(l)) == language)
            {
                return Some(same_language);
            }
        }
        None
    }
}

fn normalize(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

/// The language part of a tag: everything before the first region separator.
pub fn language_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

/// Locale to start with: the stored preference as-is, else the environment's best match.
///
/// `None` means neither is usable; callers fall back to [`DEFAULT_LOCALE`].
pub fn resolve_initial_locale<S: AsRef<str>>(
    store: &PreferenceStore,
    supported: &SupportedLocales,
    preferred_languages: &[S],
) -> Option<String> {
    if store.contains(store::LOCALE) {
        let stored = store.get(store::LOCALE, DEFAULT_LOCALE).string_form();
        debug!(locale = %stored, "Using stored locale");
        return Some(stored);
    }
    let matched = supported.matching(preferred_languages).map(str::to_string);
    debug!(locale = ?matched, "Matched environment languages against supported locales");
    matched
}

/// `stored` if it is supported, otherwise [`DEFAULT_LOCALE`].
pub fn effective_locale<'a>(stored: &'a str, supported: &SupportedLocales) -> &'a str {
    if supported.contains(stored) {
        stored
    } else {
        debug!(locale = stored, fallback = DEFAULT_LOCALE, "Unsupported locale, falling back");
        DEFAULT_LOCALE
    }
}

/// Right-to-left for Arabic and Persian, left-to-right for everything else.
pub fn direction_for(locale: &str) -> TextDirection {
    let language = language_subtag(locale).to_ascii_lowercase();
    if RTL_LANGUAGES.contains(&language.as_str()) {
        TextDirection::Rtl
    } else {
        TextDirection::Ltr
    }
}
