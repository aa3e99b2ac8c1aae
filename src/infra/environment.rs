//! The visiting environment's preferred languages, read once at startup.

use std::env;
use tracing::debug;

/// Comma- or colon-separated language list that replaces OS detection.
pub const LANGUAGES_ENV: &str = "LIFECYCLE_DIAGRAM_LANGUAGES";

/// Ordered preferred language tags: [`LANGUAGES_ENV`] if set, else the OS list.
pub fn preferred_languages() -> Vec<String> {
    if let Ok(raw) = env::var(LANGUAGES_ENV) {
        let languages = parse_language_list(&raw);
        if !languages.is_empty() {
            debug!(?languages, "Using languages from {}", LANGUAGES_ENV);
            return languages;
        }
    }
    let detected: Vec<String> = sys_locale::get_locales().collect();
    debug!(languages = ?detected, "Detected system languages");
    detected
}

/// Parses `fr-FR, en;q=0.8` or `fr_FR.UTF-8:en` into bare tags, keeping order.
pub fn parse_language_list(raw: &str) -> Vec<String> {
    raw.split([',', ':'])
        .filter_map(|entry| {
            let tag = entry.split([';', '.', '@']).next().unwrap_or("").trim();
            (!tag.is_empty()).then(|| tag.to_string())
        })
        .collect()
}
