//! # Document Presentation Sync / 文档呈现同步
//!
//! The document-wide presentation attributes (language tag, text direction,
//! applied theme) live in one [`PresentationContext`]. Language and direction
//! are written only by [`apply`]; the theme only by
//! [`ThemeProvider`](crate::core::theme::ThemeProvider).
//!
//! 文档级呈现属性（语言标签、文本方向、已应用主题）保存在一个
//! [`PresentationContext`] 中。语言和方向只由 [`apply`] 写入；
//! 主题只由 `ThemeProvider` 写入。

use serde::Serialize;
use tracing::debug;

use crate::core::locale::{direction_for, effective_locale, SupportedLocales, TextDirection};
use crate::core::theme::AppliedTheme;

/// Derived from the active locale on mount and on every locale change. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationState {
    pub language_tag: String,
    pub text_direction: TextDirection,
}

impl PresentationState {
    pub fn for_locale(locale: &str, supported: &SupportedLocales) -> Self {
        let language_tag = effective_locale(locale, supported).to_string();
        let text_direction = direction_for(&language_tag);
        Self {
            language_tag,
            text_direction,
        }
    }
}

/// Global presentation attributes of the rendered document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresentationContext {
    lang: Option<String>,
    dir: Option<TextDirection>,
    theme: Option<AppliedTheme>,
}

impl PresentationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `lang` attribute, once synced.
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// The `dir` attribute, once synced.
    pub fn dir(&self) -> Option<TextDirection> {
        self.dir
    }

    pub fn theme(&self) -> Option<&AppliedTheme> {
        self.theme.as_ref()
    }

    pub(crate) fn set_theme(&mut self, theme: AppliedTheme) {
        self.theme = Some(theme);
    }

    fn set_document_attributes(&mut self, state: &PresentationState) {
        self.lang = Some(state.language_tag.clone());
        self.dir = Some(state.text_direction);
    }
}

/// Writes the effective language tag and its direction to `context`.
///
/// Idempotent: the same locale always yields the same attributes.
pub fn apply(
    context: &mut PresentationContext,
    locale: &str,
    supported: &SupportedLocales,
) -> PresentationState {
    let state = PresentationState::for_locale(locale, supported);
    context.set_document_attributes(&state);
    debug!(lang = %state.language_tag, dir = %state.text_direction, "Synced document presentation");
    state
}
