//! # Root Controller / 根控制器
//!
//! Owns the three persisted preferences (advanced mode, locale, version
//! selection), the document presentation context, and the handlers that child
//! views call to change them.
//!
//! 拥有三个持久化偏好（高级模式、语言环境、版本选择）、文档呈现上下文，
//! 以及子视图调用以修改它们的处理函数。

use serde::Serialize;
use tracing::{debug, info};

use crate::core::flag::FlagPreference;
use crate::core::layout::LayoutStabilizer;
use crate::core::locale::{resolve_initial_locale, SupportedLocales, DEFAULT_LOCALE};
use crate::core::presentation::{self, PresentationContext, PresentationState};
use crate::core::store::{self, Preference, PreferenceStore};
use crate::core::theme::{ThemeMode, ThemeProvider};
use crate::core::update::Update;
use crate::core::versions::VersionSet;

/// Props handed to the diagram view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramProps {
    pub advanced: bool,
    pub react_version: String,
}

/// Props handed to the options panel, along with the choices it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionsProps {
    pub advanced: bool,
    /// The stored locale, possibly unsupported.
    pub locale: String,
    /// The locale the document is shown in; the one to preselect.
    pub presented_locale: String,
    pub react_version: String,
    pub locales: Vec<String>,
    pub versions: Vec<String>,
}

impl OptionsProps {
    /// Index of the presented locale in `locales`.
    pub fn locale_index(&self) -> usize {
        self.locales
            .iter()
            .position(|l| *l == self.presented_locale)
            .unwrap_or(0)
    }

    /// Index of the selected version, or the newest one when the selection is unknown.
    pub fn version_index(&self) -> usize {
        self.versions
            .iter()
            .position(|v| *v == self.react_version)
            .unwrap_or(self.versions.len().saturating_sub(1))
    }
}

pub struct RootController {
    store: PreferenceStore,
    locales: SupportedLocales,
    versions: VersionSet,
    presentation: PresentationContext,
    advanced: FlagPreference,
    locale: Preference,
    version: Preference,
    /// Locale the presentation context was last synced with.
    synced_locale: Option<String>,
    mounted: bool,
}

impl RootController {
    /// Resolves the initial preference values and syncs the document once, before any render.
    pub fn new<S: AsRef<str>>(
        store: PreferenceStore,
        locales: SupportedLocales,
        versions: VersionSet,
        preferred_languages: &[S],
    ) -> Self {
        let initial_locale = resolve_initial_locale(&store, &locales, preferred_languages)
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let mut presentation = PresentationContext::new();
        presentation::apply(&mut presentation, &initial_locale, &locales);

        let advanced = FlagPreference::load(&store, store::SHOW_ADVANCED, false);
        let locale = Preference::load(&store, store::LOCALE, initial_locale.as_str());
        let version = Preference::load(&store, store::REACT_VERSION, versions.latest());

        debug!(
            advanced = advanced.get(),
            locale = %locale.text(),
            version = %version.text(),
            "Loaded preferences"
        );

        Self {
            store,
            locales,
            versions,
            presentation,
            advanced,
            locale,
            version,
            synced_locale: Some(initial_locale),
            mounted: false,
        }
    }

    pub fn advanced(&self) -> bool {
        self.advanced.get()
    }

    /// The locale preference as stored; may be unsupported. See [`presentation_state`](Self::presentation_state).
    pub fn locale(&self) -> String {
        self.locale.text()
    }

    pub fn version_selection(&self) -> String {
        self.version.text()
    }

    pub fn supported_locales(&self) -> &SupportedLocales {
        &self.locales
    }

    pub fn versions(&self) -> &VersionSet {
        &self.versions
    }

    pub fn presentation(&self) -> &PresentationContext {
        &self.presentation
    }

    /// The effective language tag and direction for the current locale.
    pub fn presentation_state(&self) -> PresentationState {
        PresentationState::for_locale(&self.locale.text(), &self.locales)
    }

    /// Flips advanced mode through a functional update and returns the new value.
    pub fn toggle_advanced_mode(&mut self) -> bool {
        let advanced = self
            .advanced
            .update(&mut self.store, Update::with(|previous: bool| !previous));
        info!(advanced, "Toggled advanced mode");
        advanced
    }

    pub fn set_advanced(&mut self, advanced: bool) {
        self.advanced.update(&mut self.store, advanced);
    }

    /// Accepts and persists the raw selection, then re-syncs the document if the locale changed.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        let locale = locale.into();
        self.locale.replace(&mut self.store, locale);
        self.run_locale_effect();
    }

    /// Persists the raw selection. Interpreting unknown versions is the diagram's job.
    pub fn set_version_selection(&mut self, version: impl Into<String>) {
        let version = version.into();
        if !self.versions.contains(&version) {
            debug!(%version, "Version is not in the supported set, storing anyway");
        }
        self.version.replace(&mut self.store, version);
    }

    /// Hands the theme pair and the dark-mode signal to the theme provider.
    pub fn apply_theme(&mut self, provider: &ThemeProvider, mode: ThemeMode) {
        provider.apply(&mut self.presentation, mode);
    }

    /// Runs the locale effect and the layout stabilization hook. Returns `false` if already mounted.
    pub fn mount(&mut self, stabilizer: &dyn LayoutStabilizer) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.run_locale_effect();
        stabilizer.on_mount();
        true
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn diagram_props(&self) -> DiagramProps {
        DiagramProps {
            advanced: self.advanced(),
            react_version: self.version_selection(),
        }
    }

    pub fn options_props(&self) -> OptionsProps {
        OptionsProps {
            advanced: self.advanced(),
            locale: self.locale(),
            presented_locale: self.presentation_state().language_tag,
            react_version: self.version_selection(),
            locales: self.locales.as_slice().to_vec(),
            versions: self.versions.as_slice().to_vec(),
        }
    }

    /// Effect keyed on the locale: re-syncs only when the committed locale differs.
    fn run_locale_effect(&mut self) {
        let current = self.locale.text();
        if self.synced_locale.as_deref() == Some(current.as_str()) {
            return;
        }
        presentation::apply(&mut self.presentation, &current, &self.locales);
        self.synced_locale = Some(current);
    }
}
