//! # Commands Module / 命令模块
//!
//! One submodule per CLI subcommand, plus the shared startup path that wires
//! the preference store, environment languages and root controller together.
//!
//! 每个 CLI 子命令对应一个子模块，以及将偏好存储、环境语言和根控制器
//! 组装在一起的共享启动路径。

pub mod options;
pub mod preferences;
pub mod render;

use std::path::PathBuf;
use tracing::debug;

use crate::core::{
    MemoryMedium, PreferenceStore, RootController, SupportedLocales, VersionSet, DEFAULT_LOCALE,
};
use crate::infra::storage::{resolve_storage_path, JsonFileMedium};
use crate::infra::t;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit preference file, overriding the environment and the default location.
    pub storage: Option<PathBuf>,
    /// Keep preferences in memory for this run only.
    pub ephemeral: bool,
    /// The environment's preferred languages, read once at startup.
    pub languages: Vec<String>,
}

impl GlobalOptions {
    /// Where preferences live, for display.
    pub fn storage_label(&self, locale: &str) -> String {
        if self.ephemeral {
            t!("show.ephemeral", locale = locale).to_string()
        } else {
            resolve_storage_path(self.storage.as_deref()).display().to_string()
        }
    }
}

/// Builds the root controller: resolves initial preferences and syncs the document once.
pub fn open_controller(global: &GlobalOptions) -> RootController {
    let store = if global.ephemeral {
        debug!("Using session-only preference storage");
        PreferenceStore::new(MemoryMedium::new())
    } else {
        let path = resolve_storage_path(global.storage.as_deref());
        debug!(path = %path.display(), "Using preference file");
        PreferenceStore::new(JsonFileMedium::open(path))
    };

    RootController::new(
        store,
        SupportedLocales::builtin(),
        VersionSet::builtin(),
        &global.languages,
    )
}

/// Language for help text, before any preference is loaded.
pub fn detected_locale(languages: &[String]) -> String {
    SupportedLocales::builtin()
        .matching(languages)
        .unwrap_or(DEFAULT_LOCALE)
        .to_string()
}

/// The synced document language, used for CLI messages too.
pub(crate) fn ui_locale(controller: &RootController) -> String {
    controller
        .presentation()
        .lang()
        .unwrap_or(DEFAULT_LOCALE)
        .to_string()
}
