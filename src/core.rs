//! # Core Module / 核心模块
//!
//! The preference and state-synchronization layer: persisted preferences,
//! locale resolution, document presentation sync, and the root controller
//! that ties them together.
//!
//! 偏好与状态同步层：持久化偏好、语言环境解析、文档呈现同步，
//! 以及将它们组合在一起的根控制器。

pub mod controller;
pub mod flag;
pub mod layout;
pub mod locale;
pub mod presentation;
pub mod store;
pub mod theme;
pub mod update;
pub mod versions;

// Re-exports
pub use controller::{DiagramProps, OptionsProps, RootController};
pub use locale::{SupportedLocales, TextDirection, DEFAULT_LOCALE};
pub use presentation::{PresentationContext, PresentationState};
pub use store::{MemoryMedium, PreferenceStore, StorageMedium, StoredValue};
pub use theme::{ThemeMode, ThemePair, ThemeProvider};
pub use update::Update;
pub use versions::VersionSet;
