//! # Lifecycle Diagram Library / 生命周期图库
//!
//! This library provides the root state-sync layer of the lifecycle diagram
//! tool: persisted user preferences, locale resolution, document language and
//! direction sync, theming, and the root controller that ties them together.
//!
//! 此库提供生命周期图工具的根状态同步层：持久化的用户偏好、语言环境解析、
//! 文档语言与书写方向同步、主题，以及将它们组合在一起的根控制器。
//!
//! ## Modules / 模块
//!
//! - `core` - Preference store, flags, locales, presentation sync and the root controller
//! - `infra` - File-backed storage, environment languages and logging
//! - `render` - Diagram model and HTML / terminal renderers
//! - `commands` - Subcommand handlers
//! - `cli` - Command-line interface
//!
//! - `core` - 偏好存储、布尔标志、语言环境、呈现同步和根控制器
//! - `infra` - 基于文件的存储、环境语言和日志
//! - `render` - 图表模型以及 HTML / 终端渲染器
//! - `commands` - 子命令处理函数
//! - `cli` - 命令行接口

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod infra;
pub mod render;

// Re-export commonly used items
pub use crate::core::{PreferenceStore, RootController, SupportedLocales, VersionSet};
pub use crate::error::{ConfigError, StorageError};

/// Locales that ship a translation catalogue.
pub fn translated_locales() -> Vec<&'static str> {
    rust_i18n::available_locales!()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en-US");
