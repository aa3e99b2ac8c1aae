//! # Infrastructure Module / 基础设施模块
//!
//! Host-facing services: the preference file, environment language
//! detection, logging setup, and i18n support.
//!
//! 面向宿主的服务：偏好文件、环境语言检测、日志设置和国际化支持。

pub mod environment;
pub mod logging;
pub mod storage;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
