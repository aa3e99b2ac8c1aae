//! # Version Set / 版本集合
//!
//! Feature-set versions the diagram can be drawn for.
//!
//! 图表可绘制的功能集版本。

use crate::error::ConfigError;

/// Feature-set versions the diagram knows about, oldest first.
pub const BUILTIN_VERSIONS: &[&str] = &["16.3", "16.4"];

/// Ordered, non-empty version list. The last entry is the newest and the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSet(Vec<String>);

impl VersionSet {
    pub fn new<I, S>(versions: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let versions: Vec<String> = versions.into_iter().map(Into::into).collect();
        if versions.is_empty() {
            return Err(ConfigError::EmptyVersionSet);
        }
        Ok(Self(versions))
    }

    pub fn builtin() -> Self {
        Self(BUILTIN_VERSIONS.iter().map(|v| v.to_string()).collect())
    }

    pub fn latest(&self) -> &str {
        // Non-empty by construction.
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    pub fn contains(&self, version: &str) -> bool {
        self.0.iter().any(|v| v == version)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
