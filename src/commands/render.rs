//! # Render Command / 渲染命令
//!
//! Renders the page as HTML or terminal text, to a file or stdout.
//!
//! 将页面渲染为 HTML 或终端文本，输出到文件或标准输出。

use anyhow::{anyhow, Context, Result};
use colored::*;
use std::path::PathBuf;
use std::str::FromStr;
use tokio::io::AsyncWriteExt;

use crate::commands::{open_controller, ui_locale, GlobalOptions};
use crate::core::layout::NoopStabilizer;
use crate::core::{ThemeMode, ThemePair, ThemeProvider};
use crate::infra::t;
use crate::render::{render_page, render_text};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "html" => Ok(OutputFormat::Html),
            "text" => Ok(OutputFormat::Text),
            other => Err(anyhow!("unknown output format '{}'", other)),
        }
    }
}

/// Arguments of the `render` subcommand.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub theme: ThemeMode,
    pub theme_file: Option<PathBuf>,
}

pub async fn execute(global: &GlobalOptions, args: RenderArgs) -> Result<()> {
    let mut controller = open_controller(global);
    let locale = ui_locale(&controller);

    let pair = match &args.theme_file {
        Some(path) => ThemePair::load(path).with_context(|| {
            t!("messages.theme_file_invalid", locale = &locale, path = path.display()).to_string()
        })?,
        None => ThemePair::builtin(),
    };
    controller.apply_theme(&ThemeProvider::new(pair), args.theme);

    // Static output: browsers run the embedded stabilization script themselves.
    controller.mount(&NoopStabilizer);

    if args.output.is_some() && args.format == OutputFormat::Text {
        colored::control::set_override(false);
    }
    let rendered = match args.format {
        OutputFormat::Html => render_page(&controller),
        OutputFormat::Text => render_text(&controller),
    };

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, rendered).await.with_context(|| {
                t!("messages.write_failed", locale = &locale, path = path.display()).to_string()
            })?;
            println!(
                "{}",
                t!("messages.render_written", locale = &locale, path = path.display()).green()
            );
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(rendered.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
