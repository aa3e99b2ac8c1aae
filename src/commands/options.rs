//! # Options Panel Command / 选项面板命令
//!
//! Interactive options panel: a confirm widget for advanced mode and select
//! widgets for locale and version. Each changed answer goes through the same
//! controller handler the non-interactive commands use.
//!
//! 交互式选项面板：高级模式使用确认控件，语言环境和版本使用选择控件。
//! 每个被修改的答案都通过与非交互式命令相同的控制器处理函数。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::commands::{open_controller, ui_locale, GlobalOptions};
use crate::infra::t;

pub fn run_options_panel(global: &GlobalOptions) -> Result<()> {
    let mut controller = open_controller(global);
    let theme = ColorfulTheme::default();
    let locale = ui_locale(&controller);
    let props = controller.options_props();

    println!("\n{}", t!("options_panel.welcome", locale = &locale).cyan().bold());
    println!("{}\n", t!("options_panel.description", locale = &locale));

    let advanced = Confirm::with_theme(&theme)
        .with_prompt(t!("options.advanced", locale = &locale))
        .default(props.advanced)
        .interact()
        .context(t!("options_panel.input_failed", locale = &locale).to_string())?;
    if advanced != props.advanced {
        controller.toggle_advanced_mode();
    }

    let locale_index = Select::with_theme(&theme)
        .with_prompt(t!("options.locale", locale = &locale))
        .items(&props.locales)
        .default(props.locale_index())
        .interact()
        .context(t!("options_panel.input_failed", locale = &locale).to_string())?;
    // Stale selections are preselected as their fallback; only moving off it saves.
    if locale_index != props.locale_index() {
        controller.set_locale(props.locales[locale_index].as_str());
    }

    let version_index = Select::with_theme(&theme)
        .with_prompt(t!("options.version", locale = &locale))
        .items(&props.versions)
        .default(props.version_index())
        .interact()
        .context(t!("options_panel.input_failed", locale = &locale).to_string())?;
    if version_index != props.version_index() {
        controller.set_version_selection(props.versions[version_index].as_str());
    }

    // Confirm in the language just chosen.
    let locale = ui_locale(&controller);
    println!("\n{}", t!("options_panel.saved", locale = &locale).green());
    Ok(())
}
