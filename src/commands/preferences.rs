//! # Preference Commands / 偏好命令
//!
//! Non-interactive handlers for `show`, `toggle-advanced`, `set-locale` and
//! `set-version`.
//!
//! `show`、`toggle-advanced`、`set-locale` 和 `set-version` 的非交互式处理函数。

use anyhow::Result;
use colored::*;

use crate::commands::{open_controller, ui_locale, GlobalOptions};
use crate::infra::t;

/// Prints the current preference values and the derived presentation state.
pub fn show(global: &GlobalOptions) -> Result<()> {
    let controller = open_controller(global);
    let locale = ui_locale(&controller);
    let state = controller.presentation_state();

    let yes_no = if controller.advanced() {
        t!("common.yes", locale = &locale)
    } else {
        t!("common.no", locale = &locale)
    };

    println!("{}", t!("show.banner", locale = &locale).bold());
    println!(
        "  {:<28} {}",
        t!("show.storage", locale = &locale),
        global.storage_label(&locale)
    );
    println!(
        "  {:<28} {}",
        t!("options.advanced", locale = &locale),
        yes_no.cyan()
    );
    println!(
        "  {:<28} {}",
        t!("options.locale", locale = &locale),
        controller.locale().cyan()
    );
    println!(
        "  {:<28} {} ({})",
        t!("show.document", locale = &locale),
        state.language_tag.cyan(),
        state.text_direction
    );
    println!(
        "  {:<28} {}",
        t!("options.version", locale = &locale),
        controller.version_selection().cyan()
    );
    println!(
        "  {:<28} {}",
        t!("show.supported_locales", locale = &locale),
        controller.supported_locales().as_slice().join(", ").dimmed()
    );
    println!(
        "  {:<28} {}",
        t!("show.supported_versions", locale = &locale),
        controller.versions().as_slice().join(", ").dimmed()
    );
    Ok(())
}

pub fn toggle_advanced(global: &GlobalOptions) -> Result<()> {
    let mut controller = open_controller(global);
    let advanced = controller.toggle_advanced_mode();
    let locale = ui_locale(&controller);
    let message = if advanced {
        t!("messages.advanced_on", locale = &locale)
    } else {
        t!("messages.advanced_off", locale = &locale)
    };
    println!("{}", message.green());
    Ok(())
}

/// Stores the raw selection. Unsupported tags are kept but displayed in the default locale.
pub fn set_locale(global: &GlobalOptions, requested: &str) -> Result<()> {
    let mut controller = open_controller(global);
    let supported = controller.supported_locales().contains(requested);
    controller.set_locale(requested);

    let state = controller.presentation_state();
    let locale = ui_locale(&controller);
    println!(
        "{}",
        t!(
            "messages.locale_set",
            locale = &locale,
            value = requested,
            dir = state.text_direction
        )
        .green()
    );
    if !supported {
        println!(
            "{}",
            t!(
                "messages.locale_unsupported",
                locale = &locale,
                value = requested,
                fallback = &state.language_tag
            )
            .yellow()
        );
    }
    Ok(())
}

/// Stores the raw selection without validation.
pub fn set_version(global: &GlobalOptions, requested: &str) -> Result<()> {
    let mut controller = open_controller(global);
    let known = controller.versions().contains(requested);
    controller.set_version_selection(requested);

    let locale = ui_locale(&controller);
    println!(
        "{}",
        t!("messages.version_set", locale = &locale, value = requested).green()
    );
    if !known {
        println!(
            "{}",
            t!(
                "messages.version_unknown",
                locale = &locale,
                value = requested,
                latest = controller.versions().latest()
            )
            .yellow()
        );
    }
    Ok(())
}
