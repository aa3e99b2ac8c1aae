//! # Console Rendering Module / 控制台渲染模块
//!
//! Prints the diagram as colored terminal text. The terminal lays itself out,
//! so this target mounts with the no-op layout stabilizer.
//!
//! 以彩色终端文本输出生命周期图。终端自行完成布局，
//! 因此该目标使用空操作的布局稳定器。

use colored::*;

use crate::core::controller::RootController;
use crate::core::locale::DEFAULT_LOCALE;
use crate::infra::t;
use crate::render::diagram::{DiagramModel, Phase, Stage};
use crate::render::{phase_label, phase_note, stage_label, triggers_line};

/// Renders the page as terminal text.
///
/// # Output Format / 输出格式
/// ```text
/// React lifecycle methods diagram
/// Language: en-US (ltr) | React version: 16.4 | Show less common lifecycles: no
///
/// "Render phase": Pure and has no side effects. ...
///   Mounting     constructor, render
///   Updating     render
///   Unmounting   -
/// ```
pub fn render_text(controller: &RootController) -> String {
    let locale = controller.presentation().lang().unwrap_or(DEFAULT_LOCALE);
    let dir = controller.presentation().dir().map(|d| d.as_str()).unwrap_or("ltr");
    let model = DiagramModel::build(&controller.diagram_props(), controller.versions());

    let yes_no = if model.advanced {
        t!("common.yes", locale = locale)
    } else {
        t!("common.no", locale = locale)
    };

    let mut lines = vec![
        t!("title", locale = locale).bold().to_string(),
        format!(
            "{}: {} ({}) | {}: {} | {}: {}",
            t!("options.locale", locale = locale),
            controller.locale().cyan(),
            dir,
            t!("options.version", locale = locale),
            controller.version_selection().cyan(),
            t!("options.advanced", locale = locale),
            yes_no.cyan(),
        ),
    ];

    if model.is_substituted() {
        lines.push(
            t!(
                "diagram.substituted",
                locale = locale,
                requested = &model.requested_version,
                shown = &model.version
            )
            .yellow()
            .to_string(),
        );
    }

    let width = Stage::ALL
        .iter()
        .map(|stage| stage_label(*stage, locale).chars().count())
        .max()
        .unwrap_or(0);

    for phase in &model.phases {
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            color_phase(*phase, &phase_label(*phase, locale)),
            phase_note(*phase, locale).dimmed()
        ));
        for stage in Stage::ALL {
            let methods: Vec<&str> = model.cell(stage, *phase).map(|m| m.name).collect();
            let cell = if methods.is_empty() {
                "-".dimmed().to_string()
            } else {
                methods.join(", ")
            };
            let label = stage_label(stage, locale);
            let padding = width.saturating_sub(label.chars().count());
            lines.push(format!("  {}{}   {}", label, " ".repeat(padding), cell));
        }
    }

    if model.advanced {
        lines.push(String::new());
        lines.push(triggers_line(model.derived_state_triggers, locale));
    }

    lines.push(String::new());
    lines.push(t!("footer.text", locale = locale).dimmed().to_string());
    lines.push(String::new());
    lines.join("\n")
}

fn color_phase(phase: Phase, label: &str) -> ColoredString {
    match phase {
        Phase::Render => label.blue().bold(),
        Phase::PreCommit => label.yellow().bold(),
        Phase::Commit => label.green().bold(),
    }
}
