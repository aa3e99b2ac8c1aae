//! # Rendering Module / 渲染模块
//!
//! Default implementations of the views the root controller composes:
//! options panel, lifecycle diagram and footer, as an HTML document or as
//! terminal output.
//!
//! 根控制器所组合视图的默认实现：选项面板、生命周期图和页脚，
//! 可输出为 HTML 文档或终端文本。

pub mod console;
pub mod diagram;
pub mod html;

use crate::infra::t;
use diagram::{Phase, Stage, UpdateTrigger};

// Re-export common rendering functions
pub use console::render_text;
pub use html::render_page;

pub(crate) fn stage_label(stage: Stage, locale: &str) -> String {
    match stage {
        Stage::Mounting => t!("diagram.stage.mounting", locale = locale).to_string(),
        Stage::Updating => t!("diagram.stage.updating", locale = locale).to_string(),
        Stage::Unmounting => t!("diagram.stage.unmounting", locale = locale).to_string(),
    }
}

pub(crate) fn phase_label(phase: Phase, locale: &str) -> String {
    match phase {
        Phase::Render => t!("diagram.phase.render", locale = locale).to_string(),
        Phase::PreCommit => t!("diagram.phase.pre_commit", locale = locale).to_string(),
        Phase::Commit => t!("diagram.phase.commit", locale = locale).to_string(),
    }
}

pub(crate) fn phase_note(phase: Phase, locale: &str) -> String {
    match phase {
        Phase::Render => t!("diagram.phase_note.render", locale = locale).to_string(),
        Phase::PreCommit => t!("diagram.phase_note.pre_commit", locale = locale).to_string(),
        Phase::Commit => t!("diagram.phase_note.commit", locale = locale).to_string(),
    }
}

pub(crate) fn trigger_label(trigger: UpdateTrigger, locale: &str) -> String {
    match trigger {
        UpdateTrigger::NewProps => t!("diagram.trigger.new_props", locale = locale).to_string(),
        UpdateTrigger::SetState => "setState()".to_string(),
        UpdateTrigger::ForceUpdate => "forceUpdate()".to_string(),
    }
}

pub(crate) fn triggers_line(triggers: &[UpdateTrigger], locale: &str) -> String {
    let joined = triggers
        .iter()
        .map(|trigger| trigger_label(*trigger, locale))
        .collect::<Vec<_>>()
        .join(", ");
    t!("diagram.triggers", locale = locale, triggers = joined).to_string()
}
