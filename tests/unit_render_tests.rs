//! # Rendering Unit Tests / 渲染单元测试
//!
//! The lifecycle diagram model and the HTML and text renderers.
//!
//! 测试生命周期图模型以及 HTML 和文本渲染器。

mod common;

use lifecycle_diagram::core::layout::NoopStabilizer;
use lifecycle_diagram::core::{
    DiagramProps, ThemeMode, ThemePair, ThemeProvider, VersionSet,
};
use lifecycle_diagram::render::diagram::{DiagramModel, Phase, Stage, UpdateTrigger};
use lifecycle_diagram::render::{render_page, render_text};

fn props(advanced: bool, version: &str) -> DiagramProps {
    DiagramProps {
        advanced,
        react_version: version.to_string(),
    }
}

fn names(model: &DiagramModel, stage: Stage, phase: Phase) -> Vec<&'static str> {
    model.cell(stage, phase).map(|m| m.name).collect()
}

#[cfg(test)]
mod model_tests {
    use super::*;

    #[test]
    fn test_basic_mode_hides_uncommon_methods() {
        let model = DiagramModel::build(&props(false, "16.4"), &VersionSet::builtin());

        assert_eq!(model.phases, vec![Phase::Render, Phase::Commit]);
        assert_eq!(names(&model, Stage::Mounting, Phase::Render), vec!["constructor", "render"]);
        assert_eq!(names(&model, Stage::Updating, Phase::Render), vec!["render"]);
        assert_eq!(names(&model, Stage::Unmounting, Phase::Commit), vec!["componentWillUnmount"]);
        assert!(model.methods.iter().all(|m| !m.advanced_only));
    }

    #[test]
    fn test_advanced_mode_shows_every_phase() {
        let model = DiagramModel::build(&props(true, "16.4"), &VersionSet::builtin());

        assert_eq!(model.phases, Phase::ALL.to_vec());
        assert_eq!(
            names(&model, Stage::Updating, Phase::Render),
            vec!["getDerivedStateFromProps", "shouldComponentUpdate", "render"]
        );
        assert_eq!(
            names(&model, Stage::Updating, Phase::PreCommit),
            vec!["getSnapshotBeforeUpdate"]
        );
    }

    #[test]
    fn test_derived_state_triggers_by_version() {
        let old = DiagramModel::build(&props(true, "16.3"), &VersionSet::builtin());
        assert_eq!(old.derived_state_triggers, &[UpdateTrigger::NewProps]);

        let new = DiagramModel::build(&props(true, "16.4"), &VersionSet::builtin());
        assert_eq!(new.derived_state_triggers.len(), 3);
    }

    #[test]
    fn test_unknown_version_draws_newest() {
        let model = DiagramModel::build(&props(false, "17.0"), &VersionSet::builtin());
        assert_eq!(model.version, "16.4");
        assert_eq!(model.requested_version, "17.0");
        assert!(model.is_substituted());

        let known = DiagramModel::build(&props(false, "16.3"), &VersionSet::builtin());
        assert!(!known.is_substituted());
    }
}

#[cfg(test)]
mod html_tests {
    use super::*;

    #[test]
    fn test_root_carries_lang_and_dir() {
        let mut controller = common::controller(common::memory_store(), &["en-US"]);
        controller.set_locale("ar");
        controller.mount(&NoopStabilizer);

        let page = render_page(&controller);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<html lang="ar" dir="rtl">"#));
    }

    #[test]
    fn test_unsupported_locale_renders_default_language() {
        let mut controller = common::controller(common::memory_store(), &["en-US"]);
        controller.set_locale("xx-XX");

        let page = render_page(&controller);
        assert!(page.contains(r#"<html lang="en-US" dir="ltr">"#));
        assert!(page.contains("React lifecycle methods diagram"));
    }

    #[test]
    fn test_stale_locale_selects_fallback_option() {
        let store = common::store_with(vec![(
            lifecycle_diagram::core::store::LOCALE,
            lifecycle_diagram::core::StoredValue::from("xx-XX"),
        )]);
        let page = render_page(&common::controller(store, &["en-US"]));

        assert!(page.contains(r#"<html lang="en-US" dir="ltr">"#));
        assert!(page.contains(r#"<option value="en-US" selected>"#));
        assert!(!page.contains(r#"<option value="ar" selected>"#));
    }

    #[test]
    fn test_page_is_translated() {
        let controller = common::controller(common::memory_store(), &["zh-CN"]);
        let page = render_page(&controller);
        assert!(page.contains("React 生命周期方法图"));
    }

    #[test]
    fn test_advanced_mode_in_page() {
        let mut controller = common::controller(common::memory_store(), &["en-US"]);
        let basic = render_page(&controller);
        assert!(!basic.contains("getSnapshotBeforeUpdate"));
        assert!(basic.contains(r#"data-advanced="false""#));

        controller.toggle_advanced_mode();
        let advanced = render_page(&controller);
        assert!(advanced.contains("getSnapshotBeforeUpdate"));
        assert!(advanced.contains("phase-pre-commit"));
        assert!(advanced.contains("setState()"));
    }

    #[test]
    fn test_unknown_version_notice() {
        let mut controller = common::controller(common::memory_store(), &["en-US"]);
        controller.set_version_selection("99.0");

        let page = render_page(&controller);
        assert!(page.contains("Version 99.0 is not known"));
        assert!(page.contains(r#"data-version="16.4""#));
        assert!(page.contains(r#"<option value="99.0" selected>"#));
    }

    #[test]
    fn test_theme_and_stabilizer_script() {
        let mut controller = common::controller(common::memory_store(), &["en-US"]);
        let without_theme = render_page(&controller);
        assert!(!without_theme.contains(r#"id="theme""#));

        controller.apply_theme(&ThemeProvider::new(ThemePair::builtin()), ThemeMode::Dark);
        let page = render_page(&controller);
        assert!(page.contains("--background: #24292E;"));
        assert!(page.contains("--pre-commit: #24292E;"));
        assert!(page.contains("requestAnimationFrame"));
    }
}

#[cfg(test)]
mod text_tests {
    use super::*;

    #[test]
    fn test_text_lists_methods_and_preferences() {
        colored::control::set_override(false);
        let mut controller = common::controller(common::memory_store(), &["en-US"]);
        controller.set_version_selection("16.3");
        controller.toggle_advanced_mode();

        let text = render_text(&controller);
        assert!(text.starts_with("React lifecycle methods diagram"));
        assert!(text.contains("Language: en-US (ltr)"));
        assert!(text.contains("React version: 16.3"));
        assert!(text.contains("Show less common lifecycles: yes"));
        assert!(text.contains("getDerivedStateFromProps, shouldComponentUpdate, render"));
        assert!(text.contains("Updates are triggered by: New props"));
        assert!(!text.contains("setState()"));
    }

    #[test]
    fn test_text_follows_direction() {
        colored::control::set_override(false);
        let controller = common::controller(common::memory_store(), &["fa"]);
        let text = render_text(&controller);
        assert!(text.contains("fa-IR (rtl)"));
        assert!(text.contains("نمودار متدهای چرخه حیات React"));
    }
}
