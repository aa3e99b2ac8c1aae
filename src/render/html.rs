//! # HTML Rendering Module / HTML 渲染模块
//!
//! Renders the whole page as a standalone HTML document. The root `<html>`
//! element carries the synced `lang` and `dir` attributes, the applied theme
//! becomes CSS custom properties, and the browser-side layout stabilization
//! script is embedded at the end of the body.
//!
//! 将整个页面渲染为独立的 HTML 文档。根 `<html>` 元素带有同步后的
//! `lang` 和 `dir` 属性，已应用的主题转换为 CSS 自定义属性，
//! 浏览器端的布局稳定脚本嵌入在 body 末尾。

use maud::{html, Markup, PreEscaped, DOCTYPE};
use tracing::warn;

use crate::core::controller::{OptionsProps, RootController};
use crate::core::locale::{TextDirection, DEFAULT_LOCALE};
use crate::core::theme::{AppliedTheme, ThemePalette};
use crate::infra::t;
use crate::render::diagram::{DiagramModel, Stage};
use crate::render::{phase_label, phase_note, stage_label, triggers_line};

/// Embedded CSS styles for the page / 页面的嵌入式 CSS 样式
const PAGE_STYLE: &str = include_str!("assets/page.css");

/// Pins the root width for one animation frame after load / 加载后将根元素宽度固定一帧
const STABILIZE_SCRIPT: &str = include_str!("assets/stabilize.js");

/// Renders the page for the controller's current preferences and presentation context.
pub fn render_page(controller: &RootController) -> String {
    let presentation = controller.presentation();
    let locale = presentation.lang().unwrap_or(DEFAULT_LOCALE);
    let dir = presentation.dir().unwrap_or(TextDirection::Ltr);
    let title = t!("title", locale = locale).to_string();
    let model = DiagramModel::build(&controller.diagram_props(), controller.versions());

    let markup = html! {
        (DOCTYPE)
        html lang=(locale) dir=(dir.as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(PAGE_STYLE)) }
                @if let Some(theme) = presentation.theme() {
                    style #theme { (PreEscaped(theme_css(theme))) }
                }
            }
            body {
                div #root {
                    h1 { (title) }
                    (options_panel(&controller.options_props(), locale))
                    (diagram_view(&model, locale))
                    (footer(locale))
                }
                script { (PreEscaped(STABILIZE_SCRIPT)) }
            }
        }
    };
    markup.into_string()
}

fn options_panel(props: &OptionsProps, locale: &str) -> Markup {
    let unknown_version = !props.versions.contains(&props.react_version);
    html! {
        form.options {
            label {
                input type="checkbox" name="showAdvanced" checked[props.advanced] disabled;
                " " (t!("options.advanced", locale = locale).to_string())
            }
            label {
                (t!("options.locale", locale = locale).to_string()) " "
                select name="locale" disabled {
                    @for choice in &props.locales {
                        option value=(choice) selected[*choice == props.presented_locale] { (choice) }
                    }
                }
            }
            label {
                (t!("options.version", locale = locale).to_string()) " "
                select name="reactVersion" disabled {
                    @for choice in &props.versions {
                        option value=(choice) selected[*choice == props.react_version] { (choice) }
                    }
                    @if unknown_version {
                        option value=(props.react_version) selected { (props.react_version) }
                    }
                }
            }
            p.hint { (t!("options.hint", locale = locale).to_string()) }
        }
    }
}

fn diagram_view(model: &DiagramModel, locale: &str) -> Markup {
    html! {
        section.diagram data-version=(model.version) data-advanced=(model.advanced.to_string()) {
            @if model.is_substituted() {
                p.notice {
                    (t!(
                        "diagram.substituted",
                        locale = locale,
                        requested = &model.requested_version,
                        shown = &model.version
                    ).to_string())
                }
            }
            table {
                thead {
                    tr {
                        th {}
                        @for stage in Stage::ALL {
                            th scope="col" { (stage_label(stage, locale)) }
                        }
                    }
                }
                tbody {
                    @for phase in &model.phases {
                        tr class=(format!("phase phase-{}", kebab_case(phase.theme_role()))) {
                            th scope="row" {
                                (phase_label(*phase, locale))
                                br;
                                small { (phase_note(*phase, locale)) }
                            }
                            @for stage in Stage::ALL {
                                td {
                                    @for method in model.cell(stage, *phase) {
                                        code.method { (method.name) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            @if model.advanced {
                p.triggers { (triggers_line(model.derived_state_triggers, locale)) }
            }
        }
    }
}

fn footer(locale: &str) -> Markup {
    html! {
        footer {
            p { (t!("footer.text", locale = locale).to_string()) }
        }
    }
}

fn theme_css(theme: &AppliedTheme) -> String {
    match theme {
        AppliedTheme::Fixed(palette) => format!(":root {{ {} }}", palette_vars(palette)),
        AppliedTheme::FollowSystem { light, dark } => format!(
            ":root {{ {} }}\n@media (prefers-color-scheme: dark) {{ :root {{ {} }} }}",
            palette_vars(light),
            palette_vars(dark)
        ),
    }
}

fn palette_vars(palette: &ThemePalette) -> String {
    palette
        .iter()
        .filter(|(role, value)| {
            let safe = is_css_safe_role(role) && is_css_safe_value(value);
            if !safe {
                warn!(role, value, "Skipping theme entry that is not a plain CSS value");
            }
            safe
        })
        .map(|(role, value)| format!("--{}: {};", kebab_case(role), value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_css_safe_role(role: &str) -> bool {
    !role.is_empty() && role.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn is_css_safe_value(value: &str) -> bool {
    !value.trim().is_empty() && !value.chars().any(|c| matches!(c, '<' | '>' | '{' | '}' | ';'))
}

/// `preCommit` -> `pre-commit`
fn kebab_case(role: &str) -> String {
    let mut out = String::with_capacity(role.len() + 2);
    for c in role.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("preCommit"), "pre-commit");
        assert_eq!(kebab_case("background"), "background");
    }

    #[test]
    fn test_unsafe_theme_values_are_skipped() {
        let palette = ThemePalette::from_pairs([
            ("background", "white"),
            ("text", "red;}</style><script>"),
        ]);
        let vars = palette_vars(&palette);
        assert!(vars.contains("--background: white;"));
        assert!(!vars.contains("script"));
    }

    #[test]
    fn test_follow_system_emits_media_query() {
        let css = theme_css(&AppliedTheme::FollowSystem {
            light: ThemePalette::from_pairs([("background", "white")]),
            dark: ThemePalette::from_pairs([("background", "#24292E")]),
        });
        assert!(css.contains("prefers-color-scheme: dark"));
        assert!(css.contains("--background: #24292E;"));
    }
}
