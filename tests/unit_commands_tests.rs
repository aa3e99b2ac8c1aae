//! # Command Setup Unit Tests / 命令启动单元测试
//!
//! The startup path uses the language list read once by the CLI.
//!
//! 启动路径使用 CLI 只读取一次的语言列表。

use lifecycle_diagram::commands::{detected_locale, open_controller, GlobalOptions};

fn languages(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod startup_tests {
    use super::*;

    #[test]
    fn test_controller_uses_given_languages() {
        let global = GlobalOptions {
            ephemeral: true,
            languages: languages(&["fa-IR"]),
            ..GlobalOptions::default()
        };
        let controller = open_controller(&global);
        assert_eq!(controller.locale(), "fa-IR");
        assert_eq!(controller.presentation().lang(), Some("fa-IR"));
    }

    #[test]
    fn test_help_locale_from_given_languages() {
        assert_eq!(detected_locale(&languages(&["de-AT"])), "de-DE");
        assert_eq!(detected_locale(&languages(&["ja-JP"])), "en-US");
        assert_eq!(detected_locale(&[]), "en-US");
    }

    #[test]
    fn test_help_and_controller_agree() {
        let global = GlobalOptions {
            ephemeral: true,
            languages: languages(&["pl"]),
            ..GlobalOptions::default()
        };
        assert_eq!(detected_locale(&global.languages), open_controller(&global).locale());
    }
}
