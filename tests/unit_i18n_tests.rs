//! # I18n Unit Tests / I18n 单元测试
//!
//! Every supported locale ships a translation catalogue, and pages render in
//! the synced document language.
//!
//! 每个受支持的语言环境都带有翻译目录，页面以同步后的文档语言渲染。

mod common;

use lifecycle_diagram::core::locale::BUILTIN_LOCALES;
use lifecycle_diagram::render::render_page;
use lifecycle_diagram::translated_locales;

#[cfg(test)]
mod catalogue_tests {
    use super::*;

    #[test]
    fn test_every_supported_locale_is_translated() {
        let translated = translated_locales();
        for locale in BUILTIN_LOCALES {
            assert!(translated.contains(locale), "missing catalogue for {}", locale);
        }
    }

    #[test]
    fn test_each_locale_has_its_own_title() {
        let english = render_page(&common::controller(common::memory_store(), &["en-US"]));
        for locale in BUILTIN_LOCALES.iter().filter(|l| **l != "en-US") {
            let page = render_page(&common::controller(common::memory_store(), &[*locale]));
            let title = |page: &str| {
                page.split("<title>")
                    .nth(1)
                    .and_then(|rest| rest.split("</title>").next())
                    .map(str::to_string)
            };
            assert_ne!(title(&page), title(&english), "{} shows the English title", locale);
        }
    }
}

#[cfg(test)]
mod language_tests {
    use super::*;

    #[test]
    fn test_french() {
        let page = render_page(&common::controller(common::memory_store(), &["fr-FR"]));
        assert!(page.contains("Diagramme des méthodes de cycle de vie React"));
        assert!(page.contains("Montage"));
    }

    #[test]
    fn test_german_from_regional_variant() {
        let page = render_page(&common::controller(common::memory_store(), &["de-CH"]));
        assert!(page.contains(r#"lang="de-DE""#));
        assert!(page.contains("Einhängen"));
    }

    #[test]
    fn test_arabic_is_right_to_left() {
        let page = render_page(&common::controller(common::memory_store(), &["ar"]));
        assert!(page.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(page.contains("مخطط توابع دورة حياة React"));
    }
}
