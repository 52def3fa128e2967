//! Host page and global stylesheet.

use pagesmith_core::domain::{Bundler, ComponentNode, ExportConfig, Styling, capabilities};

use super::markup::{escape_html, seo_head_tags};

/// `<stem>.css` or `<stem>.scss`, per the styling choice.
pub fn stylesheet_path(stem: &str, config: &ExportConfig) -> String {
    format!("{stem}.{}", config.styling().stylesheet_extension())
}

/// Global stylesheet shared by all components.
pub fn global_stylesheet(config: &ExportConfig) -> String {
    let mut lines = Vec::new();

    match config.styling() {
        Styling::Tailwind => {
            lines.push("@tailwind base;".to_string());
            lines.push("@tailwind components;".to_string());
            lines.push("@tailwind utilities;".to_string());
        }
        Styling::Scss => {
            lines.push("$font-stack: system-ui, -apple-system, sans-serif;".to_string());
            lines.push("$focus-color: #2563eb;".to_string());
            lines.push(String::new());
            lines.extend(reset("$font-stack"));
        }
        Styling::Css | Styling::CssModules | Styling::StyledComponents => {
            lines.extend(reset("system-ui, -apple-system, sans-serif"));
        }
    }

    if config.accessibility() {
        let focus = if config.styling() == Styling::Scss {
            "$focus-color"
        } else {
            "#2563eb"
        };
        lines.push(String::new());
        lines.push(":focus-visible {".to_string());
        lines.push(format!("  outline: 2px solid {focus};"));
        lines.push("  outline-offset: 2px;".to_string());
        lines.push("}".to_string());
        lines.push(String::new());
        lines.push(".sr-only {".to_string());
        lines.push("  position: absolute;".to_string());
        lines.push("  width: 1px;".to_string());
        lines.push("  height: 1px;".to_string());
        lines.push("  overflow: hidden;".to_string());
        lines.push("  clip: rect(0, 0, 0, 0);".to_string());
        lines.push("  white-space: nowrap;".to_string());
        lines.push("}".to_string());
        lines.push(String::new());
        lines.push("@media (prefers-reduced-motion: reduce) {".to_string());
        lines.push("  * {".to_string());
        lines.push("    animation: none !important;".to_string());
        lines.push("    transition: none !important;".to_string());
        lines.push("  }".to_string());
        lines.push("}".to_string());
    }

    if config.performance() {
        lines.push(String::new());
        lines.push("img {".to_string());
        lines.push("  max-width: 100%;".to_string());
        lines.push("  height: auto;".to_string());
        lines.push("}".to_string());
    }

    lines.join("\n") + "\n"
}

fn reset(font_stack: &str) -> Vec<String> {
    vec![
        "*, *::before, *::after {".to_string(),
        "  box-sizing: border-box;".to_string(),
        "}".to_string(),
        String::new(),
        "body {".to_string(),
        "  margin: 0;".to_string(),
        format!("  font-family: {font_stack};"),
        "  line-height: 1.5;".to_string(),
        "}".to_string(),
    ]
}

/// Module script loading the entry point from the host page.
///
/// Webpack injects its own bundle, so there is no tag for it.
pub fn entry_script(config: &ExportConfig) -> Option<String> {
    let entry = capabilities::entry_point(config.framework(), config.typescript());
    let src = match config.bundler() {
        Bundler::Vite => format!("/{entry}"),
        Bundler::Parcel => format!("./{entry}"),
        Bundler::Webpack => return None,
    };
    Some(format!("<script type=\"module\" src=\"{src}\"></script>"))
}

/// A complete HTML document.
///
/// The `<head>` carries SEO tags when enabled, otherwise just the project
/// name as title; `head` and `body` lines are appended as given.
pub fn host_page(
    config: &ExportConfig,
    nodes: &[ComponentNode],
    head: &[String],
    body: &[String],
) -> String {
    let mut lines = vec![
        "<!doctype html>".to_string(),
        "<html lang=\"en\">".to_string(),
        "  <head>".to_string(),
        "    <meta charset=\"UTF-8\" />".to_string(),
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />".to_string(),
    ];

    let title_tags = if config.seo() {
        seo_head_tags(nodes, config.project_name())
    } else {
        vec![format!("<title>{}</title>", escape_html(config.project_name()))]
    };
    lines.extend(title_tags.into_iter().map(|t| format!("    {t}")));
    lines.extend(head.iter().map(|t| format!("    {t}")));

    lines.push("  </head>".to_string());
    lines.push("  <body>".to_string());
    lines.extend(body.iter().map(|l| format!("    {l}")));
    lines.push("  </body>".to_string());
    lines.push("</html>".to_string());

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_core::domain::{Framework, SeoData};

    fn config(styling: Styling, seo: bool) -> ExportConfig {
        ExportConfig::builder()
            .framework(Framework::Vue)
            .styling(styling)
            .seo(seo)
            .build()
            .unwrap()
    }

    #[test]
    fn tailwind_stylesheet_has_directives() {
        let css = global_stylesheet(&config(Styling::Tailwind, true));
        assert!(css.starts_with("@tailwind base;"));
        assert!(css.contains(":focus-visible"));
    }

    #[test]
    fn scss_uses_variables() {
        let css = global_stylesheet(&config(Styling::Scss, true));
        assert!(css.contains("font-family: $font-stack;"));
        assert!(css.contains("outline: 2px solid $focus-color;"));
        assert_eq!(stylesheet_path("src/style", &config(Styling::Scss, true)), "src/style.scss");
    }

    #[test]
    fn entry_script_follows_bundler() {
        let vite = ExportConfig::builder()
            .framework(Framework::React)
            .typescript(true)
            .build()
            .unwrap();
        assert_eq!(
            entry_script(&vite).as_deref(),
            Some("<script type=\"module\" src=\"/src/main.tsx\"></script>")
        );

        let webpack = ExportConfig::builder()
            .framework(Framework::React)
            .bundler(Bundler::Webpack)
            .build()
            .unwrap();
        assert!(entry_script(&webpack).is_none());
    }

    #[test]
    fn host_page_without_seo_uses_project_name() {
        let page = host_page(
            &config(Styling::Css, false),
            &[],
            &[],
            &["<div id=\"app\"></div>".to_string()],
        );
        assert!(page.contains("<title>pagesmith-export</title>"));
        assert!(page.contains("    <div id=\"app\"></div>"));
        assert!(!page.contains("og:title"));
    }

    #[test]
    fn host_page_with_seo_includes_meta() {
        let nodes = vec![ComponentNode::new("a", "main").with_seo(SeoData {
            title: Some("Landing".into()),
            description: Some("A page".into()),
            ..SeoData::default()
        })];
        let page = host_page(&config(Styling::Css, true), &nodes, &[], &[]);
        assert!(page.contains("<title>Landing</title>"));
        assert!(page.contains("<meta name=\"description\" content=\"A page\" />"));
    }
}
