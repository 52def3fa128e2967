//! Plain HTML/CSS/JavaScript backend.
//!
//! There is no component system to target, so every partial and the
//! `index.html` shell carry their subtree inline.

use pagesmith_core::{
    application::ports::TargetBackend,
    domain::{ComponentNode, ExportConfig, Framework, GeneratedFile, capabilities},
    error::PagesmithResult,
};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::generator::{
    CommentStyle, ComponentPlan, Markup, SHELL_NAMES, TestHarness, accessibility_comment,
    child_content, component_test, entry_script, escape_html, global_stylesheet, host_page,
    render_element, stylesheet_path,
};

/// Literal markup: props are baked in as values.
struct Static;

impl Markup for Static {
    fn bind_attr(&self, attr: &str, _prop: &str, value: &Value) -> String {
        let text = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        format!("{attr}=\"{}\"", escape_html(&text))
    }

    fn bind_text(&self, _prop: &str, text: &str) -> String {
        escape_html(text)
    }
}

/// `node` and its descendants as static markup.
fn render_tree(node: &ComponentNode, config: &ExportConfig, indent: usize) -> Vec<String> {
    let inner: Vec<String> = if node.children.is_empty() {
        child_content(node, &[], &Static)
    } else {
        node.children
            .iter()
            .flat_map(|child| render_tree(child, config, 0))
            .collect()
    };
    render_element(node, config, &Static, &inner, indent)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBackend;

impl HtmlBackend {
    pub fn new() -> Self {
        Self
    }

    fn partial(&self, node: &ComponentNode, config: &ExportConfig) -> String {
        let mut lines = accessibility_comment(node, config, CommentStyle::Html);
        lines.extend(render_tree(node, config, 0));
        lines.join("\n") + "\n"
    }

    fn index(&self, plan: &ComponentPlan<'_>, nodes: &[ComponentNode], config: &ExportConfig) -> String {
        let head = vec![format!(
            "<link rel=\"stylesheet\" href=\"{}\" />",
            stylesheet_path("css/styles", config)
        )];
        let mut body = Vec::new();
        for root in plan.roots() {
            body.extend(render_tree(root.node, config, 0));
        }
        body.extend(entry_script(config));
        host_page(config, nodes, &head, &body)
    }

    fn main(&self, config: &ExportConfig) -> String {
        let mut lines = vec![
            "document.addEventListener('DOMContentLoaded', () => {".to_string(),
            "  document.documentElement.classList.add('js');".to_string(),
        ];
        if config.accessibility() {
            lines.push(String::new());
            lines.push("  // Show focus rings only for keyboard users.".to_string());
            lines.push("  document.addEventListener('mousedown', () => {".to_string());
            lines.push("    document.body.classList.add('using-mouse');".to_string());
            lines.push("  });".to_string());
            lines.push("  document.addEventListener('keydown', (event) => {".to_string());
            lines.push("    if (event.key === 'Tab') {".to_string());
            lines.push("      document.body.classList.remove('using-mouse');".to_string());
            lines.push("    }".to_string());
            lines.push("  });".to_string());
        }
        lines.push("});".to_string());
        lines.join("\n") + "\n"
    }

    fn harness(name: &str, config: &ExportConfig) -> TestHarness {
        let signature = if config.typescript() {
            "function render(path: string) {"
        } else {
            "function render(path) {"
        };
        TestHarness {
            imports: vec!["import { readFileSync } from 'node:fs';".to_string()],
            setup: vec![
                signature.to_string(),
                "  document.body.innerHTML = readFileSync(path, 'utf8');".to_string(),
                "  return { container: document.body };".to_string(),
                "}".to_string(),
            ],
            render: format!("render('components/{name}.html')"),
            is_async: false,
        }
    }
}

impl TargetBackend for HtmlBackend {
    fn framework(&self) -> Framework {
        Framework::Html
    }

    #[instrument(skip_all, fields(framework = "html", nodes = nodes.len()))]
    fn generate(
        &self,
        nodes: &[ComponentNode],
        config: &ExportConfig,
    ) -> PagesmithResult<Vec<GeneratedFile>> {
        let plan = ComponentPlan::build_reserving(nodes, SHELL_NAMES)?;
        let mut files = Vec::with_capacity(plan.len() + 4);

        for component in plan.components() {
            let path = format!("components/{}.html", component.name);
            debug!(component = %component.name, id = %component.node.id, "Emitting partial");
            files.push(GeneratedFile::component(path, self.partial(component.node, config))?);
        }

        files.push(GeneratedFile::component(
            "index.html",
            self.index(&plan, nodes, config),
        )?);
        files.push(GeneratedFile::component(
            capabilities::entry_point(Framework::Html, config.typescript()),
            self.main(config),
        )?);
        files.push(GeneratedFile::style(
            stylesheet_path("css/styles", config),
            global_stylesheet(config),
        )?);

        let ext = config.script_extension();
        for root in plan.roots() {
            if let Some(suite) = component_test(root, config, &Self::harness(&root.name, config)) {
                files.push(GeneratedFile::test(
                    format!("tests/{}.test.{ext}", root.name),
                    suite,
                )?);
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_core::domain::{SeoData, Testing};

    fn content<'a>(files: &'a [GeneratedFile], path: &str) -> &'a str {
        &files
            .iter()
            .find(|f| f.path.as_str() == path)
            .unwrap_or_else(|| panic!("missing {path}"))
            .content
    }

    fn page() -> Vec<ComponentNode> {
        vec![ComponentNode::new("nav", "navbar")
            .with_aria("aria-label", "Main")
            .with_seo(SeoData {
                title: Some("Docs".into()),
                ..SeoData::default()
            })
            .with_child(
                ComponentNode::new("home", "link")
                    .with_prop("href", "/")
                    .with_prop("text", "Home & away"),
            )]
    }

    #[test]
    fn partials_inline_their_subtree() {
        let config = ExportConfig::builder().framework(Framework::Html).build().unwrap();
        let files = HtmlBackend.generate(&page(), &config).unwrap();

        let nav = content(&files, "components/Navbar.html");
        assert!(nav.contains("<nav aria-label=\"Main\">"));
        assert!(nav.contains("  <a href=\"/\">Home &amp; away</a>"));
        assert!(content(&files, "components/Link.html").contains("<a href=\"/\">"));
    }

    #[test]
    fn index_composes_roots_with_head() {
        let config = ExportConfig::builder().framework(Framework::Html).build().unwrap();
        let files = HtmlBackend.generate(&page(), &config).unwrap();
        let index = content(&files, "index.html");

        assert!(index.contains("<title>Docs</title>"));
        assert!(index.contains("<link rel=\"stylesheet\" href=\"css/styles.css\" />"));
        assert!(index.contains("      <a href=\"/\">Home &amp; away</a>"));
        assert!(index.contains("<script type=\"module\" src=\"/js/main.js\"></script>"));
        assert!(files.iter().any(|f| f.path.as_str() == "js/main.js"));
    }

    #[test]
    fn tests_load_partials_from_disk() {
        let config = ExportConfig::builder()
            .framework(Framework::Html)
            .typescript(true)
            .testing(Testing::Vitest)
            .build()
            .unwrap();
        let files = HtmlBackend.generate(&page(), &config).unwrap();
        let suite = content(&files, "tests/Navbar.test.ts");

        assert!(suite.contains("function render(path: string) {"));
        assert!(suite.contains("render('components/Navbar.html')"));
        assert!(content(&files, "js/main.ts").contains("DOMContentLoaded"));
    }
}
