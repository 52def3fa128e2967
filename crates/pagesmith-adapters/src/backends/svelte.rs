//! Svelte backend.

use pagesmith_core::{
    application::ports::TargetBackend,
    domain::{ComponentNode, ExportConfig, Framework, GeneratedFile, capabilities},
    error::PagesmithResult,
};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::generator::{
    CommentStyle, ComponentPlan, Markup, PlannedComponent, SHELL_NAMES, TestHarness,
    accessibility_comment, child_content, component_test, entry_script, global_stylesheet,
    host_page, prop_specs, render_element, stylesheet_path,
};

struct SvelteMarkup;

impl Markup for SvelteMarkup {
    fn bind_attr(&self, attr: &str, prop: &str, _value: &Value) -> String {
        format!("{attr}={{{prop}}}")
    }

    fn bind_text(&self, prop: &str, _text: &str) -> String {
        format!("{{{prop}}}")
    }

    fn bind_event(&self, event: &str, prop: &str) -> Option<String> {
        Some(format!("on:{event}={{{prop}}}"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SvelteBackend;

impl SvelteBackend {
    pub fn new() -> Self {
        Self
    }

    fn script_open(config: &ExportConfig) -> &'static str {
        if config.typescript() {
            "<script lang=\"ts\">"
        } else {
            "<script>"
        }
    }

    fn component(&self, component: &PlannedComponent<'_>, config: &ExportConfig) -> String {
        let node = component.node;
        let props = prop_specs(node);
        let mut lines = accessibility_comment(node, config, CommentStyle::Html);

        let mut script = Vec::new();
        for child in &component.children {
            script.push(format!("  import {child} from './{child}.svelte';"));
        }
        if !props.is_empty() && !script.is_empty() {
            script.push(String::new());
        }
        for prop in &props {
            if config.typescript() {
                script.push(format!(
                    "  export let {}: {} = {};",
                    prop.name, prop.ts_type, prop.default
                ));
            } else {
                script.push(format!("  /** @type {{{}}} */", prop.ts_type));
                script.push(format!("  export let {} = {};", prop.name, prop.default));
            }
        }

        if !script.is_empty() {
            lines.push(Self::script_open(config).to_string());
            lines.extend(script);
            lines.push("</script>".to_string());
            lines.push(String::new());
        }

        let inner = child_content(node, &component.children, &SvelteMarkup);
        lines.extend(render_element(node, config, &SvelteMarkup, &inner, 0));
        lines.join("\n") + "\n"
    }

    fn app(&self, plan: &ComponentPlan<'_>, config: &ExportConfig) -> String {
        let mut lines = vec![Self::script_open(config).to_string()];
        for root in plan.roots() {
            lines.push(format!("  import {0} from './lib/{0}.svelte';", root.name));
        }
        lines.push("</script>".to_string());
        lines.push(String::new());
        for root in plan.roots() {
            lines.push(format!("<{} />", root.name));
        }
        lines.join("\n") + "\n"
    }

    fn main(&self, config: &ExportConfig) -> String {
        let target = if config.typescript() {
            "document.getElementById('app')!"
        } else {
            "document.getElementById('app')"
        };
        [
            "import App from './App.svelte';".to_string(),
            format!("import '{}';", stylesheet_path("./app", config)),
            String::new(),
            "const app = new App({".to_string(),
            format!("  target: {target},"),
            "});".to_string(),
            String::new(),
            "export default app;".to_string(),
        ]
        .join("\n")
            + "\n"
    }

    fn harness(name: &str) -> TestHarness {
        TestHarness {
            imports: vec![
                "import { render } from '@testing-library/svelte';".to_string(),
                format!("import {name} from './{name}.svelte';"),
            ],
            render: format!("render({name})"),
            ..TestHarness::default()
        }
    }
}

impl TargetBackend for SvelteBackend {
    fn framework(&self) -> Framework {
        Framework::Svelte
    }

    #[instrument(skip_all, fields(framework = "svelte", nodes = nodes.len()))]
    fn generate(
        &self,
        nodes: &[ComponentNode],
        config: &ExportConfig,
    ) -> PagesmithResult<Vec<GeneratedFile>> {
        let plan = ComponentPlan::build_reserving(nodes, SHELL_NAMES)?;
        let mut files = Vec::with_capacity(plan.len() + 5);

        for component in plan.components() {
            let path = format!("src/lib/{}.svelte", component.name);
            debug!(component = %component.name, id = %component.node.id, "Emitting component");
            files.push(GeneratedFile::component(path, self.component(component, config))?);
        }

        files.push(GeneratedFile::component("src/App.svelte", self.app(&plan, config))?);
        files.push(GeneratedFile::component(
            capabilities::entry_point(Framework::Svelte, config.typescript()),
            self.main(config),
        )?);
        files.push(GeneratedFile::style(
            stylesheet_path("src/app", config),
            global_stylesheet(config),
        )?);

        let body: Vec<String> = std::iter::once("<div id=\"app\"></div>".to_string())
            .chain(entry_script(config))
            .collect();
        files.push(GeneratedFile::component(
            "index.html",
            host_page(config, nodes, &[], &body),
        )?);

        let ext = config.script_extension();
        for root in plan.roots() {
            if let Some(suite) = component_test(root, config, &Self::harness(&root.name)) {
                files.push(GeneratedFile::test(
                    format!("src/lib/{}.test.{ext}", root.name),
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
    use pagesmith_core::domain::Testing;

    fn content<'a>(files: &'a [GeneratedFile], path: &str) -> &'a str {
        &files
            .iter()
            .find(|f| f.path.as_str() == path)
            .unwrap_or_else(|| panic!("missing {path}"))
            .content
    }

    fn link() -> ComponentNode {
        ComponentNode::new("home", "link")
            .with_prop("href", "/")
            .with_prop("text", "Home")
            .with_aria("aria-current", "page")
    }

    #[test]
    fn typescript_props_are_exported_lets() {
        let config = ExportConfig::builder()
            .framework(Framework::Svelte)
            .typescript(true)
            .build()
            .unwrap();
        let files = SvelteBackend.generate(&[link()], &config).unwrap();
        let link = content(&files, "src/lib/Link.svelte");

        assert!(link.contains("<script lang=\"ts\">"));
        assert!(link.contains("  export let href: string = \"/\";"));
        assert!(link.contains("<a href={href} aria-current=\"page\">{text}</a>"));
    }

    #[test]
    fn javascript_props_carry_jsdoc_types() {
        let config = ExportConfig::builder().framework(Framework::Svelte).build().unwrap();
        let files = SvelteBackend.generate(&[link()], &config).unwrap();
        let link = content(&files, "src/lib/Link.svelte");

        assert!(link.contains("  /** @type {string} */"));
        assert!(link.contains("  export let text = \"Home\";"));
    }

    #[test]
    fn reserved_word_props_are_renamed() {
        let node = ComponentNode::new("email-label", "label")
            .with_prop("for", "email")
            .with_prop("class", "field");
        let config = ExportConfig::builder().framework(Framework::Svelte).build().unwrap();
        let files = SvelteBackend.generate(&[node], &config).unwrap();
        let label = content(&files, "src/lib/Label.svelte");

        assert!(label.contains("  export let htmlFor = \"email\";"));
        assert!(label.contains("  export let className = \"field\";"));
        assert!(!label.contains("export let for"));
        assert!(!label.contains("export let class"));
    }

    #[test]
    fn aria_text_stays_inside_the_comment() {
        let node = ComponentNode::new("x", "button")
            .with_aria("aria-label", "x --> <script>alert(1)</script>");
        let config = ExportConfig::builder().framework(Framework::Svelte).build().unwrap();
        let files = SvelteBackend.generate(&[node], &config).unwrap();
        let button = content(&files, "src/lib/Button.svelte");

        let close = button.find("-->").unwrap();
        assert!(button[..close].contains("aria-label: x - -> <script>"));
        assert!(button[close + 3..].contains("aria-label="));
    }

    #[test]
    fn app_typed_node_does_not_shadow_the_shell() {
        let config = ExportConfig::builder().framework(Framework::Svelte).build().unwrap();
        let files = SvelteBackend.generate(&[ComponentNode::new("home", "app")], &config).unwrap();

        assert!(content(&files, "src/App.svelte").contains("import AppHome from './lib/AppHome.svelte';"));
        assert!(files.iter().all(|f| f.path.as_str() != "src/lib/App.svelte"));
    }

    #[test]
    fn shell_and_entry() {
        let config = ExportConfig::builder()
            .framework(Framework::Svelte)
            .testing(Testing::Vitest)
            .build()
            .unwrap();
        let files = SvelteBackend.generate(&[link()], &config).unwrap();

        assert!(content(&files, "src/App.svelte").contains("import Link from './lib/Link.svelte';"));
        assert!(content(&files, "src/main.js").contains("new App({"));
        assert!(content(&files, "src/lib/Link.test.js").contains("render(Link)"));
        assert!(files.iter().any(|f| f.path.as_str() == "src/app.css"));
    }
}
