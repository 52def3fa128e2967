//! React backend: function components in `.tsx` / `.jsx`.

use indexmap::IndexMap;
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
    host_page, prop_specs, render_element, stylesheet_path, to_camel_case,
};

/// JSX syntax.
struct Jsx;

impl Markup for Jsx {
    fn class_attr(&self) -> &'static str {
        "className"
    }

    fn bind_attr(&self, attr: &str, prop: &str, _value: &Value) -> String {
        format!("{attr}={{{prop}}}")
    }

    fn bind_text(&self, prop: &str, _text: &str) -> String {
        format!("{{{prop}}}")
    }

    fn bind_event(&self, event: &str, prop: &str) -> Option<String> {
        let mut chars = event.chars();
        let first = chars.next()?.to_ascii_uppercase();
        Some(format!("on{first}{}={{{prop}}}", chars.as_str()))
    }

    fn style_attr(&self, styles: &IndexMap<String, String>) -> String {
        let entries: Vec<String> = styles
            .iter()
            .map(|(k, v)| format!("{}: {}", to_camel_case(k), Value::from(v.as_str())))
            .collect();
        format!("style={{{{ {} }}}}", entries.join(", "))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReactBackend;

impl ReactBackend {
    pub fn new() -> Self {
        Self
    }

    fn ext(config: &ExportConfig) -> &'static str {
        if config.typescript() { "tsx" } else { "jsx" }
    }

    fn component(&self, component: &PlannedComponent<'_>, config: &ExportConfig) -> String {
        let name = &component.name;
        let node = component.node;
        let props = prop_specs(node);
        let mut lines = Vec::new();

        if config.performance() {
            lines.push("import { memo } from 'react';".to_string());
        }
        for child in &component.children {
            lines.push(format!("import {child} from './{child}';"));
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }

        let a11y = accessibility_comment(node, config, CommentStyle::Block);
        if !a11y.is_empty() {
            lines.extend(a11y);
            lines.push(String::new());
        }

        let params = if props.is_empty() {
            String::new()
        } else {
            let defaults: Vec<String> = props
                .iter()
                .map(|p| format!("{} = {}", p.name, p.default))
                .collect();
            format!("{{ {} }}", defaults.join(", "))
        };

        if config.typescript() {
            if !props.is_empty() {
                lines.push(format!("export interface {name}Props {{"));
                for prop in &props {
                    lines.push(format!("  {}?: {};", prop.name, prop.ts_type));
                }
                lines.push("}".to_string());
                lines.push(String::new());
                lines.push(format!("function {name}({params}: {name}Props) {{"));
            } else {
                lines.push(format!("function {name}() {{"));
            }
        } else {
            if !props.is_empty() {
                lines.push("/**".to_string());
                lines.push(format!(" * @param {{object}} props {name} props"));
                for prop in &props {
                    lines.push(format!(" * @param {{{}}} [props.{}]", prop.ts_type, prop.name));
                }
                lines.push(" */".to_string());
            }
            lines.push(format!("function {name}({params}) {{"));
        }

        let inner = child_content(node, &component.children, &Jsx);
        lines.push("  return (".to_string());
        lines.extend(render_element(node, config, &Jsx, &inner, 4));
        lines.push("  );".to_string());
        lines.push("}".to_string());
        lines.push(String::new());

        if config.performance() {
            lines.push(format!("export default memo({name});"));
        } else {
            lines.push(format!("export default {name};"));
        }
        lines.join("\n") + "\n"
    }

    fn app(&self, plan: &ComponentPlan<'_>) -> String {
        let mut lines = Vec::new();
        for root in plan.roots() {
            lines.push(format!("import {0} from './components/{0}';", root.name));
        }
        lines.push(String::new());
        lines.push("export default function App() {".to_string());
        lines.push("  return (".to_string());
        lines.push("    <>".to_string());
        for root in plan.roots() {
            lines.push(format!("      <{} />", root.name));
        }
        lines.push("    </>".to_string());
        lines.push("  );".to_string());
        lines.push("}".to_string());
        lines.join("\n") + "\n"
    }

    fn main(&self, config: &ExportConfig) -> String {
        let stylesheet = stylesheet_path("./index", config);
        let root = if config.typescript() {
            "document.getElementById('root')!"
        } else {
            "document.getElementById('root')"
        };
        [
            "import { StrictMode } from 'react';".to_string(),
            "import { createRoot } from 'react-dom/client';".to_string(),
            "import App from './App';".to_string(),
            format!("import '{stylesheet}';"),
            String::new(),
            format!("createRoot({root}).render("),
            "  <StrictMode>".to_string(),
            "    <App />".to_string(),
            "  </StrictMode>,".to_string(),
            ");".to_string(),
        ]
        .join("\n")
            + "\n"
    }

    fn harness(name: &str) -> TestHarness {
        TestHarness {
            imports: vec![
                "import { render } from '@testing-library/react';".to_string(),
                format!("import {name} from './{name}';"),
            ],
            render: format!("render(<{name} />)"),
            ..TestHarness::default()
        }
    }
}

impl TargetBackend for ReactBackend {
    fn framework(&self) -> Framework {
        Framework::React
    }

    #[instrument(skip_all, fields(framework = "react", nodes = nodes.len()))]
    fn generate(
        &self,
        nodes: &[ComponentNode],
        config: &ExportConfig,
    ) -> PagesmithResult<Vec<GeneratedFile>> {
        let plan = ComponentPlan::build_reserving(nodes, SHELL_NAMES)?;
        let ext = Self::ext(config);
        let mut files = Vec::with_capacity(plan.len() + 5);

        for component in plan.components() {
            let path = format!("src/components/{}.{ext}", component.name);
            debug!(component = %component.name, id = %component.node.id, "Emitting component");
            files.push(GeneratedFile::component(path, self.component(component, config))?);
        }

        files.push(GeneratedFile::component(format!("src/App.{ext}"), self.app(&plan))?);
        files.push(GeneratedFile::component(
            capabilities::entry_point(Framework::React, config.typescript()),
            self.main(config),
        )?);
        files.push(GeneratedFile::style(
            stylesheet_path("src/index", config),
            global_stylesheet(config),
        )?);

        let body: Vec<String> = std::iter::once("<div id=\"root\"></div>".to_string())
            .chain(entry_script(config))
            .collect();
        files.push(GeneratedFile::component(
            "index.html",
            host_page(config, nodes, &[], &body),
        )?);

        for root in plan.roots() {
            if let Some(suite) = component_test(root, config, &Self::harness(&root.name)) {
                files.push(GeneratedFile::test(
                    format!("src/components/{}.test.{ext}", root.name),
                    suite,
                )?);
            }
        }

        Ok(files)
    }
}
