//! Vue 3 backend: `<script setup>` single-file components.

use pagesmith_core::{
    application::ports::TargetBackend,
    domain::{ComponentNode, ExportConfig, Framework, GeneratedFile, capabilities},
    error::PagesmithResult,
};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::generator::{
    CommentStyle, ComponentPlan, Markup, PlannedComponent, PropSpec, SHELL_NAMES, TestHarness,
    accessibility_comment, child_content, component_test, entry_script, global_stylesheet,
    host_page, prop_specs, render_element, stylesheet_path,
};
use crate::generator::props::is_function_literal;

/// Vue template syntax.
struct Template;

impl Markup for Template {
    fn bind_attr(&self, attr: &str, prop: &str, _value: &Value) -> String {
        format!(":{attr}=\"{prop}\"")
    }

    fn bind_text(&self, prop: &str, _text: &str) -> String {
        format!("{{{{ {prop} }}}}")
    }

    fn bind_event(&self, event: &str, prop: &str) -> Option<String> {
        Some(format!("@{event}=\"{prop}\""))
    }
}

/// Runtime prop constructor for `defineProps({...})`.
fn runtime_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "Boolean",
        Value::Number(_) => "Number",
        v if is_function_literal(v) => "Function",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

/// Default value; objects and arrays need a factory.
fn default_value(prop: &PropSpec) -> String {
    match prop.value {
        Value::Array(_) | Value::Object(_) => format!("() => ({})", prop.default),
        _ => prop.default.clone(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VueBackend;

impl VueBackend {
    pub fn new() -> Self {
        Self
    }

    fn script_open(config: &ExportConfig) -> &'static str {
        if config.typescript() {
            "<script setup lang=\"ts\">"
        } else {
            "<script setup>"
        }
    }

    fn component(&self, component: &PlannedComponent<'_>, config: &ExportConfig) -> String {
        let node = component.node;
        let props = prop_specs(node);
        let mut lines = accessibility_comment(node, config, CommentStyle::Html);

        let mut script = Vec::new();
        for child in &component.children {
            script.push(format!("import {child} from './{child}.vue';"));
        }
        if !props.is_empty() {
            if !script.is_empty() {
                script.push(String::new());
            }
            if config.typescript() {
                script.push("withDefaults(".to_string());
                script.push("  defineProps<{".to_string());
                for prop in &props {
                    script.push(format!("    {}?: {};", prop.name, prop.ts_type));
                }
                script.push("  }>(),".to_string());
                script.push("  {".to_string());
                for prop in &props {
                    script.push(format!("    {}: {},", prop.name, default_value(prop)));
                }
                script.push("  },".to_string());
                script.push(");".to_string());
            } else {
                script.push("defineProps({".to_string());
                for prop in &props {
                    script.push(format!(
                        "  {}: {{ type: {}, default: {} }},",
                        prop.name,
                        runtime_type(&prop.value),
                        default_value(prop)
                    ));
                }
                script.push("});".to_string());
            }
        }

        if !script.is_empty() {
            lines.push(Self::script_open(config).to_string());
            lines.extend(script);
            lines.push("</script>".to_string());
            lines.push(String::new());
        }

        let inner = child_content(node, &component.children, &Template);
        lines.push("<template>".to_string());
        lines.extend(render_element(node, config, &Template, &inner, 2));
        lines.push("</template>".to_string());
        lines.join("\n") + "\n"
    }

    fn app(&self, plan: &ComponentPlan<'_>, config: &ExportConfig) -> String {
        let mut lines = vec![Self::script_open(config).to_string()];
        for root in plan.roots() {
            lines.push(format!("import {0} from './components/{0}.vue';", root.name));
        }
        lines.push("</script>".to_string());
        lines.push(String::new());
        lines.push("<template>".to_string());
        for root in plan.roots() {
            lines.push(format!("  <{} />", root.name));
        }
        lines.push("</template>".to_string());
        lines.join("\n") + "\n"
    }

    fn main(&self, config: &ExportConfig) -> String {
        [
            "import { createApp } from 'vue';".to_string(),
            "import App from './App.vue';".to_string(),
            format!("import '{}';", stylesheet_path("./style", config)),
            String::new(),
            "createApp(App).mount('#app');".to_string(),
        ]
        .join("\n")
            + "\n"
    }

    fn harness(name: &str) -> TestHarness {
        TestHarness {
            imports: vec![
                "import { render } from '@testing-library/vue';".to_string(),
                format!("import {name} from './{name}.vue';"),
            ],
            render: format!("render({name})"),
            ..TestHarness::default()
        }
    }
}

impl TargetBackend for VueBackend {
    fn framework(&self) -> Framework {
        Framework::Vue
    }

    #[instrument(skip_all, fields(framework = "vue", nodes = nodes.len()))]
    fn generate(
        &self,
        nodes: &[ComponentNode],
        config: &ExportConfig,
    ) -> PagesmithResult<Vec<GeneratedFile>> {
        let plan = ComponentPlan::build_reserving(nodes, SHELL_NAMES)?;
        let mut files = Vec::with_capacity(plan.len() + 5);

        for component in plan.components() {
            let path = format!("src/components/{}.vue", component.name);
            debug!(component = %component.name, id = %component.node.id, "Emitting component");
            files.push(GeneratedFile::component(path, self.component(component, config))?);
        }

        files.push(GeneratedFile::component("src/App.vue", self.app(&plan, config))?);
        files.push(GeneratedFile::component(
            capabilities::entry_point(Framework::Vue, config.typescript()),
            self.main(config),
        )?);
        files.push(GeneratedFile::style(
            stylesheet_path("src/style", config),
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
                    format!("src/components/{}.test.{ext}", root.name),
                    suite,
                )?);
            }
        }

        Ok(files)
    }
}
