//! Angular backend: standalone components with inline templates.

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
    host_page, prop_specs, render_element, stylesheet_path, to_kebab_case,
};

struct AngularTemplate;

impl Markup for AngularTemplate {
    fn bind_attr(&self, attr: &str, prop: &str, _value: &Value) -> String {
        format!("[{attr}]=\"{prop}\"")
    }

    fn bind_text(&self, prop: &str, _text: &str) -> String {
        format!("{{{{ {prop} }}}}")
    }

    fn bind_event(&self, event: &str, prop: &str) -> Option<String> {
        Some(format!("({event})=\"{prop}()\""))
    }

    fn child_ref(&self, name: &str) -> String {
        let selector = selector(name);
        format!("<{selector}></{selector}>")
    }
}

fn selector(name: &str) -> String {
    format!("app-{}", to_kebab_case(name))
}

fn class_name(name: &str) -> String {
    format!("{name}Component")
}

/// `<Name>/<kebab>.component`
fn module_stem(name: &str) -> String {
    format!("{name}/{}.component", to_kebab_case(name))
}

/// Body of a TS template literal.
fn escape_template(line: &str) -> String {
    line.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AngularBackend;

impl AngularBackend {
    pub fn new() -> Self {
        Self
    }

    fn component(&self, component: &PlannedComponent<'_>, config: &ExportConfig) -> String {
        let name = &component.name;
        let node = component.node;
        let props = prop_specs(node);

        let mut core = vec!["Component"];
        if config.performance() {
            core.insert(0, "ChangeDetectionStrategy");
        }
        if !props.is_empty() {
            core.push("Input");
        }

        let mut lines = vec![format!("import {{ {} }} from '@angular/core';", core.join(", "))];
        for child in &component.children {
            lines.push(format!(
                "import {{ {} }} from '../{}';",
                class_name(child),
                module_stem(child)
            ));
        }
        lines.push(String::new());

        let a11y = accessibility_comment(node, config, CommentStyle::Block);
        lines.extend(a11y);

        let imports: Vec<String> = component.children.iter().map(|c| class_name(c)).collect();
        lines.push("@Component({".to_string());
        lines.push(format!("  selector: '{}',", selector(name)));
        lines.push("  standalone: true,".to_string());
        lines.push(format!("  imports: [{}],", imports.join(", ")));
        if config.performance() {
            lines.push("  changeDetection: ChangeDetectionStrategy.OnPush,".to_string());
        }
        lines.push("  template: `".to_string());
        let inner = child_content(node, &component.children, &AngularTemplate);
        for line in render_element(node, config, &AngularTemplate, &inner, 4) {
            lines.push(escape_template(&line));
        }
        lines.push("  `,".to_string());
        lines.push("})".to_string());

        if props.is_empty() {
            lines.push(format!("export class {} {{}}", class_name(name)));
        } else {
            lines.push(format!("export class {} {{", class_name(name)));
            for prop in &props {
                lines.push(format!(
                    "  @Input() {}: {} = {};",
                    prop.name, prop.ts_type, prop.default
                ));
            }
            lines.push("}".to_string());
        }
        lines.join("\n") + "\n"
    }

    fn app(&self, plan: &ComponentPlan<'_>) -> String {
        let mut lines = vec!["import { Component } from '@angular/core';".to_string()];
        for root in plan.roots() {
            lines.push(format!(
                "import {{ {} }} from './components/{}';",
                class_name(&root.name),
                module_stem(&root.name)
            ));
        }
        let imports: Vec<String> = plan.roots().map(|r| class_name(&r.name)).collect();

        lines.push(String::new());
        lines.push("@Component({".to_string());
        lines.push("  selector: 'app-root',".to_string());
        lines.push("  standalone: true,".to_string());
        lines.push(format!("  imports: [{}],", imports.join(", ")));
        lines.push("  template: `".to_string());
        for root in plan.roots() {
            lines.push(format!("    {}", AngularTemplate.child_ref(&root.name)));
        }
        lines.push("  `,".to_string());
        lines.push("})".to_string());
        lines.push("export class AppComponent {}".to_string());
        lines.join("\n") + "\n"
    }

    fn main(&self, config: &ExportConfig) -> String {
        [
            "import 'zone.js';".to_string(),
            "import { bootstrapApplication } from '@angular/platform-browser';".to_string(),
            "import { AppComponent } from './app/app.component';".to_string(),
            format!("import '{}';", stylesheet_path("./styles", config)),
            String::new(),
            "bootstrapApplication(AppComponent).catch((err) => console.error(err));".to_string(),
        ]
        .join("\n")
            + "\n"
    }

    fn harness(name: &str) -> TestHarness {
        let kebab = to_kebab_case(name);
        TestHarness {
            imports: vec![
                "import { render } from '@testing-library/angular';".to_string(),
                format!("import {{ {} }} from './{kebab}.component';", class_name(name)),
            ],
            render: format!("render({})", class_name(name)),
            is_async: true,
            ..TestHarness::default()
        }
    }
}

impl TargetBackend for AngularBackend {
    fn framework(&self) -> Framework {
        Framework::Angular
    }

    #[instrument(skip_all, fields(framework = "angular", nodes = nodes.len()))]
    fn generate(
        &self,
        nodes: &[ComponentNode],
        config: &ExportConfig,
    ) -> PagesmithResult<Vec<GeneratedFile>> {
        let plan = ComponentPlan::build_reserving(nodes, SHELL_NAMES)?;
        let mut files = Vec::with_capacity(plan.len() + 5);

        for component in plan.components() {
            let path = format!("src/app/components/{}.ts", module_stem(&component.name));
            debug!(component = %component.name, id = %component.node.id, "Emitting component");
            files.push(GeneratedFile::component(path, self.component(component, config))?);
        }

        files.push(GeneratedFile::component(
            "src/app/app.component.ts",
            self.app(&plan),
        )?);
        files.push(GeneratedFile::component(
            capabilities::entry_point(Framework::Angular, true),
            self.main(config),
        )?);
        files.push(GeneratedFile::style(
            stylesheet_path("src/styles", config),
            global_stylesheet(config),
        )?);

        let body: Vec<String> = std::iter::once("<app-root></app-root>".to_string())
            .chain(entry_script(config))
            .collect();
        files.push(GeneratedFile::component(
            "index.html",
            host_page(config, nodes, &[], &body),
        )?);

        for root in plan.roots() {
            if let Some(suite) = component_test(root, config, &Self::harness(&root.name)) {
                files.push(GeneratedFile::test(
                    format!("src/app/components/{}.spec.ts", module_stem(&root.name)),
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

    fn config() -> ExportConfig {
        ExportConfig::builder()
            .framework(Framework::Angular)
            .testing(Testing::Jest)
            .build()
            .unwrap()
    }

    fn hero() -> ComponentNode {
        ComponentNode::new("hero", "hero-section")
            .with_class_name("hero")
            .with_child(
                ComponentNode::new("cta", "button")
                    .with_prop("text", "Start")
                    .with_aria("aria-label", "Start now"),
            )
    }

    #[test]
    fn component_is_standalone_with_inputs() {
        let files = AngularBackend.generate(&[hero()], &config()).unwrap();
        let button = content(&files, "src/app/components/Button/button.component.ts");

        assert!(button.contains("selector: 'app-button',"));
        assert!(button.contains("changeDetection: ChangeDetectionStrategy.OnPush,"));
        assert!(button.contains("export class ButtonComponent {"));
        assert!(button.contains("  @Input() text: string = \"Start\";"));
        assert!(button.contains(
            "<button type=\"button\" aria-label=\"Start now\">{{ text }}</button>"
        ));
    }

    #[test]
    fn parent_imports_children_by_selector() {
        let files = AngularBackend.generate(&[hero()], &config()).unwrap();
        let hero = content(
            &files,
            "src/app/components/HeroSection/hero-section.component.ts",
        );

        assert!(hero.contains("import { ButtonComponent } from '../Button/button.component';"));
        assert!(hero.contains("imports: [ButtonComponent],"));
        assert!(hero.contains("<app-button></app-button>"));
        assert!(hero.contains("export class HeroSectionComponent {}"));
    }

    #[test]
    fn shell_entry_and_async_spec() {
        let files = AngularBackend.generate(&[hero()], &config()).unwrap();

        let app = content(&files, "src/app/app.component.ts");
        assert!(app.contains("selector: 'app-root',"));
        assert!(app.contains("<app-hero-section></app-hero-section>"));
        assert!(content(&files, "src/main.ts").contains("bootstrapApplication(AppComponent)"));
        assert!(content(&files, "index.html").contains("<app-root></app-root>"));

        let spec = content(
            &files,
            "src/app/components/HeroSection/hero-section.component.spec.ts",
        );
        assert!(spec.contains("await render(HeroSectionComponent)"));
    }

    #[test]
    fn component_paths_carry_the_component_name() {
        let files = AngularBackend.generate(&[hero()], &config()).unwrap();
        for file in files.iter().filter(|f| f.path.as_str().starts_with("src/app/components/")) {
            let path = file.path.as_str();
            assert!(
                path.contains("/HeroSection/") || path.contains("/Button/"),
                "{path}"
            );
        }
    }

    #[test]
    fn nodes_named_like_the_shell_get_their_own_names() {
        let forest = vec![
            ComponentNode::new("home", "app").with_child(ComponentNode::new("shell", "root")),
        ];
        let files = AngularBackend.generate(&forest, &config()).unwrap();

        let shell = content(&files, "src/app/app.component.ts");
        assert!(shell.contains("export class AppComponent {}"));
        assert!(shell.contains(
            "import { AppHomeComponent } from './components/AppHome/app-home.component';"
        ));
        assert!(shell.contains("<app-app-home></app-app-home>"));

        let home = content(&files, "src/app/components/AppHome/app-home.component.ts");
        assert!(home.contains("export class AppHomeComponent {}"));
        assert!(home.contains("<app-root-shell></app-root-shell>"));

        for file in files.iter().filter(|f| f.path.as_str().starts_with("src/app/components/")) {
            assert!(!file.content.contains("export class AppComponent"), "{}", file.path);
            assert!(!file.content.contains("selector: 'app-root',"), "{}", file.path);
        }
    }

    #[test]
    fn template_literal_is_escaped() {
        assert_eq!(escape_template("a `b` ${c}"), "a \\`b\\` \\${c}");
    }
}
