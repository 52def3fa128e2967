//! Component test files, shared across backends.

use pagesmith_core::domain::{ExportConfig, Testing};
use serde_json::Value;

use super::naming::semantic_tag;
use super::plan::PlannedComponent;
use super::props::js_literal;

/// How a backend mounts a component in a test.
#[derive(Debug, Clone, Default)]
pub struct TestHarness {
    /// Imports for the renderer and the component under test.
    pub imports: Vec<String>,
    /// Lines placed between the imports and the suite.
    pub setup: Vec<String>,
    /// Expression resolving to `{ container }`.
    pub render: String,
    /// The render expression returns a promise.
    pub is_async: bool,
}

/// Test suite for one top-level component. `None` when testing is off.
pub fn component_test(
    component: &PlannedComponent<'_>,
    config: &ExportConfig,
    harness: &TestHarness,
) -> Option<String> {
    let testing = config.testing()?;
    let name = &component.name;
    let tag = semantic_tag(&component.node.kind);

    let mut lines = Vec::new();
    if testing == Testing::Vitest {
        lines.push("import { describe, it, expect } from 'vitest';".to_string());
    }
    lines.extend(harness.imports.iter().cloned());
    if config.accessibility() {
        let module = match testing {
            Testing::Vitest => "vitest-axe",
            Testing::Jest => "jest-axe",
        };
        lines.push(format!("import {{ axe }} from '{module}';"));
    }
    if !harness.setup.is_empty() {
        lines.push(String::new());
        lines.extend(harness.setup.iter().cloned());
    }

    let (asyncness, awaited) = if harness.is_async {
        ("async ", "await ")
    } else {
        ("", "")
    };
    let mount = format!("    const {{ container }} = {awaited}{};", harness.render);

    lines.push(String::new());
    lines.push(format!("describe('{name}', () => {{"));

    lines.push(format!("  it('renders a <{tag}> element', {asyncness}() => {{"));
    lines.push(mount.clone());
    lines.push(format!("    expect(container.querySelector('{tag}')).not.toBeNull();"));
    lines.push("  });".to_string());

    if component.children.is_empty() {
        if let Some(text) = component.node.text() {
            lines.push(String::new());
            lines.push(format!("  it('shows its text', {asyncness}() => {{"));
            lines.push(mount.clone());
            lines.push(format!(
                "    expect(container.textContent).toContain({});",
                js_literal(&Value::String(text))
            ));
            lines.push("  });".to_string());
        }
    }

    if config.accessibility() {
        lines.push(String::new());
        lines.push("  it('has no detectable accessibility violations', async () => {".to_string());
        lines.push(mount);
        lines.push("    const results = await axe(container);".to_string());
        lines.push("    expect(results.violations).toHaveLength(0);".to_string());
        lines.push("  });".to_string());
    }

    lines.push("});".to_string());
    Some(lines.join("\n") + "\n")
}
