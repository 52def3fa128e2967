//! Prop contracts derived from a node's literal props.

use pagesmith_core::domain::ComponentNode;
use serde_json::Value;

use super::naming::prop_identifier;

/// One declared prop of an emitted component.
#[derive(Debug, Clone, PartialEq)]
pub struct PropSpec {
    /// Key as it appears in the IR.
    pub key: String,
    /// camelCase identifier used in emitted code.
    pub name: String,
    /// TypeScript type, also used in JSDoc.
    pub ts_type: String,
    /// Default value as a JS expression.
    pub default: String,
    pub value: Value,
}

/// Props of `node` in insertion order.
///
/// Keys without a usable identifier are skipped; later keys that collide
/// with an earlier identifier are dropped.
pub fn prop_specs(node: &ComponentNode) -> Vec<PropSpec> {
    let mut specs: Vec<PropSpec> = Vec::new();
    for (key, value) in &node.props {
        let Some(name) = prop_identifier(key) else {
            continue;
        };
        if specs.iter().any(|s| s.name == name) {
            continue;
        }
        specs.push(PropSpec {
            key: key.clone(),
            name,
            ts_type: infer_type(value),
            default: js_literal(value),
            value: value.clone(),
        });
    }
    specs
}

/// A string prop holding a function expression.
pub fn is_function_literal(value: &Value) -> bool {
    match value {
        Value::String(s) => {
            let s = s.trim_start();
            s.starts_with("() =>") || s.starts_with("function")
        }
        _ => false,
    }
}

/// TypeScript type of a literal prop value.
pub fn infer_type(value: &Value) -> String {
    match value {
        Value::Null => "any".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        v if is_function_literal(v) => "() => void".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => {
            let types: Vec<String> = items.iter().map(infer_type).collect();
            match types.first() {
                Some(first) if types.iter().all(|t| t == first) && !first.contains(' ') => {
                    format!("{first}[]")
                }
                _ => "unknown[]".to_string(),
            }
        }
        Value::Object(_) => "Record<string, unknown>".to_string(),
    }
}

/// Render a JSON value as a JS expression.
///
/// Function strings are emitted verbatim; everything else is JSON, which
/// is valid JS.
pub fn js_literal(value: &Value) -> String {
    match value {
        Value::String(s) if is_function_literal(value) => s.clone(),
        other => other.to_string(),
    }
}
