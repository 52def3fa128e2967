//! The component IR: a framework-neutral description of a UI tree.
//!
//! Nodes are built by an editor (or read from JSON) and handed to the
//! export engine once per request. Generation never mutates them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unit of the component forest.
///
/// `id` and `kind` deserialize to empty strings when absent so that
/// validation, not the JSON parser, reports which node is incomplete.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    #[serde(default)]
    pub id: String,

    /// Component kind, e.g. `button`, `hero`, `section`.
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub props: IndexMap<String, Value>,

    #[serde(default)]
    pub children: Vec<ComponentNode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<ComponentStyles>,

    /// ARIA-style attribute name to value, in author order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<IndexMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoData>,
}

/// Styling hooks attached to a node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// CSS property to value.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub inline: IndexMap<String, String>,

    /// Breakpoint prefix (`sm`, `md`, `lg`) to extra class list.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responsive: IndexMap<String, String>,
}

/// Page-level SEO bundle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
}

impl ComponentNode {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.styles.get_or_insert_with(ComponentStyles::default).class_name =
            Some(class_name.into());
        self
    }

    pub fn with_inline_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles
            .get_or_insert_with(ComponentStyles::default)
            .inline
            .insert(property.into(), value.into());
        self
    }

    pub fn with_responsive(mut self, breakpoint: impl Into<String>, classes: impl Into<String>) -> Self {
        self.styles
            .get_or_insert_with(ComponentStyles::default)
            .responsive
            .insert(breakpoint.into(), classes.into());
        self
    }

    pub fn with_aria(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.accessibility
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_seo(mut self, seo: SeoData) -> Self {
        self.seo = Some(seo);
        self
    }

    /// Text content: the `text` prop, falling back to `children`.
    pub fn text(&self) -> Option<String> {
        ["text", "children"]
            .iter()
            .filter_map(|key| self.props.get(*key))
            .find_map(|value| match value {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
    }

    pub fn class_name(&self) -> Option<&str> {
        self.styles.as_ref()?.class_name.as_deref()
    }

    /// Non-empty ARIA attribute map, if any.
    pub fn aria(&self) -> Option<&IndexMap<String, String>> {
        self.accessibility.as_ref().filter(|map| !map.is_empty())
    }

    /// Depth-first pre-order traversal of this subtree, starting at `self`.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_size(&self) -> usize {
        self.walk().count()
    }
}

/// Iterator returned by [`ComponentNode::walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<&'a ComponentNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a ComponentNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
