//! Element markup shared by every backend.
//!
//! Backends differ only in how they bind props, reference child
//! components and spell the class attribute; those choices are the
//! [`Markup`] trait. Everything else (tag choice, class tokens, ARIA
//! attributes, element-specific attributes) is decided here once.

use indexmap::IndexMap;
use pagesmith_core::domain::{ComponentNode, ExportConfig};
use serde_json::Value;

use super::naming::{is_interactive_tag, is_void_tag, prop_identifier, semantic_tag};
use super::props::is_function_literal;

/// Target-specific template syntax.
pub trait Markup {
    /// Attribute carrying CSS classes.
    fn class_attr(&self) -> &'static str {
        "class"
    }

    /// Attribute bound to a prop, e.g. `src={src}`.
    fn bind_attr(&self, attr: &str, prop: &str, value: &Value) -> String;

    /// Text content bound to a prop.
    fn bind_text(&self, prop: &str, text: &str) -> String;

    /// Event listener bound to a callback prop. `None` when the target has
    /// no inline listener syntax.
    fn bind_event(&self, _event: &str, _prop: &str) -> Option<String> {
        None
    }

    /// Reference to a child component.
    fn child_ref(&self, name: &str) -> String {
        format!("<{name} />")
    }

    /// Inline style attribute.
    fn style_attr(&self, styles: &IndexMap<String, String>) -> String {
        format!("style=\"{}\"", escape_html(&inline_css(styles)))
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// `prop: value; prop: value`
pub fn inline_css(styles: &IndexMap<String, String>) -> String {
    styles
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Class name tokens followed by breakpoint-prefixed responsive classes.
pub fn class_tokens(node: &ComponentNode) -> Vec<String> {
    let Some(styles) = &node.styles else {
        return Vec::new();
    };

    let mut tokens: Vec<String> = styles
        .class_name
        .iter()
        .flat_map(|c| c.split_whitespace())
        .map(str::to_string)
        .collect();

    for (breakpoint, classes) in &styles.responsive {
        tokens.extend(
            classes
                .split_whitespace()
                .map(|class| format!("{breakpoint}:{class}")),
        );
    }
    tokens
}

/// ARIA attributes as `key="value"`, in insertion order.
pub fn accessibility_attributes(node: &ComponentNode) -> Vec<String> {
    node.aria()
        .map(|aria| {
            aria.iter()
                .map(|(k, v)| format!("{k}=\"{}\"", escape_html(v)))
                .collect()
        })
        .unwrap_or_default()
}

/// Body of the "Accessibility features" comment block.
pub fn accessibility_doc_lines(node: &ComponentNode) -> Vec<String> {
    let tag = semantic_tag(&node.kind);
    let mut lines = vec![
        "Accessibility features:".to_string(),
        format!("- Semantic <{tag}> element"),
    ];
    if is_interactive_tag(tag) {
        lines.push("- Keyboard operable by default".to_string());
    }
    if tag == "img" {
        lines.push("- Alternative text via `alt`".to_string());
    }
    if let Some(aria) = node.aria() {
        for (k, v) in aria {
            lines.push(format!("- {k}: {v}"));
        }
    }
    lines
}

/// Content lines of an element.
///
/// Children become component references; a leaf shows its `text` or
/// `children` prop through `markup`; otherwise the element is empty.
pub fn child_content(node: &ComponentNode, children: &[String], markup: &impl Markup) -> Vec<String> {
    if !children.is_empty() {
        return children.iter().map(|name| markup.child_ref(name)).collect();
    }

    let text_prop = ["text", "children"]
        .into_iter()
        .find(|key| node.props.get(*key).is_some_and(|v| !v.is_null()));

    match (text_prop, node.text()) {
        (Some(key), Some(text)) => {
            let prop = prop_identifier(key).unwrap_or_else(|| key.to_string());
            vec![markup.bind_text(&prop, &text)]
        }
        _ => Vec::new(),
    }
}

/// Attribute list for `node`'s root element.
fn attributes(node: &ComponentNode, config: &ExportConfig, markup: &impl Markup) -> Vec<String> {
    let tag = semantic_tag(&node.kind);
    let mut attrs = Vec::new();

    let bound = |attr: &str| -> Option<String> {
        let value = node.props.get(attr)?;
        let prop = prop_identifier(attr)?;
        Some(markup.bind_attr(attr, &prop, value))
    };

    match tag {
        "button" => attrs.push("type=\"button\"".to_string()),
        "a" => attrs.extend(bound("href")),
        "img" => {
            attrs.extend(bound("src"));
            attrs.push(bound("alt").unwrap_or_else(|| "alt=\"\"".to_string()));
            if config.performance() {
                attrs.push("loading=\"lazy\"".to_string());
                attrs.push("decoding=\"async\"".to_string());
            }
        }
        "input" => {
            attrs.extend(bound("type"));
            attrs.extend(bound("name"));
            attrs.extend(bound("placeholder"));
        }
        _ => {}
    }

    for (key, value) in &node.props {
        let Some(event) = event_name(key) else {
            continue;
        };
        if !is_function_literal(value) {
            continue;
        }
        if let Some(prop) = prop_identifier(key) {
            attrs.extend(markup.bind_event(&event, &prop));
        }
    }

    let classes = class_tokens(node);
    if !classes.is_empty() {
        attrs.push(format!(
            "{}=\"{}\"",
            markup.class_attr(),
            escape_html(&classes.join(" "))
        ));
    }

    if let Some(styles) = &node.styles {
        if !styles.inline.is_empty() {
            attrs.push(markup.style_attr(&styles.inline));
        }
    }

    if config.accessibility() {
        attrs.extend(accessibility_attributes(node));
    }
    attrs
}

/// `onClick` -> `click`.
fn event_name(key: &str) -> Option<String> {
    let rest = key.strip_prefix("on")?;
    rest.starts_with(|c: char| c.is_ascii_uppercase())
        .then(|| rest.to_ascii_lowercase())
}

/// Render `node`'s root element around `inner`, indented by `indent`.
pub fn render_element(
    node: &ComponentNode,
    config: &ExportConfig,
    markup: &impl Markup,
    inner: &[String],
    indent: usize,
) -> Vec<String> {
    let pad = " ".repeat(indent);
    let tag = semantic_tag(&node.kind);
    let attrs = attributes(node, config, markup);
    let open = if attrs.is_empty() {
        tag.to_string()
    } else {
        format!("{tag} {}", attrs.join(" "))
    };

    if is_void_tag(tag) {
        return vec![format!("{pad}<{open} />")];
    }

    match inner {
        [] => vec![format!("{pad}<{open}></{tag}>")],
        [line] if !line.contains('\n') && !line.starts_with('<') => {
            vec![format!("{pad}<{open}>{line}</{tag}>")]
        }
        lines => {
            let mut out = vec![format!("{pad}<{open}>")];
            for line in lines {
                for sub in line.lines() {
                    out.push(format!("{pad}  {sub}"));
                }
            }
            out.push(format!("{pad}</{tag}>"));
            out
        }
    }
}

/// `<head>` tags from the first node in the forest carrying SEO data.
///
/// Includes Open Graph tags and a JSON-LD `WebPage` block.
pub fn seo_head_tags(nodes: &[ComponentNode], fallback_title: &str) -> Vec<String> {
    let seo = first_seo(nodes);

    let title = seo
        .and_then(|s| s.title.as_deref())
        .unwrap_or(fallback_title);
    let mut tags = vec![format!("<title>{}</title>", escape_html(title))];

    let Some(seo) = seo else {
        return tags;
    };

    if let Some(description) = &seo.description {
        tags.push(format!(
            "<meta name=\"description\" content=\"{}\" />",
            escape_html(description)
        ));
    }
    if !seo.keywords.is_empty() {
        tags.push(format!(
            "<meta name=\"keywords\" content=\"{}\" />",
            escape_html(&seo.keywords.join(", "))
        ));
    }
    if let Some(url) = &seo.canonical_url {
        tags.push(format!("<link rel=\"canonical\" href=\"{}\" />", escape_html(url)));
    }

    tags.push(format!(
        "<meta property=\"og:title\" content=\"{}\" />",
        escape_html(title)
    ));
    if let Some(description) = &seo.description {
        tags.push(format!(
            "<meta property=\"og:description\" content=\"{}\" />",
            escape_html(description)
        ));
    }
    tags.push("<meta property=\"og:type\" content=\"website\" />".to_string());

    let mut json_ld = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "WebPage",
        "name": title,
    });
    if let Some(description) = &seo.description {
        json_ld["description"] = Value::from(description.as_str());
    }
    if let Some(url) = &seo.canonical_url {
        json_ld["url"] = Value::from(url.as_str());
    }
    // `</` cannot appear inside a script element.
    let json_ld = json_ld.to_string().replace("</", "<\\/");
    tags.push(format!("<script type=\"application/ld+json\">{json_ld}</script>"));

    tags
}

fn first_seo(nodes: &[ComponentNode]) -> Option<&pagesmith_core::domain::SeoData> {
    nodes.iter().find_map(|node| {
        node.seo
            .as_ref()
            .or_else(|| first_seo(&node.children))
    })
}
