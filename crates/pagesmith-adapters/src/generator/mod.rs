//! Stateless helpers composed by the target backends.
//!
//! Nothing here knows which framework it is emitting for. Backends plan
//! the forest with [`ComponentPlan`], render elements through their own
//! [`Markup`] implementation and reuse the page, stylesheet and test
//! generators.

pub mod markup;
pub mod naming;
pub mod page;
pub mod plan;
pub mod props;
pub mod test_file;

pub use markup::{
    Markup, accessibility_attributes, accessibility_doc_lines, child_content, class_tokens,
    escape_html, render_element, seo_head_tags,
};
pub use naming::{is_void_tag, semantic_tag, to_camel_case, to_kebab_case, to_pascal_case};
pub use page::{entry_script, global_stylesheet, host_page, stylesheet_path};
pub use plan::{ComponentPlan, MAX_DEPTH, PlannedComponent, RecursionPath};
pub use props::{PropSpec, infer_type, js_literal, prop_specs};
pub use test_file::{TestHarness, component_test};

/// Names of the files every backend emits around the components. Planned
/// components never take one of these.
pub const SHELL_NAMES: &[&str] = &["App", "Root", "Main"];

/// Comment syntax of the emitted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/** ... */`
    Block,
    /// `<!-- ... -->`
    Html,
}

/// Wrap `lines` in a comment.
///
/// Lines may carry user text, so anything that would close the comment
/// early is broken up first.
pub fn comment_block(lines: &[String], style: CommentStyle) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + 2);
    match style {
        CommentStyle::Block => {
            out.push("/**".to_string());
            out.extend(lines.iter().map(|l| {
                let safe = l.replace("*/", "*\\/");
                format!(" * {safe}").trim_end().to_string()
            }));
            out.push(" */".to_string());
        }
        CommentStyle::Html => {
            out.push("<!--".to_string());
            out.extend(lines.iter().map(|l| {
                let safe = split_dashes(l);
                format!("  {safe}").trim_end().to_string()
            }));
            out.push("-->".to_string());
        }
    }
    out
}

/// Insert a space between adjacent dashes; `--` may not appear inside an
/// HTML comment.
fn split_dashes(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut prev = None;
    for c in line.chars() {
        if c == '-' && prev == Some('-') {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Accessibility comment for a node, or nothing when the flag is off.
pub fn accessibility_comment(
    node: &pagesmith_core::domain::ComponentNode,
    config: &pagesmith_core::domain::ExportConfig,
    style: CommentStyle,
) -> Vec<String> {
    if !config.accessibility() {
        return Vec::new();
    }
    comment_block(&accessibility_doc_lines(node), style)
}
