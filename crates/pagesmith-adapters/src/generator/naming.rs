//! Identifier casing and semantic tag mapping.

use convert_case::{Case, Casing};

/// Replace everything that cannot appear in an identifier with a word break.
fn words(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect()
}

pub fn to_pascal_case(input: &str) -> String {
    words(input).to_case(Case::Pascal)
}

pub fn to_camel_case(input: &str) -> String {
    words(input).to_case(Case::Camel)
}

pub fn to_kebab_case(input: &str) -> String {
    words(input).to_case(Case::Kebab)
}

/// Words that cannot name a binding in strict-mode JS or TS.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// A usable JS identifier for a prop key, if one exists.
///
/// `for` and `class` take their DOM property names; any other reserved
/// word gets a `Prop` suffix.
pub fn prop_identifier(key: &str) -> Option<String> {
    let ident = to_camel_case(key);
    match ident.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return None,
    }
    Some(match ident.as_str() {
        "for" => "htmlFor".to_string(),
        "class" => "className".to_string(),
        word if RESERVED_WORDS.contains(&word) => format!("{word}Prop"),
        _ => ident,
    })
}

/// Native element for an abstract component type.
///
/// Unknown types render as a generic `div` container.
pub fn semantic_tag(kind: &str) -> &'static str {
    match kind.to_ascii_lowercase().as_str() {
        "button" => "button",
        "heading" | "title" => "h2",
        "hero" | "header" => "header",
        "image" | "img" => "img",
        "link" => "a",
        "paragraph" | "text" => "p",
        "section" => "section",
        "nav" | "navbar" | "navigation" => "nav",
        "footer" => "footer",
        "form" => "form",
        "input" => "input",
        "list" => "ul",
        "list-item" | "listitem" => "li",
        "article" | "card" => "article",
        "main" => "main",
        "aside" | "sidebar" => "aside",
        _ => "div",
    }
}

/// Elements that never carry content.
pub fn is_void_tag(tag: &str) -> bool {
    matches!(tag, "img" | "input")
}

/// Elements that are keyboard operable without extra wiring.
pub fn is_interactive_tag(tag: &str) -> bool {
    matches!(tag, "button" | "a" | "input")
}
