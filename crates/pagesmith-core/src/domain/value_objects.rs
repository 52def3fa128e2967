//! Domain value objects: Framework, Styling, Bundler, Testing.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO capability logic. Package lists, file extensions and
//! compatibility rules live in `capabilities.rs`. This file only defines
//! the types, their string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a capability entry in `capabilities.rs`
//! 4. Register a backend in the adapters crate (frameworks only)

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Framework ────────────────────────────────────────────────────────────────

/// A target framework for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
    Svelte,
    Angular,
    #[serde(alias = "vanilla")]
    Html,
}

impl Framework {
    pub const ALL: [Framework; 5] = [
        Self::React,
        Self::Vue,
        Self::Svelte,
        Self::Angular,
        Self::Html,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Svelte => "svelte",
            Self::Angular => "angular",
            Self::Html => "html",
        }
    }

    /// Human-facing name used in generated documentation.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::React => "React",
            Self::Vue => "Vue 3",
            Self::Svelte => "Svelte",
            Self::Angular => "Angular",
            Self::Html => "HTML/CSS/JavaScript",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "react" | "jsx" => Ok(Self::React),
            "vue" | "vue3" => Ok(Self::Vue),
            "svelte" => Ok(Self::Svelte),
            "angular" | "ng" => Ok(Self::Angular),
            "html" | "vanilla" => Ok(Self::Html),
            _ => Err(DomainError::UnsupportedFramework(s.to_string())),
        }
    }
}

// ── Styling ──────────────────────────────────────────────────────────────────

/// Styling system used by the exported project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Styling {
    #[default]
    Css,
    CssModules,
    Tailwind,
    Scss,
    StyledComponents,
}

impl Styling {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::CssModules => "css-modules",
            Self::Tailwind => "tailwind",
            Self::Scss => "scss",
            Self::StyledComponents => "styled-components",
        }
    }

    /// Extension of the global stylesheet the backends emit.
    pub const fn stylesheet_extension(&self) -> &'static str {
        match self {
            Self::Scss => "scss",
            _ => "css",
        }
    }
}

impl fmt::Display for Styling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Styling {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" | "plain" => Ok(Self::Css),
            "css-modules" | "modules" => Ok(Self::CssModules),
            "tailwind" | "tailwindcss" => Ok(Self::Tailwind),
            "scss" | "sass" => Ok(Self::Scss),
            "styled-components" | "styled" => Ok(Self::StyledComponents),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown styling: {other}"
            ))),
        }
    }
}

// ── Bundler ──────────────────────────────────────────────────────────────────

/// Build tool for the exported project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bundler {
    Vite,
    Webpack,
    Parcel,
}

impl Bundler {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vite => "vite",
            Self::Webpack => "webpack",
            Self::Parcel => "parcel",
        }
    }
}

impl fmt::Display for Bundler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bundler {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vite" => Ok(Self::Vite),
            "webpack" => Ok(Self::Webpack),
            "parcel" => Ok(Self::Parcel),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown bundler: {other}"
            ))),
        }
    }
}

// ── Testing ──────────────────────────────────────────────────────────────────

/// Test runner for the exported project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Testing {
    Vitest,
    Jest,
}

impl Testing {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vitest => "vitest",
            Self::Jest => "jest",
        }
    }
}

impl fmt::Display for Testing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Testing {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vitest" => Ok(Self::Vitest),
            "jest" => Ok(Self::Jest),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown testing framework: {other}"
            ))),
        }
    }
}

// ── FileKind ─────────────────────────────────────────────────────────────────

/// Classification of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Component,
    Config,
    Style,
    Test,
    Documentation,
}

impl FileKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Config => "config",
            Self::Style => "style",
            Self::Test => "test",
            Self::Documentation => "documentation",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_parses_aliases_case_insensitively() {
        assert_eq!(Framework::from_str("React").unwrap(), Framework::React);
        assert_eq!(Framework::from_str("vanilla").unwrap(), Framework::Html);
        assert_eq!(Framework::from_str("NG").unwrap(), Framework::Angular);
    }

    #[test]
    fn unknown_framework_names_the_value() {
        let err = Framework::from_str("solid").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported framework: solid");
    }

    #[test]
    fn styling_round_trips_through_display() {
        for styling in [
            Styling::Css,
            Styling::CssModules,
            Styling::Tailwind,
            Styling::Scss,
            Styling::StyledComponents,
        ] {
            assert_eq!(Styling::from_str(&styling.to_string()).unwrap(), styling);
        }
    }

    #[test]
    fn serde_uses_kebab_case_for_styling() {
        let json = serde_json::to_string(&Styling::StyledComponents).unwrap();
        assert_eq!(json, "\"styled-components\"");
    }

    #[test]
    fn scss_gets_scss_stylesheet() {
        assert_eq!(Styling::Scss.stylesheet_extension(), "scss");
        assert_eq!(Styling::Tailwind.stylesheet_extension(), "css");
    }
}
