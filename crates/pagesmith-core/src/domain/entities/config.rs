//! The `ExportConfig` value object and its typestate builder.
//!
//! An `ExportConfig` is the closed set of choices that parameterizes one
//! export run. Unset fields are inferred at build time and cross-field rules
//! are validated; once a config exists it is guaranteed consistent.
//!
//! # Typestate builder
//!
//! Two phantom markers (`NoFramework` / `HasFramework`) enforce at compile
//! time that a framework is chosen before anything else, because every
//! inference depends on it.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::domain::{
    capabilities,
    error::DomainError,
    value_objects::{Bundler, Framework, Styling, Testing},
};

pub const DEFAULT_PROJECT_NAME: &str = "pagesmith-export";

/// Fully-validated export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    framework: Framework,
    #[serde(default)]
    typescript: bool,
    #[serde(default)]
    styling: Styling,
    #[serde(default = "default_bundler")]
    bundler: Bundler,
    #[serde(default)]
    testing: Option<Testing>,
    #[serde(default = "enabled")]
    accessibility: bool,
    #[serde(default = "enabled")]
    seo: bool,
    #[serde(default = "enabled")]
    performance: bool,
    #[serde(default = "default_project_name")]
    project_name: String,
}

fn default_bundler() -> Bundler {
    Bundler::Vite
}

fn enabled() -> bool {
    true
}

fn default_project_name() -> String {
    DEFAULT_PROJECT_NAME.to_string()
}

impl ExportConfig {
    /// Start building a new `ExportConfig`.
    pub fn builder() -> ExportConfigBuilder<NoFramework> {
        ExportConfigBuilder::new()
    }

    pub const fn framework(&self) -> Framework {
        self.framework
    }
    pub const fn typescript(&self) -> bool {
        self.typescript
    }
    pub const fn styling(&self) -> Styling {
        self.styling
    }
    pub const fn bundler(&self) -> Bundler {
        self.bundler
    }
    pub const fn testing(&self) -> Option<Testing> {
        self.testing
    }
    pub const fn accessibility(&self) -> bool {
        self.accessibility
    }
    pub const fn seo(&self) -> bool {
        self.seo
    }
    pub const fn performance(&self) -> bool {
        self.performance
    }
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Validate cross-field consistency.
    ///
    /// Called automatically by the builder. Available for re-validation after
    /// deserialization.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_project_name(&self.project_name)?;

        if capabilities::requires_typescript(self.framework) && !self.typescript {
            return Err(DomainError::IncompatibleOption {
                option: "typescript=false".into(),
                framework: self.framework.to_string(),
                reason: "components are emitted as TypeScript classes".into(),
            });
        }

        if let Err(reason) = capabilities::validate_styling(self.framework, self.styling) {
            return Err(DomainError::IncompatibleOption {
                option: format!("styling={}", self.styling),
                framework: self.framework.to_string(),
                reason,
            });
        }

        if let Err(reason) = capabilities::validate_bundler(self.framework, self.bundler) {
            return Err(DomainError::IncompatibleOption {
                option: format!("bundler={}", self.bundler),
                framework: self.framework.to_string(),
                reason,
            });
        }

        Ok(())
    }

    /// Script file extension for non-component sources (`ts` or `js`).
    pub const fn script_extension(&self) -> &'static str {
        if self.typescript { "ts" } else { "js" }
    }
}

impl fmt::Display for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {})",
            self.framework,
            if self.typescript { "typescript" } else { "javascript" },
            self.styling,
            self.bundler
        )?;
        if let Some(testing) = self.testing {
            write!(f, " + {testing}")?;
        }
        Ok(())
    }
}

/// npm package-name rules that matter for a generated manifest.
fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let reason = if name.is_empty() {
        Some("project name cannot be empty")
    } else if name.len() > 214 {
        Some("project name cannot exceed 214 characters")
    } else if name.chars().any(|c| c.is_ascii_uppercase()) {
        Some("project name must be lowercase")
    } else if name.starts_with('.') || name.starts_with('_') {
        Some("project name cannot start with '.' or '_'")
    } else if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '/'))
    {
        Some("project name may only contain lowercase letters, digits, '-', '_', '.', '@' and '/'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DomainError::InvalidConfig(format!("{reason}: '{name}'"))),
        None => Ok(()),
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: framework has not yet been set.
pub struct NoFramework;
/// Marker: framework has been set; other fields may now be configured.
pub struct HasFramework;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`ExportConfig`].
pub struct ExportConfigBuilder<F> {
    framework: Option<Framework>,
    typescript: Option<bool>,
    styling: Option<Styling>,
    bundler: Option<Bundler>,
    testing: Option<Testing>,
    accessibility: bool,
    seo: bool,
    performance: bool,
    project_name: Option<String>,
    _marker: PhantomData<F>,
}

impl ExportConfigBuilder<NoFramework> {
    pub fn new() -> Self {
        Self {
            framework: None,
            typescript: None,
            styling: None,
            bundler: None,
            testing: None,
            accessibility: true,
            seo: true,
            performance: true,
            project_name: None,
            _marker: PhantomData,
        }
    }

    /// Set the framework. This transitions the builder to `HasFramework`.
    pub fn framework(self, framework: Framework) -> ExportConfigBuilder<HasFramework> {
        ExportConfigBuilder {
            framework: Some(framework),
            typescript: self.typescript,
            styling: self.styling,
            bundler: self.bundler,
            testing: self.testing,
            accessibility: self.accessibility,
            seo: self.seo,
            performance: self.performance,
            project_name: self.project_name,
            _marker: PhantomData,
        }
    }
}

impl Default for ExportConfigBuilder<NoFramework> {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportConfigBuilder<HasFramework> {
    pub fn typescript(mut self, typescript: bool) -> Self {
        self.typescript = Some(typescript);
        self
    }

    pub fn styling(mut self, styling: Styling) -> Self {
        self.styling = Some(styling);
        self
    }

    pub fn bundler(mut self, bundler: Bundler) -> Self {
        self.bundler = Some(bundler);
        self
    }

    pub fn testing(mut self, testing: impl Into<Option<Testing>>) -> Self {
        self.testing = testing.into();
        self
    }

    pub fn accessibility(mut self, enabled: bool) -> Self {
        self.accessibility = enabled;
        self
    }

    pub fn seo(mut self, enabled: bool) -> Self {
        self.seo = enabled;
        self
    }

    pub fn performance(mut self, enabled: bool) -> Self {
        self.performance = enabled;
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Build and validate the config, inferring any unset fields.
    ///
    /// Inference:
    /// 1. `typescript`: required frameworks default to on, others off
    /// 2. `bundler`: the framework's registered default
    /// 3. `styling`: plain CSS
    pub fn build(self) -> Result<ExportConfig, DomainError> {
        let Some(framework) = self.framework else {
            return Err(DomainError::InvalidConfig("framework is required".into()));
        };

        let config = ExportConfig {
            framework,
            typescript: self
                .typescript
                .unwrap_or_else(|| capabilities::requires_typescript(framework)),
            styling: self.styling.unwrap_or_default(),
            bundler: self
                .bundler
                .unwrap_or_else(|| capabilities::infer_bundler(framework)),
            testing: self.testing,
            accessibility: self.accessibility,
            seo: self.seo,
            performance: self.performance,
            project_name: self
                .project_name
                .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
        };

        config.validate()?;
        Ok(config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn react() -> ExportConfigBuilder<HasFramework> {
        ExportConfig::builder().framework(Framework::React)
    }

    #[test]
    fn react_defaults() {
        let config = react().build().unwrap();
        assert!(!config.typescript());
        assert_eq!(config.styling(), Styling::Css);
        assert_eq!(config.bundler(), Bundler::Vite);
        assert_eq!(config.testing(), None);
        assert!(config.accessibility() && config.seo() && config.performance());
        assert_eq!(config.project_name(), DEFAULT_PROJECT_NAME);
    }

    #[test]
    fn angular_infers_typescript() {
        let config = ExportConfig::builder()
            .framework(Framework::Angular)
            .build()
            .unwrap();
        assert!(config.typescript());
        assert_eq!(config.script_extension(), "ts");
    }

    #[test]
    fn angular_rejects_explicit_javascript() {
        let err = ExportConfig::builder()
            .framework(Framework::Angular)
            .typescript(false)
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::IncompatibleOption { .. }));
    }

    #[test]
    fn styled_components_rejected_outside_react() {
        let err = ExportConfig::builder()
            .framework(Framework::Svelte)
            .styling(Styling::StyledComponents)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("styling=styled-components"));
    }

    #[test]
    fn invalid_project_names_are_rejected() {
        for name in ["", "My App", "Upper", ".hidden", "bad name!"] {
            assert!(react().project_name(name).build().is_err(), "{name:?}");
        }
        assert!(react().project_name("@acme/landing-page").build().is_ok());
    }

    #[test]
    fn testing_accepts_plain_value() {
        let config = react().testing(Testing::Vitest).build().unwrap();
        assert_eq!(config.testing(), Some(Testing::Vitest));
    }

    #[test]
    fn deserializes_with_defaults_then_validates() {
        let config: ExportConfig =
            serde_json::from_str(r#"{ "framework": "vue", "styling": "tailwind" }"#).unwrap();
        assert_eq!(config.framework(), Framework::Vue);
        assert_eq!(config.bundler(), Bundler::Vite);
        assert!(config.accessibility());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn display_summarizes_choices() {
        let config = react()
            .typescript(true)
            .styling(Styling::Tailwind)
            .testing(Testing::Jest)
            .build()
            .unwrap();
        assert_eq!(config.to_string(), "react (typescript, tailwind, vite) + jest");
    }
}
