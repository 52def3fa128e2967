//! Export Service - the orchestrator.
//!
//! This service runs one export end to end:
//! 1. Validate the component forest and config
//! 2. Resolve the target backend
//! 3. Generate component files
//! 4. Generate configuration files
//! 5. Generate documentation
//! 6. Assemble, resolve dependencies, compute metadata
//!
//! Every stage is fatal. A failure anywhere is reported once through the
//! progress sink and returned as a single [`ExportError`].

use chrono::Utc;
use tracing::{debug, error, info, instrument};

use crate::{
    application::{
        ports::{BackendRegistry, ProgressSink},
        services::{config_files, report},
    },
    domain::{
        ComponentNode, DomainError, DomainValidator as validator, ExportConfig, ExportResult,
        Framework, resolve_dependencies,
    },
    error::{ExportError, PagesmithResult},
};

/// Main export orchestrator.
pub struct ExportService {
    registry: Box<dyn BackendRegistry>,
    progress: Option<Box<dyn ProgressSink>>,
}

impl ExportService {
    /// Create a new export service over a backend registry.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use pagesmith_core::application::ExportService;
    ///
    /// let service = ExportService::new(registry) // impl BackendRegistry
    ///     .with_progress(|pct: u8, msg: &str| println!("{pct:>3}% {msg}"));
    /// ```
    pub fn new(registry: Box<dyn BackendRegistry>) -> Self {
        Self {
            registry,
            progress: None,
        }
    }

    /// Attach a progress sink. Replaces any previous sink.
    pub fn with_progress(mut self, sink: impl ProgressSink + 'static) -> Self {
        self.progress = Some(Box::new(sink));
        self
    }

    /// Frameworks the registry can export to.
    pub fn backends(&self) -> PagesmithResult<Vec<Framework>> {
        self.registry.frameworks()
    }

    /// Export a component forest.
    ///
    /// Returns either a complete [`ExportResult`] or an [`ExportError`];
    /// never a partial file set.
    #[instrument(
        skip_all,
        fields(
            framework = %config.framework(),
            components = nodes.len()
        )
    )]
    pub fn export(
        &self,
        nodes: &[ComponentNode],
        config: &ExportConfig,
    ) -> Result<ExportResult, ExportError> {
        self.run(nodes, config).map_err(|cause| {
            let err = ExportError::from(cause);
            error!(error = %err, category = ?err.category(), "Export aborted");
            self.report(0, &err.to_string());
            err
        })
    }

    fn run(&self, nodes: &[ComponentNode], config: &ExportConfig) -> PagesmithResult<ExportResult> {
        self.report(0, "Starting export");

        // 1. Validate
        validator::validate_forest(nodes)?;
        validator::validate_config(config)?;
        self.report(10, "Validated component tree");

        // 2. Resolve backend
        let framework = config.framework();
        let backend = self
            .registry
            .get(framework)?
            .ok_or_else(|| DomainError::UnsupportedFramework(framework.to_string()))?;
        self.report(20, &format!("Resolved {framework} backend"));

        // 3. Component files
        self.report(30, "Generating components");
        let component_files = backend.generate(nodes, config)?;
        info!(files = component_files.len(), "Components generated");

        // 4. Config files
        self.report(70, "Generating configuration files");
        let config_files = config_files::generate_config_files(config)?;

        // 5. Documentation
        self.report(85, "Generating documentation");
        let readme = report::generate_documentation(nodes, config)?;

        // 6. Assemble in generation order
        let mut files = component_files;
        files.extend(config_files);
        files.push(readme);
        validator::validate_files(&files)?;
        for file in &files {
            debug!(path = %file.path, kind = %file.kind, bytes = file.size(), "Emitted");
        }

        // 7. Dependencies
        self.report(95, "Finalizing export");
        let deps = resolve_dependencies(config);

        // 8. Metadata
        let metadata = report::compute_metadata(&files, nodes, config, Utc::now());

        info!(
            files = files.len(),
            bytes = metadata.performance.bundle_size_bytes,
            "Export completed successfully"
        );
        self.report(100, "Export complete");

        Ok(ExportResult {
            files,
            dependencies: deps.dependencies,
            dev_dependencies: deps.dev_dependencies,
            scripts: deps.scripts,
            metadata,
        })
    }

    fn report(&self, percent: u8, message: &str) {
        if let Some(sink) = &self.progress {
            sink.report(percent, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockBackendRegistry, MockTargetBackend, TargetBackend};
    use crate::domain::{FileKind, GeneratedFile, Styling, Testing, WcagLevel};
    use crate::error::{ErrorCategory, PagesmithError};

    fn button() -> ComponentNode {
        ComponentNode::new("btn-1", "button")
            .with_prop("text", "Click me")
            .with_class_name("primary")
            .with_aria("aria-label", "Primary action")
    }

    fn react_config() -> ExportConfig {
        ExportConfig::builder()
            .framework(Framework::React)
            .typescript(true)
            .styling(Styling::Tailwind)
            .testing(Testing::Vitest)
            .build()
            .unwrap()
    }

    fn stub_backend() -> MockTargetBackend {
        let mut backend = MockTargetBackend::new();
        backend.expect_framework().return_const(Framework::React);
        backend.expect_generate().returning(|nodes, _| {
            let mut files = Vec::new();
            for node in nodes {
                files.push(GeneratedFile::component(
                    format!("src/components/{}.tsx", node.kind),
                    format!("<{} />", node.id),
                )?);
            }
            files.push(GeneratedFile::component("src/App.tsx", "app")?);
            files.push(GeneratedFile::component("src/main.tsx", "main")?);
            Ok(files)
        });
        backend
    }

    fn registry_with(backend: MockTargetBackend) -> MockBackendRegistry {
        let backend: Arc<dyn TargetBackend> = Arc::new(backend);
        let mut registry = MockBackendRegistry::new();
        registry
            .expect_get()
            .returning(move |_| Ok(Some(backend.clone())));
        registry
    }

    type Events = Arc<Mutex<Vec<(u8, String)>>>;

    fn recording(service: ExportService) -> (ExportService, Events) {
        let events: Events = Arc::default();
        let sink = events.clone();
        let service = service.with_progress(move |pct: u8, msg: &str| {
            sink.lock().unwrap().push((pct, msg.to_string()));
        });
        (service, events)
    }

    #[test]
    fn successful_export_assembles_in_order() {
        let service = ExportService::new(Box::new(registry_with(stub_backend())));
        let result = service.export(&[button()], &react_config()).unwrap();

        let kinds: Vec<_> = result.files.iter().map(|f| f.kind).collect();
        let first_config = kinds.iter().position(|k| *k == FileKind::Config).unwrap();
        assert!(kinds[..first_config].iter().all(|k| *k == FileKind::Component));
        assert_eq!(result.files.last().unwrap().path.as_str(), "README.md");
        assert!(result.dependencies.contains_key("tailwindcss"));
        assert!(result.dev_dependencies.contains_key("vite"));
        assert_eq!(result.metadata.accessibility.wcag_level, WcagLevel::AA);
        assert_eq!(result.metadata.file_count, result.files.len());
    }

    #[test]
    fn progress_hits_every_milestone() {
        let service = ExportService::new(Box::new(registry_with(stub_backend())));
        let (service, events) = recording(service);
        service.export(&[button()], &react_config()).unwrap();

        let percents: Vec<u8> = events.lock().unwrap().iter().map(|(p, _)| *p).collect();
        assert_eq!(percents, vec![0, 10, 20, 30, 70, 85, 95, 100]);
    }

    #[test]
    fn empty_forest_fails_before_backend_lookup() {
        let mut registry = MockBackendRegistry::new();
        registry.expect_get().times(0);
        let service = ExportService::new(Box::new(registry));
        let (service, events) = recording(service);

        let err = service.export(&[], &react_config()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(matches!(
            err.cause(),
            PagesmithError::Domain(DomainError::EmptyForest)
        ));

        let last = events.lock().unwrap().last().cloned().unwrap();
        assert_eq!(last.0, 0);
        assert!(last.1.starts_with("Export failed: "));
    }

    #[test]
    fn node_without_type_never_reaches_backend() {
        let mut backend = MockTargetBackend::new();
        backend.expect_generate().times(0);
        let service = ExportService::new(Box::new(registry_with(backend)));

        let err = service
            .export(&[ComponentNode::new("x", "")], &react_config())
            .unwrap_err();
        assert!(err.to_string().contains("'type'"));
    }

    #[test]
    fn unregistered_framework_fails_naming_it() {
        let mut registry = MockBackendRegistry::new();
        registry.expect_get().returning(|_| Ok(None));
        let service = ExportService::new(Box::new(registry));

        let config = ExportConfig::builder().framework(Framework::Svelte).build().unwrap();
        let err = service.export(&[button()], &config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Export failed: Unsupported framework: svelte"
        );
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn backend_failure_is_wrapped_not_swallowed() {
        let mut backend = MockTargetBackend::new();
        backend.expect_generate().returning(|_, _| {
            Err(ApplicationError::GenerationFailed {
                framework: "react".into(),
                component: "btn-1".into(),
                reason: "boom".into(),
            }
            .into())
        });
        let service = ExportService::new(Box::new(registry_with(backend)));
        let (service, events) = recording(service);

        let err = service.export(&[button()], &react_config()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Generation);
        let failures: Vec<_> = events
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, m)| m.starts_with("Export failed"))
            .cloned()
            .collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, 0);
    }

    #[test]
    fn backend_colliding_with_config_file_is_rejected() {
        let mut backend = MockTargetBackend::new();
        backend
            .expect_generate()
            .returning(|_, _| Ok(vec![GeneratedFile::config("package.json", "{}")?]));
        let service = ExportService::new(Box::new(registry_with(backend)));

        let err = service.export(&[button()], &react_config()).unwrap_err();
        assert!(matches!(
            err.cause(),
            PagesmithError::Domain(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn repeated_exports_produce_identical_files() {
        let service = ExportService::new(Box::new(registry_with(stub_backend())));
        let first = service.export(&[button()], &react_config()).unwrap();
        let second = service.export(&[button()], &react_config()).unwrap();
        assert_eq!(first.files, second.files);
    }

    #[test]
    fn missing_progress_sink_is_fine() {
        let service = ExportService::new(Box::new(registry_with(stub_backend())));
        assert!(service.export(&[button()], &react_config()).is_ok());
    }
}
