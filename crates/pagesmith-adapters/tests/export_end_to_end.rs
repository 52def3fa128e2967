//! End-to-end exports through every built-in backend.

use std::path::Path;

use pagesmith_adapters::{
    ChannelProgress, InMemoryBackendRegistry, LocalFilesystem, MemoryFilesystem,
};
use pagesmith_core::{
    application::{ExportService, ProjectWriter},
    domain::{
        Bundler, ComponentNode, DomainError, ExportConfig, FileKind, Framework, Styling, Testing,
        WcagLevel, resolve_dependencies,
    },
    error::{ErrorCategory, PagesmithError},
};
use serde_json::json;

fn service() -> ExportService {
    ExportService::new(Box::new(InMemoryBackendRegistry::with_builtin().unwrap()))
}

fn landing_page() -> Vec<ComponentNode> {
    serde_json::from_value(json!([
        {
            "id": "hero",
            "type": "hero",
            "styles": { "className": "hero", "responsive": { "md": "py-24" } },
            "accessibility": { "aria-labelledby": "hero-title" },
            "seo": { "title": "Acme", "description": "Rockets for everyone" },
            "children": [
                { "id": "hero-title", "type": "heading", "props": { "text": "Launch today" } },
                {
                    "id": "hero-cta",
                    "type": "button",
                    "props": { "text": "Get started" },
                    "accessibility": { "aria-label": "Get started with Acme" }
                }
            ]
        },
        {
            "id": "logo",
            "type": "image",
            "props": { "src": "/logo.svg", "alt": "Acme logo" }
        },
        { "id": "footer", "type": "footer", "props": { "text": "(c) Acme" } }
    ]))
    .unwrap()
}

fn config(framework: Framework) -> ExportConfig {
    ExportConfig::builder()
        .framework(framework)
        .testing(Testing::Vitest)
        .build()
        .unwrap()
}

#[test]
fn button_scenario_for_react_typescript_tailwind() {
    let button: ComponentNode = serde_json::from_value(json!({
        "id": "btn-1",
        "type": "button",
        "props": { "text": "Click me" },
        "children": [],
        "styles": { "className": "primary" },
        "accessibility": { "aria-label": "Primary action" }
    }))
    .unwrap();
    let config = ExportConfig::builder()
        .framework(Framework::React)
        .typescript(true)
        .styling(Styling::Tailwind)
        .bundler(Bundler::Vite)
        .testing(Testing::Vitest)
        .accessibility(true)
        .seo(true)
        .performance(true)
        .build()
        .unwrap();

    let result = service().export(&[button], &config).unwrap();

    let component = result.file("src/components/Button.tsx").unwrap();
    assert!(component.content.contains("text?: string;"));
    assert!(component.content.contains("aria-label=\"Primary action\""));
    assert!(component.content.contains("className=\"primary\""));

    assert!(result.dependencies.contains_key("tailwindcss"));
    assert!(result.dev_dependencies.contains_key("vite"));
    assert!(result.dev_dependencies.contains_key("@vitejs/plugin-react"));
    assert_eq!(result.metadata.accessibility.wcag_level, WcagLevel::AA);
}

#[test]
fn every_framework_exports_a_complete_project() {
    let forest = landing_page();
    for framework in Framework::ALL {
        let result = service()
            .export(&forest, &config(framework))
            .unwrap_or_else(|e| panic!("{framework}: {e}"));

        // One component file per top-level node, named by type.
        for name in ["Hero", "Image", "Footer"] {
            assert!(
                result
                    .files_of_kind(FileKind::Component)
                    .any(|f| f.path.as_str().contains(name)),
                "{framework}: no component file for {name}"
            );
        }

        // Manifest parses and matches the resolver.
        let manifest: serde_json::Value =
            serde_json::from_str(&result.file("package.json").unwrap().content).unwrap();
        let deps = resolve_dependencies(&config(framework));
        let dev_keys: Vec<&String> = manifest["devDependencies"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(dev_keys, deps.dev_dependencies.keys().collect::<Vec<_>>());

        assert_eq!(result.files_of_kind(FileKind::Test).count(), 3, "{framework}");
        assert_eq!(result.files.last().unwrap().path.as_str(), "README.md");
        assert_eq!(result.metadata.file_count, result.files.len());
    }
}

#[test]
fn accessibility_flag_gates_attributes_and_docs() {
    let forest = landing_page();
    for framework in Framework::ALL {
        let on = service().export(&forest, &config(framework)).unwrap();
        let cta = on
            .files_of_kind(FileKind::Component)
            .find(|f| f.path.as_str().contains("Button") || f.path.as_str().contains("button"))
            .unwrap();
        assert!(cta.content.contains("aria-label=\"Get started with Acme\""), "{framework}");

        let off_config = ExportConfig::builder()
            .framework(framework)
            .accessibility(false)
            .build()
            .unwrap();
        let off = service().export(&forest, &off_config).unwrap();
        assert!(
            off.files_of_kind(FileKind::Component)
                .all(|f| !f.content.contains("Accessibility features")),
            "{framework}"
        );
        assert_eq!(off.metadata.accessibility.wcag_level, WcagLevel::A);
    }
}

#[test]
fn cyclic_id_fails_every_backend() {
    let forest: Vec<ComponentNode> = serde_json::from_value(json!([{
        "id": "a",
        "type": "section",
        "children": [{
            "id": "b",
            "type": "card",
            "children": [{ "id": "a", "type": "text" }]
        }]
    }]))
    .unwrap();

    for framework in Framework::ALL {
        let err = service().export(&forest, &config(framework)).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(matches!(
            err.cause(),
            PagesmithError::Domain(DomainError::CyclicReference { .. })
        ));
        assert!(err.to_string().contains("a > b > a"));
    }
}

#[test]
fn nesting_past_the_limit_fails_every_backend() {
    let mut node = ComponentNode::new("n64", "div");
    for i in (0..64).rev() {
        node = ComponentNode::new(format!("n{i}"), "div").with_child(node);
    }
    let forest = vec![node];

    for framework in Framework::ALL {
        let err = service().export(&forest, &config(framework)).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation, "{framework}");
        assert!(matches!(
            err.cause(),
            PagesmithError::Domain(DomainError::MaxDepthExceeded { depth: 64, .. })
        ));
    }
}

#[test]
fn shell_named_nodes_keep_the_shell_intact() {
    let forest: Vec<ComponentNode> = serde_json::from_value(json!([
        { "id": "home", "type": "app", "children": [{ "id": "top", "type": "root" }] },
        { "id": "footer", "type": "main" }
    ]))
    .unwrap();

    for framework in Framework::ALL {
        let result = service().export(&forest, &config(framework)).unwrap();
        let names = ["AppHome", "RootTop", "MainFooter"];
        for file in result.files_of_kind(FileKind::Component) {
            let path = file.path.as_str();
            let Some(rest) = path.split("components/").nth(1).or(path.split("lib/").nth(1))
            else {
                continue;
            };
            assert!(
                names.iter().any(|name| rest.starts_with(name)),
                "{framework}: {path}"
            );
        }
    }
}

#[test]
fn exports_are_deterministic() {
    let forest = landing_page();
    for framework in Framework::ALL {
        let first = service().export(&forest, &config(framework)).unwrap();
        let second = service().export(&forest, &config(framework)).unwrap();
        assert_eq!(first.files, second.files, "{framework}");
    }
}

#[test]
fn progress_reaches_completion_over_channel() {
    let (sink, events) = ChannelProgress::channel();
    let service = service().with_progress(sink);
    service
        .export(&landing_page(), &config(Framework::Svelte))
        .unwrap();
    drop(service);

    let percents: Vec<u8> = events.iter().map(|e| e.percent).collect();
    assert_eq!(percents, vec![0, 10, 20, 30, 70, 85, 95, 100]);
}

#[test]
fn writer_persists_export_in_memory() {
    let result = service()
        .export(&landing_page(), &config(Framework::Vue))
        .unwrap();
    let fs = MemoryFilesystem::new();
    ProjectWriter::new(Box::new(fs.clone()))
        .write(&result, Path::new("/site"))
        .unwrap();

    assert_eq!(fs.list_files().len(), result.files.len());
    let main = fs.read_file(Path::new("/site/src/main.js")).unwrap();
    assert!(main.contains("createApp(App)"));
}

#[test]
fn writer_persists_export_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("acme");
    let result = service()
        .export(&landing_page(), &config(Framework::Html))
        .unwrap();

    ProjectWriter::new(Box::new(LocalFilesystem::new()))
        .write(&result, &root)
        .unwrap();

    let index = std::fs::read_to_string(root.join("index.html")).unwrap();
    assert!(index.contains("<title>Acme</title>"));
    assert!(root.join("components/Hero.html").exists());

    // A second write without overwrite is refused.
    let again = ProjectWriter::new(Box::new(LocalFilesystem::new())).write(&result, &root);
    assert!(again.is_err());
}
