//! Dependency & script resolution.
//!
//! A pure function of [`ExportConfig`]: it never looks at generated files.
//! Every package name comes from the registries in `capabilities.rs`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    capabilities::{self, Package},
    entities::ExportConfig,
    value_objects::Bundler,
};

/// Manifest inputs implied by a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencySet {
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub scripts: BTreeMap<String, String>,
}

impl DependencySet {
    fn add(&mut self, packages: &[Package]) {
        for (name, version) in packages {
            self.dependencies.insert((*name).into(), (*version).into());
        }
    }

    fn add_dev(&mut self, packages: &[Package]) {
        for (name, version) in packages {
            self.dev_dependencies.insert((*name).into(), (*version).into());
        }
    }

    fn script(&mut self, name: &str, command: impl Into<String>) {
        self.scripts.insert(name.into(), command.into());
    }

    /// Every package name, runtime and dev.
    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .map(String::as_str)
    }
}

/// Compute dependencies, devDependencies and scripts for a config.
pub fn resolve_dependencies(config: &ExportConfig) -> DependencySet {
    let mut set = DependencySet::default();
    let framework = capabilities::find_framework(config.framework());

    // Framework runtime.
    if let Some(def) = framework {
        set.add(def.runtime);
    }

    // Styling.
    if let Some(def) = capabilities::find_styling(config.styling()) {
        set.add(def.dependencies);
        set.add_dev(def.dev_dependencies);
    }

    // Type checking.
    if config.typescript() {
        set.add_dev(&[capabilities::TYPESCRIPT]);
        if let Some(def) = framework {
            set.add_dev(def.type_packages);
            set.script("typecheck", def.typecheck_command);
        }
    }

    // Testing.
    if let Some(testing) = config.testing() {
        if let Some(def) = capabilities::find_testing(testing) {
            set.add_dev(def.packages);
            if config.typescript() {
                set.add_dev(def.typescript_packages);
            }
            if config.accessibility() {
                set.add_dev(def.accessibility_packages);
            }
            set.script("test", def.test_script);
            set.script("test:watch", def.watch_script);
        }
        if let Some(def) = framework {
            set.add_dev(&[def.testing_library]);
        }
    }

    // Bundler.
    if let Some(def) = capabilities::find_bundler(config.bundler()) {
        set.add_dev(def.packages);
        if config.typescript() {
            set.add_dev(def.typescript_packages);
        }
        set.script("dev", def.dev_script);
        set.script("build", def.build_script);
        set.script("preview", def.preview_script);
    }
    if let Some(def) = framework {
        match config.bundler() {
            Bundler::Vite => set.add_dev(def.vite_plugin.as_slice()),
            Bundler::Webpack => set.add_dev(def.webpack_loaders),
            Bundler::Parcel => set.add_dev(def.parcel_plugin.as_slice()),
        }
    }

    // Lint, always.
    set.add_dev(&[capabilities::ESLINT]);
    if config.typescript() {
        set.add_dev(capabilities::TYPESCRIPT_ESLINT);
    }
    let extensions = match framework {
        Some(def) => {
            set.add_dev(def.lint_plugin.as_slice());
            def.lint_extensions
        }
        None => ".js,.ts",
    };
    set.script("lint", format!("eslint . --ext {extensions}"));

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Framework, Styling, Testing};

    fn config(framework: Framework) -> crate::domain::entities::config::ExportConfigBuilder<
        crate::domain::entities::config::HasFramework,
    > {
        ExportConfig::builder().framework(framework)
    }

    #[test]
    fn react_adds_runtime_and_dom_renderer() {
        let set = resolve_dependencies(&config(Framework::React).build().unwrap());
        assert!(set.dependencies.contains_key("react"));
        assert!(set.dependencies.contains_key("react-dom"));
    }

    #[test]
    fn tailwind_adds_engine_postprocessor_and_autoprefixer() {
        let set = resolve_dependencies(
            &config(Framework::Vue)
                .styling(Styling::Tailwind)
                .build()
                .unwrap(),
        );
        for name in ["tailwindcss", "postcss", "autoprefixer"] {
            assert!(set.dependencies.contains_key(name), "{name}");
        }
    }

    #[test]
    fn typescript_adds_checker_and_types() {
        let set = resolve_dependencies(&config(Framework::React).typescript(true).build().unwrap());
        assert!(set.dev_dependencies.contains_key("typescript"));
        assert!(set.dev_dependencies.contains_key("@types/react"));
        assert_eq!(set.scripts["typecheck"], "tsc --noEmit");

        let js = resolve_dependencies(&config(Framework::React).build().unwrap());
        assert!(!js.dev_dependencies.contains_key("typescript"));
        assert!(!js.scripts.contains_key("typecheck"));
    }

    #[test]
    fn testing_adds_runner_adapter_and_scripts() {
        let set = resolve_dependencies(
            &config(Framework::Svelte)
                .testing(Testing::Vitest)
                .accessibility(false)
                .build()
                .unwrap(),
        );
        assert!(set.dev_dependencies.contains_key("vitest"));
        assert!(set.dev_dependencies.contains_key("@testing-library/svelte"));
        assert!(!set.dev_dependencies.contains_key("axe-core"));
        assert_eq!(set.scripts["test"], "vitest run");
        assert_eq!(set.scripts["test:watch"], "vitest");
    }

    #[test]
    fn testing_with_accessibility_adds_axe() {
        let set = resolve_dependencies(
            &config(Framework::React)
                .testing(Testing::Jest)
                .build()
                .unwrap(),
        );
        assert!(set.dev_dependencies.contains_key("axe-core"));
        assert!(set.dev_dependencies.contains_key("jest-axe"));
    }

    #[test]
    fn no_testing_means_no_test_scripts() {
        let set = resolve_dependencies(&config(Framework::Html).build().unwrap());
        assert!(!set.scripts.contains_key("test"));
        assert!(!set.scripts.contains_key("test:watch"));
    }

    #[test]
    fn bundler_adds_plugin_and_scripts() {
        let set = resolve_dependencies(&config(Framework::Vue).build().unwrap());
        assert!(set.dev_dependencies.contains_key("vite"));
        assert!(set.dev_dependencies.contains_key("@vitejs/plugin-vue"));
        assert_eq!(set.scripts["dev"], "vite");
        assert_eq!(set.scripts["build"], "vite build");
        assert_eq!(set.scripts["preview"], "vite preview");

        let webpack = resolve_dependencies(
            &config(Framework::Vue).bundler(Bundler::Webpack).build().unwrap(),
        );
        assert!(webpack.dev_dependencies.contains_key("vue-loader"));
        assert!(webpack.scripts["build"].starts_with("webpack"));
    }

    #[test]
    fn lint_script_is_always_present() {
        for framework in Framework::ALL {
            let set = resolve_dependencies(&config(framework).build().unwrap());
            assert!(set.scripts["lint"].starts_with("eslint"), "{framework}");
            assert!(set.dev_dependencies.contains_key("eslint"));
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let cfg = config(Framework::Angular).testing(Testing::Vitest).build().unwrap();
        assert_eq!(resolve_dependencies(&cfg), resolve_dependencies(&cfg));
    }
}
