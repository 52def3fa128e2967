//! Export capability registry.
//!
//! Every framework, styling system, bundler and test runner is described
//! exactly once by a static definition. The dependency resolver and
//! `ExportConfig::validate` derive from these tables; the resolver never
//! hardcodes a package name.
//!
//! # Adding a New Framework
//!
//! 1. Add a variant to `Framework` in `value_objects.rs`
//! 2. Add one [`FrameworkDef`] entry to [`FRAMEWORK_REGISTRY`]
//! 3. Register a backend for it in the adapters crate

use crate::domain::value_objects::{Bundler, Framework, Styling, Testing};

/// An npm package and its version range.
pub type Package = (&'static str, &'static str);

// ── Framework definitions ────────────────────────────────────────────────────

/// Everything the resolver needs to know about one target framework.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkDef {
    pub framework: Framework,

    /// Runtime packages, always added to `dependencies`.
    pub runtime: &'static [Package],

    /// Type definitions and checkers, added to `devDependencies` with TypeScript.
    pub type_packages: &'static [Package],

    /// Command behind the `typecheck` script.
    pub typecheck_command: &'static str,

    /// The bundler to infer when the caller does not pick one.
    pub default_bundler: Bundler,

    /// Bundlers that can build this framework.
    pub supported_bundlers: &'static [Bundler],

    /// Framework integration for each bundler, added to `devDependencies`.
    pub vite_plugin: Option<Package>,
    pub webpack_loaders: &'static [Package],
    pub parcel_plugin: Option<Package>,

    /// Component-testing adapter for the chosen test runner.
    pub testing_library: Package,

    /// Lint plugin and the file extensions the `lint` script covers.
    pub lint_plugin: Option<Package>,
    pub lint_extensions: &'static str,

    /// The framework cannot be emitted without TypeScript.
    pub requires_typescript: bool,

    /// Entry point path as `(javascript, typescript)`.
    pub entry: (&'static str, &'static str),
}

/// Single source of truth for target frameworks.
pub static FRAMEWORK_REGISTRY: &[FrameworkDef] = &[
    FrameworkDef {
        framework: Framework::React,
        runtime: &[("react", "^18.2.0"), ("react-dom", "^18.2.0")],
        type_packages: &[("@types/react", "^18.2.43"), ("@types/react-dom", "^18.2.17")],
        typecheck_command: "tsc --noEmit",
        default_bundler: Bundler::Vite,
        supported_bundlers: &[Bundler::Vite, Bundler::Webpack, Bundler::Parcel],
        vite_plugin: Some(("@vitejs/plugin-react", "^4.2.1")),
        webpack_loaders: &[("babel-loader", "^9.1.3"), ("@babel/preset-react", "^7.23.3")],
        parcel_plugin: None,
        testing_library: ("@testing-library/react", "^14.1.2"),
        lint_plugin: Some(("eslint-plugin-react", "^7.33.2")),
        lint_extensions: ".js,.jsx,.ts,.tsx",
        requires_typescript: false,
        entry: ("src/main.jsx", "src/main.tsx"),
    },
    FrameworkDef {
        framework: Framework::Vue,
        runtime: &[("vue", "^3.3.11")],
        type_packages: &[("vue-tsc", "^1.8.25")],
        typecheck_command: "vue-tsc --noEmit",
        default_bundler: Bundler::Vite,
        supported_bundlers: &[Bundler::Vite, Bundler::Webpack, Bundler::Parcel],
        vite_plugin: Some(("@vitejs/plugin-vue", "^4.5.2")),
        webpack_loaders: &[("vue-loader", "^17.3.1")],
        parcel_plugin: Some(("@parcel/transformer-vue", "^2.10.3")),
        testing_library: ("@testing-library/vue", "^8.0.1"),
        lint_plugin: Some(("eslint-plugin-vue", "^9.19.2")),
        lint_extensions: ".js,.ts,.vue",
        requires_typescript: false,
        entry: ("src/main.js", "src/main.ts"),
    },
    FrameworkDef {
        framework: Framework::Svelte,
        runtime: &[("svelte", "^4.2.8")],
        type_packages: &[("svelte-check", "^3.6.2"), ("@tsconfig/svelte", "^5.0.2")],
        typecheck_command: "svelte-check",
        default_bundler: Bundler::Vite,
        supported_bundlers: &[Bundler::Vite, Bundler::Webpack],
        vite_plugin: Some(("@sveltejs/vite-plugin-svelte", "^3.0.1")),
        webpack_loaders: &[("svelte-loader", "^3.1.9")],
        parcel_plugin: None,
        testing_library: ("@testing-library/svelte", "^4.0.5"),
        lint_plugin: Some(("eslint-plugin-svelte", "^2.35.1")),
        lint_extensions: ".js,.ts,.svelte",
        requires_typescript: false,
        entry: ("src/main.js", "src/main.ts"),
    },
    FrameworkDef {
        framework: Framework::Angular,
        runtime: &[
            ("@angular/common", "^17.0.0"),
            ("@angular/compiler", "^17.0.0"),
            ("@angular/core", "^17.0.0"),
            ("@angular/platform-browser", "^17.0.0"),
            ("rxjs", "~7.8.0"),
            ("tslib", "^2.6.2"),
            ("zone.js", "~0.14.2"),
        ],
        type_packages: &[("@types/node", "^20.10.4")],
        typecheck_command: "tsc --noEmit",
        default_bundler: Bundler::Vite,
        supported_bundlers: &[Bundler::Vite, Bundler::Webpack],
        vite_plugin: Some(("@analogjs/vite-plugin-angular", "^0.2.26")),
        webpack_loaders: &[("@ngtools/webpack", "^17.0.0")],
        parcel_plugin: None,
        testing_library: ("@testing-library/angular", "^15.0.0"),
        lint_plugin: None,
        lint_extensions: ".ts",
        requires_typescript: true,
        entry: ("src/main.ts", "src/main.ts"),
    },
    FrameworkDef {
        framework: Framework::Html,
        runtime: &[],
        type_packages: &[],
        typecheck_command: "tsc --noEmit",
        default_bundler: Bundler::Vite,
        supported_bundlers: &[Bundler::Vite, Bundler::Webpack, Bundler::Parcel],
        vite_plugin: None,
        webpack_loaders: &[],
        parcel_plugin: None,
        testing_library: ("@testing-library/dom", "^9.3.3"),
        lint_plugin: None,
        lint_extensions: ".js,.ts",
        requires_typescript: false,
        entry: ("js/main.js", "js/main.ts"),
    },
];

// ── Styling definitions ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct StylingDef {
    pub styling: Styling,
    pub dependencies: &'static [Package],
    pub dev_dependencies: &'static [Package],
    /// Frameworks this styling works with; `None` means all of them.
    pub frameworks: Option<&'static [Framework]>,
}

pub static STYLING_REGISTRY: &[StylingDef] = &[
    StylingDef {
        styling: Styling::Css,
        dependencies: &[],
        dev_dependencies: &[],
        frameworks: None,
    },
    StylingDef {
        styling: Styling::CssModules,
        dependencies: &[],
        dev_dependencies: &[],
        frameworks: None,
    },
    StylingDef {
        styling: Styling::Tailwind,
        dependencies: &[
            ("autoprefixer", "^10.4.16"),
            ("postcss", "^8.4.32"),
            ("tailwindcss", "^3.3.6"),
        ],
        dev_dependencies: &[],
        frameworks: None,
    },
    StylingDef {
        styling: Styling::Scss,
        dependencies: &[],
        dev_dependencies: &[("sass", "^1.69.5")],
        frameworks: None,
    },
    StylingDef {
        styling: Styling::StyledComponents,
        dependencies: &[("styled-components", "^6.1.1")],
        dev_dependencies: &[],
        frameworks: Some(&[Framework::React]),
    },
];

// ── Bundler definitions ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct BundlerDef {
    pub bundler: Bundler,
    pub packages: &'static [Package],
    /// Extra packages when the project is TypeScript.
    pub typescript_packages: &'static [Package],
    pub dev_script: &'static str,
    pub build_script: &'static str,
    pub preview_script: &'static str,
}

pub static BUNDLER_REGISTRY: &[BundlerDef] = &[
    BundlerDef {
        bundler: Bundler::Vite,
        packages: &[("vite", "^5.0.8")],
        typescript_packages: &[],
        dev_script: "vite",
        build_script: "vite build",
        preview_script: "vite preview",
    },
    BundlerDef {
        bundler: Bundler::Webpack,
        packages: &[
            ("css-loader", "^6.8.1"),
            ("html-webpack-plugin", "^5.5.3"),
            ("style-loader", "^3.3.3"),
            ("webpack", "^5.89.0"),
            ("webpack-cli", "^5.1.4"),
            ("webpack-dev-server", "^4.15.1"),
        ],
        typescript_packages: &[("ts-loader", "^9.5.1")],
        dev_script: "webpack serve --mode development",
        build_script: "webpack --mode production",
        preview_script: "webpack serve --mode production",
    },
    BundlerDef {
        bundler: Bundler::Parcel,
        packages: &[("parcel", "^2.10.3")],
        typescript_packages: &[],
        dev_script: "parcel index.html",
        build_script: "parcel build index.html",
        preview_script: "parcel serve dist/index.html",
    },
];

// ── Testing definitions ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct TestingDef {
    pub testing: Testing,
    pub packages: &'static [Package],
    pub typescript_packages: &'static [Package],
    /// Automated accessibility assertions, added when accessibility is on.
    pub accessibility_packages: &'static [Package],
    pub test_script: &'static str,
    pub watch_script: &'static str,
}

pub static TESTING_REGISTRY: &[TestingDef] = &[
    TestingDef {
        testing: Testing::Vitest,
        packages: &[("jsdom", "^23.0.1"), ("vitest", "^1.0.4")],
        typescript_packages: &[],
        accessibility_packages: &[("axe-core", "^4.8.3"), ("vitest-axe", "^0.1.0")],
        test_script: "vitest run",
        watch_script: "vitest",
    },
    TestingDef {
        testing: Testing::Jest,
        packages: &[
            ("jest", "^29.7.0"),
            ("jest-environment-jsdom", "^29.7.0"),
        ],
        typescript_packages: &[("@types/jest", "^29.5.11"), ("ts-jest", "^29.1.1")],
        accessibility_packages: &[("axe-core", "^4.8.3"), ("jest-axe", "^8.0.0")],
        test_script: "jest",
        watch_script: "jest --watch",
    },
];

// ── Always-on tooling ────────────────────────────────────────────────────────

pub const TYPESCRIPT: Package = ("typescript", "^5.2.2");
pub const ESLINT: Package = ("eslint", "^8.55.0");
pub const TYPESCRIPT_ESLINT: &[Package] = &[
    ("@typescript-eslint/eslint-plugin", "^6.14.0"),
    ("@typescript-eslint/parser", "^6.14.0"),
];

// ── Registry lookup API ───────────────────────────────────────────────────────
//
// These functions are the ONLY entry points for capability queries.

/// Find the capability definition for a framework.
///
/// Returns `None` only if the framework is not registered, a programming
/// error caught by `assert_registry_integrity`.
pub fn find_framework(framework: Framework) -> Option<&'static FrameworkDef> {
    FRAMEWORK_REGISTRY
        .iter()
        .find(|def| def.framework == framework)
}

pub fn find_styling(styling: Styling) -> Option<&'static StylingDef> {
    STYLING_REGISTRY.iter().find(|def| def.styling == styling)
}

pub fn find_bundler(bundler: Bundler) -> Option<&'static BundlerDef> {
    BUNDLER_REGISTRY.iter().find(|def| def.bundler == bundler)
}

pub fn find_testing(testing: Testing) -> Option<&'static TestingDef> {
    TESTING_REGISTRY.iter().find(|def| def.testing == testing)
}

/// Bundler to infer when none is given.
pub fn infer_bundler(framework: Framework) -> Bundler {
    find_framework(framework)
        .map(|def| def.default_bundler)
        .unwrap_or(Bundler::Vite)
}

/// Whether the framework must be emitted as TypeScript.
pub fn requires_typescript(framework: Framework) -> bool {
    find_framework(framework)
        .map(|def| def.requires_typescript)
        .unwrap_or(false)
}

/// Project-relative entry point for a framework.
pub fn entry_point(framework: Framework, typescript: bool) -> &'static str {
    match find_framework(framework) {
        Some(def) if typescript => def.entry.1,
        Some(def) => def.entry.0,
        None => "src/main.js",
    }
}

/// Validate that a styling system can be used with a framework.
pub fn validate_styling(framework: Framework, styling: Styling) -> Result<(), String> {
    let Some(def) = find_styling(styling) else {
        return Err(format!("styling '{styling}' is not registered"));
    };
    match def.frameworks {
        Some(allowed) if !allowed.contains(&framework) => {
            let names = allowed
                .iter()
                .map(|f| f.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Err(format!("'{styling}' is only available for [{names}]"))
        }
        _ => Ok(()),
    }
}

/// Validate that a bundler can build a framework.
pub fn validate_bundler(framework: Framework, bundler: Bundler) -> Result<(), String> {
    let supported = find_framework(framework)
        .map(|def| def.supported_bundlers)
        .unwrap_or(&[]);
    if supported.contains(&bundler) {
        return Ok(());
    }
    let names = supported
        .iter()
        .map(|b| b.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Err(format!("{framework} builds with [{names}] but '{bundler}' was requested"))
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the registries are internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    for framework in Framework::ALL {
        let def = find_framework(framework)
            .unwrap_or_else(|| panic!("Framework {framework:?} is not registered"));

        assert!(
            def.supported_bundlers.contains(&def.default_bundler),
            "Framework {:?}: default bundler {:?} is not in supported_bundlers {:?}",
            framework,
            def.default_bundler,
            def.supported_bundlers
        );
    }

    for def in BUNDLER_REGISTRY {
        assert!(
            !def.packages.is_empty(),
            "Bundler {:?} has no packages",
            def.bundler
        );
    }

    for def in TESTING_REGISTRY {
        assert!(
            !def.accessibility_packages.is_empty(),
            "Testing {:?} has no accessibility packages",
            def.testing
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_internally_consistent() {
        assert_registry_integrity();
    }

    #[test]
    fn every_styling_and_tool_is_registered() {
        for styling in [
            Styling::Css,
            Styling::CssModules,
            Styling::Tailwind,
            Styling::Scss,
            Styling::StyledComponents,
        ] {
            assert!(find_styling(styling).is_some(), "{styling:?}");
        }
        for bundler in [Bundler::Vite, Bundler::Webpack, Bundler::Parcel] {
            assert!(find_bundler(bundler).is_some(), "{bundler:?}");
        }
        for testing in [Testing::Vitest, Testing::Jest] {
            assert!(find_testing(testing).is_some(), "{testing:?}");
        }
    }

    #[test]
    fn react_runtime_includes_dom_renderer() {
        let def = find_framework(Framework::React).unwrap();
        let names: Vec<_> = def.runtime.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["react", "react-dom"]);
    }

    #[test]
    fn html_has_no_runtime() {
        assert!(find_framework(Framework::Html).unwrap().runtime.is_empty());
    }

    #[test]
    fn styled_components_is_react_only() {
        assert!(validate_styling(Framework::React, Styling::StyledComponents).is_ok());
        let err = validate_styling(Framework::Vue, Styling::StyledComponents).unwrap_err();
        assert!(err.contains("react"));
    }

    #[test]
    fn angular_cannot_use_parcel() {
        assert!(validate_bundler(Framework::Angular, Bundler::Vite).is_ok());
        let err = validate_bundler(Framework::Angular, Bundler::Parcel).unwrap_err();
        assert!(err.contains("parcel"));
    }

    #[test]
    fn only_angular_requires_typescript() {
        for framework in Framework::ALL {
            assert_eq!(
                requires_typescript(framework),
                framework == Framework::Angular,
                "{framework}"
            );
        }
    }

    #[test]
    fn entry_points_follow_typescript_flag() {
        assert_eq!(entry_point(Framework::React, true), "src/main.tsx");
        assert_eq!(entry_point(Framework::Vue, false), "src/main.js");
        assert_eq!(entry_point(Framework::Html, false), "js/main.js");
    }

    #[test]
    fn every_framework_defaults_to_vite() {
        for framework in Framework::ALL {
            assert_eq!(infer_bundler(framework), Bundler::Vite);
        }
    }
}
