//! Configuration-file rules.
//!
//! An ordered list of pure functions. Each receives the immutable config
//! and emits zero or one file; the orchestrator runs them in order.

use serde_json::{Value, json};

use crate::{
    application::ApplicationError,
    domain::{
        Bundler, ExportConfig, Framework, GeneratedFile, Styling, Testing, capabilities,
        resolve_dependencies,
    },
    error::PagesmithResult,
};

/// A config-file rule: config in, at most one file out.
pub type FileRule = fn(&ExportConfig) -> PagesmithResult<Option<GeneratedFile>>;

/// Rules in emission order.
pub static FILE_RULES: &[FileRule] = &[
    package_json,
    tsconfig_json,
    tailwind_config,
    postcss_config,
    bundler_config,
    test_config,
    eslint_config,
];

/// Run every rule in order and collect the emitted files.
pub fn generate_config_files(config: &ExportConfig) -> PagesmithResult<Vec<GeneratedFile>> {
    let mut files = Vec::new();
    for rule in FILE_RULES {
        if let Some(file) = rule(config)? {
            files.push(file);
        }
    }
    Ok(files)
}

fn to_pretty_json(what: &str, value: &Value) -> PagesmithResult<String> {
    serde_json::to_string_pretty(value)
        .map(|s| s + "\n")
        .map_err(|e| {
            ApplicationError::SerializationFailed {
                what: what.into(),
                reason: e.to_string(),
            }
            .into()
        })
}

// ── Rules ────────────────────────────────────────────────────────────────────

/// `package.json`, always.
pub fn package_json(config: &ExportConfig) -> PagesmithResult<Option<GeneratedFile>> {
    let deps = resolve_dependencies(config);
    let manifest = json!({
        "name": config.project_name(),
        "private": true,
        "version": "0.1.0",
        "type": "module",
        "scripts": deps.scripts,
        "dependencies": deps.dependencies,
        "devDependencies": deps.dev_dependencies,
    });
    let content = to_pretty_json("package.json", &manifest)?;
    Ok(Some(GeneratedFile::config("package.json", content)?))
}

/// `tsconfig.json`, when TypeScript is on.
pub fn tsconfig_json(config: &ExportConfig) -> PagesmithResult<Option<GeneratedFile>> {
    if !config.typescript() {
        return Ok(None);
    }

    let mut options = json!({
        "target": "ES2020",
        "useDefineForClassFields": true,
        "module": "ESNext",
        "lib": ["ES2020", "DOM", "DOM.Iterable"],
        "moduleResolution": "bundler",
        "resolveJsonModule": true,
        "isolatedModules": true,
        "noEmit": true,
        "strict": true,
        "skipLibCheck": true,
    });
    let mut include = vec!["src"];

    match config.framework() {
        Framework::React => options["jsx"] = json!("react-jsx"),
        Framework::Vue => {
            options["jsx"] = json!("preserve");
            include = vec!["src/**/*.ts", "src/**/*.vue"];
        }
        Framework::Angular => {
            options["experimentalDecorators"] = json!(true);
            options["useDefineForClassFields"] = json!(false);
        }
        Framework::Html => include = vec!["js"],
        Framework::Svelte => {}
    }
    if config.testing() == Some(Testing::Vitest) {
        options["types"] = json!(["vitest/globals"]);
    }

    let mut tsconfig = json!({ "compilerOptions": options, "include": include });
    if config.framework() == Framework::Svelte {
        tsconfig["extends"] = json!("@tsconfig/svelte/tsconfig.json");
    }

    let content = to_pretty_json("tsconfig.json", &tsconfig)?;
    Ok(Some(GeneratedFile::config("tsconfig.json", content)?))
}

/// Glob of source files Tailwind scans for class names.
fn content_globs(framework: Framework) -> &'static str {
    match framework {
        Framework::React => "'./index.html', './src/**/*.{js,jsx,ts,tsx}'",
        Framework::Vue => "'./index.html', './src/**/*.{vue,js,ts}'",
        Framework::Svelte => "'./index.html', './src/**/*.{svelte,js,ts}'",
        Framework::Angular => "'./index.html', './src/**/*.{html,ts}'",
        Framework::Html => "'./index.html', './components/**/*.html', './js/**/*.{js,ts}'",
    }
}

/// `tailwind.config.js`, when styling is Tailwind.
pub fn tailwind_config(config: &ExportConfig) -> PagesmithResult<Option<GeneratedFile>> {
    if config.styling() != Styling::Tailwind {
        return Ok(None);
    }
    let content = format!(
        "/** @type {{import('tailwindcss').Config}} */\n\
         export default {{\n  content: [{}],\n  theme: {{\n    extend: {{}},\n  }},\n  plugins: [],\n}};\n",
        content_globs(config.framework())
    );
    Ok(Some(GeneratedFile::config("tailwind.config.js", content)?))
}

/// `postcss.config.js`, when styling is Tailwind.
pub fn postcss_config(config: &ExportConfig) -> PagesmithResult<Option<GeneratedFile>> {
    if config.styling() != Styling::Tailwind {
        return Ok(None);
    }
    let content = "export default {\n  plugins: {\n    tailwindcss: {},\n    autoprefixer: {},\n  },\n};\n";
    Ok(Some(GeneratedFile::config("postcss.config.js", content)?))
}

/// Bundler configuration file.
pub fn bundler_config(config: &ExportConfig) -> PagesmithResult<Option<GeneratedFile>> {
    let file = match config.bundler() {
        Bundler::Vite => GeneratedFile::config(
            format!("vite.config.{}", config.script_extension()),
            vite_config(config),
        )?,
        Bundler::Webpack => GeneratedFile::config("webpack.config.js", webpack_config(config))?,
        Bundler::Parcel => {
            let mut parcelrc = json!({ "extends": "@parcel/config-default" });
            if config.framework() == Framework::Vue {
                parcelrc["transformers"] = json!({ "*.vue": ["@parcel/transformer-vue"] });
            }
            GeneratedFile::config(".parcelrc", to_pretty_json(".parcelrc", &parcelrc)?)?
        }
    };
    Ok(Some(file))
}

fn vite_config(config: &ExportConfig) -> String {
    let plugin = match config.framework() {
        Framework::React => Some(("import react from '@vitejs/plugin-react';", "react()")),
        Framework::Vue => Some(("import vue from '@vitejs/plugin-vue';", "vue()")),
        Framework::Svelte => Some((
            "import { svelte } from '@sveltejs/vite-plugin-svelte';",
            "svelte()",
        )),
        Framework::Angular => Some((
            "import angular from '@analogjs/vite-plugin-angular';",
            "angular()",
        )),
        Framework::Html => None,
    };

    let mut lines = vec!["import { defineConfig } from 'vite';".to_string()];
    let mut plugins = Vec::new();
    if let Some((import, call)) = plugin {
        lines.push(import.to_string());
        plugins.push(call);
    }
    lines.push(String::new());
    lines.push("export default defineConfig({".to_string());
    lines.push(format!("  plugins: [{}],", plugins.join(", ")));
    if config.performance() {
        lines.push("  build: {".to_string());
        lines.push("    cssCodeSplit: true,".to_string());
        lines.push("    sourcemap: false,".to_string());
        lines.push("  },".to_string());
    }
    lines.push("});".to_string());
    lines.join("\n") + "\n"
}

fn webpack_config(config: &ExportConfig) -> String {
    let entry = capabilities::entry_point(config.framework(), config.typescript());
    let mut rules = Vec::new();
    let mut imports = vec!["import HtmlWebpackPlugin from 'html-webpack-plugin';".to_string()];
    let mut plugins = vec!["new HtmlWebpackPlugin({ template: './index.html' })".to_string()];

    match config.framework() {
        Framework::React => rules.push(
            "{ test: /\\.jsx?$/, exclude: /node_modules/, use: { loader: 'babel-loader', options: { presets: ['@babel/preset-react'] } } }",
        ),
        Framework::Vue => {
            rules.push("{ test: /\\.vue$/, loader: 'vue-loader' }");
            imports.push("import { VueLoaderPlugin } from 'vue-loader';".to_string());
            plugins.push("new VueLoaderPlugin()".to_string());
        }
        Framework::Svelte => rules.push("{ test: /\\.svelte$/, use: 'svelte-loader' }"),
        Framework::Angular => rules.push("{ test: /\\.ts$/, loader: '@ngtools/webpack' }"),
        Framework::Html => {}
    }
    if config.typescript() && config.framework() != Framework::Angular {
        rules.push("{ test: /\\.tsx?$/, use: 'ts-loader', exclude: /node_modules/ }");
    }
    rules.push("{ test: /\\.css$/, use: ['style-loader', 'css-loader'] }");

    let mut lines = imports;
    lines.push(String::new());
    lines.push("export default {".to_string());
    lines.push(format!("  entry: './{entry}',"));
    lines.push("  output: { path: new URL('./dist', import.meta.url).pathname, clean: true },".to_string());
    lines.push("  module: {".to_string());
    lines.push("    rules: [".to_string());
    for rule in rules {
        lines.push(format!("      {rule},"));
    }
    lines.push("    ],".to_string());
    lines.push("  },".to_string());
    lines.push("  resolve: { extensions: ['.ts', '.tsx', '.js', '.jsx', '.vue', '.svelte'] },".to_string());
    lines.push(format!("  plugins: [{}],", plugins.join(", ")));
    lines.push("};".to_string());
    lines.join("\n") + "\n"
}

/// Test-runner configuration, when testing is on.
pub fn test_config(config: &ExportConfig) -> PagesmithResult<Option<GeneratedFile>> {
    let file = match config.testing() {
        None => return Ok(None),
        Some(Testing::Vitest) => {
            let plugin = match config.framework() {
                Framework::React => Some(("import react from '@vitejs/plugin-react';", "react()")),
                Framework::Vue => Some(("import vue from '@vitejs/plugin-vue';", "vue()")),
                Framework::Svelte => Some((
                    "import { svelte } from '@sveltejs/vite-plugin-svelte';",
                    "svelte({ hot: false })",
                )),
                Framework::Angular | Framework::Html => None,
            };
            let mut lines = vec!["import { defineConfig } from 'vitest/config';".to_string()];
            if let Some((import, _)) = plugin {
                lines.push(import.to_string());
            }
            lines.push(String::new());
            lines.push("export default defineConfig({".to_string());
            if let Some((_, call)) = plugin {
                lines.push(format!("  plugins: [{call}],"));
            }
            lines.push("  test: {".to_string());
            lines.push("    environment: 'jsdom',".to_string());
            lines.push("    globals: true,".to_string());
            lines.push("  },".to_string());
            lines.push("});".to_string());
            GeneratedFile::config(
                format!("vitest.config.{}", config.script_extension()),
                lines.join("\n") + "\n",
            )?
        }
        Some(Testing::Jest) => {
            let mut lines = vec![
                "/** @type {import('jest').Config} */".to_string(),
                "export default {".to_string(),
                "  testEnvironment: 'jsdom',".to_string(),
            ];
            if config.typescript() {
                lines.push("  transform: { '^.+\\\\.tsx?$': 'ts-jest' },".to_string());
            }
            lines.push("};".to_string());
            GeneratedFile::config("jest.config.js", lines.join("\n") + "\n")?
        }
    };
    Ok(Some(file))
}

/// `.eslintrc.json`, always; the `lint` script runs it.
pub fn eslint_config(config: &ExportConfig) -> PagesmithResult<Option<GeneratedFile>> {
    let mut extends = vec!["eslint:recommended"];
    match config.framework() {
        Framework::React => extends.push("plugin:react/recommended"),
        Framework::Vue => extends.push("plugin:vue/vue3-recommended"),
        Framework::Svelte => extends.push("plugin:svelte/recommended"),
        Framework::Angular | Framework::Html => {}
    }
    if config.typescript() {
        extends.push("plugin:@typescript-eslint/recommended");
    }

    let mut eslintrc = json!({
        "root": true,
        "env": { "browser": true, "es2021": true },
        "extends": extends,
        "parserOptions": { "ecmaVersion": "latest", "sourceType": "module" },
    });
    if config.typescript() {
        eslintrc["parserOptions"]["parser"] = json!("@typescript-eslint/parser");
    }
    if config.framework() == Framework::React {
        eslintrc["settings"] = json!({ "react": { "version": "detect" } });
    }

    let content = to_pretty_json(".eslintrc.json", &eslintrc)?;
    Ok(Some(GeneratedFile::config(".eslintrc.json", content)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExportConfigBuilder;
    use crate::domain::HasFramework;

    fn builder(framework: Framework) -> ExportConfigBuilder<HasFramework> {
        ExportConfig::builder().framework(framework)
    }

    fn paths(config: &ExportConfig) -> Vec<String> {
        generate_config_files(config)
            .unwrap()
            .into_iter()
            .map(|f| f.path.to_string())
            .collect()
    }

    #[test]
    fn minimal_config_emits_manifest_bundler_and_lint() {
        let config = builder(Framework::Html).build().unwrap();
        assert_eq!(
            paths(&config),
            vec!["package.json", "vite.config.js", ".eslintrc.json"]
        );
    }

    #[test]
    fn full_config_emits_every_rule_in_order() {
        let config = builder(Framework::React)
            .typescript(true)
            .styling(Styling::Tailwind)
            .testing(Testing::Vitest)
            .build()
            .unwrap();
        assert_eq!(
            paths(&config),
            vec![
                "package.json",
                "tsconfig.json",
                "tailwind.config.js",
                "postcss.config.js",
                "vite.config.ts",
                "vitest.config.ts",
                ".eslintrc.json",
            ]
        );
    }

    #[test]
    fn manifest_is_valid_json_matching_resolver() {
        let config = builder(Framework::Vue)
            .styling(Styling::Scss)
            .testing(Testing::Jest)
            .project_name("landing")
            .build()
            .unwrap();
        let file = package_json(&config).unwrap().unwrap();
        let manifest: Value = serde_json::from_str(&file.content).unwrap();
        let deps = resolve_dependencies(&config);

        assert_eq!(manifest["name"], "landing");
        let listed: Vec<_> = manifest["devDependencies"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        let resolved: Vec<_> = deps.dev_dependencies.keys().cloned().collect();
        assert_eq!(listed, resolved);
        assert_eq!(manifest["scripts"]["lint"], deps.scripts["lint"]);
    }

    #[test]
    fn tsconfig_only_with_typescript() {
        let js = builder(Framework::React).build().unwrap();
        assert!(tsconfig_json(&js).unwrap().is_none());

        let ts = builder(Framework::React).typescript(true).build().unwrap();
        let file = tsconfig_json(&ts).unwrap().unwrap();
        let parsed: Value = serde_json::from_str(&file.content).unwrap();
        assert_eq!(parsed["compilerOptions"]["jsx"], "react-jsx");
    }

    #[test]
    fn svelte_tsconfig_extends_preset() {
        let config = builder(Framework::Svelte).typescript(true).build().unwrap();
        let file = tsconfig_json(&config).unwrap().unwrap();
        assert!(file.content.contains("@tsconfig/svelte/tsconfig.json"));
    }

    #[test]
    fn webpack_points_at_framework_entry() {
        let config = builder(Framework::React)
            .typescript(true)
            .bundler(Bundler::Webpack)
            .build()
            .unwrap();
        let file = bundler_config(&config).unwrap().unwrap();
        assert_eq!(file.path.as_str(), "webpack.config.js");
        assert!(file.content.contains("entry: './src/main.tsx'"));
        assert!(file.content.contains("ts-loader"));
    }

    #[test]
    fn parcel_vue_registers_transformer() {
        let config = builder(Framework::Vue).bundler(Bundler::Parcel).build().unwrap();
        let file = bundler_config(&config).unwrap().unwrap();
        let parsed: Value = serde_json::from_str(&file.content).unwrap();
        assert_eq!(parsed["transformers"]["*.vue"][0], "@parcel/transformer-vue");
    }

    #[test]
    fn vite_config_uses_framework_plugin() {
        let config = builder(Framework::Svelte).build().unwrap();
        let file = bundler_config(&config).unwrap().unwrap();
        assert!(file.content.contains("plugins: [svelte()]"));
    }

    #[test]
    fn rules_are_pure() {
        let config = builder(Framework::Angular).testing(Testing::Jest).build().unwrap();
        assert_eq!(
            generate_config_files(&config).unwrap(),
            generate_config_files(&config).unwrap()
        );
    }
}
