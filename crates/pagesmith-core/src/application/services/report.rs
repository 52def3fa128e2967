//! Project documentation and the metadata report.
//!
//! Both are summaries over the config, the input forest and the files
//! already generated. Neither parses generated source.

use chrono::{DateTime, Utc};

use crate::{
    domain::{
        AccessibilityReport, ComponentNode, CoreWebVitals, ExportConfig, ExportMetadata,
        GeneratedFile, MetaTagAnalysis, PerformanceReport, SeoReport, StructuredDataAnalysis,
        WcagLevel, resolve_dependencies,
    },
    error::PagesmithResult,
};

fn enabled(flag: bool) -> &'static str {
    if flag { "enabled" } else { "disabled" }
}

/// `README.md` describing the exported project.
pub fn generate_documentation(
    nodes: &[ComponentNode],
    config: &ExportConfig,
) -> PagesmithResult<GeneratedFile> {
    let deps = resolve_dependencies(config);
    let mut lines = vec![
        format!("# {}", config.project_name()),
        String::new(),
        format!(
            "Generated by Pagesmith for **{}**.",
            config.framework().display_name()
        ),
        String::new(),
        "## Configuration".to_string(),
        String::new(),
        "| Option | Value |".to_string(),
        "| --- | --- |".to_string(),
        format!("| Framework | {} |", config.framework()),
        format!(
            "| TypeScript | {} |",
            if config.typescript() { "yes" } else { "no" }
        ),
        format!("| Styling | {} |", config.styling()),
        format!("| Bundler | {} |", config.bundler()),
        format!(
            "| Testing | {} |",
            config.testing().map_or("none", |t| t.as_str())
        ),
        format!("| Accessibility | {} |", enabled(config.accessibility())),
        format!("| SEO | {} |", enabled(config.seo())),
        format!("| Performance | {} |", enabled(config.performance())),
        String::new(),
        "## Components".to_string(),
        String::new(),
    ];

    for node in nodes {
        lines.push(format!("- {} ({})", node.kind, node.id));
        if !node.props.is_empty() {
            let props: Vec<&str> = node.props.keys().map(String::as_str).collect();
            lines.push(format!("  - props: {}", props.join(", ")));
        }
        if !node.children.is_empty() {
            lines.push(format!(
                "  - nested components: {}",
                node.subtree_size() - 1
            ));
        }
    }

    lines.push(String::new());
    lines.push("## Scripts".to_string());
    lines.push(String::new());
    for (name, command) in &deps.scripts {
        lines.push(format!("- `npm run {name}`: `{command}`"));
    }

    lines.push(String::new());
    lines.push("## Getting Started".to_string());
    lines.push(String::new());
    lines.push("```bash".to_string());
    lines.push("npm install".to_string());
    lines.push("npm run dev".to_string());
    lines.push("```".to_string());

    if config.accessibility() {
        lines.push(String::new());
        lines.push("## Accessibility".to_string());
        lines.push(String::new());
        lines.push(
            "Components carry the ARIA attributes from the design and use semantic elements."
                .to_string(),
        );
    }

    Ok(GeneratedFile::documentation(
        "README.md",
        lines.join("\n") + "\n",
    )?)
}

/// Derive the metadata report.
///
/// Scores are synthetic: a fixed base scaled by the enabled flags. The
/// bundle size is the total byte length of the generated files.
pub fn compute_metadata(
    files: &[GeneratedFile],
    nodes: &[ComponentNode],
    config: &ExportConfig,
    generated_at: DateTime<Utc>,
) -> ExportMetadata {
    let bundle_size: usize = files.iter().map(GeneratedFile::size).sum();

    let mut lighthouse: u32 = 70;
    if config.performance() {
        lighthouse += 15;
    }
    if config.accessibility() {
        lighthouse += 10;
    }
    if config.seo() {
        lighthouse += 5;
    }

    let performance = PerformanceReport {
        bundle_size_bytes: bundle_size,
        lighthouse_score: lighthouse.min(100) as u8,
        core_web_vitals: CoreWebVitals {
            lcp_ms: 1200 + (bundle_size / 100) as u64,
            fid_ms: if config.performance() { 50 } else { 100 },
            cls: if config.performance() { 0.05 } else { 0.1 },
        },
    };

    let accessibility = if config.accessibility() {
        AccessibilityReport {
            wcag_level: WcagLevel::AA,
            violations: Vec::new(),
            score: 95,
        }
    } else {
        AccessibilityReport {
            wcag_level: WcagLevel::A,
            violations: nodes
                .iter()
                .filter(|node| node.aria().is_none())
                .map(|node| format!("'{}' ({}) has no ARIA attributes", node.id, node.kind))
                .collect(),
            score: 70,
        }
    };

    // Same reach as the head tags: any node in the forest may carry SEO data.
    let seo_bundles: Vec<_> = nodes
        .iter()
        .flat_map(ComponentNode::walk)
        .filter_map(|n| n.seo.as_ref())
        .collect();
    let meta_tags = if config.seo() {
        MetaTagAnalysis {
            title: seo_bundles.iter().any(|s| s.title.is_some()),
            description: seo_bundles.iter().any(|s| s.description.is_some()),
            keywords: seo_bundles.iter().any(|s| !s.keywords.is_empty()),
            canonical: seo_bundles.iter().any(|s| s.canonical_url.is_some()),
        }
    } else {
        MetaTagAnalysis::default()
    };
    let seo = SeoReport {
        score: if config.seo() { 90 } else { 60 },
        meta_tags,
        structured_data: StructuredDataAnalysis {
            json_ld: config.seo(),
            open_graph: config.seo(),
        },
    };

    ExportMetadata {
        generated_at,
        framework: config.framework(),
        file_count: files.len(),
        performance,
        accessibility,
        seo,
    }
}
