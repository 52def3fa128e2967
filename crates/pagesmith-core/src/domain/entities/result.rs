//! The terminal value of an export: files, manifest inputs, and metadata.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::generated::GeneratedFile,
    value_objects::{FileKind, Framework},
};

/// Everything one successful export produced.
///
/// Created once at the end of the pipeline and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub files: Vec<GeneratedFile>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub scripts: BTreeMap<String, String>,
    pub metadata: ExportMetadata,
}

impl ExportResult {
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path.as_str() == path)
    }

    pub fn files_of_kind(&self, kind: FileKind) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().filter(move |f| f.kind == kind)
    }

    pub fn total_size(&self) -> usize {
        self.files.iter().map(GeneratedFile::size).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub generated_at: DateTime<Utc>,
    pub framework: Framework,
    pub file_count: usize,
    pub performance: PerformanceReport,
    pub accessibility: AccessibilityReport,
    pub seo: SeoReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub bundle_size_bytes: usize,
    pub lighthouse_score: u8,
    pub core_web_vitals: CoreWebVitals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreWebVitals {
    pub lcp_ms: u64,
    pub fid_ms: u64,
    pub cls: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityReport {
    pub wcag_level: WcagLevel,
    pub violations: Vec<String>,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    A,
    AA,
}

impl WcagLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AA => "AA",
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub score: u8,
    pub meta_tags: MetaTagAnalysis,
    pub structured_data: StructuredDataAnalysis,
}

/// Which meta tags the exported pages carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagAnalysis {
    pub title: bool,
    pub description: bool,
    pub keywords: bool,
    pub canonical: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDataAnalysis {
    pub json_ld: bool,
    pub open_graph: bool,
}
