use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crfprep_core::{Diagnostic, ExtractionReport, NormalizationReport};
use serde::Serialize;

/// A per-file report that can be summed across a directory run.
pub trait Summary: Default + Serialize {
    /// Add `other`'s counters into `self` without copying its diagnostics.
    fn add_counts(&mut self, other: &Self);
    fn diagnostics(&self) -> &[Diagnostic];
}

impl Summary for ExtractionReport {
    fn add_counts(&mut self, other: &Self) {
        self.merge_counts(other);
    }

    fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl Summary for NormalizationReport {
    fn add_counts(&mut self, other: &Self) {
        self.merge_counts(other);
    }

    fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[derive(Debug, Serialize)]
pub struct FileReport<T> {
    pub path: PathBuf,
    #[serde(flatten)]
    pub report: T,
}

/// Everything one binary invocation did, file by file.
#[derive(Debug, Serialize)]
pub struct RunReport<T> {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Counters summed over all files; diagnostics stay with their file.
    pub total: T,
    pub files: Vec<FileReport<T>>,
}

impl<T: Summary> RunReport<T> {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            total: T::default(),
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, path: impl Into<PathBuf>, report: T) {
        self.total.add_counts(&report);
        self.files.push(FileReport {
            path: path.into(),
            report,
        });
    }

    /// Number of diagnostics across all files.
    pub fn diagnostic_count(&self) -> usize {
        self.files.iter().map(|f| f.report.diagnostics().len()).sum()
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize run report")?;
        crate::corpus::write_text(path, &json)
            .with_context(|| format!("failed to write report to {}", path.display()))
    }
}
