//! `conll-normalize`: `token\pos` lines to two-column CoNLL.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crfprep_core::{NormalizationReport, RawConllNormalizer};
use tracing::{info, warn};

use crate::corpus;
use crate::logging::LogArgs;
use crate::report::RunReport;

/// Convert backslash-joined token\pos data into CoNLL format
#[derive(Debug, Parser)]
#[command(name = "conll-normalize")]
#[command(version)]
pub struct NormalizeArgs {
    /// Input file, or a directory walked recursively
    #[arg(short, long, env = "CRFPREP_INPUT", value_name = "PATH")]
    pub input: PathBuf,

    /// Output file, or output directory when the input is a directory
    #[arg(short, long, env = "CRFPREP_OUTPUT", value_name = "PATH")]
    pub output: PathBuf,

    /// Write a JSON run report here
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Where the normalized form of `file` goes.
///
/// A single-file run writes straight to `output`; a directory run mirrors
/// each file's path relative to `input` under the `output` directory.
pub fn output_path(input: &Path, output: &Path, file: &Path) -> PathBuf {
    match file.strip_prefix(input) {
        Ok(relative) if !relative.as_os_str().is_empty() => output.join(relative),
        _ => output.to_path_buf(),
    }
}

/// Normalize every input file into its own output file.
///
/// # Errors
///
/// Fails on any I/O error; malformed lines are only logged and reported.
pub fn run_normalize(args: &NormalizeArgs) -> Result<RunReport<NormalizationReport>> {
    let normalizer = RawConllNormalizer::new();
    let files = corpus::resolve_inputs(&args.input)
        .with_context(|| format!("cannot read input {}", args.input.display()))?;
    if files.is_empty() {
        warn!(input = %args.input.display(), "no input files found");
    }

    let mut run = RunReport::new(&args.input, &args.output);

    for path in files {
        let text = corpus::read_text(&path)?;
        let normalization = normalizer.normalize(&text);

        for diagnostic in &normalization.report.diagnostics {
            warn!(file = %path.display(), "{diagnostic}");
        }

        let target = output_path(&args.input, &args.output, &path);
        corpus::write_text(&target, &normalization.text)?;
        info!(
            file = %path.display(),
            output = %target.display(),
            sentences = normalization.report.sentences,
            dropped = normalization.report.dropped_lines,
            "normalized file"
        );

        run.push(path, normalization.report);
    }

    if let Some(report_path) = &args.report {
        run.write_json(report_path)?;
    }
    Ok(run)
}
