//! `crf-features`: CoNLL/SSF corpus to CRF training features.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crfprep_core::{CorpusFeatureExtractor, CorpusFormat, ExtractionReport, ExtractorConfig};
use tracing::{info, warn};

use crate::corpus;
use crate::logging::LogArgs;
use crate::report::RunReport;

/// Create affix features for POS CRF training from CoNLL or SSF data
#[derive(Debug, Parser)]
#[command(name = "crf-features")]
#[command(version)]
pub struct FeaturesArgs {
    /// Input corpus file, or a directory walked recursively
    #[arg(short, long, env = "CRFPREP_INPUT", value_name = "PATH")]
    pub input: PathBuf,

    /// Output feature file (one combined file in directory mode)
    #[arg(short, long, env = "CRFPREP_OUTPUT", value_name = "FILE")]
    pub output: PathBuf,

    /// Input annotation format: conll or ssf
    #[arg(
        short = 't',
        long = "type",
        env = "CRFPREP_TYPE",
        value_name = "FORMAT",
        default_value_t = CorpusFormat::Conll
    )]
    pub format: CorpusFormat,

    /// Write a JSON run report here
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Extract features from every input file and write them, in input order,
/// to one output file.
///
/// # Errors
///
/// Fails on any I/O error; malformed lines are only logged and reported.
pub fn run_features(args: &FeaturesArgs) -> Result<RunReport<ExtractionReport>> {
    let extractor = CorpusFeatureExtractor::new(ExtractorConfig::new().with_format(args.format))?;
    let files = corpus::resolve_inputs(&args.input)
        .with_context(|| format!("cannot read input {}", args.input.display()))?;
    if files.is_empty() {
        warn!(input = %args.input.display(), "no input files found");
    }
    info!(files = files.len(), format = %args.format, "extracting features");

    let mut features = String::new();
    let mut run = RunReport::new(&args.input, &args.output);

    for path in files {
        let text = corpus::read_text(&path)?;
        let extraction = extractor.extract(&text);

        for diagnostic in &extraction.report.diagnostics {
            warn!(file = %path.display(), "{diagnostic}");
        }
        info!(
            file = %path.display(),
            sentences = extraction.report.sentences,
            tokens = extraction.report.tokens,
            skipped = extraction.report.skipped_lines,
            "processed file"
        );

        features.push_str(&extraction.text);
        run.push(path, extraction.report);
    }

    corpus::write_text(&args.output, &features)?;
    info!(
        output = %args.output.display(),
        sentences = run.total.sentences_emitted,
        tokens = run.total.tokens,
        "wrote features"
    );

    if let Some(report_path) = &args.report {
        run.write_json(report_path)?;
    }
    Ok(run)
}
