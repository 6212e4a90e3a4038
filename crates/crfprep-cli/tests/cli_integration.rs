//! End-to-end runs of both drivers against real files.

use std::fs;
use std::path::Path;

use clap::Parser;
use crfprep_cli::{run_features, run_normalize, FeaturesArgs, NormalizeArgs};
use crfprep_core::CorpusFormat;
use tempfile::TempDir;

fn features_args(input: &Path, output: &Path, format: &str) -> FeaturesArgs {
    FeaturesArgs::try_parse_from([
        "crf-features",
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--type",
        format,
    ])
    .unwrap()
}

#[test]
fn type_flag_parses_format_names() {
    let args = features_args(Path::new("in"), Path::new("out"), "SSF");
    assert_eq!(args.format, CorpusFormat::Ssf);

    let err = FeaturesArgs::try_parse_from(["crf-features", "-i", "in", "-o", "out", "-t", "xml"]);
    assert!(err.is_err());
}

#[test]
fn features_from_single_conll_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("train.conll");
    let output = temp_dir.path().join("train.features");
    fs::write(&input, "He\tPRP\nruns\tVBZ\n\n\nI\tPRP\n").unwrap();

    let run = run_features(&features_args(&input, &output, "conll")).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.matches("\n\n").count(), 2);
    assert!(written.starts_with("He\tH\tHe\tNULL\tNULL\te\tHe\t"));
    assert!(written.ends_with("\tLESS\tPRP\n\n"));
    assert_eq!(run.total.tokens, 3);
    assert_eq!(run.files.len(), 1);
}

#[test]
fn features_from_ssf_directory_are_combined_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let corpus = temp_dir.path().join("ssf");
    fs::create_dir_all(corpus.join("part2")).unwrap();
    fs::write(
        corpus.join("part1.ssf"),
        "<Sentence id=\"1\">\n1\tHe\tPRP\n</Sentence>\n",
    )
    .unwrap();
    fs::write(
        corpus.join("part2/more.ssf"),
        "<Sentence id=\"1\">\n1\truns\tVBZ\n\t))\n</Sentence>\n",
    )
    .unwrap();
    let output = temp_dir.path().join("all.features");

    let run = run_features(&features_args(&corpus, &output, "ssf")).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let he = written.find("He\t").unwrap();
    let runs = written.find("runs\t").unwrap();
    assert!(he < runs);
    assert_eq!(run.files.len(), 2);
    assert_eq!(run.total.skipped_lines, 1);
    assert_eq!(run.diagnostic_count(), 1);
}

#[test]
fn normalize_single_file_drops_bad_lines() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("raw.txt");
    let output = temp_dir.path().join("raw.conll");
    let report = temp_dir.path().join("report.json");
    fs::write(&input, "He\\PRP likes\\VBZ mangoes\\NNS\nBad\\TAG\\EXTRA ok\\NN\n").unwrap();

    let args = NormalizeArgs::try_parse_from([
        "conll-normalize",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--report",
        report.to_str().unwrap(),
    ])
    .unwrap();
    let run = run_normalize(&args).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "He\tPRP\nlikes\tVBZ\nmangoes\tNNS\n\n"
    );
    assert_eq!(run.total.dropped_lines, 1);

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["total"]["dropped_lines"], 1);
    assert_eq!(json["files"][0]["diagnostics"][0]["unit"], "Bad\\TAG\\EXTRA");
    assert_eq!(json["files"][0]["diagnostics"][0]["physical_line"], 2);
}

#[test]
fn normalize_directory_mirrors_tree() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("raw");
    let output = temp_dir.path().join("conll");
    fs::create_dir_all(input.join("news")).unwrap();
    fs::write(input.join("a.txt"), "I\\PRP\n").unwrap();
    fs::write(input.join("news/b.txt"), "You\\PRP run\\VBP\n").unwrap();

    let args = NormalizeArgs::try_parse_from([
        "conll-normalize",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap();
    let run = run_normalize(&args).unwrap();

    assert_eq!(fs::read_to_string(output.join("a.txt")).unwrap(), "I\tPRP\n\n");
    assert_eq!(
        fs::read_to_string(output.join("news/b.txt")).unwrap(),
        "You\tPRP\nrun\tVBP\n\n"
    );
    assert_eq!(run.total.sentences, 2);
}

#[test]
fn missing_input_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let args = features_args(
        &temp_dir.path().join("absent"),
        &temp_dir.path().join("out"),
        "conll",
    );
    let err = run_features(&args).unwrap_err();
    assert!(err.to_string().contains("cannot read input"));
}
