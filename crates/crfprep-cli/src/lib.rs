//! # crfprep CLI
//!
//! File-system drivers around `crfprep-core`: input discovery, reading and
//! writing corpora, logging setup and JSON run reports. The two binaries
//! are thin wrappers over [`commands::features`] and [`commands::normalize`].

pub mod commands;
pub mod corpus;
pub mod logging;
pub mod report;

pub use commands::features::{run_features, FeaturesArgs};
pub use commands::normalize::{run_normalize, NormalizeArgs};
pub use report::{FileReport, RunReport, Summary};
