use clap::Parser;
use crfprep_cli::{run_features, FeaturesArgs};

fn main() -> anyhow::Result<()> {
    let args = FeaturesArgs::parse();
    args.log.init();
    run_features(&args)?;
    Ok(())
}
