use clap::Parser;
use crfprep_cli::{run_normalize, NormalizeArgs};

fn main() -> anyhow::Result<()> {
    let args = NormalizeArgs::parse();
    args.log.init();
    run_normalize(&args)?;
    Ok(())
}
