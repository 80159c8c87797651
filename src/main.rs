//! fs-xattr command-line entry point

use anyhow::Result;
use clap::Parser;
use fs_xattr::cli::Args;
use fs_xattr::commands::execute;
use tracing::debug;

#[compio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    args.validate()?;

    tracing_subscriber::fmt()
        .with_max_level(args.output.log_level())
        .with_writer(std::io::stderr)
        .init();

    debug!("running {:?}", args.command);

    if let Err(e) = execute(args.command, &mut std::io::stdout().lock()).await {
        eprintln!("fs-xattr: {}", e.report());
        std::process::exit(1);
    }

    Ok(())
}
