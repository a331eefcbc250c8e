use clap::Parser;
use vdl_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible; never fatal.
    logging::init_or_fallback(cli.verbose);

    if let Err(err) = cli.run().await {
        tracing::error!("{:#}", err);
        eprintln!("vdl error: {:#}", err);
        std::process::exit(1);
    }
}
