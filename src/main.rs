use clap::Parser;

use storefront::cli::Cli;
use storefront::logging::init_tracing;
use storefront::ui::runtime;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing();
    runtime::run(args)
}
