use clap::Parser;

use rinkkit::cli::{run, Cli};
use rinkkit::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    tracing::debug!("RinkKit {} built {}", rinkkit::VERSION, rinkkit::BUILD_DATE);
    run(cli)
}
