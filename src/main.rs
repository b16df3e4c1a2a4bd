use anyhow::Result;
use clap::Parser;

use name_stats::app;
use name_stats::config::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config();
    log::debug!("Running with {config:?}");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run(&config, &mut out)
}
