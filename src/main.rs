use anyhow::{Context, Result};
use average::{config::Config, report::Report};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML file with the four inputs to average.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::debug!("{args:#?}");

    let cfg = match &args.config {
        Some(file) => Config::from_file(file).context("failed to construct cfg")?,
        None => Config::default(),
    };
    log::debug!("{cfg:#?}");

    println!("{}", Report::new(cfg.inputs));

    Ok(())
}
