//! PageSpeed relay - cached PageSpeed Insights audits with mock fallback

use clap::Parser;

mod audit;
mod cache;
mod cli;
mod client;
mod config;
mod error;
mod output;
mod report;
mod web;

use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug);

    let config = Config::load_at(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            bind,
            upstream_errors,
        } => cli::serve::run(config, bind, upstream_errors).await,
        Commands::Audit { url } => cli::audit::run(&config, &url, cli.format).await,
        Commands::Status => cli::status::run(&config, cli.config.as_deref()),
    }
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `--debug`
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
