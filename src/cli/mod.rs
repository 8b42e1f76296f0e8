//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

use crate::config::UpstreamErrorPolicy;

pub mod audit;
pub mod serve;
pub mod status;

/// Output format options
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting
    #[default]
    Pretty,
    /// Table format - one table per report section
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

/// PageSpeed relay - cached PageSpeed Insights audits with mock fallback
#[derive(Parser, Debug)]
#[command(name = "pagespeed-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "PAGESPEED_RELAY_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "PAGESPEED_RELAY_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "PAGESPEED_RELAY_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP relay
    Serve {
        /// Address to listen on (e.g. 0.0.0.0:8000)
        #[arg(long)]
        bind: Option<String>,

        /// How non-429 upstream errors are handled
        #[arg(long, value_enum)]
        upstream_errors: Option<UpstreamErrorPolicy>,
    },

    /// Audit a single URL and print the report
    Audit {
        /// URL to audit; `https://` is added when no scheme is given
        url: String,
    },

    /// Show the effective configuration
    Status,
}
