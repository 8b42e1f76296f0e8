//! `audit` command: run one audit and print the report

use crate::audit::Auditor;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output;

/// Audit a single URL with a fresh cache
pub async fn run(config: &Config, url: &str, format: OutputFormat) -> Result<()> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::Other("URL must not be empty".to_string()));
    }

    let auditor = Auditor::from_config(config)?;
    let report = auditor.audit(url).await?;

    output::print(&report, format)
}
