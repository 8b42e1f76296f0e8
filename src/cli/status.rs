//! Status command implementation

use colored::Colorize;

use crate::config::Config;
use crate::error::Result;

/// Display the effective configuration
pub fn run(config: &Config, config_path: Option<&str>) -> Result<()> {
    println!("{}\n", "PageSpeed Relay Configuration".bold());

    let source = match config_path {
        Some(path) => path.to_string(),
        None => match Config::default_path() {
            Some(path) if path.exists() => path.display().to_string(),
            _ => "defaults (no config file)".to_string(),
        },
    };
    println!("Config: {}", source.cyan());
    println!();

    match config.api_key {
        Some(ref key) => println!("{} API key: {}", "✓".green(), mask_key(key)),
        None => {
            println!("{} API key not configured", "✗".red());
            println!("  → Set GOOGLE_PAGESPEED_API_KEY for a dedicated quota");
        }
    }

    println!("Referer: {}", config.app_url);
    println!("API URL: {}", config.api_url);
    println!("Bind address: {}", config.bind);
    println!("Cache TTL: {}s", config.cache_ttl_secs);
    println!("Request timeout: {}s", config.request_timeout_secs);
    println!("Upstream errors: {:?}", config.upstream_errors);
    println!("Allowed origins: {}", config.allowed_origins.join(", "));

    Ok(())
}

/// Show only the last four characters of a key
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
