//! Console helpers shared by the demo binaries.

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter. Calling this twice is harmless.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Loads the config and installs logging; the first two lines of every demo.
pub fn bootstrap() -> crate::Result<Config> {
    let config = Config::load()?;
    init_logging(&config);
    Ok(config)
}

pub fn heading(title: &str) {
    println!("{}", format!("=== {} ===", title).bold().cyan());
}

pub fn section(title: &str) {
    println!("\n{}", format!("--- {} ---", title).bold());
}

/// Prints each line indented under the current section.
pub fn lines<I, S>(lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        println!("  {}", line.as_ref());
    }
}

pub fn success(message: &str) {
    println!("  {}", message.green());
}

pub fn failure(message: &str) {
    println!("  {}", message.red());
}
