//! Inspect and validate HTTP protocol configuration.
//!
//! ```text
//! http-protocols --config protocols.toml show --json
//! http-protocols --config protocols.toml check
//! http-protocols parse "h2c, http/1.1"
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use http_protocols::config::{self, validation, ConfigError, ProtocolsConfig};
use http_protocols::observability::init_logging;
use http_protocols::{Protocol, ProtocolSet};

#[derive(Parser)]
#[command(name = "http-protocols")]
#[command(about = "Inspect and validate enabled HTTP protocols", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the protocol set of each endpoint
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Validate the configuration and report warnings
    Check,
    /// Parse a protocol set expression and print its canonical form
    Parse {
        /// e.g. "{HTTP1,HTTP2}" or "h2c, http/1.1"
        set: String,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::read_config(path)?,
        None => ProtocolsConfig::default(),
    };
    init_logging(&config.observability)?;

    match cli.command {
        Commands::Show { json } => {
            let config = config::check_config(config)?;
            show(&config, json)?;
        }
        Commands::Check => return Ok(check(config)?),
        Commands::Parse { set } => {
            let protocols: ProtocolSet = set.parse()?;
            tracing::debug!(input = %set, %protocols, "Parsed protocol set");
            println!("{}", protocols);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Validate and report; validation errors map to a failing exit status.
fn check(config: ProtocolsConfig) -> Result<ExitCode, ConfigError> {
    match config::check_config(config) {
        Ok(config) => {
            for warning in validation::config_warnings(&config) {
                println!("warning: {}", warning);
            }
            println!("ok");
            Ok(ExitCode::SUCCESS)
        }
        Err(ConfigError::Validation(errors)) => {
            for error in &errors {
                eprintln!("error: {}", error);
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e),
    }
}

fn show(config: &ProtocolsConfig, as_json: bool) -> Result<(), serde_json::Error> {
    if !as_json {
        for (name, endpoint) in config.endpoints() {
            println!("{}: {}", name, endpoint.protocol_set());
        }
        return Ok(());
    }

    let endpoints: Vec<_> = config
        .endpoints()
        .map(|(name, endpoint)| {
            let protocols = endpoint.protocol_set();
            json!({
                "endpoint": name,
                "protocols": protocols.iter().collect::<Vec<Protocol>>(),
                "rendered": protocols.to_string(),
                "tls": endpoint.is_tls(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&endpoints)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_passes_default_config() {
        assert_eq!(check(ProtocolsConfig::default()).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn check_fails_on_validation_errors() {
        let mut config = ProtocolsConfig::default();
        config.server.protocols.clear();
        config.client.protocols = vec![Protocol::Http2];

        assert_eq!(check(config).unwrap(), ExitCode::FAILURE);
    }

    #[test]
    fn cli_parses_check_subcommand() {
        let cli = Cli::try_parse_from(["http-protocols", "--config", "p.toml", "check"]).unwrap();
        assert!(matches!(cli.command, Commands::Check));
        assert_eq!(cli.config, Some(PathBuf::from("p.toml")));
    }
}
