use anyhow::{Context, Result};
use cdp_wire::inspect::{init_logging, Config, Reporter};
use cdp_wire::protocol::{CdpError, Response};
use clap::Parser;
use std::io::Read;
use tracing::{debug, error, info};

fn main() {
    // Parse CLI arguments
    let config = Config::parse();

    // Initialize structured logging with config options
    init_logging(&config.log_level, config.is_json_format());

    // Validate configuration
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config) {
        error!(error = %e, "Inspection failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let raw = read_payload(&config)?;
    debug!(bytes = raw.len(), "Payload read");

    let err = if config.bare {
        CdpError::decode(&raw).context("payload is not an error object")?
    } else {
        let response = Response::decode(&raw).context("payload is not a response envelope")?;
        match response.into_result() {
            Ok(result) => {
                info!("Response carries no error");
                println!("response succeeded: {}", result);
                return Ok(());
            }
            Err(err) => err,
        }
    };

    Reporter::new().print(&err);
    Ok(())
}

fn read_payload(config: &Config) -> Result<Vec<u8>> {
    match &config.payload {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("failed to read payload from {}", path.display())),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read payload from stdin")?;
            Ok(buf)
        }
    }
}
