use chain_address::address::checksum::to_checksum;
use chain_address::codec::Keccak256Hasher;
use chain_address::config::Config;
use chain_address::error::{Error, Result};
use chain_address::logger::Logger;
use chain_address::{Base58KeyValidator, HexAddressValidator};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "chain-address")]
#[command(about = "Validate hex (checksummed) addresses and base58 public keys")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level: "error", "warn", "info" or "debug"
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a 0x-prefixed hex address
    Hex {
        /// Address to check
        address: String,
    },

    /// Validate a base58 public key (32 bytes decoded)
    Base58 {
        /// Key to check
        key: String,
    },

    /// Print the checksummed form of a hex address
    Checksum {
        /// Address to convert
        address: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
        }
    }
}

/// Apply command-line flags on top of a base (environment) config
fn resolve_config(mut config: Config, format: Option<OutputFormat>, log_level: Option<String>) -> Config {
    if let Some(format) = format {
        config.set_output_format(format.as_str().to_string());
    }
    if let Some(level) = log_level {
        config.set_log_level(level);
    }
    config
}

/// Format output based on format type
fn format_output<T: serde::Serialize + std::fmt::Debug>(data: &T, config: &Config) -> Result<String> {
    if config.is_json() {
        serde_json::to_string_pretty(data)
            .map_err(|e| Error::Output(format!("Failed to serialize JSON: {}", e)))
    } else {
        Ok(format!("{:#?}", data))
    }
}

fn report(logger: &Logger, kind: &'static str, input: String, outcome: Result<()>) -> ValidationReport {
    let reason = match outcome {
        Ok(()) => {
            logger.debug(&format!("{} {} is valid", kind, input));
            None
        }
        Err(e) => {
            logger.warn(&format!("{} {} rejected: {}", kind, input, e));
            Some(e.to_string())
        }
    };
    ValidationReport {
        kind,
        input,
        valid: reason.is_none(),
        reason,
        checksummed: None,
    }
}

fn hex_report(logger: &Logger, address: String) -> ValidationReport {
    let outcome = HexAddressValidator::new().validate(&address);
    // A valid address has an ASCII two-byte prefix
    let checksummed = match outcome {
        Ok(()) => to_checksum(&address[2..], &Keccak256Hasher)
            .ok()
            .map(|body| format!("0x{}", body)),
        Err(_) => None,
    };
    ValidationReport {
        checksummed,
        ..report(logger, "hex", address, outcome)
    }
}

fn base58_report(logger: &Logger, key: String) -> ValidationReport {
    let outcome = Base58KeyValidator::new().validate(&key);
    report(logger, "base58", key, outcome)
}

/// Returns whether the input was valid; see `exit_code`.
pub fn run(cli: Cli) -> Result<bool> {
    let config = resolve_config(Config::from_env(), cli.format, cli.log_level);
    let logger = config.logger();
    logger.debug(&format!(
        "Output format: {}, log level: {}",
        config.get_output_format(),
        config.get_log_level()
    ));

    match cli.command {
        Commands::Hex { address } => {
            let output = hex_report(&logger, address);
            println!("{}", format_output(&output, &config)?);
            Ok(output.valid)
        }

        Commands::Base58 { key } => {
            let output = base58_report(&logger, key);
            println!("{}", format_output(&output, &config)?);
            Ok(output.valid)
        }

        Commands::Checksum { address } => {
            let checksummed = HexAddressValidator::new()
                .checksummed(&address)
                .map_err(|e| {
                    logger.error(&format!("Cannot checksum {}: {}", address, e));
                    e
                })?;
            logger.info(&format!("Checksummed {}", address));
            let output = ChecksumOutput {
                input: address,
                checksummed,
            };
            println!("{}", format_output(&output, &config)?);
            Ok(true)
        }
    }
}

/// 0 for a valid input, 1 for an invalid input or an error
pub fn exit_code(outcome: &Result<bool>) -> i32 {
    match outcome {
        Ok(true) => 0,
        Ok(false) | Err(_) => 1,
    }
}

#[derive(Debug, serde::Serialize)]
struct ValidationReport {
    kind: &'static str,
    input: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksummed: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct ChecksumOutput {
    input: String,
    checksummed: String,
}
