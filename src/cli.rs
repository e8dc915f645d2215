//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, init, validate), and their associated argument
//! structs. Every flag has an environment variable equivalent for
//! container deployments. An unrecognized `--format` value is rejected
//! by clap with a fatal usage error before anything starts.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{DEFAULT_HOST, DEFAULT_PORT};

#[derive(Parser)]
#[command(
    name = "waypost",
    version,
    about = "Path-to-URL redirect server",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        waypost init                      Create a starter mapping file\n  \
        waypost run                       Start with the built-in sample mappings\n  \
        waypost run -c redirects.yaml     Start with a specific mapping file\n\n  \
        Docs: https://github.com/waypost/waypost"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the redirect server
    Run(RunArgs),

    /// Generate a starter mapping file
    Init(InitArgs),

    /// Validate a mapping file without starting
    Validate(ValidateArgs),
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        waypost run                                  Built-in sample mappings\n  \
        waypost run -c redirects.yaml                Specific mapping file\n  \
        waypost run -c redirects.json -f json        JSON mapping file\n  \
        waypost run -c redirects.yaml -p 9090 --pretty   Local dev mode")]
pub struct RunArgs {
    /// Mapping file path (built-in sample when unset)
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Mapping file format
    #[arg(short, long, env = "CONFIG_FORMAT", default_value = "yaml")]
    pub format: ConfigFormat,

    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Listen address
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        waypost init                              Starter mapping file (yaml)\n  \
        waypost init -f json -o redirects.json    JSON starter file")]
pub struct InitArgs {
    /// Output format
    #[arg(short, long, default_value = "yaml")]
    pub format: ConfigFormat,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Mapping file to validate
    #[arg(default_value = "waypost.yaml")]
    pub config: PathBuf,

    /// Mapping file format
    #[arg(short, long, default_value = "yaml")]
    pub format: ConfigFormat,

    /// Report format
    #[arg(long, default_value = "text")]
    pub output: ValidateFormat,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ValidateFormat {
    Text,
    Json,
}
