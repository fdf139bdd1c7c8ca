//! Command-line configuration for the `lexi-stream` binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing_subscriber::filter::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing_subscriber::filter::LevelFilter::ERROR,
            LogLevel::Warn => tracing_subscriber::filter::LevelFilter::WARN,
            LogLevel::Info => tracing_subscriber::filter::LevelFilter::INFO,
            LogLevel::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
            LogLevel::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lexi-stream", version, about = "Clean up buffered chat stream text")]
pub struct Cli {
    /// Logging verbosity level
    #[arg(long, global = true, env = "LEXI_LOG_LEVEL", default_value = "warn")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the cleaned text of raw `data:` stream frames
    Parse {
        /// Input path or - for stdin
        #[arg(short = 'i', long, default_value = "-")]
        input: PathBuf,
    },
    /// Print a chat history document as a transcript
    History {
        /// Input path or - for stdin
        #[arg(short = 'i', long, default_value = "-")]
        input: PathBuf,
    },
    /// Print how long ago a timestamp was
    Ago {
        /// ISO-8601 timestamp; prints an empty line when omitted
        timestamp: Option<String>,
    },
}
