use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use lexi_stream::config::{Cli, Command};
use lexi_stream::{ChatHistory, get_time_ago, parse_sse_text, render_transcript};
use std::io::Read;
use std::path::Path;
use tracing::debug;

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Parse { input } => {
            let raw = read_input(&input)?;
            debug!(bytes = raw.len(), "parsing stream text");
            println!("{}", parse_sse_text(&raw));
        }
        Command::History { input } => {
            let json = read_input(&input)?;
            let history = ChatHistory::from_json(&json)
                .with_context(|| format!("failed to decode {}", input.display()))?;
            debug!(user = %history.user, messages = history.messages.len(), "rendering history");
            for line in render_transcript(&history, Utc::now())? {
                println!("{line}");
            }
        }
        Command::Ago { timestamp } => {
            println!("{}", get_time_ago(timestamp.as_deref())?);
        }
    }
    Ok(())
}
