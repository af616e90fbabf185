use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cubequery_tools::{
    decode_info_capture, decode_players_capture, format_info_pretty, format_roster_pretty,
    query_player_stats, query_server_info, QueryConfig,
};
use protocol::{query_port, ClientSelector, Limits, DEFAULT_GAME_PORT};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "cubequery",
    version,
    about = "Query AssaultCube servers over the extinfo protocol"
)]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query server info and the connected player names.
    Info {
        #[command(flatten)]
        target: Target,
    },
    /// Query per-player statistics.
    Players {
        #[command(flatten)]
        target: Target,
        /// Only ask about this client number.
        #[arg(long)]
        client: Option<u8>,
    },
    /// Decode a captured name-list datagram.
    DecodeInfo {
        /// Path to the datagram bytes.
        datagram: PathBuf,
    },
    /// Decode a captured player-stats exchange (one file per datagram).
    DecodePlayers {
        /// Directory holding the datagrams; the first file by name is the header.
        dir: PathBuf,
        /// Optional glob filter for datagram files.
        #[arg(long)]
        glob: Option<String>,
    },
}

#[derive(clap::Args)]
struct Target {
    /// Server host name or address.
    host: String,
    /// Query port (game port + 1).
    #[arg(long, default_value_t = query_port(DEFAULT_GAME_PORT))]
    port: u16,
    /// Receive timeout per datagram in milliseconds.
    #[arg(long, default_value_t = 3000)]
    timeout_ms: u64,
}

impl Target {
    fn config(self) -> QueryConfig {
        QueryConfig {
            host: self.host,
            port: self.port,
            timeout: Duration::from_millis(self.timeout_ms),
            ..QueryConfig::default()
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let limits = Limits::default();
    match cli.command {
        Command::Info { target } => {
            let report = query_server_info(&target.config(), &limits)?;
            emit(cli.format, &report, || format_info_pretty(&report))?;
        }
        Command::Players { target, client } => {
            let selector = client.map_or(ClientSelector::All, ClientSelector::One);
            let roster = query_player_stats(&target.config(), selector, &limits)?;
            emit(cli.format, &roster, || format_roster_pretty(&roster))?;
        }
        Command::DecodeInfo { datagram } => {
            let report = decode_info_capture(&datagram, &limits)?;
            emit(cli.format, &report, || format_info_pretty(&report))?;
        }
        Command::DecodePlayers { dir, glob } => {
            let roster = decode_players_capture(&dir, glob.as_deref(), &limits)?;
            emit(cli.format, &roster, || format_roster_pretty(&roster))?;
        }
    }
    Ok(())
}

fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    pretty: impl FnOnce() -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).context("serialize json")?;
            println!("{json}");
        }
        OutputFormat::Pretty => print!("{}", pretty()),
    }
    Ok(())
}
