//! winput CLI entry point.
//!
//! Types text or sends an editing hotkey through the OS input stream, or
//! prints the event batch that would be sent.
//!
//! # Usage
//!
//! ```text
//! winput [--config <PATH>] <COMMAND>
//!
//! Commands:
//!   type <TEXT> [--release-unicode]      Type TEXT into the focused window
//!   hotkey <NAME>                        Send a hotkey (copy, paste, select-all, ...)
//!   plan [<TEXT>] [--hotkey <NAME>]      Print the batch without injecting it
//!        [--json] [--release-unicode]
//!   config show | config init            Inspect or create the config file
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable        | Description                                   |
//! |-----------------|-----------------------------------------------|
//! | `WINPUT_CONFIG` | Path to the config file (same as `--config`)  |
//! | `RUST_LOG`      | Log filter; overrides `logging.log_level`     |

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use winput::infrastructure::storage::config::{
    config_file_path, load_config_from, save_config_to, AppConfig,
};
use winput::infrastructure::{dry_run_session, platform_session};
use winput::SessionOptions;
use winput_core::{HotKey, UnicodeRelease};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Synthesize keyboard input: type text and send editing hotkeys.
#[derive(Debug, Parser)]
#[command(name = "winput", version)]
struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true, env = "WINPUT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Type TEXT into the focused window as one batch.
    Type {
        text: String,
        /// Release characters typed as Unicode events explicitly.
        #[arg(long)]
        release_unicode: bool,
    },

    /// Send a named hotkey.
    Hotkey {
        /// copy, paste, cut, select-all, save, redo, undo, caret-start,
        /// caret-end, alt, backspace, space, tab, enter, caps-lock
        name: HotKey,
    },

    /// Print the batch for TEXT or a hotkey without injecting it.
    Plan {
        #[arg(required_unless_present = "hotkey")]
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        hotkey: Option<HotKey>,
        /// Print the events as JSON.
        #[arg(long)]
        json: bool,
        #[arg(long)]
        release_unicode: bool,
    },

    /// Inspect or create the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the config file path and the effective settings.
    Show,
    /// Write a config file with default settings if none exists.
    Init,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config_file_path().context("locating config file")?,
    };
    let config = load_config_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    // Initialise structured logging.  `RUST_LOG` overrides the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let options_for = |release_unicode: bool| {
        let mut options = SessionOptions::from(&config.session);
        if release_unicode {
            options.unicode_release = UnicodeRelease::Emit;
        }
        options
    };

    match cli.command {
        Command::Type {
            text,
            release_unicode,
        } => {
            let session = platform_session(options_for(release_unicode))?;
            let report = session
                .try_type_text(&text)
                .with_context(|| format!("typing {} characters", text.chars().count()))?;
            info!("typed {} events", report.accepted);
        }

        Command::Hotkey { name } => {
            let session = platform_session(options_for(false))?;
            let report = session
                .try_hot_key(name)
                .with_context(|| format!("sending hotkey {name}"))?;
            info!("sent hotkey {name} ({} events)", report.accepted);
        }

        Command::Plan {
            text,
            hotkey,
            json,
            release_unicode,
        } => {
            let (session, recorder) = dry_run_session(options_for(release_unicode));
            let outcome = match (hotkey, text) {
                (Some(hk), _) => session.try_hot_key(hk),
                (None, Some(text)) => session.try_type_text(&text),
                (None, None) => bail!("nothing to plan: pass TEXT or --hotkey"),
            };
            outcome.context("building batch")?;

            let events = recorder.events();
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                for event in &events {
                    println!("{event}");
                }
            }
        }

        Command::Config { action } => match action {
            ConfigAction::Show => {
                println!("# {}", config_path.display());
                print!("{}", toml::to_string_pretty(&config)?);
            }
            ConfigAction::Init => {
                if config_path.exists() {
                    bail!("config already exists at {}", config_path.display());
                }
                save_config_to(&config_path, &AppConfig::default())?;
                info!("wrote default config to {}", config_path.display());
            }
        },
    }

    Ok(())
}
