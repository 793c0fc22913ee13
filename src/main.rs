mod commands;
mod console;
mod permissions;

use anyhow::{Context, Result};
use clap::Parser;
use cmdspec_core::commands::{CommandRegistry, CommandSource};
use cmdspec_core::config::EngineConfig;
use cmdspec_core::server::Server;
use console::{ConsoleSender, DemoServer};
use once_cell::sync::OnceCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

pub static REGISTRY: OnceCell<CommandRegistry> = OnceCell::new();

/// Try out command trees from a terminal. Lines are run as commands, lines
/// starting with `?` print tab-completion suggestions instead.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file, created with defaults when missing
    #[arg(long, default_value = "Config.toml")]
    config: PathBuf,

    /// Run commands as this online player instead of the console
    #[arg(long)]
    as_player: Option<String>,

    /// Permission (wildcards allowed) the sender does not hold
    #[arg(long = "deny", value_name = "PERMISSION")]
    denied: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = EngineConfig::load(&args.config)?;

    // Setup logging
    let logfile = tracing_appender::rolling::daily(&config.log_directory, "cmdspec.log");
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var("CMDSPEC_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(logfile.and(std::io::stdout))
        .with_env_filter(env_filter)
        .init();

    let server = DemoServer::new();
    let player = match &args.as_player {
        Some(name) => Some(
            server
                .player_exact(name)
                .with_context(|| format!("No online player named {}", name))?,
        ),
        None => None,
    };
    let default_permission = player.is_some() || config.console_permissions;
    let sender = ConsoleSender::new(player, default_permission, &args.denied);

    let mut registry = CommandRegistry::new();
    commands::register_commands(&mut registry, &config)?;
    let registry = REGISTRY.get_or_init(|| registry);
    info!(
        "Registered {} commands, type `help` for a list",
        registry.commands().count()
    );

    let source = CommandSource::new(&server, &sender);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim_start_matches('/');

        if let Some(partial) = line.strip_prefix('?') {
            let mut suggestions = registry.complete(source, partial);
            suggestions.truncate(config.max_suggestions.max(0) as usize);
            debug!("{} suggestions for {:?}", suggestions.len(), partial);
            println!("{}", suggestions.join("  "));
        } else if let Err(err) = registry.execute(source, line) {
            registry.report(source, &err);
        }
        io::stdout().flush()?;
    }

    Ok(())
}
