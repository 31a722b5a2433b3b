//! Binary entrypoint for the relichunt CLI.
//!
//! Commands:
//! - `play [--world <file>] [--integrity <policy>]` - play in the console
//! - `check [--world <file>]` - run the world integrity check and report
//! - `init` - write a starter `relichunt.toml`
//! - `export-world <path>` - write the built-in mansion as a JSON world file
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use relichunt::config::Config;
use relichunt::game::{
    canonical_world_seed, load_world_from_json, render, save_world_to_json, validate,
    GameSession, IntegrityPolicy, World, WorldSeed,
};

#[derive(Parser)]
#[command(name = "relichunt")]
#[command(about = "Collect every relic before you reach the attic")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "relichunt.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the console
    Play {
        /// JSON world file (overrides config)
        #[arg(short, long)]
        world: Option<String>,

        /// Integrity policy: warn or fail_fast (overrides config)
        #[arg(long)]
        integrity: Option<IntegrityPolicy>,
    },
    /// Check a world for dangling exits and misplaced items
    Check {
        /// JSON world file (overrides config)
        #[arg(short, long)]
        world: Option<String>,
    },
    /// Write a default configuration file
    Init,
    /// Write the built-in world as JSON, as a starting point for custom maps
    ExportWorld {
        /// Destination file
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing config file is fine; anything else wrong with it is not.
    let config = if Path::new(&cli.config).exists() {
        Config::load(&cli.config).await?
    } else {
        Config::default()
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Play { world, integrity } => {
            let policy = integrity.unwrap_or(config.game.integrity_policy);
            let seed = load_seed(world.as_deref().or(config.game.world_file.as_deref()))?;
            let world = World::from_seed(seed, policy).context("World failed to load")?;
            info!("Starting relichunt v{}", env!("CARGO_PKG_VERSION"));
            play(&world, config.game.show_map_on_start).await?;
        }
        Commands::Check { world } => {
            let seed = load_seed(world.as_deref().or(config.game.world_file.as_deref()))?;
            let violations = validate(&seed);
            println!("{}", render::format_integrity_report(&violations));
            // Structural faults are reported even when the links are clean.
            if let Err(e) = World::from_seed(seed, IntegrityPolicy::Warn) {
                error!("World is not playable: {}", e);
                std::process::exit(2);
            }
            if !violations.is_empty() {
                std::process::exit(1);
            }
        }
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
            println!("Wrote {}", cli.config);
        }
        Commands::ExportWorld { path } => {
            save_world_to_json(&canonical_world_seed(), &path)
                .with_context(|| format!("Failed to write world file {}", path))?;
            println!("Wrote {}", path);
        }
    }

    Ok(())
}

fn load_seed(path: Option<&str>) -> Result<WorldSeed> {
    match path {
        Some(path) => load_world_from_json(path)
            .with_context(|| format!("Failed to load world file {}", path)),
        None => Ok(canonical_world_seed()),
    }
}

/// Console loop: one line in, one reply out, until the game ends or stdin closes.
async fn play(world: &World, show_map: bool) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut session = GameSession::new(world);

    let mut opening = session.opening();
    if show_map {
        opening.push_str("\n\n");
        opening.push_str(&render::format_map(world));
    }
    stdout.write_all(opening.as_bytes()).await?;

    loop {
        stdout.write_all(b"\nEnter your move: ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            info!("Input closed; ending session");
            break;
        };
        let reply = session.process(&line);
        stdout.write_all(reply.text.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        if reply.finished {
            break;
        }
    }

    stdout
        .write_all(b"\nA final echo of thunder rolls through the halls. Game over.\n")
        .await?;
    stdout.flush().await?;
    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);
    builder.target(env_logger::Target::Stderr);

    let log_file = config.logging.file.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    if let Some(f) = log_file {
        let file = std::sync::Mutex::new(f);
        // Echo to the console only when someone is watching stderr
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = file.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
