//! # Warren Server Main Entry Point
//!
//! Builds the world from the authored fixtures, wires the engine to the UDP
//! dispatch loop, and runs until the process is killed.

use clap::Parser;
use log::{error, info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::Mutex;
use warren::world::fixtures;
use warren::{config, ChannelDelivery, Engine, Server, WarrenResult, World};

/// Command line arguments for the Warren server.
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(about = "A multiplayer text-adventure server with randomized building layouts")]
#[command(version)]
struct Args {
    /// UDP address to listen on
    #[arg(long, default_value = config::DEFAULT_BIND)]
    bind: String,

    /// Random seed for the building order and spawn picks
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WarrenResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Warren server starting, v{}", warren::VERSION);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Building data is validated here; a data-integrity fault means we
    // refuse to start rather than failing mid-session.
    let world = match World::new(fixtures::all(), &mut rng) {
        Ok(world) => world,
        Err(e) => {
            error!("world initialization failed: {e}");
            return Err(e);
        }
    };

    let engine = Arc::new(Mutex::new(Engine::with_rng(world, rng)));
    let delivery = Arc::new(Mutex::new(ChannelDelivery::new()));

    let server = Server::bind(&args.bind, engine, delivery).await?;
    server.run().await
}

/// Initializes env_logger at the requested level; RUST_LOG still wins when
/// set.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
