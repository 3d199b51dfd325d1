use clap::Parser;
use roomcrawl::{Registry, config::Config, net::http};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "roomcrawl", version, about = "A single-player text adventure over HTTP")]
struct Args {
    /// TOML configuration file (if omitted, use env/.env)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on (eg: "127.0.0.1:5000")
    #[arg(long)]
    bind: Option<String>,

    /// World seed in YAML (if omitted, use the built-in world)
    #[arg(long)]
    world: Option<PathBuf>,

    /// Directory with new-player.html, room.html and error.html
    #[arg(long)]
    views: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };

    // CLI flags win over config and env
    if let Some(bind) = args.bind {
        cfg.http_addr = bind;
    }
    if let Some(world) = args.world {
        cfg.world_file = Some(world);
    }
    if let Some(views) = args.views {
        cfg.views_dir = Some(views);
    }

    let addr: SocketAddr = cfg.socket_addr()?;
    let registry = Arc::new(Registry::from_config(&cfg)?);

    if let Err(e) = http::serve(addr, registry).await {
        tracing::error!(error=%e, "HTTP server failed");
        return Err(e.into());
    }

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().map_err(|e| anyhow::anyhow!("installing error hooks: {e}"))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,roomcrawl=debug"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();

    Ok(())
}
