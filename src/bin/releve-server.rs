#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::Parser;
use releve::api::{create_router, AppState};
use releve::scheduler::{MergeOptions, OverridePrecedence};
use tracing::info;

/// Serveur HTTP de planning d'astreinte
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Adresse d'écoute
    #[arg(long, env = "RELEVE_ADDR", default_value = "127.0.0.1:5500")]
    addr: String,

    /// En cas de surcharges qui se chevauchent, la première garde la main
    #[arg(long, env = "RELEVE_EARLIEST_WINS")]
    earliest_wins: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let precedence = if cli.earliest_wins {
        OverridePrecedence::EarliestWins
    } else {
        OverridePrecedence::LatestWins
    };
    let app = create_router(AppState::new(MergeOptions { precedence }));

    let listener = tokio::net::TcpListener::bind(&cli.addr)
        .await
        .with_context(|| format!("binding {}", cli.addr))?;
    info!(addr = %cli.addr, ?precedence, "releve server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
