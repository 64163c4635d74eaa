//! Kombat Yoga API server entry point
//!
//! Composition root: configuration, logging, router assembly, static file
//! serving and the listener. All game logic lives in the library crate.

use clap::Parser;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use yoga_server::AppState;

const PLACEHOLDER_BOT_TOKEN: &str = "REPLACE_WITH_REAL_BOT_TOKEN";

#[derive(Parser, Debug)]
#[command(name = "yoga-server")]
#[command(about = "Kombat Yoga - Telegram mini-game API server")]
struct Args {
    /// Server port
    #[arg(short, long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Server host
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Telegram bot token (shared secret for initData verification)
    #[arg(long, env = "BOT_TOKEN", default_value = PLACEHOLDER_BOT_TOKEN)]
    bot_token: String,

    /// Directory holding the built frontend
    #[arg(long, default_value = "../dist", env = "STATIC_DIR")]
    static_dir: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("yoga_server=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    info!("Kombat Yoga API server");
    info!("  Listening on: {}:{}", args.host, args.port);
    info!("  Static files: {}", args.static_dir);

    if args.bot_token == PLACEHOLDER_BOT_TOKEN {
        warn!("BOT_TOKEN is the placeholder default; real Telegram traffic will fail verification");
    }
    warn!("CORS is wide open (any origin/method/header); restrict before production use");

    let state = Arc::new(AppState::new(args.bot_token.clone()));

    let index = ServeFile::new(format!("{}/index.html", args.static_dir));
    let assets = ServeDir::new(format!("{}/assets", args.static_dir));

    let app = yoga_server::router(state)
        .nest_service("/assets", assets)
        .fallback_service(ServeDir::new(&args.static_dir).fallback(index))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server ready at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
