use clap::Parser;
use std::time::Duration;
use tokio::net::TcpListener;

mod app_context;
mod cli;
mod giveaway;
mod health;
mod http;
mod logging;
mod map;
mod participants;
mod sessions;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init(&args);
    let app_context = app_context::init(&args).expect("Invalid giveaway configuration.");
    tracing::info!(
        "Giveaway location is ({}, {}), leaderboard shows {} entries.",
        app_context.giveaway.location.lat,
        app_context.giveaway.location.lng,
        app_context.giveaway.leaderboard_size,
    );
    storage::sessions::spawn_idle_sweep(
        app_context.sessions.clone(),
        Duration::from_secs(args.session_idle_secs),
    );
    let router = http::router::new(&args, app_context);
    let listener = TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("Failed to start the HTTP server.");
}
