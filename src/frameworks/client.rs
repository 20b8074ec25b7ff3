// Framework bootstrap for the client runtime.

use tokio::sync::mpsc;

use crate::frameworks::config;
use crate::frameworks::presentation::LogPresentation;
use crate::frameworks::terminal;
use crate::interface_adapters::net::{self, NetError, WsStream};
use crate::use_cases::phase::PhaseController;
use crate::use_cases::session::SessionContext;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run_with_config() -> std::io::Result<()> {
    init_runtime();

    let url = config::server_url();
    let username = config::username();
    tracing::info!(%url, %username, "connecting");

    let stream = net::connect(&url).await.map_err(io_err)?;
    run(stream, username).await
}

/// Wires the session and drives it until disconnect or quit.
pub async fn run(stream: WsStream, username: String) -> std::io::Result<()> {
    let (outbound_tx, outbound_rx) = mpsc::channel(config::OUTBOUND_CHANNEL_CAPACITY);
    let (keys_tx, keys_rx) = mpsc::channel(config::KEY_CHANNEL_CAPACITY);

    terminal::spawn_key_reader(keys_tx)?;

    let mut session = SessionContext::new(username, outbound_tx);
    // Register the name, then either queue for a bot or flag ready for a
    // human opponent.
    session.join();
    match config::bot_difficulty() {
        Some(difficulty) => session.request_bot_match(&difficulty),
        None => {
            session.toggle_ready();
        }
    }

    let mut controller = PhaseController::new(session, LogPresentation);
    net::run_session(stream, &mut controller, outbound_rx, keys_rx)
        .await
        .map_err(io_err)
}

fn io_err(e: NetError) -> std::io::Error {
    std::io::Error::other(format!("session failed: {e:?}"))
}
