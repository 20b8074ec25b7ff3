use std::env;

// Runtime/client constants (not gameplay tuning; the server owns that).

pub fn server_url() -> String {
    env::var("DUEL_SERVER_URL").unwrap_or_else(|_| "ws://127.0.0.1:8000/ws".to_string())
}

pub fn username() -> String {
    env::var("DUEL_USERNAME").unwrap_or_else(|_| "anonymous".to_string())
}

/// Bot difficulty to request instead of queuing for a human opponent.
/// Names the server's bot registry accepts, e.g. `AttackBot`,
/// `AttackBotSlow`.
pub fn bot_difficulty() -> Option<String> {
    env::var("DUEL_BOT").ok().filter(|value| !value.is_empty())
}

pub const OUTBOUND_CHANNEL_CAPACITY: usize = 64;
pub const KEY_CHANNEL_CAPACITY: usize = 64;
