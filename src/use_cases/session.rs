// Session context: the connection-scoped state that used to live in
// module-level globals (username, chat buffer, outbound socket handle).

use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::Action;
use crate::use_cases::types::{ChatCommand, ChatLine, OutboundFrame};

/// Created when the session starts, torn down on disconnect. Owns the
/// username, the ready toggle, the chat log and the outbound send queue.
pub struct SessionContext {
    username: String,
    ready: bool,
    chat_log: Vec<ChatLine>,
    outbound: mpsc::Sender<OutboundFrame>,
}

impl SessionContext {
    pub fn new(username: String, outbound: mpsc::Sender<OutboundFrame>) -> Self {
        Self {
            username,
            ready: false,
            chat_log: Vec::new(),
            outbound,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Registers the username with the server. First frame of every
    /// session.
    pub fn join(&self) {
        self.send(OutboundFrame::control(
            &self.username,
            ChatCommand::SetName,
            "",
        ));
    }

    pub fn send_action(&self, action: Action) {
        self.send(OutboundFrame::action(&self.username, action));
    }

    pub fn send_chat(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.send(OutboundFrame::chat(&self.username, text));
    }

    /// Flips the ready flag and transmits the matching control frame.
    /// Returns the new state so callers can update the button label.
    pub fn toggle_ready(&mut self) -> bool {
        self.ready = !self.ready;
        let command = if self.ready {
            ChatCommand::Ready
        } else {
            ChatCommand::Unready
        };
        self.send(OutboundFrame::control(&self.username, command, ""));
        self.ready
    }

    /// Resets the ready flag without transmitting; the server clears
    /// readiness itself when it starts a match.
    pub fn reset_ready(&mut self) {
        self.ready = false;
    }

    pub fn request_bot_match(&self, difficulty: &str) {
        self.send(OutboundFrame::control(
            &self.username,
            ChatCommand::BotMatch,
            difficulty,
        ));
    }

    pub fn acknowledge_match_end(&self) {
        self.send(OutboundFrame::control(
            &self.username,
            ChatCommand::EndMatch,
            "",
        ));
    }

    /// Appends a line to the chat log and returns the rendered buffer.
    pub fn append_chat_line(&mut self, line: ChatLine) -> String {
        self.chat_log.push(line);
        self.render_chat()
    }

    pub fn render_chat(&self) -> String {
        let mut rendered = String::new();
        for line in &self.chat_log {
            rendered.push_str(&format!("[{}] {}\n", line.username, line.message));
        }
        rendered
    }

    fn send(&self, frame: OutboundFrame) {
        // Fire-and-forget: the session never blocks on the socket.
        match self.outbound.try_send(frame) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(frame)) => {
                warn!(message = %frame.message, "outbound channel full; dropping frame");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                warn!("outbound channel closed; connection is gone");
            }
        }
    }
}
