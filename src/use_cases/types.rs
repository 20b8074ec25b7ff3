// Use-case level inputs/outputs shared across the client workflows.

use crate::domain::Action;

/// Control commands carried in the `command` field of chat-shaped frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand {
    SetName,
    Ready,
    Unready,
    BotMatch,
    StartGame,
    EndMatch,
}

impl ChatCommand {
    pub fn as_wire(&self) -> &'static str {
        match self {
            ChatCommand::SetName => "SETNAME",
            ChatCommand::Ready => "READY",
            ChatCommand::Unready => "UNREADY",
            ChatCommand::BotMatch => "BOT MATCH",
            ChatCommand::StartGame => "START GAME",
            ChatCommand::EndMatch => "END MATCH",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "SETNAME" => Some(ChatCommand::SetName),
            "READY" => Some(ChatCommand::Ready),
            "UNREADY" => Some(ChatCommand::Unready),
            "BOT MATCH" => Some(ChatCommand::BotMatch),
            "START GAME" => Some(ChatCommand::StartGame),
            "END MATCH" => Some(ChatCommand::EndMatch),
            _ => None,
        }
    }
}

/// One displayed line of the chat log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub username: String,
    pub message: String,
}

/// A frame queued for transmission to the server. The net adapter turns
/// this into the wire shape; nothing here blocks on the socket.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundFrame {
    pub username: String,
    pub message: String,
    pub command: Option<ChatCommand>,
}

impl OutboundFrame {
    pub fn action(username: &str, action: Action) -> Self {
        Self {
            username: username.to_string(),
            message: action.wire_name(),
            command: None,
        }
    }

    pub fn chat(username: &str, text: &str) -> Self {
        Self {
            username: username.to_string(),
            message: text.to_string(),
            command: None,
        }
    }

    pub fn control(username: &str, command: ChatCommand, message: &str) -> Self {
        Self {
            username: username.to_string(),
            message: message.to_string(),
            command: Some(command),
        }
    }
}
