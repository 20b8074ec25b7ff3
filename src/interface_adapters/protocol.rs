// Wire protocol DTOs and conversions for the duel server connection.
// Everything on the wire is JSON text over one WebSocket.

use serde::{Deserialize, Serialize};

use crate::domain::{BattleSnapshot, CombatantSnapshot, CombatantState};
use crate::use_cases::types::OutboundFrame;

/// Chat-shaped inbound frame. Control frames reuse this shape with a
/// non-empty `command`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessageDto {
    #[serde(default)]
    pub username: String,
    // No default: the presence of this field is what distinguishes a
    // chat-shaped frame from a snapshot.
    pub message: String,
    #[serde(default)]
    pub command: String,
}

/// One combatant inside a snapshot frame.
#[derive(Debug, Clone, Deserialize)]
pub struct CombatantDto {
    pub life: i32,
    pub stamina: f32,
    pub state: String,
    #[serde(rename = "stateDur")]
    pub state_duration: i32,
}

/// Per-tick battle push from the server.
#[derive(Debug, Clone, Deserialize)]
pub struct BattleSnapshotDto {
    #[serde(rename = "self")]
    pub own: CombatantDto,
    pub enemy: CombatantDto,
}

/// Everything the server can push. Chat is tried first; a snapshot frame
/// has no `message` field and falls through.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ServerEvent {
    Chat(ChatMessageDto),
    Snapshot(BattleSnapshotDto),
}

pub fn decode_server_event(text: &str) -> Result<ServerEvent, serde_json::Error> {
    serde_json::from_str(text)
}

impl From<CombatantDto> for CombatantSnapshot {
    fn from(dto: CombatantDto) -> Self {
        Self {
            life: dto.life,
            stamina: dto.stamina,
            state_duration: dto.state_duration,
            // The state string is decoded exactly once, here.
            state: CombatantState::parse(&dto.state),
        }
    }
}

impl From<BattleSnapshotDto> for BattleSnapshot {
    fn from(dto: BattleSnapshotDto) -> Self {
        Self {
            own: dto.own.into(),
            enemy: dto.enemy.into(),
        }
    }
}

/// Outbound frame shape shared by actions, chat text and control
/// messages.
#[derive(Debug, Clone, Serialize)]
pub struct WireFrameDto {
    pub username: String,
    pub message: String,
    pub command: String,
}

impl From<OutboundFrame> for WireFrameDto {
    fn from(frame: OutboundFrame) -> Self {
        Self {
            username: frame.username,
            message: frame.message,
            command: frame
                .command
                .map(|command| command.as_wire().to_string())
                .unwrap_or_default(),
        }
    }
}
