// Shared harness for the client integration tests: a recording
// presentation sink and controller/snapshot builders.
#![allow(dead_code)]

use std::collections::HashMap;

use tokio::sync::mpsc;

use duel_client::domain::{BattleSnapshot, CombatantSnapshot, CombatantState};
use duel_client::interface_adapters::presentation::PresentationSink;
use duel_client::use_cases::types::OutboundFrame;
use duel_client::use_cases::{PhaseController, SessionContext};

/// Sink that records every primitive so tests can assert on the final
/// surface state and on call order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub texts: HashMap<String, String>,
    pub visibility: HashMap<String, bool>,
    pub widths: HashMap<String, f32>,
    pub cues: Vec<String>,
    /// Ordered log of `set_text` calls, for sequence assertions.
    pub text_log: Vec<(String, String)>,
}

impl RecordingSink {
    pub fn text(&self, element: &str) -> &str {
        self.texts.get(element).map(String::as_str).unwrap_or("")
    }

    pub fn is_visible(&self, element: &str) -> bool {
        self.visibility.get(element).copied().unwrap_or(false)
    }

    pub fn width(&self, element: &str) -> Option<f32> {
        self.widths.get(element).copied()
    }

    pub fn texts_for(&self, element: &str) -> Vec<&str> {
        self.text_log
            .iter()
            .filter(|(id, _)| id == element)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

impl PresentationSink for RecordingSink {
    fn set_text(&mut self, element: &str, text: &str) {
        self.texts.insert(element.to_string(), text.to_string());
        self.text_log.push((element.to_string(), text.to_string()));
    }

    fn set_visible(&mut self, element: &str, visible: bool) {
        self.visibility.insert(element.to_string(), visible);
    }

    fn set_width_percent(&mut self, element: &str, value: f32) {
        self.widths.insert(element.to_string(), value);
    }

    fn play_cue(&mut self, cue: &str) {
        self.cues.push(cue.to_string());
    }
}

/// A controller in Lobby phase plus the receiving end of its outbound
/// queue.
pub fn controller(username: &str) -> (PhaseController<RecordingSink>, mpsc::Receiver<OutboundFrame>) {
    let (outbound_tx, outbound_rx) = mpsc::channel(16);
    let session = SessionContext::new(username.to_string(), outbound_tx);
    (
        PhaseController::new(session, RecordingSink::default()),
        outbound_rx,
    )
}

pub fn drain(rx: &mut mpsc::Receiver<OutboundFrame>) -> Vec<OutboundFrame> {
    let mut frames = Vec::new();
    while let Ok(frame) = rx.try_recv() {
        frames.push(frame);
    }
    frames
}

pub fn combatant(life: i32, stamina: f32, state_duration: i32, state: &str) -> CombatantSnapshot {
    CombatantSnapshot {
        life,
        stamina,
        state_duration,
        state: CombatantState::parse(state),
    }
}

pub fn snapshot(own: CombatantSnapshot, enemy: CombatantSnapshot) -> BattleSnapshot {
    BattleSnapshot { own, enemy }
}

/// Drives a controller from Lobby through the whole countdown into
/// Battle.
pub fn start_battle(ctrl: &mut PhaseController<RecordingSink>) {
    ctrl.handle_match_start("rival");
    while ctrl.countdown_tick().is_some() {}
}
