// Top-level phase machine: lobby, countdown, battle, resolution.

use std::time::Duration;

use tracing::{debug, info};

use crate::domain::{BattleSnapshot, Key, KeyEdge};
use crate::interface_adapters::presentation::{
    PresentationSink, apply_projection, cue, element,
};
use crate::use_cases::input::InputStateMachine;
use crate::use_cases::render;
use crate::use_cases::session::SessionContext;
use crate::use_cases::types::ChatLine;

/// Minimum display time of each countdown caption before the next stage
/// fires.
pub const COUNTDOWN_STAGE_INTERVAL: Duration = Duration::from_secs(1);

/// Username the end-of-match result line is attributed to.
const RESULT_LINE_SENDER: &str = "server";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Lobby,
    Countdown,
    Battle,
    /// Transient: entered and left within a single snapshot dispatch. The
    /// controller holds no state here beyond sending the end-of-match
    /// acknowledgment.
    Resolution,
}

/// The four timed countdown stages. Modeled as explicit states so the
/// event loop's single timer slot can drive them without nested
/// callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountdownStage {
    Three,
    Two,
    One,
    Go,
}

impl CountdownStage {
    fn caption(self) -> &'static str {
        match self {
            CountdownStage::Three => "3...",
            CountdownStage::Two => "2...",
            CountdownStage::One => "1...",
            CountdownStage::Go => "Get ready!",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            CountdownStage::Three => Some(CountdownStage::Two),
            CountdownStage::Two => Some(CountdownStage::One),
            CountdownStage::One => Some(CountdownStage::Go),
            CountdownStage::Go => None,
        }
    }
}

/// Drives the chat/countdown/battle/resolution cycle and owns which
/// surfaces are live. All events arrive on one execution context and run
/// to completion, so a phase change here is effective before the next
/// event is looked at.
pub struct PhaseController<S: PresentationSink> {
    phase: Phase,
    countdown: Option<CountdownStage>,
    input: InputStateMachine,
    session: SessionContext,
    sink: S,
}

impl<S: PresentationSink> PhaseController<S> {
    pub fn new(session: SessionContext, sink: S) -> Self {
        Self {
            phase: Phase::Lobby,
            countdown: None,
            input: InputStateMachine::new(),
            session,
            sink,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionContext {
        &mut self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Appends a plain chat line and refreshes the chat surface. Lines
    /// keep accumulating during battle; the panel is just hidden.
    pub fn handle_chat_line(&mut self, line: ChatLine) {
        let rendered = self.session.append_chat_line(line);
        self.sink.set_text(element::CHAT_MESSAGES, &rendered);
    }

    /// Handles a `START GAME` control frame. Returns the delay until the
    /// first countdown stage, or `None` when the frame was ignored
    /// (already counting down or fighting).
    pub fn handle_match_start(&mut self, enemy_name: &str) -> Option<Duration> {
        if self.phase != Phase::Lobby {
            debug!(phase = ?self.phase, "match start ignored outside lobby");
            return None;
        }
        info!(enemy = enemy_name, "match found");

        self.phase = Phase::Countdown;
        self.countdown = None;
        self.session.reset_ready();

        self.sink.set_text(element::OWN_NAME, self.session.username());
        self.sink.set_text(element::ENEMY_NAME, enemy_name);
        self.sink.set_text(element::READY_BUTTON, "Ready for game");
        self.sink.play_cue(cue::MATCH_FOUND);
        self.sink.set_visible(element::CHAT_PANEL, false);
        self.sink.set_visible(element::BATTLE_PANEL, true);
        self.sink.set_visible(element::GET_READY_TEXT, true);

        Some(COUNTDOWN_STAGE_INTERVAL)
    }

    /// Advances the countdown by one stage. Returns the delay until the
    /// next stage, or `None` once the battle has started (or the
    /// countdown was cancelled).
    pub fn countdown_tick(&mut self) -> Option<Duration> {
        if self.phase != Phase::Countdown {
            return None;
        }
        let stage = match self.countdown {
            None => CountdownStage::Three,
            Some(stage) => stage.next()?,
        };

        if stage == CountdownStage::Go {
            self.sink.set_text(element::GET_READY_TEXT, stage.caption());
            self.sink.set_visible(element::GET_READY_TEXT, false);
            self.sink.play_cue(cue::BATTLE_START);
            self.input.clear();
            self.countdown = None;
            self.phase = Phase::Battle;
            info!("battle started");
            return None;
        }

        self.sink.set_text(element::GET_READY_TEXT, stage.caption());
        self.sink.play_cue(cue::COUNTDOWN);
        self.countdown = Some(stage);
        Some(COUNTDOWN_STAGE_INTERVAL)
    }

    /// Projects one authoritative snapshot, then runs the end-of-match
    /// check. Snapshots outside battle are dropped.
    pub fn handle_snapshot(&mut self, snapshot: BattleSnapshot) {
        if self.phase != Phase::Battle {
            debug!(phase = ?self.phase, "snapshot ignored outside battle");
            return;
        }

        let ui = render::project(&snapshot);
        apply_projection(&mut self.sink, &ui);

        if snapshot.is_finished() {
            self.finish_battle(&snapshot);
        }
    }

    /// Feeds a key edge to the input machine. Outside battle the edge is
    /// dropped before the machine sees it, so no transmission can occur.
    pub fn handle_key(&mut self, key: Key, edge: KeyEdge) {
        if self.phase != Phase::Battle {
            return;
        }
        let transmit = match edge {
            KeyEdge::Down => self.input.press(key),
            KeyEdge::Up => self.input.release(key),
        };
        if let Some(action) = transmit {
            self.session.send_action(action);
        }
    }

    fn finish_battle(&mut self, snapshot: &BattleSnapshot) {
        // Leaving Battle first: any key edge or snapshot queued behind
        // this event finds the phase already changed.
        self.phase = Phase::Resolution;
        self.input.clear();

        self.sink.set_visible(element::BATTLE_PANEL, false);
        self.sink.set_visible(element::CHAT_PANEL, true);

        let result = ChatLine {
            username: RESULT_LINE_SENDER.to_string(),
            message: format!(
                "Result of battle: you had {} life and the enemy had {}",
                snapshot.own.life, snapshot.enemy.life
            ),
        };
        let rendered = self.session.append_chat_line(result);
        self.sink.set_text(element::CHAT_MESSAGES, &rendered);

        self.session.acknowledge_match_end();
        self.phase = Phase::Lobby;
        info!(
            own_life = snapshot.own.life,
            enemy_life = snapshot.enemy.life,
            "match finished"
        );
    }
}
