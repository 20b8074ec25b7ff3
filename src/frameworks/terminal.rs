// Terminal keyboard adapter: raw-mode capture mapped to key edges.

use std::io::stdout;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyboardEnhancementFlags, ModifierKeyCode,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::{Key, KeyEdge};

/// Maps a terminal key code to a bound physical key. Unbound keys map to
/// `None` and never reach the input machine.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Q),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::W),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
            Some(Key::Shift)
        }
        KeyCode::Modifier(ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl) => {
            Some(Key::Ctrl)
        }
        _ => None,
    }
}

/// Repeats surface as extra down-edges; the input machine suppresses
/// them.
pub fn map_edge(kind: KeyEventKind) -> KeyEdge {
    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => KeyEdge::Down,
        KeyEventKind::Release => KeyEdge::Up,
    }
}

/// Puts the terminal in raw mode and spawns a reader thread that forwards
/// mapped key edges. Dropping the sender (Esc, read failure) is the
/// quit signal for the session loop.
pub fn spawn_key_reader(keys_tx: mpsc::Sender<(Key, KeyEdge)>) -> std::io::Result<()> {
    enable_raw_mode()?;
    // Release edges need the kitty enhancement protocol. Terminals
    // without it deliver only down-edges; a held Block then clears on
    // battle teardown instead of on release.
    if let Err(e) = execute!(
        stdout(),
        PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
        )
    ) {
        warn!(error = %e, "keyboard enhancement unavailable; release edges disabled");
    }

    std::thread::spawn(move || {
        read_loop(keys_tx);
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        let _ = disable_raw_mode();
    });
    Ok(())
}

fn read_loop(keys_tx: mpsc::Sender<(Key, KeyEdge)>) {
    loop {
        let ev = match event::read() {
            Ok(ev) => ev,
            Err(e) => {
                warn!(error = %e, "terminal read failed");
                return;
            }
        };
        let Event::Key(KeyEvent { code, kind, .. }) = ev else {
            continue;
        };
        if code == KeyCode::Esc && kind == KeyEventKind::Press {
            debug!("escape pressed; closing key input");
            return;
        }
        let Some(key) = map_key(code) else {
            continue;
        };
        if keys_tx.blocking_send((key, map_edge(kind))).is_err() {
            return;
        }
    }
}
