// Tracing-backed presentation sink for the headless terminal binary.

use tracing::{debug, info};

use crate::interface_adapters::presentation::PresentationSink;

/// Logs presentation primitives instead of drawing them. Enough to follow
/// a match from a terminal; a richer frontend implements the same trait
/// against a real surface.
#[derive(Debug, Default)]
pub struct LogPresentation;

impl PresentationSink for LogPresentation {
    fn set_text(&mut self, element: &str, text: &str) {
        info!(element, text, "ui text");
    }

    fn set_visible(&mut self, element: &str, visible: bool) {
        // Per-tick icon churn; keep it out of the default filter.
        debug!(element, visible, "ui visibility");
    }

    fn set_width_percent(&mut self, element: &str, value: f32) {
        debug!(element, value, "ui meter");
    }

    fn play_cue(&mut self, cue: &str) {
        info!(cue, "ui cue");
    }
}
