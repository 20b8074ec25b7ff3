// Presentation seam: the only surface the core uses to touch a screen.

use crate::domain::Direction;
use crate::use_cases::render::{SideProjection, UiProjection};

/// Rendering primitives provided by the surrounding application. The core
/// never owns a rendering surface; it only drives these.
pub trait PresentationSink {
    fn set_text(&mut self, element: &str, text: &str);
    fn set_visible(&mut self, element: &str, visible: bool);
    fn set_width_percent(&mut self, element: &str, value: f32);
    fn play_cue(&mut self, cue: &str);
}

/// Element ids the core addresses through the sink.
pub mod element {
    pub const OWN_NAME: &str = "own_name";
    pub const ENEMY_NAME: &str = "enemy_name";
    pub const READY_BUTTON: &str = "ready_button";
    pub const GET_READY_TEXT: &str = "get_ready_text";
    pub const CHAT_PANEL: &str = "chat_panel";
    pub const CHAT_MESSAGES: &str = "chat_messages";
    pub const BATTLE_PANEL: &str = "battle_panel";

    pub const OWN_LIFE: &str = "own_life";
    pub const OWN_STAMINA: &str = "own_stamina";
    pub const OWN_DURATION: &str = "own_duration";
    pub const ENEMY_LIFE: &str = "enemy_life";
    pub const ENEMY_STAMINA: &str = "enemy_stamina";
    pub const ENEMY_DURATION: &str = "enemy_duration";

    pub const OWN_BLOCK_ICON: &str = "own_block_icon";
    pub const OWN_LIGHT_ICON: &str = "own_light_icon";
    pub const OWN_REVERSED_LIGHT_ICON: &str = "own_reversed_light_icon";
    pub const OWN_HEAVY_ICON: &str = "own_heavy_icon";
    pub const ENEMY_BLOCK_ICON: &str = "enemy_block_icon";
    pub const ENEMY_LIGHT_ICON: &str = "enemy_light_icon";
    pub const ENEMY_REVERSED_LIGHT_ICON: &str = "enemy_reversed_light_icon";
    pub const ENEMY_HEAVY_ICON: &str = "enemy_heavy_icon";

    pub const ARROW_LEFT: &str = "arrow_left";
    pub const ARROW_UP: &str = "arrow_up";
    pub const ARROW_RIGHT: &str = "arrow_right";
    pub const ARROW_DOWN: &str = "arrow_down";
}

/// Cue names the core plays through the sink.
pub mod cue {
    pub const MATCH_FOUND: &str = "match_found";
    pub const COUNTDOWN: &str = "countdown";
    pub const BATTLE_START: &str = "battle_start";
}

struct SideElements {
    life: &'static str,
    stamina: &'static str,
    duration: &'static str,
    block: &'static str,
    light: &'static str,
    reversed_light: &'static str,
    heavy: &'static str,
}

const OWN_SIDE: SideElements = SideElements {
    life: element::OWN_LIFE,
    stamina: element::OWN_STAMINA,
    duration: element::OWN_DURATION,
    block: element::OWN_BLOCK_ICON,
    light: element::OWN_LIGHT_ICON,
    reversed_light: element::OWN_REVERSED_LIGHT_ICON,
    heavy: element::OWN_HEAVY_ICON,
};

const ENEMY_SIDE: SideElements = SideElements {
    life: element::ENEMY_LIFE,
    stamina: element::ENEMY_STAMINA,
    duration: element::ENEMY_DURATION,
    block: element::ENEMY_BLOCK_ICON,
    light: element::ENEMY_LIGHT_ICON,
    reversed_light: element::ENEMY_REVERSED_LIGHT_ICON,
    heavy: element::ENEMY_HEAVY_ICON,
};

const ALL_ICONS: [&str; 12] = [
    element::OWN_BLOCK_ICON,
    element::OWN_LIGHT_ICON,
    element::OWN_REVERSED_LIGHT_ICON,
    element::OWN_HEAVY_ICON,
    element::ENEMY_BLOCK_ICON,
    element::ENEMY_LIGHT_ICON,
    element::ENEMY_REVERSED_LIGHT_ICON,
    element::ENEMY_HEAVY_ICON,
    element::ARROW_LEFT,
    element::ARROW_UP,
    element::ARROW_RIGHT,
    element::ARROW_DOWN,
];

fn arrow_element(dir: Direction) -> &'static str {
    match dir {
        Direction::Left => element::ARROW_LEFT,
        Direction::Up => element::ARROW_UP,
        Direction::Right => element::ARROW_RIGHT,
        Direction::Down => element::ARROW_DOWN,
    }
}

/// Pushes one tick's projection into the sink. Every icon is hidden
/// first, so nothing selected on a previous tick survives unless
/// re-selected.
pub fn apply_projection<S: PresentationSink>(sink: &mut S, ui: &UiProjection) {
    for icon in ALL_ICONS {
        sink.set_visible(icon, false);
    }
    apply_side(sink, &ui.own, &OWN_SIDE);
    apply_side(sink, &ui.enemy, &ENEMY_SIDE);
}

fn apply_side<S: PresentationSink>(sink: &mut S, side: &SideProjection, elements: &SideElements) {
    sink.set_width_percent(elements.life, side.meters.life);
    sink.set_width_percent(elements.stamina, side.meters.stamina);
    sink.set_width_percent(elements.duration, side.meters.state_duration);

    if side.icons.block {
        sink.set_visible(elements.block, true);
    }
    if side.icons.light {
        sink.set_visible(elements.light, true);
    }
    if side.icons.reversed_light {
        sink.set_visible(elements.reversed_light, true);
    }
    if side.icons.heavy {
        sink.set_visible(elements.heavy, true);
    }
    // Both duel sides carry the same resolution arrow, so the shared
    // arrow row shows the union.
    if let Some(dir) = side.icons.arrow {
        sink.set_visible(arrow_element(dir), true);
    }
}
