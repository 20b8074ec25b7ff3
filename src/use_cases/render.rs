// Pure projection from a battle snapshot to displayable UI state.

use crate::domain::{BattleSnapshot, CombatantSnapshot, CombatantState, Direction};

/// Meter fill levels in percent. Values pass through verbatim; the server
/// is authoritative and this layer does not clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterLevels {
    pub life: f32,
    pub stamina: f32,
    pub state_duration: f32,
}

/// Which posture icons are visible for one side this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostureIcons {
    pub block: bool,
    pub light: bool,
    /// The opposite-facing light glyph used for `countered`.
    pub reversed_light: bool,
    pub heavy: bool,
    pub arrow: Option<Direction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SideProjection {
    pub meters: MeterLevels,
    pub icons: PostureIcons,
}

/// Everything the presentation layer needs for one tick. Icons not set
/// here are hidden by the applier; nothing persists between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct UiProjection {
    pub own: SideProjection,
    pub enemy: SideProjection,
}

/// Stateless snapshot-to-projection mapping. Each side's icons derive
/// from that side's own state.
pub fn project(snapshot: &BattleSnapshot) -> UiProjection {
    UiProjection {
        own: project_side(&snapshot.own),
        enemy: project_side(&snapshot.enemy),
    }
}

fn project_side(combatant: &CombatantSnapshot) -> SideProjection {
    SideProjection {
        meters: MeterLevels {
            life: combatant.life as f32,
            stamina: combatant.stamina,
            state_duration: combatant.state_duration as f32,
        },
        icons: icons_for(combatant.state),
    }
}

fn icons_for(state: CombatantState) -> PostureIcons {
    let mut icons = PostureIcons::default();
    match state {
        CombatantState::Standing => {}
        CombatantState::Blocking => icons.block = true,
        CombatantState::LightAttack => icons.light = true,
        CombatantState::HeavyAttack => icons.heavy = true,
        CombatantState::Counterattack => {
            icons.block = true;
            icons.light = true;
        }
        CombatantState::Countered => {
            icons.reversed_light = true;
            icons.block = true;
        }
        CombatantState::Interrupted(dir) => {
            icons.heavy = true;
            icons.arrow = Some(dir);
        }
        CombatantState::DirectionalHit(dir) => {
            icons.light = true;
            icons.arrow = Some(dir);
        }
        CombatantState::Unrecognized => icons.heavy = true,
    }
    icons
}
