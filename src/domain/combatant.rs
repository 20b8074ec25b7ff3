// Combatant state as pushed by the server, decoded once at the transport
// boundary into a tagged variant instead of ad hoc substring checks.

use crate::domain::action::Direction;

/// What a combatant is doing this tick. The server encodes this as a
/// string; directional forms carry the arrow that resolves the interrupt
/// duel as a `_<dir>` suffix (e.g. `interrupted heavy_up`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatantState {
    Standing,
    Blocking,
    LightAttack,
    HeavyAttack,
    Counterattack,
    Countered,
    /// The heavy-attack side of an interrupt duel.
    Interrupted(Direction),
    /// The light-attack side of an interrupt duel (`interrupting heavy_*`
    /// on the wire, or any other directional form).
    DirectionalHit(Direction),
    /// Anything the client does not know; rendered with the heavy-icon
    /// fallback.
    Unrecognized,
}

impl CombatantState {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "standing" => CombatantState::Standing,
            "blocking" => CombatantState::Blocking,
            "light attack" => CombatantState::LightAttack,
            "heavy attack" => CombatantState::HeavyAttack,
            "counterattack" => CombatantState::Counterattack,
            "countered" => CombatantState::Countered,
            other => {
                let direction = other
                    .rsplit_once('_')
                    .and_then(|(_, suffix)| Direction::parse(suffix));
                match direction {
                    // "interrupting..." does not match the "interrupted" prefix.
                    Some(dir) if other.starts_with("interrupted") => {
                        CombatantState::Interrupted(dir)
                    }
                    Some(dir) => CombatantState::DirectionalHit(dir),
                    None => CombatantState::Unrecognized,
                }
            }
        }
    }
}

/// Server-authoritative view of one combatant. The client never mutates
/// these values, only projects them.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatantSnapshot {
    pub life: i32,
    pub stamina: f32,
    pub state_duration: i32,
    pub state: CombatantState,
}

/// One per-tick battle push. Consumed immediately by the projection and
/// discarded; no history is retained beyond the end-of-match check.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleSnapshot {
    pub own: CombatantSnapshot,
    pub enemy: CombatantSnapshot,
}

impl BattleSnapshot {
    /// A match is over as soon as either side's life reaches zero.
    pub fn is_finished(&self) -> bool {
        self.own.life <= 0 || self.enemy.life <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_states() {
        assert_eq!(CombatantState::parse("standing"), CombatantState::Standing);
        assert_eq!(CombatantState::parse("blocking"), CombatantState::Blocking);
        assert_eq!(
            CombatantState::parse("light attack"),
            CombatantState::LightAttack
        );
        assert_eq!(
            CombatantState::parse("counterattack"),
            CombatantState::Counterattack
        );
    }

    #[test]
    fn parses_interrupt_duel_sides() {
        assert_eq!(
            CombatantState::parse("interrupted heavy_up"),
            CombatantState::Interrupted(Direction::Up)
        );
        assert_eq!(
            CombatantState::parse("interrupting heavy_down"),
            CombatantState::DirectionalHit(Direction::Down)
        );
        assert_eq!(
            CombatantState::parse("interrupted_left"),
            CombatantState::Interrupted(Direction::Left)
        );
    }

    #[test]
    fn unknown_states_fall_back() {
        assert_eq!(
            CombatantState::parse("taunting"),
            CombatantState::Unrecognized
        );
        // Directional suffix that is not a real direction.
        assert_eq!(
            CombatantState::parse("interrupted heavy_sideways"),
            CombatantState::Unrecognized
        );
    }
}
