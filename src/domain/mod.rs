// Domain layer: action vocabulary, key bindings and combatant state.

pub mod action;
pub mod combatant;
pub mod keys;

pub use action::{Action, Direction};
pub use combatant::{BattleSnapshot, CombatantSnapshot, CombatantState};
pub use keys::{Key, KeyEdge};
