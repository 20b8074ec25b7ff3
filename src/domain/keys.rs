// Physical keys the battle UI listens to and their static action bindings.

use crate::domain::action::{Action, Direction};

/// The bound physical keys. Anything outside this set is filtered out by
/// the terminal adapter and never reaches the input machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Q,
    W,
    Left,
    Up,
    Right,
    Down,
    Shift,
    Ctrl,
}

/// A physical key transition. Repeats are delivered as extra `Down` edges
/// and suppressed by the input machine's held set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Down,
    Up,
}

impl Key {
    /// Static binding table; total on the `Key` vocabulary and never
    /// changes at runtime.
    pub fn action(&self) -> Action {
        match self {
            Key::Space => Action::Block,
            Key::Q => Action::LightAttack,
            Key::W => Action::HeavyAttack,
            Key::Left => Action::Interrupt(Direction::Left),
            Key::Up => Action::Interrupt(Direction::Up),
            Key::Right => Action::Interrupt(Direction::Right),
            Key::Down => Action::Interrupt(Direction::Down),
            Key::Shift => Action::Dodge,
            Key::Ctrl => Action::Save,
        }
    }
}
