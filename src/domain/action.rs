// Player intents and the directions used by interrupt duels.

/// One of the four arrow directions an interrupt duel can resolve on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "left" => Some(Direction::Left),
            "up" => Some(Direction::Up),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

/// The fixed vocabulary of intents a player can transmit. This is what
/// crosses the wire; raw key codes never leave the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Sent only when a held Block is released; every other action expires
    // server-side after its duration.
    None,
    Block,
    LightAttack,
    HeavyAttack,
    Dodge,
    Save,
    Interrupt(Direction),
}

impl Action {
    /// Name used in the `message` field of an outbound action frame.
    pub fn wire_name(&self) -> String {
        match self {
            Action::None => "NONE".to_string(),
            Action::Block => "BLOCK".to_string(),
            Action::LightAttack => "LIGHT".to_string(),
            Action::HeavyAttack => "HEAVY".to_string(),
            Action::Dodge => "DODGE".to_string(),
            Action::Save => "SAVE".to_string(),
            Action::Interrupt(dir) => format!("INTERRUPT_{}", dir.as_str().to_uppercase()),
        }
    }
}
