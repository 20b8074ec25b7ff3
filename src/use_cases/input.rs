// Edge-triggered input machine: one transmission per physical key edge.

use std::collections::HashSet;

use crate::domain::{Action, Key};

/// Maps key edges to action transmissions. Holding a key produces exactly
/// one transmission no matter how many repeat down-edges the OS delivers;
/// releasing a key transmits only for `Block`, whose cessation the server
/// cannot infer.
#[derive(Debug, Default)]
pub struct InputStateMachine {
    // Invariant: contains an action iff its bound key is down and no
    // release for it has been processed yet.
    held: HashSet<Action>,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a down-edge. Returns the action to transmit, or `None`
    /// when the action is already held (OS key repeat).
    pub fn press(&mut self, key: Key) -> Option<Action> {
        let action = key.action();
        if !self.held.insert(action) {
            return None;
        }
        Some(action)
    }

    /// Processes an up-edge. Clears the held entry; returns a
    /// `Action::None` transmission only when a held `Block` was released.
    /// Releases of actions that were never pressed transmit nothing.
    pub fn release(&mut self, key: Key) -> Option<Action> {
        let action = key.action();
        if !self.held.remove(&action) {
            return None;
        }
        (action == Action::Block).then_some(Action::None)
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Drops all held state. Called on battle entry and teardown so a key
    /// held across phase boundaries cannot leak a stale suppression.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
