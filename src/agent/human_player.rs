//! Human player driven by an external UI.
//!
//! The UI turns a click into an [`Action`] and hands it over with
//! [`HumanPlayer::submit`]. The player only stores the latest submission;
//! whether it is legal is checked by whoever applies it.
//!
//! # Control Flow
//!
//! ```text
//! UI click → HumanPlayer::submit(action)
//!     ↓
//! driver sees is_interactive() && has_pending()
//!     ↓
//! driver calls decide(state) → pending action is taken
//! ```
//!
//! # Examples
//!
//! ```
//! use dots_and_boxes::agent::{HumanPlayer, Player};
//! use dots_and_boxes::game_repr::{Action, State};
//!
//! let mut player = HumanPlayer::new("Alice".to_string());
//! player.submit(Action::row(0, 0));
//! assert!(player.has_pending());
//! assert_eq!(player.decide(&State::new(3)), Action::row(0, 0));
//! assert!(!player.has_pending());
//! ```

use crate::agent::player::{assert_not_terminal, Player};
use crate::game_repr::{Action, State};

/// Human player whose moves arrive from outside.
pub struct HumanPlayer {
    name: String,

    /// Set by `submit()`, taken by `decide()`
    pending: Option<Action>,
}

impl HumanPlayer {
    pub fn new(name: String) -> Self {
        Self {
            name,
            pending: None,
        }
    }

    /// Queue the action the user picked, replacing any earlier one
    pub fn submit(&mut self, action: Action) {
        log::trace!("[{}] submitted {}", self.name, action);
        self.pending = Some(action);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop a queued action, e.g. after the UI rejected it
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }
}

impl Player for HumanPlayer {
    /// Take the submitted action.
    ///
    /// # Panics
    /// If nothing was submitted, or if `state` is terminal.
    fn decide(&mut self, state: &State) -> Action {
        assert_not_terminal(state, &self.name);
        match self.pending.take() {
            Some(action) => action,
            None => panic!("{} has no submitted move\n{}", self.name, state),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
