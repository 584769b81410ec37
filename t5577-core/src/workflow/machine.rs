//! Workflow state machine
//!
//! The editor's state is a function of the previous state and an event.
//! Events that do not apply to the current state leave it unchanged, so a
//! cancelled or failed action simply reports nothing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::events::Event;

/// Workflow states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// Nothing in progress
    #[default]
    Idle,
    /// User is changing modulation, clock or block count
    SelectionEdit,
    /// User is editing a user block
    BlockEdit,
    /// A document was loaded; some controls still show file values
    Loaded,
    /// The configuration was just written to storage
    Saved,
}

impl State {
    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Edits
            (Idle | SelectionEdit | BlockEdit | Loaded, SelectionEdited) => SelectionEdit,
            (Idle | SelectionEdit | BlockEdit | Loaded, BlockEdited) => BlockEdit,
            (SelectionEdit | BlockEdit, Back) => Idle,

            // Load
            (Idle | SelectionEdit | BlockEdit | Loaded | Saved, LoadCompleted) => Loaded,
            (Loaded, LoadedFlagsConsumed) => Idle,

            // Save
            (Idle | SelectionEdit | BlockEdit | Loaded, SaveCompleted) => Saved,
            (Saved, Settle) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(State::default(), State::Idle);
    }

    #[test]
    fn test_selection_edit_until_back() {
        let state = State::Idle.transition(Event::SelectionEdited);
        assert_eq!(state, State::SelectionEdit);

        // Further edits stay in the edit screen
        let state = state.transition(Event::SelectionEdited);
        assert_eq!(state, State::SelectionEdit);

        assert_eq!(state.transition(Event::Back), State::Idle);
    }

    #[test]
    fn test_block_edit_flow() {
        let state = State::SelectionEdit.transition(Event::BlockEdited);
        assert_eq!(state, State::BlockEdit);
        assert_eq!(state.transition(Event::Back), State::Idle);
    }

    #[test]
    fn test_load_flow() {
        let loaded = State::Idle.transition(Event::LoadCompleted);
        assert_eq!(loaded, State::Loaded);

        let idle = loaded.transition(Event::LoadedFlagsConsumed);
        assert_eq!(idle, State::Idle);
    }

    #[test]
    fn test_load_from_any_state() {
        let states = [
            State::Idle,
            State::SelectionEdit,
            State::BlockEdit,
            State::Loaded,
            State::Saved,
        ];

        for state in states {
            assert_eq!(state.transition(Event::LoadCompleted), State::Loaded);
        }
    }

    #[test]
    fn test_save_flow() {
        for state in [State::Idle, State::Loaded, State::BlockEdit] {
            let saved = state.transition(Event::SaveCompleted);
            assert_eq!(saved, State::Saved);
            assert_eq!(saved.transition(Event::Settle), State::Idle);
        }
    }

    #[test]
    fn test_edit_after_load_leaves_loaded() {
        let state = State::Loaded.transition(Event::SelectionEdited);
        assert_eq!(state, State::SelectionEdit);
    }

    #[test]
    fn test_unrelated_events_ignored() {
        assert_eq!(State::Idle.transition(Event::Back), State::Idle);
        assert_eq!(State::Idle.transition(Event::Settle), State::Idle);
        assert_eq!(
            State::Idle.transition(Event::LoadedFlagsConsumed),
            State::Idle
        );
        assert_eq!(
            State::Saved.transition(Event::SelectionEdited),
            State::Saved
        );
        assert_eq!(State::Loaded.transition(Event::Back), State::Loaded);
    }
}
