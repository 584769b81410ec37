//! Editor workflow
//!
//! The editor owns the session's `TagConfiguration` and sequences the user
//! actions against it. Every action reports to an explicit, finite state
//! machine.

pub mod editor;
pub mod events;
pub mod machine;

pub use editor::{Editor, EditorError, LoadOutcome, SaveOutcome};
pub use events::Event;
pub use machine::State;
