//! Events that trigger workflow transitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events reported by editor actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Event {
    // Selection events
    /// Modulation, clock or block count was changed by the user
    SelectionEdited,

    // Block events
    /// Edit block chosen or its value changed
    BlockEdited,

    // File events
    /// A document was read and committed
    LoadCompleted,
    /// Every loaded flag has been consumed by its control
    LoadedFlagsConsumed,
    /// The configuration was written to storage
    SaveCompleted,
    /// End of the save action
    Settle,

    // Navigation
    /// User left the current screen
    Back,
}
