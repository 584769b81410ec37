//! Modulation and RF clock profile catalogs
//!
//! Catalogs are immutable, ordered tables fixed at build time. The order
//! of a catalog is both the selection index and the decode scan order.

pub mod t5577;
pub mod types;

pub use t5577::{MODULATIONS, RF_CLOCKS};
pub use types::*;
