//! Board-agnostic core logic for the light & motion status firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Character display trait (the surface drivers implement)
//! - Decimal number formatting
//! - Raw-sample to light-percentage conversion
//! - The change-gated status panel update policy

#![no_std]
#![deny(unsafe_code)]

pub mod format;
pub mod light;
pub mod panel;
pub mod traits;

pub use panel::{Indications, Readings, StatusPanel};
pub use traits::display::{CharDisplay, DisplayError, DisplayExt, COLUMNS, ROWS};
