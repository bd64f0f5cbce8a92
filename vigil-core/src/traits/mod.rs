//! Hardware-facing traits the core logic is written against

pub mod display;

pub use display::{CharDisplay, DisplayError, DisplayExt};
