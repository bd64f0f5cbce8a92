//! Character display drivers

pub mod hd44780;
pub mod timing;

pub use hd44780::Hd44780;
