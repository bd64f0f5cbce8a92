//! Sensor drivers

pub mod adc10;
pub mod ldr;
pub mod pir;

pub use adc10::Adc10;
pub use ldr::LdrSensor;
pub use pir::PirSensor;
