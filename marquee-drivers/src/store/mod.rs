//! EEPROM and message storage drivers

pub mod at24;
pub mod payload;

pub use at24::At24;
pub use payload::{PayloadStore, STORED_MESSAGE};
