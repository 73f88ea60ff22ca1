//! Hardware driver implementations for the marquee firmware pair
//!
//! Drivers sit between the domain traits in `marquee-core` and the bus
//! traits in `marquee-hal`:
//!
//! - [`lcd`]: bit-banged 8-bit parallel bus and the dual-module HD44780
//!   panel driver
//! - [`store`]: AT24-style I2C EEPROM and the fixed-message store on top
//!   of it
//!
//! Everything here is generic over pins, buses and delays, so the full
//! driver stack runs under host tests against recording doubles.

#![no_std]
#![deny(unsafe_code)]

pub mod lcd;
pub mod store;

pub use lcd::{Hd44780, ParallelBus};
pub use store::{At24, PayloadStore, STORED_MESSAGE};
