//! Board-agnostic control logic for the marquee firmware pair
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Domain traits (character panel, message store)
//! - Receiver state object (command assembly, display cycle)
//! - Link status tracking and indicator lamp
//! - Transmitter keyer (button sample to LED/command step)
//! - Boot banner script
//! - Timing configuration
//!
//! All waits go through `embedded_hal::delay::DelayNs`, so every routine
//! here runs unchanged against instant mock delays in host tests.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod banner;
pub mod config;
pub mod keyer;
pub mod receiver;
pub mod status;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
