//! RP2040-specific HAL for the marquee firmware pair
//!
//! This crate provides RP2040-specific implementations of the shared
//! `marquee-hal` traits:
//!
//! - GPIO output adapter over embassy-rp push-pull outputs
//! - UART configuration translation for the serial link

#![no_std]

pub mod gpio;
pub mod uart;

// Re-export the adapters for convenience
pub use gpio::RpOutputPin;
pub use uart::link_config;
