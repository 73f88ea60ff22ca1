//! Marquee Hardware Abstraction Layer
//!
//! This crate defines the hardware trait seams the board-agnostic logic
//! talks to. Chip-specific crates (currently RP2040) implement them, and
//! the driver crate builds the LCD and EEPROM drivers on top of them, so
//! the whole control path can run against mock hardware on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Firmware images (button-fw, panel-fw)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  marquee-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ marquee-hal-rp2040│
//!           └───────────────────┘
//! ```
//!
//! # Surfaces
//!
//! - [`gpio::OutputPin`] - Digital output (LCD bus lines)
//! - [`lcd::LcdBus`] - 8-bit parallel LCD bus with dual enable lines
//! - [`eeprom::Eeprom`] - Byte-addressable persistent storage
//! - [`uart::UartConfig`] - Serial link framing parameters
//!
//! The LCD and EEPROM surfaces are deliberately infallible: the hardware
//! they describe has no error reporting path, and the drivers block until
//! the part has accepted the operation.

#![no_std]
#![deny(unsafe_code)]

pub mod eeprom;
pub mod gpio;
pub mod lcd;
pub mod uart;

// Re-export key items at crate root for convenience
pub use eeprom::Eeprom;
pub use gpio::OutputPin;
pub use lcd::{BusMode, EnableLine, LcdBus};
pub use uart::{DataBits, Parity, StopBits, UartConfig};
