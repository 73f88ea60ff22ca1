//! EEPROM abstraction
//!
//! Byte-addressable persistent storage with blocking semantics: a write
//! returns once the part has latched the byte and any previous write cycle
//! has drained, a read returns the byte once the part answers. There is no
//! error channel; implementations that sit on a fallible bus absorb
//! retries internally.

/// Byte-addressable EEPROM
pub trait Eeprom {
    /// Write one byte, blocking until the part has accepted it
    ///
    /// Implementations must wait out any still-running write cycle before
    /// latching the new address and data.
    fn write_byte(&mut self, address: u16, value: u8);

    /// Read one byte, blocking until the part answers
    fn read_byte(&mut self, address: u16) -> u8;
}
