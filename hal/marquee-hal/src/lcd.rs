//! LCD bus abstraction
//!
//! The panel is a 40x2 character display built from two HD44780-style
//! modules sharing one 8-bit data bus and the register-select and
//! read/write lines. Each module has its own enable line; a byte goes to
//! whichever module gets the enable pulse.
//!
//! The bus is write-only and has no error path, so the trait is
//! infallible. Timing (enable pulse width, post-write settle) belongs to
//! the implementation.

/// Register-select state of the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusMode {
    /// RS low: the byte on the bus is a controller command
    Command,
    /// RS high: the byte on the bus is character data
    Data,
}

/// Which module enable wire to pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnableLine {
    En1,
    En2,
}

/// 8-bit parallel bus shared by both display modules
///
/// A transfer is: drive the data lines, select command or data mode, then
/// strobe the enable line of the target module. Implementations hold the
/// read/write line in the write state at all times.
pub trait LcdBus {
    /// Drive the eight data lines
    fn set_data(&mut self, byte: u8);

    /// Select command or data mode (the RS line)
    fn select(&mut self, mode: BusMode);

    /// Pulse the given enable line high then low, with the settle time the
    /// module needs to latch the transfer
    fn strobe(&mut self, line: EnableLine);
}
