//! UART link configuration
//!
//! Framing parameters for the button-to-panel serial link. The chip HAL
//! translates these into its vendor configuration type; the default values
//! are the link contract both images must use.

/// UART configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    /// The link contract: 9600 baud, nine data bits, even parity, one stop
    /// bit.
    ///
    /// On controllers whose UART tops out at eight data bits the ninth bit
    /// rides the wire as the parity bit, which produces the identical frame:
    /// start, eight data bits, even parity, stop.
    fn default() -> Self {
        Self {
            baudrate: 9600,
            data_bits: DataBits::Nine,
            parity: Parity::Even,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
