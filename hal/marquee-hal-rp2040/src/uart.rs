//! UART configuration translation for the serial link
//!
//! The shared `UartConfig` describes the link frame in chip-neutral
//! terms; this module maps it onto the RP2040 PL011 configuration.

use embassy_rp::uart::{
    Config, DataBits as RpDataBits, Parity as RpParity, StopBits as RpStopBits,
};
use marquee_hal::uart::{DataBits, Parity, StopBits, UartConfig};

/// Build the PL011 configuration for a link frame
///
/// The PL011 carries at most eight data bits. A nine-bit frame maps to
/// eight data bits with the ninth wire bit produced by the parity
/// engine, so the line format matches the link contract exactly.
pub fn link_config(cfg: &UartConfig) -> Config {
    let mut rp = Config::default();
    rp.baudrate = cfg.baudrate;
    rp.data_bits = match cfg.data_bits {
        DataBits::Seven => RpDataBits::DataBits7,
        DataBits::Eight | DataBits::Nine => RpDataBits::DataBits8,
    };
    rp.parity = match cfg.parity {
        Parity::None => RpParity::ParityNone,
        Parity::Even => RpParity::ParityEven,
        Parity::Odd => RpParity::ParityOdd,
    };
    rp.stop_bits = match cfg.stop_bits {
        StopBits::One => RpStopBits::STOP1,
        StopBits::Two => RpStopBits::STOP2,
    };
    rp
}
