//! GPIO adapters for RP2040 pins
//!
//! Wraps embassy-rp push-pull outputs so board-agnostic code can drive
//! LEDs and display control lines through the shared `OutputPin` trait.

use embassy_rp::gpio::Output;
use marquee_hal::gpio::OutputPin;

/// Push-pull output adapter
///
/// Owns the pin for the lifetime of the firmware; peripherals on this
/// chip are taken once at boot and never handed back.
pub struct RpOutputPin {
    pin: Output<'static>,
}

impl RpOutputPin {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for RpOutputPin {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}
