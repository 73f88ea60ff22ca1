//! GPIO pin abstractions
//!
//! Provides a trait for digital output pins that can be implemented by
//! chip-specific HALs. The LCD bus adapter is generic over it, which is
//! what lets the bus run against recording pins in host tests.

/// Digital output pin
///
/// Implementations handle the actual hardware register manipulation for
/// the specific chip. Setting a pin cannot fail.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}
