//! AT24-style serial EEPROM driver
//!
//! Two-byte-addressed I2C EEPROM (AT24C32 class). The part NACKs its bus
//! address for the duration of an internal write cycle, so ACK polling
//! doubles as the write-completion wait. The [`Eeprom`] surface is
//! infallible; any bus fault looks like a busy part and gets retried.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use marquee_hal::eeprom::Eeprom;

/// Seven-bit bus address of the part
const AT24_ADDR: u8 = 0x50;

/// Gap between ACK-poll attempts while the part is busy
const ACK_POLL_US: u32 = 100;

/// AT24 driver over any I2C bus
pub struct At24<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C, D> At24<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Wrap the bus the part sits on
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self { i2c, delay }
    }

    /// Poll until the part ACKs its address again
    ///
    /// The part answers nothing while an internal write cycle runs; the
    /// first ACK after that means it is ready for the next operation.
    fn wait_ready(&mut self) {
        while self.i2c.write(AT24_ADDR, &[]).is_err() {
            self.delay.delay_us(ACK_POLL_US);
        }
    }
}

impl<I2C, D> Eeprom for At24<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn write_byte(&mut self, address: u16, value: u8) {
        self.wait_ready();
        let frame = [(address >> 8) as u8, address as u8, value];
        while self.i2c.write(AT24_ADDR, &frame).is_err() {
            self.delay.delay_us(ACK_POLL_US);
        }
    }

    fn read_byte(&mut self, address: u16) -> u8 {
        self.wait_ready();
        let pointer = [(address >> 8) as u8, address as u8];
        let mut out = [0u8; 1];
        while self.i2c.write_read(AT24_ADDR, &pointer, &mut out).is_err() {
            self.delay.delay_us(ACK_POLL_US);
        }
        out[0]
    }
}
