//! Bit-banged 8-bit parallel LCD bus
//!
//! Twelve output pins: eight data lines, register select, read/write and
//! the two module enable lines. The read/write line is held in the write
//! state permanently; the panel never talks back.

use embedded_hal::delay::DelayNs;

use marquee_core::config::LcdTimings;
use marquee_hal::gpio::OutputPin;
use marquee_hal::lcd::{BusMode, EnableLine, LcdBus};

/// Parallel bus over discrete GPIO pins
pub struct ParallelBus<P, D> {
    data: [P; 8],
    rs: P,
    rw: P,
    en1: P,
    en2: P,
    delay: D,
    timings: LcdTimings,
}

impl<P, D> ParallelBus<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Wrap the twelve bus pins
    ///
    /// `data` is ordered D0 to D7. All lines are driven low before the
    /// bus is handed back.
    pub fn new(data: [P; 8], rs: P, rw: P, en1: P, en2: P, delay: D, timings: LcdTimings) -> Self {
        let mut bus = Self {
            data,
            rs,
            rw,
            en1,
            en2,
            delay,
            timings,
        };
        bus.set_data(0);
        bus.rs.set_low();
        bus.rw.set_low();
        bus.en1.set_low();
        bus.en2.set_low();
        bus
    }
}

impl<P, D> LcdBus for ParallelBus<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn set_data(&mut self, byte: u8) {
        for (i, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(byte & (1 << i) != 0);
        }
    }

    fn select(&mut self, mode: BusMode) {
        match mode {
            BusMode::Command => self.rs.set_low(),
            BusMode::Data => self.rs.set_high(),
        }
        // Write-only bus
        self.rw.set_low();
    }

    fn strobe(&mut self, line: EnableLine) {
        let en = match line {
            EnableLine::En1 => &mut self.en1,
            EnableLine::En2 => &mut self.en2,
        };
        en.set_high();
        self.delay.delay_ms(self.timings.settle_ms);
        en.set_low();
        self.delay.delay_ms(self.timings.settle_ms);
    }
}
