//! Dual-module HD44780 panel driver
//!
//! Drives the 40x2 panel built from two HD44780-style modules on one
//! shared bus. Module selection happens per transfer through the enable
//! line, so the driver addresses each module independently while reusing
//! the same data and control wires.

use embedded_hal::delay::DelayNs;

use marquee_core::config::LcdTimings;
use marquee_core::traits::{Module, Panel, Row};
use marquee_hal::lcd::{BusMode, EnableLine, LcdBus};

/// HD44780 commands
mod cmd {
    /// 8-bit bus, two lines, 5x7 dots
    pub const FUNCTION_8BIT_2LINE: u8 = 0x38;
    /// Display on, cursor on, cursor blinking
    pub const DISPLAY_ON_CURSOR_BLINK: u8 = 0x0F;
    /// Blank the display and home the cursor
    pub const CLEAR: u8 = 0x01;
    /// Entry mode: advance the cursor after each write
    pub const ENTRY_INCREMENT: u8 = 0x06;
    /// DDRAM base of the first row; OR in the column
    pub const ROW_ONE: u8 = 0x80;
    /// DDRAM base of the second row; OR in the column
    pub const ROW_TWO: u8 = 0xC0;
    /// Shift the display window one column right
    pub const SHIFT_RIGHT: u8 = 0x1C;
}

/// Panel driver over any [`LcdBus`]
pub struct Hd44780<B, D> {
    bus: B,
    delay: D,
    timings: LcdTimings,
}

impl<B, D> Hd44780<B, D>
where
    B: LcdBus,
    D: DelayNs,
{
    /// Create a driver with production timings
    pub fn new(bus: B, delay: D) -> Self {
        Self::with_timings(bus, delay, LcdTimings::default())
    }

    /// Create a driver with explicit timings
    pub fn with_timings(bus: B, delay: D, timings: LcdTimings) -> Self {
        Self { bus, delay, timings }
    }

    /// Bring one module up
    ///
    /// Quiesces the bus, waits out the module's power-on time, then runs
    /// the standard init sequence with a settle after each command.
    pub fn init(&mut self, module: Module) {
        self.bus.set_data(0);
        self.bus.select(BusMode::Command);
        self.delay.delay_ms(self.timings.power_on_ms);

        let init_cmds: &[u8] = &[
            cmd::FUNCTION_8BIT_2LINE,
            cmd::DISPLAY_ON_CURSOR_BLINK,
            cmd::CLEAR,
            cmd::ENTRY_INCREMENT,
        ];
        for &code in init_cmds {
            self.command(module, code);
            self.delay.delay_ms(self.timings.settle_ms);
        }
    }

    fn command(&mut self, module: Module, code: u8) {
        self.bus.set_data(code);
        self.bus.select(BusMode::Command);
        self.bus.strobe(enable_for(module));
    }

    fn data(&mut self, module: Module, byte: u8) {
        self.bus.set_data(byte);
        self.bus.select(BusMode::Data);
        self.bus.strobe(enable_for(module));
    }
}

fn enable_for(module: Module) -> EnableLine {
    match module {
        Module::One => EnableLine::En1,
        Module::Two => EnableLine::En2,
    }
}

impl<B, D> Panel for Hd44780<B, D>
where
    B: LcdBus,
    D: DelayNs,
{
    fn clear(&mut self, module: Module) {
        self.command(module, cmd::CLEAR);
        self.delay.delay_ms(self.timings.settle_ms);
    }

    fn blink_cursor(&mut self, module: Module) {
        self.command(module, cmd::DISPLAY_ON_CURSOR_BLINK);
        self.delay.delay_ms(self.timings.settle_ms);
    }

    fn cursor(&mut self, module: Module, row: Row, col: u8) {
        let base = match row {
            Row::First => cmd::ROW_ONE,
            Row::Second => cmd::ROW_TWO,
        };
        self.command(module, base | col);
    }

    fn write_str(&mut self, module: Module, text: &str) {
        for &byte in text.as_bytes() {
            self.data(module, byte);
            self.delay.delay_ms(self.timings.char_ms);
        }
    }

    fn write_byte(&mut self, module: Module, byte: u8) {
        self.data(module, byte);
        self.delay.delay_us(self.timings.payload_char_us);
    }

    fn shift_right(&mut self, module: Module) {
        self.command(module, cmd::SHIFT_RIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Bus double that records every strobed transfer
    struct MockBus {
        mode: BusMode,
        data: u8,
        writes: Vec<(BusMode, u8, EnableLine), 64>,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                mode: BusMode::Command,
                data: 0,
                writes: Vec::new(),
            }
        }
    }

    impl LcdBus for MockBus {
        fn set_data(&mut self, byte: u8) {
            self.data = byte;
        }

        fn select(&mut self, mode: BusMode) {
            self.mode = mode;
        }

        fn strobe(&mut self, line: EnableLine) {
            self.writes.push((self.mode, self.data, line)).unwrap();
        }
    }

    struct InstantDelay;

    impl DelayNs for InstantDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn driver() -> Hd44780<MockBus, InstantDelay> {
        Hd44780::new(MockBus::new(), InstantDelay)
    }

    #[test]
    fn test_init_sends_the_standard_sequence() {
        let mut lcd = driver();
        lcd.init(Module::One);
        let codes: Vec<u8, 8> = lcd.bus.writes.iter().map(|w| w.1).collect();
        assert_eq!(&codes[..], &[0x38, 0x0F, 0x01, 0x06]);
        assert!(lcd
            .bus
            .writes
            .iter()
            .all(|w| w.0 == BusMode::Command && w.2 == EnableLine::En1));
    }

    #[test]
    fn test_each_module_gets_its_own_enable_line() {
        let mut lcd = driver();
        lcd.clear(Module::One);
        lcd.clear(Module::Two);
        assert_eq!(lcd.bus.writes[0], (BusMode::Command, 0x01, EnableLine::En1));
        assert_eq!(lcd.bus.writes[1], (BusMode::Command, 0x01, EnableLine::En2));
    }

    #[test]
    fn test_cursor_folds_column_into_the_row_base() {
        let mut lcd = driver();
        lcd.cursor(Module::Two, Row::First, 6);
        lcd.cursor(Module::One, Row::Second, 0);
        assert_eq!(lcd.bus.writes[0].1, 0x86);
        assert_eq!(lcd.bus.writes[1].1, 0xC0);
    }

    #[test]
    fn test_write_str_sends_data_transfers() {
        let mut lcd = driver();
        lcd.write_str(Module::One, "Hi");
        assert_eq!(lcd.bus.writes[0], (BusMode::Data, b'H', EnableLine::En1));
        assert_eq!(lcd.bus.writes[1], (BusMode::Data, b'i', EnableLine::En1));
    }

    #[test]
    fn test_shift_right_is_a_single_command() {
        let mut lcd = driver();
        lcd.shift_right(Module::One);
        assert_eq!(lcd.bus.writes[0], (BusMode::Command, 0x1C, EnableLine::En1));
    }

    #[test]
    fn test_write_byte_passes_raw_bytes_through() {
        let mut lcd = driver();
        lcd.write_byte(Module::One, 0x00);
        lcd.write_byte(Module::One, 0xFF);
        assert_eq!(lcd.bus.writes[0].1, 0x00);
        assert_eq!(lcd.bus.writes[1].1, 0xFF);
        assert!(lcd.bus.writes.iter().all(|w| w.0 == BusMode::Data));
    }

    #[test]
    fn test_driver_crawls_through_the_panel_trait() {
        // The crawl lives on the trait, not the inherent impl; callers
        // that hold the driver generically must still reach it
        fn crawl(panel: &mut impl Panel) {
            panel.shift_right(Module::One);
        }
        let mut lcd = driver();
        crawl(&mut lcd);
        assert_eq!(lcd.bus.writes[0], (BusMode::Command, 0x1C, EnableLine::En1));
    }
}
