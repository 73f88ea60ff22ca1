//! Character panel trait
//!
//! The panel is a 40x2 character display made of two modules side by
//! side. Module one carries the live content (prompt, stored message,
//! marquee crawl); module two carries the static half of the banner.
//!
//! The hardware is write-only with no status or error path, so every
//! method is infallible. Failures on the wire are simply not observable.

/// One of the two display modules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Module {
    One,
    Two,
}

/// Display row within a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Row {
    First,
    Second,
}

/// Semantic operations on the character panel
///
/// Implementations pace each operation with the settle time the module
/// needs; callers never wait on the panel themselves.
pub trait Panel {
    /// Blank the module and return its cursor home
    fn clear(&mut self, module: Module);

    /// Turn the display on with the cursor visible and blinking
    fn blink_cursor(&mut self, module: Module);

    /// Move the cursor to a row and column
    fn cursor(&mut self, module: Module, row: Row, col: u8);

    /// Write text at the cursor, advancing it
    fn write_str(&mut self, module: Module, text: &str);

    /// Write one raw character byte at the cursor, advancing it
    fn write_byte(&mut self, module: Module, byte: u8);

    /// Shift the whole display window one column to the right
    fn shift_right(&mut self, module: Module);
}
