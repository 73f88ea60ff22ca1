//! Test doubles for the domain traits
//!
//! Host-side mocks that record every call, so tests can assert on the
//! exact operation sequence a routine produced. Compiled only for tests.

use embedded_hal::delay::DelayNs;
use heapless::{String, Vec};

use crate::traits::{MessageStore, Module, Panel, Row, PAYLOAD_LEN};

/// One recorded panel operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCall {
    Clear(Module),
    BlinkCursor(Module),
    Cursor(Module, Row, u8),
    Text(Module, String<40>),
    Byte(Module, u8),
    Shift(Module),
}

/// Panel that records calls instead of driving hardware
pub struct MockPanel {
    pub calls: Vec<PanelCall, 256>,
}

impl MockPanel {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    fn record(&mut self, call: PanelCall) {
        self.calls.push(call).unwrap();
    }

    /// Number of raw byte writes recorded
    pub fn byte_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, PanelCall::Byte(_, _)))
            .count()
    }

    /// Number of clears recorded for a module
    pub fn clear_count(&self, module: Module) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == PanelCall::Clear(module))
            .count()
    }
}

impl Panel for MockPanel {
    fn clear(&mut self, module: Module) {
        self.record(PanelCall::Clear(module));
    }

    fn blink_cursor(&mut self, module: Module) {
        self.record(PanelCall::BlinkCursor(module));
    }

    fn cursor(&mut self, module: Module, row: Row, col: u8) {
        self.record(PanelCall::Cursor(module, row, col));
    }

    fn write_str(&mut self, module: Module, text: &str) {
        let mut copy = String::new();
        copy.push_str(text).unwrap();
        self.record(PanelCall::Text(module, copy));
    }

    fn write_byte(&mut self, module: Module, byte: u8) {
        self.record(PanelCall::Byte(module, byte));
    }

    fn shift_right(&mut self, module: Module) {
        self.record(PanelCall::Shift(module));
    }
}

/// Message store over a plain array
pub struct MockStore {
    pub payload: [u8; PAYLOAD_LEN],
    pub saves: usize,
    pub loads: usize,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            payload: [0; PAYLOAD_LEN],
            saves: 0,
            loads: 0,
        }
    }

    pub fn with_payload(payload: [u8; PAYLOAD_LEN]) -> Self {
        Self {
            payload,
            saves: 0,
            loads: 0,
        }
    }
}

impl MessageStore for MockStore {
    fn save(&mut self, payload: &[u8; PAYLOAD_LEN]) {
        self.payload = *payload;
        self.saves += 1;
    }

    fn load(&mut self, out: &mut [u8; PAYLOAD_LEN]) {
        *out = self.payload;
        self.loads += 1;
    }
}

/// Delay that only counts the time it was asked to burn
pub struct MockDelay {
    pub total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { total_ns: 0 }
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
