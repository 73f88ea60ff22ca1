//! Fixed-message store
//!
//! The panel keeps exactly one 32-byte message at the bottom of the
//! EEPROM. Saves and loads walk the bytes in address order with a short
//! gap between parts, pacing the bus the same way on every pass.

use embedded_hal::delay::DelayNs;

use marquee_core::config::StoreTimings;
use marquee_core::traits::{MessageStore, PAYLOAD_LEN};
use marquee_hal::eeprom::Eeprom;

/// EEPROM address the message starts at
const BASE_ADDRESS: u16 = 0;

/// Message seeded into the store at every power-up
pub const STORED_MESSAGE: &[u8; PAYLOAD_LEN] = b"Marquee panel  - stored message ";

/// Fixed-size message store over any [`Eeprom`]
pub struct PayloadStore<E, D> {
    eeprom: E,
    delay: D,
    timings: StoreTimings,
}

impl<E, D> PayloadStore<E, D>
where
    E: Eeprom,
    D: DelayNs,
{
    /// Create a store with production pacing
    pub fn new(eeprom: E, delay: D) -> Self {
        Self::with_timings(eeprom, delay, StoreTimings::default())
    }

    /// Create a store with explicit pacing
    pub fn with_timings(eeprom: E, delay: D, timings: StoreTimings) -> Self {
        Self {
            eeprom,
            delay,
            timings,
        }
    }
}

impl<E, D> MessageStore for PayloadStore<E, D>
where
    E: Eeprom,
    D: DelayNs,
{
    fn save(&mut self, payload: &[u8; PAYLOAD_LEN]) {
        for (i, &byte) in payload.iter().enumerate() {
            self.eeprom.write_byte(BASE_ADDRESS + i as u16, byte);
            self.delay.delay_us(self.timings.inter_byte_us);
        }
    }

    fn load(&mut self, out: &mut [u8; PAYLOAD_LEN]) {
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.eeprom.read_byte(BASE_ADDRESS + i as u16);
            self.delay.delay_us(self.timings.inter_byte_us);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// EEPROM double over a plain array, recording access order
    struct MockEeprom {
        mem: [u8; 64],
        writes: Vec<u16, 64>,
        reads: Vec<u16, 64>,
    }

    impl MockEeprom {
        fn new() -> Self {
            Self {
                mem: [0; 64],
                writes: Vec::new(),
                reads: Vec::new(),
            }
        }
    }

    impl Eeprom for MockEeprom {
        fn write_byte(&mut self, address: u16, value: u8) {
            self.mem[address as usize] = value;
            self.writes.push(address).unwrap();
        }

        fn read_byte(&mut self, address: u16) -> u8 {
            self.reads.push(address).unwrap();
            self.mem[address as usize]
        }
    }

    struct InstantDelay;

    impl DelayNs for InstantDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn test_saved_message_loads_back_identically() {
        let mut store = PayloadStore::new(MockEeprom::new(), InstantDelay);
        store.save(STORED_MESSAGE);

        let mut out = [0u8; PAYLOAD_LEN];
        store.load(&mut out);
        assert_eq!(&out, STORED_MESSAGE);
    }

    #[test]
    fn test_save_walks_addresses_in_order() {
        let mut store = PayloadStore::new(MockEeprom::new(), InstantDelay);
        store.save(&[0xAB; PAYLOAD_LEN]);

        let expected: Vec<u16, 64> = (0..PAYLOAD_LEN as u16).collect();
        assert_eq!(store.eeprom.writes, expected);
    }

    #[test]
    fn test_load_reads_the_whole_window() {
        let mut store = PayloadStore::new(MockEeprom::new(), InstantDelay);
        let mut out = [0u8; PAYLOAD_LEN];
        store.load(&mut out);

        assert_eq!(store.eeprom.reads.len(), PAYLOAD_LEN);
        assert_eq!(store.eeprom.reads.first(), Some(&BASE_ADDRESS));
        assert_eq!(
            store.eeprom.reads.last(),
            Some(&(BASE_ADDRESS + PAYLOAD_LEN as u16 - 1))
        );
    }
}
