//! Receiver state object
//!
//! Owns everything the panel's receive path mutates: the command
//! assembler, the link status and the lamp. The firmware loop feeds it
//! one [`RxEvent`] per reception and queries the lamp level each pass;
//! nothing else touches the status.
//!
//! A matched command runs one display cycle right here in the handler:
//! clear module one, paint the stored message, hold, clear. The panel,
//! store and delay are injected, so the whole cycle runs against mocks
//! on the host.

use embedded_hal::delay::DelayNs;
use marquee_protocol::{CommandAssembler, Outcome};

use crate::config::PanelTimings;
use crate::status::{LinkStatus, StatusLamp};
use crate::traits::{MessageStore, Module, Panel, Row, PAYLOAD_LEN};

/// The cursor drops to row two once the payload byte at this index has
/// been written, which puts fifteen characters on row one and the rest
/// on row two.
const ROW_TWO_AFTER: usize = 14;

/// One reception, as reported by the link layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxEvent {
    /// A clean byte
    Byte(u8),
    /// The frame failed its parity check; the byte is unusable
    ParityError,
}

/// Receive-path state for the panel board
#[derive(Debug, Clone)]
pub struct Receiver {
    assembler: CommandAssembler,
    status: LinkStatus,
    lamp: StatusLamp,
    timings: PanelTimings,
}

impl Receiver {
    /// Create a receiver with the given loop timings
    pub fn new(timings: PanelTimings) -> Self {
        Self {
            assembler: CommandAssembler::new(),
            status: LinkStatus::NoData,
            lamp: StatusLamp::new(timings.blink_ms),
            timings,
        }
    }

    /// Current link status
    pub fn status(&self) -> LinkStatus {
        self.status
    }

    /// Status lamp level at the given time
    pub fn lamp_level(&self, now_ms: u64) -> bool {
        self.lamp.level(self.status, now_ms)
    }

    /// Handle one reception
    ///
    /// A parity error marks the link bad and drops the command in
    /// progress. A clean byte marks the link good and feeds the
    /// assembler; a completed keyword match runs one display cycle
    /// before returning.
    pub fn on_event<P, S, D>(&mut self, event: RxEvent, panel: &mut P, store: &mut S, delay: &mut D)
    where
        P: Panel,
        S: MessageStore,
        D: DelayNs,
    {
        match event {
            RxEvent::ParityError => {
                self.status = LinkStatus::Error;
                self.assembler.reset();
            }
            RxEvent::Byte(byte) => {
                self.status = LinkStatus::Ok;
                if self.assembler.feed(byte) == Some(Outcome::Match) {
                    self.show_stored_message(panel, store, delay);
                }
            }
        }
    }

    /// One display cycle: clear, paint, hold, clear
    fn show_stored_message<P, S, D>(&mut self, panel: &mut P, store: &mut S, delay: &mut D)
    where
        P: Panel,
        S: MessageStore,
        D: DelayNs,
    {
        let mut payload = [0u8; PAYLOAD_LEN];
        store.load(&mut payload);

        panel.clear(Module::One);
        for (i, &byte) in payload.iter().enumerate() {
            panel.write_byte(Module::One, byte);
            if i == ROW_TWO_AFTER {
                panel.cursor(Module::One, Row::Second, 0);
            }
        }

        delay.delay_ms(self.timings.hold_ms);
        panel.clear(Module::One);
    }
}
