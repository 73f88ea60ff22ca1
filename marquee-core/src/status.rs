//! Link status tracking and indicator lamp
//!
//! The panel carries one status LED. It stays dark until the first byte
//! ever arrives, holds steady once receptions are clean, and blinks at a
//! fixed rate after a parity error. The lamp level is computed from the
//! status and the current time, so the main loop never sleeps just to
//! blink.

/// Health of the serial link, as seen by the receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    /// Nothing received since power-on
    #[default]
    NoData,
    /// Most recent reception was clean
    Ok,
    /// Most recent reception had a parity error
    Error,
}

/// Indicator lamp driven from the link status
#[derive(Debug, Clone, Copy)]
pub struct StatusLamp {
    /// Half-period of the error blink in milliseconds
    blink_ms: u32,
}

impl StatusLamp {
    /// Create a lamp with the given blink half-period
    pub fn new(blink_ms: u32) -> Self {
        Self { blink_ms }
    }

    /// Lamp level for the given status at the given time
    ///
    /// `NoData` is dark, `Ok` is steady on, `Error` alternates starting
    /// high, spending `blink_ms` in each phase.
    pub fn level(&self, status: LinkStatus, now_ms: u64) -> bool {
        match status {
            LinkStatus::NoData => false,
            LinkStatus::Ok => true,
            LinkStatus::Error => {
                // A zero period reads as steady on
                let half = self.blink_ms.max(1) as u64;
                (now_ms / half) % 2 == 0
            }
        }
    }
}
