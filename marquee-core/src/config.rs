//! Timing configuration
//!
//! Every delay in the system lives here as a typed value with the
//! production default. Firmware feeds these to the drivers and loops
//! as-is; host tests shrink them or use instant mock delays.

/// Transmitter loop pacing
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxTimings {
    /// Gap after each command byte, which also covers the frame time on
    /// the wire (one 9600 baud frame is about 1.2 ms)
    pub inter_byte_ms: u32,
    /// Gap after a full command burst while the button stays pressed
    pub post_send_ms: u32,
    /// Button poll interval while idle
    pub idle_poll_ms: u32,
}

impl Default for TxTimings {
    fn default() -> Self {
        Self {
            inter_byte_ms: 5,
            post_send_ms: 20,
            idle_poll_ms: 20,
        }
    }
}

/// Receiver loop pacing
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelTimings {
    /// How long a matched message stays on the panel before clearing
    pub hold_ms: u32,
    /// Half-period of the parity-error lamp blink
    pub blink_ms: u32,
    /// Longest one loop pass waits for a byte before the lamp and the
    /// marquee shift run again
    pub poll_ms: u32,
}

impl Default for PanelTimings {
    fn default() -> Self {
        Self {
            hold_ms: 1000,
            blink_ms: 200,
            poll_ms: 20,
        }
    }
}

/// LCD driver pacing
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdTimings {
    /// Wait after dropping every bus line at power-on
    pub power_on_ms: u32,
    /// Settle after each init command and enable pulse
    pub settle_ms: u32,
    /// Pacing per character for banner text
    pub char_ms: u32,
    /// Pacing per character for stored-message bytes
    pub payload_char_us: u32,
}

impl Default for LcdTimings {
    fn default() -> Self {
        Self {
            power_on_ms: 10,
            settle_ms: 1,
            char_ms: 1,
            payload_char_us: 100,
        }
    }
}

/// EEPROM store pacing
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoreTimings {
    /// Gap between consecutive bytes of a bulk save or load
    pub inter_byte_us: u32,
}

impl Default for StoreTimings {
    fn default() -> Self {
        Self { inter_byte_us: 10 }
    }
}
