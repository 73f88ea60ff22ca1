//! Message store trait
//!
//! The panel keeps one fixed-size message in persistent storage at a
//! fixed base address. The store blocks until the part has accepted each
//! operation; the part has no error reporting path, so the surface is
//! infallible.

/// Stored message length in bytes
pub const PAYLOAD_LEN: usize = 32;

/// Fixed-size persistent message storage
pub trait MessageStore {
    /// Write the message, blocking until every byte is committed
    fn save(&mut self, payload: &[u8; PAYLOAD_LEN]);

    /// Read the message back
    fn load(&mut self, out: &mut [u8; PAYLOAD_LEN]);
}
