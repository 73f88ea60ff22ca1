//! Command assembly and keyword matching.
//!
//! The receiver collects bytes into a fixed 5-byte buffer. A command ends
//! when the terminator byte `'0'` arrives or when the buffer is already
//! full, at which point the whole buffer is compared against the keyword.
//! The byte that ends the command is never stored, so a full-buffer
//! keyword is only recognized once a sixth byte arrives.

/// The one command the panel understands
pub const KEYWORD: [u8; COMMAND_LEN] = *b"PRINT";

/// Fixed command length in bytes
pub const COMMAND_LEN: usize = 5;

/// Byte that closes a command early
pub const TERMINATOR: u8 = b'0';

/// Verdict on a completed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Buffer equals the keyword
    Match,
    /// Buffer differs from the keyword
    Mismatch,
}

/// State machine assembling incoming bytes into commands
///
/// The buffer is compared in full on every completed command and is not
/// cleared between commands, only the index is. A command shorter than
/// [`COMMAND_LEN`] is therefore judged against whatever earlier traffic
/// left in the tail of the buffer.
#[derive(Debug, Clone)]
pub struct CommandAssembler {
    buf: [u8; COMMAND_LEN],
    len: usize,
}

impl Default for CommandAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandAssembler {
    /// Create a new assembler with an empty buffer
    pub fn new() -> Self {
        Self {
            buf: [0; COMMAND_LEN],
            len: 0,
        }
    }

    /// Feed a single received byte
    ///
    /// Returns `None` while a command is still assembling, or
    /// `Some(outcome)` when this byte completed one. The completing byte
    /// itself is discarded. After `Some(_)` the index is back at zero.
    pub fn feed(&mut self, byte: u8) -> Option<Outcome> {
        if byte != TERMINATOR && self.len < COMMAND_LEN {
            self.buf[self.len] = byte;
            self.len += 1;
            return None;
        }

        self.len = 0;
        if self.buf == KEYWORD {
            Some(Outcome::Match)
        } else {
            Some(Outcome::Mismatch)
        }
    }

    /// Drop the command in progress (index to zero, buffer untouched)
    ///
    /// Used when the link reports a corrupt reception mid-command.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Number of bytes assembled so far
    pub fn pending(&self) -> usize {
        self.len
    }
}
