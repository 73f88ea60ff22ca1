//! Transmitter keyer
//!
//! Translates one button sample into what the transmitter loop must do
//! this pass: which LED to light and whether to send the command. There
//! is no debounce and no edge detection; a held button keys the command
//! again on every pass, exactly as sampled.

use marquee_protocol::{COMMAND_LEN, KEYWORD};

/// What one transmitter loop pass does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxStep {
    /// Command bytes to send this pass, if any
    pub command: Option<&'static [u8; COMMAND_LEN]>,
    /// Sending LED level
    pub sending_led: bool,
    /// Idle LED level
    pub idle_led: bool,
}

/// Button-to-command keyer
#[derive(Debug, Clone, Copy)]
pub struct Keyer {
    command: &'static [u8; COMMAND_LEN],
}

impl Default for Keyer {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyer {
    /// Keyer for the panel keyword
    pub fn new() -> Self {
        Self { command: &KEYWORD }
    }

    /// Map one button sample to a loop step
    pub fn sample(&self, pressed: bool) -> TxStep {
        if pressed {
            TxStep {
                command: Some(self.command),
                sending_led: true,
                idle_led: false,
            }
        } else {
            TxStep {
                command: None,
                sending_led: false,
                idle_led: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_keys_the_command() {
        let keyer = Keyer::new();
        let step = keyer.sample(true);
        assert_eq!(step.command, Some(&KEYWORD));
        assert!(step.sending_led);
        assert!(!step.idle_led);
    }

    #[test]
    fn test_released_is_idle() {
        let keyer = Keyer::new();
        let step = keyer.sample(false);
        assert_eq!(step.command, None);
        assert!(!step.sending_led);
        assert!(step.idle_led);
    }

    #[test]
    fn test_leds_are_mutually_exclusive() {
        let keyer = Keyer::new();
        for pressed in [false, true] {
            let step = keyer.sample(pressed);
            assert_ne!(step.sending_led, step.idle_led);
        }
    }

    #[test]
    fn test_held_button_keys_every_sample() {
        // No edge detection: two pressed samples in a row both send
        let keyer = Keyer::new();
        assert!(keyer.sample(true).command.is_some());
        assert!(keyer.sample(true).command.is_some());
    }
}
