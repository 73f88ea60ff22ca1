//! Button-to-Panel Command Protocol
//!
//! This crate defines the UART command vocabulary between the button board
//! (transmitter) and the panel board (receiver). The protocol is as small
//! as it gets: a command is a fixed-length run of raw bytes, closed by a
//! terminator byte or by the receive buffer filling up.
//!
//! # Wire format
//!
//! ```text
//! ┌─────┬─────┬─────┬─────┬─────┬────────────┐
//! │ 'P' │ 'R' │ 'I' │ 'N' │ 'T' │ terminator │
//! └─────┴─────┴─────┴─────┴─────┴────────────┘
//! ```
//!
//! Framing below the byte level (9600 baud, nine data bits, even parity)
//! is the link layer's business; this crate only sees clean bytes.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;

pub use command::{CommandAssembler, Outcome, COMMAND_LEN, KEYWORD, TERMINATOR};
