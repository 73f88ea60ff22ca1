//! Domain traits
//!
//! These traits define the interface between the control logic and the
//! hardware drivers. They speak in semantic operations (clear a module,
//! move the cursor, load the payload); bus mechanics live below them in
//! the driver crate.

pub mod panel;
pub mod store;

pub use panel::{Module, Panel, Row};
pub use store::{MessageStore, PAYLOAD_LEN};
