//! Shuttle VFD USB control-message protocol.
//!
//! Drives the 20x1 character vacuum-fluorescent display on Shuttle XPC front
//! panels (a Princeton PT6314 controller behind a Cypress CY7C63723C USB
//! bridge). Every control message is one fixed 8-byte packet: a command
//! nibble, a payload-length nibble, and up to 7 payload bytes.
//!
//! This crate is intentionally I/O-free. It provides pure encoders and state
//! types that can be tested without hardware; transports implement
//! [`VfdTransport`] and live elsewhere.

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod encoder;
pub mod icons;
pub mod ids;
pub mod packet;
pub mod parser;
pub mod state;
pub mod transport;

// Flat re-exports so callers can use `shuttle_vfd_protocol::Foo`.
pub use encoder::{VfdDateTime, encode_clock, encode_icons, encode_text, reset};
pub use icons::{IconMask, MAX_VOLUME, format_icons, lookup};
pub use ids::{PRODUCT_VFD_REV_A, PRODUCT_VFD_REV_B, VENDOR_ID, is_shuttle_vfd};
pub use packet::{Command, PACKET_SIZE, PAYLOAD_SIZE, Packet, PacketError};
pub use parser::parse_icons;
pub use state::{DisplayMode, DisplayState, TextStyle, WIDTH};
pub use transport::{SETTLE_TIME, TransportError, VfdTransport};
