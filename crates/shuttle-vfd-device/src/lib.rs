//! Host-side driver for the Shuttle XPC front-panel VFD.
//!
//! [`VfdController`] owns the display state and flushes protocol packets
//! through a [`shuttle_vfd_protocol::VfdTransport`]. [`HidTransport`] is the
//! hidapi-backed implementation with the mandatory inter-packet settle
//! delay, and [`SharedVfd`] serializes concurrent callers around whole
//! mutate-then-flush sequences.

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod clock;
pub mod controller;
pub mod error;
pub mod hid;
pub mod shared;

pub use clock::{ClockSource, SystemClock};
pub use controller::{AttachOptions, VfdController};
pub use error::VfdError;
pub use hid::HidTransport;
pub use shared::SharedVfd;
