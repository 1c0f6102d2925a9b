//! Driver-level error types.

use shuttle_vfd_protocol::TransportError;

/// Errors surfaced by the display controller and device discovery.
#[derive(Debug, Clone, thiserror::Error)]
pub enum VfdError {
    /// Unrecognized mode or style token. State was left untouched.
    #[error("invalid {what}: {token:?}")]
    InvalidArgument {
        /// What the token was supposed to name ("mode", "text style").
        what: &'static str,
        /// The rejected token.
        token: String,
    },

    /// One or more packets of a flush failed. State already carries the new
    /// value; the protocol offers nothing to roll back to.
    #[error("transport failure: {failed} of {attempted} packet(s) failed: {last}")]
    Transport {
        /// Packets that failed.
        failed: usize,
        /// Packets in the flush sequence.
        attempted: usize,
        /// The most recent per-packet failure.
        #[source]
        last: TransportError,
    },

    /// No attached panel matched the Shuttle VID/PIDs.
    #[error("no Shuttle VFD device found")]
    NoDevice,

    /// The host HID stack rejected the open.
    #[error("failed to open device: {0}")]
    Open(String),
}
