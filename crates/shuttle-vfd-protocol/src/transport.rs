//! Transport seam between the encoders and a real USB path.

use std::time::Duration;

use crate::packet::Packet;

/// Time the display controller needs to absorb one control message; the
/// firmware drops back-to-back messages. [`VfdTransport::send`] must not
/// return before this has elapsed after the write.
pub const SETTLE_TIME: Duration = Duration::from_millis(24);

/// Failure delivering a single packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The host accepted fewer bytes than the packet holds.
    ShortWrite { sent: usize },
    /// Host-side I/O failure (USB stack, permissions, timeout).
    Io(String),
    /// The device is no longer attached.
    Disconnected,
}

impl core::fmt::Display for TransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransportError::ShortWrite { sent } => {
                write!(f, "short write: device accepted {sent} bytes")
            }
            TransportError::Io(message) => write!(f, "transport i/o error: {message}"),
            TransportError::Disconnected => write!(f, "device disconnected"),
        }
    }
}

impl std::error::Error for TransportError {}

/// One blocking round-trip to the panel.
///
/// `send` delivers exactly one 8-byte control message and honors the
/// [`SETTLE_TIME`] pacing contract before returning, so callers may issue
/// packets back to back. Hardware-backed implementations sleep; test
/// doubles may elapse no time at all.
pub trait VfdTransport: Send {
    fn send(&mut self, packet: &Packet) -> Result<(), TransportError>;
}
