//! hidapi-backed transport.
//!
//! The panel receives every packet as a HID output report (a SET_REPORT
//! control transfer with report ID 0), so plain `HidDevice::write` reaches
//! it on every host platform. The settle sleep after each write is the
//! pacing contract from [`shuttle_vfd_protocol::SETTLE_TIME`].

use std::thread;

use hidapi::{HidApi, HidDevice};
use shuttle_vfd_protocol::{
    PACKET_SIZE, Packet, SETTLE_TIME, TransportError, VfdTransport, is_shuttle_vfd,
};
use tracing::debug;

use crate::error::VfdError;

/// Transport for one open panel.
pub struct HidTransport {
    device: HidDevice,
}

impl HidTransport {
    /// Open the first attached Shuttle VFD.
    pub fn open_first(api: &HidApi) -> Result<HidTransport, VfdError> {
        for info in api.device_list() {
            if is_shuttle_vfd(info.vendor_id(), info.product_id()) {
                debug!(
                    "opening Shuttle VFD {:04x}:{:04x}",
                    info.vendor_id(),
                    info.product_id()
                );
                let device = info
                    .open_device(api)
                    .map_err(|e| VfdError::Open(e.to_string()))?;
                return Ok(HidTransport { device });
            }
        }
        Err(VfdError::NoDevice)
    }
}

impl VfdTransport for HidTransport {
    fn send(&mut self, packet: &Packet) -> Result<(), TransportError> {
        // Report ID 0 prefix; the HID layer strips it on the wire.
        let mut buf = [0u8; PACKET_SIZE + 1];
        buf[1..].copy_from_slice(packet.as_bytes());

        let result = match self.device.write(&buf) {
            // Platforms differ on whether the report ID byte is counted.
            Ok(written) if written < PACKET_SIZE => {
                Err(TransportError::ShortWrite { sent: written })
            }
            Ok(_) => Ok(()),
            Err(err) => Err(TransportError::Io(err.to_string())),
        };

        // Pace failed writes too; the firmware may have latched part of
        // the message.
        thread::sleep(SETTLE_TIME);
        result
    }
}
