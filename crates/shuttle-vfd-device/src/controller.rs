//! Display controller: command entry points, mode state machine, flush
//! sequencing.

use shuttle_vfd_protocol::{
    DisplayMode, DisplayState, IconMask, Packet, TextStyle, TransportError, VfdTransport, WIDTH,
    encoder, format_icons, parse_icons,
};
use tracing::{debug, info, warn};

use crate::clock::{ClockSource, SystemClock, read_or_zero};
use crate::error::VfdError;

/// Attach-time behavior.
#[derive(Debug, Clone, Default)]
pub struct AttachOptions {
    /// Text to show once the panel is cleared. Shown with the initial
    /// (centered) style; `None` leaves the panel blank.
    pub greeting: Option<String>,
}

/// Orchestrates one attached panel: owns the [`DisplayState`], derives
/// packets, and hands them to the transport one at a time.
///
/// Methods take `&mut self`, so a single owner is already serialized; wrap
/// the controller in [`crate::SharedVfd`] when several callers can reach
/// the same panel.
pub struct VfdController<T> {
    state: DisplayState,
    transport: T,
    clock: Box<dyn ClockSource>,
}

impl<T: VfdTransport> VfdController<T> {
    /// Wrap a transport without touching the panel.
    ///
    /// The panel keeps whatever it currently shows; state starts at the
    /// driver defaults. Use [`VfdController::attach`] to bring the hardware
    /// to a known-blank state instead.
    pub fn new(transport: T) -> VfdController<T> {
        VfdController {
            state: DisplayState::new(),
            transport,
            clock: Box::new(SystemClock),
        }
    }

    /// Create a controller and bring the panel to a known state: full
    /// clear, then the greeting text if one is configured.
    pub fn attach(transport: T, options: AttachOptions) -> Result<VfdController<T>, VfdError> {
        let mut controller = VfdController::new(transport);
        let mut packets = vec![encoder::reset(true)];
        if let Some(greeting) = options.greeting.as_deref() {
            controller.state.set_text(greeting.as_bytes());
            packets.extend(encoder::encode_text(controller.state.screen()));
        }
        controller.send_all(&packets)?;
        info!("Shuttle VFD attached");
        Ok(controller)
    }

    /// Replace the clock source (fake time in tests).
    pub fn with_clock(mut self, clock: Box<dyn ClockSource>) -> VfdController<T> {
        self.clock = clock;
        self
    }

    /// Store new text, aligned and padded per the active style, and repaint
    /// the panel when in text mode. In clock mode the buffer is kept for
    /// the next switch back to text.
    pub fn set_text(&mut self, text: &[u8]) -> Result<(), VfdError> {
        self.state.set_text(text);
        if self.state.mode() != DisplayMode::Text {
            return Ok(());
        }
        // Cursor back to the origin without wiping icons, then repaint.
        let mut packets = vec![encoder::reset(false)];
        packets.extend(encoder::encode_text(self.state.screen()));
        self.send_all(&packets)
    }

    /// Apply an icon token list and latch the resulting mask.
    ///
    /// Unknown tokens are skipped and returned; the rest of the list still
    /// applies.
    pub fn set_icons(&mut self, tokens: &str) -> Result<Vec<String>, VfdError> {
        let (mask, unknown) = parse_icons(tokens, self.state.icons());
        for token in &unknown {
            warn!("unknown icon token {:?}, ignoring", token);
        }
        self.state.set_icons(mask);
        self.send_all(&[encoder::encode_icons(mask)])?;
        Ok(unknown)
    }

    /// Switch between text and clock display. The panel is fully cleared
    /// on every switch (icons included), then repainted for the new mode.
    pub fn set_mode(&mut self, name: &str) -> Result<(), VfdError> {
        let Some(mode) = DisplayMode::parse(name) else {
            return Err(VfdError::InvalidArgument {
                what: "mode",
                token: name.to_string(),
            });
        };
        self.state.set_mode(mode);
        debug!("display mode set to {}", mode.as_str());

        let mut packets = vec![encoder::reset(true)];
        match mode {
            DisplayMode::Clock => {
                let now = read_or_zero(self.clock.as_ref());
                let (load, show) = encoder::encode_clock(&now);
                packets.extend([load, show]);
            }
            DisplayMode::Text => {
                packets.extend(encoder::encode_text(self.state.screen()));
            }
        }
        self.send_all(&packets)
    }

    /// Change the padding style for future text writes. Emits nothing.
    pub fn set_text_style(&mut self, name: &str) -> Result<(), VfdError> {
        let Some(style) = TextStyle::parse(name) else {
            return Err(VfdError::InvalidArgument {
                what: "text style",
                token: name.to_string(),
            });
        };
        self.state.set_text_style(style);
        Ok(())
    }

    /// The 20-byte screen buffer as last stored.
    pub fn text(&self) -> &[u8; WIDTH] {
        self.state.screen()
    }

    /// The current icon mask.
    pub fn icons(&self) -> IconMask {
        self.state.icons()
    }

    /// The icon mask as a token string (`"play vol5"`, or `"none"`).
    pub fn icons_string(&self) -> String {
        format_icons(self.state.icons())
    }

    pub fn mode(&self) -> DisplayMode {
        self.state.mode()
    }

    pub fn text_style(&self) -> TextStyle {
        self.state.text_style()
    }

    // Send packets in order. A failed packet is reported and the remaining
    // packets are still attempted; the protocol offers nothing to roll
    // back to, and later packets may still land.
    fn send_all(&mut self, packets: &[Packet]) -> Result<(), VfdError> {
        let mut failed = 0usize;
        let mut last: Option<TransportError> = None;
        for packet in packets {
            if let Err(err) = self.transport.send(packet) {
                warn!("packet send failed: {}", err);
                failed += 1;
                last = Some(err);
            }
        }
        match last {
            None => Ok(()),
            Some(last) => Err(VfdError::Transport {
                failed,
                attempted: packets.len(),
                last,
            }),
        }
    }
}
