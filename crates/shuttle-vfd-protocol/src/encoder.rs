//! Packet encoders: reset, icon latch, text chunks, clock load.
//!
//! # Command payloads
//! | Command | Len | Payload                                            |
//! |---------|-----|----------------------------------------------------|
//! | 0x1 reset      | 1   | 1 = clear text and icons, 2 = cursor only   |
//! | 0x7 icons      | 4   | mask as four 5-bit groups, bits 18..15 first|
//! | 0x9 text       | 0-7 | raw character bytes, cursor auto-advances   |
//! | 0xD set clock  | 7   | sec min hour wday mday mon year; BCD except wday |
//! | 0x3 show clock | 1   | 3 = switch the panel to the built-in clock  |

use crate::icons::IconMask;
use crate::packet::{Command, PAYLOAD_SIZE, Packet};

// Reset payload arguments.
const RESET_ALL: u8 = 1;
const RESET_CURSOR: u8 = 2;

// Show-clock payload argument.
const SHOW_CLOCK: u8 = 3;

/// Wall-clock fields as the display controller expects them.
///
/// The zero value is deliberately representable: with no usable clock source
/// the driver loads it rather than failing the mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VfdDateTime {
    pub seconds: u8,
    pub minutes: u8,
    pub hours: u8,
    /// 1 = Monday through 7 = Sunday.
    pub weekday: u8,
    /// Day of month, 1-based.
    pub day: u8,
    /// Month, 1-based.
    pub month: u8,
    /// Year modulo 100.
    pub year: u8,
}

/// Reset packet: full clear, or cursor-only keeping the visible text.
pub fn reset(erase_icons: bool) -> Packet {
    let arg = if erase_icons { RESET_ALL } else { RESET_CURSOR };
    Packet::pack(Command::Reset, &[arg])
}

/// Icon latch packet carrying the packed 19-bit mask.
pub fn encode_icons(mask: IconMask) -> Packet {
    Packet::pack(Command::Icons, &mask.wire_bytes())
}

/// Split text into cursor-append packets: full 7-byte chunks, then the
/// non-empty remainder. A full 20-byte screen always yields three packets
/// with payload lengths 7, 7, 6.
pub fn encode_text(text: &[u8]) -> Vec<Packet> {
    text.chunks(PAYLOAD_SIZE)
        .map(|chunk| Packet::pack(Command::Text, chunk))
        .collect()
}

/// Clock packets: load the time, then switch the panel to clock display.
pub fn encode_clock(now: &VfdDateTime) -> (Packet, Packet) {
    let payload = [
        bcd(now.seconds),
        bcd(now.minutes),
        bcd(now.hours),
        now.weekday,
        bcd(now.day),
        bcd(now.month),
        bcd(now.year),
    ];
    (
        Packet::pack(Command::SetClock, &payload),
        Packet::pack(Command::ShowClock, &[SHOW_CLOCK]),
    )
}

// Two decimal digits packed as hex nibbles, so 0x45 reads as "45".
fn bcd(value: u8) -> u8 {
    (value / 10) * 16 + (value % 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::VOLUME_SHIFT;
    use crate::state::WIDTH;

    #[test]
    fn reset_full_clear() {
        assert_eq!(reset(true).as_bytes(), &[0x11, 1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn reset_cursor_only() {
        assert_eq!(reset(false).as_bytes(), &[0x11, 2, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn icons_packet_packs_five_bit_groups() {
        let mask = IconMask::from_raw((5 << VOLUME_SHIFT) | 0x7FFF);
        let packet = encode_icons(mask);
        assert_eq!(packet.as_bytes(), &[0x74, 0x05, 0x1F, 0x1F, 0x1F, 0, 0, 0]);
    }

    #[test]
    fn empty_mask_still_latches() {
        let packet = encode_icons(IconMask::EMPTY);
        assert_eq!(packet.as_bytes(), &[0x74, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn full_screen_yields_three_chunks() {
        let screen = [b'x'; WIDTH];
        let packets = encode_text(&screen);
        assert_eq!(packets.len(), 3);
        assert_eq!(packets[0].payload_len(), 7);
        assert_eq!(packets[1].payload_len(), 7);
        assert_eq!(packets[2].payload_len(), 6);
        // Zero padding after the 6-byte remainder.
        assert_eq!(packets[2].as_bytes(), &[0x96, b'x', b'x', b'x', b'x', b'x', b'x', 0]);
    }

    #[test]
    fn chunks_preserve_order() {
        let screen: Vec<u8> = (0..WIDTH as u8).collect();
        let packets = encode_text(&screen);
        let mut rebuilt = Vec::new();
        for packet in &packets {
            rebuilt.extend_from_slice(packet.payload());
        }
        assert_eq!(rebuilt, screen);
    }

    #[test]
    fn multiple_of_seven_has_no_remainder_packet() {
        assert_eq!(encode_text(&[b'a'; 14]).len(), 2);
        assert_eq!(encode_text(&[b'a'; 7]).len(), 1);
    }

    #[test]
    fn empty_text_yields_no_packets() {
        assert!(encode_text(&[]).is_empty());
    }

    #[test]
    fn clock_fields_are_bcd_except_weekday() {
        let now = VfdDateTime {
            seconds: 45,
            minutes: 30,
            hours: 9,
            weekday: 7,
            day: 31,
            month: 12,
            year: 26,
        };
        let (load, show) = encode_clock(&now);
        assert_eq!(load.as_bytes(), &[0xD7, 0x45, 0x30, 0x09, 7, 0x31, 0x12, 0x26]);
        assert_eq!(show.as_bytes(), &[0x31, 3, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn zero_time_encodes_cleanly() {
        let (load, _) = encode_clock(&VfdDateTime::default());
        assert_eq!(load.as_bytes(), &[0xD7, 0, 0, 0, 0, 0, 0, 0]);
    }
}
