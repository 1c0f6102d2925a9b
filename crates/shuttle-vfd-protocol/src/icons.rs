//! Icon bitmask model and the token catalog.
//!
//! The panel has 15 independent indicator icons (base mask, bits 0-14) plus
//! a volume bar with 12 exclusive levels (4-bit sub-field at bits 15-18,
//! level 0 = off). On the wire the 19 significant bits travel as four 5-bit
//! groups; see [`IconMask::wire_bytes`].

use tracing::warn;

/// Independent indicator icons.
pub mod icon {
    pub const TELEVISION: u32 = 1 << 0;
    pub const CD_DVD: u32 = 1 << 1;
    pub const MUSIC: u32 = 1 << 2;
    pub const RADIO: u32 = 1 << 3;
    pub const CLOCK: u32 = 1 << 4;
    pub const PAUSE: u32 = 1 << 5;
    pub const PLAY: u32 = 1 << 6;
    pub const RECORD: u32 = 1 << 7;
    pub const REWIND: u32 = 1 << 8;
    pub const CAMERA: u32 = 1 << 9;
    pub const MUTE: u32 = 1 << 10;
    pub const REPEAT: u32 = 1 << 11;
    pub const REVERSE: u32 = 1 << 12;
    pub const FASTFORWARD: u32 = 1 << 13;
    pub const STOP: u32 = 1 << 14;
}

/// All 15 base icon bits.
pub const BASE_MASK: u32 = 0x7FFF;

/// Bit position of the volume sub-field.
pub const VOLUME_SHIFT: u32 = 15;

/// The 4-bit volume sub-field.
pub const VOLUME_MASK: u32 = 0xF << VOLUME_SHIFT;

/// Highest level the volume bar can show.
pub const MAX_VOLUME: u8 = 12;

/// Every base icon lit plus a full volume bar (the `all`/`world` token).
pub const ALL_ICONS: u32 = BASE_MASK | ((MAX_VOLUME as u32) << VOLUME_SHIFT);

/// Catalog command value: clear the whole mask. Not an icon bit and never
/// reaches the wire; non-zero so a successful lookup is distinguishable
/// from no match.
pub const CLEAR: u32 = 1 << 28;

/// Catalog command value: replace the mask instead of toggling.
pub const SET: u32 = 1 << 29;

struct IconEntry {
    name: &'static str,
    alias: Option<&'static str>,
    value: u32,
}

// Short name first; the alias doubles as the display name in
// `format_icons`. `vol0` aliases mute, not a volume level.
const CATALOG: &[IconEntry] = &[
    IconEntry { name: "clk", alias: Some("clock"), value: icon::CLOCK },
    IconEntry { name: "rad", alias: Some("radio"), value: icon::RADIO },
    IconEntry { name: "mus", alias: Some("music"), value: icon::MUSIC },
    IconEntry { name: "cd", alias: Some("dvd"), value: icon::CD_DVD },
    IconEntry { name: "tv", alias: Some("tele"), value: icon::TELEVISION },
    IconEntry { name: "cam", alias: Some("camera"), value: icon::CAMERA },
    IconEntry { name: "rew", alias: Some("rewind"), value: icon::REWIND },
    IconEntry { name: "rec", alias: Some("record"), value: icon::RECORD },
    IconEntry { name: "pl", alias: Some("play"), value: icon::PLAY },
    IconEntry { name: "pa", alias: Some("pause"), value: icon::PAUSE },
    IconEntry { name: "st", alias: Some("stop"), value: icon::STOP },
    IconEntry { name: "ff", alias: None, value: icon::FASTFORWARD },
    IconEntry { name: "rev", alias: Some("reverse"), value: icon::REVERSE },
    IconEntry { name: "rep", alias: Some("repeat"), value: icon::REPEAT },
    IconEntry { name: "mute", alias: Some("vol0"), value: icon::MUTE },
    IconEntry { name: "all", alias: Some("world"), value: ALL_ICONS },
    IconEntry { name: "clear", alias: Some("none"), value: CLEAR },
    IconEntry { name: "=", alias: None, value: SET },
];

/// Resolve one icon token to its catalog value.
///
/// Matching is exact and case-sensitive: each entry's short name or alias,
/// or the volume patterns `vol1`-`vol9` and `vol10`-`vol12`. No trimming is
/// performed here; the caller splits and discards delimiters.
pub fn lookup(token: &str) -> Option<u32> {
    for entry in CATALOG {
        if token == entry.name || entry.alias == Some(token) {
            return Some(entry.value);
        }
    }
    volume_token(token)
}

fn volume_token(token: &str) -> Option<u32> {
    let digits = token.strip_prefix("vol")?;
    match digits.as_bytes() {
        [d @ b'1'..=b'9'] => Some(u32::from(d - b'0') << VOLUME_SHIFT),
        [b'1', d @ b'0'..=b'2'] => Some((u32::from(d - b'0') + 10) << VOLUME_SHIFT),
        _ => None,
    }
}

/// The 19 significant icon bits: 15 base icons plus the volume sub-field.
///
/// Invariant: the volume sub-field is always in `0..=12`; 0 means the bar
/// is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IconMask(u32);

impl IconMask {
    /// No icons lit.
    pub const EMPTY: IconMask = IconMask(0);

    /// Build a mask from base bits and a volume level (clamped to
    /// [`MAX_VOLUME`]).
    pub fn new(base: u16, volume: u8) -> IconMask {
        let base = u32::from(base) & BASE_MASK;
        let volume = u32::from(volume.min(MAX_VOLUME));
        IconMask(base | (volume << VOLUME_SHIFT))
    }

    // Reinterpret accumulated catalog values as a mask. Sentinel and other
    // out-of-range bits are dropped; a volume field above 12 (several volume
    // tokens OR-ed in one request) saturates.
    pub(crate) fn from_raw(raw: u32) -> IconMask {
        let volume = ((raw & VOLUME_MASK) >> VOLUME_SHIFT) as u8;
        if volume > MAX_VOLUME {
            warn!("volume level {} out of range, saturating at {}", volume, MAX_VOLUME);
        }
        IconMask::new((raw & BASE_MASK) as u16, volume)
    }

    /// The raw 19-bit value.
    pub fn raw(self) -> u32 {
        self.0
    }

    /// The 15 independent icon bits.
    pub fn base(self) -> u16 {
        (self.0 & BASE_MASK) as u16
    }

    /// The volume level, 0 (off) through 12.
    pub fn volume(self) -> u8 {
        ((self.0 & VOLUME_MASK) >> VOLUME_SHIFT) as u8
    }

    /// True when no icon and no volume level is lit.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The icons packet payload: four 5-bit groups, most significant first.
    pub fn wire_bytes(self) -> [u8; 4] {
        [
            ((self.0 >> 15) & 0x1F) as u8,
            ((self.0 >> 10) & 0x1F) as u8,
            ((self.0 >> 5) & 0x1F) as u8,
            (self.0 & 0x1F) as u8,
        ]
    }
}

/// Render a mask as icon tokens: space-joined display names of all lit base
/// icons, `volN` when the volume bar is active, or the literal `none` for an
/// empty mask. The output parses back to the same mask from an empty state.
pub fn format_icons(mask: IconMask) -> String {
    use core::fmt::Write;

    let mut out = String::new();
    for entry in CATALOG {
        if matches!(entry.value, ALL_ICONS | CLEAR | SET) {
            continue;
        }
        if mask.raw() & entry.value != 0 {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(entry.alias.unwrap_or(entry.name));
        }
    }
    if mask.volume() > 0 {
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = write!(out, "vol{}", mask.volume());
    }
    if out.is_empty() {
        out.push_str("none");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_names_and_aliases() {
        assert_eq!(lookup("pl"), Some(icon::PLAY));
        assert_eq!(lookup("play"), Some(icon::PLAY));
        assert_eq!(lookup("ff"), Some(icon::FASTFORWARD));
        assert_eq!(lookup("clear"), Some(CLEAR));
        assert_eq!(lookup("none"), Some(CLEAR));
        assert_eq!(lookup("="), Some(SET));
    }

    #[test]
    fn lookup_is_case_sensitive_and_exact() {
        assert_eq!(lookup("Play"), None);
        assert_eq!(lookup(" play"), None);
        assert_eq!(lookup("playx"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn lookup_volume_levels() {
        assert_eq!(lookup("vol1"), Some(1 << VOLUME_SHIFT));
        assert_eq!(lookup("vol9"), Some(9 << VOLUME_SHIFT));
        assert_eq!(lookup("vol10"), Some(10 << VOLUME_SHIFT));
        assert_eq!(lookup("vol12"), Some(12 << VOLUME_SHIFT));
        assert_eq!(lookup("vol13"), None);
        assert_eq!(lookup("vol"), None);
        assert_eq!(lookup("vol123"), None);
    }

    #[test]
    fn vol0_is_mute_not_a_volume_level() {
        assert_eq!(lookup("vol0"), Some(icon::MUTE));
        assert_eq!(lookup("mute"), Some(icon::MUTE));
    }

    #[test]
    fn all_lights_everything() {
        assert_eq!(lookup("all"), Some(ALL_ICONS));
        let mask = IconMask::from_raw(ALL_ICONS);
        assert_eq!(mask.base(), 0x7FFF);
        assert_eq!(mask.volume(), MAX_VOLUME);
    }

    #[test]
    fn volume_round_trip() {
        for level in 0..=MAX_VOLUME {
            let mask = IconMask::new(0, level);
            assert_eq!(mask.volume(), level);
            assert_eq!(mask.base(), 0);
        }
    }

    #[test]
    fn volume_clamped() {
        assert_eq!(IconMask::new(0, 15).volume(), MAX_VOLUME);
        assert_eq!(IconMask::from_raw(0xF << VOLUME_SHIFT).volume(), MAX_VOLUME);
    }

    #[test]
    fn wire_bytes_are_five_bit_groups() {
        let mask = IconMask::from_raw(0b1010_10101_01010_10101);
        let bytes = mask.wire_bytes();
        assert!(bytes.iter().all(|b| *b <= 0x1F));
        assert_eq!(bytes[0], 0b01010);
        assert_eq!(bytes[1], 0b10101);
        assert_eq!(bytes[2], 0b01010);
        assert_eq!(bytes[3], 0b10101);
    }

    #[test]
    fn format_empty_mask() {
        assert_eq!(format_icons(IconMask::EMPTY), "none");
    }

    #[test]
    fn format_base_icons_uses_display_names() {
        let mask = IconMask::from_raw(icon::PLAY | icon::STOP);
        assert_eq!(format_icons(mask), "play stop");
    }

    #[test]
    fn format_volume_level() {
        let mask = IconMask::new(0, 5);
        assert_eq!(format_icons(mask), "vol5");
        let mask = IconMask::from_raw(icon::MUSIC | (3 << VOLUME_SHIFT));
        assert_eq!(format_icons(mask), "music vol3");
    }

    #[test]
    fn format_mute_shows_vol0() {
        assert_eq!(format_icons(IconMask::from_raw(icon::MUTE)), "vol0");
    }
}
