//! Icon token list parsing and the mask merge policy.
//!
//! One write may name several icons (`"play,vol5"`). Tokens resolve
//! independently, OR-accumulate, and merge against the current mask in a
//! single step. Merge precedence, highest first:
//!
//! 1. `clear`/`none` anywhere in the list empties the mask.
//! 2. `=` anywhere makes the list an absolute assignment.
//! 3. A volume token replaces the current level, or switches the bar off
//!    when it names the level already shown.
//! 4. Plain icon tokens XOR-toggle independently.
//!
//! Volume is the one single-slot control on the panel; everything else
//! flips on repeated selection.

use crate::icons::{self, IconMask};

/// Parse a delimiter-separated icon token list against the current mask.
///
/// Splits on runs of `,`, space, and newline. Unknown tokens never abort
/// the request: they are returned for the caller to report and the
/// remaining tokens still apply.
pub fn parse_icons(input: &str, current: IconMask) -> (IconMask, Vec<String>) {
    let mut acc = 0u32;
    let mut unknown = Vec::new();

    for token in input.split([',', ' ', '\n']) {
        if token.is_empty() {
            continue;
        }
        match icons::lookup(token) {
            Some(value) => acc |= value,
            None => unknown.push(token.to_string()),
        }
    }

    (merge(acc, current), unknown)
}

fn merge(acc: u32, current: IconMask) -> IconMask {
    if acc & icons::CLEAR != 0 {
        return IconMask::EMPTY;
    }
    if acc & icons::SET != 0 {
        return IconMask::from_raw(acc & !icons::SET);
    }
    if acc & icons::VOLUME_MASK != 0 {
        // Selecting the level already shown turns the bar off.
        let mut acc = acc;
        if acc & icons::VOLUME_MASK == current.raw() & icons::VOLUME_MASK {
            acc &= icons::BASE_MASK;
        }
        return IconMask::from_raw((current.raw() & icons::BASE_MASK) ^ acc);
    }
    IconMask::from_raw(current.raw() ^ acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::{MAX_VOLUME, VOLUME_SHIFT, icon};

    fn parse_ok(input: &str, current: IconMask) -> IconMask {
        let (mask, unknown) = parse_icons(input, current);
        assert!(unknown.is_empty(), "unexpected unknown tokens: {unknown:?}");
        mask
    }

    #[test]
    fn single_icon_toggles_on() {
        let mask = parse_ok("play", IconMask::EMPTY);
        assert_eq!(mask.raw(), icon::PLAY);
    }

    #[test]
    fn repeated_selection_toggles_off() {
        let on = parse_ok("play", IconMask::EMPTY);
        let off = parse_ok("play", on);
        assert_eq!(off, IconMask::EMPTY);
    }

    #[test]
    fn independent_icons_flip_independently() {
        let mask = parse_ok("play,stop", IconMask::EMPTY);
        assert_eq!(mask.raw(), icon::PLAY | icon::STOP);
        let mask = parse_ok("play", mask);
        assert_eq!(mask.raw(), icon::STOP);
    }

    #[test]
    fn delimiters_split_on_runs() {
        let mask = parse_ok("play,, stop\nmusic", IconMask::EMPTY);
        assert_eq!(mask.raw(), icon::PLAY | icon::STOP | icon::MUSIC);
    }

    #[test]
    fn unknown_token_is_skipped_not_fatal() {
        let (mask, unknown) = parse_icons("foo,play", IconMask::EMPTY);
        assert_eq!(mask.raw(), icon::PLAY);
        assert_eq!(unknown, vec!["foo".to_string()]);
    }

    #[test]
    fn clear_wins_over_everything() {
        let current = IconMask::from_raw(icon::PLAY | (5 << VOLUME_SHIFT));
        let mask = parse_ok("play,clear", current);
        assert_eq!(mask, IconMask::EMPTY);
        let mask = parse_ok("clear,vol7,=", current);
        assert_eq!(mask, IconMask::EMPTY);
    }

    #[test]
    fn set_assigns_absolutely() {
        let current = IconMask::from_raw(icon::MUSIC | icon::REPEAT);
        let mask = parse_ok("=,play,stop", current);
        assert_eq!(mask.raw(), icon::PLAY | icon::STOP);
    }

    #[test]
    fn set_with_volume_assigns_volume_too() {
        let mask = parse_ok("=,vol5,play", IconMask::from_raw(icon::MUSIC));
        assert_eq!(mask.base(), icon::PLAY as u16);
        assert_eq!(mask.volume(), 5);
    }

    #[test]
    fn same_volume_twice_switches_off() {
        let on = parse_ok("vol5", IconMask::EMPTY);
        assert_eq!(on.volume(), 5);
        let off = parse_ok("vol5", on);
        assert_eq!(off.volume(), 0);
    }

    #[test]
    fn different_volume_replaces_not_accumulates() {
        let v5 = parse_ok("vol5", IconMask::EMPTY);
        let v7 = parse_ok("vol7", v5);
        assert_eq!(v7.volume(), 7);
        assert_eq!(v7.base(), 0);
    }

    #[test]
    fn volume_change_preserves_base_icons() {
        let current = parse_ok("play,vol5", IconMask::EMPTY);
        let mask = parse_ok("vol7", current);
        assert_eq!(mask.base(), icon::PLAY as u16);
        assert_eq!(mask.volume(), 7);
    }

    #[test]
    fn base_tokens_mixed_with_same_volume_still_toggle() {
        let current = parse_ok("play,vol5", IconMask::EMPTY);
        let mask = parse_ok("vol5,stop", current);
        assert_eq!(mask.volume(), 0);
        assert_eq!(mask.base(), (icon::PLAY | icon::STOP) as u16);
    }

    #[test]
    fn base_only_tokens_keep_current_volume() {
        let current = parse_ok("vol3", IconMask::EMPTY);
        let mask = parse_ok("play", current);
        assert_eq!(mask.volume(), 3);
        assert_eq!(mask.base(), icon::PLAY as u16);
    }

    #[test]
    fn all_token_sets_every_icon() {
        let mask = parse_ok("all", IconMask::EMPTY);
        assert_eq!(mask.base(), 0x7FFF);
        assert_eq!(mask.volume(), MAX_VOLUME);
    }

    #[test]
    fn empty_input_changes_nothing() {
        let current = IconMask::from_raw(icon::CAMERA);
        assert_eq!(parse_ok("", current), current);
        assert_eq!(parse_ok(" ,\n", current), current);
    }
}
