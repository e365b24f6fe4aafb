//! Bidirectional key-code ↔ key-name mapping.
//!
//! [`name`] is the forward table. The reverse index used by [`code`] is
//! derived from it by enumerating every code exactly once on first use, so
//! the two directions cannot drift apart.

use ::lazy_static::lazy_static;
use ::std::collections::HashMap;

use crate::errors::{Error, Result};

/// Sentinel returned by [`code`] when no key maps to the given name.
///
/// Distinct from [`UNKNOWN`], which is the valid code `0` with the name
/// `"UNKNOWN"`.
///
/// [`UNKNOWN`]: super::UNKNOWN
pub const NO_KEY: i32 = -1;

lazy_static! {
    /// Reverse index, built exactly once from the forward table.
    static ref KEY_NAMES: HashMap<&'static str, i32> = {
        let mut names = HashMap::new();
        for code in 0..=255 {
            if let Ok(Some(name)) = name(code) {
                // First writer wins so that aliased codes stay stable.
                names.entry(name).or_insert(code);
            }
        }
        names
    };
}

/// Returns the canonical, human-readable name for a key code.
///
/// Codes within `[0, 255]` which have no assigned name (unused slots, and the
/// `META_*` modifier bits which are deliberately absent from this table)
/// yield `Ok(None)`. Codes outside that range are a caller error.
///
/// # Errors
///
/// [`Error::KeyCodeOutOfRange`] if `code < 0` or `code > 255`.
pub fn name(code: i32) -> Result<Option<&'static str>> {
    if !(0..=255).contains(&code) {
        return Err(Error::KeyCodeOutOfRange(code));
    }

    let name = match code {
        0 => "UNKNOWN",
        1 => "SOFT_LEFT",
        2 => "SOFT_RIGHT",
        3 => "HOME",
        4 => "BACK",
        5 => "CALL",
        6 => "ENDCALL",
        7 => "NUM_0",
        8 => "NUM_1",
        9 => "NUM_2",
        10 => "NUM_3",
        11 => "NUM_4",
        12 => "NUM_5",
        13 => "NUM_6",
        14 => "NUM_7",
        15 => "NUM_8",
        16 => "NUM_9",
        17 => "*",
        18 => "#",
        19 => "UP",
        20 => "DOWN",
        21 => "LEFT",
        22 => "RIGHT",
        23 => "CENTER",
        24 => "VOLUME_UP",
        25 => "VOLUME_DOWN",
        26 => "POWER",
        27 => "CAMERA",
        28 => "CLEAR",
        29 => "A",
        30 => "B",
        31 => "C",
        32 => "D",
        33 => "E",
        34 => "F",
        35 => "G",
        36 => "H",
        37 => "I",
        38 => "J",
        39 => "K",
        40 => "L",
        41 => "M",
        42 => "N",
        43 => "O",
        44 => "P",
        45 => "Q",
        46 => "R",
        47 => "S",
        48 => "T",
        49 => "U",
        50 => "V",
        51 => "W",
        52 => "X",
        53 => "Y",
        54 => "Z",
        55 => ",",
        56 => ".",
        57 => "ALT_LEFT",
        58 => "ALT_RIGHT",
        59 => "SHIFT_LEFT",
        60 => "SHIFT_RIGHT",
        61 => "TAB",
        62 => " ",
        63 => "SYM",
        64 => "EXPLORER",
        65 => "ENVELOPE",
        66 => "ENTER",
        // DEL and BACKSPACE share this code.
        67 => "DEL",
        68 => "`",
        69 => "-",
        70 => "=",
        71 => "[",
        72 => "]",
        73 => "\\",
        74 => ";",
        75 => "'",
        76 => "/",
        77 => "@",
        78 => "NUM",
        79 => "HEADSETHOOK",
        80 => "FOCUS",
        81 => "PLUS",
        82 => "MENU",
        83 => "NOTIFICATION",
        84 => "SEARCH",
        85 => "MEDIA_PLAY_PAUSE",
        86 => "MEDIA_STOP",
        87 => "MEDIA_NEXT",
        88 => "MEDIA_PREVIOUS",
        89 => "MEDIA_REWIND",
        90 => "MEDIA_FAST_FORWARD",
        91 => "MUTE",
        92 => "PAGE_UP",
        93 => "PAGE_DOWN",
        94 => "PICTSYMBOLS",
        95 => "SWITCH_CHARSET",
        96 => "BUTTON_A",
        97 => "BUTTON_B",
        98 => "BUTTON_C",
        99 => "BUTTON_X",
        100 => "BUTTON_Y",
        101 => "BUTTON_Z",
        102 => "BUTTON_L1",
        103 => "BUTTON_R1",
        104 => "BUTTON_L2",
        105 => "BUTTON_R2",
        106 => "BUTTON_THUMBL",
        107 => "BUTTON_THUMBR",
        108 => "BUTTON_START",
        109 => "BUTTON_SELECT",
        110 => "BUTTON_MODE",
        112 => "FORWARD_DEL",
        129 => "CONTROL_LEFT",
        130 => "CONTROL_RIGHT",
        131 => "ESCAPE",
        132 => "END",
        133 => "INSERT",
        144 => "NUMPAD_0",
        145 => "NUMPAD_1",
        146 => "NUMPAD_2",
        147 => "NUMPAD_3",
        148 => "NUMPAD_4",
        149 => "NUMPAD_5",
        150 => "NUMPAD_6",
        151 => "NUMPAD_7",
        152 => "NUMPAD_8",
        153 => "NUMPAD_9",
        243 => ":",
        244 => "F1",
        245 => "F2",
        246 => "F3",
        247 => "F4",
        248 => "F5",
        249 => "F6",
        250 => "F7",
        251 => "F8",
        252 => "F9",
        253 => "F10",
        254 => "F11",
        // Also BUTTON_CIRCLE.
        255 => "F12",
        _ => return Ok(None),
    };

    Ok(Some(name))
}

/// Returns the key code for a canonical key name, or [`NO_KEY`] if no code
/// maps to that name. The match is exact and case-sensitive.
///
/// The first call builds the reverse index from the forward table; subsequent
/// calls reuse it for the lifetime of the process.
pub fn code(name: &str) -> i32 {
    KEY_NAMES.get(name).copied().unwrap_or(NO_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    use ::pretty_assertions::assert_eq;

    /// The interchange contract: every code which has a name must survive a
    /// round trip through the string encoding.
    #[test]
    fn test_name_code_round_trip() {
        for c in 0..=255 {
            if let Some(n) = name(c).unwrap() {
                assert_eq!(code(n), c, "round trip failed for code {c} ({n:?})");
            }
        }
    }

    #[test]
    fn test_well_known_codes() {
        assert_eq!(code("UNKNOWN"), keys::UNKNOWN);
        assert_eq!(code("F12"), keys::F12);
        assert_eq!(name(255).unwrap(), Some("F12"));
        assert_eq!(name(keys::SPACE).unwrap(), Some(" "));
        assert_eq!(code(" "), keys::SPACE);
        assert_eq!(code("*"), keys::STAR);
    }

    /// An unknown name is a lookup miss, signalled by the sentinel rather
    /// than an error, and the sentinel is distinct from the valid code 0.
    #[test]
    fn test_unknown_name_is_sentinel() {
        assert_eq!(code("NOT_A_KEY"), NO_KEY);
        assert_eq!(code(""), NO_KEY);
        assert_ne!(NO_KEY, keys::UNKNOWN);
    }

    /// The match is case-sensitive; `"f12"` is not `"F12"`.
    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(code("f12"), NO_KEY);
        assert_eq!(code("escape"), NO_KEY);
        assert_eq!(code("ESCAPE"), keys::ESCAPE);
    }

    /// In-range codes without a name are absent values, not errors. Code 111
    /// is an unused slot; the `META_*` bit values overlap real codes and so
    /// never shadow them.
    #[test]
    fn test_unmapped_codes_are_absent() {
        assert_eq!(name(111).unwrap(), None);
        assert_eq!(name(140).unwrap(), None);
        assert_eq!(name(242).unwrap(), None);
    }

    #[test]
    fn test_out_of_range_codes_are_rejected() {
        assert_eq!(name(-1), Err(Error::KeyCodeOutOfRange(-1)));
        assert_eq!(name(256), Err(Error::KeyCodeOutOfRange(256)));
        assert_eq!(name(i32::MIN), Err(Error::KeyCodeOutOfRange(i32::MIN)));
    }

    /// DEL and BACKSPACE are one physical code; the shared name maps back to
    /// that code.
    #[test]
    fn test_aliased_codes() {
        assert_eq!(keys::DEL, keys::BACKSPACE);
        assert_eq!(name(keys::BACKSPACE).unwrap(), Some("DEL"));
        assert_eq!(code("DEL"), keys::DEL);
        assert_eq!(keys::BUTTON_CIRCLE, keys::F12);
    }
}
