//! Canonical key-code constants.
//!
//! The numbering deliberately leaves gaps (unused slots have no constant and
//! no name) and contains two kinds of aliases: [`BACKSPACE`] shares a code
//! with [`DEL`], and [`BUTTON_CIRCLE`] shares a code with [`F12`]. The
//! `META_*` constants describe modifier *state* bits and are valid codes for
//! that purpose, but are intentionally excluded from the name table.

/// Wildcard accepted by pressed-state queries: matches any pressed key.
pub const ANY_KEY: i32 = -1;

pub const UNKNOWN: i32 = 0;
pub const SOFT_LEFT: i32 = 1;
pub const SOFT_RIGHT: i32 = 2;
pub const HOME: i32 = 3;
pub const BACK: i32 = 4;
pub const CALL: i32 = 5;
pub const ENDCALL: i32 = 6;
pub const NUM_0: i32 = 7;
pub const NUM_1: i32 = 8;
pub const NUM_2: i32 = 9;
pub const NUM_3: i32 = 10;
pub const NUM_4: i32 = 11;
pub const NUM_5: i32 = 12;
pub const NUM_6: i32 = 13;
pub const NUM_7: i32 = 14;
pub const NUM_8: i32 = 15;
pub const NUM_9: i32 = 16;
pub const STAR: i32 = 17;
pub const POUND: i32 = 18;
pub const UP: i32 = 19;
pub const DOWN: i32 = 20;
pub const LEFT: i32 = 21;
pub const RIGHT: i32 = 22;
pub const CENTER: i32 = 23;
pub const VOLUME_UP: i32 = 24;
pub const VOLUME_DOWN: i32 = 25;
pub const POWER: i32 = 26;
pub const CAMERA: i32 = 27;
pub const CLEAR: i32 = 28;
pub const A: i32 = 29;
pub const B: i32 = 30;
pub const C: i32 = 31;
pub const D: i32 = 32;
pub const E: i32 = 33;
pub const F: i32 = 34;
pub const G: i32 = 35;
pub const H: i32 = 36;
pub const I: i32 = 37;
pub const J: i32 = 38;
pub const K: i32 = 39;
pub const L: i32 = 40;
pub const M: i32 = 41;
pub const N: i32 = 42;
pub const O: i32 = 43;
pub const P: i32 = 44;
pub const Q: i32 = 45;
pub const R: i32 = 46;
pub const S: i32 = 47;
pub const T: i32 = 48;
pub const U: i32 = 49;
pub const V: i32 = 50;
pub const W: i32 = 51;
pub const X: i32 = 52;
pub const Y: i32 = 53;
pub const Z: i32 = 54;
pub const COMMA: i32 = 55;
pub const PERIOD: i32 = 56;
pub const ALT_LEFT: i32 = 57;
pub const ALT_RIGHT: i32 = 58;
pub const SHIFT_LEFT: i32 = 59;
pub const SHIFT_RIGHT: i32 = 60;
pub const TAB: i32 = 61;
pub const SPACE: i32 = 62;
pub const SYM: i32 = 63;
pub const EXPLORER: i32 = 64;
pub const ENVELOPE: i32 = 65;
pub const ENTER: i32 = 66;
pub const DEL: i32 = 67;
/// Alias for [`DEL`].
pub const BACKSPACE: i32 = 67;
pub const GRAVE: i32 = 68;
pub const MINUS: i32 = 69;
pub const EQUALS: i32 = 70;
pub const LEFT_BRACKET: i32 = 71;
pub const RIGHT_BRACKET: i32 = 72;
pub const BACKSLASH: i32 = 73;
pub const SEMICOLON: i32 = 74;
pub const APOSTROPHE: i32 = 75;
pub const SLASH: i32 = 76;
pub const AT: i32 = 77;
pub const NUM: i32 = 78;
pub const HEADSETHOOK: i32 = 79;
pub const FOCUS: i32 = 80;
pub const PLUS: i32 = 81;
pub const MENU: i32 = 82;
pub const NOTIFICATION: i32 = 83;
pub const SEARCH: i32 = 84;
pub const MEDIA_PLAY_PAUSE: i32 = 85;
pub const MEDIA_STOP: i32 = 86;
pub const MEDIA_NEXT: i32 = 87;
pub const MEDIA_PREVIOUS: i32 = 88;
pub const MEDIA_REWIND: i32 = 89;
pub const MEDIA_FAST_FORWARD: i32 = 90;
pub const MUTE: i32 = 91;
pub const PAGE_UP: i32 = 92;
pub const PAGE_DOWN: i32 = 93;
pub const PICTSYMBOLS: i32 = 94;
pub const SWITCH_CHARSET: i32 = 95;
pub const BUTTON_A: i32 = 96;
pub const BUTTON_B: i32 = 97;
pub const BUTTON_C: i32 = 98;
pub const BUTTON_X: i32 = 99;
pub const BUTTON_Y: i32 = 100;
pub const BUTTON_Z: i32 = 101;
pub const BUTTON_L1: i32 = 102;
pub const BUTTON_R1: i32 = 103;
pub const BUTTON_L2: i32 = 104;
pub const BUTTON_R2: i32 = 105;
pub const BUTTON_THUMBL: i32 = 106;
pub const BUTTON_THUMBR: i32 = 107;
pub const BUTTON_START: i32 = 108;
pub const BUTTON_SELECT: i32 = 109;
pub const BUTTON_MODE: i32 = 110;
pub const FORWARD_DEL: i32 = 112;
pub const CONTROL_LEFT: i32 = 129;
pub const CONTROL_RIGHT: i32 = 130;
pub const ESCAPE: i32 = 131;
pub const END: i32 = 132;
pub const INSERT: i32 = 133;
pub const NUMPAD_0: i32 = 144;
pub const NUMPAD_1: i32 = 145;
pub const NUMPAD_2: i32 = 146;
pub const NUMPAD_3: i32 = 147;
pub const NUMPAD_4: i32 = 148;
pub const NUMPAD_5: i32 = 149;
pub const NUMPAD_6: i32 = 150;
pub const NUMPAD_7: i32 = 151;
pub const NUMPAD_8: i32 = 152;
pub const NUMPAD_9: i32 = 153;
pub const COLON: i32 = 243;
pub const F1: i32 = 244;
pub const F2: i32 = 245;
pub const F3: i32 = 246;
pub const F4: i32 = 247;
pub const F5: i32 = 248;
pub const F6: i32 = 249;
pub const F7: i32 = 250;
pub const F8: i32 = 251;
pub const F9: i32 = 252;
pub const F10: i32 = 253;
pub const F11: i32 = 254;
pub const F12: i32 = 255;
/// Alias for [`F12`].
pub const BUTTON_CIRCLE: i32 = 255;

/// Modifier state bit: some shift key held.
pub const META_SHIFT_ON: i32 = 1;
/// Modifier state bit: some alt key held.
pub const META_ALT_ON: i32 = 2;
/// Modifier state bit: the symbol modifier held.
pub const META_SYM_ON: i32 = 4;
/// Modifier state bit: left shift held.
pub const META_SHIFT_LEFT_ON: i32 = 64;
/// Modifier state bit: right shift held.
pub const META_SHIFT_RIGHT_ON: i32 = 128;
/// Modifier state bit: left alt held.
pub const META_ALT_LEFT_ON: i32 = 16;
/// Modifier state bit: right alt held.
pub const META_ALT_RIGHT_ON: i32 = 32;
