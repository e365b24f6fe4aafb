//! Mouse-button codes.
//!
//! Touch-only backends report every contact as [`LEFT`].

pub const LEFT: i32 = 0;
pub const RIGHT: i32 = 1;
pub const MIDDLE: i32 = 2;

/// Number of button codes with pollable pressed state. Codes at or above
/// this value are forwarded to the listener but have no pollable state.
pub(crate) const TRACKED_BUTTONS: usize = 8;
