//! The driver-side collaborator interface.
//!
//! A backend is the platform half of the input system: it reads OS and
//! hardware state, pushes [`DriverEvent`]s into the hub's queue, and carries
//! out the outward-facing auxiliary requests (vibration, cursor, on-screen
//! keyboard, text dialogs) the hub forwards to it.
//!
//! Every outward method defaults to a no-op: a peripheral a backend does not
//! support is a neutral non-action, never a failure. The hub performs all
//! precondition validation before calling a backend, so implementations may
//! assume their arguments are well-formed.
//!
//! [`DriverEvent`]: crate::queue::DriverEvent

use crate::{
    cursor::CursorImage, peripherals::CapabilitySet, text::TextInputRequest,
    vibration::VibrationPattern,
};

/// Platform driver for outward-facing input requests.
pub trait Backend {
    /// The peripherals this backend offers at startup. Later changes (e.g. a
    /// keyboard sliding out) are pushed as
    /// [`DriverEvent::PeripheralChanged`] events.
    ///
    /// [`DriverEvent::PeripheralChanged`]: crate::queue::DriverEvent::PeripheralChanged
    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::none()
    }

    /// Maximum number of concurrent contacts this backend will ever report.
    /// Sizes the hub's pointer arena.
    fn max_pointers(&self) -> usize {
        1
    }

    /// Vibrate for the given duration. Supersedes any vibration in progress.
    fn vibrate(&mut self, milliseconds: u64) {
        let _ = milliseconds;
    }

    /// Play a vibration pattern. Supersedes any vibration in progress.
    fn vibrate_pattern(&mut self, pattern: &VibrationPattern) {
        let _ = pattern;
    }

    /// Stop the vibrator. Must succeed (as a no-op) when nothing vibrates.
    fn cancel_vibrate(&mut self) {}

    /// Confine and hide, or release, the mouse cursor.
    fn set_cursor_catched(&mut self, catched: bool) {
        let _ = catched;
    }

    /// Warp the cursor to window coordinates, origin top-left.
    fn set_cursor_position(&mut self, x: i32, y: i32) {
        let _ = (x, y);
    }

    /// Display a custom cursor image with the given hotspot, or restore the
    /// system default when `image` is `None`.
    fn set_cursor_image(&mut self, image: Option<&CursorImage>, x_hotspot: u32, y_hotspot: u32) {
        let _ = (image, x_hotspot, y_hotspot);
    }

    /// Show or hide the on-screen keyboard.
    fn set_onscreen_keyboard_visible(&mut self, visible: bool) {
        let _ = visible;
    }

    /// Open a text-input dialog. The backend must eventually push exactly one
    /// [`DriverEvent::TextInput`] carrying the request's id.
    ///
    /// [`DriverEvent::TextInput`]: crate::queue::DriverEvent::TextInput
    fn request_text_input(&mut self, request: TextInputRequest) {
        let _ = request;
    }
}

/// A backend with no peripherals and a single pointer slot.
///
/// Useful for headless runs and unit tests: every auxiliary request is a
/// no-op and every capability query answers `false`, while the polling and
/// event surfaces remain fully functional.
#[derive(Debug, Default)]
pub struct NullBackend {
    max_pointers: usize,
}

impl NullBackend {
    /// A null backend reporting a single pointer slot.
    pub fn new() -> Self {
        Self { max_pointers: 1 }
    }

    /// A null backend reporting `max_pointers` concurrent contacts.
    pub fn with_max_pointers(max_pointers: usize) -> Self {
        Self { max_pointers }
    }
}

impl Backend for NullBackend {
    fn max_pointers(&self) -> usize {
        self.max_pointers.max(1)
    }
}
