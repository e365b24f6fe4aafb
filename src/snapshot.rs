//! Aggregated current-frame input state.
//!
//! The snapshot is the polling half of the unified model: everything an
//! application can ask "right now", as opposed to the ordered events a
//! listener receives. It is mutated only by the dispatcher on the render
//! thread, strictly before the frame's render step, so reads within a frame
//! are always internally consistent.

use ::bitvec::prelude::*;

use ::strum::{Display, EnumIter};

use crate::{buttons::TRACKED_BUTTONS, keys};

/// Rotation of the device with respect to its native orientation.
#[derive(Clone, Copy, Debug, Default, Display, EnumIter, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// The rotation in degrees: 0, 90, 180, or 270.
    pub const fn degrees(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

/// Native orientation of the device's display panel.
#[derive(Clone, Copy, Debug, Default, Display, EnumIter, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

/// Per-frame aggregate state: pressed keys and buttons, the "just touched"
/// transition flag, sensor readings, and device orientation.
#[derive(Debug)]
pub(crate) struct Snapshot {
    /// Press state per canonical key code, one bit per code.
    pressed_keys: BitArr!(for 256, in usize, Lsb0),
    /// Number of set bits in `pressed_keys`, kept so ANY_KEY queries and
    /// is-anything-down checks stay O(1).
    pressed_key_count: usize,
    /// Number of active contacts per tracked button code. Touch backends
    /// report every contact as the left button, so a button counts as
    /// pressed while *any* contact carrying it remains down.
    pressed_buttons: [u8; TRACKED_BUTTONS],
    /// True only during the processing cycle in which a touch-down
    /// transition occurred. Reset unconditionally at every cycle start.
    pub(crate) just_touched: bool,
    /// Accelerometer reading per axis, nominally within [-10, 10]. Zero when
    /// the backend has no accelerometer.
    pub(crate) accelerometer: (f32, f32, f32),
    /// Orientation angles in degrees: azimuth, pitch, roll.
    pub(crate) azimuth: f32,
    pub(crate) pitch: f32,
    pub(crate) roll: f32,
    pub(crate) rotation: Rotation,
    pub(crate) native_orientation: Orientation,
    /// Timestamp (nanoseconds) of the event currently being dispatched, or
    /// of the most recently dispatched one.
    pub(crate) event_time_ns: u64,
}

impl Snapshot {
    pub(crate) fn new(native_orientation: Orientation) -> Self {
        Self {
            pressed_keys: BitArray::ZERO,
            pressed_key_count: 0,
            pressed_buttons: [0; TRACKED_BUTTONS],
            just_touched: false,
            accelerometer: (0.0, 0.0, 0.0),
            azimuth: 0.0,
            pitch: 0.0,
            roll: 0.0,
            rotation: Rotation::default(),
            native_orientation,
            event_time_ns: 0,
        }
    }

    /// Marks a key down. `code` must already be validated to `[0, 255]`.
    pub(crate) fn press_key(&mut self, code: i32) {
        let mut bit = self
            .pressed_keys
            .get_mut(code as usize)
            .expect("key code validated before state update");
        if !*bit {
            *bit.as_mut() = true;
            self.pressed_key_count += 1;
        }
    }

    /// Marks a key up. `code` must already be validated to `[0, 255]`.
    pub(crate) fn release_key(&mut self, code: i32) {
        let mut bit = self
            .pressed_keys
            .get_mut(code as usize)
            .expect("key code validated before state update");
        if *bit {
            *bit.as_mut() = false;
            self.pressed_key_count -= 1;
        }
    }

    /// Whether a key is pressed. [`keys::ANY_KEY`] matches any pressed key;
    /// other codes outside `[0, 255]` read as not pressed.
    pub(crate) fn is_key_pressed(&self, code: i32) -> bool {
        if code == keys::ANY_KEY {
            return self.pressed_key_count > 0;
        }
        usize::try_from(code)
            .ok()
            .and_then(|i| self.pressed_keys.get(i))
            .is_some_and(|bit| *bit)
    }

    pub(crate) fn set_button(&mut self, button: i32, pressed: bool) {
        if let Some(count) = usize::try_from(button)
            .ok()
            .and_then(|i| self.pressed_buttons.get_mut(i))
        {
            *count = if pressed {
                count.saturating_add(1)
            } else {
                count.saturating_sub(1)
            };
        }
    }

    /// Whether a button is pressed, i.e. at least one contact carrying it is
    /// down; codes outside the tracked range read as not pressed.
    pub(crate) fn is_button_pressed(&self, button: i32) -> bool {
        usize::try_from(button)
            .ok()
            .and_then(|i| self.pressed_buttons.get(i))
            .is_some_and(|&count| count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons;

    #[test]
    fn test_key_press_state_and_any_key() {
        let mut snap = Snapshot::new(Orientation::Landscape);
        assert!(!snap.is_key_pressed(keys::ANY_KEY));

        snap.press_key(keys::A);
        snap.press_key(keys::SPACE);
        // A repeated down for an already-pressed key must not skew the count.
        snap.press_key(keys::A);

        assert!(snap.is_key_pressed(keys::A));
        assert!(snap.is_key_pressed(keys::SPACE));
        assert!(!snap.is_key_pressed(keys::B));
        assert!(snap.is_key_pressed(keys::ANY_KEY));

        snap.release_key(keys::A);
        snap.release_key(keys::SPACE);
        assert!(!snap.is_key_pressed(keys::ANY_KEY));
    }

    /// Codes outside the canonical space (other than the wildcard) poll as
    /// not pressed rather than failing.
    #[test]
    fn test_out_of_range_key_polls_false() {
        let snap = Snapshot::new(Orientation::Landscape);
        assert!(!snap.is_key_pressed(-7));
        assert!(!snap.is_key_pressed(300));
    }

    #[test]
    fn test_button_state() {
        let mut snap = Snapshot::new(Orientation::Landscape);
        snap.set_button(buttons::RIGHT, true);
        assert!(snap.is_button_pressed(buttons::RIGHT));
        assert!(!snap.is_button_pressed(buttons::LEFT));

        snap.set_button(buttons::RIGHT, false);
        assert!(!snap.is_button_pressed(buttons::RIGHT));

        // Untracked codes are neutral both ways.
        snap.set_button(250, true);
        assert!(!snap.is_button_pressed(250));
        assert!(!snap.is_button_pressed(-1));
    }

    /// Overlapping contacts carrying the same button: the button stays
    /// pressed until the last of them lifts.
    #[test]
    fn test_button_state_counts_overlapping_contacts() {
        let mut snap = Snapshot::new(Orientation::Landscape);
        snap.set_button(buttons::LEFT, true);
        snap.set_button(buttons::LEFT, true);

        snap.set_button(buttons::LEFT, false);
        assert!(snap.is_button_pressed(buttons::LEFT));
        snap.set_button(buttons::LEFT, false);
        assert!(!snap.is_button_pressed(buttons::LEFT));

        // A stray release with nothing down must not underflow.
        snap.set_button(buttons::LEFT, false);
        assert!(!snap.is_button_pressed(buttons::LEFT));
        snap.set_button(buttons::LEFT, true);
        assert!(snap.is_button_pressed(buttons::LEFT));
    }

    #[test]
    fn test_neutral_sensor_defaults() {
        let snap = Snapshot::new(Orientation::Portrait);
        assert_eq!(snap.accelerometer, (0.0, 0.0, 0.0));
        assert_eq!(snap.rotation.degrees(), 0);
        assert_eq!(snap.native_orientation, Orientation::Portrait);
    }
}
