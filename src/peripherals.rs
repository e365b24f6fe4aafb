//! Peripheral availability reporting.
//!
//! Availability is a statement about the device, not about current data: an
//! accelerometer which is present but momentarily idle is still available.
//! Queries for peripherals the backend never reported resolve to `false`,
//! never to an error.

use ::strum::{Display, EnumIter};

/// An optional input/output capability whose presence varies by device.
#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq, Hash)]
pub enum Peripheral {
    /// A physical keyboard. Backends with slide-out keyboards report the
    /// current slide state here rather than mere physical presence, pushing
    /// an availability change whenever the keyboard slides in or out.
    HardwareKeyboard,
    /// A software keyboard which can be shown and hidden on demand.
    OnscreenKeyboard,
    /// A touch screen able to report more than one concurrent contact.
    MultitouchScreen,
    Accelerometer,
    Compass,
    Vibrator,
}

/// The set of peripherals the active backend currently offers.
///
/// Purely a membership set; querying it has no side effects and cannot affect
/// any other component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    available: Vec<Peripheral>,
}

impl CapabilitySet {
    /// An empty set: nothing available. The correct default for headless
    /// backends.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds a set from the given peripherals.
    pub fn of(peripherals: impl IntoIterator<Item = Peripheral>) -> Self {
        let mut set = Self::default();
        for p in peripherals {
            set.set(p, true);
        }
        set
    }

    /// Whether the given peripheral is available.
    pub fn contains(&self, peripheral: Peripheral) -> bool {
        self.available.contains(&peripheral)
    }

    /// Marks a peripheral available or unavailable. Idempotent.
    pub fn set(&mut self, peripheral: Peripheral, available: bool) {
        if available {
            if !self.available.contains(&peripheral) {
                self.available.push(peripheral);
            }
        } else {
            self.available.retain(|&p| p != peripheral);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::strum::IntoEnumIterator;

    #[test]
    fn test_empty_set_reports_false_for_everything() {
        let set = CapabilitySet::none();
        for p in Peripheral::iter() {
            assert!(!set.contains(p), "{p} unexpectedly available");
        }
    }

    #[test]
    fn test_membership_and_toggling() {
        let mut set = CapabilitySet::of([Peripheral::Vibrator, Peripheral::Accelerometer]);
        assert!(set.contains(Peripheral::Vibrator));
        assert!(!set.contains(Peripheral::Compass));

        // Slide-out keyboard: availability flips with the slide state.
        set.set(Peripheral::HardwareKeyboard, true);
        assert!(set.contains(Peripheral::HardwareKeyboard));
        set.set(Peripheral::HardwareKeyboard, false);
        assert!(!set.contains(Peripheral::HardwareKeyboard));

        // Redundant updates are harmless.
        set.set(Peripheral::Vibrator, true);
        set.set(Peripheral::Vibrator, true);
        set.set(Peripheral::Vibrator, false);
        assert!(!set.contains(Peripheral::Vibrator));
    }
}
