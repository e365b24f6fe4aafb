//! Vibration patterns.

use crate::errors::{Error, Result};

/// An ordered on/off vibration schedule.
///
/// The first entry is the delay before the vibrator first turns on; entries
/// then alternate on/off durations, all in milliseconds. A pattern may loop
/// from a chosen entry, or play through once.
///
/// Validated at construction, so backends receive only well-formed patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VibrationPattern {
    steps: Vec<u64>,
    repeat_from: Option<usize>,
}

impl VibrationPattern {
    /// Builds a pattern. `repeat` is the index into `steps` at which looping
    /// restarts, or `-1` to play the pattern exactly once.
    ///
    /// # Errors
    ///
    /// [`Error::RepeatIndexOutOfRange`] if `repeat` lies outside
    /// `[-1, steps.len() - 1]`.
    pub fn new(steps: Vec<u64>, repeat: i32) -> Result<Self> {
        let repeat_from = match repeat {
            -1 => None,
            i if (0..steps.len() as i32).contains(&i) => Some(i as usize),
            _ => {
                return Err(Error::RepeatIndexOutOfRange {
                    index: repeat,
                    len: steps.len(),
                })
            }
        };

        Ok(Self { steps, repeat_from })
    }

    /// The alternating delay/on/off durations, in milliseconds.
    pub fn steps(&self) -> &[u64] {
        &self.steps
    }

    /// The loop restart index, or `None` for a one-shot pattern.
    pub fn repeat_from(&self) -> Option<usize> {
        self.repeat_from
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_one_shot_pattern() {
        let p = VibrationPattern::new(vec![0, 200, 100, 200], -1).unwrap();
        assert_eq!(p.steps(), &[0, 200, 100, 200]);
        assert_eq!(p.repeat_from(), None);
    }

    #[test]
    fn test_looping_pattern() {
        let p = VibrationPattern::new(vec![500, 100, 100], 1).unwrap();
        assert_eq!(p.repeat_from(), Some(1));
    }

    /// The valid repeat range is `[-1, len - 1]`, ends inclusive; everything
    /// outside is rejected.
    #[test]
    fn test_repeat_index_bounds() {
        assert_eq!(
            VibrationPattern::new(vec![0, 100], 2),
            Err(Error::RepeatIndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            VibrationPattern::new(vec![0, 100], -2),
            Err(Error::RepeatIndexOutOfRange { index: -2, len: 2 })
        );
        assert!(VibrationPattern::new(vec![0, 100], 1).is_ok());
        // An empty pattern can only be one-shot.
        assert!(VibrationPattern::new(vec![], -1).is_ok());
        assert!(VibrationPattern::new(vec![], 0).is_err());
    }
}
