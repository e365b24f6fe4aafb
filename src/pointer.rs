//! Pointer-slot tracking for concurrent touch/mouse contacts.
//!
//! Each concurrent contact occupies one slot in a fixed-size arena. Slot
//! indices are stable for the lifetime of a contact: lifting one finger never
//! renumbers the others, and a newly pressed contact always takes the lowest
//! free index. The arena is exclusively mutated by the dispatcher on receipt
//! of down/up/drag events; applications only ever read it.

use ::tracing::trace;

use crate::errors::{Error, Result};

/// One contact point: current position, previous position (for deltas), and
/// occupancy. Coordinates are screen-space with the origin at the top left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Slot {
    x: i32,
    y: i32,
    prev_x: i32,
    prev_y: i32,
    pressed: bool,
}

/// Fixed-size arena of pointer slots.
///
/// The slot count is backend-defined: the maximum number of concurrent
/// contacts the underlying device can report. A desktop mouse backend uses a
/// single slot; multi-touch backends typically use ten or twenty.
#[derive(Debug)]
pub struct PointerArena {
    slots: Vec<Slot>,
}

impl PointerArena {
    /// Creates an arena with `max_pointers` slots, all free.
    pub(crate) fn new(max_pointers: usize) -> Self {
        // Even a pathological backend declaring zero pointers gets one slot,
        // so that the pointer-0 polling shorthands stay well-defined.
        let slots = vec![Slot::default(); max_pointers.max(1)];
        Self { slots }
    }

    /// Number of slots in the arena.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` if no contact is currently pressed.
    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(|s| s.pressed)
    }

    /// Begins a new contact at the lowest free slot and returns its index.
    /// Both current and previous positions start at the touch point, so the
    /// initial delta is zero.
    ///
    /// # Errors
    ///
    /// [`Error::PointerSlotsExhausted`] if every slot is occupied. Backends
    /// must bound their concurrent contact count before emitting events.
    pub(crate) fn begin_contact(&mut self, x: i32, y: i32) -> Result<usize> {
        let index = self
            .slots
            .iter()
            .position(|s| !s.pressed)
            .ok_or(Error::PointerSlotsExhausted {
                max: self.slots.len(),
            })?;

        self.slots[index] = Slot {
            x,
            y,
            prev_x: x,
            prev_y: y,
            pressed: true,
        };
        trace!(index, x, y, "pointer contact began");
        Ok(index)
    }

    /// Moves an occupied contact: previous ← current, current ← new.
    ///
    /// A drag report for a free or out-of-range slot is ignored; stale drags
    /// can legitimately trail an up event in the same batch.
    pub(crate) fn move_contact(&mut self, index: usize, x: i32, y: i32) {
        match self.slots.get_mut(index) {
            Some(slot) if slot.pressed => {
                slot.prev_x = slot.x;
                slot.prev_y = slot.y;
                slot.x = x;
                slot.y = y;
            }
            _ => trace!(index, "ignoring drag for free pointer slot"),
        }
    }

    /// Ends a contact. The slot becomes free and its index is immediately
    /// eligible for reuse; no other slot is disturbed. The final position is
    /// retained for post-release polling.
    pub(crate) fn end_contact(&mut self, index: usize, x: i32, y: i32) {
        match self.slots.get_mut(index) {
            Some(slot) if slot.pressed => {
                slot.prev_x = slot.x;
                slot.prev_y = slot.y;
                slot.x = x;
                slot.y = y;
                slot.pressed = false;
                trace!(index, x, y, "pointer contact ended");
            }
            _ => trace!(index, "ignoring up for free pointer slot"),
        }
    }

    /// Updates the position of slot 0 without touching its occupancy. Used
    /// for hover-style mouse movement on desktop backends, where the pointer
    /// position is meaningful even when no button is down.
    pub(crate) fn hover(&mut self, x: i32, y: i32) {
        let slot = &mut self.slots[0];
        slot.prev_x = slot.x;
        slot.prev_y = slot.y;
        slot.x = x;
        slot.y = y;
    }

    /// Whether the given slot currently holds a pressed contact. Out-of-range
    /// indices read as not pressed.
    pub fn is_pressed(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.pressed)
    }

    /// Current x coordinate of the given slot; `0` for out-of-range indices.
    pub fn x(&self, index: usize) -> i32 {
        self.slots.get(index).map_or(0, |s| s.x)
    }

    /// Current y coordinate of the given slot; `0` for out-of-range indices.
    pub fn y(&self, index: usize) -> i32 {
        self.slots.get(index).map_or(0, |s| s.y)
    }

    /// Difference between the current and previous x coordinate of the slot.
    pub fn delta_x(&self, index: usize) -> i32 {
        self.slots.get(index).map_or(0, |s| s.x - s.prev_x)
    }

    /// Difference between the current and previous y coordinate of the slot.
    pub fn delta_y(&self, index: usize) -> i32 {
        self.slots.get(index).map_or(0, |s| s.y - s.prev_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::pretty_assertions::assert_eq;

    /// Lifting a middle finger must not renumber its neighbours, and the
    /// freed index must be the one handed to the next new contact.
    #[test]
    fn test_slot_reuse_keeps_neighbours_stable() {
        let mut arena = PointerArena::new(4);

        assert_eq!(arena.begin_contact(10, 10).unwrap(), 0);
        assert_eq!(arena.begin_contact(20, 20).unwrap(), 1);
        assert_eq!(arena.begin_contact(30, 30).unwrap(), 2);

        arena.end_contact(1, 20, 20);
        assert!(arena.is_pressed(0));
        assert!(!arena.is_pressed(1));
        assert!(arena.is_pressed(2));
        assert_eq!(arena.x(0), 10);
        assert_eq!(arena.x(2), 30);

        // The next contact takes the lowest free index, which is 1 again.
        assert_eq!(arena.begin_contact(40, 40).unwrap(), 1);
        assert_eq!(arena.x(0), 10);
        assert_eq!(arena.x(1), 40);
        assert_eq!(arena.x(2), 30);
    }

    #[test]
    fn test_exhausted_arena_rejects_new_contacts() {
        let mut arena = PointerArena::new(2);
        arena.begin_contact(0, 0).unwrap();
        arena.begin_contact(1, 1).unwrap();

        assert_eq!(
            arena.begin_contact(2, 2),
            Err(Error::PointerSlotsExhausted { max: 2 })
        );
        // Established contacts are untouched by the rejection.
        assert!(arena.is_pressed(0) && arena.is_pressed(1));
    }

    /// Drag shifts previous ← current so the delta reflects exactly the last
    /// movement; a fresh contact always has a zero delta.
    #[test]
    fn test_drag_delta() {
        let mut arena = PointerArena::new(1);
        let p = arena.begin_contact(10, 10).unwrap();
        assert_eq!((arena.delta_x(p), arena.delta_y(p)), (0, 0));

        arena.move_contact(p, 15, 12);
        assert_eq!((arena.x(p), arena.y(p)), (15, 12));
        assert_eq!((arena.delta_x(p), arena.delta_y(p)), (5, 2));

        arena.move_contact(p, 15, 13);
        assert_eq!((arena.delta_x(p), arena.delta_y(p)), (0, 1));
    }

    #[test]
    fn test_out_of_range_reads_are_neutral() {
        let arena = PointerArena::new(2);
        assert!(!arena.is_pressed(7));
        assert_eq!(arena.x(7), 0);
        assert_eq!(arena.delta_y(7), 0);
    }

    #[test]
    fn test_stale_events_for_free_slots_are_ignored() {
        let mut arena = PointerArena::new(2);
        let p = arena.begin_contact(5, 5).unwrap();
        arena.end_contact(p, 6, 6);

        arena.move_contact(p, 99, 99);
        arena.end_contact(p, 99, 99);
        assert_eq!((arena.x(p), arena.y(p)), (6, 6));
        assert!(!arena.is_pressed(p));
    }

    /// Hover updates position and delta for slot 0 without creating a
    /// contact.
    #[test]
    fn test_hover_does_not_press() {
        let mut arena = PointerArena::new(1);
        arena.hover(100, 50);
        arena.hover(110, 55);

        assert!(!arena.is_pressed(0));
        assert!(arena.is_empty());
        assert_eq!((arena.x(0), arena.y(0)), (110, 55));
        assert_eq!((arena.delta_x(0), arena.delta_y(0)), (10, 5));
    }
}
