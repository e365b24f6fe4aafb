//! Cross-thread handoff of driver events.
//!
//! Backends may capture raw OS input on whatever thread the platform demands,
//! but the hub mutates its state only on the render-loop thread. The
//! [`EventQueue`] is the seam between the two: producers push from any thread;
//! the render loop drains the whole queue once per frame via
//! [`InputHub::process`]. Events come out in exactly the order they went in.
//!
//! Only the producer side is thread-safe by contract; draining from more than
//! one thread would violate the single-consumer discipline the hub relies on.
//!
//! [`InputHub::process`]: crate::hub::InputHub::process

use ::parking_lot::Mutex;
use ::std::time::Instant;

use crate::{
    events::InputEvent,
    peripherals::Peripheral,
    snapshot::{Orientation, Rotation},
    text::TextRequestId,
};

/// Everything a backend driver can push into the core.
///
/// `Input` events update pollable state *and* reach the listener; the
/// remaining variants update the snapshot (or complete a pending request) and
/// are never forwarded.
#[derive(Clone, Debug, PartialEq)]
pub enum DriverEvent {
    /// A discrete input event, stamped with a monotonic timestamp in
    /// nanoseconds.
    Input { event: InputEvent, time_ns: u64 },
    /// A fresh accelerometer sample, per-axis within [-10, 10].
    Accelerometer { x: f32, y: f32, z: f32 },
    /// Updated orientation angles, in degrees.
    Orientation {
        azimuth: f32,
        pitch: f32,
        roll: f32,
    },
    /// The device rotated relative to its native orientation.
    Rotation(Rotation),
    /// The native orientation was (re-)detected.
    NativeOrientation(Orientation),
    /// A peripheral became available or unavailable.
    PeripheralChanged {
        peripheral: Peripheral,
        available: bool,
    },
    /// A text-input dialog completed. `text` is `None` if the user canceled.
    TextInput {
        id: TextRequestId,
        text: Option<String>,
    },
}

/// Thread-safe FIFO carrying [`DriverEvent`]s from backend threads to the
/// render loop.
pub struct EventQueue {
    events: Mutex<Vec<DriverEvent>>,
    /// Epoch for event timestamps.
    start: Instant,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            start: Instant::now(),
        }
    }

    /// Enqueues an input event, stamping it with the current monotonic time.
    pub fn push_input(&self, event: InputEvent) {
        let time_ns = self.now_ns();
        self.push(DriverEvent::Input { event, time_ns });
    }

    /// Enqueues any driver event as-is.
    pub fn push(&self, event: DriverEvent) {
        self.events.lock().push(event);
    }

    /// Removes and returns every queued event, oldest first.
    pub(crate) fn take(&self) -> Vec<DriverEvent> {
        ::std::mem::take(&mut *self.events.lock())
    }

    /// Nanoseconds elapsed since the queue was created.
    pub fn now_ns(&self) -> u64 {
        self.start.elapsed().as_nanos() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use ::pretty_assertions::assert_eq;

    /// FIFO order survives the drain, and the drain empties the queue.
    #[test]
    fn test_fifo_order() {
        let queue = EventQueue::new();
        queue.push_input(InputEvent::KeyDown { key_code: keys::A });
        queue.push_input(InputEvent::KeyUp { key_code: keys::A });
        queue.push(DriverEvent::Rotation(Rotation::Deg90));

        let drained = queue.take();
        assert_eq!(drained.len(), 3);
        assert!(matches!(
            drained[0],
            DriverEvent::Input {
                event: InputEvent::KeyDown { key_code: keys::A },
                ..
            }
        ));
        assert_eq!(drained[2], DriverEvent::Rotation(Rotation::Deg90));
        assert!(queue.take().is_empty());
    }

    /// Timestamps are monotonic in enqueue order.
    #[test]
    fn test_timestamps_monotonic() {
        let queue = EventQueue::new();
        queue.push_input(InputEvent::Scrolled { amount: 1 });
        queue.push_input(InputEvent::Scrolled { amount: -1 });

        let times: Vec<u64> = queue
            .take()
            .into_iter()
            .map(|e| match e {
                DriverEvent::Input { time_ns, .. } => time_ns,
                _ => unreachable!(),
            })
            .collect();
        assert!(times[0] <= times[1]);
    }

    /// Producers on other threads interleave without loss.
    #[test]
    fn test_concurrent_producers() {
        let queue = ::std::sync::Arc::new(EventQueue::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let queue = queue.clone();
                ::std::thread::spawn(move || {
                    for _ in 0..100 {
                        queue.push_input(InputEvent::Scrolled { amount: 1 });
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(queue.take().len(), 400);
    }
}
