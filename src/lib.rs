//! A cross-platform input abstraction core for interactive real-time
//! applications.
//!
//! `crossinput` gives an application one model of keyboard, touch, mouse,
//! sensor, vibration, and cursor state that is identical regardless of the
//! operating system or device class. Platform backends translate raw OS input
//! into canonical [`InputEvent`]s and push them into an [`EventQueue`]; the
//! render loop drains the queue once per frame through an [`InputHub`], which
//! serves the result in two styles at once:
//!
//! * **Polling**: "is the space key down right now", "where is pointer 2",
//!   via pure read accessors which reflect the most recently processed event.
//! * **Events**: discrete occurrences delivered in order, exactly once, to a
//!   single registered [`InputProcessor`], ahead of the frame's render step.
//!
//! Desktop backends report the mouse as a single touch contact; multi-touch
//! backends report up to their device maximum, with pointer-slot indices that
//! stay stable while a contact lasts. Peripherals that may or may not exist
//! (accelerometer, compass, vibrator, keyboards) are discovered through
//! [`Peripheral`] queries which answer `false` rather than fail.
//!
//! This crate performs no I/O of its own: it is the contract between backend
//! drivers on one side and application code on the other.
//!
//! # Example
//!
//! ```
//! use ::crossinput::{
//!     backend::NullBackend, buttons, hub::InputHub, keys, EventQueue, InputEvent,
//! };
//!
//! let queue = EventQueue::new();
//! let mut hub = InputHub::new(NullBackend::new());
//!
//! // A backend driver thread pushes events as the OS reports them.
//! queue.push_input(InputEvent::TouchDown {
//!     x: 120,
//!     y: 80,
//!     button: buttons::LEFT,
//! });
//! queue.push_input(InputEvent::KeyDown {
//!     key_code: keys::SPACE,
//! });
//!
//! // The render loop, once per frame, before drawing:
//! hub.process(&queue);
//!
//! assert!(hub.just_touched());
//! assert!(hub.is_key_pressed(keys::SPACE));
//! assert_eq!((hub.x(), hub.y()), (120, 80));
//! ```
//!
//! # Key-binding persistence
//!
//! [`keys::name`] and [`keys::code`] form a stable string encoding for key
//! codes, suitable for config files: every code with a name round-trips.

pub mod backend;
pub mod buttons;
pub mod cursor;
pub mod errors;
pub mod events;
pub mod hub;
pub mod keys;
pub mod peripherals;
pub mod pointer;
pub mod queue;
pub mod snapshot;
pub mod text;
pub mod vibration;

pub use cursor::CursorImage;
pub use errors::{Error, Result};
pub use events::{InputEvent, InputProcessor};
pub use hub::InputHub;
pub use peripherals::{CapabilitySet, Peripheral};
pub use queue::{DriverEvent, EventQueue};
pub use snapshot::{Orientation, Rotation};
pub use text::{TextInputListener, TextRequestId};
pub use vibration::VibrationPattern;
