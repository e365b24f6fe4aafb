//! Discrete input events and the listener interface.
//!
//! Backends translate raw OS input into [`InputEvent`] values and hand them
//! to the hub, which updates its pollable state and then forwards each event,
//! in order, to the installed [`InputProcessor`]. The processor is the event
//! half of the unified model; applications which only poll never install one.

/// A discrete input occurrence, already translated into canonical key and
/// button codes and screen coordinates (origin top-left).
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A key transitioned to pressed.
    KeyDown { key_code: i32 },
    /// A key transitioned to released.
    KeyUp { key_code: i32 },
    /// A character was produced by key input. Decoupled from [`KeyDown`]:
    /// layouts, dead keys, and IME composition mean there is no 1:1 mapping
    /// between physical keys and typed characters.
    ///
    /// [`KeyDown`]: Self::KeyDown
    KeyTyped { character: char },
    /// A new contact touched down (or a mouse button was pressed). The hub
    /// assigns the pointer slot; backends carry the returned index in the
    /// matching [`TouchDragged`] and [`TouchUp`] events.
    ///
    /// [`TouchDragged`]: Self::TouchDragged
    /// [`TouchUp`]: Self::TouchUp
    TouchDown { x: i32, y: i32, button: i32 },
    /// An existing contact lifted (or a mouse button was released).
    TouchUp {
        x: i32,
        y: i32,
        pointer: usize,
        button: i32,
    },
    /// An existing contact moved while pressed.
    TouchDragged { x: i32, y: i32, pointer: usize },
    /// The mouse moved with no button pressed. Desktop backends only.
    MouseMoved { x: i32, y: i32 },
    /// The scroll wheel turned; positive is towards the user.
    Scrolled { amount: i32 },
}

/// Receiver of ordered input events, invoked once per occurrence ahead of the
/// frame render step.
///
/// At most one processor is installed at a time. Every method returns whether
/// the event was handled, so that applications layering several processors
/// (menus over gameplay, say) can decide whether to propagate; the hub itself
/// does not interpret the return value. All methods default to "not handled",
/// so implementations override only the events they care about.
pub trait InputProcessor {
    /// A key was pressed. `key_code` is one of the [`keys`] constants.
    ///
    /// [`keys`]: crate::keys
    fn key_down(&mut self, key_code: i32) -> bool {
        let _ = key_code;
        false
    }

    /// A key was released.
    fn key_up(&mut self, key_code: i32) -> bool {
        let _ = key_code;
        false
    }

    /// A character was typed.
    fn key_typed(&mut self, character: char) -> bool {
        let _ = character;
        false
    }

    /// A contact touched down. `pointer` is the slot the hub assigned to the
    /// new contact; it stays stable until the matching [`touch_up`].
    ///
    /// [`touch_up`]: Self::touch_up
    fn touch_down(&mut self, x: i32, y: i32, pointer: usize, button: i32) -> bool {
        let _ = (x, y, pointer, button);
        false
    }

    /// A contact lifted.
    fn touch_up(&mut self, x: i32, y: i32, pointer: usize, button: i32) -> bool {
        let _ = (x, y, pointer, button);
        false
    }

    /// A pressed contact moved.
    fn touch_dragged(&mut self, x: i32, y: i32, pointer: usize) -> bool {
        let _ = (x, y, pointer);
        false
    }

    /// The mouse moved without a pressed button.
    fn mouse_moved(&mut self, x: i32, y: i32) -> bool {
        let _ = (x, y);
        false
    }

    /// The scroll wheel turned.
    fn scrolled(&mut self, amount: i32) -> bool {
        let _ = amount;
        false
    }
}
