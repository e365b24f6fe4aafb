//! The input hub: ordered event dispatch, per-frame polling, and auxiliary
//! controls, unified behind one object.
//!
//! # Two Consumption Styles
//!
//! Applications consume input in two competing ways. A typical game loop has
//! a well-defined place in its update step where it asks "is this key down
//! right now" and acts for the next render; other code (menus, text fields)
//! wants every discrete occurrence, in order, exactly once. The hub serves
//! both from a single stream: each driver event first updates the pollable
//! state, then is forwarded to the installed [`InputProcessor`], so polling
//! from inside a listener callback already observes that event.
//!
//! # Threading
//!
//! The hub is single-threaded by design. Backends capture raw OS input on
//! whatever thread the platform dictates and park it in an [`EventQueue`];
//! the render loop calls [`InputHub::process`] once per frame, strictly
//! before rendering, on the one thread that owns the hub. Nothing here
//! blocks, suspends, or performs I/O.
//!
//! # Example
//!
//! ```
//! use ::crossinput::{backend::NullBackend, hub::InputHub, keys, EventQueue, InputEvent};
//!
//! let queue = EventQueue::new();
//! let mut hub = InputHub::new(NullBackend::new());
//!
//! // A backend thread would normally do this.
//! queue.push_input(InputEvent::KeyDown { key_code: keys::SPACE });
//!
//! // Once per frame, ahead of rendering:
//! hub.process(&queue);
//! assert!(hub.is_key_pressed(keys::SPACE));
//! ```

use ::std::collections::HashMap;
use ::tap::Pipe;
use ::tracing::{debug, trace, warn};

use crate::{
    backend::Backend,
    cursor::CursorImage,
    errors::{Error, Result},
    events::{InputEvent, InputProcessor},
    peripherals::{CapabilitySet, Peripheral},
    pointer::PointerArena,
    queue::{DriverEvent, EventQueue},
    snapshot::{Orientation, Rotation, Snapshot},
    text::{TextInputListener, TextInputRequest, TextPrompt, TextRequestId},
    vibration::VibrationPattern,
};

/// The central input object: owns the pollable state, dispatches events to
/// the registered listener, and forwards auxiliary requests to the backend.
pub struct InputHub {
    backend: Box<dyn Backend>,
    capabilities: CapabilitySet,
    pointers: PointerArena,
    snapshot: Snapshot,
    processor: Option<Box<dyn InputProcessor>>,
    /// Listeners parked until their text-input dialog completes.
    pending_text: HashMap<TextRequestId, Box<dyn TextInputListener>>,
    next_text_request: u64,
    cursor_catched: bool,
    catch_back_key: bool,
    catch_menu_key: bool,
}

impl InputHub {
    /// Builds a hub over the given backend. The pointer arena is sized to the
    /// backend's declared maximum concurrent contact count, and the initial
    /// capability set is taken from the backend.
    pub fn new(backend: impl Backend + 'static) -> Self {
        let capabilities = backend.capabilities();
        let pointers = backend.max_pointers().pipe(PointerArena::new);
        debug!(pointers = pointers.len(), "creating input hub");

        Self {
            backend: Box::new(backend),
            capabilities,
            pointers,
            snapshot: Snapshot::new(Orientation::default()),
            processor: None,
            pending_text: HashMap::new(),
            next_text_request: 0,
            cursor_catched: false,
            catch_back_key: false,
            catch_menu_key: false,
        }
    }

    // ---- event ingestion ---------------------------------------------------

    /// Begins a new processing cycle. Clears the per-cycle "just touched"
    /// transition flag. [`process`] calls this automatically; call it
    /// directly only when pushing events by hand.
    ///
    /// [`process`]: Self::process
    pub fn start_cycle(&mut self) {
        self.snapshot.just_touched = false;
    }

    /// Drains the handoff queue for this frame: starts a cycle, then pushes
    /// every queued event in order. Call once per frame on the render-loop
    /// thread, strictly before rendering.
    ///
    /// An event which violates a backend contract (exhausted pointer slots,
    /// an out-of-range key code) is logged and dropped; the rest of the batch
    /// still processes. Returns the number of events applied.
    pub fn process(&mut self, queue: &EventQueue) -> usize {
        self.start_cycle();

        let mut applied = 0;
        for event in queue.take() {
            match self.push(event) {
                Ok(()) => applied += 1,
                Err(err) => warn!(%err, "dropping event which violated a backend contract"),
            }
        }
        applied
    }

    /// Applies a single driver event: updates internal state and, for input
    /// events, forwards it synchronously to the installed processor.
    /// Sensor, orientation, capability, and text-completion events only ever
    /// touch internal state.
    ///
    /// Dispatch runs to completion on the calling thread; events are never
    /// buffered, reordered, or delivered late.
    ///
    /// # Errors
    ///
    /// - [`Error::KeyCodeOutOfRange`] for a key event outside `[0, 255]`.
    /// - [`Error::PointerSlotsExhausted`] for a touch-down with every slot
    ///   occupied.
    ///
    /// In both cases no state changes and nothing is forwarded.
    pub fn push(&mut self, event: DriverEvent) -> Result<()> {
        match event {
            DriverEvent::Input { event, time_ns } => {
                // The listener must observe the event's own timestamp, so it
                // is applied before dispatch and rolled back on rejection.
                let previous = self.snapshot.event_time_ns;
                self.snapshot.event_time_ns = time_ns;
                self.dispatch(event).map_err(|err| {
                    self.snapshot.event_time_ns = previous;
                    err
                })
            }
            DriverEvent::Accelerometer { x, y, z } => {
                self.snapshot.accelerometer = (x, y, z);
                Ok(())
            }
            DriverEvent::Orientation {
                azimuth,
                pitch,
                roll,
            } => {
                self.snapshot.azimuth = azimuth;
                self.snapshot.pitch = pitch;
                self.snapshot.roll = roll;
                Ok(())
            }
            DriverEvent::Rotation(rotation) => {
                self.snapshot.rotation = rotation;
                Ok(())
            }
            DriverEvent::NativeOrientation(orientation) => {
                self.snapshot.native_orientation = orientation;
                Ok(())
            }
            DriverEvent::PeripheralChanged {
                peripheral,
                available,
            } => {
                debug!(%peripheral, available, "peripheral availability changed");
                self.capabilities.set(peripheral, available);
                Ok(())
            }
            DriverEvent::TextInput { id, text } => {
                self.complete_text_input(id, text);
                Ok(())
            }
        }
    }

    fn dispatch(&mut self, event: InputEvent) -> Result<()> {
        trace!(?event, "dispatching input event");

        match event {
            InputEvent::KeyDown { key_code } => {
                Self::check_key_code(key_code)?;
                self.snapshot.press_key(key_code);
                self.forward(|p| p.key_down(key_code));
            }
            InputEvent::KeyUp { key_code } => {
                Self::check_key_code(key_code)?;
                self.snapshot.release_key(key_code);
                self.forward(|p| p.key_up(key_code));
            }
            InputEvent::KeyTyped { character } => {
                self.forward(|p| p.key_typed(character));
            }
            InputEvent::TouchDown { x, y, button } => {
                let pointer = self.pointers.begin_contact(x, y)?;
                self.snapshot.just_touched = true;
                self.snapshot.set_button(button, true);
                self.forward(|p| p.touch_down(x, y, pointer, button));
            }
            InputEvent::TouchUp {
                x,
                y,
                pointer,
                button,
            } => {
                self.pointers.end_contact(pointer, x, y);
                self.snapshot.set_button(button, false);
                self.forward(|p| p.touch_up(x, y, pointer, button));
            }
            InputEvent::TouchDragged { x, y, pointer } => {
                self.pointers.move_contact(pointer, x, y);
                self.forward(|p| p.touch_dragged(x, y, pointer));
            }
            InputEvent::MouseMoved { x, y } => {
                self.pointers.hover(x, y);
                self.forward(|p| p.mouse_moved(x, y));
            }
            InputEvent::Scrolled { amount } => {
                self.forward(|p| p.scrolled(amount));
            }
        }

        Ok(())
    }

    fn forward(&mut self, call: impl FnOnce(&mut dyn InputProcessor) -> bool) {
        if let Some(processor) = self.processor.as_deref_mut() {
            let handled = call(processor);
            trace!(handled, "forwarded event to processor");
        }
    }

    fn check_key_code(key_code: i32) -> Result<()> {
        if (0..=255).contains(&key_code) {
            Ok(())
        } else {
            Err(Error::KeyCodeOutOfRange(key_code))
        }
    }

    fn complete_text_input(&mut self, id: TextRequestId, text: Option<String>) {
        match self.pending_text.remove(&id) {
            Some(mut listener) => match text {
                Some(text) => listener.input(&text),
                None => listener.canceled(),
            },
            None => warn!(?id, "text input completion for unknown request"),
        }
    }

    // ---- listener registration ---------------------------------------------

    /// Installs (or, with `None`, removes) the event listener. Takes effect
    /// immediately: events pushed earlier went to the previous listener and
    /// events pushed later go to this one, never both and never neither.
    pub fn set_processor(&mut self, processor: Option<Box<dyn InputProcessor>>) {
        self.processor = processor;
    }

    /// The currently installed listener, if any.
    pub fn processor(&self) -> Option<&dyn InputProcessor> {
        self.processor.as_deref()
    }

    // ---- polling -----------------------------------------------------------

    /// Whether the key is currently pressed. [`keys::ANY_KEY`] matches any
    /// pressed key; other codes outside `[0, 255]` read as not pressed.
    ///
    /// [`keys::ANY_KEY`]: crate::keys::ANY_KEY
    pub fn is_key_pressed(&self, key_code: i32) -> bool {
        self.snapshot.is_key_pressed(key_code)
    }

    /// Whether the mouse button is currently pressed. Constants live in
    /// [`buttons`]; touch-only backends report every contact as the left
    /// button.
    ///
    /// [`buttons`]: crate::buttons
    pub fn is_button_pressed(&self, button: i32) -> bool {
        self.snapshot.is_button_pressed(button)
    }

    /// Whether any pointer is currently in contact.
    pub fn is_touched(&self) -> bool {
        !self.pointers.is_empty()
    }

    /// Whether the given pointer slot is currently in contact.
    pub fn is_pointer_touched(&self, pointer: usize) -> bool {
        self.pointers.is_pressed(pointer)
    }

    /// `true` only during the processing cycle which contained a touch-down
    /// transition; reset at the start of every cycle.
    pub fn just_touched(&self) -> bool {
        self.snapshot.just_touched
    }

    /// Current x coordinate of pointer 0, in screen coordinates with the
    /// origin at the top left.
    pub fn x(&self) -> i32 {
        self.x_of(0)
    }

    /// Current x coordinate of the given pointer slot.
    pub fn x_of(&self, pointer: usize) -> i32 {
        self.pointers.x(pointer)
    }

    /// Current y coordinate of pointer 0.
    pub fn y(&self) -> i32 {
        self.y_of(0)
    }

    /// Current y coordinate of the given pointer slot.
    pub fn y_of(&self, pointer: usize) -> i32 {
        self.pointers.y(pointer)
    }

    /// Movement of pointer 0 along x since its previous reported position.
    pub fn delta_x(&self) -> i32 {
        self.delta_x_of(0)
    }

    /// Movement of the given pointer along x since its previous position.
    pub fn delta_x_of(&self, pointer: usize) -> i32 {
        self.pointers.delta_x(pointer)
    }

    /// Movement of pointer 0 along y since its previous reported position.
    pub fn delta_y(&self) -> i32 {
        self.delta_y_of(0)
    }

    /// Movement of the given pointer along y since its previous position.
    pub fn delta_y_of(&self, pointer: usize) -> i32 {
        self.pointers.delta_y(pointer)
    }

    /// Latest accelerometer sample as `(x, y, z)`, each axis nominally
    /// within [-10, 10]. All zero when no accelerometer is available.
    pub fn accelerometer(&self) -> (f32, f32, f32) {
        self.snapshot.accelerometer
    }

    /// Orientation angle around the z-axis, in degrees.
    pub fn azimuth(&self) -> f32 {
        self.snapshot.azimuth
    }

    /// Orientation angle around the x-axis, in degrees.
    pub fn pitch(&self) -> f32 {
        self.snapshot.pitch
    }

    /// Orientation angle around the y-axis, in degrees.
    pub fn roll(&self) -> f32 {
        self.snapshot.roll
    }

    /// Rotation of the device relative to its native orientation.
    pub fn rotation(&self) -> Rotation {
        self.snapshot.rotation
    }

    /// The native orientation of the device's display panel.
    pub fn native_orientation(&self) -> Orientation {
        self.snapshot.native_orientation
    }

    /// Timestamp, in nanoseconds, of the event currently reported to the
    /// processor (or of the most recently processed input event).
    pub fn current_event_time(&self) -> u64 {
        self.snapshot.event_time_ns
    }

    /// Whether the given peripheral is available on the active backend.
    /// Unsupported peripherals answer `false`; the query never fails and has
    /// no side effects.
    pub fn is_peripheral_available(&self, peripheral: Peripheral) -> bool {
        self.capabilities.contains(peripheral)
    }

    // ---- auxiliary controls ------------------------------------------------

    /// Vibrates for the given number of milliseconds. Fire-and-forget; a
    /// vibration already in progress is superseded, not queued. A no-op on
    /// backends without a vibrator.
    pub fn vibrate(&mut self, milliseconds: u64) {
        self.backend.vibrate(milliseconds);
    }

    /// Vibrates with an alternating on/off pattern. `steps[0]` is the delay
    /// before the vibrator first turns on; `repeat` is the index at which to
    /// restart the pattern, or `-1` to play it once.
    ///
    /// # Errors
    ///
    /// [`Error::RepeatIndexOutOfRange`] if `repeat` lies outside
    /// `[-1, steps.len() - 1]`. Nothing is forwarded to the backend.
    pub fn vibrate_pattern(&mut self, steps: Vec<u64>, repeat: i32) -> Result<()> {
        let pattern = VibrationPattern::new(steps, repeat)?;
        self.backend.vibrate_pattern(&pattern);
        Ok(())
    }

    /// Stops the vibrator. Always succeeds, including when nothing is
    /// vibrating.
    pub fn cancel_vibrate(&mut self) {
        self.backend.cancel_vibrate();
    }

    /// Confines the cursor to the window and hides it, or releases it.
    /// Idempotent; [`is_cursor_catched`] reflects the requested state
    /// immediately.
    ///
    /// [`is_cursor_catched`]: Self::is_cursor_catched
    pub fn set_cursor_catched(&mut self, catched: bool) {
        self.cursor_catched = catched;
        self.backend.set_cursor_catched(catched);
    }

    /// Whether the cursor is currently catched.
    pub fn is_cursor_catched(&self) -> bool {
        self.cursor_catched
    }

    /// Warps the cursor to the given window coordinates, origin top-left.
    pub fn set_cursor_position(&mut self, x: i32, y: i32) {
        self.backend.set_cursor_position(x, y);
    }

    /// Sets a custom cursor image, or restores the system default with
    /// `None` (hotspot coordinates are ignored in that case).
    ///
    /// # Errors
    ///
    /// [`Error::HotspotOutOfBounds`] if the hotspot does not address a pixel
    /// of the image. Malformed images cannot occur here: [`CursorImage`] is
    /// validated at construction.
    pub fn set_cursor_image(
        &mut self,
        image: Option<&CursorImage>,
        x_hotspot: u32,
        y_hotspot: u32,
    ) -> Result<()> {
        if let Some(image) = image {
            image.check_hotspot(x_hotspot, y_hotspot)?;
        }
        self.backend.set_cursor_image(image, x_hotspot, y_hotspot);
        Ok(())
    }

    /// Shows or hides the on-screen keyboard, where one exists.
    pub fn set_onscreen_keyboard_visible(&mut self, visible: bool) {
        self.backend.set_onscreen_keyboard_visible(visible);
    }

    // ---- text input --------------------------------------------------------

    /// Requests a text-input dialog with editable initial text. The call
    /// returns immediately; exactly one of the listener's callbacks fires
    /// exactly once, during a later [`process`] cycle, on the render-loop
    /// thread. It never fires synchronously within this call.
    ///
    /// [`process`]: Self::process
    pub fn get_text_input(
        &mut self,
        listener: Box<dyn TextInputListener>,
        title: &str,
        text: &str,
    ) -> TextRequestId {
        self.request_text(listener, title, TextPrompt::Initial(text.to_owned()))
    }

    /// As [`get_text_input`], but the message is shown as a greyed-out
    /// placeholder rather than editable text.
    ///
    /// [`get_text_input`]: Self::get_text_input
    pub fn get_placeholder_text_input(
        &mut self,
        listener: Box<dyn TextInputListener>,
        title: &str,
        placeholder: &str,
    ) -> TextRequestId {
        self.request_text(
            listener,
            title,
            TextPrompt::Placeholder(placeholder.to_owned()),
        )
    }

    fn request_text(
        &mut self,
        listener: Box<dyn TextInputListener>,
        title: &str,
        prompt: TextPrompt,
    ) -> TextRequestId {
        let id = TextRequestId(self.next_text_request);
        self.next_text_request += 1;
        self.pending_text.insert(id, listener);

        debug!(?id, title, "requesting text input dialog");
        self.backend.request_text_input(TextInputRequest {
            id,
            title: title.to_owned(),
            prompt,
        });
        id
    }

    // ---- catch-key flags ---------------------------------------------------

    /// Whether the hardware BACK key is caught by the application instead of
    /// performing its system action. No effect on backends without one.
    pub fn set_catch_back_key(&mut self, catch: bool) {
        self.catch_back_key = catch;
    }

    /// Whether the BACK key is currently caught.
    pub fn is_catch_back_key(&self) -> bool {
        self.catch_back_key
    }

    /// Whether the hardware MENU key is caught by the application. No effect
    /// on backends without one.
    pub fn set_catch_menu_key(&mut self, catch: bool) {
        self.catch_menu_key = catch;
    }

    /// Whether the MENU key is currently caught.
    pub fn is_catch_menu_key(&self) -> bool {
        self.catch_menu_key
    }
}
