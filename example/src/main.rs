//! A headless demonstration of the input core.
//!
//! A scripted "backend" thread plays the role of a platform driver, pushing
//! key, touch, and sensor events into the shared queue. The main thread runs
//! a miniature render loop: once per frame it drains the queue through the
//! hub, reacts to listener callbacks, and polls the aggregate state, the
//! same structure a real game loop would have.

use ::crossinput::{
    backend::Backend, buttons, hub::InputHub, keys, peripherals::Peripheral, CapabilitySet,
    DriverEvent, EventQueue, InputEvent, InputProcessor, VibrationPattern,
};
use ::std::{sync::Arc, thread, time::Duration};
use ::tracing::info;
use ::tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// A pretend platform driver: multi-touch capable, with a vibrator that just
/// logs what it would do.
struct ScriptedBackend;

impl Backend for ScriptedBackend {
    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::of([Peripheral::MultitouchScreen, Peripheral::Vibrator])
    }

    fn max_pointers(&self) -> usize {
        10
    }

    fn vibrate(&mut self, milliseconds: u64) {
        info!(milliseconds, "backend: vibrating");
    }

    fn vibrate_pattern(&mut self, pattern: &VibrationPattern) {
        info!(?pattern, "backend: vibrating with pattern");
    }

    fn cancel_vibrate(&mut self) {
        info!("backend: vibration canceled");
    }
}

/// Listener that narrates every event it receives.
struct Narrator;

impl InputProcessor for Narrator {
    fn key_down(&mut self, key_code: i32) -> bool {
        info!(name = ?keys::name(key_code), "event: key down");
        true
    }

    fn key_up(&mut self, key_code: i32) -> bool {
        info!(name = ?keys::name(key_code), "event: key up");
        true
    }

    fn touch_down(&mut self, x: i32, y: i32, pointer: usize, _button: i32) -> bool {
        info!(x, y, pointer, "event: touch down");
        true
    }

    fn touch_up(&mut self, x: i32, y: i32, pointer: usize, _button: i32) -> bool {
        info!(x, y, pointer, "event: touch up");
        true
    }

    fn touch_dragged(&mut self, x: i32, y: i32, pointer: usize) -> bool {
        info!(x, y, pointer, "event: touch dragged");
        true
    }
}

/// Feeds a short scripted interaction into the queue, as a real driver
/// thread would feed OS events.
fn drive(queue: Arc<EventQueue>) {
    queue.push(DriverEvent::Accelerometer {
        x: 0.1,
        y: -9.8,
        z: 0.3,
    });

    let script = [
        InputEvent::TouchDown {
            x: 100,
            y: 100,
            button: buttons::LEFT,
        },
        InputEvent::TouchDragged {
            x: 115,
            y: 104,
            pointer: 0,
        },
        InputEvent::KeyDown {
            key_code: keys::SPACE,
        },
        InputEvent::KeyUp {
            key_code: keys::SPACE,
        },
        InputEvent::TouchUp {
            x: 115,
            y: 104,
            pointer: 0,
            button: buttons::LEFT,
        },
    ];

    // Stamped at push time, so the pacing below is visible in the event
    // timestamps.
    for event in script {
        queue.push_input(event);
        thread::sleep(Duration::from_millis(20));
    }
}

fn main() {
    ::tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let queue = Arc::new(EventQueue::new());
    let mut hub = InputHub::new(ScriptedBackend);
    hub.set_processor(Some(Box::new(Narrator)));

    let driver = thread::spawn({
        let queue = queue.clone();
        move || drive(queue)
    });

    // A miniature render loop: drain events, then poll, then "render".
    for frame in 0..10u32 {
        let applied = hub.process(&queue);

        if hub.just_touched() {
            info!(frame, "poll: new touch this frame");
            hub.vibrate(30);
        }
        if hub.is_touched() {
            info!(
                frame,
                x = hub.x(),
                y = hub.y(),
                dx = hub.delta_x(),
                dy = hub.delta_y(),
                "poll: touch position"
            );
        }
        if hub.is_key_pressed(keys::SPACE) {
            info!(frame, "poll: space is held");
        }
        if applied > 0 {
            info!(frame, applied, "frame processed");
        }

        thread::sleep(Duration::from_millis(33));
    }

    driver.join().expect("driver thread panicked");
    info!(
        accelerometer = ?hub.accelerometer(),
        "final sensor state"
    );
}
