//! Crate-specific error and result types.
//!
//! Only *precondition violations* surface as [`Error`] values: an out-of-range
//! key code, a malformed cursor image, a vibration repeat index outside the
//! pattern, or a touch-down with every pointer slot occupied. Peripherals that
//! a backend does not support never produce errors; those calls resolve to a
//! neutral result (`false` or a no-op) instead. Lookup misses (an unmapped key
//! code, an unknown key name) resolve to an absent value, not an error.
//!
//! No error in this crate is fatal: the worst case is a rejected request.

/// Result type returned by fallible operations in this crate.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Error type for contract violations by callers or backend drivers.
#[derive(Clone, Debug, PartialEq, Eq, ::thiserror::Error)]
pub enum Error {
    /// A key code outside the canonical `[0, 255]` space was passed where a
    /// concrete code is required.
    #[error("key code {0} is outside the valid range 0..=255")]
    KeyCodeOutOfRange(i32),

    /// A touch-down event arrived while every pointer slot was occupied. The
    /// backend must enforce its own maximum concurrent contact count before
    /// emitting events.
    #[error("no free pointer slot for touch down ({max} contacts already active)")]
    PointerSlotsExhausted {
        /// Size of the pointer arena, as declared by the backend.
        max: usize,
    },

    /// A vibration pattern repeat index was outside `[-1, len - 1]`.
    #[error("repeat index {index} is invalid for a pattern of {len} entries")]
    RepeatIndexOutOfRange {
        /// The rejected repeat index.
        index: i32,
        /// Length of the vibration pattern.
        len: usize,
    },

    /// A cursor image had a width or height which was zero or not a power of
    /// two, or a pixel buffer whose length disagreed with its dimensions.
    #[error(
        "cursor image {width}x{height} with {bytes} bytes violates the RGBA8888 \
         power-of-two contract"
    )]
    CursorImageSize {
        /// Declared image width in pixels.
        width: u32,
        /// Declared image height in pixels.
        height: u32,
        /// Length of the supplied pixel buffer.
        bytes: usize,
    },

    /// A cursor image contained a pixel whose alpha channel was neither fully
    /// opaque (`0xFF`) nor fully transparent (`0x00`).
    #[error("cursor image pixel {pixel} has non-binary alpha {alpha:#04x}")]
    CursorImageAlpha {
        /// Index of the first offending pixel.
        pixel: usize,
        /// The offending alpha value.
        alpha: u8,
    },

    /// A cursor hotspot lay outside the image bounds.
    #[error("cursor hotspot ({x}, {y}) lies outside a {width}x{height} image")]
    HotspotOutOfBounds {
        /// Hotspot x coordinate, origin top-left.
        x: u32,
        /// Hotspot y coordinate, origin top-left.
        y: u32,
        /// Cursor image width in pixels.
        width: u32,
        /// Cursor image height in pixels.
        height: u32,
    },
}
