//! The canonical key-code space and its bidirectional name mapping.
//!
//! Key codes are plain integers in `[0, 255]`, decoupled from any OS scan
//! code. Backends translate their native codes into these constants before
//! pushing events, so application code never sees a system-specific value.
//!
//! [`name`] and [`code`] form a stable string encoding for persisted
//! key-bindings: for every code which has a name, `code(name(c)) == c`.

mod codes;
mod table;

pub use codes::*;
pub use table::*;
