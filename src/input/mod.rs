//! Pointer input: events, press state and replay scripts.
//!
//! The host translates its native mouse/touch notifications into
//! [`PointerEvent`]s and keeps the single [`PointerState`] that gates painting.

pub mod events;
pub mod script;
pub mod state;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use script::{ScriptError, parse_drag, parse_script};
pub use state::PointerState;
