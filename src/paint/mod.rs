//! Ink-bleed painting over a grid host.
//!
//! [`PaintPropagator`] holds the fill-and-bleed rule. [`PaintHandler`] wraps it
//! in the [`GridEventHandler`] callbacks a host registers at startup.

mod handler;
mod propagator;

pub use handler::{GridEventHandler, PaintHandler, StartupLayout};
pub use propagator::{
    DEFAULT_BLEED_STEP, DEFAULT_MAIN_STEP, MAX_OPACITY, PaintOutcome, PaintPropagator,
    PaintSettings,
};
