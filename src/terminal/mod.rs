//! Terminal module: The display backend behind the widget layer.
//!
//! Provides surface presentation (single-write ANSI frames), an input
//! event poll, and a frame-rate throttle, all synchronous on the caller's
//! thread.

mod display;
mod output;

pub use display::{Display, DisplayConfig, Event, KeyCode, KeyModifiers};
pub use output::OutputBuffer;
