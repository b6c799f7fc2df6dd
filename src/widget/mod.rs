//! Widget module: Panels, bars, and text composition.
//!
//! Widgets own fixed-size surfaces and implement [`UiElement`]. The
//! alignment family computes where a widget's surface lands on a parent;
//! composition itself is a blit.

mod bar;
mod panel;
mod text;
mod traits;

pub use bar::Bar;
pub use panel::{Panel, DEFAULT_BORDER, DEFAULT_BORDER_WIDTH, DEFAULT_FILL};
pub use text::{render_line, render_multiline, TextStyle};
pub use traits::UiElement;
