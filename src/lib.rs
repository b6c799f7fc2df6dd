//! # Panelkit
//!
//! Rectangle-aligned panel widgets for terminal UIs.
//!
//! Panelkit is a thin widget layer over a cell-buffer surface model:
//! panels and bars own fixed-size surfaces, a nine-anchor alignment
//! vocabulary computes where a surface lands on its parent, and
//! composition is a blit.
//!
//! ## Core Concepts
//!
//! - **Surfaces**: a [`Buffer`] of [`Cell`]s with fill, stroke, text, and
//!   blit operations
//! - **Anchors**: `center`, edge midpoints, and corners, with symmetric
//!   padding that moves but never resizes
//! - **Panels**: fill + border + anchored single/multi-line text
//! - **Display**: a synchronous crossterm backend with a frame throttle
//!
//! ## Example
//!
//! ```rust
//! use panelkit::{Anchor, Panel, Rect, Rgb, TextStyle};
//!
//! let mut panel = Panel::new(40, 10);
//! panel.apply_default_style();
//! panel.add_text("hello", &TextStyle::new(Rgb::BLACK), Anchor::Center, 1);
//!
//! // Where does this panel land, centered on an 80x24 parent?
//! let at = panel.center_of(Rect::from_size(80, 24), 0);
//! assert_eq!((at.width, at.height), (40, 10));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
mod error;
pub mod layout;
pub mod screen;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, Modifiers, Rgb};
pub use error::UiError;
pub use layout::{align, Anchor, HAlign, Rect};
pub use screen::TestScreen;
pub use terminal::{Display, DisplayConfig, Event, KeyCode, KeyModifiers};
pub use widget::{Bar, Panel, TextStyle, UiElement};
