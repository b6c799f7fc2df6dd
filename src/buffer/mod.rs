//! Buffer module: Cell-grid surfaces for panel composition.
//!
//! This module contains:
//! - [`Cell`]: The atomic unit of display
//! - [`Buffer`]: A fixed-size grid of cells acting as a drawable surface
//! - [`Rgb`]: True-color representation, including the panel palette
//! - [`Modifiers`]: Text style bitflags

#[allow(clippy::module_inception)]
mod buffer;
mod cell;

pub use buffer::Buffer;
pub use cell::{Cell, Modifiers, Rgb};
