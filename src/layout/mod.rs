//! Layout module: Rectangles, anchors, and alignment math.
//!
//! Alignment is a pure computation: given an element size, a target
//! rectangle, an [`Anchor`], and a symmetric padding, [`align`] returns the
//! rectangle at which the element should be composited.

mod anchor;
mod rect;

pub use anchor::{align, Anchor, HAlign};
pub use rect::Rect;
