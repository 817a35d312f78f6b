//! Value types produced by line assembly.

pub mod glyph;
pub mod textline;

pub use glyph::{Axis, GlyphEvent, ReadingFrame};
pub use textline::{TextLine, Word};
