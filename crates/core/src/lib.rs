//! glyphtext - page text reconstruction from positioned glyphs.
//!
//! A PDF renderer reports glyphs in drawing order, each with a baseline and
//! a bounding box. This crate groups them by direction, assembles them into
//! lines and words, and answers two queries on the result: which text lies
//! inside a rectangle, and where a given string occurs.

pub mod api;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod page;
pub mod search;
pub mod utils;

pub use api::{DocumentInfo, DocumentText, GlyphDump, GlyphRecord, PageDump};
pub use error::{Result, TextError};
pub use geometry::{PageGeometry, Rotation};
pub use layout::bidi::fix_visual_order;
pub use layout::{AssemblyParams, GlyphEvent, TextLine, Word};
pub use page::{PageText, PageTextBuilder, build_page_text};
pub use search::Match;
pub use utils::{Point, Rect};
