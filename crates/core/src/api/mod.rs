//! Document-level API: glyph dumps in, page texts and search results out.
//!
//! # Example
//!
//! ```ignore
//! use glyphtext_core::api::{DocumentText, GlyphDump};
//! use glyphtext_core::AssemblyParams;
//!
//! let dump = GlyphDump::from_reader(std::fs::File::open("dump.json")?)?;
//! let doc = DocumentText::build(&dump, AssemblyParams::default())?;
//! let hit = doc.find_occurrence("Total", 1, &[1, 2, 3]);
//! ```

pub mod document;
pub mod dump;

pub use document::{DocumentInfo, DocumentText};
pub use dump::{GlyphDump, GlyphRecord, PageDump};
