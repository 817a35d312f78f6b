//! Per-page text structure and its builder.
//!
//! A `PageText` is built once from the complete glyph stream of a page and
//! is read-only afterwards. Queries (rectangle extraction, substring search,
//! rotation detection) are implemented on top of it and never mutate it.

use std::fmt;

use tracing::{debug, trace};
use unicode_normalization::UnicodeNormalization;

use crate::geometry::{PageGeometry, Rotation};
use crate::layout::analysis::{DirectionBuckets, InsertOutcome, LineAssembler};
use crate::layout::params::AssemblyParams;
use crate::layout::types::{GlyphEvent, TextLine};
use crate::utils::{Point, Rect};

/// Characters removed from glyph text before assembly.
pub const WHITE_SPACE: [char; 9] = [
    ' ', '\t', '\n', '\u{B}', '\u{C}', '\r', '\u{A0}', '\u{FEFF}', '\u{200B}',
];

/// First code point of the supplementary planes without useful glyphs.
const UNASSIGNED_PLANES_START: u32 = 0x20000;

/// True for code points that suggest a broken character mapping.
pub fn is_control_code(c: char) -> bool {
    let cp = u32::from(c);
    cp < 32 || cp >= UNASSIGNED_PLANES_START
}

/// Reconstructed text of one page.
#[derive(Debug, Clone)]
pub struct PageText {
    page_number: usize,
    geometry: PageGeometry,
    params: AssemblyParams,
    directions: DirectionBuckets,
    has_glyphs: bool,
    has_control_codes: bool,
}

impl PageText {
    /// 1-based page number.
    pub const fn page_number(&self) -> usize {
        self.page_number
    }

    pub const fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub const fn params(&self) -> &AssemblyParams {
        &self.params
    }

    /// Direction buckets in key order.
    pub const fn directions(&self) -> &DirectionBuckets {
        &self.directions
    }

    /// All lines, bucket by bucket.
    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &TextLine> {
        self.directions.iter().flat_map(|b| b.lines().iter())
    }

    /// True if any renderable glyph was seen, including excluded ones.
    ///
    /// A page without glyphs was most likely printed as an image.
    pub const fn has_glyphs(&self) -> bool {
        self.has_glyphs
    }

    /// True if any glyph carried a control code or an unassigned-plane code point.
    ///
    /// This usually means font subsetting broke the character mapping.
    pub const fn has_control_codes(&self) -> bool {
        self.has_control_codes
    }

    /// Dominant text direction as a unit vector, `None` when no direction dominates.
    pub fn text_direction(&self) -> Option<Point> {
        self.directions.dominant_direction()
    }

    /// Rotation that turns the dominant text direction upright.
    pub fn detect_rotation(&self) -> Rotation {
        self.directions.detect_rotation()
    }
}

impl fmt::Display for PageText {
    /// Debug dump: every line per direction with its reference point.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in self.directions.iter() {
            writeln!(f, "Text (rot = {:.0}°):", bucket.key().degrees())?;
            for (i, line) in bucket.lines().iter().enumerate() {
                let (x, y) = line.first_glyph().origin();
                writeln!(f, "\t{}: ({}, {}): {}", i, x, y, line.text())?;
            }
        }
        Ok(())
    }
}

/// Single-pass builder for a [`PageText`].
#[derive(Debug)]
pub struct PageTextBuilder {
    page_number: usize,
    geometry: PageGeometry,
    assembler: LineAssembler,
    directions: DirectionBuckets,
    has_glyphs: bool,
    has_control_codes: bool,
    excluded: usize,
    duplicates: usize,
}

impl PageTextBuilder {
    pub fn new(page_number: usize, geometry: PageGeometry) -> Self {
        Self::with_params(page_number, geometry, AssemblyParams::default())
    }

    pub fn with_params(page_number: usize, geometry: PageGeometry, params: AssemblyParams) -> Self {
        Self {
            page_number,
            geometry,
            assembler: LineAssembler::new(params),
            directions: DirectionBuckets::new(),
            has_glyphs: false,
            has_control_codes: false,
            excluded: 0,
            duplicates: 0,
        }
    }

    /// Adds one glyph as reported by the renderer.
    ///
    /// Whitespace is stripped and the text NFC-composed first; glyphs left
    /// empty are ignored. Skewed glyphs and glyphs without advance still
    /// count for [`PageText::has_glyphs`] but are not assembled.
    ///
    /// Returns true if the glyph ended up on a line.
    pub fn add_glyph(&mut self, text: &str, origin: Point, end: Point, bbox: Rect) -> bool {
        let stripped: String = text.chars().filter(|c| !WHITE_SPACE.contains(c)).collect();
        if stripped.is_empty() {
            return false;
        }
        let composed: String = stripped.nfc().collect();

        self.has_glyphs = true;
        self.has_control_codes |= composed.chars().any(is_control_code);

        let glyph = GlyphEvent::new(&composed, origin, end, bbox);
        let Some(bucket) = self.directions.route(&glyph) else {
            trace!(
                page = self.page_number,
                glyph = %glyph,
                "excluding skewed or zero-advance glyph"
            );
            self.excluded += 1;
            return false;
        };

        match self.assembler.insert(bucket, glyph) {
            InsertOutcome::Duplicate => {
                self.duplicates += 1;
                false
            }
            InsertOutcome::NewLine | InsertOutcome::Joined => true,
        }
    }

    /// Adds a glyph event, applying the same normalization as [`Self::add_glyph`].
    pub fn add(&mut self, glyph: &GlyphEvent) -> bool {
        self.add_glyph(glyph.text(), glyph.origin(), glyph.end(), glyph.bbox())
    }

    pub fn build(self) -> PageText {
        debug!(
            page = self.page_number,
            directions = self.directions.len(),
            lines = self.directions.line_count(),
            glyphs = self.directions.glyph_count(),
            excluded = self.excluded,
            duplicates = self.duplicates,
            "page text assembled"
        );
        PageText {
            page_number: self.page_number,
            geometry: self.geometry,
            params: *self.assembler.params(),
            directions: self.directions,
            has_glyphs: self.has_glyphs,
            has_control_codes: self.has_control_codes,
        }
    }
}

/// Builds page 1 from a glyph stream.
pub fn build_page_text<'a>(
    glyphs: impl IntoIterator<Item = &'a GlyphEvent>,
    geometry: PageGeometry,
) -> PageText {
    let mut builder = PageTextBuilder::new(1, geometry);
    for glyph in glyphs {
        builder.add(glyph);
    }
    builder.build()
}
