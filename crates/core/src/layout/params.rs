//! Assembly parameters.
//!
//! The ratios below are empirically tuned. Downstream output (and golden
//! files built from it) depends on the exact values, so they are kept as
//! named constants and only overridden explicitly through [`AssemblyParams`].

/// Perpendicular distance, relative to the reference glyph's extent across
/// the baseline, within which a glyph joins an existing line.
pub const LINE_TOLERANCE_RATIO: f64 = 0.36;

/// Largest gap between two glyphs, relative to the advance of the later
/// glyph, that still keeps them in the same word. The boundary is inclusive.
pub const SPACE_RATIO: f64 = 0.2;

/// Overlap along the baseline, relative to the shorter of the two glyphs,
/// above which a glyph is treated as a redrawn duplicate ("poor man's bold").
pub const DUPLICATE_OVERLAP_RATIO: f64 = 0.5;

/// Overlap, relative to the line or glyph extent, required for a rectangle
/// query to select it.
pub const RECT_OVERLAP_RATIO: f64 = 0.2;

/// Parameters for line and word assembly.
///
/// Controls how glyphs are grouped into lines and words and how rectangle
/// queries select them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblyParams {
    /// Line membership tolerance, relative to glyph height across the baseline.
    pub line_tolerance: f64,

    /// Word break threshold, relative to the glyph advance.
    pub space_ratio: f64,

    /// Duplicate glyph overlap threshold, relative to the shorter glyph.
    pub duplicate_overlap: f64,

    /// Overlap needed for a rectangle query to pick up a line or glyph.
    pub rect_overlap: f64,
}

impl Default for AssemblyParams {
    fn default() -> Self {
        Self {
            line_tolerance: LINE_TOLERANCE_RATIO,
            space_ratio: SPACE_RATIO,
            duplicate_overlap: DUPLICATE_OVERLAP_RATIO,
            rect_overlap: RECT_OVERLAP_RATIO,
        }
    }
}

impl AssemblyParams {
    /// Creates new assembly parameters with the specified values.
    ///
    /// # Panics
    /// Panics if any ratio is negative or not finite.
    pub fn new(
        line_tolerance: f64,
        space_ratio: f64,
        duplicate_overlap: f64,
        rect_overlap: f64,
    ) -> Self {
        for v in [line_tolerance, space_ratio, duplicate_overlap, rect_overlap] {
            assert!(
                v.is_finite() && v >= 0.0,
                "assembly ratios must be finite and non-negative"
            );
        }

        Self {
            line_tolerance,
            space_ratio,
            duplicate_overlap,
            rect_overlap,
        }
    }
}
