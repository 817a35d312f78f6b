//! Glyph types: GlyphEvent, Axis and ReadingFrame.
//!
//! A `GlyphEvent` is one rendered glyph as reported by the page renderer:
//! its text, the baseline it sits on and the box covering ascent and descent.
//! `ReadingFrame` maps page coordinates into reading coordinates so that the
//! same assembly code serves every axis-aligned text direction.

use std::fmt;

use crate::utils::{AXIS_EPSILON, Point, Rect, impl_has_bbox_delegate, normalize_rect};

/// Axis of a glyph's baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Baseline parallel to the x axis
    Horizontal,
    /// Baseline parallel to the y axis
    Vertical,
}

/// Reading direction of an axis-aligned baseline.
///
/// In reading coordinates `along` grows in reading order and `perp` grows
/// from one line to the next (top to bottom as seen by a reader of the text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingFrame {
    /// Baseline runs toward +x (regular upright text).
    East,
    /// Baseline runs toward +y (text rotated 90° counter-clockwise).
    North,
    /// Baseline runs toward -x (upside-down text).
    West,
    /// Baseline runs toward -y (text rotated 90° clockwise).
    South,
}

impl ReadingFrame {
    /// Classifies a baseline vector. Returns `None` for skewed or zero-length baselines.
    pub fn from_base(base: Point) -> Option<Self> {
        let (bx, by) = base;
        let flat_x = bx.abs() < AXIS_EPSILON;
        let flat_y = by.abs() < AXIS_EPSILON;
        match (flat_x, flat_y) {
            (false, true) if bx > 0.0 => Some(Self::East),
            (false, true) => Some(Self::West),
            (true, false) if by > 0.0 => Some(Self::North),
            (true, false) => Some(Self::South),
            _ => None,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Self::East | Self::West => Axis::Horizontal,
            Self::North | Self::South => Axis::Vertical,
        }
    }

    /// Position of a point along the reading direction.
    #[inline]
    pub fn along(self, p: Point) -> f64 {
        match self {
            Self::East => p.0,
            Self::West => -p.0,
            Self::North => p.1,
            Self::South => -p.1,
        }
    }

    /// Position of a point across the reading direction (line order).
    #[inline]
    pub fn perp(self, p: Point) -> f64 {
        match self {
            Self::East => -p.1,
            Self::West => p.1,
            Self::North => p.0,
            Self::South => -p.0,
        }
    }

    /// Interval covered by a rectangle along the reading direction.
    pub fn span_along(self, r: Rect) -> (f64, f64) {
        match self {
            Self::East => (r.0, r.2),
            Self::West => (-r.2, -r.0),
            Self::North => (r.1, r.3),
            Self::South => (-r.3, -r.1),
        }
    }

    /// Interval covered by a rectangle across the reading direction.
    pub fn span_across(self, r: Rect) -> (f64, f64) {
        match self {
            Self::East => (-r.3, -r.1),
            Self::West => (r.1, r.3),
            Self::North => (r.0, r.2),
            Self::South => (-r.2, -r.0),
        }
    }
}

/// One rendered glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphEvent {
    text: String,
    origin: Point,
    base: Point,
    bbox: Rect,
}

impl GlyphEvent {
    /// Creates a glyph from its baseline start and end points.
    pub fn new(text: &str, origin: Point, end: Point, bbox: Rect) -> Self {
        Self::from_base(text, origin, (end.0 - origin.0, end.1 - origin.1), bbox)
    }

    /// Creates a glyph from its baseline start point and baseline vector.
    pub fn from_base(text: &str, origin: Point, base: Point, bbox: Rect) -> Self {
        Self {
            text: text.to_string(),
            origin,
            base,
            bbox: normalize_rect(bbox),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Baseline start point.
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Baseline direction and advance.
    pub const fn base(&self) -> Point {
        self.base
    }

    /// Baseline end point.
    pub fn end(&self) -> Point {
        (self.origin.0 + self.base.0, self.origin.1 + self.base.1)
    }

    pub const fn bbox(&self) -> Rect {
        self.bbox
    }

    pub fn is_horizontal(&self) -> bool {
        self.base.1.abs() < AXIS_EPSILON
    }

    pub fn is_vertical(&self) -> bool {
        self.base.0.abs() < AXIS_EPSILON
    }

    /// Baseline axis, `None` for skewed glyphs.
    pub fn axis(&self) -> Option<Axis> {
        self.reading_frame().map(ReadingFrame::axis)
    }

    pub fn reading_frame(&self) -> Option<ReadingFrame> {
        ReadingFrame::from_base(self.base)
    }

    /// Glyph advance measured along its baseline.
    pub fn advance(&self) -> f64 {
        if self.is_horizontal() {
            self.base.0.abs()
        } else if self.is_vertical() {
            self.base.1.abs()
        } else {
            self.base.0.hypot(self.base.1)
        }
    }

    /// Glyph extent across the baseline (height for horizontal text).
    pub fn extent_across(&self, frame: ReadingFrame) -> f64 {
        let (lo, hi) = frame.span_across(self.bbox);
        hi - lo
    }

    /// Glyph extent along the baseline.
    pub fn extent_along(&self, frame: ReadingFrame) -> f64 {
        let (lo, hi) = frame.span_along(self.bbox);
        hi - lo
    }

    /// Centre of the glyph box along the reading direction.
    pub fn center_along(&self, frame: ReadingFrame) -> f64 {
        let (lo, hi) = frame.span_along(self.bbox);
        0.5 * (lo + hi)
    }
}

impl_has_bbox_delegate!(GlyphEvent, bbox);

impl fmt::Display for GlyphEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\":({},{}),<{},{}>",
            self.text, self.origin.0, self.origin.1, self.base.0, self.base.1
        )
    }
}
