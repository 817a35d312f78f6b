//! Direction bucketing and dominant direction analysis.
//!
//! Glyphs are grouped by the quantized angle of their baseline so that text
//! running in different directions on one page is assembled independently.
//! Once a page is complete, the bucket holding the most glyphs decides the
//! page's dominant text direction and therefore its rotation correction.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::f64::consts::PI;

use crate::geometry::Rotation;
use crate::layout::types::{GlyphEvent, ReadingFrame, TextLine};
use crate::utils::Point;

/// Quantized baseline angle in milliradians, wrapped into (-π, π].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectionKey(i32);

impl DirectionKey {
    /// Quantization steps per radian.
    pub const STEPS_PER_RADIAN: f64 = 1000.0;

    /// Quantizes a baseline vector.
    pub fn from_base(base: Point) -> Self {
        let mut angle = base.1.atan2(base.0);
        // -π and π are the same direction; keep them in one bucket.
        if angle <= -PI + 0.5 / Self::STEPS_PER_RADIAN {
            angle += 2.0 * PI;
        }
        Self((angle * Self::STEPS_PER_RADIAN).round() as i32)
    }

    pub const fn milliradians(self) -> i32 {
        self.0
    }

    /// Angle in radians.
    pub fn angle(self) -> f64 {
        f64::from(self.0) / Self::STEPS_PER_RADIAN
    }

    /// Angle in degrees, for diagnostics.
    pub fn degrees(self) -> f64 {
        self.angle().to_degrees()
    }

    /// Unit vector pointing along the baseline direction.
    pub fn unit_vector(self) -> Point {
        let a = self.angle();
        (a.cos(), a.sin())
    }
}

/// Lines of one direction, ordered by perpendicular offset.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionBucket {
    key: DirectionKey,
    frame: ReadingFrame,
    pub(crate) lines: Vec<TextLine>,
}

impl DirectionBucket {
    pub fn new(key: DirectionKey, frame: ReadingFrame) -> Self {
        Self {
            key,
            frame,
            lines: Vec::new(),
        }
    }

    pub const fn key(&self) -> DirectionKey {
        self.key
    }

    pub const fn frame(&self) -> ReadingFrame {
        self.frame
    }

    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    pub fn glyph_count(&self) -> usize {
        self.lines.iter().map(TextLine::glyph_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// All direction buckets of a page, iterated in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectionBuckets {
    buckets: BTreeMap<DirectionKey, DirectionBucket>,
}

impl DirectionBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bucket a glyph belongs to, creating it on first use.
    ///
    /// Skewed and zero-length glyphs have no bucket.
    pub fn route(&mut self, glyph: &GlyphEvent) -> Option<&mut DirectionBucket> {
        let frame = glyph.reading_frame()?;
        let key = DirectionKey::from_base(glyph.base());
        Some(match self.buckets.entry(key) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(DirectionBucket::new(key, frame)),
        })
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DirectionBucket> {
        self.buckets.values()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn glyph_count(&self) -> usize {
        self.iter().map(DirectionBucket::glyph_count).sum()
    }

    pub fn line_count(&self) -> usize {
        self.iter().map(|b| b.lines.len()).sum()
    }

    /// Direction of the bucket with the strictly largest glyph count.
    ///
    /// Returns `None` for an empty page or when the top two counts tie.
    pub fn dominant_direction(&self) -> Option<Point> {
        let mut best: Option<(usize, DirectionKey)> = None;
        let mut tied = false;
        for bucket in self.iter() {
            let count = bucket.glyph_count();
            match best {
                Some((top, _)) if count == top => tied = true,
                Some((top, _)) if count < top => {}
                _ => {
                    best = Some((count, bucket.key));
                    tied = false;
                }
            }
        }
        match best {
            Some((count, key)) if count > 0 && !tied => Some(key.unit_vector()),
            _ => None,
        }
    }

    /// Page rotation that would make the dominant direction upright.
    ///
    /// Leaves the page unrotated when no direction dominates.
    pub fn detect_rotation(&self) -> Rotation {
        self.dominant_direction()
            .map_or(Rotation::Deg0, rotation_for_direction)
    }
}

/// Converts a text direction vector to the rotation that undoes it.
pub fn rotation_for_direction(dir: Point) -> Rotation {
    let degrees = (-dir.1.atan2(dir.0)).to_degrees().round();
    Rotation::nearest(degrees)
}
