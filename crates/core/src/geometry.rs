//! Page geometry: crop box, rotation flag and coordinate mapping.
//!
//! Two coordinate spaces are involved:
//! 1. Content space, the unrotated space glyphs are reported in.
//! 2. Visible page space, normalized to (0,0)-(1,1) with a top-left origin,
//!    which is what callers see once the page's rotation flag is applied.
//!
//! The crop box is always expressed in content space.

use std::fmt;

use crate::error::{Result, TextError};
use crate::utils::{Point, Rect, normalize_rect};

/// Quarter-turn rotation, clockwise as seen by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Converts a page rotation flag. Any multiple of 90 is accepted, including negative ones.
    pub fn from_degrees(degrees: i64) -> Result<Self> {
        match degrees.rem_euclid(360) {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            _ => Err(TextError::InvalidRotation(degrees)),
        }
    }

    /// Snaps an arbitrary angle in degrees to the nearest quarter turn.
    pub fn nearest(degrees: f64) -> Self {
        let quarter = (degrees.rem_euclid(360.0) / 90.0).round() as i64;
        match quarter.rem_euclid(4) {
            1 => Self::Deg90,
            2 => Self::Deg180,
            3 => Self::Deg270,
            _ => Self::Deg0,
        }
    }

    pub const fn degrees(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// True for 90 and 270, which swap the visible width and height.
    pub const fn is_quarter_turn(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Crop box and rotation flag of a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    crop_box: Rect,
    rotation: Rotation,
}

impl Default for PageGeometry {
    /// US Letter, unrotated.
    fn default() -> Self {
        Self::new((0.0, 0.0, 612.0, 792.0), Rotation::Deg0)
    }
}

impl PageGeometry {
    pub fn new(crop_box: Rect, rotation: Rotation) -> Self {
        Self {
            crop_box: normalize_rect(crop_box),
            rotation,
        }
    }

    /// Like [`PageGeometry::new`] but rejects crop boxes without area.
    pub fn try_new(crop_box: Rect, rotation: Rotation) -> Result<Self> {
        let geometry = Self::new(crop_box, rotation);
        if !(geometry.width() > 0.0 && geometry.height() > 0.0) {
            return Err(TextError::InvalidGeometry(format!(
                "crop box {:?} has no area",
                crop_box
            )));
        }
        Ok(geometry)
    }

    pub const fn crop_box(&self) -> Rect {
        self.crop_box
    }

    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Unrotated crop box width.
    pub fn width(&self) -> f64 {
        self.crop_box.2 - self.crop_box.0
    }

    /// Unrotated crop box height.
    pub fn height(&self) -> f64 {
        self.crop_box.3 - self.crop_box.1
    }

    /// Width and height of the page as displayed.
    pub fn rotated_size(&self) -> (f64, f64) {
        if self.rotation.is_quarter_turn() {
            (self.height(), self.width())
        } else {
            (self.width(), self.height())
        }
    }

    /// Maps a point of the visible page (0..1, top-left origin) into content space.
    pub fn normalized_point_to_content(&self, p: Point) -> Point {
        let (u, v) = p;
        let (l, b) = (self.crop_box.0, self.crop_box.1);
        let (w, h) = (self.width(), self.height());
        match self.rotation {
            Rotation::Deg0 => (u * w + l, (1.0 - v) * h + b),
            Rotation::Deg90 => (v * w + l, u * h + b),
            Rotation::Deg180 => ((1.0 - u) * w + l, v * h + b),
            Rotation::Deg270 => ((1.0 - v) * w + l, (1.0 - u) * h + b),
        }
    }

    /// Maps a content space point onto the visible page (0..1, top-left origin).
    pub fn content_point_to_normalized(&self, p: Point) -> Point {
        let s = (p.0 - self.crop_box.0) / self.width();
        let t = (p.1 - self.crop_box.1) / self.height();
        match self.rotation {
            Rotation::Deg0 => (s, 1.0 - t),
            Rotation::Deg90 => (t, s),
            Rotation::Deg180 => (1.0 - s, t),
            Rotation::Deg270 => (1.0 - t, 1.0 - s),
        }
    }

    /// Maps a visible page rectangle `(u0, v0, u1, v1)` into a content space rectangle.
    pub fn normalized_rect_to_content(&self, r: Rect) -> Rect {
        let a = self.normalized_point_to_content((r.0, r.1));
        let b = self.normalized_point_to_content((r.2, r.3));
        normalize_rect((a.0, a.1, b.0, b.1))
    }

    /// Maps a content space rectangle onto the visible page as `(left, top, right, bottom)`.
    pub fn content_rect_to_normalized(&self, r: Rect) -> Rect {
        let a = self.content_point_to_normalized((r.0, r.1));
        let b = self.content_point_to_normalized((r.2, r.3));
        normalize_rect((a.0, a.1, b.0, b.1))
    }
}
