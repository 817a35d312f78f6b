//! Miscellaneous geometry routines.
//!
//! Provides the basic geometric types shared by every module:
//! - Points and axis-aligned rectangles as plain tuples
//! - The `HasBBox` trait
//! - Interval overlap and rectangle union helpers

/// Tolerance below which a baseline component counts as zero.
pub const AXIS_EPSILON: f64 = 1e-4;

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A rectangle defined by (x0, y0, x1, y1) where (x0, y0) is the bottom-left
/// and (x1, y1) the top-right corner.
pub type Rect = (f64, f64, f64, f64);

/// Rectangle that is the identity for [`union_rect`].
pub const EMPTY_RECT: Rect = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);

/// Compares two floats for approximate equality.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Signed comparison with a dead zone: 0 when `|v| < tol`, otherwise the sign of `v`.
#[inline]
pub fn cmp_tol(v: f64, tol: f64) -> i32 {
    if v.abs() < tol {
        0
    } else if v < 0.0 {
        -1
    } else {
        1
    }
}

/// Returns the rectangle with its corners ordered so that x0 <= x1 and y0 <= y1.
pub fn normalize_rect(r: Rect) -> Rect {
    let (x0, y0, x1, y1) = r;
    (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
}

/// Smallest rectangle containing both inputs.
pub fn union_rect(a: Rect, b: Rect) -> Rect {
    (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))
}

/// Length of the overlap of the closed intervals [a0, a1] and [b0, b1].
///
/// Negative when the intervals are disjoint (the value is then minus the gap).
#[inline]
pub fn interval_overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    a1.min(b1) - a0.max(b0)
}

/// Trait for objects that have a bounding box.
pub trait HasBBox {
    fn x0(&self) -> f64;
    fn y0(&self) -> f64;
    fn x1(&self) -> f64;
    fn y1(&self) -> f64;

    fn bbox(&self) -> Rect {
        (self.x0(), self.y0(), self.x1(), self.y1())
    }

    fn width(&self) -> f64 {
        self.x1() - self.x0()
    }

    fn height(&self) -> f64 {
        self.y1() - self.y0()
    }

    /// Amount of horizontal overlap with a rectangle (negative when apart).
    fn hoverlap_rect(&self, r: Rect) -> f64 {
        interval_overlap(self.x0(), self.x1(), r.0, r.2)
    }

    /// Amount of vertical overlap with a rectangle (negative when apart).
    fn voverlap_rect(&self, r: Rect) -> f64 {
        interval_overlap(self.y0(), self.y1(), r.1, r.3)
    }
}

impl HasBBox for Rect {
    fn x0(&self) -> f64 {
        self.0
    }
    fn y0(&self) -> f64 {
        self.1
    }
    fn x1(&self) -> f64 {
        self.2
    }
    fn y1(&self) -> f64 {
        self.3
    }
}

/// Implements `HasBBox` by delegating to a `Rect` field.
macro_rules! impl_has_bbox_delegate {
    ($ty:ty, $field:ident) => {
        impl $crate::utils::HasBBox for $ty {
            fn x0(&self) -> f64 {
                self.$field.0
            }
            fn y0(&self) -> f64 {
                self.$field.1
            }
            fn x1(&self) -> f64 {
                self.$field.2
            }
            fn y1(&self) -> f64 {
                self.$field.3
            }
        }
    };
}

pub(crate) use impl_has_bbox_delegate;
