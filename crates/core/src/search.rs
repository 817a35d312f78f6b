//! Text queries over a built page: rectangle extraction and substring search.
//!
//! Both queries are pure functions of the `PageText`; they can run
//! concurrently on the same page.

use itertools::Itertools;

use crate::geometry::PageGeometry;
use crate::layout::bidi::visual_order;
use crate::layout::types::{GlyphEvent, ReadingFrame, TextLine};
use crate::page::{PageText, WHITE_SPACE, is_control_code};
use crate::utils::{EMPTY_RECT, Point, Rect, interval_overlap, normalize_rect, union_rect};

/// One located occurrence of a search string.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    text: String,
    page: usize,
    origin: Point,
    bbox: Rect,
    geometry: PageGeometry,
}

impl Match {
    /// The matched text, in visual order.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based page number.
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Baseline start of the first matched glyph, in content space.
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Union of the matched glyph boxes, in content space.
    pub const fn bbox(&self) -> Rect {
        self.bbox
    }

    /// Geometry of the page the match was found on.
    pub const fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Baseline start on the visible page (0..1, top-left origin).
    pub fn normalized_origin(&self) -> Point {
        self.geometry.content_point_to_normalized(self.origin)
    }

    /// Matched area on the visible page as `(left, top, right, bottom)`.
    pub fn normalized_bbox(&self) -> Rect {
        self.geometry.content_rect_to_normalized(self.bbox)
    }
}

/// Removes every whitespace character from a search string.
pub fn strip_needle(needle: &str) -> String {
    needle
        .chars()
        .filter(|c| !WHITE_SPACE.contains(c) && !c.is_whitespace())
        .collect()
}

/// Overlap of two rectangles measured in a reading frame: (along, across).
fn frame_overlap(frame: ReadingFrame, a: Rect, b: Rect) -> (f64, f64) {
    let (a0, a1) = frame.span_along(a);
    let (b0, b1) = frame.span_along(b);
    let (p0, p1) = frame.span_across(a);
    let (q0, q1) = frame.span_across(b);
    (interval_overlap(a0, a1, b0, b1), interval_overlap(p0, p1, q0, q1))
}

impl PageText {
    /// Text inside a content space rectangle, one string per line.
    ///
    /// A line is considered when it overlaps the rectangle across its
    /// baseline by more than the overlap ratio of its own extent. Within it
    /// only glyphs overlapping the rectangle by that ratio on both axes are
    /// kept; words are separated by a single space.
    pub fn extract_text(&self, rect: Rect) -> Vec<String> {
        let rect = normalize_rect(rect);
        let ratio = self.params().rect_overlap;
        let mut found = Vec::new();

        for bucket in self.directions().iter() {
            let frame = bucket.frame();
            for line in bucket.lines() {
                let (along, across) = frame_overlap(frame, line.bbox(), rect);
                let (l0, l1) = frame.span_across(line.bbox());
                if along <= 0.0 || across <= ratio * (l1 - l0) {
                    continue;
                }

                let text = selected_text(line, frame, rect, ratio);
                if !text.is_empty() {
                    found.push(text);
                }
            }
        }
        found
    }

    /// Like [`PageText::extract_text`] for a rectangle of the visible page
    /// given as `(u0, v0, u1, v1)` in 0..1 with a top-left origin.
    pub fn extract_normalized(&self, rect: Rect) -> Vec<String> {
        self.extract_text(self.geometry().normalized_rect_to_content(rect))
    }

    /// Every occurrence of `needle` on this page, in reading order.
    ///
    /// Each line's glyph text is searched without word separators, after
    /// reordering right-to-left runs visually; matches may overlap.
    pub fn find_all(&self, needle: &str) -> Vec<Match> {
        let needle: Vec<char> = strip_needle(needle).chars().collect();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches = Vec::new();
        for line in self.lines() {
            self.find_in_line(line, &needle, &mut matches);
        }
        matches
    }

    fn find_in_line(&self, line: &TextLine, needle: &[char], out: &mut Vec<Match>) {
        let mut chars = Vec::new();
        let mut owners: Vec<&GlyphEvent> = Vec::new();
        for glyph in line.glyphs() {
            for c in glyph.text().chars().filter(|c| !c.is_whitespace()) {
                chars.push(c);
                owners.push(glyph);
            }
        }
        if chars.len() < needle.len() {
            return;
        }

        let order = visual_order(&chars).unwrap_or_else(|| (0..chars.len()).collect());
        let visual: Vec<char> = order.iter().map(|&i| chars[i]).collect();

        for (start, window) in visual.windows(needle.len()).enumerate() {
            if window != needle {
                continue;
            }
            let span = &order[start..start + needle.len()];
            let bbox = span
                .iter()
                .map(|&i| owners[i].bbox())
                .fold(EMPTY_RECT, union_rect);
            out.push(Match {
                text: window.iter().collect(),
                page: self.page_number(),
                origin: owners[span[0]].origin(),
                bbox,
                geometry: *self.geometry(),
            });
        }
    }
}

/// Glyphs of a line inside the rectangle, words joined by single spaces.
fn selected_text(line: &TextLine, frame: ReadingFrame, rect: Rect, ratio: f64) -> String {
    let inside = |g: &GlyphEvent| {
        let (along, across) = frame_overlap(frame, g.bbox(), rect);
        along > ratio * g.extent_along(frame)
            && across > ratio * g.extent_across(frame)
            && !g.text().starts_with(is_control_code)
    };

    let text = line
        .words()
        .iter()
        .map(|w| {
            w.glyphs()
                .iter()
                .filter(|g| inside(g))
                .map(GlyphEvent::text)
                .collect::<String>()
        })
        .filter(|s| !s.is_empty())
        .join(" ");

    text.split(|c: char| c.is_whitespace() || WHITE_SPACE.contains(&c))
        .filter(|s| !s.is_empty())
        .join(" ")
}
