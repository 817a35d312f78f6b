//! Line and word assembly.
//!
//! Glyphs arrive in content-stream order, which says little about reading
//! order. Each glyph is placed with two sorted inserts: first into the line
//! whose perpendicular offset matches, then into that line by its position
//! along the baseline. Neighbouring glyphs closer than the space threshold
//! share a word; glyphs redrawn on top of an existing one are dropped.

use crate::layout::params::AssemblyParams;
use crate::layout::types::{GlyphEvent, ReadingFrame, TextLine, Word};
use crate::utils::{cmp_tol, interval_overlap};

use super::direction::DirectionBucket;

/// What happened to an inserted glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The glyph started a new line.
    NewLine,
    /// The glyph joined an existing line.
    Joined,
    /// The glyph duplicated one already on its line and was discarded.
    Duplicate,
}

/// Inserts glyphs into the lines of a direction bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineAssembler {
    params: AssemblyParams,
}

impl LineAssembler {
    pub fn new(params: AssemblyParams) -> Self {
        Self { params }
    }

    pub const fn params(&self) -> &AssemblyParams {
        &self.params
    }

    /// Inserts one glyph, keeping lines and words ordered.
    pub fn insert(&self, bucket: &mut DirectionBucket, glyph: GlyphEvent) -> InsertOutcome {
        let frame = bucket.frame();
        let (idx, found) = self.select_line(frame, &bucket.lines, &glyph);
        if !found {
            bucket.lines.insert(idx, TextLine::new(glyph));
            return InsertOutcome::NewLine;
        }

        let line = &mut bucket.lines[idx];
        if self.is_duplicate(frame, line, &glyph) {
            return InsertOutcome::Duplicate;
        }
        self.place(frame, line, glyph);
        InsertOutcome::Joined
    }

    /// Finds the line a glyph belongs to.
    ///
    /// Returns the line index and whether the glyph joins it; when it does
    /// not, the index is where a new line keeps the list ordered.
    fn select_line(
        &self,
        frame: ReadingFrame,
        lines: &[TextLine],
        glyph: &GlyphEvent,
    ) -> (usize, bool) {
        let perp = frame.perp(glyph.origin());
        for (i, line) in lines.iter().enumerate() {
            let reference = line.first_glyph();
            let tol = self.params.line_tolerance * reference.extent_across(frame);
            match cmp_tol(perp - frame.perp(reference.origin()), tol) {
                0 => return (i, true),
                p if p < 0 => return (i, false),
                _ => {}
            }
        }
        (lines.len(), false)
    }

    /// True when the glyph overlaps a glyph on the line by more than the
    /// duplicate ratio of the shorter of the two.
    fn is_duplicate(&self, frame: ReadingFrame, line: &TextLine, glyph: &GlyphEvent) -> bool {
        let (c0, c1) = frame.span_along(glyph.bbox());
        line.glyphs().any(|g| {
            let (g0, g1) = frame.span_along(g.bbox());
            let shorter = (c1 - c0).min(g1 - g0);
            interval_overlap(c0, c1, g0, g1) > self.params.duplicate_overlap * shorter
        })
    }

    fn place(&self, frame: ReadingFrame, line: &mut TextLine, glyph: GlyphEvent) {
        let center = glyph.center_along(frame);
        let bbox = glyph.bbox();
        let words = line.words_mut();
        let idx = words
            .iter()
            .position(|w| center < w.span(frame).1)
            .unwrap_or(words.len());

        if idx < words.len() && center > words[idx].span(frame).0 {
            words[idx].insert_ordered(glyph, frame);
        } else {
            words.insert(idx, Word::new(glyph));
        }

        let idx = self.merge_with_previous(frame, words, idx);
        self.merge_with_next(frame, words, idx);
        line.grow(bbox);
    }

    /// Word break test between two consecutive words.
    fn joins(&self, frame: ReadingFrame, left: &Word, right: &Word) -> bool {
        let gap = right.span(frame).0 - left.span(frame).1;
        gap <= self.params.space_ratio * right.first().advance()
    }

    fn merge_with_previous(&self, frame: ReadingFrame, words: &mut Vec<Word>, idx: usize) -> usize {
        if idx > 0 && self.joins(frame, &words[idx - 1], &words[idx]) {
            let word = words.remove(idx);
            words[idx - 1].absorb(word);
            idx - 1
        } else {
            idx
        }
    }

    fn merge_with_next(&self, frame: ReadingFrame, words: &mut Vec<Word>, idx: usize) {
        if idx + 1 < words.len() && self.joins(frame, &words[idx], &words[idx + 1]) {
            let word = words.remove(idx + 1);
            words[idx].absorb(word);
        }
    }
}
