//! Text line types: Word and TextLine.
//!
//! A line is an ordered list of words; a word is an ordered run of glyphs
//! whose gaps stay below the space threshold. Concatenating words with a
//! single space reproduces the line's text.

use itertools::Itertools;

use crate::utils::{Rect, impl_has_bbox_delegate, union_rect};

use super::glyph::{GlyphEvent, ReadingFrame};

/// Glyphs merged into one word.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    glyphs: Vec<GlyphEvent>,
    bbox: Rect,
}

impl Word {
    pub fn new(glyph: GlyphEvent) -> Self {
        let bbox = glyph.bbox();
        Self {
            glyphs: vec![glyph],
            bbox,
        }
    }

    pub fn glyphs(&self) -> &[GlyphEvent] {
        &self.glyphs
    }

    pub fn first(&self) -> &GlyphEvent {
        &self.glyphs[0]
    }

    pub const fn bbox(&self) -> Rect {
        self.bbox
    }

    /// Concatenated glyph text.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(GlyphEvent::text).collect()
    }

    /// Interval covered along the reading direction.
    pub fn span(&self, frame: ReadingFrame) -> (f64, f64) {
        frame.span_along(self.bbox)
    }

    /// Inserts a glyph keeping the glyphs ordered by their centre along the baseline.
    pub(crate) fn insert_ordered(&mut self, glyph: GlyphEvent, frame: ReadingFrame) {
        let center = glyph.center_along(frame);
        let idx = self
            .glyphs
            .iter()
            .position(|g| g.center_along(frame) > center)
            .unwrap_or(self.glyphs.len());
        self.bbox = union_rect(self.bbox, glyph.bbox());
        self.glyphs.insert(idx, glyph);
    }

    /// Appends every glyph of a following word.
    pub(crate) fn absorb(&mut self, other: Word) {
        self.bbox = union_rect(self.bbox, other.bbox);
        self.glyphs.extend(other.glyphs);
    }
}

impl_has_bbox_delegate!(Word, bbox);

/// Words sharing one baseline band, in reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    words: Vec<Word>,
    bbox: Rect,
}

impl TextLine {
    /// Starts a line with its first glyph.
    pub fn new(glyph: GlyphEvent) -> Self {
        let bbox = glyph.bbox();
        Self {
            words: vec![Word::new(glyph)],
            bbox,
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub(crate) fn words_mut(&mut self) -> &mut Vec<Word> {
        &mut self.words
    }

    /// Returns an iterator over all glyphs in reading order.
    pub fn glyphs(&self) -> impl DoubleEndedIterator<Item = &GlyphEvent> {
        self.words.iter().flat_map(|w| w.glyphs.iter())
    }

    /// First glyph in reading order, used as the line's reference position.
    pub fn first_glyph(&self) -> &GlyphEvent {
        self.words[0].first()
    }

    pub fn glyph_count(&self) -> usize {
        self.words.iter().map(|w| w.glyphs.len()).sum()
    }

    pub const fn bbox(&self) -> Rect {
        self.bbox
    }

    pub(crate) fn grow(&mut self, r: Rect) {
        self.bbox = union_rect(self.bbox, r);
    }

    /// Line text with a single space between words.
    pub fn text(&self) -> String {
        self.words.iter().map(Word::text).join(" ")
    }

    /// Line text without word separators.
    pub fn compact_text(&self) -> String {
        self.glyphs().map(GlyphEvent::text).collect()
    }
}

impl_has_bbox_delegate!(TextLine, bbox);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::HasBBox;

    fn glyph(text: &str, x0: f64, x1: f64) -> GlyphEvent {
        GlyphEvent::new(text, (x0, 0.0), (x1, 0.0), (x0, -2.0, x1, 8.0))
    }

    #[test]
    fn word_keeps_glyphs_ordered() {
        let mut word = Word::new(glyph("c", 20.0, 30.0));
        word.insert_ordered(glyph("a", 0.0, 10.0), ReadingFrame::East);
        word.insert_ordered(glyph("b", 10.0, 20.0), ReadingFrame::East);
        assert_eq!(word.text(), "abc");
        assert_eq!(word.bbox(), (0.0, -2.0, 30.0, 8.0));
    }

    #[test]
    fn line_text_joins_words_with_single_space() {
        let mut line = TextLine::new(glyph("H", 0.0, 10.0));
        let i = glyph("i", 30.0, 40.0);
        line.grow(i.bbox());
        line.words_mut().push(Word::new(i));
        assert_eq!(line.text(), "H i");
        assert_eq!(line.compact_text(), "Hi");
        assert_eq!(line.glyph_count(), 2);
        assert_eq!(line.bbox(), (0.0, -2.0, 40.0, 8.0));
        assert_eq!(HasBBox::width(&line), 40.0);
        assert_eq!(HasBBox::height(&line), 10.0);
    }
}
