//! Bidirectional text helpers for search.
//!
//! Lines are stored in logical order. Search strings arrive in the order a
//! reader sees them, so right-to-left runs are flipped to visual order
//! before matching. The categorization is a simplified five-class view of
//! the Unicode bidi classes: a lazily built table covers Latin-1 and the
//! `unicode-bidi` range table answers everything beyond it.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use unicode_bidi::{BidiClass, bidi_class};

/// Simplified bidirectional category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidiCategory {
    /// Separators, whitespace and other neutrals.
    Neutral,
    /// Numbers, number separators and non-spacing marks.
    Weak,
    /// Embedding, override and isolate controls, treated as strong left.
    Explicit,
    /// Strong left-to-right.
    Left,
    /// Strong right-to-left (Hebrew, Arabic and friends).
    Right,
}

static LATIN1: Lazy<[BidiCategory; 256]> = Lazy::new(|| {
    let mut table = [BidiCategory::Neutral; 256];
    for (byte, slot) in (0u8..=255).zip(table.iter_mut()) {
        *slot = collapse(bidi_class(char::from(byte)));
    }
    table
});

fn collapse(class: BidiClass) -> BidiCategory {
    use BidiClass::*;
    match class {
        L => BidiCategory::Left,
        R | AL => BidiCategory::Right,
        EN | ES | ET | AN | CS | NSM | BN => BidiCategory::Weak,
        B | S | WS | ON => BidiCategory::Neutral,
        LRE | LRO | RLE | RLO | PDF | LRI | RLI | FSI | PDI => BidiCategory::Explicit,
    }
}

/// Category of a single character.
pub fn category(c: char) -> BidiCategory {
    match u8::try_from(u32::from(c)) {
        Ok(byte) => LATIN1[usize::from(byte)],
        Err(_) => collapse(bidi_class(c)),
    }
}

fn is_right(c: char) -> bool {
    category(c) == BidiCategory::Right
}

/// Run accumulators; entries are logical indices.
struct Runs {
    output: Vec<usize>,
    rtl_run: Vec<usize>,
    weak_run: Vec<usize>,
}

impl Runs {
    fn with_capacity(n: usize) -> Self {
        Self {
            output: Vec::with_capacity(n),
            rtl_run: Vec::new(),
            weak_run: Vec::new(),
        }
    }

    fn push_right(&mut self, i: usize) {
        if !self.weak_run.is_empty() {
            debug_assert!(
                !self.rtl_run.is_empty(),
                "weak run buffered without an open right-to-left run"
            );
            // Stored backwards so the run reads forward once the RTL run is flipped.
            self.rtl_run.extend(self.weak_run.drain(..).rev());
        }
        self.rtl_run.push(i);
    }

    fn push_weak(&mut self, i: usize) {
        if self.rtl_run.is_empty() {
            self.output.push(i);
        } else {
            self.weak_run.push(i);
        }
    }

    fn push_left(&mut self, i: usize) {
        self.close();
        self.output.push(i);
    }

    fn close(&mut self) {
        debug_assert!(
            self.weak_run.is_empty() || !self.rtl_run.is_empty(),
            "weak run buffered without an open right-to-left run"
        );
        self.output.extend(self.rtl_run.drain(..).rev());
        self.output.append(&mut self.weak_run);
    }

    fn finish(mut self) -> Vec<usize> {
        self.close();
        self.output
    }
}

/// Visual order of a logical character sequence.
///
/// Returns the logical index for every visual position, or `None` when the
/// sequence has no right-to-left characters and is already in visual order.
pub fn visual_order(chars: &[char]) -> Option<Vec<usize>> {
    if !chars.iter().copied().any(is_right) {
        return None;
    }

    let mut runs = Runs::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        match category(c) {
            BidiCategory::Right => runs.push_right(i),
            BidiCategory::Weak | BidiCategory::Neutral => runs.push_weak(i),
            BidiCategory::Left | BidiCategory::Explicit => runs.push_left(i),
        }
    }
    Some(runs.finish())
}

/// Converts logical order text to visual left-to-right order.
///
/// Text without right-to-left characters is returned as is.
pub fn fix_visual_order(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_right) {
        return Cow::Borrowed(text);
    }

    let chars: Vec<char> = text.chars().collect();
    match visual_order(&chars) {
        Some(order) => Cow::Owned(order.into_iter().map(|i| chars[i]).collect()),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(fix_visual_order(""), "");
    }

    #[test]
    fn ltr_text_is_borrowed() {
        assert!(matches!(fix_visual_order("abc 123"), Cow::Borrowed("abc 123")));
    }

    #[test]
    fn categories_of_common_characters() {
        assert_eq!(category('a'), BidiCategory::Left);
        assert_eq!(category('7'), BidiCategory::Weak);
        assert_eq!(category(' '), BidiCategory::Neutral);
        assert_eq!(category('\u{05D0}'), BidiCategory::Right);
        assert_eq!(category('\u{0627}'), BidiCategory::Right);
        assert_eq!(category('\u{202B}'), BidiCategory::Explicit);
        assert_eq!(category('\u{00E9}'), BidiCategory::Left);
    }

    #[test]
    fn hebrew_run_between_latin_is_flipped() {
        let got = fix_visual_order("ABC \u{05E2}\u{05D1}\u{05E8}\u{05D9}\u{05EA} DEF");
        assert_eq!(got, "ABC \u{05EA}\u{05D9}\u{05E8}\u{05D1}\u{05E2} DEF");
    }

    #[test]
    fn digits_inside_hebrew_keep_their_order() {
        let got = fix_visual_order("\u{05D0}\u{05D1} 12 \u{05D2}\u{05D3}");
        assert_eq!(got, "\u{05D3}\u{05D2} 12 \u{05D1}\u{05D0}");
    }

    #[test]
    fn trailing_weak_characters_follow_the_run() {
        let got = fix_visual_order("\u{05E9}\u{05DC}\u{05D5}\u{05DD}: 42");
        assert_eq!(got, "\u{05DD}\u{05D5}\u{05DC}\u{05E9}: 42");
    }

    #[test]
    fn visual_order_is_a_permutation() {
        let chars: Vec<char> = "x \u{0645}\u{0631}\u{062D}\u{0628}\u{0627} y".chars().collect();
        let mut order = visual_order(&chars).unwrap();
        order.sort_unstable();
        assert_eq!(order, (0..chars.len()).collect::<Vec<_>>());
    }
}
