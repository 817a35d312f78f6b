//! Line and word reconstruction from unordered glyph streams.

use glyphtext_core::{GlyphEvent, PageGeometry, PageText, Rotation, build_page_text};

fn glyph(text: &str, x0: f64, y: f64, w: f64) -> GlyphEvent {
    GlyphEvent::new(text, (x0, y), (x0 + w, y), (x0, y - 2.0, x0 + w, y + 8.0))
}

/// Glyphs of `text` laid out left to right, `w` wide, spaces as gaps.
fn run(text: &str, x0: f64, y: f64, w: f64) -> Vec<GlyphEvent> {
    text.chars()
        .enumerate()
        .filter(|(_, c)| *c != ' ')
        .map(|(i, c)| glyph(&c.to_string(), x0 + w * i as f64, y, w))
        .collect()
}

fn lines(page: &PageText) -> Vec<String> {
    page.lines().map(|l| l.text()).collect()
}

fn page_of(glyphs: &[GlyphEvent]) -> PageText {
    build_page_text(glyphs, PageGeometry::default())
}

// ============================================================================
// Arrival order
// ============================================================================

#[test]
fn test_reconstruction_ignores_arrival_order() {
    let mut glyphs = run("Hello world", 10.0, 700.0, 6.0);
    glyphs.extend(run("second line", 10.0, 680.0, 6.0));

    let expected = page_of(&glyphs).to_string();
    assert_eq!(lines(&page_of(&glyphs)), ["Hello world", "second line"]);

    let reversed: Vec<_> = glyphs.iter().rev().cloned().collect();
    assert_eq!(page_of(&reversed).to_string(), expected);

    let (even, odd): (Vec<_>, Vec<_>) = glyphs
        .iter()
        .cloned()
        .enumerate()
        .partition(|(i, _)| i % 2 == 0);
    let interleaved: Vec<_> = odd
        .into_iter()
        .chain(even.into_iter().rev())
        .map(|(_, g)| g)
        .collect();
    assert_eq!(page_of(&interleaved).to_string(), expected);

    let mut rotated = glyphs.clone();
    rotated.rotate_left(7);
    assert_eq!(page_of(&rotated).to_string(), expected);
}

#[test]
fn test_lines_run_top_to_bottom() {
    let mut glyphs = run("bottom", 10.0, 100.0, 6.0);
    glyphs.extend(run("top", 10.0, 700.0, 6.0));
    glyphs.extend(run("middle", 10.0, 400.0, 6.0));
    assert_eq!(lines(&page_of(&glyphs)), ["top", "middle", "bottom"]);
}

// ============================================================================
// Word breaks
// ============================================================================

#[test]
fn test_gap_at_space_threshold_stays_in_word() {
    let page = page_of(&[glyph("H", 0.0, 100.0, 10.0), glyph("i", 12.0, 100.0, 10.0)]);
    assert_eq!(lines(&page), ["Hi"]);
}

#[test]
fn test_gap_above_space_threshold_breaks_word() {
    let page = page_of(&[glyph("H", 0.0, 100.0, 10.0), glyph("i", 12.1, 100.0, 10.0)]);
    assert_eq!(lines(&page), ["H i"]);
}

// ============================================================================
// Duplicates
// ============================================================================

#[test]
fn test_overdrawn_glyph_collapses() {
    let page = page_of(&[glyph("B", 0.0, 100.0, 10.0), glyph("B", 0.6, 100.0, 10.0)]);
    assert_eq!(lines(&page), ["B"]);
    assert_eq!(page.lines().next().unwrap().glyph_count(), 1);
}

#[test]
fn test_poor_mans_bold_word_collapses() {
    let mut glyphs = run("Bold", 0.0, 100.0, 8.0);
    glyphs.extend(run("Bold", 0.4, 100.0, 8.0));
    assert_eq!(lines(&page_of(&glyphs)), ["Bold"]);
}

#[test]
fn test_half_overlap_is_kept() {
    let page = page_of(&[glyph("A", 0.0, 100.0, 10.0), glyph("B", 5.0, 100.0, 10.0)]);
    assert_eq!(lines(&page), ["AB"]);
    assert_eq!(page.lines().next().unwrap().glyph_count(), 2);
}

#[test]
fn test_just_over_half_overlap_collapses() {
    let page = page_of(&[glyph("A", 0.0, 100.0, 10.0), glyph("B", 4.9, 100.0, 10.0)]);
    assert_eq!(lines(&page), ["A"]);
}

#[test]
fn test_small_overlap_is_kept() {
    // Kerned pair overlapping by 20%.
    let page = page_of(&[glyph("A", 0.0, 100.0, 10.0), glyph("V", 8.0, 100.0, 10.0)]);
    assert_eq!(lines(&page), ["AV"]);
}

// ============================================================================
// Directions and rotation
// ============================================================================

fn north(text: &str, x: f64, y0: f64, w: f64) -> GlyphEvent {
    GlyphEvent::new(text, (x, y0), (x, y0 + w), (x - 8.0, y0, x + 2.0, y0 + w))
}

fn south(text: &str, x: f64, y0: f64, w: f64) -> GlyphEvent {
    GlyphEvent::new(text, (x, y0), (x, y0 - w), (x - 2.0, y0 - w, x + 8.0, y0))
}

fn west(text: &str, x0: f64, y: f64, w: f64) -> GlyphEvent {
    GlyphEvent::new(text, (x0, y), (x0 - w, y), (x0 - w, y - 8.0, x0, y + 2.0))
}

#[test]
fn test_each_direction_is_assembled_separately() {
    let glyphs = [
        glyph("a", 100.0, 500.0, 6.0),
        north("n", 300.0, 100.0, 6.0),
        glyph("b", 106.0, 500.0, 6.0),
        north("o", 300.0, 106.0, 6.0),
    ];
    let page = page_of(&glyphs);
    assert_eq!(page.directions().len(), 2);
    assert_eq!(lines(&page), ["ab", "no"]);
}

#[test]
fn test_rotation_for_each_reading_direction() {
    let cases: [(fn(&str, f64, f64, f64) -> GlyphEvent, Rotation); 4] = [
        (glyph, Rotation::Deg0),
        (north, Rotation::Deg270),
        (west, Rotation::Deg180),
        (south, Rotation::Deg90),
    ];
    for (make, rotation) in cases {
        let glyphs: Vec<_> = (0..5)
            .map(|i| make("x", 300.0 + 6.0 * i as f64, 300.0, 6.0))
            .collect();
        assert_eq!(page_of(&glyphs).detect_rotation(), rotation, "{rotation}");
    }
}

#[test]
fn test_direction_tie_keeps_page_upright() {
    let glyphs = [
        glyph("a", 100.0, 500.0, 6.0),
        glyph("b", 106.0, 500.0, 6.0),
        north("c", 300.0, 100.0, 6.0),
        north("d", 300.0, 106.0, 6.0),
    ];
    let page = page_of(&glyphs);
    assert!(page.text_direction().is_none());
    assert_eq!(page.detect_rotation(), Rotation::Deg0);
}

#[test]
fn test_majority_direction_wins() {
    let glyphs = [
        glyph("a", 100.0, 500.0, 6.0),
        north("c", 300.0, 100.0, 6.0),
        north("d", 300.0, 106.0, 6.0),
    ];
    let page = page_of(&glyphs);
    let (x, y) = page.text_direction().unwrap();
    assert!(x.abs() < 1e-3 && (y - 1.0).abs() < 1e-3);
    assert_eq!(page.detect_rotation(), Rotation::Deg270);
}

#[test]
fn test_empty_page_has_no_direction() {
    let page = page_of(&[]);
    assert!(!page.has_glyphs());
    assert!(page.text_direction().is_none());
    assert_eq!(page.detect_rotation(), Rotation::Deg0);
}
