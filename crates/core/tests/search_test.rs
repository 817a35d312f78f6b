//! Rectangle extraction and substring search on assembled pages.

use glyphtext_core::utils::approx_eq;
use glyphtext_core::{GlyphEvent, PageGeometry, PageText, Rotation, build_page_text};

fn glyph(text: &str, x0: f64, y: f64, w: f64) -> GlyphEvent {
    GlyphEvent::new(text, (x0, y), (x0 + w, y), (x0, y - 2.0, x0 + w, y + 8.0))
}

fn run(text: &str, x0: f64, y: f64, w: f64) -> Vec<GlyphEvent> {
    text.chars()
        .enumerate()
        .filter(|(_, c)| *c != ' ')
        .map(|(i, c)| glyph(&c.to_string(), x0 + w * i as f64, y, w))
        .collect()
}

/// "Hello world" at y = 700 and "Goodbye" at y = 680, glyphs 6 wide from x = 10.
fn sample_page(geometry: PageGeometry) -> PageText {
    let mut glyphs = run("Hello world", 10.0, 700.0, 6.0);
    glyphs.extend(run("Goodbye", 10.0, 680.0, 6.0));
    build_page_text(&glyphs, geometry)
}

// ============================================================================
// Rectangle extraction
// ============================================================================

#[test]
fn test_rect_equal_to_line_bbox_returns_whole_line() {
    let page = sample_page(PageGeometry::default());
    let line = page.lines().next().unwrap();
    assert_eq!(page.extract_text(line.bbox()), ["Hello world"]);
}

#[test]
fn test_rect_selects_glyphs_inside() {
    let page = sample_page(PageGeometry::default());
    // "world" spans x 46..76.
    assert_eq!(page.extract_text((45.0, 690.0, 80.0, 712.0)), ["world"]);
    // Catches the last "o" of "Hello" at 34..40.
    assert_eq!(page.extract_text((37.0, 690.0, 80.0, 712.0)), ["o world"]);
}

#[test]
fn test_rect_spanning_lines_returns_one_string_per_line() {
    let page = sample_page(PageGeometry::default());
    assert_eq!(
        page.extract_text((0.0, 670.0, 200.0, 720.0)),
        ["Hello world", "Goodbye"]
    );
}

#[test]
fn test_rect_grazing_a_line_selects_nothing() {
    let page = sample_page(PageGeometry::default());
    // Line box is y 698..708; 1pt is 10% of its height.
    assert!(page.extract_text((0.0, 707.0, 200.0, 720.0)).is_empty());
    assert!(page.extract_text((300.0, 600.0, 400.0, 720.0)).is_empty());
}

#[test]
fn test_normalized_rect_on_unrotated_page() {
    let page = sample_page(PageGeometry::default());
    let rect = (45.0 / 612.0, 1.0 - 712.0 / 792.0, 80.0 / 612.0, 1.0 - 690.0 / 792.0);
    assert_eq!(page.extract_normalized(rect), ["world"]);
}

#[test]
fn test_normalized_rect_on_rotated_page() {
    let geometry = PageGeometry::new((0.0, 0.0, 612.0, 792.0), Rotation::Deg90);
    let page = sample_page(geometry);
    let content = (45.0, 690.0, 80.0, 712.0);
    let normalized = geometry.content_rect_to_normalized(content);
    assert_eq!(page.extract_normalized(normalized), ["world"]);
}

#[test]
fn test_control_code_glyphs_are_not_extracted() {
    let mut glyphs = run("ab", 10.0, 100.0, 6.0);
    glyphs.push(glyph("\u{1}", 22.0, 100.0, 6.0));
    let page = build_page_text(&glyphs, PageGeometry::default());
    assert!(page.has_control_codes());
    assert_eq!(page.extract_text((0.0, 90.0, 100.0, 110.0)), ["ab"]);
}

#[test]
fn test_rect_round_trips_for_every_rotation() {
    let crop = (20.0, 30.0, 620.0, 830.0);
    let rect = (0.1, 0.2, 0.45, 0.3);
    for rotation in [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ] {
        let g = PageGeometry::new(crop, rotation);
        let back = g.content_rect_to_normalized(g.normalized_rect_to_content(rect));
        for (a, b) in [(back.0, rect.0), (back.1, rect.1), (back.2, rect.2), (back.3, rect.3)] {
            assert!(approx_eq(a, b, 1e-9), "{rotation}: {back:?}");
        }
    }
}

// ============================================================================
// Substring search
// ============================================================================

#[test]
fn test_search_ignores_word_breaks_and_needle_whitespace() {
    let page = sample_page(PageGeometry::default());
    let found = page.find_all("o w");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text(), "ow");
    assert_eq!(found[0].origin(), (34.0, 700.0));
    assert_eq!(found[0].bbox(), (34.0, 698.0, 52.0, 708.0));
    assert_eq!(found[0].page(), 1);
}

#[test]
fn test_search_allows_overlapping_matches() {
    let page = build_page_text(&run("aaaa", 0.0, 100.0, 6.0), PageGeometry::default());
    let starts: Vec<f64> = page.find_all("aa").iter().map(|m| m.origin().0).collect();
    assert_eq!(starts, [0.0, 6.0, 12.0]);
}

#[test]
fn test_search_runs_in_line_order() {
    let page = sample_page(PageGeometry::default());
    let found = page.find_all("o");
    let ys: Vec<f64> = found.iter().map(|m| m.origin().1).collect();
    assert_eq!(ys, [700.0, 700.0, 680.0, 680.0]);
}

#[test]
fn test_empty_needle_finds_nothing() {
    let page = sample_page(PageGeometry::default());
    assert!(page.find_all("").is_empty());
    assert!(page.find_all(" \t").is_empty());
}

#[test]
fn test_match_is_normalized_through_page_geometry() {
    let page = sample_page(PageGeometry::default());
    let m = &page.find_all("Hello")[0];
    let (u, v) = m.normalized_origin();
    assert!(approx_eq(u, 10.0 / 612.0, 1e-12));
    assert!(approx_eq(v, 1.0 - 700.0 / 792.0, 1e-12));
    let (left, top, right, bottom) = m.normalized_bbox();
    assert!(left < right && top < bottom);
    assert!(approx_eq(top, 1.0 - 708.0 / 792.0, 1e-12));
}

// ============================================================================
// Bidirectional text
// ============================================================================

#[test]
fn test_hebrew_run_is_searched_in_visual_order() {
    // Logical order: ABC, then עברית, then DEF.
    let page = build_page_text(
        &run("ABC \u{5E2}\u{5D1}\u{5E8}\u{5D9}\u{5EA} DEF", 0.0, 100.0, 6.0),
        PageGeometry::default(),
    );

    let visual = "\u{5EA}\u{5D9}\u{5E8}\u{5D1}\u{5E2}";
    let found = page.find_all(visual);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text(), visual);
    // The first visual character is the last logical one, at x = 48.
    assert_eq!(found[0].origin(), (48.0, 100.0));
    assert_eq!(found[0].bbox(), (24.0, 98.0, 54.0, 108.0));

    assert!(page.find_all("\u{5E2}\u{5D1}\u{5E8}").is_empty());
    assert_eq!(page.find_all("ABC").len(), 1);
    assert_eq!(page.find_all("DEF").len(), 1);
    assert_eq!(page.find_all(&format!("ABC {visual} DEF")).len(), 1);
}
