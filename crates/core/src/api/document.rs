//! Document-level text: all pages built in parallel, plus cross-page queries.

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::dump::{GlyphDump, PageDump};
use crate::error::{Result, TextError};
use crate::geometry::{PageGeometry, Rotation};
use crate::layout::params::AssemblyParams;
use crate::page::{PageText, PageTextBuilder};
use crate::search::Match;

pub(crate) fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Summary reported alongside extraction and search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub number_of_pages: usize,
    pub contains_glyphs: bool,
    pub contains_control_codes: bool,
    pub first_page_width: f64,
    pub first_page_height: f64,
}

/// Reconstructed text of every page of a document.
#[derive(Debug, Clone, Default)]
pub struct DocumentText {
    pages: Vec<PageText>,
}

fn build_page(
    number: usize,
    page: &PageDump,
    geometry: PageGeometry,
    params: AssemblyParams,
) -> PageText {
    let mut builder = PageTextBuilder::with_params(number, geometry, params);
    for record in &page.glyphs {
        builder.add(&record.to_event());
    }
    builder.build()
}

impl DocumentText {
    /// Builds every page of a dump.
    ///
    /// Page geometry is validated up front; pages are then assembled in
    /// parallel and returned in document order.
    pub fn build(dump: &GlyphDump, params: AssemblyParams) -> Result<Self> {
        let geometries = dump
            .pages
            .iter()
            .map(PageDump::geometry)
            .collect::<Result<Vec<_>>>()?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(default_thread_count())
            .build()
            .map_err(|e| TextError::ThreadPool(e.to_string()))?;

        let mut results: Vec<(usize, PageText)> = pool.install(|| {
            dump.pages
                .par_iter()
                .zip(geometries.into_par_iter())
                .enumerate()
                .map(|(idx, (page, geometry))| {
                    (idx, build_page(idx + 1, page, geometry, params))
                })
                .collect()
        });
        results.sort_by_key(|(idx, _)| *idx);

        let pages: Vec<PageText> = results.into_iter().map(|(_, page)| page).collect();
        debug!(pages = pages.len(), "document text built");
        Ok(Self { pages })
    }

    /// Wraps pages built elsewhere, in document order.
    pub fn from_pages(pages: Vec<PageText>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }

    /// Page by 1-based number.
    pub fn page(&self, number: usize) -> Option<&PageText> {
        number.checked_sub(1).and_then(|i| self.pages.get(i))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Resolves a page reference; negative numbers count from the end.
    ///
    /// Returns the 1-based page number, or `None` when out of range.
    pub fn resolve_page(&self, page: i32) -> Option<usize> {
        let len = i64::try_from(self.pages.len()).ok()?;
        let page = i64::from(page);
        let resolved = if page < 0 { len + page + 1 } else { page };
        if (1..=len).contains(&resolved) {
            usize::try_from(resolved).ok()
        } else {
            None
        }
    }

    pub fn info(&self) -> DocumentInfo {
        let (first_page_width, first_page_height) = self
            .pages
            .first()
            .map_or((0.0, 0.0), |p| p.geometry().rotated_size());
        DocumentInfo {
            number_of_pages: self.pages.len(),
            contains_glyphs: self.pages.iter().any(PageText::has_glyphs),
            contains_control_codes: self.pages.iter().any(PageText::has_control_codes),
            first_page_width,
            first_page_height,
        }
    }

    /// Rotation correction of every page, in page order.
    pub fn detect_rotations(&self) -> Vec<Rotation> {
        self.pages.iter().map(PageText::detect_rotation).collect()
    }

    /// Finds the `index`-th occurrence of `needle` on the listed pages.
    ///
    /// A positive index counts from the start of the first listed page, a
    /// negative one from the end of the last (`-1` is the last occurrence).
    /// Index zero, an empty needle and exhausted searches give `None`.
    pub fn find_occurrence(&self, needle: &str, index: i32, pages: &[i32]) -> Option<Match> {
        if index == 0 || needle.is_empty() {
            return None;
        }

        let mut resolved = pages.iter().filter_map(|&p| self.resolve_page(p));
        let mut remaining = usize::try_from(index.unsigned_abs()).ok()?;

        let mut scan = |number: usize| -> Option<Match> {
            let page = self.page(number)?;
            let mut found = page.find_all(needle);
            if index < 0 {
                found.reverse();
            }
            if remaining <= found.len() {
                return found.into_iter().nth(remaining - 1);
            }
            remaining -= found.len();
            None
        };

        if index > 0 {
            resolved.find_map(|n| scan(n))
        } else {
            resolved.rev().find_map(|n| scan(n))
        }
    }
}
