//! extract-texts - Read the text inside page rectangles
//!
//! Takes a JSON job listing rectangles in normalized page coordinates
//! (0..1, top-left origin, as the page is displayed) and fills in the text
//! lines found inside each of them.

mod common;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use glyphtext_core::{DocumentInfo, DocumentText};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use common::{JobArgs, dump_path, init_logging, load_document, read_job, write_output};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input: Option<PathBuf>,
    rects: Vec<RectQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number_of_pages: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    additional_info: Option<DocumentInfo>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RectQuery {
    page: i64,
    rect: [f64; 4],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lines: Option<Vec<String>>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// Extract the text inside rectangles of a glyph dump.
#[derive(Parser, Debug)]
#[command(name = "extract-texts")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    job: JobArgs,
}

fn main() -> Result<()> {
    let args = Args::parse().job;
    init_logging(args.debug);

    let mut job: ExtractJob = read_job(&args.job)?;
    let input = dump_path(args.input.as_deref(), job.input.as_deref())?;
    let doc = load_document(&input, args.params.build()?)?;

    apply(&mut job, &doc);
    write_output(&job, args.output.as_deref(), args.pretty)
}

/// Fills every rectangle on an existing page; the others are left untouched.
fn apply(job: &mut ExtractJob, doc: &DocumentText) {
    for query in &mut job.rects {
        let Some(page) = usize::try_from(query.page).ok().and_then(|n| doc.page(n)) else {
            debug!(page = query.page, "rectangle on a missing page skipped");
            continue;
        };
        let [u0, v0, u1, v1] = query.rect;
        query.lines = Some(page.extract_normalized((u0, v0, u1, v1)));
    }

    job.number_of_pages = Some(doc.len());
    job.additional_info = Some(doc.info());
}
