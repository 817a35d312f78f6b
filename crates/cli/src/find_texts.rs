//! find-texts - Locate strings in a glyph dump
//!
//! Each match in the JSON job names a string, the pages to scan and which
//! occurrence to pick. Found matches get their page, the normalized
//! baseline start of the first glyph and the normalized bounding box.

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
struct FindJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input: Option<PathBuf>,
    matches: Vec<MatchQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    additional_info: Option<DocumentInfo>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

fn first_occurrence() -> i32 {
    1
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchQuery {
    text: String,
    #[serde(default)]
    pages: Vec<i32>,
    #[serde(default = "first_occurrence")]
    index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coords: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bbox: Option<[f64; 4]>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// Find occurrences of strings in a glyph dump.
#[derive(Parser, Debug)]
#[command(name = "find-texts")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    job: JobArgs,
}

fn main() -> Result<()> {
    let args = Args::parse().job;
    init_logging(args.debug);

    let mut job: FindJob = read_job(&args.job)?;
    let input = dump_path(args.input.as_deref(), job.input.as_deref())?;
    let doc = load_document(&input, args.params.build()?)?;

    apply(&mut job, &doc);
    write_output(&job, args.output.as_deref(), args.pretty)
}

/// Fills every query that has a match; misses stay unset.
fn apply(job: &mut FindJob, doc: &DocumentText) {
    for query in &mut job.matches {
        let Some(found) = doc.find_occurrence(&query.text, query.index, &query.pages) else {
            debug!(text = %query.text, index = query.index, "no match");
            continue;
        };
        let (u, v) = found.normalized_origin();
        let (left, top, right, bottom) = found.normalized_bbox();
        query.page = Some(found.page());
        query.coords = Some([u, v]);
        query.bbox = Some([left, top, right, bottom]);
    }

    job.additional_info = Some(doc.info());
}
