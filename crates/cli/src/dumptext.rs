//! dumptext - Print the reconstructed lines of a glyph dump
//!
//! For each page: the lines of every text direction with their reference
//! point, followed by the rotation that would turn the page upright.

mod common;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use common::{ParamArgs, init_logging, load_document};

/// Print the reconstructed text lines of a glyph dump.
#[derive(Parser, Debug)]
#[command(name = "dumptext")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the glyph dump
    dump: PathBuf,

    /// Only print these pages (1-based, negative counts from the end)
    #[arg(short = 'p', long = "page", allow_negative_numbers = true)]
    pages: Vec<i32>,

    #[command(flatten)]
    params: ParamArgs,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let doc = load_document(&args.dump, args.params.build()?)?;
    let selected: Vec<usize> = if args.pages.is_empty() {
        (1..=doc.len()).collect()
    } else {
        args.pages
            .iter()
            .filter_map(|&p| doc.resolve_page(p))
            .collect()
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for number in selected {
        let Some(page) = doc.page(number) else {
            continue;
        };
        writeln!(out, "Page {number}:")?;
        write!(out, "{page}")?;
        writeln!(out, "Rotation: {}", page.detect_rotation())?;
        if page.has_control_codes() {
            writeln!(out, "Warning: control codes present")?;
        }
    }
    out.flush()?;
    Ok(())
}
