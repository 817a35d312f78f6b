//! Pieces shared by the binaries. Not every binary uses every item.

#![allow(dead_code)]

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use clap::{ArgAction, Args};
use glyphtext_core::layout::params::{
    DUPLICATE_OVERLAP_RATIO, LINE_TOLERANCE_RATIO, RECT_OVERLAP_RATIO, SPACE_RATIO,
};
use glyphtext_core::{AssemblyParams, DocumentText, GlyphDump};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

/// Arguments common to `extract-texts` and `find-texts`.
#[derive(Args, Debug)]
pub struct JobArgs {
    /// Path to the JSON job description
    pub job: PathBuf,

    /// Glyph dump to read instead of the job's `input`
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, action = ArgAction::SetTrue)]
    pub pretty: bool,

    #[command(flatten)]
    pub params: ParamArgs,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    pub debug: bool,
}

/// Assembly tuning flags.
#[derive(Args, Debug, Clone, Copy)]
pub struct ParamArgs {
    /// Line membership tolerance (relative to glyph height)
    #[arg(long = "line-tolerance", default_value_t = LINE_TOLERANCE_RATIO)]
    pub line_tolerance: f64,

    /// Word break threshold (relative to glyph advance)
    #[arg(long = "space-ratio", default_value_t = SPACE_RATIO)]
    pub space_ratio: f64,

    /// Duplicate glyph overlap (relative to the shorter glyph)
    #[arg(long = "duplicate-overlap", default_value_t = DUPLICATE_OVERLAP_RATIO)]
    pub duplicate_overlap: f64,

    /// Overlap needed for a rectangle to select a line or glyph
    #[arg(long = "rect-overlap", default_value_t = RECT_OVERLAP_RATIO)]
    pub rect_overlap: f64,
}

impl ParamArgs {
    pub fn build(&self) -> Result<AssemblyParams> {
        for (name, v) in [
            ("line-tolerance", self.line_tolerance),
            ("space-ratio", self.space_ratio),
            ("duplicate-overlap", self.duplicate_overlap),
            ("rect-overlap", self.rect_overlap),
        ] {
            ensure!(v.is_finite() && v >= 0.0, "--{name} must be a non-negative number");
        }
        Ok(AssemblyParams::new(
            self.line_tolerance,
            self.space_ratio,
            self.duplicate_overlap,
            self.rect_overlap,
        ))
    }
}

pub fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

pub fn read_job<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("cannot open job {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid job {}", path.display()))
}

/// Picks the dump path: the command line wins over the job file.
pub fn dump_path(flag: Option<&Path>, job: Option<&Path>) -> Result<PathBuf> {
    match flag.or(job) {
        Some(path) => Ok(path.to_path_buf()),
        None => bail!("no glyph dump given: set `input` in the job or pass --input"),
    }
}

pub fn load_document(path: &Path, params: AssemblyParams) -> Result<DocumentText> {
    let file = File::open(path).with_context(|| format!("cannot open dump {}", path.display()))?;
    let dump = GlyphDump::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid dump {}", path.display()))?;
    let doc = DocumentText::build(&dump, params)
        .with_context(|| format!("cannot build text for {}", path.display()))?;
    debug!(path = %path.display(), pages = doc.len(), "document loaded");
    Ok(doc)
}

pub fn write_output<T: Serialize>(value: &T, path: Option<&Path>, pretty: bool) -> Result<()> {
    let mut out: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
