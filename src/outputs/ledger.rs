//! Shared append-only CSV ledger.
//!
//! Every run appends one row per article to `<base_dir>/<csv_filename>`. The
//! header is written only when the call creates the file, so rows from many
//! runs and portals accumulate under a single header. No row-level
//! deduplication happens here.

use crate::error::Result;
use crate::models::{Article, Label};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

pub const LEDGER_HEADER: [&str; 5] = ["fuente", "titulo", "descripcion", "url", "veracidad"];

/// One ledger row, in header order.
#[derive(Debug, Serialize)]
struct LedgerRow<'a> {
    fuente: &'a str,
    titulo: &'a str,
    descripcion: &'a str,
    url: &'a str,
    veracidad: u8,
}

/// Append `articles` to the ledger, tagging each row with `portal` and the
/// label's veracity flag.
///
/// Returns the ledger path. Rows end in CRLF. File I/O is blocking since
/// the `csv` writer is synchronous.
#[instrument(level = "info", skip_all, fields(base_dir = %base_dir.display(), %label, %portal, %filename))]
pub fn append_articles(
    articles: &[Article],
    label: Label,
    portal: &str,
    base_dir: &Path,
    filename: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(base_dir)?;
    let save_path = base_dir.join(filename);
    let file_exists = save_path.is_file();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&save_path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);

    if !file_exists {
        writer.write_record(LEDGER_HEADER)?;
    }

    let veracidad = label.veracity();
    for article in articles {
        writer.serialize(LedgerRow {
            fuente: portal,
            titulo: &article.title,
            descripcion: &article.description,
            url: &article.url,
            veracidad,
        })?;
    }
    writer.flush()?;

    info!(count = articles.len(), path = %save_path.display(), created = !file_exists, "Appended ledger rows");
    Ok(save_path)
}
