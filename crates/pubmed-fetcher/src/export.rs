//! Result export: CSV file or console listing.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{ExportResult, FileSystemError, Result};
use crate::formatters::{self, ConsoleFormat};
use crate::models::{COLUMNS, FilteredPaper};

/// Write `papers` as CSV to `path`, one row per paper in input order.
///
/// The header row is always written; there is no index column.
pub fn export_to_csv(papers: &[FilteredPaper], path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| FileSystemError::io(path, e))?;

    write_csv(papers, file)?;

    info!(path = %path.display(), rows = papers.len(), "wrote CSV");
    Ok(())
}

/// Write `papers` as CSV to any writer.
pub fn write_csv<W: Write>(papers: &[FilteredPaper], writer: W) -> ExportResult<()> {
    let mut csv = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    csv.write_record(COLUMNS)?;
    for paper in papers {
        csv.serialize(paper)?;
    }

    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Print `papers` to `out` in the chosen console format.
pub fn print_papers<W: Write>(
    papers: &[FilteredPaper],
    format: ConsoleFormat,
    out: &mut W,
) -> Result<()> {
    let rendered = formatters::render(papers, format)?;

    writeln!(out, "{rendered}").map_err(|e| FileSystemError::io("<stdout>", e))?;
    Ok(())
}
