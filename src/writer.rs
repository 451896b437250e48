use std::{
    io::Write,
    path::{Path, PathBuf},
};

use csv::WriterBuilder;
use tempfile::NamedTempFile;

use crate::{errors::ConvertResult, types::YnabRow};

/// `<dir>/<stem>-ynab.csv` next to the input file.
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    input.with_file_name(format!("{stem}-ynab.csv"))
}

/// Writes the YNAB4 header followed by `rows`. The header is written even
/// when there are no rows.
pub fn write_rows<W: Write>(w: W, rows: &[YnabRow]) -> ConvertResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(w);

    writer.write_record(YnabRow::HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes into a temporary file in the target directory and renames it
/// into place, so a failed write never leaves a partial file at `path`.
pub fn write_file(path: &Path, rows: &[YnabRow]) -> ConvertResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_rows(&mut tmp, rows)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
