//! CSV input handling.
//!
//! The input file carries a header row with at least the columns `Artist`
//! and `Track`. Column order does not matter and additional columns are
//! ignored. Every following record yields one [`CsvRow`].

use std::{io::Read, path::Path};

use csv::ReaderBuilder;

use crate::{Res, error::Error, types::CsvRow};

const ARTIST_COLUMN: &str = "Artist";
const TRACK_COLUMN: &str = "Track";

/// Reads all rows of the CSV file at `path`.
///
/// # Errors
///
/// - [`Error::Csv`] if the file cannot be opened or a record is malformed
/// - [`Error::MissingColumn`] if the header lacks `Artist` or `Track`
pub fn read_rows(path: impl AsRef<Path>) -> Res<Vec<CsvRow>> {
    let path = path.as_ref();
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    collect_rows(reader).map_err(|e| match e {
        Error::Csv { source, .. } => Error::Csv {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Reads rows from any CSV source, such as an in-memory buffer.
pub fn read_rows_from<R: Read>(input: R) -> Res<Vec<CsvRow>> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    collect_rows(reader)
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Res<Vec<CsvRow>> {
    let headers = reader.headers().map_err(csv_error)?;
    for column in [ARTIST_COLUMN, TRACK_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn(column));
        }
    }

    reader
        .deserialize::<CsvRow>()
        .map(|record| record.map_err(csv_error))
        .collect()
}

fn csv_error(source: csv::Error) -> Error {
    Error::Csv {
        path: "<input>".into(),
        source,
    }
}
