//! CSV export and import of generated datasets.

mod star;

pub use star::{
    write_star_schema, DIM_CAMPAIGN_FILE, DIM_CHANNEL_FILE, DIM_DATE_FILE, FACT_FILE,
};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;

use crate::domain::{Dataset, DatasetRow};
use crate::error::{DatasetError, Result};

/// Write the flat dataset (daily records joined with campaign attributes)
/// and return the number of rows written.
pub fn write_flat<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<usize> {
    let rows = dataset.flat_rows();
    write_table(&rows, path)?;
    Ok(rows.len())
}

/// Serialize rows into a headered CSV file.
pub(crate) fn write_table<T: Serialize, P: AsRef<Path>>(rows: &[T], path: P) -> Result<()> {
    let display = path.as_ref().display().to_string();
    let file = File::create(path.as_ref())?;
    let mut writer = WriterBuilder::new().from_writer(BufWriter::new(file));

    for row in rows {
        writer.serialize(row).map_err(|source| DatasetError::Write {
            path: display.clone(),
            source,
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Read a flat dataset CSV back into rows, failing on the first malformed
/// row with its 1-based line number.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<DatasetRow>> {
    let file = File::open(path.as_ref())?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize::<DatasetRow>().enumerate() {
        // Line numbers are 1-based and the header occupies line 1.
        let row_number = index + 2;
        let row = result.map_err(|e| DatasetError::MalformedRow {
            row: row_number,
            reason: e.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}
