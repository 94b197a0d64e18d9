use crate::records::MoleculeRecord;

use flate2::read::GzDecoder;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read molecule records from a CSV file: header row, identifier in the
/// first column, numeric targets in the remaining columns.
///
/// Malformed numeric fields are reported as errors with their row, never
/// silently coerced.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<MoleculeRecord>, Box<dyn Error>> {
    let file = File::open(path.as_ref())?;
    records_from(BufReader::new(file))
}

/// Same as [`read_records`] for a gzip-compressed CSV file.
pub fn read_records_gz(path: impl AsRef<Path>) -> Result<Vec<MoleculeRecord>, Box<dyn Error>> {
    let file = File::open(path.as_ref())?;
    records_from(GzDecoder::new(BufReader::new(file)))
}

fn records_from<R: Read>(reader: R) -> Result<Vec<MoleculeRecord>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        let mut fields = record.iter();
        let smiles = fields
            .next()
            .ok_or_else(|| format!("row {}: empty record", row + 1))?
            .to_string();

        let mut targets = Vec::new();
        for (col, field) in fields.enumerate() {
            let value: f64 = field.trim().parse().map_err(|_| {
                format!(
                    "row {}: target column {} is not numeric: {:?}",
                    row + 1,
                    col,
                    field
                )
            })?;
            targets.push(value);
        }
        records.push(MoleculeRecord { smiles, targets });
    }

    Ok(records)
}
