use super::types::RawRecord;
use crate::error::{UoiError, UoiResult};
use crate::indicators::{all_indicators, INDICATOR_COUNT};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const NAME_COLUMN: &str = "County";
const ID_COLUMNS: [&str; 2] = ["GEOID", "fips"];

/// Loads the raw indicator table from delimited text.
///
/// Columns are bound by header name: `County` (required), an optional
/// `GEOID`/`fips` identifier column, and the nine indicator columns.
/// Unknown columns are ignored; empty or non-numeric cells become
/// missing values.
pub fn load_table<R: Read>(reader: R, debug: bool) -> UoiResult<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();

    let name_idx = headers
        .iter()
        .position(|h| h.trim() == NAME_COLUMN)
        .ok_or_else(|| {
            UoiError::Validation(format!("input table has no '{}' column", NAME_COLUMN))
        })?;

    let id_idx = headers
        .iter()
        .position(|h| ID_COLUMNS.contains(&h.trim()));

    // slot -> column position, for the indicator columns present
    let mut indicator_cols: [Option<usize>; INDICATOR_COUNT] = [None; INDICATOR_COUNT];
    for ind in all_indicators() {
        indicator_cols[ind.slot()] = headers.iter().position(|h| h.trim() == ind.column());
    }

    let mut records = Vec::new();
    let mut skipped = 0;

    for result in rdr.records() {
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                tracing::warn!(error = %e, "CSV row parse error, skipped");
                skipped += 1;
                continue;
            }
        };

        let name = match rec.get(name_idx) {
            Some(n) if !n.trim().is_empty() => n.trim().to_string(),
            _ => {
                skipped += 1;
                continue;
            }
        };

        let raw_id = id_idx
            .and_then(|i| rec.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let mut values = [None; INDICATOR_COUNT];
        for (slot, col) in indicator_cols.iter().enumerate() {
            if let Some(i) = col {
                // Literal NaN/inf cells count as missing; a non-finite
                // value would poison the column's population moments.
                values[slot] = rec
                    .get(*i)
                    .and_then(|s| s.trim().parse::<f64>().ok())
                    .filter(|v| v.is_finite());
            }
        }

        records.push(RawRecord {
            name,
            raw_id,
            values,
        });
    }

    if debug && skipped > 0 {
        println!("   Skipped {} unusable rows in indicator table.", skipped);
    }

    Ok(records)
}

pub fn load_table_from_file<P: AsRef<Path>>(path: P, debug: bool) -> UoiResult<Vec<RawRecord>> {
    let file = File::open(path)?;
    load_table(file, debug)
}
