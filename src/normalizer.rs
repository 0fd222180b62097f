use crate::boundary::BoundarySet;
use crate::error::{UoiError, UoiResult};
use crate::index::types::{RawRecord, RegionRecord};
use std::collections::HashSet;

/// Canonicalizes an explicit identifier to the 5-char FIPS form.
///
/// Left-pads with zeros to width 5, then repairs codes stored without a
/// state prefix: if the padded code does not start with `prefix`, the
/// leading 2 chars are replaced by `prefix` and the trailing 3 kept
/// ("001" under "06" becomes "06001").
pub fn canonical_fips(raw: &str, prefix: &str) -> String {
    let padded = format!("{:0>5}", raw.trim());
    if padded.starts_with(prefix) {
        padded
    } else {
        format!("{}{}", prefix, &padded[padded.len() - 3..])
    }
}

/// Result of a normalization pass: resolved records plus the count of
/// records dropped for lack of a resolvable identifier.
#[derive(Debug)]
pub struct Normalized {
    pub records: Vec<RegionRecord>,
    pub excluded: usize,
}

/// Assigns a canonical fips to every raw record.
///
/// Records with an explicit identifier are repaired in place; the rest
/// are resolved by name against the boundary set. Unmatched names are
/// dropped (warned, never silently scored). A duplicate resolved fips
/// breaks the id/name bijection and fails the whole batch.
pub fn assign_fips(records: Vec<RawRecord>, boundaries: &BoundarySet) -> UoiResult<Normalized> {
    let prefix = boundaries.prefix();
    let mut resolved = Vec::with_capacity(records.len());
    let mut seen: HashSet<String> = HashSet::new();
    let mut excluded = 0;

    for rec in records {
        let fips = match &rec.raw_id {
            Some(id) => canonical_fips(id, prefix),
            None => match boundaries.lookup_name(&rec.name) {
                Some(fips) => fips.to_string(),
                None => {
                    tracing::warn!(county = %rec.name, "no boundary match, record excluded");
                    excluded += 1;
                    continue;
                }
            },
        };

        if !seen.insert(fips.clone()) {
            return Err(UoiError::Validation(format!(
                "duplicate region id '{}' (record '{}')",
                fips, rec.name
            )));
        }

        resolved.push(RegionRecord {
            name: rec.name,
            fips,
            values: rec.values,
        });
    }

    Ok(Normalized {
        records: resolved,
        excluded,
    })
}
