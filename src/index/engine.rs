use super::types::{RegionRecord, ScoredRegion};
use crate::indicators::{all_indicators, Polarity, INDICATOR_COUNT};
use crate::weights::WeightVector;

/// Per-indicator population moments over the records that carry a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Moments {
    pub mean: f64,
    pub stddev: f64,
    pub count: usize,
}

/// Computes population mean and population standard deviation
/// (denominator = N, not N-1) for each indicator across the full record
/// set, skipping missing cells.
pub fn moments(records: &[RegionRecord]) -> [Moments; INDICATOR_COUNT] {
    let mut out = [Moments::default(); INDICATOR_COUNT];

    for slot in 0..INDICATOR_COUNT {
        let present: Vec<f64> = records.iter().filter_map(|r| r.values[slot]).collect();
        if present.is_empty() {
            continue;
        }
        let n = present.len() as f64;
        let mean = present.iter().sum::<f64>() / n;
        let variance = present.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        out[slot] = Moments {
            mean,
            stddev: variance.sqrt(),
            count: present.len(),
        };
    }

    out
}

/// Standardizes every indicator of every record into a sign-corrected
/// population z-score.
///
/// Pure function of the record set and the polarity table; weights play
/// no part. A zero-variance indicator yields NaN (distinct from a valid
/// zero), and a missing cell stays missing.
pub fn standardize(records: &[RegionRecord]) -> Vec<[Option<f64>; INDICATOR_COUNT]> {
    let stats = moments(records);

    records
        .iter()
        .map(|rec| {
            let mut z = [None; INDICATOR_COUNT];
            for ind in all_indicators() {
                let slot = ind.slot();
                let value = match rec.values[slot] {
                    Some(v) => v,
                    None => continue,
                };
                let m = &stats[slot];
                let raw_z = if m.stddev == 0.0 {
                    f64::NAN
                } else {
                    (value - m.mean) / m.stddev
                };
                z[slot] = Some(match ind.polarity() {
                    Polarity::Positive => raw_z,
                    Polarity::Negative => -raw_z,
                });
            }
            z
        })
        .collect()
}

/// Weighted sum of the standardized values. Missing and NaN entries
/// contribute 0; the remaining weights are NOT renormalized.
pub fn composite(standardized: &[Option<f64>; INDICATOR_COUNT], weights: &WeightVector) -> f64 {
    standardized
        .iter()
        .zip(weights.as_slice())
        .filter_map(|(z, w)| match z {
            Some(v) if v.is_finite() => Some(v * w),
            _ => None,
        })
        .sum()
}

/// Full scoring pass: standardize once over the whole record set, then
/// append the weighted composite per region. Recomputed as a unit on
/// every weight change because z-scores depend on the population.
pub fn score_all(records: &[RegionRecord], weights: &WeightVector) -> Vec<ScoredRegion> {
    let standardized = standardize(records);

    records
        .iter()
        .zip(standardized)
        .map(|(rec, z)| ScoredRegion {
            name: rec.name.clone(),
            fips: rec.fips.clone(),
            values: rec.values,
            composite: composite(&z, weights),
            standardized: z,
        })
        .collect()
}
