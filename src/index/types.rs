use crate::indicators::{Indicator, INDICATOR_COUNT};

/// One input row before identifier resolution. Cells that were empty or
/// unparsable stay `None` (missing is never coerced to zero).
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub name: String,
    pub raw_id: Option<String>,
    pub values: [Option<f64>; INDICATOR_COUNT],
}

/// A row with a resolved, canonical 5-char fips.
#[derive(Debug, Clone)]
pub struct RegionRecord {
    pub name: String,
    pub fips: String,
    pub values: [Option<f64>; INDICATOR_COUNT],
}

/// A region with standardized indicator values and the weighted
/// composite. `standardized[slot]` is `None` when the indicator was
/// missing from the record and `Some(NAN)` when the indicator had zero
/// variance across the record set; both contribute 0 to the composite.
#[derive(Debug, Clone)]
pub struct ScoredRegion {
    pub name: String,
    pub fips: String,
    pub values: [Option<f64>; INDICATOR_COUNT],
    pub standardized: [Option<f64>; INDICATOR_COUNT],
    pub composite: f64,
}

impl ScoredRegion {
    pub fn value(&self, indicator: Indicator) -> Option<f64> {
        self.values[indicator.slot()]
    }

    pub fn z_score(&self, indicator: Indicator) -> Option<f64> {
        self.standardized[indicator.slot()]
    }
}
