pub mod engine;
pub mod loader;
pub mod types;

pub use self::types::{RawRecord, RegionRecord, ScoredRegion};

use crate::error::{UoiError, UoiResult};
use crate::indicators::{all_indicators, Indicator};
use crate::weights::WeightVector;
use std::io::Write;
use std::str::FromStr;

/// What a comparison view measures: one raw indicator, or the composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Indicator(Indicator),
    Composite,
}

impl FromStr for Metric {
    type Err = UoiError;

    fn from_str(s: &str) -> UoiResult<Self> {
        let key = s.trim();
        if key.eq_ignore_ascii_case("uoi") {
            return Ok(Metric::Composite);
        }
        Indicator::from_str(key)
            .map(Metric::Indicator)
            .map_err(|_| UoiError::NotFound(format!("unknown indicator '{}'", key)))
    }
}

/// The scored output table. Holds the full set of scored regions for one
/// weight vector; lookups surface NotFound instead of substituting
/// defaults.
#[derive(Debug)]
pub struct ScoredTable {
    pub regions: Vec<ScoredRegion>,
}

impl ScoredTable {
    pub fn compute(records: &[RegionRecord], weights: &WeightVector) -> Self {
        Self {
            regions: engine::score_all(records, weights),
        }
    }

    /// Case-insensitive county lookup.
    pub fn by_name(&self, name: &str) -> UoiResult<&ScoredRegion> {
        let wanted = name.trim();
        self.regions
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UoiError::NotFound(format!("county '{}' not in table", wanted)))
    }

    pub fn metric_value(&self, region: &ScoredRegion, metric: Metric) -> UoiResult<f64> {
        match metric {
            Metric::Composite => Ok(region.composite),
            Metric::Indicator(ind) => region.value(ind).ok_or_else(|| {
                UoiError::NotFound(format!("{} has no {} value", region.name, ind))
            }),
        }
    }

    /// Mean of a metric over the regions whose fips is in `group`.
    pub fn group_mean(&self, group: &[&str], metric: Metric) -> UoiResult<f64> {
        let members: Vec<&ScoredRegion> = self
            .regions
            .iter()
            .filter(|r| group.contains(&r.fips.as_str()))
            .collect();
        if members.is_empty() {
            return Err(UoiError::NotFound(
                "no scored county in region group".to_string(),
            ));
        }

        let mut sum = 0.0;
        let mut count = 0usize;
        for region in members {
            match metric {
                Metric::Composite => {
                    sum += region.composite;
                    count += 1;
                }
                Metric::Indicator(ind) => {
                    if let Some(v) = region.value(ind) {
                        sum += v;
                        count += 1;
                    }
                }
            }
        }
        if count == 0 {
            return Err(UoiError::NotFound(
                "metric missing across the whole group".to_string(),
            ));
        }
        Ok(sum / count as f64)
    }

    /// Drops the named fips codes from the table (the CA dashboards
    /// exclude Alpine County this way).
    pub fn exclude(&mut self, fips_codes: &[String]) {
        self.regions
            .retain(|r| !fips_codes.iter().any(|f| f == &r.fips));
    }

    /// Sorts descending by composite score, ties broken by name.
    pub fn rank(&mut self) {
        self.regions.sort_by(|a, b| {
            b.composite
                .partial_cmp(&a.composite)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
    }

    /// Writes the augmented table: input columns plus Z_ columns and the
    /// UOI composite. Missing and undefined cells are left empty.
    pub fn write_augmented<W: Write>(&self, writer: W) -> UoiResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header = vec!["County".to_string(), "fips".to_string()];
        for ind in all_indicators() {
            header.push(ind.column().to_string());
        }
        for ind in all_indicators() {
            header.push(format!("Z_{}", ind.column()));
        }
        header.push("UOI".to_string());
        wtr.write_record(&header)?;

        let fmt = |v: Option<f64>| match v {
            Some(x) if x.is_finite() => x.to_string(),
            _ => String::new(),
        };

        for region in &self.regions {
            let mut row = vec![region.name.clone(), region.fips.clone()];
            for ind in all_indicators() {
                row.push(fmt(region.value(ind)));
            }
            for ind in all_indicators() {
                row.push(fmt(region.z_score(ind)));
            }
            row.push(region.composite.to_string());
            wtr.write_record(&row)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
