use crate::error::{UoiError, UoiResult};
use crate::indicators::{Indicator, INDICATOR_COUNT};
use strum_macros::{Display, EnumIter, EnumString};

/// Named weighting schemes. Vectors are in canonical indicator order:
/// [income, bachelors%, unemployment, uninsured%, rent, broadband%,
///  hs-grad%, upward-mobility, gini].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum WeightPreset {
    Even,
    IncomeHeavy,
    EducationHeavy,
    EquityFocused,
    StabilityFocused,
}

impl WeightPreset {
    pub fn raw(&self) -> [f64; INDICATOR_COUNT] {
        match self {
            Self::Even => [1.0 / 9.0; INDICATOR_COUNT],
            Self::IncomeHeavy => [0.4, 0.1, 0.1, 0.1, 0.1, 0.05, 0.05, 0.05, 0.05],
            Self::EducationHeavy => [0.1, 0.4, 0.1, 0.1, 0.1, 0.05, 0.05, 0.05, 0.05],
            // Emphasizes low inequality and unemployment
            Self::EquityFocused => [0.05, 0.05, 0.3, 0.05, 0.1, 0.05, 0.2, 0.1, 0.1],
            // Emphasizes home stability (rent, grad rate) and mobility
            Self::StabilityFocused => [0.05, 0.05, 0.05, 0.05, 0.2, 0.05, 0.1, 0.3, 0.15],
        }
    }
}

/// A validated, normalized weight vector. Entries sum to 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector([f64; INDICATOR_COUNT]);

impl WeightVector {
    /// Builds from raw consumer-supplied weights. Rejects wrong
    /// cardinality, negative entries, and zero-sum vectors before any
    /// score can be computed; otherwise normalizes to sum 1.0.
    pub fn from_raw(raw: &[f64]) -> UoiResult<Self> {
        if raw.len() != INDICATOR_COUNT {
            return Err(UoiError::InvalidWeights(format!(
                "expected {} weights, got {}",
                INDICATOR_COUNT,
                raw.len()
            )));
        }
        if let Some(w) = raw.iter().find(|w| **w < 0.0) {
            return Err(UoiError::InvalidWeights(format!(
                "negative weight {} not allowed",
                w
            )));
        }
        let total: f64 = raw.iter().sum();
        if total <= 0.0 {
            return Err(UoiError::InvalidWeights(
                "weights sum to zero".to_string(),
            ));
        }
        let mut arr = [0.0; INDICATOR_COUNT];
        for (slot, w) in raw.iter().enumerate() {
            arr[slot] = w / total;
        }
        Ok(Self(arr))
    }

    pub fn from_preset(preset: WeightPreset) -> Self {
        // Preset vectors are fixed and valid by construction.
        Self::from_raw(&preset.raw()).unwrap_or(Self([1.0 / 9.0; INDICATOR_COUNT]))
    }

    /// Parses a comma-separated custom weight string, e.g. "0.4,0.1,...".
    pub fn from_csv_str(s: &str) -> UoiResult<Self> {
        let mut raw = Vec::new();
        for part in s.split(',') {
            let w: f64 = part.trim().parse().map_err(|_| {
                UoiError::InvalidWeights(format!("'{}' is not a number", part.trim()))
            })?;
            raw.push(w);
        }
        Self::from_raw(&raw)
    }

    pub fn get(&self, indicator: Indicator) -> f64 {
        self.0[indicator.slot()]
    }

    pub fn as_slice(&self) -> &[f64; INDICATOR_COUNT] {
        &self.0
    }
}
