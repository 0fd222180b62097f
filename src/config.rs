use crate::error::{UoiError, UoiResult};
use crate::weights::{WeightPreset, WeightVector};
use clap::Args;
use std::str::FromStr;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub weights: WeightConfig,
}

#[derive(Args, Debug, Clone)]
pub struct WeightConfig {
    /// Named weight preset: even, income-heavy, education-heavy,
    /// equity-focused, stability-focused
    #[arg(long, default_value = "even")]
    pub preset: String,

    /// Custom weights, 9 comma-separated non-negative values in
    /// indicator order. Overrides --preset.
    #[arg(long)]
    pub weights: Option<String>,
}

impl WeightConfig {
    /// Resolves the active weight vector. Custom values win over the
    /// preset; either path validates and normalizes before any scoring.
    pub fn resolve(&self) -> UoiResult<WeightVector> {
        if let Some(custom) = &self.weights {
            return WeightVector::from_csv_str(custom);
        }
        let preset = WeightPreset::from_str(self.preset.trim()).map_err(|_| {
            UoiError::InvalidWeights(format!("unknown preset '{}'", self.preset))
        })?;
        Ok(WeightVector::from_preset(preset))
    }
}
