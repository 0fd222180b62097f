use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Whether a higher raw value means more or less opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// The nine indicators, in canonical weight-vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Indicator {
    MedianHouseholdIncome,
    BachelorsDegreePct,
    UnemploymentRate,
    NoHealthInsurancePct,
    MedianGrossRent,
    BroadbandPct,
    HighSchoolGradPct,
    UpwardMobility,
    GiniIndex,
}

pub const INDICATOR_COUNT: usize = 9;

impl Indicator {
    /// Fixed ordering: index into weight vectors and value arrays.
    pub fn slot(&self) -> usize {
        *self as usize
    }

    /// Column header this indicator binds to in the input table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::MedianHouseholdIncome => "Median_Household_Income",
            Self::BachelorsDegreePct => "Bachelors_Degree_Pct",
            Self::UnemploymentRate => "Unemployment_Rate",
            Self::NoHealthInsurancePct => "No_Health_Insurance_Pct",
            Self::MedianGrossRent => "Median_Gross_Rent",
            Self::BroadbandPct => "Broadband_Pct",
            Self::HighSchoolGradPct => "High_School_Grad_Pct",
            Self::UpwardMobility => "Upward_Mobility",
            Self::GiniIndex => "Gini_Index",
        }
    }

    /// Short label for report headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MedianHouseholdIncome => "Income",
            Self::BachelorsDegreePct => "Bach%",
            Self::UnemploymentRate => "Unemp",
            Self::NoHealthInsurancePct => "Unins%",
            Self::MedianGrossRent => "Rent",
            Self::BroadbandPct => "Bband%",
            Self::HighSchoolGradPct => "HSGrad%",
            Self::UpwardMobility => "Mobility",
            Self::GiniIndex => "Gini",
        }
    }

    // Polarity is fixed at design time, never derived from data.
    pub fn polarity(&self) -> Polarity {
        match self {
            Self::UnemploymentRate
            | Self::NoHealthInsurancePct
            | Self::MedianGrossRent
            | Self::GiniIndex => Polarity::Negative,
            _ => Polarity::Positive,
        }
    }
}

/// All indicators in canonical order.
pub fn all_indicators() -> Vec<Indicator> {
    Indicator::iter().collect()
}
