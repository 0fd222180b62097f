use rstest::rstest;
use uoindex::error::UoiError;
use uoindex::indicators::Indicator;
use uoindex::weights::{WeightPreset, WeightVector};

#[rstest]
#[case(WeightPreset::Even)]
#[case(WeightPreset::IncomeHeavy)]
#[case(WeightPreset::EducationHeavy)]
#[case(WeightPreset::EquityFocused)]
#[case(WeightPreset::StabilityFocused)]
fn preset_sums_to_one(#[case] preset: WeightPreset) {
    let v = WeightVector::from_preset(preset);
    let sum: f64 = v.as_slice().iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert!(v.as_slice().iter().all(|w| *w >= 0.0));
}

#[test]
fn income_heavy_puts_forty_percent_on_income() {
    let v = WeightVector::from_preset(WeightPreset::IncomeHeavy);
    assert!((v.get(Indicator::MedianHouseholdIncome) - 0.4).abs() < 1e-12);
    assert!((v.get(Indicator::GiniIndex) - 0.05).abs() < 1e-12);
}

#[test]
fn all_zero_custom_is_invalid() {
    let err = WeightVector::from_raw(&[0.0; 9]).unwrap_err();
    assert!(matches!(err, UoiError::InvalidWeights(_)));
}

#[test]
fn ten_element_custom_is_invalid() {
    let err = WeightVector::from_raw(&[0.1; 10]).unwrap_err();
    assert!(matches!(err, UoiError::InvalidWeights(_)));
}

#[test]
fn negative_entry_is_invalid() {
    let mut raw = [1.0; 9];
    raw[0] = -1.0;
    let err = WeightVector::from_raw(&raw).unwrap_err();
    assert!(matches!(err, UoiError::InvalidWeights(_)));
}

#[test]
fn custom_string_with_garbage_is_invalid() {
    let err = WeightVector::from_csv_str("1,2,three,4,5,6,7,8,9").unwrap_err();
    assert!(matches!(err, UoiError::InvalidWeights(_)));
}

#[test]
fn unnormalized_custom_is_rescaled() {
    let v = WeightVector::from_raw(&[9.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 9.0]).unwrap();
    assert!((v.get(Indicator::MedianHouseholdIncome) - 0.5).abs() < 1e-12);
    assert!((v.get(Indicator::GiniIndex) - 0.5).abs() < 1e-12);
    assert!((v.as_slice().iter().sum::<f64>() - 1.0).abs() < 1e-9);
}
