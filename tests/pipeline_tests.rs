use std::str::FromStr;
use uoindex::boundary::BoundarySet;
use uoindex::error::UoiError;
use uoindex::index::loader::load_table_from_file;
use uoindex::index::{Metric, ScoredTable};
use uoindex::indicators::Indicator;
use uoindex::normalizer::assign_fips;
use uoindex::regions::RegionGroup;
use uoindex::weights::{WeightPreset, WeightVector};

const GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "id": "06001",
     "properties": {"NAME": "Alameda", "STATEFP": "06", "COUNTYFP": "001"}, "geometry": null},
    {"type": "Feature", "id": "06003",
     "properties": {"NAME": "Alpine", "STATEFP": "06", "COUNTYFP": "003"}, "geometry": null},
    {"type": "Feature", "id": "06029",
     "properties": {"NAME": "Kern", "STATEFP": "06", "COUNTYFP": "029"}, "geometry": null},
    {"type": "Feature", "id": "06037",
     "properties": {"NAME": "Los Angeles", "STATEFP": "06", "COUNTYFP": "037"}, "geometry": null}
  ]
}"#;

const TABLE: &str = "\
County,Median_Household_Income,Unemployment_Rate,Gini_Index
Alameda,112017,4.1,0.478
Alpine,98400,4.9,0.452
Kern,54851,9.7,0.471
Los Angeles,76367,6.4,0.501
Atlantis,50000,5.0,0.4
";

fn scored(weights: &WeightVector) -> (ScoredTable, usize) {
    let dir = tempfile::tempdir().unwrap();
    let geo_path = dir.path().join("counties.json");
    let csv_path = dir.path().join("table.csv");
    std::fs::write(&geo_path, GEOJSON).unwrap();
    std::fs::write(&csv_path, TABLE).unwrap();

    let boundaries = BoundarySet::load_from_file(&geo_path, "06").unwrap();
    let raw = load_table_from_file(&csv_path, false).unwrap();
    let normalized = assign_fips(raw, &boundaries).unwrap();
    (
        ScoredTable::compute(&normalized.records, weights),
        normalized.excluded,
    )
}

#[test]
fn unmatched_record_is_dropped_and_counted() {
    let weights = WeightVector::from_preset(WeightPreset::Even);
    let (table, excluded) = scored(&weights);
    // Atlantis matches no boundary feature.
    assert_eq!(excluded, 1);
    assert_eq!(table.regions.len(), 4);
    assert!(table.by_name("Atlantis").is_err());
}

#[test]
fn ranking_follows_income_under_income_only_weights() {
    let mut raw = [0.0; 9];
    raw[Indicator::MedianHouseholdIncome.slot()] = 1.0;
    let weights = WeightVector::from_raw(&raw).unwrap();

    let (mut table, _) = scored(&weights);
    table.rank();
    let names: Vec<&str> = table.regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alameda", "Alpine", "Los Angeles", "Kern"]);
}

#[test]
fn exclusion_drops_exactly_the_named_fips() {
    let weights = WeightVector::from_preset(WeightPreset::Even);
    let (mut table, _) = scored(&weights);
    let before = table.regions.len();
    table.exclude(&["06003".to_string()]);
    assert_eq!(table.regions.len(), before - 1);
    assert!(table.by_name("Alpine").is_err());
}

#[test]
fn group_mean_and_county_lookup() {
    let weights = WeightVector::from_preset(WeightPreset::Even);
    let (table, _) = scored(&weights);

    let la = RegionGroup::LosAngelesRegion;
    let metric = Metric::Indicator(Indicator::MedianHouseholdIncome);
    // Only Los Angeles county of that group is present in the fixture.
    let mean = table.group_mean(la.fips_codes(), metric).unwrap();
    assert!((mean - 76367.0).abs() < 1e-9);

    let alameda = table.by_name("alameda").unwrap();
    assert_eq!(alameda.fips, "06001");
}

#[test]
fn unknown_lookups_surface_not_found() {
    let weights = WeightVector::from_preset(WeightPreset::Even);
    let (table, _) = scored(&weights);

    assert!(matches!(
        table.by_name("Gotham"),
        Err(UoiError::NotFound(_))
    ));
    assert!(matches!(
        Metric::from_str("homeownership"),
        Err(UoiError::NotFound(_))
    ));
    // Bay Area group has no member in the fixture table.
    assert!(matches!(
        table.group_mean(RegionGroup::BayArea.fips_codes(), Metric::Composite),
        Err(UoiError::NotFound(_))
    ));
}

#[test]
fn augmented_export_carries_z_and_uoi_columns() {
    let weights = WeightVector::from_preset(WeightPreset::Even);
    let (mut table, _) = scored(&weights);
    table.rank();

    let mut out = Vec::new();
    table.write_augmented(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let header = text.lines().next().unwrap();

    assert!(header.contains("Z_Median_Household_Income"));
    assert!(header.contains("Z_Gini_Index"));
    assert!(header.ends_with("UOI"));
    // header + 4 scored counties
    assert_eq!(text.lines().count(), 5);
}
