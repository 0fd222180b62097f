use crate::reports;
use clap::Args;
use std::str::FromStr;
use uoindex::config::Config;
use uoindex::error::{UoiError, UoiResult};
use uoindex::index::{Metric, RegionRecord, ScoredTable};
use uoindex::regions::RegionGroup;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub config: Config,

    /// Indicator key (snake_case) or "uoi" for the composite
    #[arg(short, long, default_value = "uoi")]
    pub indicator: String,

    #[arg(long, requires = "county_b", conflicts_with_all = ["group_a", "group_b"])]
    pub county_a: Option<String>,

    #[arg(long, requires = "county_a")]
    pub county_b: Option<String>,

    /// Named region group, e.g. bay-area, central-valley
    #[arg(long, requires = "group_b")]
    pub group_a: Option<String>,

    #[arg(long, requires = "group_a")]
    pub group_b: Option<String>,
}

pub fn run(args: CompareArgs, records: &[RegionRecord]) -> UoiResult<()> {
    let weights = args.config.weights.resolve()?;
    let metric = Metric::from_str(&args.indicator)?;

    let table = ScoredTable::compute(records, &weights);

    match (&args.county_a, &args.group_a) {
        (Some(a), _) => {
            let b = args.county_b.as_ref().expect("clap enforces county_b");
            let region_a = table.by_name(a)?;
            let region_b = table.by_name(b)?;
            let value_a = table.metric_value(region_a, metric)?;
            let value_b = table.metric_value(region_b, metric)?;
            reports::print_comparison(
                &args.indicator,
                (&region_a.name, value_a),
                (&region_b.name, value_b),
            );
        }
        (None, Some(a)) => {
            let b = args.group_b.as_ref().expect("clap enforces group_b");
            let group_a = parse_group(a)?;
            let group_b = parse_group(b)?;
            let mean_a = table.group_mean(group_a.fips_codes(), metric)?;
            let mean_b = table.group_mean(group_b.fips_codes(), metric)?;
            reports::print_comparison(
                &args.indicator,
                (&group_a.to_string(), mean_a),
                (&group_b.to_string(), mean_b),
            );
        }
        (None, None) => {
            return Err(UoiError::Validation(
                "nothing to compare: pass --county-a/--county-b or --group-a/--group-b"
                    .to_string(),
            ));
        }
    }

    Ok(())
}

fn parse_group(name: &str) -> UoiResult<RegionGroup> {
    RegionGroup::from_str(name.trim())
        .map_err(|_| UoiError::NotFound(format!("unknown region group '{}'", name)))
}
