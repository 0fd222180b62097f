use crate::reports;
use clap::Args;
use std::fs::File;
use uoindex::config::Config;
use uoindex::error::UoiResult;
use uoindex::index::{RegionRecord, ScoredTable};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Write the augmented table (raw + Z_ columns + UOI) to this path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Drop a county by fips after scoring (repeatable)
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    /// Show the full indicator detail for one county
    #[arg(short, long)]
    pub county: Option<String>,
}

pub fn run(args: ScoreArgs, records: &[RegionRecord]) -> UoiResult<()> {
    let weights = args.config.weights.resolve()?;

    let mut table = ScoredTable::compute(records, &weights);
    table.exclude(&args.exclude);
    table.rank();

    reports::print_weight_summary(&weights);
    reports::print_ranking(&table);

    if let Some(name) = &args.county {
        let region = table.by_name(name)?;
        reports::print_county_detail(region);
    }

    if let Some(path) = &args.output {
        let file = File::create(path)?;
        table.write_augmented(file)?;
        println!("💾 Augmented table written to {}", path);
    }

    Ok(())
}
