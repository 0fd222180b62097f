use clap::{Parser, Subcommand};
use std::process;
use uoindex::boundary::BoundarySet;
use uoindex::index::loader;
use uoindex::normalizer;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/california_counties_full.csv")]
    data: String,

    #[arg(
        global = true,
        short,
        long,
        default_value = "data/geojson-counties-fips.json"
    )]
    boundaries: String,

    /// 2-char state FIPS prefix of the target jurisdiction
    #[arg(global = true, short, long, default_value = "06")]
    prefix: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Compare(cmd::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    if cli.debug {
        println!("📂 Loading boundaries: {}", cli.boundaries);
    }
    let boundaries = BoundarySet::load_from_file(&cli.boundaries, &cli.prefix).unwrap_or_else(|e| {
        eprintln!("❌ FATAL: cannot load boundary set:");
        eprintln!("   {}", e);
        process::exit(1);
    });

    if cli.debug {
        println!("📂 Loading indicator table: {}", cli.data);
    }
    let raw = loader::load_table_from_file(&cli.data, cli.debug).unwrap_or_else(|e| {
        eprintln!("❌ FATAL: cannot load indicator table:");
        eprintln!("   {}", e);
        process::exit(1);
    });

    let normalized = normalizer::assign_fips(raw, &boundaries).unwrap_or_else(|e| {
        eprintln!("❌ FATAL: identifier normalization failed:");
        eprintln!("   {}", e);
        process::exit(1);
    });
    if cli.debug && normalized.excluded > 0 {
        println!(
            "   {} record(s) excluded for unresolvable identifiers.",
            normalized.excluded
        );
    }

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args, &normalized.records),
        Commands::Compare(args) => cmd::compare::run(args, &normalized.records),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
