use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use uoindex::index::{ScoredRegion, ScoredTable};
use uoindex::indicators::all_indicators;
use uoindex::weights::WeightVector;

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{:.3}", x),
        Some(_) => "n/a".to_string(),
        None => "-".to_string(),
    }
}

pub fn print_weight_summary(weights: &WeightVector) {
    let parts: Vec<String> = all_indicators()
        .iter()
        .map(|ind| format!("{} {:.2}", ind.label(), weights.get(*ind)))
        .collect();
    println!("⚖️  Normalized weights: {}", parts.join(", "));
}

pub fn print_ranking(table: &ScoredTable) {
    let mut out = Table::new();
    out.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("County").add_attribute(Attribute::Bold),
        Cell::new("FIPS"),
        Cell::new("UOI").fg(Color::Cyan),
    ];
    for ind in all_indicators() {
        header.push(Cell::new(ind.label()));
    }
    out.add_row(header);

    for (rank, region) in table.regions.iter().enumerate() {
        let mut row = vec![
            Cell::new(rank + 1),
            Cell::new(&region.name),
            Cell::new(&region.fips),
            Cell::new(format!("{:.4}", region.composite)).fg(Color::Cyan),
        ];
        for ind in all_indicators() {
            row.push(Cell::new(fmt_opt(region.value(ind))));
        }
        out.add_row(row);
    }

    for i in 3..13 {
        if let Some(col) = out.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{}", out);
}

pub fn print_county_detail(region: &ScoredRegion) {
    println!("\nCounty: {} ({})", region.name, region.fips);

    let mut out = Table::new();
    out.load_preset(ASCII_FULL);
    out.add_row(vec![
        Cell::new("Indicator").add_attribute(Attribute::Bold),
        Cell::new("Raw"),
        Cell::new("Z (signed)").fg(Color::Cyan),
    ]);
    for ind in all_indicators() {
        out.add_row(vec![
            Cell::new(ind.column()),
            Cell::new(fmt_opt(region.value(ind))).set_alignment(CellAlignment::Right),
            Cell::new(fmt_opt(region.z_score(ind))).set_alignment(CellAlignment::Right),
        ]);
    }
    out.add_row(vec![
        Cell::new("UOI").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("{:.4}", region.composite))
            .fg(Color::Cyan)
            .set_alignment(CellAlignment::Right),
    ]);
    println!("{}", out);
}

pub fn print_comparison(metric: &str, a: (&str, f64), b: (&str, f64)) {
    println!("\n🔎 {} comparison", metric);

    let mut out = Table::new();
    out.load_preset(ASCII_FULL);
    out.add_row(vec![
        Cell::new("Side").add_attribute(Attribute::Bold),
        Cell::new(metric).fg(Color::Cyan),
    ]);
    out.add_row(vec![
        Cell::new(a.0),
        Cell::new(format!("{:.4}", a.1)).set_alignment(CellAlignment::Right),
    ]);
    out.add_row(vec![
        Cell::new(b.0),
        Cell::new(format!("{:.4}", b.1)).set_alignment(CellAlignment::Right),
    ]);
    println!("{}", out);
}
