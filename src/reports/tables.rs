use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use thaikey::api::{AnalysisReport, ProfileResults};
use thaikey::calculator::{Scenario, BASELINE_SCENARIO};
use thaikey::layouts::{DigitComparison, KeyboardLayout};
use thaikey::profiles::ProfileInfo;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn document_summary(report: &AnalysisReport) {
    let meta = &report.metadata;
    let stats = &meta.document_stats;
    let doc = &report.document_analysis;

    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("Document: {}", meta.document_path)).add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    align_right(&mut table, 1..=1);

    let digit = |d: Option<char>| d.map(String::from).unwrap_or_else(|| "-".to_string());

    table.add_row(vec![
        Cell::new("Total characters"),
        Cell::new(stats.total_characters),
    ]);
    table.add_row(vec![Cell::new("Total digits"), Cell::new(stats.total_digits)]);
    table.add_row(vec![
        Cell::new("Digit share"),
        Cell::new(format!("{:.2}%", stats.digit_percentage)),
    ]);
    table.add_row(vec![
        Cell::new("Thai digits"),
        Cell::new(stats.thai_digits).fg(Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("International digits"),
        Cell::new(stats.international_digits),
    ]);
    table.add_row(vec![
        Cell::new("Number sequences"),
        Cell::new(doc.total_sequences),
    ]);
    table.add_row(vec![
        Cell::new("Avg Thai sequence length"),
        Cell::new(format!("{:.1}", doc.average_thai_length)),
    ]);
    table.add_row(vec![
        Cell::new("Most / least frequent Thai digit"),
        Cell::new(format!(
            "{} / {}",
            digit(doc.most_frequent_digit),
            digit(doc.least_frequent_digit)
        )),
    ]);
    println!("\n{}", table);

    if !doc.sample_contexts.is_empty() {
        let mut samples = new_table();
        samples.add_row(vec![
            Cell::new("Number").add_attribute(Attribute::Bold),
            Cell::new("Type"),
            Cell::new("Context"),
        ]);
        for ctx in &doc.sample_contexts {
            samples.add_row(vec![
                Cell::new(&ctx.number).add_attribute(Attribute::Bold),
                Cell::new(&ctx.kind),
                Cell::new(ctx.context.replace('\n', " ")),
            ]);
        }
        println!("\n{}", samples);
    }
}

pub fn scenarios(results: &ProfileResults) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("Scenario ({})", results.profile)).add_attribute(Attribute::Bold),
        Cell::new("Minutes").fg(Color::Cyan),
        Cell::new("Hours"),
        Cell::new("ms/char"),
        Cell::new("Digits"),
        Cell::new("Status"),
    ]);
    align_right(&mut table, 1..=4);

    for (scenario, s) in &results.scenarios {
        let status = if *scenario == BASELINE_SCENARIO {
            Cell::new("CURRENT").fg(Color::Yellow)
        } else if *scenario == results.optimal_scenario {
            Cell::new("OPTIMAL")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("")
        };

        table.add_row(vec![
            Cell::new(scenario.short_name()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", s.total_cost_minutes)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", s.total_cost_hours)),
            Cell::new(format!("{:.1}", s.average_cost_per_char_ms)),
            Cell::new(s.digit_count),
            status,
        ]);
    }
    println!("\n{}", table);
}

pub fn savings(results: &ProfileResults) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("Savings vs {}", BASELINE_SCENARIO.short_name()))
            .add_attribute(Attribute::Bold),
        Cell::new("Minutes"),
        Cell::new("Hours"),
        Cell::new("% Saved").fg(Color::Green),
        Cell::new("ms/digit"),
    ]);
    align_right(&mut table, 1..=4);

    for (scenario, s) in &results.savings_analysis {
        let pct = Cell::new(format!("{:.1}%", s.percentage_saved));
        let pct = if s.percentage_saved > 0.0 {
            pct.fg(Color::Green)
        } else if s.percentage_saved < 0.0 {
            pct.fg(Color::Red)
        } else {
            pct
        };

        table.add_row(vec![
            Cell::new(scenario.short_name()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", s.time_saved_minutes)),
            Cell::new(format!("{:.2}", s.time_saved_hours)),
            pct,
            Cell::new(format!("{:.1}", s.cost_per_digit_ms)),
        ]);
    }
    println!("\n{}", table);
}

/// Per-digit costs of the current-practice scenario.
pub fn digit_costs(results: &ProfileResults) {
    let Some(current) = results.scenarios.get(&BASELINE_SCENARIO) else {
        return;
    };
    if current.digit_costs.is_empty() {
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("Digit costs ({})", BASELINE_SCENARIO.short_name()))
            .add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("ms each").fg(Color::Cyan),
        Cell::new("Total (s)"),
    ]);
    align_right(&mut table, 1..=3);

    for (digit, cost) in &current.digit_costs {
        table.add_row(vec![
            Cell::new(digit).set_alignment(CellAlignment::Center),
            Cell::new(cost.count),
            Cell::new(format!("{:.1}", cost.ms_each)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", cost.total_seconds)),
        ]);
    }
    table.add_row(vec![
        Cell::new("All digits").add_attribute(Attribute::Bold),
        Cell::new(current.digit_count),
        Cell::new(""),
        Cell::new(format!("{:.2}", current.digit_cost_seconds)).add_attribute(Attribute::Bold),
    ]);
    println!("\n{}", table);
}

/// One row per analysed typist: baseline vs optimal scenario time.
pub fn typist_comparison(report: &AnalysisReport) {
    if report.analysis_results.len() < 2 {
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Typist").add_attribute(Attribute::Bold),
        Cell::new("s/key"),
        Cell::new("Current (min)").fg(Color::Yellow),
        Cell::new("Optimal (min)").fg(Color::Green),
        Cell::new("Saved (min)"),
        Cell::new("Optimal scenario"),
    ]);
    align_right(&mut table, 1..=4);

    for r in &report.analysis_results {
        let minutes = |s: Scenario| {
            r.scenarios
                .get(&s)
                .map(|x| x.total_cost_minutes)
                .unwrap_or(0.0)
        };
        let current = minutes(BASELINE_SCENARIO);
        let optimal = minutes(r.optimal_scenario);

        table.add_row(vec![
            Cell::new(r.profile.name()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", r.keystroke_time)),
            Cell::new(format!("{:.1}", current)).fg(Color::Yellow),
            Cell::new(format!("{:.1}", optimal)).fg(Color::Green),
            Cell::new(format!("{:.1}", current - optimal)),
            Cell::new(r.optimal_scenario.short_name()),
        ]);
    }
    println!("\n{}", table);
}

pub fn impact(report: &AnalysisReport) {
    let impact = &report.impact_projections;
    let findings = &report.key_findings;

    println!(
        "\nKey finding: {} takes {:.1} min, {} takes {:.1} min ({:.1}% faster)",
        findings.current_state.description,
        findings.current_state.time_minutes,
        findings.optimal_state.description,
        findings.optimal_state.time_minutes,
        findings.efficiency_gain_percentage
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Scale").add_attribute(Attribute::Bold),
        Cell::new("Docs/day"),
        Cell::new("Hours/year").fg(Color::Cyan),
        Cell::new(format!("Cost/year (@{:.0}/h)", impact.hourly_labor_cost)).fg(Color::Green),
    ]);
    align_right(&mut table, 1..=3);

    for p in &impact.projections {
        table.add_row(vec![
            Cell::new(&p.scale).add_attribute(Attribute::Bold),
            Cell::new(p.docs_per_day),
            Cell::new(format!("{:.0}", p.annual_hours_saved)).fg(Color::Cyan),
            Cell::new(format!("{:.0}", p.annual_cost_savings)).fg(Color::Green),
        ]);
    }
    println!("\n{}", table);
}

pub fn layout_info(layouts: &[&KeyboardLayout]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Mapped keys"),
        Cell::new("Shifted").fg(Color::Red),
        Cell::new("Unshifted").fg(Color::Green),
    ]);
    align_right(&mut table, 1..=3);

    for layout in layouts {
        let info = layout.layout_info();
        table.add_row(vec![
            Cell::new(info.layout_type).add_attribute(Attribute::Bold),
            Cell::new(info.total_mapped_keys),
            Cell::new(info.shifted_keys).fg(Color::Red),
            Cell::new(info.non_shifted_keys).fg(Color::Green),
        ]);
    }
    println!("\n{}", table);
}

pub fn digit_comparison(rows: &[DigitComparison], base_keystroke_time: f64) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("Digit (@{:.2}s)", base_keystroke_time)).add_attribute(Attribute::Bold),
        Cell::new("Kedmanee"),
        Cell::new("Pattajoti"),
        Cell::new("Difference"),
    ]);
    align_right(&mut table, 1..=3);

    for row in rows {
        let diff = Cell::new(format!("{:+.2}", row.difference));
        let diff = if row.difference > 0.0 {
            diff.fg(Color::Green)
        } else if row.difference < 0.0 {
            diff.fg(Color::Red)
        } else {
            diff
        };

        table.add_row(vec![
            Cell::new(row.digit).set_alignment(CellAlignment::Center),
            Cell::new(format!("{:.2}", row.kedmanee_cost)),
            Cell::new(format!("{:.2}", row.pattajoti_cost)),
            diff,
        ]);
    }
    println!("\n{}", table);
}

pub fn typists(profiles: &[ProfileInfo]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("s/key").fg(Color::Cyan),
        Cell::new("Description"),
    ]);
    align_right(&mut table, 2..=2);

    for p in profiles {
        table.add_row(vec![
            Cell::new(p.key).add_attribute(Attribute::Bold),
            Cell::new(&p.name),
            Cell::new(format!("{:.2}", p.keystroke_time)).fg(Color::Cyan),
            Cell::new(&p.description),
        ]);
    }
    println!("\n{}", table);
}
