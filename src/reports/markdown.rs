use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};
use thaikey::api::{AnalysisReport, ProfileResults};
use thaikey::calculator::BASELINE_SCENARIO;
use thaikey::error::{ThaiKeyError, TkResult};

pub const REPORT_PREFIX: &str = "Thai_Numbers_Analysis_Report";

/// Renders the report as a Markdown document.
pub fn render(report: &AnalysisReport) -> Result<String, fmt::Error> {
    let mut md = String::new();
    let meta = &report.metadata;
    let stats = &meta.document_stats;

    writeln!(md, "# Thai Numbers Typing Cost Analysis\n")?;
    writeln!(md, "- **Document:** {}", meta.document_path)?;
    writeln!(md, "- **Generated:** {}", meta.generated_at.to_rfc3339())?;
    writeln!(md, "- **Tool version:** {}", meta.tool_version)?;
    writeln!(
        md,
        "- **Characters:** {} ({} digits, {:.2}%)",
        stats.total_characters, stats.total_digits, stats.digit_percentage
    )?;
    writeln!(
        md,
        "- **Thai / international digits:** {} / {}\n",
        stats.thai_digits, stats.international_digits
    )?;

    let f = &report.key_findings;
    writeln!(md, "## Key Findings\n")?;
    writeln!(
        md,
        "- Current state ({}): **{:.1} min** ({:.2} h)",
        f.current_state.description, f.current_state.time_minutes, f.current_state.time_hours
    )?;
    writeln!(
        md,
        "- Optimal state ({}): **{:.1} min** ({:.2} h)",
        f.optimal_state.description, f.optimal_state.time_minutes, f.optimal_state.time_hours
    )?;
    writeln!(
        md,
        "- Time saved per document: **{:.1} min** ({:.1}% efficiency gain)\n",
        f.time_saved_minutes, f.efficiency_gain_percentage
    )?;

    for results in &report.analysis_results {
        profile_section(&mut md, results)?;
    }

    let impact = &report.impact_projections;
    writeln!(md, "## Impact Projections\n")?;
    writeln!(
        md,
        "Assumes {} working days per year and {:.0} per labour hour.\n",
        impact.working_days_per_year, impact.hourly_labor_cost
    )?;
    writeln!(md, "| Scale | Docs/day | Hours saved/year | Cost saved/year |")?;
    writeln!(md, "|---|---:|---:|---:|")?;
    for p in &impact.projections {
        writeln!(
            md,
            "| {} | {} | {:.0} | {:.0} |",
            p.scale, p.docs_per_day, p.annual_hours_saved, p.annual_cost_savings
        )?;
    }

    Ok(md)
}

fn profile_section(md: &mut String, results: &ProfileResults) -> fmt::Result {
    writeln!(
        md,
        "## {} typist ({:.2} s/keystroke)\n",
        results.profile.name(),
        results.keystroke_time
    )?;

    writeln!(md, "| Scenario | Minutes | Hours | ms/char | Status |")?;
    writeln!(md, "|---|---:|---:|---:|---|")?;
    for (scenario, s) in &results.scenarios {
        let status = if *scenario == BASELINE_SCENARIO {
            "CURRENT"
        } else if *scenario == results.optimal_scenario {
            "OPTIMAL"
        } else {
            ""
        };
        writeln!(
            md,
            "| {} | {:.1} | {:.2} | {:.1} | {} |",
            s.description, s.total_cost_minutes, s.total_cost_hours, s.average_cost_per_char_ms, status
        )?;
    }
    md.push('\n');

    writeln!(md, "| Savings vs {} | Minutes | Hours | % |", BASELINE_SCENARIO.short_name())?;
    writeln!(md, "|---|---:|---:|---:|")?;
    for (scenario, s) in &results.savings_analysis {
        writeln!(
            md,
            "| {} | {:.1} | {:.2} | {:.1}% |",
            scenario.short_name(),
            s.time_saved_minutes,
            s.time_saved_hours,
            s.percentage_saved
        )?;
    }
    md.push('\n');

    if let Some(current) = results.scenarios.get(&BASELINE_SCENARIO) {
        if !current.digit_costs.is_empty() {
            writeln!(md, "| Digit ({}) | Count | ms each | Total (s) |", BASELINE_SCENARIO.short_name())?;
            writeln!(md, "|---|---:|---:|---:|")?;
            for (digit, cost) in &current.digit_costs {
                writeln!(
                    md,
                    "| {} | {} | {:.1} | {:.2} |",
                    digit, cost.count, cost.ms_each, cost.total_seconds
                )?;
            }
            writeln!(
                md,
                "| **All digits** | {} | | {:.2} |\n",
                current.digit_count, current.digit_cost_seconds
            )?;
        }
    }
    Ok(())
}

/// Name for a saved analysis rendered later: `<json stem>_report`.
pub fn render_prefix(analysis: &Path) -> String {
    let stem = analysis
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "analysis".to_string());
    format!("{}_report", stem)
}

/// Writes `<dir>/<prefix>_<generated_at>.md`.
pub fn write_report(report: &AnalysisReport, dir: &Path, prefix: &str) -> TkResult<PathBuf> {
    let md = render(report)
        .map_err(|e| ThaiKeyError::Validation(format!("Failed to render Markdown: {}", e)))?;
    fs::create_dir_all(dir)?;
    let stamp = report.metadata.generated_at.format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("{}_{}.md", prefix, stamp));
    fs::write(&path, md)?;
    Ok(path)
}
