pub mod markdown;
pub mod tables;

use thaikey::api::AnalysisReport;

/// Everything the console format shows for an analysis.
pub fn print_full(report: &AnalysisReport) {
    tables::document_summary(report);
    for results in &report.analysis_results {
        tables::scenarios(results);
        tables::digit_costs(results);
        tables::savings(results);
    }
    tables::typist_comparison(report);
    tables::impact(report);
}

/// One-screen digest printed next to the JSON output.
pub fn print_summary(report: &AnalysisReport) {
    let f = &report.key_findings;
    println!("Document: {}", report.metadata.document_path);
    println!(
        "Digits: {} ({} Thai, {} international)",
        report.metadata.document_stats.total_digits,
        report.metadata.document_stats.thai_digits,
        report.metadata.document_stats.international_digits
    );
    println!(
        "Current ({}): {:.1} min",
        f.current_state.description, f.current_state.time_minutes
    );
    println!(
        "Optimal ({}): {:.1} min",
        f.optimal_state.description, f.optimal_state.time_minutes
    );
    println!(
        "Saved: {:.1} min per document ({:.1}%)",
        f.time_saved_minutes, f.efficiency_gain_percentage
    );
}
