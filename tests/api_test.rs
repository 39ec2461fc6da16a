mod common;

use common::{assert_close, DocFixture};
use thaikey::analyzer::TextAnalyzer;
use thaikey::api::{
    generate_analysis, generate_analysis_for, load_report, round_to, safe_percentage, save_report,
    ProfileSelection, HOURLY_LABOR_COST, WORKING_DAYS_PER_YEAR,
};
use thaikey::calculator::{Scenario, BASELINE_SCENARIO, TARGET_SCENARIO};
use thaikey::error::ThaiKeyError;
use thaikey::profiles::TypistProfile;

#[test]
fn test_average_only_by_default() {
    let fx = DocFixture::sample();
    let report = generate_analysis(&fx.path, false).unwrap();

    assert_eq!(report.metadata.document_path, "document.txt");
    assert_eq!(report.metadata.tool_version, env!("CARGO_PKG_VERSION"));
    assert_eq!(report.typist_profiles.len(), 1);
    assert_eq!(report.typist_profiles[0].key, TypistProfile::Average);
    assert_eq!(report.analysis_results.len(), 1);

    let results = &report.analysis_results[0];
    assert_eq!(results.scenarios.len(), 4);
    assert_eq!(results.savings_analysis.len(), 3);
    assert!(!results.savings_analysis.contains_key(&BASELINE_SCENARIO));
}

#[test]
fn test_all_typists_in_registry_order() {
    let fx = DocFixture::sample();
    let report = generate_analysis(&fx.path, true).unwrap();

    let order: Vec<TypistProfile> = report.analysis_results.iter().map(|r| r.profile).collect();
    assert_eq!(
        order,
        vec![
            TypistProfile::Expert,
            TypistProfile::Skilled,
            TypistProfile::Average,
            TypistProfile::Worst
        ]
    );
    for r in &report.analysis_results {
        assert_eq!(r.keystroke_time, r.profile.keystroke_time());
    }
}

#[test]
fn test_missing_document() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        generate_analysis(dir.path().join("missing.txt"), false),
        Err(ThaiKeyError::DocumentNotFound(_))
    ));
}

#[test]
fn test_document_analysis_section() {
    let fx = DocFixture::sample();
    let report = generate_analysis(&fx.path, false).unwrap();
    let doc = &report.document_analysis;

    // ๐ and ๒ both occur four times; the lower code point wins.
    assert_eq!(doc.most_frequent_digit, Some('๐'));
    assert_eq!(doc.least_frequent_digit, Some('๗'));
    assert_eq!(doc.total_sequences, 9);
    assert_eq!(doc.thai_sequences, 7);
    assert_eq!(doc.sample_contexts.len(), 5);
    assert_eq!(doc.sample_contexts[0].number, "๑๒");
    assert_eq!(doc.sample_contexts[0].kind, "thai");

    let stats = &report.metadata.document_stats;
    assert_eq!(stats.thai_digits, 18);
    assert_eq!(stats.international_digits, 3);
}

#[test]
fn test_digit_cost_breakdown() {
    let fx = DocFixture::sample();
    let report = generate_analysis(&fx.path, false).unwrap();
    let results = &report.analysis_results[0];

    let current = &results.scenarios[&BASELINE_SCENARIO];
    let two = current.digit_costs[&'๒'];
    assert_eq!(two.count, 4);
    assert_close(two.ms_each, 560.0);
    assert_close(two.total_seconds, 2.24);
    assert_close(current.digit_costs[&'3'].ms_each, 280.0);
    assert_eq!(current.digit_count, 21);
    // 18 shifted Thai digits and 3 plain international ones.
    assert_close(current.digit_cost_seconds, 10.92);

    let converted = &results.scenarios[&Scenario::IntlPattajoti];
    assert!(converted.digit_costs.keys().all(|c| c.is_ascii_digit()));
    assert_close(converted.digit_cost_seconds, 5.88);
}

#[test]
fn test_key_findings_and_projections() {
    let analyzer = TextAnalyzer::from_text("๑๒๓๔๕๖๗๘๙๐".repeat(60));
    let report =
        generate_analysis_for(&analyzer, "digits.txt", ProfileSelection::All).unwrap();

    // 600 Thai digits at 0.28s: 336s on Kedmanee, 168s converted on Pattajoti.
    let f = &report.key_findings;
    assert_eq!(f.current_state.scenario, BASELINE_SCENARIO);
    assert_eq!(f.optimal_state.scenario, TARGET_SCENARIO);
    assert_close(f.current_state.time_minutes, 5.6);
    assert_close(f.optimal_state.time_minutes, 2.8);
    assert_close(f.time_saved_minutes, 2.8);
    assert_close(f.efficiency_gain_percentage, 50.0);

    let impact = &report.impact_projections;
    assert_eq!(impact.working_days_per_year, WORKING_DAYS_PER_YEAR);
    assert_eq!(impact.hourly_labor_cost, HOURLY_LABOR_COST);
    assert_eq!(impact.projections.len(), 4);

    // 50 docs/day * 250 days * (2.8 / 60) h = 583.33 h
    let small = &impact.projections[0];
    assert_eq!(small.docs_per_day, 50);
    assert_eq!(small.annual_hours_saved, 583.0);
    assert_eq!(small.annual_cost_savings, 8750.0);
}

#[test]
fn test_single_profile_with_override() {
    let analyzer = TextAnalyzer::from_text("๑");
    let selection = ProfileSelection::Single {
        profile: TypistProfile::Expert,
        keystroke_time: 0.5,
    };
    let report = generate_analysis_for(&analyzer, "one.txt", selection).unwrap();

    let results = &report.analysis_results[0];
    assert_eq!(results.profile, TypistProfile::Expert);
    assert_eq!(results.keystroke_time, 0.5);
    assert_close(results.scenarios[&Scenario::ThaiKedmanee].total_cost_seconds, 1.0);
    assert_eq!(results.optimal_scenario, Scenario::IntlKedmanee);
}

#[test]
fn test_save_and_load() {
    let fx = DocFixture::sample();
    let report = generate_analysis(&fx.path, true).unwrap();

    let path = fx.out_dir().join("nested").join("analysis.json");
    save_report(&report, &path).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();

    // UTF-8 kept as-is, maps keyed by snake_case names.
    assert!(raw.contains("๑๒"));
    assert!(raw.contains("\"thai_kedmanee\""));
    assert!(raw.contains("\"intl_pattajoti\""));

    let loaded = load_report(&path).unwrap();
    assert_eq!(loaded.metadata.generated_at, report.metadata.generated_at);
    assert_eq!(loaded.typist_profiles.len(), 4);
    assert_eq!(
        loaded.document_analysis.thai_digit_distribution,
        report.document_analysis.thai_digit_distribution
    );
    assert_eq!(
        loaded.document_analysis.sample_contexts,
        report.document_analysis.sample_contexts
    );
    for (a, b) in loaded.analysis_results.iter().zip(&report.analysis_results) {
        assert_eq!(a.profile, b.profile);
        assert_eq!(a.optimal_scenario, b.optimal_scenario);
        for (scenario, s) in &b.scenarios {
            let s2 = &a.scenarios[scenario];
            assert!((s2.total_cost_seconds - s.total_cost_seconds).abs() < 1e-9);
            assert_eq!(s2.conversion_applied, s.conversion_applied);
        }
    }
}

#[test]
fn test_load_missing_report() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_report(dir.path().join("none.json")),
        Err(ThaiKeyError::DocumentNotFound(_))
    ));
}

#[test]
fn test_empty_document_report() {
    let analyzer = TextAnalyzer::from_text("");
    let report = generate_analysis_for(
        &analyzer,
        "empty.txt",
        ProfileSelection::single(TypistProfile::Average),
    )
    .unwrap();

    assert_eq!(report.document_analysis.most_frequent_digit, None);
    assert_eq!(report.key_findings.efficiency_gain_percentage, 0.0);
    assert!(report
        .impact_projections
        .projections
        .iter()
        .all(|p| p.annual_hours_saved == 0.0));
}

#[test]
fn test_rounding_helpers() {
    assert_eq!(round_to(1.25, 1), 1.3);
    assert_eq!(round_to(-1.25, 1), -1.3);
    assert_eq!(round_to(2.0 / 3.0, 2), 0.67);
    assert_eq!(safe_percentage(1.0, 0.0), 0.0);
    assert_eq!(safe_percentage(1.0, 4.0), 25.0);
}
