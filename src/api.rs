//! JSON-first analysis document.
//!
//! Every renderer (console, Markdown, raw JSON) consumes an [`AnalysisReport`];
//! nothing downstream recomputes costs.

use crate::analyzer::{TextAnalyzer, TextStatistics};
use crate::calculator::{
    calculate_savings_analysis, optimal_scenario, CostCalculator, Scenario, ScenarioSet,
    BASELINE_SCENARIO, TARGET_SCENARIO,
};
use crate::digits::DigitConversion;
use crate::error::{ThaiKeyError, TkResult};
use crate::layouts::LayoutKind;
use crate::profiles::{ProfileInfo, TypistProfile};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::info;

pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Working days per year assumed by impact projections.
pub const WORKING_DAYS_PER_YEAR: u32 = 250;
/// Labour cost per hour assumed by impact projections.
pub const HOURLY_LABOR_COST: f64 = 15.0;

/// Organisation sizes used for annual projections: (name, documents per day).
pub const PROJECTION_SCALES: [(&str, u32); 4] = [
    ("Small Ministry", 50),
    ("Large Ministry", 200),
    ("Government-wide", 1000),
    ("Full National Scale", 5000),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: Metadata,
    pub document_analysis: DocumentAnalysis,
    pub typist_profiles: Vec<ProfileInfo>,
    pub analysis_results: Vec<ProfileResults>,
    pub key_findings: KeyFindings,
    pub impact_projections: ImpactProjections,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    pub document_path: String,
    pub document_stats: MetadataStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetadataStats {
    pub total_characters: usize,
    pub total_digits: usize,
    pub digit_percentage: f64,
    pub thai_digits: usize,
    pub international_digits: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub thai_digit_distribution: BTreeMap<char, usize>,
    pub most_frequent_digit: Option<char>,
    pub least_frequent_digit: Option<char>,
    pub total_sequences: usize,
    pub thai_sequences: usize,
    pub average_thai_length: f64,
    pub sample_contexts: Vec<SampleContext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleContext {
    pub number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResults {
    pub profile: TypistProfile,
    pub keystroke_time: f64,
    pub scenarios: BTreeMap<Scenario, ScenarioSummary>,
    pub savings_analysis: BTreeMap<Scenario, SavingsSummary>,
    pub optimal_scenario: Scenario,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub description: String,
    pub total_cost_seconds: f64,
    pub total_cost_minutes: f64,
    pub total_cost_hours: f64,
    pub average_cost_per_char_ms: f64,
    pub keyboard_layout: LayoutKind,
    pub conversion_applied: DigitConversion,
    pub digit_count: usize,
    pub digit_cost_seconds: f64,
    pub digit_costs: BTreeMap<char, DigitCostSummary>,
}

/// Per-digit line of a scenario: occurrences, cost of one, cost of all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DigitCostSummary {
    pub count: usize,
    pub ms_each: f64,
    pub total_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsSummary {
    pub description: String,
    pub time_saved_minutes: f64,
    pub time_saved_hours: f64,
    pub percentage_saved: f64,
    pub cost_per_digit_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFindings {
    pub current_state: StateSummary,
    pub optimal_state: StateSummary,
    pub time_saved_minutes: f64,
    pub efficiency_gain_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSummary {
    pub scenario: Scenario,
    pub description: String,
    pub time_minutes: f64,
    pub time_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactProjections {
    pub per_document_savings_minutes: f64,
    pub per_document_savings_hours: f64,
    pub projections: Vec<ScaleProjection>,
    pub working_days_per_year: u32,
    pub hourly_labor_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleProjection {
    pub scale: String,
    pub docs_per_day: u32,
    pub annual_hours_saved: f64,
    pub annual_cost_savings: f64,
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `numerator / denominator * 100`, or 0 when the denominator is not positive.
pub fn safe_percentage(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

/// Which typists an analysis covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfileSelection {
    /// Every registry profile at its own keystroke time.
    All,
    /// One profile, costed at `keystroke_time` (normally the profile's own).
    Single {
        profile: TypistProfile,
        keystroke_time: f64,
    },
}

impl ProfileSelection {
    pub fn single(profile: TypistProfile) -> Self {
        Self::Single {
            profile,
            keystroke_time: profile.keystroke_time(),
        }
    }

    fn runs(&self) -> Vec<(TypistProfile, f64)> {
        match *self {
            Self::All => TypistProfile::iter()
                .map(|p| (p, p.keystroke_time()))
                .collect(),
            Self::Single {
                profile,
                keystroke_time,
            } => vec![(profile, keystroke_time)],
        }
    }
}

/// Service: load `document_path` and build the full analysis.
///
/// With `include_all_typists` every registry profile is costed (in
/// parallel); otherwise only the average typist.
pub fn generate_analysis<P: AsRef<Path>>(
    document_path: P,
    include_all_typists: bool,
) -> TkResult<AnalysisReport> {
    let selection = if include_all_typists {
        ProfileSelection::All
    } else {
        ProfileSelection::single(TypistProfile::Average)
    };
    let path = document_path.as_ref();
    let analyzer = TextAnalyzer::from_file(path)?;
    generate_analysis_for(&analyzer, &document_name(path), selection)
}

/// File name of `path`, falling back to the full path.
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Same as [`generate_analysis`] over an already loaded document.
pub fn generate_analysis_for(
    analyzer: &TextAnalyzer,
    document_name: &str,
    selection: ProfileSelection,
) -> TkResult<AnalysisReport> {
    let runs = selection.runs();

    info!(
        "Analysing '{}' for {} typist profile(s)",
        document_name,
        runs.len()
    );

    let stats = analyzer.get_statistics();

    let analysis_results = runs
        .par_iter()
        .map(|&(profile, keystroke_time)| profile_results(analyzer, profile, keystroke_time))
        .collect::<TkResult<Vec<_>>>()?;

    // Headline numbers always use the average typist.
    let average = CostCalculator::new(analyzer, TypistProfile::Average.keystroke_time())
        .analyze_all_scenarios();

    Ok(AnalysisReport {
        metadata: build_metadata(&stats, document_name),
        document_analysis: build_document_analysis(&stats),
        typist_profiles: runs.iter().map(|(p, _)| p.info()).collect(),
        analysis_results,
        key_findings: build_key_findings(&average)?,
        impact_projections: build_impact_projections(&average)?,
    })
}

fn profile_results(
    analyzer: &TextAnalyzer,
    profile: TypistProfile,
    keystroke_time: f64,
) -> TkResult<ProfileResults> {
    let calculator = CostCalculator::new(analyzer, keystroke_time);
    let scenarios = calculator.analyze_all_scenarios();
    let savings = calculate_savings_analysis(&scenarios)?;
    let optimal = optimal_scenario(&scenarios).unwrap_or(BASELINE_SCENARIO);

    let scenario_summaries = scenarios
        .iter()
        .map(|(scenario, r)| {
            (
                *scenario,
                ScenarioSummary {
                    description: scenario.description().to_string(),
                    total_cost_seconds: r.total_cost_seconds,
                    total_cost_minutes: round_to(r.total_cost_minutes, 1),
                    total_cost_hours: round_to(r.total_cost_hours, 2),
                    average_cost_per_char_ms: round_to(r.average_cost_per_char * 1000.0, 1),
                    keyboard_layout: r.keyboard_layout,
                    conversion_applied: r.conversion_applied,
                    digit_count: r.total_digits(),
                    digit_cost_seconds: round_to(r.total_digit_cost(), 2),
                    digit_costs: r
                        .digit_costs
                        .iter()
                        .map(|(&digit, cost)| {
                            (
                                digit,
                                DigitCostSummary {
                                    count: cost.count,
                                    ms_each: round_to(cost.per_occurrence() * 1000.0, 1),
                                    total_seconds: round_to(cost.total_cost, 2),
                                },
                            )
                        })
                        .collect(),
                },
            )
        })
        .collect();

    let savings_summaries = savings
        .iter()
        .map(|(scenario, s)| {
            (
                *scenario,
                SavingsSummary {
                    description: scenario.description().to_string(),
                    time_saved_minutes: round_to(s.time_saved_minutes, 1),
                    time_saved_hours: round_to(s.time_saved_hours, 2),
                    percentage_saved: round_to(s.percentage_saved, 1),
                    cost_per_digit_ms: round_to(s.cost_per_digit * 1000.0, 1),
                },
            )
        })
        .collect();

    Ok(ProfileResults {
        profile,
        keystroke_time,
        scenarios: scenario_summaries,
        savings_analysis: savings_summaries,
        optimal_scenario: optimal,
    })
}

fn build_metadata(stats: &TextStatistics, document_name: &str) -> Metadata {
    Metadata {
        generated_at: Utc::now(),
        tool_version: TOOL_VERSION.to_string(),
        document_path: document_name.to_string(),
        document_stats: MetadataStats {
            total_characters: stats.document_stats.total_characters,
            total_digits: stats.document_stats.total_digits,
            digit_percentage: round_to(stats.document_stats.digit_percentage, 2),
            thai_digits: stats.digit_analysis.thai_digit_breakdown.values().sum(),
            international_digits: stats.digit_analysis.intl_digit_breakdown.values().sum(),
        },
    }
}

fn build_document_analysis(stats: &TextStatistics) -> DocumentAnalysis {
    let breakdown = &stats.digit_analysis.thai_digit_breakdown;

    // BTreeMap iterates by code point, so ties go to the lower digit.
    let most_frequent_digit = breakdown
        .iter()
        .fold(None, |best: Option<(char, usize)>, (&c, &n)| match best {
            Some((_, m)) if m >= n => best,
            _ => Some((c, n)),
        })
        .map(|(c, _)| c);
    let least_frequent_digit = breakdown
        .iter()
        .fold(None, |best: Option<(char, usize)>, (&c, &n)| match best {
            Some((_, m)) if m <= n => best,
            _ => Some((c, n)),
        })
        .map(|(c, _)| c);

    DocumentAnalysis {
        thai_digit_distribution: breakdown.clone(),
        most_frequent_digit,
        least_frequent_digit,
        total_sequences: stats.number_sequences.total_sequences,
        thai_sequences: stats.number_sequences.thai_sequences,
        average_thai_length: stats.number_sequences.avg_thai_length,
        sample_contexts: stats
            .contexts
            .iter()
            .take(5)
            .map(|c| SampleContext {
                number: c.number.clone(),
                kind: c.kind.to_string(),
                context: c.context.clone(),
            })
            .collect(),
    }
}

fn scenario_minutes(scenarios: &ScenarioSet, scenario: Scenario) -> TkResult<f64> {
    scenarios
        .get(&scenario)
        .map(|r| r.total_cost_minutes)
        .ok_or_else(|| ThaiKeyError::Validation(format!("Scenario '{}' was not computed", scenario)))
}

fn build_key_findings(scenarios: &ScenarioSet) -> TkResult<KeyFindings> {
    let current = scenario_minutes(scenarios, BASELINE_SCENARIO)?;
    let optimal = scenario_minutes(scenarios, TARGET_SCENARIO)?;
    let saved = current - optimal;

    let state = |scenario: Scenario, minutes: f64| StateSummary {
        scenario,
        description: scenario.short_name().to_string(),
        time_minutes: round_to(minutes, 1),
        time_hours: round_to(minutes / 60.0, 2),
    };

    Ok(KeyFindings {
        current_state: state(BASELINE_SCENARIO, current),
        optimal_state: state(TARGET_SCENARIO, optimal),
        time_saved_minutes: round_to(saved, 1),
        efficiency_gain_percentage: round_to(safe_percentage(saved, current), 1),
    })
}

fn build_impact_projections(scenarios: &ScenarioSet) -> TkResult<ImpactProjections> {
    let minutes_saved = scenario_minutes(scenarios, BASELINE_SCENARIO)?
        - scenario_minutes(scenarios, TARGET_SCENARIO)?;
    let hours_saved_per_doc = minutes_saved / 60.0;

    let projections = PROJECTION_SCALES
        .iter()
        .map(|&(scale, docs_per_day)| {
            let annual_hours =
                f64::from(docs_per_day) * f64::from(WORKING_DAYS_PER_YEAR) * hours_saved_per_doc;
            ScaleProjection {
                scale: scale.to_string(),
                docs_per_day,
                annual_hours_saved: annual_hours.round(),
                annual_cost_savings: (annual_hours * HOURLY_LABOR_COST).round(),
            }
        })
        .collect();

    Ok(ImpactProjections {
        per_document_savings_minutes: round_to(minutes_saved, 1),
        per_document_savings_hours: round_to(hours_saved_per_doc, 2),
        projections,
        working_days_per_year: WORKING_DAYS_PER_YEAR,
        hourly_labor_cost: HOURLY_LABOR_COST,
    })
}

/// Writes the report as pretty JSON, creating parent directories.
pub fn save_report<P: AsRef<Path>>(report: &AnalysisReport, path: P) -> TkResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    info!("Saved analysis JSON to {}", path.display());
    Ok(())
}

pub fn load_report<P: AsRef<Path>>(path: P) -> TkResult<AnalysisReport> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ThaiKeyError::DocumentNotFound(path.to_path_buf()),
        _ => ThaiKeyError::Io(e),
    })?;
    Ok(serde_json::from_str(&content)?)
}
