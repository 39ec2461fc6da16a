pub mod scenarios;
pub mod types;

pub use self::scenarios::{Scenario, BASELINE_SCENARIO, TARGET_SCENARIO};
pub use self::types::{CharCost, SavingsResult, ScenarioResult};

use crate::analyzer::TextAnalyzer;
use crate::digits::{convert_digits, is_any_digit, DigitConversion};
use crate::error::{ThaiKeyError, TkResult};
use crate::layouts::KeyboardLayout;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::debug;

pub type ScenarioSet = BTreeMap<Scenario, ScenarioResult>;
pub type SavingsSet = BTreeMap<Scenario, SavingsResult>;

/// Costs one loaded document at a fixed keystroke time.
///
/// Holds no state besides its inputs; every call recomputes from the
/// document text and returns a fresh result.
#[derive(Debug, Clone, Copy)]
pub struct CostCalculator<'a> {
    analyzer: &'a TextAnalyzer,
    base_keystroke_time: f64,
}

impl<'a> CostCalculator<'a> {
    pub fn new(analyzer: &'a TextAnalyzer, base_keystroke_time: f64) -> Self {
        Self {
            analyzer,
            base_keystroke_time,
        }
    }

    pub fn base_keystroke_time(&self) -> f64 {
        self.base_keystroke_time
    }

    pub fn calculate_document_cost(
        &self,
        layout: &KeyboardLayout,
        conversion: DigitConversion,
    ) -> ScenarioResult {
        let text = convert_digits(self.analyzer.text(), conversion.target());
        let base = self.base_keystroke_time;

        let mut total_cost = 0.0;
        let mut total_characters = 0usize;
        let mut character_costs: BTreeMap<char, CharCost> = BTreeMap::new();
        let mut digit_costs: BTreeMap<char, CharCost> = BTreeMap::new();

        for c in text.chars() {
            let cost = layout.typing_cost(c, base);
            total_cost += cost;
            total_characters += 1;

            character_costs.entry(c).or_default().add(cost);

            // Tracked for both scripts whatever conversion was applied.
            if is_any_digit(c) {
                digit_costs.entry(c).or_default().add(cost);
            }
        }

        let average_cost_per_char = if total_characters > 0 {
            total_cost / total_characters as f64
        } else {
            0.0
        };

        debug!(
            "Costed {} chars on {} ({}): {:.2}s",
            total_characters, layout.kind, conversion, total_cost
        );

        ScenarioResult {
            total_cost_seconds: total_cost,
            total_cost_minutes: total_cost / 60.0,
            total_cost_hours: total_cost / 3600.0,
            total_characters,
            average_cost_per_char,
            character_costs,
            digit_costs,
            keyboard_layout: layout.kind,
            conversion_applied: conversion,
            base_keystroke_time: base,
        }
    }

    pub fn calculate_scenario(&self, scenario: Scenario) -> ScenarioResult {
        self.calculate_document_cost(KeyboardLayout::get(scenario.layout()), scenario.conversion())
    }

    /// All four scenarios of the digit-script x layout matrix.
    pub fn analyze_all_scenarios(&self) -> ScenarioSet {
        Scenario::iter()
            .map(|s| (s, self.calculate_scenario(s)))
            .collect()
    }
}

/// Savings of every non-baseline scenario against [`BASELINE_SCENARIO`].
pub fn calculate_savings_analysis(scenarios: &ScenarioSet) -> TkResult<SavingsSet> {
    let baseline = scenarios.get(&BASELINE_SCENARIO).ok_or_else(|| {
        ThaiKeyError::Validation(format!(
            "Scenario set is missing the '{}' baseline",
            BASELINE_SCENARIO
        ))
    })?;
    let base_seconds = baseline.total_cost_seconds;

    let savings = scenarios
        .iter()
        .filter(|(scenario, _)| **scenario != BASELINE_SCENARIO)
        .map(|(scenario, result)| {
            let time_saved_seconds = base_seconds - result.total_cost_seconds;
            let percentage_saved = if base_seconds > 0.0 {
                time_saved_seconds / base_seconds * 100.0
            } else {
                0.0
            };
            let digits = result.total_digits();
            let cost_per_digit = if digits > 0 {
                result.total_cost_seconds / digits as f64
            } else {
                0.0
            };

            (
                *scenario,
                SavingsResult {
                    time_saved_seconds,
                    time_saved_minutes: time_saved_seconds / 60.0,
                    time_saved_hours: time_saved_seconds / 3600.0,
                    percentage_saved,
                    cost_per_digit,
                },
            )
        })
        .collect();

    Ok(savings)
}

/// The cheapest scenario. Ties resolve to the earliest in matrix order.
pub fn optimal_scenario(scenarios: &ScenarioSet) -> Option<Scenario> {
    scenarios
        .iter()
        .min_by(|a, b| a.1.total_cost_seconds.total_cmp(&b.1.total_cost_seconds))
        .map(|(s, _)| *s)
}
