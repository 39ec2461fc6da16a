use crate::digits::DigitConversion;
use crate::layouts::LayoutKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharCost {
    pub count: usize,
    pub total_cost: f64,
}

impl CharCost {
    #[inline]
    pub fn add(&mut self, cost: f64) {
        self.count += 1;
        self.total_cost += cost;
    }

    /// Average seconds per occurrence, 0 for an empty bucket.
    pub fn per_occurrence(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_cost / self.count as f64
        }
    }
}

/// Aggregate cost of typing one document under one (layout, conversion) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    // Top-line totals
    pub total_cost_seconds: f64,
    pub total_cost_minutes: f64,
    pub total_cost_hours: f64,
    pub total_characters: usize,
    pub average_cost_per_char: f64,

    // Breakdowns
    pub character_costs: BTreeMap<char, CharCost>,
    pub digit_costs: BTreeMap<char, CharCost>,

    // Inputs
    pub keyboard_layout: LayoutKind,
    pub conversion_applied: DigitConversion,
    pub base_keystroke_time: f64,
}

impl ScenarioResult {
    pub fn total_digits(&self) -> usize {
        self.digit_costs.values().map(|d| d.count).sum()
    }

    pub fn total_digit_cost(&self) -> f64 {
        self.digit_costs.values().map(|d| d.total_cost).sum()
    }
}

/// Savings of one scenario relative to the baseline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    /// Negative when the scenario is slower than the baseline.
    pub time_saved_seconds: f64,
    pub time_saved_minutes: f64,
    pub time_saved_hours: f64,
    pub percentage_saved: f64,
    pub cost_per_digit: f64,
}
