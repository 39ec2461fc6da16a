use crate::digits::DigitConversion;
use crate::layouts::LayoutKind;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The fixed 2x2 matrix of digit script x keyboard layout.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    ThaiKedmanee,
    IntlKedmanee,
    ThaiPattajoti,
    IntlPattajoti,
}

/// Current practice: the document's own Thai digits typed on Kedmanee.
/// Every savings figure is measured against this scenario.
pub const BASELINE_SCENARIO: Scenario = Scenario::ThaiKedmanee;

/// The configuration reported as the optimal state in key findings.
pub const TARGET_SCENARIO: Scenario = Scenario::IntlPattajoti;

impl Scenario {
    pub fn layout(&self) -> LayoutKind {
        match self {
            Self::ThaiKedmanee | Self::IntlKedmanee => LayoutKind::Kedmanee,
            Self::ThaiPattajoti | Self::IntlPattajoti => LayoutKind::Pattajoti,
        }
    }

    /// Source documents already use Thai digits, so the Thai scenarios
    /// leave the text alone and there is no `ToThai` scenario.
    pub fn conversion(&self) -> DigitConversion {
        match self {
            Self::ThaiKedmanee | Self::ThaiPattajoti => DigitConversion::None,
            Self::IntlKedmanee | Self::IntlPattajoti => DigitConversion::ToInternational,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ThaiKedmanee => "Thai digits on Kedmanee keyboard (current state)",
            Self::IntlKedmanee => "International digits on Kedmanee keyboard",
            Self::ThaiPattajoti => "Thai digits on Pattajoti keyboard",
            Self::IntlPattajoti => "International digits on Pattajoti keyboard (optimal)",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Self::ThaiKedmanee => "Thai + Kedmanee",
            Self::IntlKedmanee => "International + Kedmanee",
            Self::ThaiPattajoti => "Thai + Pattajoti",
            Self::IntlPattajoti => "International + Pattajoti",
        }
    }
}
