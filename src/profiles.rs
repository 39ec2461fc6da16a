use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Keystroke time of the default (average) typist, in seconds.
pub const DEFAULT_KEYSTROKE_TIME: f64 = 0.28;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TypistProfile {
    Expert,
    Skilled,
    #[default]
    Average,
    Worst,
}

impl TypistProfile {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Expert => "Expert Typist (90 WPM)",
            Self::Skilled => "Skilled Typist",
            Self::Average => "Average Non-secretarial",
            Self::Worst => "Worst Typist",
        }
    }

    /// Seconds per unshifted keystroke.
    pub fn keystroke_time(&self) -> f64 {
        match self {
            Self::Expert => 0.12,
            Self::Skilled => 0.20,
            Self::Average => DEFAULT_KEYSTROKE_TIME,
            Self::Worst => 1.2,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Expert => "Professional typist, ~90 WPM, touch typing mastery",
            Self::Skilled => "Experienced office worker, good typing skills",
            Self::Average => "Average office worker, moderate typing skills (default)",
            Self::Worst => "Hunt-and-peck typist, very slow typing",
        }
    }

    pub fn info(&self) -> ProfileInfo {
        ProfileInfo {
            key: *self,
            name: self.name().to_string(),
            keystroke_time: self.keystroke_time(),
            description: self.description().to_string(),
        }
    }
}

/// Serializable snapshot of a profile, as carried in analysis reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub key: TypistProfile,
    pub name: String,
    pub keystroke_time: f64,
    pub description: String,
}

/// Case-insensitive registry lookup. Unknown names yield `None`.
pub fn get_profile(name: &str) -> Option<TypistProfile> {
    name.to_lowercase().parse().ok()
}

pub fn all_profiles() -> Vec<TypistProfile> {
    TypistProfile::iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(get_profile("EXPERT"), Some(TypistProfile::Expert));
        assert_eq!(get_profile("Average"), Some(TypistProfile::Average));
        assert_eq!(get_profile(" average "), None);
        assert_eq!(get_profile("novice"), None);
        assert_eq!(get_profile(""), None);
    }

    #[test]
    fn registry_order_and_times() {
        let times: Vec<f64> = all_profiles().iter().map(|p| p.keystroke_time()).collect();
        assert_eq!(times, vec![0.12, 0.20, 0.28, 1.2]);
        assert_eq!(TypistProfile::default(), TypistProfile::Average);
    }
}
