use crate::error::{ThaiKeyError, TkResult};
use crate::profiles::{get_profile, TypistProfile};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum_macros::Display;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub analysis: AnalysisParams,
    #[command(flatten)]
    pub output: OutputParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// Typist skill level (expert, skilled, average, worst)
    #[arg(long, default_value = "average")]
    pub typist: String,

    /// Explicit seconds per keystroke; overrides the typist profile
    #[arg(long, conflicts_with = "compare_all")]
    pub keystroke_time: Option<f64>,

    /// Run the analysis for every typist profile
    #[arg(long, default_value_t = false)]
    pub compare_all: bool,
}

macro_rules! update_if_present {
    ($target:ident, $cli:ident, $matches:ident, $field:ident, $arg_name:expr) => {
        if $matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
            $target.$field = $cli.$field.clone();
        }
    };
}

impl AnalysisParams {
    pub fn merge_from_cli(&mut self, cli: &AnalysisParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, typist, "typist");
        update_if_present!(self, cli, matches, keystroke_time, "keystroke_time");
        update_if_present!(self, cli, matches, compare_all, "compare_all");
    }
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            typist: "average".to_string(),
            keystroke_time: None,
            compare_all: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Console,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputParams {
    /// Directory for generated files
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Extra copy of the analysis JSON (relative paths land in the output dir)
    #[arg(long)]
    pub output_json: Option<String>,
}

impl OutputParams {
    /// Output flags only; `render` takes no analysis flags.
    pub fn merge_from_cli(&mut self, cli: &OutputParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, output, "output");
        update_if_present!(self, cli, matches, format, "format");
        update_if_present!(self, cli, matches, output_json, "output_json");
    }

    /// Where the optional extra JSON copy goes. Adds `.json` when missing and
    /// resolves relative names under the output directory.
    pub fn extra_json_path(&self) -> Option<PathBuf> {
        let raw = self.output_json.as_ref()?;
        let name = if raw.ends_with(".json") {
            raw.clone()
        } else {
            format!("{}.json", raw)
        };
        let path = PathBuf::from(name);
        if path.is_absolute() {
            Some(path)
        } else {
            Some(self.output.join(path))
        }
    }
}

impl Default for OutputParams {
    fn default() -> Self {
        Self {
            output: PathBuf::from("output"),
            format: OutputFormat::Console,
            output_json: None,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TkResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ThaiKeyError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Copies every value the user typed on the command line over `self`,
    /// leaving file-provided values in place where clap only used a default.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.analysis.merge_from_cli(&cli.analysis, matches);
        self.output.merge_from_cli(&cli.output, matches);
    }

    pub fn typist_profile(&self) -> TkResult<TypistProfile> {
        get_profile(&self.analysis.typist)
            .ok_or_else(|| ThaiKeyError::UnknownProfile(self.analysis.typist.clone()))
    }

    /// Explicit keystroke time if given, else the selected profile's.
    pub fn resolve_keystroke_time(&self) -> TkResult<f64> {
        match self.analysis.keystroke_time {
            Some(t) => Ok(t),
            None => Ok(self.typist_profile()?.keystroke_time()),
        }
    }

    pub fn extra_json_path(&self) -> Option<PathBuf> {
        self.output.extra_json_path()
    }
}
