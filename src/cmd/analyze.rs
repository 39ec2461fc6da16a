use crate::reports;
use clap::Args;
use std::path::{Path, PathBuf};
use thaikey::analyzer::TextAnalyzer;
use thaikey::api::{self, ProfileSelection};
use thaikey::config::{Config, OutputFormat};
use thaikey::error::TkResult;
use tracing::{info, warn};

pub const ANALYSIS_FILE: &str = "analysis.json";

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// UTF-8 text document to analyse
    pub document: PathBuf,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(document: &Path, config: &Config) -> TkResult<()> {
    let selection = if config.analysis.compare_all {
        if let Some(t) = config.analysis.keystroke_time {
            warn!("--compare-all uses each profile's own timing; ignoring keystroke_time {}", t);
        }
        ProfileSelection::All
    } else {
        ProfileSelection::Single {
            profile: config.typist_profile()?,
            keystroke_time: config.resolve_keystroke_time()?,
        }
    };

    let analyzer = TextAnalyzer::from_file(document)?;
    let report = api::generate_analysis_for(&analyzer, &api::document_name(document), selection)?;

    let out_dir = &config.output.output;
    api::save_report(&report, out_dir.join(ANALYSIS_FILE))?;

    if let Some(extra) = config.extra_json_path() {
        api::save_report(&report, &extra)?;
    }

    match config.output.format {
        OutputFormat::Console => reports::print_full(&report),
        OutputFormat::Json => reports::print_summary(&report),
        OutputFormat::Markdown => {
            let prefix = reports::markdown::REPORT_PREFIX;
            let path = reports::markdown::write_report(&report, out_dir, prefix)?;
            info!("📝 Markdown report written to {}", path.display());
        }
    }

    Ok(())
}
