use crate::reports;
use clap::Args;
use std::path::{Path, PathBuf};
use thaikey::api;
use thaikey::config::{OutputFormat, OutputParams};
use thaikey::error::TkResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Analysis JSON written by `analyze`
    pub analysis: PathBuf,

    #[command(flatten)]
    pub output: OutputParams,
}

/// Re-renders a saved analysis without touching the source document.
pub fn run(analysis: &Path, output: &OutputParams) -> TkResult<()> {
    let report = api::load_report(analysis)?;
    info!(
        "📂 Loaded analysis of '{}' ({} profile(s))",
        report.metadata.document_path,
        report.analysis_results.len()
    );

    if let Some(extra) = output.extra_json_path() {
        api::save_report(&report, &extra)?;
    }

    match output.format {
        OutputFormat::Console => reports::print_full(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Markdown => {
            let prefix = reports::markdown::render_prefix(analysis);
            let path = reports::markdown::write_report(&report, &output.output, &prefix)?;
            info!("📝 Markdown report written to {}", path.display());
        }
    }
    Ok(())
}
