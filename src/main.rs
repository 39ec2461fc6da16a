use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use thaikey::config::Config;
use thaikey::error::TkResult;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; flags given on the command line win over it
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cost a document under every digit-script x layout scenario
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Render a previously saved analysis JSON
    Render(cmd::render::RenderArgs),
    /// Show layout summaries and per-digit costs
    Layouts(cmd::layouts::LayoutsArgs),
    /// List the typist profiles
    Typists,
}

/// File config (if any) with explicit command-line values merged on top.
fn resolve_config(
    path: Option<&PathBuf>,
    cli_config: &Config,
    sub_matches: &ArgMatches,
) -> TkResult<Config> {
    match path {
        Some(path) => {
            info!("⚙️  Loading config from {}", path.display());
            let mut config = Config::load_from_file(path)?;
            config.merge_from_cli(cli_config, sub_matches);
            Ok(config)
        }
        None => Ok(cli_config.clone()),
    }
}

fn run(cli: &Cli, matches: &ArgMatches) -> TkResult<()> {
    match &cli.command {
        Commands::Analyze(args) => {
            let sub = matches.subcommand_matches("analyze").unwrap_or(matches);
            let config = resolve_config(cli.config.as_ref(), &args.config, sub)?;
            cmd::analyze::run(&args.document, &config)
        }
        Commands::Render(args) => {
            let sub = matches.subcommand_matches("render").unwrap_or(matches);
            let output = match cli.config.as_ref() {
                Some(path) => {
                    info!("⚙️  Loading config from {}", path.display());
                    let mut output = Config::load_from_file(path)?.output;
                    output.merge_from_cli(&args.output, sub);
                    output
                }
                None => args.output.clone(),
            };
            cmd::render::run(&args.analysis, &output)
        }
        Commands::Layouts(args) => {
            cmd::layouts::run(args);
            Ok(())
        }
        Commands::Typists => {
            cmd::typists::run();
            Ok(())
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli, &matches) {
        error!("{}", e);
        process::exit(1);
    }
}
