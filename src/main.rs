mod cli;
mod config;
mod histogram;
mod ingest;
mod markers;
mod partition;
mod report_helpers;
mod scale;
mod view;
mod walk;

use std::error::Error;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};
use config::Config;

fn target(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from("."))
}

fn combined_excludes(config: &Config, cli: &[String]) -> Vec<String> {
    config
        .exclude
        .iter()
        .chain(cli.iter())
        .cloned()
        .collect()
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::View {
            path,
            exclude,
            config,
            output,
        } => {
            let target = target(path);
            let config = config::load(config.as_deref(), &target)?;
            let excludes = combined_excludes(&config, &exclude);
            view::run(&target, &config, &excludes, output)
        }
        Commands::Bands {
            common,
            boundaries,
            files,
        } => {
            let target = target(common.path);
            let config = config::load(common.config.as_deref(), &target)?;
            let excludes = combined_excludes(&config, &common.exclude);
            partition::run(
                &target,
                common.json,
                boundaries.as_deref(),
                files,
                &config,
                &excludes,
            )
        }
        Commands::Hist { common } => {
            let target = target(common.path);
            let config = config::load(common.config.as_deref(), &target)?;
            let excludes = combined_excludes(&config, &common.exclude);
            histogram::run(&target, common.json, &excludes)
        }
        Commands::Scores { common, top } => {
            let target = target(common.path);
            let config = config::load(common.config.as_deref(), &target)?;
            let excludes = combined_excludes(&config, &common.exclude);
            ingest::run(&target, common.json, top, &excludes)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "sb", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
