use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use toolbooth::cli::{self, output, Cli, Commands};
use toolbooth::config::Config;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    config.logging.init();

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Checkout(args) => {
            let path = catalog_path(&args.catalog, config);
            cli::checkout::execute(args, &path)
                .with_context(|| format!("checkout of \"{}\" failed", args.tool))?;
        }
        Commands::Tools(args) => {
            let path = catalog_path(&args.catalog, config);
            cli::tools::execute(&path).context("listing tools failed")?;
        }
    }

    Ok(())
}

fn catalog_path(arg: &Option<PathBuf>, config: &Config) -> PathBuf {
    arg.clone().unwrap_or_else(|| config.catalog.path.clone())
}
