//! Audience Audit CLI.

use anyhow::{Context, Result};
use clap::Parser;

use audit_cli::cli::{Cli, Command};
use audit_cli::commands::{run_analyze, run_content, run_detect, run_parameters};
use audit_cli::config::load_options;
use audit_cli::logging::{LogConfig, init_logging};
use audit_cli::summary::{print_analysis, print_detection, print_findings, rules_table};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = LogConfig::from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let options = load_options(cli.config.as_deref()).context("load configuration")?;
    match &cli.command {
        Command::Analyze(args) => print_analysis(&run_analyze(args, &options)?),
        Command::Detect(args) => print_detection(&run_detect(args, &options)?, args.json),
        Command::Content(args) => print_findings(&run_content(args)?, args.json),
        Command::Parameters => {
            println!("{}", rules_table(&run_parameters(&options)?));
            Ok(())
        }
    }
}
