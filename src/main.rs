mod cli;

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use textlens::analysis::class_counts;
use textlens::input::LoadError;
use textlens::report::{render_json, render_report, OutputFormat};
use textlens::source::{load_source, parse_source};
use textlens::{Analyzer, AnalyzerConfig, Config};

use crate::cli::Cli;

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config {
        analyzer: AnalyzerConfig {
            top_n: cli.top,
            dash_policy: cli.dash_policy,
        },
        ..Config::default()
    };

    let doc = load_source(&parse_source(&cli.source))?;
    let analyzer = Analyzer::new(config.analyzer);
    let (result, tokens) = analyzer.analyze_classified(&doc.text);

    match cli.format {
        OutputFormat::Json => println!("{}", render_json(&result)?),
        OutputFormat::Text => {
            let classes = cli.classes.then(|| class_counts(&tokens));
            print!(
                "{}",
                render_report(
                    &result,
                    analyzer.config().top_n,
                    &config.report,
                    classes.as_deref()
                )
            );
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{:?}", err);
            match err.downcast_ref::<LoadError>() {
                Some(LoadError::FileNotFound(path)) => {
                    eprintln!("Error: {} not found!", path.display());
                    eprintln!("Please ensure the file exists and the path is correct.");
                }
                _ => eprintln!("An error occurred: {}", err),
            }
            ExitCode::FAILURE
        }
    }
}
