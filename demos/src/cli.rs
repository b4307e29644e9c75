use std::path::PathBuf;

use cfg_file::config::ConfigFile;
use clap::Parser;
use log::info;
use string_proc::Style;

use crate::{
    case_file::CaseFile,
    error::DemoError,
    runner::{RunSummary, Verdict, run_cases, run_inputs},
};

/// Convert strings between naming conventions
#[derive(Parser, Debug)]
#[command(name = "example_case_convert")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Inputs to convert. When empty, the case file is run instead
    pub inputs: Vec<String>,

    /// Target style for the inputs (camel, kebab, dot, pascal, snake)
    #[arg(short, long, default_value = "camel")]
    pub style: Style,

    /// Case file to run (default: the bundled cases.toml)
    #[arg(short, long, value_name = "PATH", conflicts_with = "inputs")]
    pub cases: Option<PathBuf>,

    /// Write the built-in sample cases to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub write_sample: Option<PathBuf>,
}

/// Run the demo, printing one line per case to stdout
pub fn run(args: Args) -> Result<RunSummary, DemoError> {
    if let Some(path) = args.write_sample {
        CaseFile::sample().write_to(&path)?;
        info!("Sample cases written to {}", path.display());
        return Ok(RunSummary::default());
    }

    if !args.inputs.is_empty() {
        let summary = run_inputs(&args.inputs, args.style);
        print_summary(&summary);
        return Ok(summary);
    }

    let file = match args.cases {
        Some(path) => CaseFile::read_from(path)?,
        None => CaseFile::read()?,
    };

    let summary = run_cases(&file);
    print_summary(&summary);

    match summary.count(Verdict::Failed) {
        0 => Ok(summary),
        failed => Err(DemoError::Mismatch(failed)),
    }
}

fn print_summary(summary: &RunSummary) {
    for report in &summary.reports {
        println!("{}", report.describe());
    }
}
