//! CLI definition and dispatch.

use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::adapters::chart_render::ChartRenderAdapter;
use crate::adapters::csv_adapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_program_adapter::JsonProgramAdapter;
use crate::domain::config::{build_valuation_config, ValuationConfig};
use crate::domain::error::PortvalError;
use crate::domain::model::{evaluate, Valuation};
use crate::domain::program::Program;
use crate::domain::selection::{classify, Classification};
use crate::ports::config_port::ConfigPort;
use crate::ports::program_port::ProgramPort;
use crate::ports::render_port::{RenderPort, RenderRequest};

pub const DEFAULT_OUTPUT_DIR: &str = "out";
pub const SERIES_FILE: &str = "series.csv";

#[derive(Parser, Debug)]
#[command(name = "portval", about = "Yearly portfolio valuation from transaction programs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Value a program and render the selected views
    Run {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        program: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        dry_run: bool,
    },
    /// Classify a program and report rejected entries
    Validate {
        #[arg(short, long)]
        program: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Run {
            config,
            program,
            output,
            dry_run,
        } => run_valuation(config.as_deref(), &program, output.as_deref(), dry_run),
        Command::Validate { program } => run_validate(&program),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Settings resolved from the config file plus command-line overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub valuation: ValuationConfig,
    pub output_dir: PathBuf,
}

pub fn build_run_settings(
    adapter: Option<&dyn ConfigPort>,
    output_override: Option<&Path>,
) -> Result<RunSettings, PortvalError> {
    let valuation = match adapter {
        Some(adapter) => build_valuation_config(adapter)?,
        None => ValuationConfig::default(),
    };
    let output_dir = match output_override {
        Some(dir) => dir.to_path_buf(),
        None => adapter
            .and_then(|a| a.get_string("output", "directory"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
    };
    Ok(RunSettings {
        valuation,
        output_dir,
    })
}

pub fn load_program(path: &Path) -> Result<Program, PortvalError> {
    JsonProgramAdapter::new(path).load_program()
}

/// What a completed run produced.
#[derive(Debug)]
pub struct RunReport {
    pub valuation: Valuation,
    pub written: Vec<PathBuf>,
}

/// Evaluate `program`, export the series and render the selected views.
pub fn run_pipeline(
    settings: &RunSettings,
    program: &Program,
    renderer: &dyn RenderPort,
) -> Result<RunReport, PortvalError> {
    let (model, valuation) = evaluate(&settings.valuation, program);

    std::fs::create_dir_all(&settings.output_dir)?;
    let series_path = settings.output_dir.join(SERIES_FILE);
    csv_adapter::write_series_file(&series_path, &valuation.portfolio, &valuation.profit_loss)?;
    let mut written = vec![series_path];

    let request = RenderRequest::new(
        &valuation,
        model.ledger().instruments().collect(),
        model.ledger().tracked_horizon().start,
    );
    written.extend(renderer.render(&request, &settings.output_dir)?);

    Ok(RunReport { valuation, written })
}

pub fn format_series_table(valuation: &Valuation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6} {:>14} {:>14}", "Year", "Value", "Profit/Loss");
    for point in valuation.portfolio.points() {
        let _ = writeln!(
            out,
            "{:<6} {:>14.2} {:>14.2}",
            point.year,
            point.value,
            valuation.profit_loss.get(point.year).unwrap_or(0.0)
        );
    }
    out
}

pub fn format_classification(classification: &Classification) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Directives: {}", classification.directives.len());
    for directive in &classification.directives {
        let _ = writeln!(
            out,
            "  {} {} {} {:.2}",
            directive.instrument, directive.year, directive.direction_code, directive.magnitude
        );
    }
    let views: Vec<String> = classification.selection.iter().map(|v| v.to_string()).collect();
    let _ = writeln!(
        out,
        "Views: {}",
        if views.is_empty() {
            "(none)".to_string()
        } else {
            views.join(", ")
        }
    );
    if !classification.rejected.is_empty() {
        let _ = writeln!(out, "Rejected: {}", classification.rejected.len());
        for err in &classification.rejected {
            let _ = writeln!(out, "  {err}");
        }
    }
    out
}

fn run_valuation(
    config_path: Option<&Path>,
    program_path: &Path,
    output_override: Option<&Path>,
    dry_run: bool,
) -> Result<(), PortvalError> {
    let adapter = match config_path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            Some(FileConfigAdapter::from_file(path)?)
        }
        None => None,
    };
    let settings = build_run_settings(
        adapter.as_ref().map(|a| a as &dyn ConfigPort),
        output_override,
    )?;

    info!(path = %program_path.display(), "loading program");
    let program = load_program(program_path)?;

    if dry_run {
        print!("{}", format_classification(&classify(&program)));
        eprintln!("Dry run complete. Config and program are valid.");
        return Ok(());
    }

    let report = run_pipeline(&settings, &program, &ChartRenderAdapter::new())?;
    print!("{}", format_series_table(&report.valuation));

    for err in &report.valuation.diagnostics {
        eprintln!("warning: {err}");
    }
    for path in &report.written {
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

fn run_validate(program_path: &Path) -> Result<(), PortvalError> {
    let program = load_program(program_path)?;
    print!("{}", format_classification(&classify(&program)));
    Ok(())
}
