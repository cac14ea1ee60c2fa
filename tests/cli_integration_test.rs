//! CLI integration tests for the run command orchestration.
//!
//! Tests cover:
//! - Run settings from INI config (build_run_settings) and overrides
//! - Program loading from JSON files on disk
//! - Full pipeline with MockRenderPort
//! - Full pipeline with the chart adapter writing real files
//! - Output formatting for the series table and classification

mod common;

use common::*;
use portval::adapters::chart_render::{ChartRenderAdapter, COMBINED_FILE, SUMMARY_FILE};
use portval::adapters::file_config_adapter::FileConfigAdapter;
use portval::cli;
use portval::domain::error::PortvalError;
use portval::domain::horizon::YearHorizon;
use portval::domain::selection::{classify, View};
use portval::domain::valuation::ValuationMode;
use portval::ports::config_port::ConfigPort;
use std::path::{Path, PathBuf};

const VALID_INI: &str = r#"
[valuation]
initial_balance = 1000
base_year_start = 2015
base_year_end = 2020
mode = per_year
instruments = GOLD,SLVR,TSLA

[output]
directory = reports
"#;

fn settings_for(dir: &Path) -> cli::RunSettings {
    let adapter = FileConfigAdapter::from_string(VALID_INI).unwrap();
    cli::build_run_settings(Some(&adapter as &dyn ConfigPort), Some(dir)).unwrap()
}

mod config_loading {
    use super::*;

    #[test]
    fn build_run_settings_valid_full() {
        let adapter = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let settings = cli::build_run_settings(Some(&adapter as &dyn ConfigPort), None).unwrap();

        assert_eq!(settings.valuation.initial_balance, 1000.0);
        assert_eq!(settings.valuation.base_horizon, YearHorizon::new(2015, 2020).unwrap());
        assert_eq!(settings.valuation.mode, ValuationMode::PerYear);
        assert_eq!(settings.valuation.instruments, vec!["GOLD", "SLVR", "TSLA"]);
        assert_eq!(settings.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn build_run_settings_without_config_uses_defaults() {
        let settings = cli::build_run_settings(None, None).unwrap();
        assert_eq!(settings.valuation.initial_balance, 1000.0);
        assert_eq!(settings.valuation.base_horizon, YearHorizon::default());
        assert_eq!(settings.output_dir, PathBuf::from(cli::DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn output_override_wins() {
        let adapter = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let settings = cli::build_run_settings(
            Some(&adapter as &dyn ConfigPort),
            Some(Path::new("/tmp/elsewhere")),
        )
        .unwrap();
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let adapter =
            FileConfigAdapter::from_string("[valuation]\nmode = sideways\n").unwrap();
        let err = cli::build_run_settings(Some(&adapter as &dyn ConfigPort), None).unwrap_err();
        assert!(matches!(err, PortvalError::ConfigInvalid { key, .. } if key == "mode"));
    }

    #[test]
    fn mistyped_number_is_rejected() {
        let adapter = FileConfigAdapter::from_string(
            "[valuation]\ninitial_balance = 1OOO\n",
        )
        .unwrap();
        let err = cli::build_run_settings(Some(&adapter as &dyn ConfigPort), None).unwrap_err();
        assert!(matches!(err, PortvalError::ConfigInvalid { key, .. } if key == "initial_balance"));
    }

    #[test]
    fn config_file_on_disk() {
        let file = write_temp_file(VALID_INI, ".ini");
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        let settings = cli::build_run_settings(Some(&adapter as &dyn ConfigPort), None).unwrap();
        assert_eq!(settings.valuation.instruments.len(), 3);
    }
}

mod program_loading {
    use super::*;

    #[test]
    fn loads_reference_program_from_disk() {
        let file = write_temp_file(REFERENCE_PROGRAM_JSON, ".json");
        let program = cli::load_program(file.path()).unwrap();
        assert_eq!(program, reference_program());
    }

    #[test]
    fn missing_program_file_is_error() {
        let err = cli::load_program(Path::new("/nonexistent/program.json")).unwrap_err();
        assert!(matches!(err, PortvalError::ProgramParse { .. }));
    }

    #[test]
    fn non_object_program_is_error() {
        let file = write_temp_file("42", ".json");
        let err = cli::load_program(file.path()).unwrap_err();
        assert!(matches!(err, PortvalError::ProgramParse { .. }));
    }
}

mod pipeline_with_mock_renderer {
    use super::*;

    #[test]
    fn renderer_receives_series_and_selection() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path());
        let renderer = MockRenderPort::new();

        let report = cli::run_pipeline(&settings, &reference_program(), &renderer).unwrap();

        let calls = renderer.calls.borrow();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(
            call.views,
            vec![View::Portfolio, View::BarGraph, View::TimeSeries]
        );
        assert_eq!(call.years, vec![2015, 2016, 2017, 2018, 2019, 2020]);
        assert_eq!(call.values, vec![1000.0, 760.0, 800.0, 940.0, 900.0, 1550.0]);
        assert_eq!(call.instruments, vec!["GOLD", "SLVR", "TSLA"]);
        assert_eq!(call.output_dir, dir.path());

        assert_eq!(report.written, vec![dir.path().join(cli::SERIES_FILE)]);
    }

    #[test]
    fn series_csv_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path());
        cli::run_pipeline(&settings, &reference_program(), &MockRenderPort::new()).unwrap();

        let csv = std::fs::read_to_string(dir.path().join(cli::SERIES_FILE)).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "year,portfolio_value,profit_loss");
        assert_eq!(lines[2], "2016,760.0,0.0");
    }

    #[test]
    fn render_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path());
        let renderer = MockRenderPort::failing("disk full");

        let err = cli::run_pipeline(&settings, &reference_program(), &renderer).unwrap_err();
        assert!(matches!(err, PortvalError::Render { reason } if reason == "disk full"));
    }

    #[test]
    fn diagnostics_are_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path());
        let program = reference_program().with_amount("GOLD2017Q", 5.0);

        let report = cli::run_pipeline(&settings, &program, &MockRenderPort::new()).unwrap();
        assert_eq!(report.valuation.diagnostics.len(), 1);
    }
}

mod pipeline_with_chart_renderer {
    use super::*;

    #[test]
    fn writes_combined_chart_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let settings = settings_for(&out);

        let report =
            cli::run_pipeline(&settings, &reference_program(), &ChartRenderAdapter::new())
                .unwrap();

        let names: Vec<String> = report
            .written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![cli::SERIES_FILE, SUMMARY_FILE, COMBINED_FILE]);

        let svg = std::fs::read_to_string(out.join(COMBINED_FILE)).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("2020: 1550.00"));

        let summary = std::fs::read_to_string(out.join(SUMMARY_FILE)).unwrap();
        assert!(summary.contains("SLVR"));
        assert!(summary.contains("-50.00"));
    }
}

mod output_formatting {
    use super::*;
    use portval::domain::model::evaluate;

    #[test]
    fn series_table_lists_each_year() {
        let (_, valuation) = evaluate(&reference_config(), &reference_program());
        let table = cli::format_series_table(&valuation);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Year"));
        assert!(lines[6].starts_with("2020"));
        assert!(lines[6].contains("1550.00"));
    }

    #[test]
    fn classification_report_lists_rejections() {
        let program = reference_program().with_flag("piechart", true);
        let report = cli::format_classification(&classify(&program));
        assert!(report.contains("Directives: 10"));
        assert!(report.contains("Views: portfolio, bargraph, timeseries"));
        assert!(report.contains("Rejected: 1"));
        assert!(report.contains("piechart"));
    }

    #[test]
    fn classification_report_without_views() {
        let program = portval::domain::program::Program::new().with_amount("GOLD2016B", 1.0);
        let report = cli::format_classification(&classify(&program));
        assert!(report.contains("Views: (none)"));
        assert!(!report.contains("Rejected"));
    }
}
