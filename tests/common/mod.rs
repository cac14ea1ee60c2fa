#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};

use portval::domain::config::ValuationConfig;
use portval::domain::error::PortvalError;
use portval::domain::program::Program;
use portval::domain::selection::View;
use portval::ports::render_port::{RenderPort, RenderRequest};

/// Records what it was asked to render instead of drawing anything.
pub struct MockRenderPort {
    pub calls: RefCell<Vec<RenderedCall>>,
    pub fail_with: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RenderedCall {
    pub views: Vec<View>,
    pub years: Vec<i32>,
    pub values: Vec<f64>,
    pub instruments: Vec<String>,
    pub output_dir: PathBuf,
}

impl MockRenderPort {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }
}

impl RenderPort for MockRenderPort {
    fn render(
        &self,
        request: &RenderRequest<'_>,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, PortvalError> {
        if let Some(reason) = &self.fail_with {
            return Err(PortvalError::Render {
                reason: reason.clone(),
            });
        }
        self.calls.borrow_mut().push(RenderedCall {
            views: request.selection.iter().collect(),
            years: request.portfolio.iter().map(|p| p.year).collect(),
            values: request.portfolio.iter().map(|p| p.value).collect(),
            instruments: request.instruments.iter().map(|i| i.code.clone()).collect(),
            output_dir: output_dir.to_path_buf(),
        });
        Ok(Vec::new())
    }
}

/// The reference transaction program: three instruments over 2016-2020 with
/// every view requested.
pub fn reference_program() -> Program {
    Program::new()
        .with_amount("GOLD2016B", 40.0)
        .with_amount("GOLD2018S", 40.0)
        .with_amount("SLVR2016B", 100.0)
        .with_amount("SLVR2017B", 100.0)
        .with_amount("SLVR2020S", 150.0)
        .with_amount("TSLA2016B", 100.0)
        .with_amount("TSLA2017B", 100.0)
        .with_amount("TSLA2018B", 100.0)
        .with_amount("TSLA2019B", 100.0)
        .with_amount("TSLA2020S", 400.0)
        .with_flag("portfolio", true)
        .with_flag("bargraph", true)
        .with_flag("timeseries", true)
}

pub const REFERENCE_PROGRAM_JSON: &str = r#"{
    "GOLD2016B": 40,
    "GOLD2018S": 40,
    "SLVR2016B": 100,
    "SLVR2017B": 100,
    "SLVR2020S": 150,
    "TSLA2016B": 100,
    "TSLA2017B": 100,
    "TSLA2018B": 100,
    "TSLA2019B": 100,
    "TSLA2020S": 400,
    "portfolio": true,
    "bargraph": true,
    "timeseries": true
}"#;

pub fn reference_config() -> ValuationConfig {
    ValuationConfig {
        instruments: vec!["GOLD".to_string(), "SLVR".to_string(), "TSLA".to_string()],
        ..ValuationConfig::default()
    }
}

pub fn write_temp_file(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
