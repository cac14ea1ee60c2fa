//! Chart rendering adapter implementing RenderPort.
//!
//! Writes SVG charts and a text summary for whichever views were selected.
//! When both the bar graph and the time series are requested they share one
//! SVG, side by side.

pub mod chart_svg;
pub mod summary;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::error::PortvalError;
use crate::domain::selection::View;
use crate::ports::render_port::{RenderPort, RenderRequest};

pub const COMBINED_FILE: &str = "charts.svg";
pub const BAR_GRAPH_FILE: &str = "bar_graph.svg";
pub const TIME_SERIES_FILE: &str = "time_series.svg";
pub const SUMMARY_FILE: &str = "portfolio_summary.txt";

pub struct ChartRenderAdapter;

impl ChartRenderAdapter {
    pub fn new() -> Self {
        Self
    }

    fn write(path: PathBuf, content: &str) -> Result<PathBuf, PortvalError> {
        fs::write(&path, content).map_err(|e| PortvalError::Render {
            reason: format!("failed to write {}: {}", path.display(), e),
        })?;
        info!(path = %path.display(), "wrote view");
        Ok(path)
    }
}

impl Default for ChartRenderAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPort for ChartRenderAdapter {
    fn render(
        &self,
        request: &RenderRequest<'_>,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, PortvalError> {
        let selection = request.selection;
        if selection.is_empty() {
            return Ok(Vec::new());
        }

        fs::create_dir_all(output_dir).map_err(|e| PortvalError::Render {
            reason: format!("failed to create {}: {}", output_dir.display(), e),
        })?;

        let mut written = Vec::new();

        if selection.contains(View::Portfolio) {
            written.push(Self::write(
                output_dir.join(SUMMARY_FILE),
                &summary::format_summary(request),
            )?);
        }

        let bar = selection.contains(View::BarGraph);
        let series = selection.contains(View::TimeSeries);
        let chart = match (bar, series) {
            (true, true) => Some((
                COMBINED_FILE,
                vec![
                    chart_svg::bar_chart(&request.portfolio),
                    chart_svg::time_series_chart(&request.portfolio),
                ],
            )),
            (true, false) => Some((
                BAR_GRAPH_FILE,
                vec![chart_svg::bar_chart(&request.portfolio)],
            )),
            (false, true) => Some((
                TIME_SERIES_FILE,
                vec![chart_svg::time_series_chart(&request.portfolio)],
            )),
            (false, false) => None,
        };

        if let Some((file_name, panels)) = chart {
            written.push(Self::write(
                output_dir.join(file_name),
                &chart_svg::svg_document(&panels),
            )?);
        }

        Ok(written)
    }
}
