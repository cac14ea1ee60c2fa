//! CSV export of the computed series.

use std::path::Path;

use serde::Serialize;

use crate::domain::error::PortvalError;
use crate::domain::valuation::{PortfolioSeries, ProfitLossSeries};

#[derive(Debug, Serialize)]
struct SeriesRow {
    year: i32,
    portfolio_value: f64,
    profit_loss: f64,
}

fn csv_error(e: csv::Error) -> PortvalError {
    match e.into_kind() {
        csv::ErrorKind::Io(io) => PortvalError::Io(io),
        other => PortvalError::Render {
            reason: format!("CSV write error: {:?}", other),
        },
    }
}

pub fn write_series<W: std::io::Write>(
    writer: W,
    portfolio: &PortfolioSeries,
    profit_loss: &ProfitLossSeries,
) -> Result<(), PortvalError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in portfolio.points() {
        wtr.serialize(SeriesRow {
            year: point.year,
            portfolio_value: point.value,
            profit_loss: profit_loss.get(point.year).unwrap_or(0.0),
        })
        .map_err(csv_error)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_series_file(
    path: &Path,
    portfolio: &PortfolioSeries,
    profit_loss: &ProfitLossSeries,
) -> Result<(), PortvalError> {
    let file = std::fs::File::create(path)?;
    write_series(file, portfolio, profit_loss)
}
