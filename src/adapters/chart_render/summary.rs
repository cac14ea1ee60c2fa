//! Plain-text portfolio summary.

use std::fmt::Write;

use crate::ports::render_port::RenderRequest;

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_summary(request: &RenderRequest<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Portfolio Summary");
    let _ = writeln!(out, "=================");
    let _ = writeln!(out);

    if request.portfolio.is_empty() {
        let _ = writeln!(out, "No portfolio data available.");
        return out;
    }

    let _ = writeln!(out, "{:<6} {:>14} {:>14}", "Year", "Value", "Profit/Loss");
    for point in &request.portfolio {
        let profit_loss = request
            .profit_loss
            .iter()
            .find(|p| p.year == point.year)
            .map(|p| p.value)
            .unwrap_or(0.0);
        let _ = writeln!(
            out,
            "{:<6} {:>14} {:>14}",
            point.year,
            money(point.value),
            money(profit_loss)
        );
    }

    if !request.instruments.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Instrument transactions (sell +, buy -)");
        let mut header = format!("{:<6}", "Code");
        let years = request
            .instruments
            .iter()
            .map(|i| i.yearly.len())
            .max()
            .unwrap_or(0);
        for offset in 0..years {
            let _ = write!(header, " {:>10}", request.first_year + offset as i32);
        }
        let _ = write!(header, " {:>10}", "Total");
        let _ = writeln!(out, "{}", header);

        for instrument in &request.instruments {
            let mut row = format!("{:<6}", instrument.code);
            for amount in &instrument.yearly {
                let _ = write!(row, " {:>10}", money(*amount));
            }
            let _ = write!(row, " {:>10}", money(instrument.total));
            let _ = writeln!(out, "{}", row);
        }
    }

    out
}
