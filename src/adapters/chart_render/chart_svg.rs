//! SVG chart rendering for the portfolio series.

use crate::domain::valuation::YearValue;

pub const CHART_WIDTH: f64 = 500.0;
pub const CHART_HEIGHT: f64 = 300.0;
const PADDING: f64 = 50.0;

pub const EMPTY_SERIES_TEXT: &str = "No portfolio data available.";

/// Vertical scale shared by both chart kinds. Always includes zero so bars
/// have a baseline.
struct Scale {
    min: f64,
    max: f64,
}

impl Scale {
    fn for_points(points: &[YearValue]) -> Self {
        let min = points.iter().map(|p| p.value).fold(0.0, f64::min);
        let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
        Scale { min, max }
    }

    fn plot_height() -> f64 {
        CHART_HEIGHT - 2.0 * PADDING
    }

    fn y(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        let scale_y = if range > 0.0 {
            Self::plot_height() / range
        } else {
            1.0
        };
        CHART_HEIGHT - PADDING - (value - self.min) * scale_y
    }
}

fn placeholder(title: &str) -> String {
    format!(
        r#"<g><text x="{:.0}" y="20" text-anchor="middle" font-size="14">{}</text><text x="{:.0}" y="{:.0}" text-anchor="middle" font-size="12">{}</text></g>"#,
        CHART_WIDTH / 2.0,
        title,
        CHART_WIDTH / 2.0,
        CHART_HEIGHT / 2.0,
        EMPTY_SERIES_TEXT
    )
}

fn axes(scale: &Scale, points: &[YearValue], x_of: impl Fn(usize) -> f64) -> String {
    let plot_width = CHART_WIDTH - 2.0 * PADDING;
    let mut out = format!(
        r##"<line x1="{p:.0}" y1="{p:.0}" x2="{p:.0}" y2="{b:.0}" stroke="#333"/><line x1="{p:.0}" y1="{b:.0}" x2="{r:.0}" y2="{b:.0}" stroke="#333"/>"##,
        p = PADDING,
        b = CHART_HEIGHT - PADDING,
        r = PADDING + plot_width,
    );
    out.push_str(&format!(
        r#"<text x="{:.0}" y="{:.1}" text-anchor="end" font-size="10">{:.0}</text>"#,
        PADDING - 4.0,
        scale.y(scale.max),
        scale.max
    ));
    out.push_str(&format!(
        r#"<text x="{:.0}" y="{:.1}" text-anchor="end" font-size="10">{:.0}</text>"#,
        PADDING - 4.0,
        scale.y(scale.min),
        scale.min
    ));
    for (i, point) in points.iter().enumerate() {
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.0}" text-anchor="middle" font-size="10">{}</text>"#,
            x_of(i),
            CHART_HEIGHT - PADDING + 15.0,
            point.year
        ));
    }
    out.push_str(&format!(
        r#"<text x="{:.0}" y="{:.0}" text-anchor="middle" font-size="11">Years</text>"#,
        CHART_WIDTH / 2.0,
        CHART_HEIGHT - 10.0
    ));
    out.push_str(&format!(
        r#"<text x="12" y="{:.0}" text-anchor="middle" font-size="11" transform="rotate(-90 12 {:.0})">Total Investment ($)</text>"#,
        CHART_HEIGHT / 2.0,
        CHART_HEIGHT / 2.0
    ));
    out
}

/// Bar chart group, one bar per year.
pub fn bar_chart(points: &[YearValue]) -> String {
    let title = "Bar Graph (Total Investment ($) per Year)";
    if points.is_empty() {
        return placeholder(title);
    }

    let scale = Scale::for_points(points);
    let plot_width = CHART_WIDTH - 2.0 * PADDING;
    let slot = plot_width / points.len() as f64;
    let bar_width = slot * 0.6;
    let x_of = |i: usize| PADDING + slot * (i as f64 + 0.5);
    let baseline = scale.y(0.0);

    let bars: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let top = scale.y(point.value);
            let (y, height) = if top <= baseline {
                (top, baseline - top)
            } else {
                (baseline, top - baseline)
            };
            format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="orange"><title>{}: {:.2}</title></rect>"#,
                x_of(i) - bar_width / 2.0,
                y,
                bar_width,
                height,
                point.year,
                point.value
            )
        })
        .collect();

    format!(
        r#"<g><text x="{:.0}" y="20" text-anchor="middle" font-size="14">{}</text>{}{}</g>"#,
        CHART_WIDTH / 2.0,
        title,
        axes(&scale, points, x_of),
        bars.join("")
    )
}

/// Line chart group with a marker per year.
pub fn time_series_chart(points: &[YearValue]) -> String {
    let title = "Time Series (Total Investment ($) vs Years)";
    if points.is_empty() {
        return placeholder(title);
    }

    let scale = Scale::for_points(points);
    let plot_width = CHART_WIDTH - 2.0 * PADDING;
    let scale_x = if points.len() > 1 {
        plot_width / (points.len() - 1) as f64
    } else {
        0.0
    };
    let x_of = |i: usize| PADDING + i as f64 * scale_x;

    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, point)| (x_of(i), scale.y(point.value)))
        .collect();
    let polyline_points: Vec<String> = coords
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect();
    let markers: Vec<String> = coords
        .iter()
        .map(|(x, y)| format!(r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="steelblue"/>"#, x, y))
        .collect();

    format!(
        r#"<g><text x="{:.0}" y="20" text-anchor="middle" font-size="14">{}</text>{}<polyline fill="none" stroke="steelblue" stroke-width="2" points="{}"/>{}</g>"#,
        CHART_WIDTH / 2.0,
        title,
        axes(&scale, points, x_of),
        polyline_points.join(" "),
        markers.join("")
    )
}

/// Wrap chart groups into one SVG document, laid out left to right.
pub fn svg_document(panels: &[String]) -> String {
    let width = CHART_WIDTH * panels.len().max(1) as f64;
    let body: Vec<String> = panels
        .iter()
        .enumerate()
        .map(|(i, panel)| {
            format!(
                r#"<g transform="translate({:.0},0)">{}</g>"#,
                CHART_WIDTH * i as f64,
                panel
            )
        })
        .collect();
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}"><rect width="100%" height="100%" fill="white"/>{}</svg>
"#,
        width,
        CHART_HEIGHT,
        width,
        CHART_HEIGHT,
        body.join("")
    )
}
