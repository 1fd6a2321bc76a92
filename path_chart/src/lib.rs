//! # Path Chart
//!
//! `path_chart` renders synthesized intra-minute price paths as PNG charts.
//!
//! The chart plots the path as a connected line with point markers over
//! integer timestep indices, draws horizontal reference lines at the
//! candle's high, low, open and close, and fixes the y viewport just beyond
//! the candle range. The default style mirrors a dark-background terminal
//! chart: white price line, green high line, red low line.

use path_synth::{CandleBounds, PricePath};
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Custom error types for chart rendering
#[derive(Debug, Error)]
pub enum ChartError {
    /// Error from path data that cannot be charted
    #[error("Invalid path data: {0}")]
    InvalidPath(String),

    /// Error from the plotting backend
    #[error("Chart rendering error: {0}")]
    Render(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ChartError>;

/// Chart dimensions and colors
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
    /// Chart caption
    pub caption: String,
    /// Canvas background color
    pub background: RGBColor,
    /// Price line and marker color
    pub path_color: RGBColor,
    /// High reference line color
    pub high_color: RGBColor,
    /// Low reference line color
    pub low_color: RGBColor,
    /// Open/close reference line color
    pub bound_color: RGBColor,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            caption: "GBM-Interpolated Intra-Minute Price Path".to_string(),
            background: RGBColor(18, 18, 18),
            path_color: RGBColor(255, 255, 255),
            high_color: RGBColor(144, 238, 144),
            low_color: RGBColor(255, 99, 71),
            bound_color: RGBColor(170, 170, 170),
        }
    }
}

impl ChartStyle {
    /// Style with custom dimensions and the default dark theme
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Replace the chart caption
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }
}

/// Render a price path chart to a PNG file.
///
/// Draws the path as a line with circular markers, horizontal reference
/// lines at high, low, open and close, and a legend. The y viewport is
/// fixed to `[low - 0.1, high + 0.1]`.
pub fn render_path_chart(
    path: &PricePath,
    bounds: &CandleBounds,
    output: &Path,
    style: &ChartStyle,
) -> Result<()> {
    if path.len() < 2 {
        return Err(ChartError::InvalidPath(format!(
            "need at least 2 points to draw a path, got {}",
            path.len()
        )));
    }

    if path.values().iter().any(|p| !p.is_finite()) {
        return Err(ChartError::InvalidPath(
            "path contains non-finite values".to_string(),
        ));
    }

    debug!(
        points = path.len(),
        output = %output.display(),
        "rendering price path chart"
    );

    let last_index = path.len() - 1;
    let y_min = bounds.low() - 0.1;
    let y_max = bounds.high() + 0.1;

    let path_color = style.path_color;
    let high_color = style.high_color;
    let low_color = style.low_color;
    let bound_color = style.bound_color;
    let text_color = style.path_color;

    let root = BitMapBackend::new(output, (style.width, style.height)).into_drawing_area();
    root.fill(&style.background)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            &style.caption,
            ("sans-serif", 30.0).into_font().color(&text_color),
        )
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0usize..last_index, y_min..y_max)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Time (seconds)")
        .y_desc("Price")
        .axis_style(&bound_color)
        .label_style(("sans-serif", 15).into_font().color(&text_color))
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    // Price line with markers
    chart
        .draw_series(LineSeries::new(
            path.values().iter().copied().enumerate(),
            &path_color,
        ))
        .map_err(|e| ChartError::Render(e.to_string()))?
        .label("Simulated Price")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], path_color));

    chart
        .draw_series(
            path.values()
                .iter()
                .enumerate()
                .map(|(i, &p)| Circle::new((i, p), 3, path_color.filled())),
        )
        .map_err(|e| ChartError::Render(e.to_string()))?;

    // Horizontal reference lines at the four candle bounds
    let reference_lines = [
        ("high", bounds.high(), high_color),
        ("low", bounds.low(), low_color),
        ("open", bounds.open(), bound_color),
        ("close", bounds.close(), bound_color),
    ];

    for (name, level, color) in reference_lines {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0, level), (last_index, level)],
                color,
            )))
            .map_err(|e| ChartError::Render(e.to_string()))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    let legend_background = style.background.mix(0.8);
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&legend_background)
        .border_style(&bound_color)
        .label_font(("sans-serif", 14).into_font().color(&text_color))
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    debug!(output = %output.display(), "chart written");

    Ok(())
}
