//! Bullish scenario: synthesize and chart one upward-trending minute.

use minute_path_workspace::{CandleBounds, ChartStyle, PathSynthesizer};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("path_chart=debug".parse()?),
        )
        .init();

    println!("Minute Path: Bullish Scenario");
    println!("=============================\n");

    // open=1002, close=1003, high=1003.4, low=1001.8
    let bounds = CandleBounds::new(1002.0, 1003.0, 1003.4, 1001.8)?;
    println!(
        "Candle: open={} close={} high={} low={} ({})",
        bounds.open(),
        bounds.close(),
        bounds.high(),
        bounds.low(),
        bounds.direction()
    );

    let synthesizer = PathSynthesizer::default();
    let mut rng = rand::thread_rng();
    let path = synthesizer.synthesize(&bounds, &mut rng)?;

    println!(
        "\nSynthesized {} points: first={:.2} last={:.2} min={:.4} max={:.4}",
        path.len(),
        path.first().unwrap_or(f64::NAN),
        path.last().unwrap_or(f64::NAN),
        path.min_price(),
        path.max_price()
    );

    let output = Path::new("bullish_minute.png");
    let style = ChartStyle::default().with_caption("Bullish Minute (GBM-Interpolated)");
    minute_path_workspace::render_path_chart(&path, &bounds, output, &style)?;

    println!("\nChart written to {}", output.display());

    Ok(())
}
