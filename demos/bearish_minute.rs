//! Bearish scenario: synthesize and chart one downward-trending minute.

use minute_path_workspace::{CandleBounds, ChartStyle, PathSynthesizer};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("path_chart=debug".parse()?),
        )
        .init();

    println!("Minute Path: Bearish Scenario");
    println!("=============================\n");

    // open=1001, close=1000.5, high=1001.2, low=1000.3
    let bounds = CandleBounds::new(1001.0, 1000.5, 1001.2, 1000.3)?;
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

    let output = Path::new("bearish_minute.png");
    let style = ChartStyle::default().with_caption("Bearish Minute (GBM-Interpolated)");
    minute_path_workspace::render_path_chart(&path, &bounds, output, &style)?;

    println!("\nChart written to {}", output.display());

    Ok(())
}
