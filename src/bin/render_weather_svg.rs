//! Renders a weather dataset to a standalone SVG document.
//!
//! Usage: `render_weather_svg <dataset.json> [output.svg]`
//! With no output path the document is written to stdout.

use std::env;
use std::fs;
use std::process::ExitCode;

use plotbind::api::{Chart, ChartConfig, load_records};
use plotbind::core::Viewport;
use plotbind::error::ChartResult;
use plotbind::render::SvgRenderer;

fn main() -> ExitCode {
    let _ = plotbind::telemetry::init_default_tracing();

    let mut args = env::args().skip(1);
    let Some(dataset_path) = args.next() else {
        eprintln!("usage: render_weather_svg <dataset.json> [output.svg]");
        return ExitCode::from(2);
    };
    let output_path = args.next();

    match run(&dataset_path) {
        Ok(document) => match output_path {
            Some(path) => {
                if let Err(error) = fs::write(&path, document) {
                    eprintln!("failed to write `{path}`: {error}");
                    return ExitCode::FAILURE;
                }
                ExitCode::SUCCESS
            }
            None => {
                print!("{document}");
                ExitCode::SUCCESS
            }
        },
        Err(error) => {
            eprintln!("render failed: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(dataset_path: &str) -> ChartResult<String> {
    let records = load_records(dataset_path)?;
    let mut chart = Chart::new(Viewport::new(800, 800), ChartConfig::default())?;
    chart.set_data(records)?;
    let frame = chart.render()?;
    SvgRenderer::render_to_string(&frame)
}
