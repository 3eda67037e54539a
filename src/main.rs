use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;

use mag_calibrator_rs::report::format_report;
use mag_calibrator_rs::Calibrator;

#[derive(Parser, Debug)]
#[command(name = "mag_calibrator")]
#[command(about = "Magnetometer soft/hard-iron calibration (ICalibration method)", long_about = None)]
struct Args {
    /// Input file: one sample per line, 6 columns
    /// (accX accY accZ magX magY magZ), comma or whitespace separated
    input: PathBuf,

    /// True local total magnetic field magnitude (e.g. from the NOAA
    /// geomagnetic calculator), in the same unit as the magnetometer
    #[arg(long)]
    total_field: f64,

    /// Local magnetic inclination (dip angle) in degrees
    #[arg(long)]
    inclination: f64,

    /// Emit parameters as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

/// Parses one line into its numeric fields. Field-count validation is left
/// to the calibration pipeline so short or long rows surface as a typed
/// error with the offending record index.
fn parse_line(line: &str, line_no: usize) -> Result<Vec<f64>> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|field| {
            field
                .parse::<f64>()
                .with_context(|| format!("line {}: invalid number {:?}", line_no, field))
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let records: Vec<Vec<f64>> = raw
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .map(|(i, line)| parse_line(line, i + 1))
        .collect::<Result<_>>()?;

    println!("Loaded {} samples from {}", records.len(), args.input.display());

    let calibrator = Calibrator::new(args.total_field, args.inclination);
    let params = calibrator.calibrate(&records)?;

    if args.json {
        let (distortion, offset) = params.to_arrays();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "distortion_row_major": distortion,
                "offset": offset,
            }))?
        );
    } else {
        println!();
        print!("{}", format_report(&params));
    }
    Ok(())
}
