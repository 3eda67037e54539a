//! Calibration pipeline entry point.

use log::debug;

use crate::design::build_design_matrix;
use crate::error::CalibrationResult;
use crate::extract::extract_parameters;
use crate::ingestion::ingest;
use crate::solver::solve;
use crate::types::CalibrationParameters;

/// Runs the ICalibration pipeline: ingestion → design matrix →
/// normal-equation solve → parameter extraction. A single forward pass;
/// a failed stage aborts the run with no partial output.
///
/// Construction takes the two site constants: the true total field
/// magnitude and the magnetic inclination (dip angle) in degrees. Local
/// values come from the NOAA geomagnetic calculator
/// (<https://www.ngdc.noaa.gov/geomag/calculators/magcalc.shtml>).
#[derive(Clone, Copy, Debug)]
pub struct Calibrator {
    total_magnetic_field: f64,
    inclination: f64, // radians
}

impl Calibrator {
    pub fn new(total_magnetic_field: f64, inclination_degree: f64) -> Self {
        Self {
            total_magnetic_field,
            inclination: inclination_degree.to_radians(),
        }
    }

    /// The constant right-hand side of the fit: the vertical component of
    /// the local field, `B · cos(π/2 − inclination)`. The published form
    /// is kept as written; the dip-angle sign convention of the method
    /// depends on it.
    pub fn target_level(&self) -> f64 {
        self.total_magnetic_field * (std::f64::consts::FRAC_PI_2 - self.inclination).cos()
    }

    /// Computes (G, O) from raw 6-field records. Each run is independent:
    /// no state accumulates across calls.
    pub fn calibrate<R: AsRef<[f64]>>(
        &self,
        records: &[R],
    ) -> CalibrationResult<CalibrationParameters> {
        let set = ingest(records)?;
        debug!("ingested {} measurements", set.len());
        let x = build_design_matrix(&set);
        let beta = solve(&x, self.target_level())?;
        Ok(extract_parameters(&beta))
    }
}
