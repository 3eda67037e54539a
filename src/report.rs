//! Console report for calibration output. Presentation only; nothing here
//! feeds back into the pipeline.

use std::fmt;

use crate::types::CalibrationParameters;

impl fmt::Display for CalibrationParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = &self.distortion;
        writeln!(f, "DISTORTION G:")?;
        for i in 0..3 {
            writeln!(
                f,
                "  [{:>12.6} {:>12.6} {:>12.6}]",
                g[(i, 0)],
                g[(i, 1)],
                g[(i, 2)]
            )?;
        }
        writeln!(f, "OFFSET O:")?;
        writeln!(
            f,
            "  [{:>12.6} {:>12.6} {:>12.6}]",
            self.offset.x, self.offset.y, self.offset.z
        )
    }
}

/// Full report block in the style of the original ICalibration tooling.
pub fn format_report(params: &CalibrationParameters) -> String {
    format!(
        "CALIBRATION PARAMETERS - ICalibration\n\n{}\nFOR CALIBRATION:\nmag_calibrated = G * mag_measured + O\n",
        params
    )
}
