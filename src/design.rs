//! Design matrix construction for the ICalibration least-squares fit.
//!
//! Each measurement contributes one 9-feature row expanding the bilinear
//! model `acc·G·mag + acc·O` into a form that is linear in the unknown
//! distortion and offset parameters.

use crate::types::linalg::{DesignMatrix, DesignRow, PARAM_DIM};
use crate::types::MeasurementSet;

/// Feature row for one measurement. Column order matches the coefficient
/// layout decoded in `extract`:
/// `[G00, O0, G11, O1, G22, O2, G01, G02, G12]`.
pub fn design_row(ax: f64, ay: f64, az: f64, mx: f64, my: f64, mz: f64) -> DesignRow {
    [
        ax * mx,
        ax,
        ay * my,
        ay,
        az * mz,
        az,
        ax * my + ay * mx,
        ax * mz + az * mx,
        ay * mz + az * my,
    ]
}

/// Stacks one design row per measurement into the N×9 design matrix.
pub fn build_design_matrix(set: &MeasurementSet) -> DesignMatrix {
    let mut x = DesignMatrix::zeros(set.len(), PARAM_DIM);
    for i in 0..set.len() {
        let row = design_row(
            set.acc_x[i],
            set.acc_y[i],
            set.acc_z[i],
            set.mag_x[i],
            set.mag_y[i],
            set.mag_z[i],
        );
        x.row_mut(i).copy_from_slice(&row);
    }
    x
}
