//! Ordinary least-squares solve of the calibration normal equations.

use log::debug;
use nalgebra::Cholesky;

use crate::error::{CalibrationError, CalibrationResult};
use crate::types::linalg::{
    CoefficientVector, DesignMatrix, TargetVector, MIN_MEASUREMENTS, PARAM_DIM,
};

/// Solves `XᵀX β = Xᵀ·target` where every target entry is the constant
/// level `L`. The solve goes through a Cholesky factorization of XᵀX
/// instead of a literal inverse; the result is numerically equivalent and
/// singularity surfaces as an explicit error instead of NaN coefficients.
pub fn solve(x: &DesignMatrix, target_level: f64) -> CalibrationResult<CoefficientVector> {
    let n = x.nrows();
    if n < MIN_MEASUREMENTS {
        return Err(CalibrationError::SingularNormalMatrix { measurements: n });
    }

    let target = TargetVector::from_element(n, target_level);
    let xt = x.transpose();
    let normal = &xt * x;
    let rhs = &xt * &target;

    // Cholesky fails exactly when XᵀX is not positive definite, which is
    // the singular / degenerate-excitation case.
    let factorization = Cholesky::new(normal)
        .ok_or(CalibrationError::SingularNormalMatrix { measurements: n })?;
    let beta = factorization.solve(&rhs);

    debug!(
        "solved {}x{} normal system at target level {}",
        n, PARAM_DIM, target_level
    );
    Ok(CoefficientVector::from_column_slice(beta.as_slice()))
}
