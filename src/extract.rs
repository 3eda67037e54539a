//! Decodes the 9-coefficient solution into the distortion matrix and
//! hard-iron offset.

use crate::types::linalg::{CoefficientVector, DistortionMatrix, OffsetVector};
use crate::types::CalibrationParameters;

/// Reshapes β into (G, O). The off-diagonal entries of G reuse the same
/// coefficient on both sides of the diagonal, so G is symmetric by
/// construction rather than by numerical accident.
pub fn extract_parameters(beta: &CoefficientVector) -> CalibrationParameters {
    let distortion = DistortionMatrix::new(
        beta[0], beta[6], beta[7], //
        beta[6], beta[2], beta[8], //
        beta[7], beta[8], beta[4],
    );
    let offset = OffsetVector::new(beta[1], beta[3], beta[5]);
    CalibrationParameters { distortion, offset }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficient_layout() {
        let beta = CoefficientVector::from_column_slice(&[
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0,
        ]);
        let params = extract_parameters(&beta);
        let g = params.distortion;
        assert_eq!(g[(0, 0)], 1.0);
        assert_eq!(g[(1, 1)], 3.0);
        assert_eq!(g[(2, 2)], 5.0);
        assert_eq!(g[(0, 1)], 7.0);
        assert_eq!(g[(0, 2)], 8.0);
        assert_eq!(g[(1, 2)], 9.0);
        assert_eq!(params.offset, OffsetVector::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_distortion_is_exactly_symmetric() {
        let beta = CoefficientVector::from_column_slice(&[
            0.93, 4.1, 1.07, -2.2, 0.98, 3.3, 0.021, -0.017, 0.009,
        ]);
        let g = extract_parameters(&beta).distortion;
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(g[(i, j)], g[(j, i)]);
            }
        }
    }
}
