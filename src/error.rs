use thiserror::Error;

/// Calibration pipeline error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalibrationError {
    /// A raw record did not decompose into exactly 6 numeric fields.
    #[error("record {index} has {fields} fields, expected exactly 6 (accX, accY, accZ, magX, magY, magZ)")]
    InvalidRecord { index: usize, fields: usize },

    /// The normal matrix XᵀX is not invertible: too few measurements,
    /// or degenerate sensor excitation (e.g. identical orientations).
    #[error("normal matrix is singular ({measurements} measurements, 9 unknowns); supply more varied orientations")]
    SingularNormalMatrix { measurements: usize },
}

/// Result type for calibration operations
pub type CalibrationResult<T> = Result<T, CalibrationError>;
