//! Linear algebra type system for the calibration fit
//!
//! Provides compile-time dimension checking and clean type aliases
//! for the least-squares pipeline.

use nalgebra::{DMatrix, DVector, Matrix3, SMatrix, SVector, Vector3};

// ===== Problem Dimensions =====
pub const RECORD_FIELDS: usize = 6; // (accX, accY, accZ, magX, magY, magZ)
pub const PARAM_DIM: usize = 9; // 6 distortion terms + 3 offset terms

/// Minimum observations for an invertible normal matrix (one per unknown).
pub const MIN_MEASUREMENTS: usize = PARAM_DIM;
/// Observation count recommended for decent conditioning.
pub const RECOMMENDED_MEASUREMENTS: usize = 12;

// ===== Fit Types =====
pub type DesignRow = [f64; PARAM_DIM];
pub type DesignMatrix = DMatrix<f64>; // N×9, N known at runtime
pub type TargetVector = DVector<f64>; // N×1, constant level
pub type CoefficientVector = SVector<f64, PARAM_DIM>;
pub type NormalMatrix = SMatrix<f64, PARAM_DIM, PARAM_DIM>;

// ===== Output Types =====
pub type DistortionMatrix = Matrix3<f64>;
pub type OffsetVector = Vector3<f64>;
