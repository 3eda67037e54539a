//! Magnetometer soft-iron / hard-iron calibration via the ICalibration
//! linear least-squares method (Yu, Ye, Guo, Su — IEEE Sensors Journal
//! 2020, DOI 10.1109/JSEN.2020.2995876).
//!
//! The method exploits the geometric link between the gravity direction
//! and the magnetic dip angle: for every orientation, the calibrated
//! field projected onto gravity equals `B · cos(π/2 − inclination)`.
//! Fitting that constraint over a batch of paired accelerometer /
//! magnetometer samples yields a symmetric 3×3 distortion matrix G and
//! a hard-iron offset O such that
//! `mag_calibrated = G * mag_measured + O`.
//!
//! Entry point is [`Calibrator`]; the stages (ingestion, design matrix,
//! solver, extraction) are exposed as standalone modules so each is
//! independently testable.

pub mod calibrator;
pub mod design;
pub mod error;
pub mod extract;
pub mod ingestion;
pub mod report;
pub mod solver;
pub mod types;

pub use calibrator::Calibrator;
pub use error::{CalibrationError, CalibrationResult};
pub use types::{CalibrationParameters, Measurement, MeasurementSet};
