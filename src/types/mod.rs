pub mod linalg;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use self::linalg::{DistortionMatrix, OffsetVector};

/// One observation instant: calibrated accelerometer axes paired with raw
/// magnetometer axes, in the fixed record order
/// (accX, accY, accZ, magX, magY, magZ).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub acc_x: f64,
    pub acc_y: f64,
    pub acc_z: f64,
    pub mag_x: f64,
    pub mag_y: f64,
    pub mag_z: f64,
}

impl Measurement {
    pub fn new(acc_x: f64, acc_y: f64, acc_z: f64, mag_x: f64, mag_y: f64, mag_z: f64) -> Self {
        Self {
            acc_x,
            acc_y,
            acc_z,
            mag_x,
            mag_y,
            mag_z,
        }
    }

    pub fn acc(&self) -> Vector3<f64> {
        Vector3::new(self.acc_x, self.acc_y, self.acc_z)
    }

    pub fn mag(&self) -> Vector3<f64> {
        Vector3::new(self.mag_x, self.mag_y, self.mag_z)
    }
}

/// A batch of measurements split into six parallel per-axis columns,
/// preserving arrival order.
#[derive(Clone, Debug, Default)]
pub struct MeasurementSet {
    pub acc_x: Vec<f64>,
    pub acc_y: Vec<f64>,
    pub acc_z: Vec<f64>,
    pub mag_x: Vec<f64>,
    pub mag_y: Vec<f64>,
    pub mag_z: Vec<f64>,
}

impl MeasurementSet {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            acc_x: Vec::with_capacity(n),
            acc_y: Vec::with_capacity(n),
            acc_z: Vec::with_capacity(n),
            mag_x: Vec::with_capacity(n),
            mag_y: Vec::with_capacity(n),
            mag_z: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, m: Measurement) {
        self.acc_x.push(m.acc_x);
        self.acc_y.push(m.acc_y);
        self.acc_z.push(m.acc_z);
        self.mag_x.push(m.mag_x);
        self.mag_y.push(m.mag_y);
        self.mag_z.push(m.mag_z);
    }

    pub fn len(&self) -> usize {
        self.acc_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acc_x.is_empty()
    }
}

/// Result of a calibration run: the affine model
/// `mag_calibrated = G * mag_measured + O`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationParameters {
    /// Soft-iron distortion matrix G, symmetric by construction.
    pub distortion: DistortionMatrix,
    /// Hard-iron offset vector O.
    pub offset: OffsetVector,
}

impl CalibrationParameters {
    /// Applies the calibration to a raw magnetometer reading.
    pub fn apply(&self, mag_measured: Vector3<f64>) -> Vector3<f64> {
        self.distortion * mag_measured + self.offset
    }

    /// Exports the parameters as flat arrays suitable for serialization or
    /// firmware configuration: distortion in row-major order, then offset.
    pub fn to_arrays(&self) -> ([f64; 9], [f64; 3]) {
        let g = &self.distortion;
        let distortion = [
            g[(0, 0)],
            g[(0, 1)],
            g[(0, 2)],
            g[(1, 0)],
            g[(1, 1)],
            g[(1, 2)],
            g[(2, 0)],
            g[(2, 1)],
            g[(2, 2)],
        ];
        let offset = [self.offset.x, self.offset.y, self.offset.z];
        (distortion, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Matrix3;

    #[test]
    fn test_measurement_axis_views() {
        let m = Measurement::new(0.1, 0.2, 0.3, 10.0, 20.0, 30.0);
        assert_eq!(m.acc(), Vector3::new(0.1, 0.2, 0.3));
        assert_eq!(m.mag(), Vector3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_measurement_set_preserves_order() {
        let mut set = MeasurementSet::with_capacity(2);
        set.push(Measurement::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
        set.push(Measurement::new(7.0, 8.0, 9.0, 10.0, 11.0, 12.0));
        assert_eq!(set.len(), 2);
        assert_eq!(set.acc_x, vec![1.0, 7.0]);
        assert_eq!(set.mag_z, vec![6.0, 12.0]);
    }

    #[test]
    fn test_apply_identity_model() {
        let params = CalibrationParameters {
            distortion: Matrix3::identity(),
            offset: Vector3::new(1.0, -2.0, 3.0),
        };
        let out = params.apply(Vector3::new(10.0, 10.0, 10.0));
        assert_eq!(out, Vector3::new(11.0, 8.0, 13.0));
    }

    #[test]
    fn test_to_arrays_row_major() {
        let params = CalibrationParameters {
            distortion: Matrix3::new(1.0, 2.0, 3.0, 2.0, 5.0, 6.0, 3.0, 6.0, 9.0),
            offset: Vector3::new(-1.0, -2.0, -3.0),
        };
        let (g, o) = params.to_arrays();
        assert_eq!(g, [1.0, 2.0, 3.0, 2.0, 5.0, 6.0, 3.0, 6.0, 9.0]);
        assert_eq!(o, [-1.0, -2.0, -3.0]);
    }
}
