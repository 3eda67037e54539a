//! Measurement ingestion: raw 6-field records into per-axis sequences.

use crate::error::{CalibrationError, CalibrationResult};
use crate::types::linalg::RECORD_FIELDS;
use crate::types::{Measurement, MeasurementSet};

/// Splits raw records into six parallel per-axis sequences, preserving
/// arrival order. Field order is (accX, accY, accZ, magX, magY, magZ).
///
/// Fails on the first record that does not carry exactly 6 fields; no
/// partial set is returned. Range and NaN checks are out of scope here.
pub fn ingest<R: AsRef<[f64]>>(records: &[R]) -> CalibrationResult<MeasurementSet> {
    let mut set = MeasurementSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let fields = record.as_ref();
        if fields.len() != RECORD_FIELDS {
            return Err(CalibrationError::InvalidRecord {
                index,
                fields: fields.len(),
            });
        }
        set.push(Measurement::new(
            fields[0], fields[1], fields[2], fields[3], fields[4], fields[5],
        ));
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_splits_axes_in_order() {
        let records = [
            [0.1, 0.2, 0.3, 10.0, 20.0, 30.0],
            [0.4, 0.5, 0.6, 40.0, 50.0, 60.0],
        ];
        let set = ingest(&records).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.acc_x, vec![0.1, 0.4]);
        assert_eq!(set.acc_y, vec![0.2, 0.5]);
        assert_eq!(set.acc_z, vec![0.3, 0.6]);
        assert_eq!(set.mag_x, vec![10.0, 40.0]);
        assert_eq!(set.mag_y, vec![20.0, 50.0]);
        assert_eq!(set.mag_z, vec![30.0, 60.0]);
    }

    #[test]
    fn test_ingest_rejects_short_record() {
        let records = vec![
            vec![0.1, 0.2, 0.3, 10.0, 20.0, 30.0],
            vec![0.4, 0.5, 0.6, 40.0, 50.0],
        ];
        let err = ingest(&records).unwrap_err();
        assert_eq!(err, CalibrationError::InvalidRecord { index: 1, fields: 5 });
    }

    #[test]
    fn test_ingest_rejects_long_record() {
        let records = vec![vec![0.1, 0.2, 0.3, 10.0, 20.0, 30.0, 99.0]];
        let err = ingest(&records).unwrap_err();
        assert_eq!(err, CalibrationError::InvalidRecord { index: 0, fields: 7 });
    }

    #[test]
    fn test_ingest_empty_input() {
        let records: Vec<Vec<f64>> = Vec::new();
        let set = ingest(&records).unwrap();
        assert!(set.is_empty());
    }
}
