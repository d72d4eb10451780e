//! File-backed reading store
//!
//! Append-only from the caller's point of view: records are never edited
//! or deleted once written. Internally each append is a whole-file
//! read-modify-write of a pretty-printed JSON array, rewritten through a
//! sibling temp file and rename so a crash mid-write cannot truncate
//! existing history.
//!
//! There is no locking and no optimistic-concurrency check: the store
//! assumes a single process and a single thread. Concurrent writers would
//! need file locking or a true append-only log plus index, both out of
//! scope.
//!
//! Corruption handling: a missing, empty, or malformed backing file is
//! recovered as an empty history and logged at warn level. Only genuine
//! filesystem failures (permissions, disk full) surface as errors.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::errors::{StoreError, StoreResult};
use crate::reading::{Reading, Statistics};
use crate::registry::SENSOR_COUNT;

/// Durable holder of the full reading history, bound to one backing file
#[derive(Debug, Clone)]
pub struct ReadingStore {
    path: PathBuf,
}

impl ReadingStore {
    /// Bind a store to its backing file. The file is created on first
    /// append; nothing is touched here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate and persist one reading at the end of the history.
    ///
    /// Fails with [`StoreError::Validation`] naming the offending field
    /// before anything is written, and with [`StoreError::Io`] on
    /// filesystem trouble. Malformed existing content is discarded with a
    /// warning and the reading starts a fresh history.
    pub fn append(&self, reading: &Reading) -> StoreResult<()> {
        validate(reading)?;

        let mut readings = self.load_all()?;
        readings.push(reading.clone());
        self.rewrite(&readings)?;

        debug!(
            "appended reading for sensor {} to {} ({} total)",
            reading.sensor_id,
            self.path.display(),
            readings.len()
        );
        Ok(())
    }

    /// Load the full history in insertion order.
    ///
    /// A missing file or malformed content yields an empty vec, never an
    /// error; the malformed case is logged at warn level.
    pub fn load_all(&self) -> StoreResult<Vec<Reading>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no backing file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<Reading>>(&raw) {
            Ok(readings) => Ok(readings),
            Err(err) => {
                warn!(
                    "discarding malformed content in {}: {}",
                    self.path.display(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    /// Ordered subsequence of the history belonging to one sensor.
    pub fn for_sensor(&self, id: u32) -> StoreResult<Vec<Reading>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|reading| reading.sensor_id == id)
            .collect())
    }

    /// Statistics over the readings of one sensor; all zeros when it has
    /// none.
    pub fn statistics(&self, id: u32) -> StoreResult<Statistics> {
        let values: Vec<f64> = self
            .for_sensor(id)?
            .iter()
            .map(|reading| reading.value)
            .collect();
        Ok(Statistics::from_values(&values))
    }

    fn rewrite(&self, readings: &[Reading]) -> StoreResult<()> {
        let body = serde_json::to_string_pretty(readings)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Reject records that must never reach the file.
///
/// The typed `Reading` already guarantees all four fields are present;
/// what remains checkable is the registry range of `sensor_id` and that
/// `value` is an actual number.
fn validate(reading: &Reading) -> StoreResult<()> {
    if reading.sensor_id == 0 || reading.sensor_id as usize > SENSOR_COUNT {
        return Err(StoreError::Validation { field: "sensor_id" });
    }
    if !reading.value.is_finite() {
        return Err(StoreError::Validation { field: "value" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::SensorKind;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn reading(sensor_id: u32, value: f64) -> Reading {
        Reading {
            sensor_id,
            kind: SensorKind::Temperature,
            value,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn rejects_out_of_range_sensor_ids() {
        assert!(matches!(
            validate(&reading(0, 20.0)),
            Err(StoreError::Validation { field: "sensor_id" })
        ));
        assert!(matches!(
            validate(&reading(6, 20.0)),
            Err(StoreError::Validation { field: "sensor_id" })
        ));
        assert!(validate(&reading(5, 20.0)).is_ok());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            validate(&reading(1, f64::NAN)),
            Err(StoreError::Validation { field: "value" })
        ));
        assert!(matches!(
            validate(&reading(1, f64::INFINITY)),
            Err(StoreError::Validation { field: "value" })
        ));
    }

    proptest! {
        #[test]
        fn statistics_mean_lies_between_min_and_max(
            values in proptest::collection::vec(0.0f64..1000.0, 1..50)
        ) {
            let stats = Statistics::from_values(&values);
            prop_assert_eq!(stats.count, values.len());
            prop_assert!(stats.min <= stats.mean + 0.01);
            prop_assert!(stats.mean <= stats.max + 0.01);
        }
    }
}
