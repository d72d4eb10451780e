//! Fixed sensor fleet
//!
//! Exactly five sensors, ids 1..=5, mapped one-to-one onto
//! [`SensorKind::ALL`] in that order. The registry resolves ids and
//! delegates reading collection; it never owns history.

use rand::Rng;

use crate::errors::{StoreError, StoreResult};
use crate::reading::{Reading, SensorKind};
use crate::sensor;
use crate::time::Clock;

/// Number of sensors in the fleet
pub const SENSOR_COUNT: usize = SensorKind::ALL.len();

/// Fixed mapping of sensor id to kind
#[derive(Debug, Clone)]
pub struct SensorRegistry {
    kinds: [SensorKind; SENSOR_COUNT],
}

impl SensorRegistry {
    /// Build the standard five-sensor fleet.
    pub fn new() -> Self {
        Self {
            kinds: SensorKind::ALL,
        }
    }

    /// Resolve an id to its kind; `NotFound` outside 1..=5.
    pub fn resolve(&self, id: u32) -> StoreResult<SensorKind> {
        id.checked_sub(1)
            .and_then(|idx| self.kinds.get(idx as usize))
            .copied()
            .ok_or(StoreError::NotFound { id })
    }

    /// Check whether an id belongs to the fleet; total, never fails.
    pub fn is_valid(&self, id: u32) -> bool {
        self.resolve(id).is_ok()
    }

    /// Iterate (id, kind) pairs in fixed id order.
    pub fn sensors(&self) -> impl Iterator<Item = (u32, SensorKind)> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .map(|(idx, &kind)| (idx as u32 + 1, kind))
    }

    /// Collect one reading from the sensor with `id`.
    pub fn collect<R, C>(&self, id: u32, clock: &C, rng: &mut R) -> StoreResult<Reading>
    where
        R: Rng + ?Sized,
        C: Clock + ?Sized,
    {
        let kind = self.resolve(id)?;
        Ok(sensor::collect(id, kind, clock, rng))
    }
}

impl Default for SensorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
