//! Textual reports over the stored history
//!
//! The renderer borrows the registry and the store and writes into any
//! `io::Write` (stdout in the CLI, byte buffers in tests). It converts
//! not-found and empty-history cases into user-facing lines itself; only
//! real store failures propagate.

use std::io::Write;

use crate::errors::{StoreError, StoreResult};
use crate::reading::{Reading, SensorKind, Statistics, TIMESTAMP_FORMAT};
use crate::registry::SensorRegistry;
use crate::store::ReadingStore;

/// Readings shown in a single-sensor report
const DETAIL_WINDOW: usize = 10;
/// Readings shown per sensor in the full report
const SUMMARY_WINDOW: usize = 5;

/// Composes registry and store into printable reports; owns neither
pub struct ReportRenderer<'a> {
    registry: &'a SensorRegistry,
    store: &'a ReadingStore,
}

impl<'a> ReportRenderer<'a> {
    /// Borrow the collaborators for the renderer's lifetime.
    pub fn new(registry: &'a SensorRegistry, store: &'a ReadingStore) -> Self {
        Self { registry, store }
    }

    /// Report one sensor: header, last 10 readings oldest-first, then the
    /// full statistics block.
    ///
    /// An unknown id or an empty history prints a message and returns
    /// `Ok`; those are user mistakes, not failures.
    pub fn show_readings<W: Write>(&self, w: &mut W, id: u32) -> StoreResult<()> {
        let kind = match self.registry.resolve(id) {
            Ok(kind) => kind,
            Err(StoreError::NotFound { id }) => {
                writeln!(w, "Sensor with id {id} not found.")?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let readings = self.store.for_sensor(id)?;
        if readings.is_empty() {
            writeln!(w, "No readings recorded.")?;
            return Ok(());
        }

        writeln!(w, "=== READINGS - {} ===", kind.name().to_uppercase())?;
        let start = readings.len().saturating_sub(DETAIL_WINDOW);
        for reading in &readings[start..] {
            write_reading_line(w, "", reading, kind)?;
        }

        let stats = statistics_of(&readings);
        writeln!(w)?;
        writeln!(w, "--- STATISTICS ---")?;
        writeln!(w, "Readings: {}", stats.count)?;
        writeln!(w, "Mean: {:.2} {}", stats.mean, kind.unit())?;
        writeln!(w, "Min: {:.1} {}", stats.min, kind.unit())?;
        writeln!(w, "Max: {:.1} {}", stats.max, kind.unit())?;
        Ok(())
    }

    /// Report the whole fleet in fixed id order: kind header, last 5
    /// readings, condensed count/mean line per sensor.
    pub fn show_full_report<W: Write>(&self, w: &mut W) -> StoreResult<()> {
        writeln!(w, "=== FULL REPORT - ALL SENSORS ===")?;

        for (id, kind) in self.registry.sensors() {
            writeln!(w)?;
            writeln!(w, "--- {} ---", kind.name().to_uppercase())?;

            let readings = self.store.for_sensor(id)?;
            if readings.is_empty() {
                writeln!(w, "  No readings recorded.")?;
                continue;
            }

            let start = readings.len().saturating_sub(SUMMARY_WINDOW);
            for reading in &readings[start..] {
                write_reading_line(w, "  ", reading, kind)?;
            }

            let stats = statistics_of(&readings);
            writeln!(w, "  Total: {} | Mean: {:.2} {}", stats.count, stats.mean, kind.unit())?;
        }
        Ok(())
    }
}

fn write_reading_line<W: Write>(
    w: &mut W,
    indent: &str,
    reading: &Reading,
    kind: SensorKind,
) -> std::io::Result<()> {
    writeln!(
        w,
        "{}Value: {:.1} {} | {}",
        indent,
        reading.value,
        kind.unit(),
        reading.timestamp.format(TIMESTAMP_FORMAT)
    )
}

fn statistics_of(readings: &[Reading]) -> Statistics {
    let values: Vec<f64> = readings.iter().map(|r| r.value).collect();
    Statistics::from_values(&values)
}
