//! Simulated environmental sensor fleet with a file-backed reading store
//!
//! Five fixed sensors (temperature, humidity, pressure, luminosity, CO2)
//! produce timestamped readings that are persisted to a single
//! pretty-printed JSON file. Reports derive count/mean/min/max statistics
//! from the stored history on demand.
//!
//! Key constraints:
//! - The store is the single source of truth; sensors are stateless
//!   generators.
//! - Append is a whole-file read-modify-write with no locking, so access
//!   must stay single-process and single-thread.
//! - A malformed backing file is recovered as an empty history (logged at
//!   warn level), never raised to the caller.
//!
//! ```no_run
//! use airlog_core::{ReadingStore, SensorRegistry, time::SystemClock};
//!
//! let registry = SensorRegistry::new();
//! let store = ReadingStore::new("sensor_readings.json");
//!
//! let reading = registry.collect(1, &SystemClock, &mut rand::thread_rng())?;
//! store.append(&reading)?;
//! # Ok::<(), airlog_core::StoreError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod reading;
pub mod registry;
pub mod report;
pub mod sensor;
pub mod store;
pub mod time;

// Public API
pub use errors::{StoreError, StoreResult};
pub use reading::{Reading, SensorKind, Statistics};
pub use registry::SensorRegistry;
pub use report::ReportRenderer;
pub use store::ReadingStore;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
