//! Simulated value generation
//!
//! The fleet is a closed set of five kinds, so generation is a pure
//! function over [`SensorKind::range`] rather than a trait hierarchy.
//! The RNG is passed in by the caller: production uses `thread_rng`, tests
//! use a seeded `StdRng` for reproducible values.

use rand::Rng;

use crate::reading::{Reading, SensorKind};
use crate::time::Clock;

/// Draw one simulated value for `kind`.
///
/// Uniform over the kind's inclusive range, rounded to 1 decimal place.
pub fn generate<R: Rng + ?Sized>(kind: SensorKind, rng: &mut R) -> f64 {
    let (min, max) = kind.range();
    round_to_tenth(rng.gen_range(min..=max))
}

/// Produce a fully populated reading for one sensor.
///
/// No side effects: history ownership lives in the store, not here.
pub fn collect<R, C>(sensor_id: u32, kind: SensorKind, clock: &C, rng: &mut R) -> Reading
where
    R: Rng + ?Sized,
    C: Clock + ?Sized,
{
    Reading {
        sensor_id,
        kind,
        value: generate(kind, rng),
        timestamp: clock.now(),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn collect_populates_all_fields() {
        let clock = FixedClock::at(2024, 5, 17, 12, 0, 0);
        let mut rng = StdRng::seed_from_u64(7);

        let reading = collect(1, SensorKind::Temperature, &clock, &mut rng);
        assert_eq!(reading.sensor_id, 1);
        assert_eq!(reading.kind, SensorKind::Temperature);
        assert_eq!(reading.timestamp, clock.now());
        let (min, max) = SensorKind::Temperature.range();
        assert!(reading.value >= min && reading.value <= max);
    }

    #[test]
    fn values_are_rounded_to_one_decimal() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let value = generate(SensorKind::Pressure, &mut rng);
            assert_eq!((value * 10.0).round() / 10.0, value);
        }
    }

    proptest! {
        #[test]
        fn generated_values_stay_in_range(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            for kind in SensorKind::ALL {
                let value = generate(kind, &mut rng);
                let (min, max) = kind.range();
                prop_assert!(value >= min && value <= max,
                    "{} out of range for {}", value, kind.name());
            }
        }
    }
}
