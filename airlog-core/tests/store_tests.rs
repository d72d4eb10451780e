//! File-backed store behavior against real temporary files

use std::fs;
use std::io::Write;

use airlog_core::{Reading, ReadingStore, SensorKind};
use chrono::{TimeZone, Utc};
use tempfile::{tempdir, NamedTempFile};

fn reading(sensor_id: u32, kind: SensorKind, value: f64, sec: u32) -> Reading {
    Reading {
        sensor_id,
        kind,
        value,
        timestamp: Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, sec).unwrap(),
    }
}

#[test]
fn append_then_load_preserves_order() {
    let dir = tempdir().unwrap();
    let store = ReadingStore::new(dir.path().join("readings.json"));

    let first = reading(1, SensorKind::Temperature, 21.5, 0);
    let second = reading(2, SensorKind::Humidity, 55.0, 1);
    let third = reading(1, SensorKind::Temperature, 22.0, 2);

    store.append(&first).unwrap();
    store.append(&second).unwrap();
    store.append(&third).unwrap();

    let all = store.load_all().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], first);
    assert_eq!(all[1], second);
    assert_eq!(all.last().unwrap(), &third);
}

#[test]
fn filter_returns_matching_subsequence_in_order() {
    let dir = tempdir().unwrap();
    let store = ReadingStore::new(dir.path().join("readings.json"));

    store.append(&reading(1, SensorKind::Temperature, 20.0, 0)).unwrap();
    store.append(&reading(3, SensorKind::Pressure, 1000.0, 1)).unwrap();
    store.append(&reading(1, SensorKind::Temperature, 25.0, 2)).unwrap();
    store.append(&reading(5, SensorKind::Co2, 400.0, 3)).unwrap();

    let ones = store.for_sensor(1).unwrap();
    assert_eq!(ones.len(), 2);
    assert_eq!(ones[0].value, 20.0);
    assert_eq!(ones[1].value, 25.0);
    assert!(ones.iter().all(|r| r.sensor_id == 1));

    assert!(store.for_sensor(4).unwrap().is_empty());
}

#[test]
fn append_creates_missing_file_with_single_element() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fresh.json");
    let store = ReadingStore::new(&path);
    assert!(!path.exists());

    store.append(&reading(2, SensorKind::Humidity, 60.0, 0)).unwrap();

    assert!(path.exists());
    let all = store.load_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].sensor_id, 2);
}

#[test]
fn corrupt_content_is_discarded_not_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ definitely not a json array").unwrap();
    file.flush().unwrap();

    let store = ReadingStore::new(file.path());

    // Loading recovers as empty rather than failing the caller.
    assert!(store.load_all().unwrap().is_empty());

    // Appending over the corruption starts a fresh single-element history.
    store.append(&reading(1, SensorKind::Temperature, 19.5, 0)).unwrap();
    let all = store.load_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].value, 19.5);
}

#[test]
fn empty_file_loads_as_empty_history() {
    let file = NamedTempFile::new().unwrap();
    let store = ReadingStore::new(file.path());
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn round_trip_preserves_every_field() {
    let dir = tempdir().unwrap();
    let store = ReadingStore::new(dir.path().join("readings.json"));

    let originals: Vec<Reading> = (0..20)
        .map(|i| {
            let kind = SensorKind::ALL[i % SensorKind::ALL.len()];
            reading(i as u32 % 5 + 1, kind, kind.range().0 + i as f64 * 0.1, i as u32)
        })
        .collect();

    for r in &originals {
        store.append(r).unwrap();
    }

    let reloaded = store.load_all().unwrap();
    assert_eq!(reloaded, originals);
}

#[test]
fn backing_file_is_pretty_printed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("readings.json");
    let store = ReadingStore::new(&path);
    store.append(&reading(1, SensorKind::Temperature, 21.0, 0)).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains('\n'), "expected pretty-printed output");
    assert!(raw.contains("\"kind\": \"Temperature\""));
    assert!(raw.contains("\"timestamp\": \"2024-05-17 12:00:00\""));
}

#[test]
fn legacy_portuguese_files_remain_loadable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dados_sensores.json");
    fs::write(
        &path,
        r#"[
  {
    "sensor_id": 3,
    "tipo": "Pressao",
    "valor": 1013.2,
    "timestamp": "2024-05-17 08:15:00"
  }
]"#,
    )
    .unwrap();

    let store = ReadingStore::new(&path);
    let all = store.load_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].kind, SensorKind::Pressure);
    assert_eq!(all[0].value, 1013.2);
}

#[test]
fn statistics_match_the_documented_examples() {
    let dir = tempdir().unwrap();
    let store = ReadingStore::new(dir.path().join("readings.json"));

    // No readings at all: all zeros.
    let empty = store.statistics(1).unwrap();
    assert_eq!(empty.count, 0);
    assert_eq!(empty.mean, 0.0);
    assert_eq!(empty.min, 0.0);
    assert_eq!(empty.max, 0.0);

    for (i, value) in [10.0, 20.0, 30.0].into_iter().enumerate() {
        store.append(&reading(1, SensorKind::Temperature, value, i as u32)).unwrap();
    }
    // Another sensor's readings must not leak into the aggregate.
    store.append(&reading(2, SensorKind::Humidity, 80.0, 9)).unwrap();

    let stats = store.statistics(1).unwrap();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.mean, 20.0);
    assert_eq!(stats.min, 10.0);
    assert_eq!(stats.max, 30.0);
}

#[test]
fn validation_failures_leave_the_file_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("readings.json");
    let store = ReadingStore::new(&path);

    let bad = reading(0, SensorKind::Temperature, 21.0, 0);
    assert!(store.append(&bad).is_err());
    assert!(!path.exists());

    let nan = reading(1, SensorKind::Temperature, f64::NAN, 0);
    assert!(store.append(&nan).is_err());
    assert!(!path.exists());
}
