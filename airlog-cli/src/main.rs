//! Interactive menu for the airlog sensor simulator
//!
//! Thin shell over `airlog-core`: reads menu selections from stdin and
//! drives generate / report / exit. All recoverable errors are printed
//! and the loop continues; only stdout/stdin trouble ends the program.
//!
//! Usage: `airlog [store-path]` — the backing file defaults to
//! `sensor_readings.json` in the working directory. Set `RUST_LOG=debug`
//! to watch store traffic.

use std::io::{self, BufRead, Write};

use airlog_core::time::SystemClock;
use airlog_core::{ReadingStore, ReportRenderer, SensorRegistry};
use log::warn;
use rand::rngs::ThreadRng;

const DEFAULT_STORE_PATH: &str = "sensor_readings.json";
const READINGS_PER_SENSOR: usize = 3;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());

    let registry = SensorRegistry::new();
    let store = ReadingStore::new(&path);
    let clock = SystemClock;
    let mut rng = rand::thread_rng();

    println!("Sensor fleet simulator (store: {path})");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("=== SENSOR SYSTEM ===");
        println!("1 - Generate readings");
        println!("2 - View reports");
        println!("3 - Exit");

        let Some(choice) = prompt(&mut lines) else {
            break;
        };
        match choice.as_str() {
            "1" => generate_batch(&registry, &store, &clock, &mut rng),
            "2" => report_menu(&registry, &store, &mut lines),
            "3" => {
                println!("Exiting.");
                break;
            }
            other => println!("Invalid option {other:?}: pick 1 to 3."),
        }
    }
}

/// Read one trimmed line; `None` on EOF ends the surrounding loop.
fn prompt<B: BufRead>(lines: &mut io::Lines<B>) -> Option<String> {
    print!("> ");
    io::stdout().flush().ok();
    match lines.next()? {
        Ok(line) => Some(line.trim().to_string()),
        Err(err) => {
            warn!("stdin read failed: {err}");
            None
        }
    }
}

/// Collect and persist a batch of readings for the whole fleet.
///
/// An I/O failure on one append skips that reading and moves on; the
/// batch never takes the process down.
fn generate_batch(
    registry: &SensorRegistry,
    store: &ReadingStore,
    clock: &SystemClock,
    rng: &mut ThreadRng,
) {
    println!("\nGenerating readings for all sensors...");
    let mut total = 0usize;

    for (id, _) in registry.sensors() {
        for _ in 0..READINGS_PER_SENSOR {
            let result = registry
                .collect(id, clock, rng)
                .and_then(|reading| store.append(&reading));
            match result {
                Ok(()) => total += 1,
                Err(err) => println!("Failed to record a reading for sensor {id}: {err}"),
            }
        }
    }

    println!("Done, {total} readings saved.");
}

fn report_menu<B: BufRead>(
    registry: &SensorRegistry,
    store: &ReadingStore,
    lines: &mut io::Lines<B>,
) {
    let renderer = ReportRenderer::new(registry, store);

    loop {
        println!();
        println!("=== REPORTS ===");
        for (id, kind) in registry.sensors() {
            println!("{id} - {}", kind.name());
        }
        println!("6 - Full report");
        println!("7 - Back");

        let Some(choice) = prompt(lines) else { return };
        let outcome = match choice.as_str() {
            "1" | "2" | "3" | "4" | "5" => {
                // The menu guarantees a valid digit here.
                let id: u32 = choice.parse().unwrap_or_default();
                renderer.show_readings(&mut io::stdout().lock(), id)
            }
            "6" => renderer.show_full_report(&mut io::stdout().lock()),
            "7" => return,
            other => {
                println!("Invalid option {other:?}: pick 1 to 7.");
                continue;
            }
        };

        if let Err(err) = outcome {
            println!("Report failed: {err}");
        }
    }
}
