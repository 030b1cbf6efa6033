//! Sample data generation for the first-run experience.
//!
//! Fills an empty store with a plausible week of records so a new user sees
//! a populated summary right away. The check is "any record exists": as soon
//! as real data is in the store, seeding refuses to touch it.

use crate::db::store::Store;
use crate::libs::record::WorkRecord;
use anyhow::Result;
use chrono::{Duration, Local};

const SEED_DAYS: i64 = 7;
const MIN_SHEETS: u32 = 10;
const SHEETS_SPREAD: f64 = 50.0;

/// Small multiplicative hash generator, seeded from the clock.
///
/// Sample data only needs to look varied, not be statistically sound, so
/// this avoids pulling in an RNG crate.
struct SampleRng {
    state: u64,
}

impl SampleRng {
    fn new() -> Self {
        let seed = Local::now().timestamp_nanos_opt().unwrap_or(0) as u64;
        Self { state: seed | 1 }
    }

    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let x = self.state ^ (self.state >> 33);
        ((x >> 11) as f64) / ((1u64 << 53) as f64)
    }
}

/// Seeds one week of records for every current worker, oldest day first.
///
/// Returns the number of records written, or 0 when the store already holds
/// data and was left untouched. Each worker-day rolls independently: roughly
/// four days out of five count as worked, with a sheet count in the 10..=59
/// range and the daily rate as pay.
pub fn seed_if_empty(store: &mut Store) -> Result<usize> {
    if !store.records()?.is_empty() {
        return Ok(0);
    }

    let workers = store.workers()?;
    let today = Local::now().date_naive();
    let mut rng = SampleRng::new();
    let mut seeded = 0;

    for offset in (0..SEED_DAYS).rev() {
        let date = today - Duration::days(offset);
        for worker in &workers {
            let worked = rng.next_f64() > 0.2;
            let sheets = if worked { MIN_SHEETS + (rng.next_f64() * SHEETS_SPREAD) as u32 } else { 0 };
            let record = WorkRecord::new(date, &worker.id, &worker.name, worked, sheets);
            store.save_record(&record)?;
            seeded += 1;
        }
    }

    Ok(seeded)
}
