// src/data.rs

use anyhow::{Context, Result};
use polars::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::ops::Range;
use tracing::{debug, instrument};

use crate::config::LookupEntry;

pub const CITIES: [&str; 3] = ["Austin", "Boston", "Chicago"];
pub const YEARS: [i64; 3] = [2023, 2024, 2025];
pub const SALES_RANGE: Range<i64> = 50..200;
pub const COST_RANGE: Range<i64> = 20..120;

/// Build the synthetic sales table: `n` rows with `id` = 1..=n, a city and a
/// year drawn from the fixed sets, and uniform `sales` / `cost` figures.
///
/// Columns are drawn one after another from a single seeded generator, so the
/// same `(n, seed)` always yields the same frame.
#[instrument(level = "debug")]
pub fn make_data(n: usize, seed: u64) -> Result<DataFrame> {
    let mut rng = StdRng::seed_from_u64(seed);

    let id: Vec<i64> = (1..=n as i64).collect();
    let city: Vec<&str> = (0..n)
        .map(|_| CITIES[rng.gen_range(0..CITIES.len())])
        .collect();
    let year: Vec<i64> = (0..n)
        .map(|_| YEARS[rng.gen_range(0..YEARS.len())])
        .collect();
    let sales: Vec<i64> = (0..n).map(|_| rng.gen_range(SALES_RANGE)).collect();
    let cost: Vec<i64> = (0..n).map(|_| rng.gen_range(COST_RANGE)).collect();

    let df = df!(
        "id" => id,
        "city" => city,
        "year" => year,
        "sales" => sales,
        "cost" => cost
    )
    .context("building synthetic sales frame")?;
    debug!("generated sales frame shape: {:?}", df.shape());
    Ok(df)
}

/// City → population table joined onto the sales frame by `City`.
pub fn make_lookup(entries: &[LookupEntry]) -> Result<DataFrame> {
    let cities: Vec<&str> = entries.iter().map(|e| e.city.as_str()).collect();
    let population: Vec<i64> = entries.iter().map(|e| e.population).collect();
    df!(
        "City" => cities,
        "population" => population
    )
    .context("building city lookup frame")
}
