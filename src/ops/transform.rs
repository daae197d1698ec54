// src/ops/transform.rs

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::debug;

/// Adds `profit = sales - cost`.
pub fn add_profit(df: DataFrame) -> Result<DataFrame> {
    df.lazy()
        .with_column((col("sales") - col("cost")).alias("profit"))
        .collect()
        .context("deriving profit")
}

/// Adds `margin = profit / sales` as a Float64 ratio.
pub fn add_margin(df: DataFrame) -> Result<DataFrame> {
    df.lazy()
        .with_column(
            (col("profit").cast(DataType::Float64) / col("sales").cast(DataType::Float64))
                .alias("margin"),
        )
        .collect()
        .context("deriving margin")
}

pub fn lowercase_city(df: DataFrame) -> Result<DataFrame> {
    df.lazy()
        .with_column(col("city").str().to_lowercase().alias("city"))
        .collect()
        .context("lowercasing city")
}

/// Renames one column. Done through the lazy API so the returned frame
/// carries a fresh schema for later lazy steps.
pub fn rename_column(df: DataFrame, from: &str, to: &str) -> Result<DataFrame> {
    let renamed = df
        .lazy()
        .rename([from], [to], true)
        .collect()
        .with_context(|| format!("renaming `{}` to `{}`", from, to))?;
    debug!("renamed `{}` → `{}`", from, to);
    Ok(renamed)
}
