// src/ops/missing.rs

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::ops::Range;
use tracing::{debug, instrument, warn};

/// Null out rows `rows` (0-based, half-open) of the Float64 column `column`.
#[instrument(level = "debug", skip(df))]
pub fn inject_nulls(mut df: DataFrame, column: &str, rows: Range<usize>) -> Result<DataFrame> {
    if rows.end > df.height() {
        bail!(
            "null range {}..{} runs past the {} rows of the frame",
            rows.start,
            rows.end,
            df.height()
        );
    }

    let masked: Float64Chunked = df
        .column(column)?
        .f64()
        .with_context(|| format!("`{}` is not a Float64 column", column))?
        .into_iter()
        .enumerate()
        .map(|(i, v)| if rows.contains(&i) { None } else { v })
        .collect();

    df.with_column(masked.with_name(column.into()).into_series())
        .with_context(|| format!("replacing `{}` with masked values", column))?;
    Ok(df)
}

pub fn null_count(df: &DataFrame, column: &str) -> Result<usize> {
    Ok(df.column(column)?.null_count())
}

/// Mean over the non-null values; `None` when every value is null.
pub fn column_mean(df: &DataFrame, column: &str) -> Result<Option<f64>> {
    let floats = df
        .column(column)?
        .cast(&DataType::Float64)
        .with_context(|| format!("casting `{}` to Float64", column))?;
    Ok(floats.f64()?.mean())
}

/// Replace nulls in `column` with its mean. A column with no non-null values
/// is returned unchanged.
#[instrument(level = "debug", skip(df))]
pub fn fill_null_with_mean(df: DataFrame, column: &str) -> Result<DataFrame> {
    let Some(mean) = column_mean(&df, column)? else {
        warn!("`{}` has no values to average; leaving nulls in place", column);
        return Ok(df);
    };
    debug!(mean, "filling nulls in `{}`", column);

    df.lazy()
        .with_column(col(column).fill_null(lit(mean)))
        .collect()
        .with_context(|| format!("filling nulls in `{}`", column))
}
