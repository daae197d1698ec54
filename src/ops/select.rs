// src/ops/select.rs

use anyhow::{Context, Result};
use polars::prelude::*;

/// Project `columns` in the given order.
pub fn select_columns(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    df.select(columns.iter().copied())
        .with_context(|| format!("selecting columns {:?}", columns))
}

/// Rows `offset..offset + len`.
pub fn slice_rows(df: &DataFrame, offset: usize, len: usize) -> DataFrame {
    df.slice(offset as i64, len)
}

pub fn filter_id(df: &DataFrame, id: i64) -> Result<DataFrame> {
    df.clone()
        .lazy()
        .filter(col("id").eq(lit(id)))
        .collect()
        .with_context(|| format!("filtering id == {}", id))
}

/// Rows with `sales > threshold` in `city`.
pub fn query_sales_city(df: &DataFrame, threshold: i64, city: &str) -> Result<DataFrame> {
    df.clone()
        .lazy()
        .filter(
            col("sales")
                .gt(lit(threshold))
                .and(col("city").eq(lit(city))),
        )
        .collect()
        .with_context(|| format!("filtering sales > {} and city == {}", threshold, city))
}
