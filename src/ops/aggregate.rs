// src/ops/aggregate.rs

use anyhow::{Context, Result};
use polars::prelude::*;

/// Mean `sales` per `City`, sorted by city.
pub fn mean_sales_by_city(df: &DataFrame) -> Result<DataFrame> {
    df.clone()
        .lazy()
        .group_by([col("City")])
        .agg([col("sales").mean().alias("mean_sales")])
        .sort(["City"], Default::default())
        .collect()
        .context("grouping mean sales by City")
}

/// Orders, revenue and profit per (`City`, `year`), sorted by both keys.
pub fn city_year_summary(df: &DataFrame) -> Result<DataFrame> {
    df.clone()
        .lazy()
        .group_by([col("City"), col("year")])
        .agg([
            col("id").count().alias("orders"),
            col("sales").sum().alias("revenue"),
            col("profit").sum().alias("profit"),
        ])
        .sort(["City", "year"], Default::default())
        .collect()
        .context("building City/year summary")
}

/// The `n` most profitable rows; ties keep their original order.
pub fn top_by_profit(df: &DataFrame, n: usize) -> Result<DataFrame> {
    let sorted = df
        .sort(
            ["profit"],
            SortMultipleOptions {
                descending: vec![true],
                maintain_order: true,
                ..Default::default()
            },
        )
        .context("sorting by profit")?;
    Ok(sorted.head(Some(n)))
}

/// Occurrences of each distinct value of `column`, most frequent first.
pub fn value_counts(df: &DataFrame, column: &str) -> Result<DataFrame> {
    df.clone()
        .lazy()
        .group_by([col(column)])
        .agg([len().alias("count")])
        .sort(
            ["count", column],
            SortMultipleOptions {
                descending: vec![true, false],
                ..Default::default()
            },
        )
        .collect()
        .with_context(|| format!("counting values of `{}`", column))
}
