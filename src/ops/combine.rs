// src/ops/combine.rs

use anyhow::{Context, Result};
use polars::lazy::dsl::concat;
use polars::prelude::*;
use tracing::debug;

/// Stack the first `n` rows on top of the last `n` rows, order preserved.
pub fn concat_head_tail(df: &DataFrame, n: usize) -> Result<DataFrame> {
    let part_a = df.head(Some(n));
    let part_b = df.tail(Some(n));

    concat(
        [part_a.lazy(), part_b.lazy()],
        UnionArgs {
            parallel: false,
            maintain_order: true,
            ..Default::default()
        },
    )
    .context("concatenating head and tail")?
    .collect()
    .context("collecting concatenated frame")
}

/// Left join `lookup` onto `df` by `key`. Every row of `df` survives, in its
/// original order; rows without a match get nulls in the lookup columns.
pub fn join_lookup(df: &DataFrame, lookup: &DataFrame, key: &str) -> Result<DataFrame> {
    const ROW_ORDER: &str = "__row_nr";

    let joined = df
        .clone()
        .lazy()
        .with_row_index(ROW_ORDER, None)
        .join(
            lookup.clone().lazy(),
            [col(key)],
            [col(key)],
            JoinArgs::new(JoinType::Left),
        )
        .sort([ROW_ORDER], Default::default())
        .collect()
        .with_context(|| format!("left joining lookup on `{}`", key))?
        .drop(ROW_ORDER)?;

    debug!(
        "joined {} rows; {} without a lookup match",
        joined.height(),
        unmatched_rows(&joined, lookup, key)?
    );
    Ok(joined)
}

/// Rows whose first non-key lookup column came back null. Only counts
/// missed matches when that column holds no nulls in `lookup` itself, as is
/// the case for the table built from the config.
fn unmatched_rows(joined: &DataFrame, lookup: &DataFrame, key: &str) -> Result<usize> {
    let Some(value_col) = lookup
        .get_column_names()
        .into_iter()
        .find(|name| name.as_str() != key)
    else {
        return Ok(0);
    };
    Ok(joined.column(value_col.as_str())?.null_count())
}
