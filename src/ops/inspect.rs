// src/ops/inspect.rs

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::{debug, instrument};

/// Row labels of the `describe` table, in output order.
pub const STATISTICS: [&str; 9] = [
    "count",
    "null_count",
    "mean",
    "std",
    "min",
    "25%",
    "50%",
    "75%",
    "max",
];

pub fn head(df: &DataFrame, n: usize) -> DataFrame {
    df.head(Some(n))
}

pub fn tail(df: &DataFrame, n: usize) -> DataFrame {
    df.tail(Some(n))
}

/// `n` distinct rows, reproducible for a given seed. Asking for more rows
/// than the frame holds returns every row.
pub fn sample(df: &DataFrame, n: usize, seed: u64) -> Result<DataFrame> {
    let n = n.min(df.height());
    df.sample_n_literal(n, false, false, Some(seed))
        .with_context(|| format!("sampling {} rows", n))
}

/// Schema as a printable two-column table: `column`, `dtype`.
pub fn schema_table(df: &DataFrame) -> Result<DataFrame> {
    let names: Vec<String> = df.get_columns().iter().map(|c| c.name().to_string()).collect();
    let dtypes: Vec<String> = df
        .get_columns()
        .iter()
        .map(|c| c.dtype().to_string())
        .collect();
    df!(
        "column" => names,
        "dtype" => dtypes
    )
    .context("building schema table")
}

/// Summary statistics, one row per entry of [`STATISTICS`].
///
/// Integer and float columns are summarised as Float64 (std uses ddof = 1,
/// quantiles use `QuantileMethod::Nearest`). String columns report count,
/// null_count, min and max as text. Other dtypes are left out.
#[instrument(level = "debug", skip(df), fields(shape = ?df.shape()))]
pub fn describe(df: &DataFrame) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(df.width() + 1);
    columns.push(Series::new("statistic".into(), STATISTICS.to_vec()).into());

    for column in df.get_columns() {
        let name = column.name().clone();
        let series = column.as_materialized_series();
        let dtype = series.dtype();

        let described = if dtype.is_integer() || dtype.is_float() {
            let floats = series
                .cast(&DataType::Float64)
                .with_context(|| format!("casting `{}` to Float64", name))?;
            Series::new(name, numeric_summary(floats.f64()?)?)
        } else if dtype == &DataType::String {
            Series::new(name, string_summary(series.str()?, series.null_count()))
        } else {
            debug!("describe: skipping `{}` of dtype {}", name, dtype);
            continue;
        };
        columns.push(described.into());
    }

    DataFrame::new(columns).context("assembling describe table")
}

fn numeric_summary(ca: &Float64Chunked) -> Result<Vec<Option<f64>>> {
    let quantile = |q: f64| {
        ca.quantile(q, QuantileMethod::Nearest)
            .with_context(|| format!("{} quantile of `{}`", q, ca.name()))
    };

    Ok(vec![
        Some((ca.len() - ca.null_count()) as f64),
        Some(ca.null_count() as f64),
        ca.mean(),
        ca.std(1),
        ca.min(),
        quantile(0.25)?,
        quantile(0.50)?,
        quantile(0.75)?,
        ca.max(),
    ])
}

fn string_summary(ca: &StringChunked, null_count: usize) -> Vec<Option<String>> {
    let values: Vec<&str> = ca.into_iter().flatten().collect();
    let min = values.iter().min().map(|s| s.to_string());
    let max = values.iter().max().map(|s| s.to_string());

    vec![
        Some(values.len().to_string()),
        Some(null_count.to_string()),
        None,
        None,
        min,
        None,
        None,
        None,
        max,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn tiny() -> Result<DataFrame> {
        Ok(df!(
            "id" => [1i64, 2, 3, 4, 5],
            "city" => ["Boston", "Austin", "Chicago", "Austin", "Boston"],
            "margin" => [Some(0.5), None, Some(0.1), Some(0.3), Some(0.9)]
        )?)
    }

    fn stat(df: &DataFrame, column: &str, statistic: &str) -> Result<Option<f64>> {
        let idx = STATISTICS
            .iter()
            .position(|s| *s == statistic)
            .expect("known statistic");
        Ok(df.column(column)?.f64()?.get(idx))
    }

    #[test]
    fn head_tail_clamp_to_height() -> Result<()> {
        let df = tiny()?;
        assert_eq!(head(&df, 2).height(), 2);
        assert_eq!(tail(&df, 10).height(), 5);
        let last: Vec<i64> = tail(&df, 2).column("id")?.i64()?.into_no_null_iter().collect();
        assert_eq!(last, vec![4, 5]);
        Ok(())
    }

    #[test]
    fn sample_is_distinct_and_reproducible() -> Result<()> {
        let df = crate::data::make_data(50, 0)?;
        let a = sample(&df, 5, 11)?;
        let b = sample(&df, 5, 11)?;
        assert_eq!(a.height(), 5);
        assert!(a.equals(&b));

        let mut ids: Vec<i64> = a.column("id")?.i64()?.into_no_null_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);

        assert_eq!(sample(&df, 500, 1)?.height(), 50);
        Ok(())
    }

    #[test]
    fn schema_table_lists_columns_in_order() -> Result<()> {
        let schema = schema_table(&tiny()?)?;
        let names: Vec<&str> = schema.column("column")?.str()?.into_no_null_iter().collect();
        assert_eq!(names, vec!["id", "city", "margin"]);
        let dtypes: Vec<&str> = schema.column("dtype")?.str()?.into_no_null_iter().collect();
        assert_eq!(dtypes[0], DataType::Int64.to_string());
        assert_eq!(dtypes[1], DataType::String.to_string());
        Ok(())
    }

    #[test]
    fn describe_numeric_columns() -> Result<()> {
        let d = describe(&tiny()?)?;
        assert_eq!(d.height(), STATISTICS.len());

        assert_eq!(stat(&d, "id", "count")?, Some(5.0));
        assert_eq!(stat(&d, "id", "null_count")?, Some(0.0));
        assert_eq!(stat(&d, "id", "mean")?, Some(3.0));
        assert_eq!(stat(&d, "id", "min")?, Some(1.0));
        assert_eq!(stat(&d, "id", "50%")?, Some(3.0));
        assert_eq!(stat(&d, "id", "max")?, Some(5.0));
        let std = stat(&d, "id", "std")?.unwrap();
        assert!((std - 2.5f64.sqrt()).abs() < 1e-12);

        // nulls are excluded from every statistic but null_count
        assert_eq!(stat(&d, "margin", "count")?, Some(4.0));
        assert_eq!(stat(&d, "margin", "null_count")?, Some(1.0));
        assert_eq!(stat(&d, "margin", "min")?, Some(0.1));
        assert_eq!(stat(&d, "margin", "max")?, Some(0.9));
        // nearest rank over the sorted non-null values [0.1, 0.3, 0.5, 0.9]
        assert_eq!(stat(&d, "margin", "25%")?, Some(0.3));
        assert_eq!(stat(&d, "margin", "75%")?, Some(0.5));
        Ok(())
    }

    #[test]
    fn describe_string_columns() -> Result<()> {
        let d = describe(&tiny()?)?;
        let city: Vec<Option<&str>> = d.column("city")?.str()?.into_iter().collect();
        assert_eq!(city[0], Some("5"));
        assert_eq!(city[1], Some("0"));
        assert_eq!(city[2], None);
        assert_eq!(city[4], Some("Austin"));
        assert_eq!(city[8], Some("Chicago"));
        Ok(())
    }
}
