// src/walkthrough.rs

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use std::{fmt::Display, io::Write, time::Instant};
use tracing::{debug, info, instrument};

use crate::config::WalkthroughConfig;
use crate::data::{make_data, make_lookup};
use crate::ops;

/// Frames produced along the way that callers may want to inspect.
#[derive(Debug, Clone)]
pub struct WalkthroughOutcome {
    /// Sales frame after every column change and the null fill.
    pub sales: DataFrame,
    /// Orders / revenue / profit per (City, year).
    pub summary: DataFrame,
    /// Sales frame left-joined with the city lookup.
    pub merged: DataFrame,
}

/// Runs the fixed sequence of dataframe steps, writing a titled snapshot of
/// each result to `out`.
pub struct Walkthrough<W: Write> {
    config: WalkthroughConfig,
    out: W,
    sections: usize,
}

impl<W: Write> Walkthrough<W> {
    pub fn new(config: WalkthroughConfig, out: W) -> Self {
        Self {
            config,
            out,
            sections: 0,
        }
    }

    /// Give back the writer, e.g. to inspect a buffer after `run`.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn section(&mut self, title: &str, body: impl Display) -> Result<()> {
        if self.sections > 0 {
            write!(self.out, "\n\n")?;
        }
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", body)?;
        self.sections += 1;
        debug!(section = self.sections, "printed {}", title);
        Ok(())
    }

    #[instrument(level = "info", skip(self), fields(rows = self.config.rows, seed = self.config.seed))]
    pub fn run(&mut self) -> Result<WalkthroughOutcome> {
        let start = Instant::now();
        self.config.validate().context("invalid walkthrough config")?;
        let cfg = self.config.clone();

        // ─── fake data ───────────────────────────────────────────────────
        let mut df = make_data(cfg.rows, cfg.seed)?;
        info!("generated {} rows", df.height());

        // ─── look ────────────────────────────────────────────────────────
        self.section("Head", ops::head(&df, cfg.head_rows))?;
        self.section("Tail", ops::tail(&df, cfg.tail_rows))?;
        self.section("Sample", ops::sample(&df, cfg.sample_rows, cfg.seed)?)?;
        self.section("Schema", ops::schema_table(&df)?)?;
        self.section("Describe", ops::describe(&df)?)?;

        // ─── selecting ───────────────────────────────────────────────────
        let year = ops::select_columns(&df, &["year"])?;
        self.section("year column head", ops::head(&year, cfg.head_rows))?;
        let year_sales = ops::select_columns(&df, &["year", "sales"])?;
        self.section("year & sales", ops::head(&year_sales, cfg.head_rows))?;
        let numeric = ops::select_columns(&df, &["year", "sales", "cost"])?;
        self.section("stats on year, sales, cost", ops::describe(&numeric)?)?;

        // ─── row slicing / filtering ─────────────────────────────────────
        self.section(
            &format!(
                "Slice rows {}–{}",
                cfg.slice_offset,
                cfg.slice_offset + cfg.slice_len - 1
            ),
            ops::slice_rows(&df, cfg.slice_offset, cfg.slice_len),
        )?;
        self.section(
            &format!("Filter id == {}", cfg.filter_id),
            ops::filter_id(&df, cfg.filter_id)?,
        )?;
        self.section(
            &format!(
                "Query sales>{} & city=='{}'",
                cfg.sales_threshold, cfg.query_city
            ),
            ops::query_sales_city(&df, cfg.sales_threshold, &cfg.query_city)?,
        )?;

        // ─── add / modify ────────────────────────────────────────────────
        df = ops::add_profit(df)?;
        self.section("Add profit", ops::head(&df, cfg.preview_rows))?;
        df = ops::add_margin(df)?;
        self.section("Add margin", ops::head(&df, cfg.preview_rows))?;
        df = ops::lowercase_city(df)?;
        self.section("Lowercase city", ops::head(&df, cfg.preview_rows))?;
        df = ops::rename_column(df, "city", "City")?;
        self.section("Rename city→City", ops::head(&df, cfg.preview_rows))?;

        // ─── missing values ──────────────────────────────────────────────
        let nulls = cfg.null_rows;
        let around_nulls = cfg.preview_rows.max(nulls.end + 1);
        df = ops::inject_nulls(df, "margin", nulls.as_range())?;
        let injected = ops::null_count(&df, "margin")?;
        info!(injected, "introduced nulls in margin");
        self.section(
            &format!(
                "Introduce NAs in margin rows {}–{}",
                nulls.start,
                nulls.end - 1
            ),
            injected,
        )?;
        writeln!(self.out, "{}", ops::head(&df, around_nulls))?;

        let mean_margin = ops::column_mean(&df, "margin")?;
        debug!(?mean_margin, "margin mean before fill");
        df = ops::fill_null_with_mean(df, "margin")?;
        self.section(
            "Fill missing margin with mean",
            ops::head(&df, around_nulls),
        )?;

        // ─── grouping & aggregating ──────────────────────────────────────
        self.section("Mean sales by City", ops::mean_sales_by_city(&df)?)?;
        let summary = ops::city_year_summary(&df)?;
        self.section("Multi-group summary", &summary)?;

        // ─── sorting & count ─────────────────────────────────────────────
        self.section(
            &format!("Top {} by profit", cfg.top_n),
            ops::top_by_profit(&df, cfg.top_n)?,
        )?;
        self.section("City counts", ops::value_counts(&df, "City")?)?;

        // ─── concat / merge ──────────────────────────────────────────────
        self.section(
            "Concat head & tail",
            ops::concat_head_tail(&df, cfg.concat_rows)?,
        )?;
        let lookup = make_lookup(&cfg.lookup)?;
        let merged = ops::join_lookup(&df, &lookup, "City")?;
        self.section(
            "Merge with lookup",
            ops::select_columns(&merged, &["City", "population", "profit"])?,
        )?;

        self.out.flush()?;
        info!(
            sections = self.sections,
            elapsed = ?start.elapsed(),
            "walkthrough finished"
        );
        Ok(WalkthroughOutcome {
            sales: df,
            summary,
            merged,
        })
    }
}
