//! Synthetic sales data pushed through a tour of polars dataframe operations:
//! inspection, selection, filtering, derived columns, null handling,
//! grouping, sorting, concatenation and joins.

pub mod config;
pub mod data;
pub mod ops;
pub mod walkthrough;

pub use config::WalkthroughConfig;
pub use walkthrough::{Walkthrough, WalkthroughOutcome};
