pub mod aggregate;
pub mod combine;
pub mod inspect;
pub mod missing;
pub mod select;
pub mod transform;

pub use aggregate::{city_year_summary, mean_sales_by_city, top_by_profit, value_counts};
pub use combine::{concat_head_tail, join_lookup};
pub use inspect::{describe, head, sample, schema_table, tail};
pub use missing::{column_mean, fill_null_with_mean, inject_nulls, null_count};
pub use select::{filter_id, query_sales_city, select_columns, slice_rows};
pub use transform::{add_margin, add_profit, lowercase_city, rename_column};
