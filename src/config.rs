// src/config.rs

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, ops::Range, path::Path};
use tracing::debug;

/// One row of the city → population lookup table.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct LookupEntry {
    pub city: String,
    pub population: i64,
}

/// Half-open row range `[start, end)` used for null injection.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Knobs for a walkthrough run. Every field has a default, so a YAML file
/// only needs to name what it overrides.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct WalkthroughConfig {
    pub rows: usize,
    pub seed: u64,
    pub head_rows: usize,
    pub tail_rows: usize,
    pub sample_rows: usize,
    /// Row count for the short previews printed after each column change.
    pub preview_rows: usize,
    pub slice_offset: usize,
    pub slice_len: usize,
    pub filter_id: i64,
    pub sales_threshold: i64,
    pub query_city: String,
    pub null_rows: RowRange,
    pub top_n: usize,
    pub concat_rows: usize,
    pub lookup: Vec<LookupEntry>,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            seed: 0,
            head_rows: 10,
            tail_rows: 5,
            sample_rows: 5,
            preview_rows: 5,
            slice_offset: 2,
            slice_len: 3,
            filter_id: 10,
            sales_threshold: 150,
            query_city: "Boston".to_string(),
            null_rows: RowRange { start: 2, end: 5 },
            top_n: 10,
            concat_rows: 5,
            lookup: vec![
                LookupEntry {
                    city: "austin".to_string(),
                    population: 100,
                },
                LookupEntry {
                    city: "boston".to_string(),
                    population: 400,
                },
                LookupEntry {
                    city: "chicago".to_string(),
                    population: 51,
                },
            ],
        }
    }
}

impl WalkthroughConfig {
    /// Load a config from a YAML file; absent fields keep their defaults.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {:?}", path))?;
        let cfg: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing YAML config {:?}", path))?;
        debug!(?cfg, "loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Reject settings that would make a step index past the generated table.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            bail!("rows must be at least 1");
        }
        let nulls = self.null_rows;
        if nulls.start >= nulls.end {
            bail!("null_rows {}..{} is empty", nulls.start, nulls.end);
        }
        if nulls.end > self.rows {
            bail!(
                "null_rows {}..{} runs past the {} generated rows",
                nulls.start,
                nulls.end,
                self.rows
            );
        }
        if self.slice_len == 0 {
            bail!("slice_len must be at least 1");
        }
        let Some(slice_end) = self.slice_offset.checked_add(self.slice_len) else {
            bail!(
                "slice {}+{} overflows the row index",
                self.slice_offset,
                self.slice_len
            );
        };
        if slice_end > self.rows {
            bail!(
                "slice {}+{} runs past the {} generated rows",
                self.slice_offset,
                self.slice_len,
                self.rows
            );
        }
        if self.concat_rows > self.rows {
            bail!(
                "concat_rows {} exceeds the {} generated rows",
                self.concat_rows,
                self.rows
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_pass_validation() -> Result<()> {
        let cfg = WalkthroughConfig::default();
        cfg.validate()?;
        assert_eq!(cfg.rows, 50);
        assert_eq!(cfg.null_rows.as_range(), 2..5);
        assert_eq!(cfg.lookup.len(), 3);
        Ok(())
    }

    #[test]
    fn yaml_overrides_only_named_fields() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "rows: 20\nseed: 7\nquery_city: Austin")?;

        let cfg = WalkthroughConfig::from_yaml_file(tmp.path())?;
        assert_eq!(cfg.rows, 20);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.query_city, "Austin");
        assert_eq!(cfg.head_rows, 10);
        assert_eq!(cfg.lookup, WalkthroughConfig::default().lookup);
        Ok(())
    }

    #[test]
    fn yaml_lookup_table_is_replaced() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(
            tmp,
            "lookup:\n  - city: austin\n    population: 9\nnull_rows:\n  start: 0\n  end: 1"
        )?;

        let cfg = WalkthroughConfig::from_yaml_file(tmp.path())?;
        assert_eq!(
            cfg.lookup,
            vec![LookupEntry {
                city: "austin".into(),
                population: 9
            }]
        );
        assert_eq!(cfg.null_rows, RowRange { start: 0, end: 1 });
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = WalkthroughConfig::from_yaml_file("/nonexistent/salesframe.yaml").unwrap_err();
        assert!(err.to_string().contains("reading config file"));
    }

    #[test]
    fn validation_rejects_overflowing_slice_from_yaml() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "slice_offset: {}\nslice_len: 1", usize::MAX)?;

        let cfg = WalkthroughConfig::from_yaml_file(tmp.path())?;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("overflows"), "got: {err}");
        Ok(())
    }

    #[test]
    fn validation_rejects_out_of_range_settings() {
        let mut cfg = WalkthroughConfig::default();
        cfg.rows = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = WalkthroughConfig::default();
        cfg.null_rows = RowRange { start: 3, end: 3 };
        assert!(cfg.validate().is_err());

        let mut cfg = WalkthroughConfig::default();
        cfg.rows = 4;
        assert!(cfg.validate().is_err(), "null range 2..5 needs 5 rows");

        let mut cfg = WalkthroughConfig::default();
        cfg.slice_offset = 49;
        assert!(cfg.validate().is_err());

        let mut cfg = WalkthroughConfig::default();
        cfg.slice_len = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = WalkthroughConfig::default();
        cfg.concat_rows = 51;
        assert!(cfg.validate().is_err());
    }
}
