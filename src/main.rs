use anyhow::Result;
use clap::Parser;
use salesframe::{Walkthrough, WalkthroughConfig};
use std::{env, io, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generate synthetic sales data and print a tour of dataframe operations"
)]
struct Args {
    /// YAML file overriding the default walkthrough settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of synthetic rows (overrides the config file)
    #[arg(short, long)]
    rows: Option<usize>,
    /// Seed for data generation and sampling (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // logs go to stderr so stdout carries only the printed tables
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // polars truncates long tables to a handful of rows by default
    if env::var_os("POLARS_FMT_MAX_ROWS").is_none() {
        env::set_var("POLARS_FMT_MAX_ROWS", "20");
    }

    // ─── 2) resolve config ───────────────────────────────────────────
    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            WalkthroughConfig::from_yaml_file(path)?
        }
        None => WalkthroughConfig::default(),
    };
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;

    // ─── 3) run ──────────────────────────────────────────────────────
    let stdout = io::stdout();
    let mut walkthrough = Walkthrough::new(config, stdout.lock());
    walkthrough.run()?;
    Ok(())
}
