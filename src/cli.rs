use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::config::{SimulationConfig, SnapshotStyle};

/// Gym Meal Machine: stock a vending machine and replay a batch of purchases.
#[derive(Parser, Debug)]
#[command(name = "gmm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tab-delimited fill records: name, price, "protein carbohydrate fat".
    pub fill_path: PathBuf,

    /// Tab-delimited purchase records: mode, denominations, choice, value.
    pub purchase_path: PathBuf,

    /// Transaction log to write (overwritten).
    pub output_path: PathBuf,

    /// Snapshot layout for rows whose first slot is unassigned.
    #[arg(long, value_enum, default_value_t = SnapshotStyle::Legacy)]
    pub snapshot_style: SnapshotStyle,

    /// Also write the final machine state as JSON.
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Increase diagnostic logging (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            snapshot_style: self.snapshot_style,
        }
    }
}

/// Initialise `env_logger`; `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
