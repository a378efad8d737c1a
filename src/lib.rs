pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod interface;
pub mod machine;
pub mod models;
pub mod persistence;
pub mod simulation;

pub use config::{SimulationConfig, SnapshotStyle};
pub use error::{GmmError, Result};
pub use machine::Machine;
pub use models::{Choice, FillRecord, Product, PurchaseRecord};
pub use simulation::{run_simulation, SimulationRun};
