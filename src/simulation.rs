use log::info;

use crate::config::SimulationConfig;
use crate::interface::render_snapshot;
use crate::machine::{FillStatus, Journal, Machine, PurchaseStatus};
use crate::models::{FillRecord, PurchaseRecord};

/// Everything a batch run produces.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub machine: Machine,
    pub journal: Journal,
    pub fill_status: FillStatus,
    pub purchase_status: PurchaseStatus,
}

/// Fill an empty machine, snapshot it, run the purchases, snapshot it again.
pub fn run_simulation(
    fills: &[FillRecord],
    purchases: &[PurchaseRecord],
    config: &SimulationConfig,
) -> SimulationRun {
    let mut machine = Machine::new();
    let mut journal = Journal::new();

    let fill_status = machine.fill(fills, &mut journal);
    info!(
        "Fill finished with status {}: {} units in {} products",
        fill_status.code(),
        machine.grid().total_units(),
        machine.registry().len()
    );
    journal.record_snapshot(render_snapshot(&machine, config.snapshot_style));

    let purchase_status = machine.purchase(purchases, &mut journal);
    info!(
        "Purchases finished with status {}: {} units left",
        purchase_status.code(),
        machine.grid().total_units()
    );
    journal.record_snapshot(render_snapshot(&machine, config.snapshot_style));

    SimulationRun {
        machine,
        journal,
        fill_status,
        purchase_status,
    }
}
