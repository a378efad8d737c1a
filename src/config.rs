use clap::ValueEnum;

/// How machine snapshots lay out rows whose first slot is unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SnapshotStyle {
    /// Blank the whole row when its first slot has never held a product.
    #[default]
    Legacy,
    /// Render every slot on its own merits.
    Full,
}

/// Run-time options for a simulation.
#[derive(Debug, Clone, Default)]
pub struct SimulationConfig {
    pub snapshot_style: SnapshotStyle,
}
