pub mod render;
pub mod summary;

pub use render::{render_snapshot, SNAPSHOT_FOOTER, SNAPSHOT_HEADER};
pub use summary::{write_summary, MachineSummary};
