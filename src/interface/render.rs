use std::fmt::Write;

use crate::config::SnapshotStyle;
use crate::machine::constants::ROWS;
use crate::machine::Machine;
use crate::models::Slot;

pub const SNAPSHOT_HEADER: &str = "-----Gym Meal Machine-----";
pub const SNAPSHOT_FOOTER: &str = "----------";

/// Cell shown for a slot with nothing to sell.
const PLACEHOLDER_CELL: &str = "___(0, 0)___";

/// Render the grid as a framed text block, one line per row.
///
/// Stocked cells read `name(calories, units)___`; everything else is a
/// placeholder. With [`SnapshotStyle::Legacy`], a row whose first slot has never
/// held a product is printed as four placeholders whatever the other slots hold.
pub fn render_snapshot(machine: &Machine, style: SnapshotStyle) -> String {
    let mut out = String::new();
    out.push_str(SNAPSHOT_HEADER);
    out.push('\n');

    for row in 0..ROWS {
        let slots = machine.grid().row(row);
        let blank_row = style == SnapshotStyle::Legacy && slots[0].is_unassigned();

        for slot in slots {
            if blank_row {
                out.push_str(PLACEHOLDER_CELL);
            } else {
                render_cell(&mut out, machine, slot);
            }
        }
        out.push('\n');
    }

    out.push_str(SNAPSHOT_FOOTER);
    out.push('\n');
    out
}

fn render_cell(out: &mut String, machine: &Machine, slot: &Slot) {
    match machine.product_in(slot) {
        Some(product) if slot.capacity > 0 => {
            // Writing to a String cannot fail.
            let _ = write!(
                out,
                "{}({}, {})___",
                product.name,
                product.rounded_calorie(),
                slot.capacity
            );
        }
        _ => out.push_str(PLACEHOLDER_CELL),
    }
}
