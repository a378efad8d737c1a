#[macro_use]
extern crate assert_float_eq;

use std::fs;

use tempfile::TempDir;

use gym_meal_machine::interface::{write_summary, MachineSummary};
use gym_meal_machine::machine::{FillStatus, PurchaseStatus};
use gym_meal_machine::persistence::{load_fill_records, load_purchase_records, save_journal};
use gym_meal_machine::{run_simulation, SimulationConfig, SnapshotStyle};

const BLANK_ROW: &str = "___(0, 0)______(0, 0)______(0, 0)______(0, 0)___";

fn snapshot(first_row: &str) -> String {
    let mut out = String::from("-----Gym Meal Machine-----\n");
    out.push_str(first_row);
    out.push('\n');
    for _ in 0..5 {
        out.push_str(BLANK_ROW);
        out.push('\n');
    }
    out.push_str("----------\n");
    out
}

#[test]
fn test_end_to_end_log_file() {
    let dir = TempDir::new().unwrap();
    let fill_path = dir.path().join("fill.txt");
    let purchase_path = dir.path().join("purchase.txt");
    let output_path = dir.path().join("out.txt");

    fs::write(&fill_path, "ProteinBar\t10\t20 5 2\nProteinBar\t10\t20 5 2\n").unwrap();
    fs::write(&purchase_path, "CASH\t10 5\tPROTEIN\t20\n").unwrap();

    let fills = load_fill_records(&fill_path).unwrap();
    let purchases = load_purchase_records(&purchase_path).unwrap();
    let run = run_simulation(&fills, &purchases, &SimulationConfig::default());
    save_journal(&output_path, &run.journal).unwrap();

    let expected = format!(
        "{}INPUT: CASH\t10 5\tPROTEIN\t20\n\
         PURCHASE: You have bought one ProteinBar\n\
         RETURN: Returning your change: 5 TL\n{}",
        snapshot("ProteinBar(118, 2)______(0, 0)______(0, 0)______(0, 0)___"),
        snapshot("ProteinBar(118, 1)______(0, 0)______(0, 0)______(0, 0)___"),
    );
    assert_eq!(fs::read_to_string(&output_path).unwrap(), expected);

    assert_eq!(run.fill_status, FillStatus::Completed);
    assert_eq!(run.purchase_status, PurchaseStatus::AllDispensed);

    let bar_id = run.machine.registry().find("ProteinBar").unwrap();
    let bar = run.machine.registry().get(bar_id);
    assert_eq!(bar.amount, 2);
    assert_float_absolute_eq!(bar.calorie, 118.0, 1e-9);
}

#[test]
fn test_refusals_are_logged_with_returns() {
    let fills = gym_meal_machine::persistence::parse_fill_records(
        "Oats\t25\t10 60 7\nWhey\t40\t24 3 1.5\n",
    )
    .unwrap();
    let purchases = gym_meal_machine::persistence::parse_purchase_records(
        "CASH\t20\tCARB\t58\n\
         CASH\t50 4\tPROTEIN\t25\n\
         CASH\t10\tFAT\t30\n\
         CASH\t100\tNUMBER\t30\n\
         CASH\t100\tNUMBER\t9\n",
    )
    .unwrap();

    let run = run_simulation(&fills, &purchases, &SimulationConfig::default());
    let lines: Vec<String> = run.journal.events().map(|e| e.to_string()).collect();

    assert_eq!(
        lines,
        vec![
            "INPUT: CASH\t20\tCARB\t58",
            "INFO: Insufficient money, try again with more money.",
            "RETURN: Returning your change: 20 TL",
            "INPUT: CASH\t50 4\tPROTEIN\t25",
            "INFO: The machine does not accept 4 TL.",
            "PURCHASE: You have bought one Whey",
            "RETURN: Returning your change: 10 TL",
            "INPUT: CASH\t10\tFAT\t30",
            "INFO: Product not found, your money will be returned.",
            "RETURN: Returning your change: 10 TL",
            "INPUT: CASH\t100\tNUMBER\t30",
            "INFO: Number cannot be accepted. Please try again with another number.",
            "RETURN: Returning your change: 100 TL",
            "INPUT: CASH\t100\tNUMBER\t9",
            "INFO: This slot is empty, your money will be returned.",
            "RETURN: Returning your change: 100 TL",
        ]
    );
    assert_eq!(run.purchase_status.code(), -1);
}

#[test]
fn test_summary_file_and_full_style() {
    let dir = TempDir::new().unwrap();
    let fills = gym_meal_machine::persistence::parse_fill_records("Bar\t10\t20 5 2\n").unwrap();
    let config = SimulationConfig {
        snapshot_style: SnapshotStyle::Full,
    };

    let run = run_simulation(&fills, &[], &config);
    let summary = MachineSummary::new(&run.machine, run.fill_status, run.purchase_status);
    let path = dir.path().join("summary.json");
    write_summary(&path, &summary).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["purchase_status"], 0);
    assert_eq!(value["units_in_stock"], 1);
    assert_eq!(value["slots"][0]["product"], "Bar");

    // No purchases: both snapshots are identical.
    let rendered = run.journal.render();
    let (first, second) = rendered.split_at(rendered.len() / 2);
    assert_eq!(first, second);
}
