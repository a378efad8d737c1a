use clap::Parser;
use log::info;

use gym_meal_machine::cli::{init_logger, Cli};
use gym_meal_machine::error::Result;
use gym_meal_machine::interface::{write_summary, MachineSummary};
use gym_meal_machine::persistence::{load_fill_records, load_purchase_records, save_journal};
use gym_meal_machine::simulation::run_simulation;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let fills = load_fill_records(&cli.fill_path)?;
    let purchases = load_purchase_records(&cli.purchase_path)?;

    let run = run_simulation(&fills, &purchases, &cli.simulation_config());

    save_journal(&cli.output_path, &run.journal)?;
    info!(
        "Wrote {} log entries to {:?}",
        run.journal.len(),
        cli.output_path
    );

    if let Some(path) = &cli.summary {
        let summary = MachineSummary::new(&run.machine, run.fill_status, run.purchase_status);
        write_summary(path, &summary)?;
        info!("Wrote machine summary to {:?}", path);
    }

    Ok(())
}
