use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gym_meal_machine::cli::init_logger;
use gym_meal_machine::generator::{random_fill_records, random_purchase_records, BatchShape};
use gym_meal_machine::persistence::{save_fill_records, save_purchase_records};

#[derive(Parser, Debug)]
#[command(name = "gmm-batchgen")]
#[command(about = "Generate random fill and purchase batches for the gym meal machine")]
struct Args {
    /// Number of fill records
    #[arg(long, default_value = "200")]
    fills: usize,

    /// Number of purchase records
    #[arg(long, default_value = "50")]
    purchases: usize,

    /// Distinct products to draw fill records from
    #[arg(long, default_value = "30")]
    catalogue: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Directory to write fill.txt and purchase.txt into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    let args = Args::parse();
    init_logger(0);

    let shape = BatchShape {
        catalogue_size: args.catalogue,
        fills: args.fills,
        purchases: args.purchases,
        ..BatchShape::default()
    };
    let mut rng = StdRng::seed_from_u64(args.seed);

    let fills = random_fill_records(&mut rng, &shape);
    let purchases = random_purchase_records(&mut rng, &shape);

    if let Err(e) = fs::create_dir_all(&args.out_dir) {
        eprintln!("Error creating {:?}: {}", args.out_dir, e);
        std::process::exit(1);
    }

    let fill_path = args.out_dir.join("fill.txt");
    let purchase_path = args.out_dir.join("purchase.txt");

    if let Err(e) = save_fill_records(&fill_path, &fills) {
        eprintln!("Error writing {:?}: {}", fill_path, e);
        std::process::exit(1);
    }
    if let Err(e) = save_purchase_records(&purchase_path, &purchases) {
        eprintln!("Error writing {:?}: {}", purchase_path, e);
        std::process::exit(1);
    }

    println!(
        "Wrote {} fill records to {:?} and {} purchase records to {:?}",
        fills.len(),
        fill_path,
        purchases.len(),
        purchase_path
    );
}
