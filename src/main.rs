use clap::Parser;

use seafood_boil_rs::calculator::{boil, validate_ratios};
use seafood_boil_rs::cli::Cli;
use seafood_boil_rs::error::Result;
use seafood_boil_rs::interface::display_report;
use seafood_boil_rs::loader::load_plan;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Parse the meal plan from yaml
    let plan = load_plan(&cli.input)?;

    // Make sure the ratios in the meal plan cover 100% of the meal
    validate_ratios(&plan)?;

    // Determine weights and prices, then print the shopping report
    let report = boil(&plan);
    display_report(&report);

    Ok(())
}
