use clap::Parser;

/// seafood-boil — Calculate shopping weights and costs for a seafood boil.
#[derive(Parser, Debug)]
#[command(name = "seafood-boil")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Meal plan to parse. Detailed in a .yaml file.
    #[arg(short, long)]
    pub input: String,
}
