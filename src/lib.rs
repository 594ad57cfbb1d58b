pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod loader;
pub mod models;

pub use error::{BoilError, Result};
pub use models::{FoodSpec, LineItem, MealPlan, Report};
