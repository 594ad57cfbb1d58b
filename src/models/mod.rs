pub mod meal;
pub mod report;

pub use meal::{FoodSpec, MealPlan};
pub use report::{LineItem, Report};
