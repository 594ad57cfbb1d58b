use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::MealPlan;

/// Load a meal plan from a YAML file.
///
/// Fails on unreadable files, malformed YAML, and missing or mistyped
/// fields. Performs no semantic validation of the parsed plan.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    let content = fs::read_to_string(path)?;
    let plan: MealPlan = serde_yaml::from_str(&content)?;
    Ok(plan)
}
