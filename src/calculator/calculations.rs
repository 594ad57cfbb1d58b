use crate::calculator::constants::*;
use crate::error::{BoilError, Result};
use crate::models::{LineItem, MealPlan, Report};

/// Check that the food ratios account for the whole meal.
///
/// The ratios must sum to 1 (within [`RATIO_SUM_EPSILON`]); anything else
/// means the plan over- or under-feeds the group.
pub fn validate_ratios(plan: &MealPlan) -> Result<()> {
    let total: f64 = plan.foods.iter().map(|(_, spec)| spec.ratio).sum();
    if (total - 1.0).abs() > RATIO_SUM_EPSILON {
        return Err(BoilError::RatioSum(total));
    }
    Ok(())
}

/// Determine the weight and price of every item in a meal plan.
///
/// For each food, takes its share of the group's total edible ounces,
/// scales it up by the food's purchase multiplier to get the raw ounces to
/// ask for at the counter, and prices that quantity per pound. Line items
/// come out in the plan's declaration order, unrounded.
pub fn boil(plan: &MealPlan) -> Report {
    let total_edible = plan.total_edible_ounces();

    let mut items = Vec::with_capacity(plan.foods.len());
    for (name, spec) in &plan.foods {
        let edible_share = total_edible * spec.ratio;
        let purchase_ounces = edible_share * spec.purchase_multiplier();
        let estimated_price = (purchase_ounces / OUNCES_PER_POUND) * spec.price_per_pound;

        items.push(LineItem {
            name: name.clone(),
            purchase_ounces,
            estimated_price,
        });
    }

    Report {
        items,
        people: plan.people,
        ounces_per_person: plan.ounces_per_person,
    }
}
