/// One purchase recommendation in a boil report.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Name of the food, as keyed in the plan.
    pub name: String,

    /// Raw ounces to buy from the store, waste included.
    pub purchase_ounces: f64,

    /// Estimated cost of that quantity.
    pub estimated_price: f64,
}

/// The computed shopping report for a meal plan.
///
/// Items appear in the plan's declaration order. Values are kept at full
/// precision; rounding happens at render time.
#[derive(Debug, Clone)]
pub struct Report {
    pub items: Vec<LineItem>,

    /// Guest count echoed from the plan.
    pub people: u32,

    /// Per-guest edible portion echoed from the plan.
    pub ounces_per_person: f64,
}

impl Report {
    /// Sum of all item prices, unrounded.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.estimated_price).sum()
    }
}
