use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One menu item in a meal plan.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodSpec {
    /// Fraction of the meal's total edible weight this food contributes.
    pub ratio: f64,

    /// Fraction of the purchased raw weight that is actually eaten.
    pub edible_percentage: f64,

    /// Vendor price per pound of raw weight.
    pub price_per_pound: f64,
}

impl FoodSpec {
    /// Multiplier from edible ounces to raw (store) ounces.
    ///
    /// Adds the non-edible fraction on top of the edible weight, so it
    /// ranges from 1.0 (fully edible) up to 2.0 (fully inedible).
    #[inline]
    pub fn purchase_multiplier(&self) -> f64 {
        (1.0 - self.edible_percentage) + 1.0
    }
}

/// A declarative meal plan, read once from a YAML document.
#[derive(Debug, Clone, Deserialize)]
pub struct MealPlan {
    /// Number of guests.
    pub people: u32,

    /// Target edible portion per guest, in ounces.
    pub ounces_per_person: f64,

    /// Menu items, keyed by food name, in document order.
    #[serde(deserialize_with = "foods_in_document_order")]
    pub foods: Vec<(String, FoodSpec)>,
}

impl MealPlan {
    /// Total edible ounces the whole group will eat.
    #[inline]
    pub fn total_edible_ounces(&self) -> f64 {
        self.people as f64 * self.ounces_per_person
    }
}

/// Deserialize the `foods` mapping into a vec of (name, spec) pairs.
///
/// The report must list foods in the order the plan declares them, so the
/// mapping cannot go through a `HashMap` (arbitrary order) or `BTreeMap`
/// (sorted order).
fn foods_in_document_order<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<(String, FoodSpec)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FoodMapVisitor;

    impl<'de> Visitor<'de> for FoodMapVisitor {
        type Value = Vec<(String, FoodSpec)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a mapping of food name to food spec")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut foods = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, FoodSpec>()? {
                foods.push(entry);
            }
            Ok(foods)
        }
    }

    deserializer.deserialize_map(FoodMapVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> MealPlan {
        MealPlan {
            people: 4,
            ounces_per_person: 8.0,
            foods: vec![(
                "shrimp".to_string(),
                FoodSpec {
                    ratio: 1.0,
                    edible_percentage: 0.6,
                    price_per_pound: 10.0,
                },
            )],
        }
    }

    #[test]
    fn test_total_edible_ounces() {
        let plan = sample_plan();
        assert!((plan.total_edible_ounces() - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_purchase_multiplier() {
        let spec = &sample_plan().foods[0].1;
        assert!((spec.purchase_multiplier() - 1.4).abs() < 1e-9);

        let fully_edible = FoodSpec {
            ratio: 1.0,
            edible_percentage: 1.0,
            price_per_pound: 5.0,
        };
        assert!((fully_edible.purchase_multiplier() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_foods_keep_document_order() {
        let yaml = r#"
people: 2
ounces_per_person: 6
foods:
  zucchini: {ratio: 0.2, edible_percentage: 0.9, price_per_pound: 2.0}
  andouille: {ratio: 0.3, edible_percentage: 1.0, price_per_pound: 7.0}
  crab: {ratio: 0.5, edible_percentage: 0.4, price_per_pound: 12.0}
"#;
        let plan: MealPlan = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<&str> = plan.foods.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["zucchini", "andouille", "crab"]);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let yaml = r#"
people: 2
ounces_per_person: 6
foods:
  shrimp: {ratio: 1.0, price_per_pound: 10.0}
"#;
        let err = serde_yaml::from_str::<MealPlan>(yaml).unwrap_err();
        assert!(err.to_string().contains("edible_percentage"));
    }
}
