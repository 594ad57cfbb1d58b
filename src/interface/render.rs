use crate::calculator::OUNCES_PER_POUND;
use crate::models::Report;

/// Print the shopping report to stdout.
///
/// Weights and prices are rounded to two decimals here only; the report
/// itself carries full precision so the total does not accumulate rounding.
pub fn display_report(report: &Report) {
    println!("for {} people you'll need:", report.people);

    for item in &report.items {
        println!(
            "-  {:.2} pounds of {}: ${:.2}",
            item.purchase_ounces / OUNCES_PER_POUND,
            item.name,
            item.estimated_price
        );
    }

    println!("{} ounces of food per person", report.ounces_per_person);
    println!("total cost: ${:.2}", report.total_price());
}
