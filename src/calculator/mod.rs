pub mod calculations;
pub mod constants;

pub use calculations::{boil, validate_ratios};
pub use constants::{OUNCES_PER_POUND, RATIO_SUM_EPSILON};
