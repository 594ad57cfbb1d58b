/// Ounces in a pound; store prices are quoted per pound.
pub const OUNCES_PER_POUND: f64 = 16.0;

/// Tolerance for the ratio-sum check.
///
/// Exact equality with 1.0 rejects plans like 0.1 + 0.2 + 0.7, whose
/// decimal literals do not sum to an exact binary 1.0. 1e-6 sits well below
/// any ratio granularity a plan author uses and well above f64 accumulation
/// error for realistic food counts.
pub const RATIO_SUM_EPSILON: f64 = 1e-6;
