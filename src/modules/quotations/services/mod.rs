pub mod totals_calculator;

pub use totals_calculator::TotalsCalculator;
