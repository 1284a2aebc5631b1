pub mod line_item;
pub mod totals;

pub use line_item::LineItem;
pub use totals::{DiscountInput, Totals};
