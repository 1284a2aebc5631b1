pub mod date_range;
pub mod error;
pub mod money;
pub mod traits;

pub use date_range::DateRange;
pub use error::{AppError, Result};
