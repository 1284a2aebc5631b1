pub mod availability_evaluator;

pub use availability_evaluator::{Availability, AvailabilityEvaluator, AvailabilityStatus};
