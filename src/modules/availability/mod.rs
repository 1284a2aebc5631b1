// Availability module: date-interval overlap against reservations

pub mod controllers;
pub mod services;

pub use services::{Availability, AvailabilityEvaluator, AvailabilityStatus};
