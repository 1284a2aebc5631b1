pub mod availability;
pub mod catalog;
pub mod health;
pub mod pricing;
pub mod quotations;
pub mod reservations;
