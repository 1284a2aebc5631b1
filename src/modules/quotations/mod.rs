// Quotations module: line items and totals shared by cart, quotation and bill

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{DiscountInput, LineItem, Totals};
pub use services::TotalsCalculator;
