// Pricing module: pricelist resolution and rental price calculation

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{DiscountKind, DiscountRule, Pricelist, ProductPriceInput, Rate, Tenure};
pub use services::{PricelistResolver, Quote, RentalPriceCalculator, DEFAULT_PRICELIST};
