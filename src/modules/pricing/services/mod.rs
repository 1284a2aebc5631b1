pub mod pricelist_resolver;
pub mod rental_price_calculator;

pub use pricelist_resolver::{PricelistResolver, DEFAULT_PRICELIST};
pub use rental_price_calculator::{Quote, RentalPriceCalculator};
