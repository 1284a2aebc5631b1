pub mod discount;
pub mod pricelist;

pub use discount::{DiscountKind, DiscountRule};
pub use pricelist::{Pricelist, ProductPriceInput, Rate, RateDescriptor, Tenure, TenureRates};
