use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::date_range::DateRange;
use crate::core::error::{AppError, Result};
use crate::core::money;
use crate::modules::pricing::models::{ProductPriceInput, Tenure};
use crate::modules::pricing::services::PricelistResolver;

/// Rental charge and refundable deposit for one unit and one tenure unit.
///
/// Amounts are unrounded; callers round via [`rounded`](Quote::rounded) at
/// the display boundary only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub price: Decimal,
    pub deposit: Decimal,
}

impl Quote {
    /// Round both amounts to the minor currency unit for display
    pub fn rounded(&self) -> Quote {
        Quote {
            price: money::round_display(self.price),
            deposit: money::round_display(self.deposit),
        }
    }
}

/// Computes the rental charge and security deposit for a booking.
///
/// Pure: no hidden state, so a fixed (product, tenure, pricelist) input
/// always returns the same quote.
pub struct RentalPriceCalculator {
    resolver: Arc<PricelistResolver>,
}

impl RentalPriceCalculator {
    pub fn new(resolver: Arc<PricelistResolver>) -> Self {
        Self { resolver }
    }

    /// Price one unit of `tenure` for the product.
    ///
    /// `range` may be `None` while the customer has not picked dates yet;
    /// the quote is then a deterministic single-tenure-unit preview rather
    /// than an error. A concrete range is already validated by
    /// [`DateRange::new`], so it cannot arrive inverted.
    pub fn calculate(
        &self,
        product: &ProductPriceInput,
        tenure: Tenure,
        range: Option<DateRange>,
        pricelist_name: Option<&str>,
    ) -> Result<Quote> {
        if product.base_price <= Decimal::ZERO {
            return Err(AppError::invalid_product(format!(
                "Base price must be positive to quote a rental, got {} for {}",
                product.base_price, product.product_id
            )));
        }

        let descriptor = self.resolver.resolve(pricelist_name, tenure);
        let mut price = descriptor.rate.amount_for(product);

        // Discount validity is a storefront concern: bounds are checked
        // against now, not against the rental window
        let now = Utc::now();
        for rule in descriptor
            .discounts
            .iter()
            .filter(|rule| rule.auto_applies_at(now))
        {
            price -= rule.amount_off(price);
        }

        let deposit = product.base_price * descriptor.deposit_fraction;

        tracing::debug!(
            product_id = %product.product_id,
            tenure = %tenure,
            pricelist = %descriptor.pricelist,
            range = ?range,
            price = %price,
            deposit = %deposit,
            "Quoted rental"
        );

        Ok(Quote { price, deposit })
    }
}
