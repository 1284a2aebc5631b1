// A cart/quotation line.
//
// Unit price and deposit arrive already resolved by the rental price
// calculator. Lines are owned by the quotation aggregate and are immutable
// once an order is placed; a change means a new order, not an edit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::date_range::DateRange;
use crate::core::{AppError, Result};
use crate::modules::pricing::models::Tenure;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,

    /// Rental charge per unit for one tenure unit, already priced
    pub unit_price: Decimal,

    pub quantity: u32,

    pub tenure: Tenure,

    /// Booked window; optional while the line is still a cart preview
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<DateRange>,

    /// Refundable security hold per unit, tracked outside the total
    pub deposit_per_unit: Decimal,
}

impl LineItem {
    pub fn new(
        product_id: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
        tenure: Tenure,
        window: Option<DateRange>,
        deposit_per_unit: Decimal,
    ) -> Result<Self> {
        let product_id = product_id.into();

        if product_id.trim().is_empty() {
            return Err(AppError::validation("Line item product_id cannot be empty"));
        }
        if quantity == 0 {
            return Err(AppError::validation("Line item quantity must be positive"));
        }
        if unit_price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Unit price must be non-negative, got: {}",
                unit_price
            )));
        }
        if deposit_per_unit < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Deposit must be non-negative, got: {}",
                deposit_per_unit
            )));
        }

        Ok(Self {
            product_id,
            unit_price,
            quantity,
            tenure,
            window,
            deposit_per_unit,
        })
    }

    /// Rental charge for the line, unrounded
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Deposit held for the line, unrounded
    pub fn deposit_total(&self) -> Decimal {
        self.deposit_per_unit * Decimal::from(self.quantity)
    }
}
