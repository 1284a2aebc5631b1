// Canonical product shape for the pricing and availability engine.
//
// The storefront and admin back-office pass ad hoc shapes around; everything
// entering this crate is adapted to this one type at the boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A rentable catalog item, reduced to the fields pricing and availability
/// need: base price, on-hand stock and the rentable flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier (ERP reference, opaque here)
    pub id: String,

    /// Display name
    pub name: String,

    /// Base/sales price in rupees; all tenure rates derive from this
    pub base_price: Decimal,

    /// Units physically in stock
    pub qty_on_hand: u32,

    /// Whether the item is offered for rent at all
    pub rentable: bool,
}

impl Product {
    /// Create a product with validation
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_price: Decimal,
        qty_on_hand: u32,
        rentable: bool,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(AppError::invalid_product("Product id cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(AppError::invalid_product("Product name cannot be empty"));
        }
        if base_price <= Decimal::ZERO {
            return Err(AppError::invalid_product(format!(
                "Base price must be positive, got: {}",
                base_price
            )));
        }

        Ok(Self {
            id,
            name,
            base_price,
            qty_on_hand,
            rentable,
        })
    }
}
