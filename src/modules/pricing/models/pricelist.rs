use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::catalog::Product;
use crate::modules::pricing::models::DiscountRule;

/// Rental duration unit a price and deposit are quoted against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tenure {
    Hour,
    Day,
    Week,
    Month,
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tenure::Hour => write!(f, "hour"),
            Tenure::Day => write!(f, "day"),
            Tenure::Week => write!(f, "week"),
            Tenure::Month => write!(f, "month"),
        }
    }
}

impl FromStr for Tenure {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hour" => Ok(Tenure::Hour),
            "day" => Ok(Tenure::Day),
            "week" => Ok(Tenure::Week),
            "month" => Ok(Tenure::Month),
            other => Err(AppError::invalid_tenure(format!(
                "{} (expected one of hour, day, week, month)",
                other
            ))),
        }
    }
}

/// How a tenure maps to money: a fraction of the base price, or a flat rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Rate {
    /// Fraction of the product's base price (0.28 = 28% per tenure unit)
    Multiplier(Decimal),
    /// Flat rupee amount per tenure unit, ignoring the base price
    Absolute(Decimal),
}

impl Rate {
    /// Charge for one tenure unit of the given product
    pub fn amount_for(&self, product: &ProductPriceInput) -> Decimal {
        match self {
            Rate::Multiplier(m) => product.base_price * m,
            Rate::Absolute(rate) => *rate,
        }
    }

    fn value(&self) -> Decimal {
        match self {
            Rate::Multiplier(v) | Rate::Absolute(v) => *v,
        }
    }
}

/// One rate per tenure; construction guarantees every tenure resolves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenureRates {
    pub hour: Rate,
    pub day: Rate,
    pub week: Rate,
    pub month: Rate,
}

impl TenureRates {
    pub fn new(hour: Rate, day: Rate, week: Rate, month: Rate) -> Result<Self> {
        for (tenure, rate) in [
            (Tenure::Hour, hour),
            (Tenure::Day, day),
            (Tenure::Week, week),
            (Tenure::Month, month),
        ] {
            if rate.value() < Decimal::ZERO {
                return Err(AppError::validation(format!(
                    "Rate for tenure {} must be non-negative, got {}",
                    tenure,
                    rate.value()
                )));
            }
        }

        Ok(Self {
            hour,
            day,
            week,
            month,
        })
    }

    pub fn get(&self, tenure: Tenure) -> Rate {
        match tenure {
            Tenure::Hour => self.hour,
            Tenure::Day => self.day,
            Tenure::Week => self.week,
            Tenure::Month => self.month,
        }
    }
}

/// A named rate table plus discount rules, selectable per customer segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pricelist {
    pub name: String,
    pub rates: TenureRates,
    /// Fraction of base price held as refundable security deposit
    pub deposit_fraction: Decimal,
    pub discounts: Vec<DiscountRule>,
}

impl Pricelist {
    pub fn new(
        name: impl Into<String>,
        rates: TenureRates,
        deposit_fraction: Decimal,
        discounts: Vec<DiscountRule>,
    ) -> Result<Self> {
        crate::core::money::validate_fraction("deposit fraction", deposit_fraction)
            .map_err(AppError::Validation)?;

        Ok(Self {
            name: name.into(),
            rates,
            deposit_fraction,
            discounts,
        })
    }
}

/// Resolved pricing for one (pricelist, tenure) pair
#[derive(Debug, Clone, Serialize)]
pub struct RateDescriptor {
    pub pricelist: String,
    pub tenure: Tenure,
    pub rate: Rate,
    pub deposit_fraction: Decimal,
    pub discounts: Vec<DiscountRule>,
}

/// Canonical pricing input.
///
/// Callers adapt whatever product shape they hold (catalog record, cart row,
/// quick-view payload) to this at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPriceInput {
    pub product_id: String,
    pub base_price: Decimal,
}

impl From<&Product> for ProductPriceInput {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            base_price: product.base_price,
        }
    }
}
