use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// How a discount value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Percentage of the amount being discounted, 0..=100
    Percent,
    /// Flat rupee amount, capped at the amount being discounted
    Fixed,
}

/// A discount rule, optionally scoped by code and time-bounded.
///
/// Rules carrying a code never auto-apply; they take effect only when the
/// code is presented to the totals calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountRule {
    pub kind: DiscountKind,
    pub value: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<DateTime<Utc>>,
}

impl DiscountRule {
    pub fn percent(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO || value > Decimal::from(100) {
            return Err(AppError::validation(format!(
                "Percent discount must be in [0, 100], got {}",
                value
            )));
        }
        Ok(Self {
            kind: DiscountKind::Percent,
            value,
            code: None,
            valid_from: None,
            valid_to: None,
        })
    }

    pub fn fixed(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Fixed discount must be non-negative, got {}",
                value
            )));
        }
        Ok(Self {
            kind: DiscountKind::Fixed,
            value,
            code: None,
            valid_from: None,
            valid_to: None,
        })
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn valid_between(
        mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        self.valid_from = from;
        self.valid_to = to;
        self
    }

    /// Time-bound check.
    ///
    /// Bounds are tested against the moment of pricing, not against the
    /// rental window being priced.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        if let Some(from) = self.valid_from {
            if now < from {
                return false;
            }
        }
        if let Some(to) = self.valid_to {
            if now > to {
                return false;
            }
        }
        true
    }

    /// Whether the rule applies without a code being presented
    pub fn auto_applies_at(&self, now: DateTime<Utc>) -> bool {
        self.code.is_none() && self.is_active_at(now)
    }

    /// Rupees taken off `amount`, clamped to [0, amount] so a discount can
    /// never push a charge negative
    pub fn amount_off(&self, amount: Decimal) -> Decimal {
        let raw = match self.kind {
            DiscountKind::Percent => amount * self.value / Decimal::from(100),
            DiscountKind::Fixed => self.value,
        };
        raw.clamp(Decimal::ZERO, amount.max(Decimal::ZERO))
    }
}
