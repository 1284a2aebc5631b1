use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::core::error::{AppError, Result};
use crate::core::money;
use crate::modules::quotations::models::{DiscountInput, LineItem, Totals};

/// Computes quotation/invoice totals.
///
/// The same calculation backs the cart summary, the quotation PDF and the
/// bill, so the ordering rule lives in exactly one place: discount comes
/// off the subtotal first, tax applies to what remains.
pub struct TotalsCalculator;

impl TotalsCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(
        &self,
        line_items: &[LineItem],
        discount: Option<&DiscountInput>,
        tax_rate: Decimal,
    ) -> Result<Totals> {
        self.compute_at(line_items, discount, tax_rate, Utc::now())
    }

    /// Same as [`compute`](Self::compute) with an injectable clock for
    /// time-bounded discount rules
    pub fn compute_at(
        &self,
        line_items: &[LineItem],
        discount: Option<&DiscountInput>,
        tax_rate: Decimal,
        now: DateTime<Utc>,
    ) -> Result<Totals> {
        money::validate_fraction("tax rate", tax_rate).map_err(AppError::Validation)?;

        // Intermediate amounts stay unrounded; rounding happens once, here,
        // at the aggregation point
        let subtotal: Decimal = line_items.iter().map(|line| line.line_total()).sum();
        let deposit: Decimal = line_items.iter().map(|line| line.deposit_total()).sum();

        let discount_amount = match discount {
            None => Decimal::ZERO,
            // Pre-resolved amounts are still capped at the subtotal so a
            // stale coupon can never push the total negative
            Some(DiscountInput::Amount(value)) => {
                if *value < Decimal::ZERO {
                    return Err(AppError::validation(format!(
                        "Discount amount must be non-negative, got: {}",
                        value
                    )));
                }
                (*value).min(subtotal)
            }
            Some(DiscountInput::Rule(rule)) => {
                if rule.is_active_at(now) {
                    rule.amount_off(subtotal)
                } else {
                    Decimal::ZERO
                }
            }
        };

        // Discount-then-tax; the reverse order would tax money the
        // customer never pays
        let taxes = (subtotal - discount_amount) * tax_rate;

        let subtotal = money::round_display(subtotal);
        let discount = money::round_display(discount_amount);
        let taxes = money::round_display(taxes);
        let total = subtotal - discount + taxes;
        let deposit = money::round_display(deposit);

        Ok(Totals {
            subtotal,
            discount,
            taxes,
            total,
            deposit,
        })
    }
}

impl Default for TotalsCalculator {
    fn default() -> Self {
        Self::new()
    }
}
