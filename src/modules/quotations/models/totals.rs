use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::pricing::models::DiscountRule;

/// Discount input to the totals calculator: either an amount already
/// resolved upstream, or a rule to resolve against the subtotal.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DiscountInput {
    Rule(DiscountRule),
    Amount(Decimal),
}

/// Derived money summary of a quotation, cart or invoice.
///
/// Never stored; recomputed from line items on every change so it cannot
/// drift from its source. The deposit is refundable, not revenue, and is
/// never folded into `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub taxes: Decimal,
    pub total: Decimal,
    pub deposit: Decimal,
}
