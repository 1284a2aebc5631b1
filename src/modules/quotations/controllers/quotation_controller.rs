use std::str::FromStr;
use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::config::PricingConfig;
use crate::core::date_range::DateRange;
use crate::core::error::{AppError, Result};
use crate::modules::pricing::models::Tenure;
use crate::modules::quotations::models::{DiscountInput, LineItem};
use crate::modules::quotations::services::TotalsCalculator;

#[derive(Debug, Deserialize)]
pub struct LineItemRequest {
    pub product_id: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub tenure: String,
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
    pub deposit_per_unit: Decimal,
}

impl LineItemRequest {
    fn into_line_item(self) -> Result<LineItem> {
        let tenure = Tenure::from_str(&self.tenure)?;
        let window = match (self.from, self.to) {
            (Some(from), Some(to)) => Some(DateRange::new(from, to)?),
            _ => None,
        };
        LineItem::new(
            self.product_id,
            self.unit_price,
            self.quantity,
            tenure,
            window,
            self.deposit_per_unit,
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct TotalsRequest {
    pub line_items: Vec<LineItemRequest>,
    #[serde(default)]
    pub discount: Option<DiscountInput>,
    /// Defaults to the configured GST rate when omitted
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
}

/// Compute quotation totals for a set of priced lines
/// POST /quotations/totals
pub async fn compute_totals(
    calculator: web::Data<Arc<TotalsCalculator>>,
    pricing: web::Data<PricingConfig>,
    request: web::Json<TotalsRequest>,
) -> std::result::Result<HttpResponse, AppError> {
    let request = request.into_inner();

    let line_items = request
        .line_items
        .into_iter()
        .map(LineItemRequest::into_line_item)
        .collect::<Result<Vec<_>>>()?;

    let tax_rate = request.tax_rate.unwrap_or(pricing.tax_rate);
    let totals = calculator.compute(&line_items, request.discount.as_ref(), tax_rate)?;

    Ok(HttpResponse::Ok().json(totals))
}
