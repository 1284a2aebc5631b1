use std::str::FromStr;
use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::date_range::DateRange;
use crate::core::error::AppError;
use crate::modules::catalog::repositories::ProductRepository;
use crate::modules::pricing::models::{ProductPriceInput, Tenure};
use crate::modules::pricing::services::{PricelistResolver, RentalPriceCalculator};

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub product_id: String,
    pub tenure: String,
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pricelist: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub product_id: String,
    pub tenure: Tenure,
    pub pricelist: String,
    pub price: Decimal,
    pub deposit: Decimal,
}

/// Quote a rental price and deposit
/// POST /pricing/quote
pub async fn quote(
    products: web::Data<Arc<dyn ProductRepository>>,
    resolver: web::Data<Arc<PricelistResolver>>,
    calculator: web::Data<Arc<RentalPriceCalculator>>,
    request: web::Json<QuoteRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let tenure = Tenure::from_str(&request.tenure)?;

    // Both dates given: validate as a concrete range. A partial selection
    // is treated as "dates not picked yet" and priced as a preview.
    let range = match (request.from, request.to) {
        (Some(from), Some(to)) => Some(DateRange::new(from, to)?),
        _ => None,
    };

    let product = products
        .find_by_id(request.product_id.clone())
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", request.product_id)))?;

    let quote = calculator
        .calculate(
            &ProductPriceInput::from(&product),
            tenure,
            range,
            request.pricelist.as_deref(),
        )?
        .rounded();

    let descriptor = resolver.resolve(request.pricelist.as_deref(), tenure);

    Ok(HttpResponse::Ok().json(QuoteResponse {
        product_id: product.id,
        tenure,
        pricelist: descriptor.pricelist,
        price: quote.price,
        deposit: quote.deposit,
    }))
}

/// List registered pricelists
/// GET /pricing/pricelists
pub async fn list_pricelists(
    resolver: web::Data<Arc<PricelistResolver>>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(resolver.names()))
}
