use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::date_range::DateRange;
use crate::core::error::AppError;
use crate::modules::availability::services::AvailabilityEvaluator;
use crate::modules::catalog::repositories::ProductRepository;
use crate::modules::reservations::repositories::ReservationRepository;

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
}

/// Availability for a product, optionally for a requested window
/// GET /products/{id}/availability?from=&to=
pub async fn get_availability(
    products: web::Data<Arc<dyn ProductRepository>>,
    reservations: web::Data<Arc<dyn ReservationRepository>>,
    evaluator: web::Data<Arc<AvailabilityEvaluator>>,
    path: web::Path<String>,
    query: web::Query<AvailabilityQuery>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();

    // A half-specified window is a validation error here: unlike pricing
    // previews, an overlap check needs both bounds
    let requested = match (query.from, query.to) {
        (Some(from), Some(to)) => Some(DateRange::new(from, to)?),
        (None, None) => None,
        _ => {
            return Err(AppError::validation(
                "Both from and to are required when requesting a window",
            ))
        }
    };

    let product = products
        .find_by_id(product_id.clone())
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", product_id)))?;

    let snapshot = reservations.list_for_product(&product_id).await?;
    let availability = evaluator.evaluate(&product, &snapshot, requested);

    Ok(HttpResponse::Ok().json(availability))
}
