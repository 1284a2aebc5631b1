use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::date_range::DateRange;
use crate::core::error::AppError;
use crate::modules::reservations::services::ReservationService;

#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub product_id: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Book one unit for a window
/// POST /reservations
pub async fn create_reservation(
    service: web::Data<Arc<ReservationService>>,
    request: web::Json<CreateReservationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let window = DateRange::new(request.from, request.to)?;
    let reservation = service.reserve(&request.product_id, window).await?;

    Ok(HttpResponse::Created().json(reservation))
}

/// Reservation history for a product, any status
/// GET /products/{id}/reservations
pub async fn list_product_reservations(
    service: web::Data<Arc<ReservationService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let reservations = service.list_for_product(&product_id).await?;

    Ok(HttpResponse::Ok().json(reservations))
}

/// Mark a reservation picked up
/// POST /reservations/{id}/pickup
pub async fn pick_up(
    service: web::Data<Arc<ReservationService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let reservation = service.pick_up(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reservation))
}

/// Mark a reservation returned
/// POST /reservations/{id}/return
pub async fn return_item(
    service: web::Data<Arc<ReservationService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let reservation = service.return_item(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reservation))
}

/// Mark a reservation late
/// POST /reservations/{id}/late
pub async fn mark_late(
    service: web::Data<Arc<ReservationService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let reservation = service.mark_late(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reservation))
}

/// Cancel a reservation that has not been picked up
/// POST /reservations/{id}/cancel
pub async fn cancel(
    service: web::Data<Arc<ReservationService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let reservation = service.cancel(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reservation))
}
