use std::sync::Arc;

use uuid::Uuid;

use crate::core::date_range::DateRange;
use crate::core::error::{AppError, Result};
use crate::modules::catalog::repositories::ProductRepository;
use crate::modules::reservations::models::{Reservation, ReservationStatus};
use crate::modules::reservations::repositories::ReservationRepository;

/// Reservation lifecycle: booking and the pickup/return/cancel transitions.
///
/// The snapshot-vs-booking race (two customers grabbing the last unit) is a
/// double-booking risk owned by the order-creation flow upstream; this
/// service only enforces record-level rules.
pub struct ReservationService {
    reservations: Arc<dyn ReservationRepository>,
    products: Arc<dyn ProductRepository>,
}

impl ReservationService {
    pub fn new(
        reservations: Arc<dyn ReservationRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            reservations,
            products,
        }
    }

    /// Book one unit of a product for a window
    pub async fn reserve(&self, product_id: &str, window: DateRange) -> Result<Reservation> {
        let product = self
            .products
            .find_by_id(product_id.to_string())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {}", product_id)))?;

        if !product.rentable {
            return Err(AppError::invalid_product(format!(
                "Product {} is not offered for rent",
                product_id
            )));
        }

        let reservation = Reservation::new(product_id, window);
        tracing::info!(
            reservation_id = %reservation.id,
            product_id = %product_id,
            from = %window.from,
            to = %window.to,
            "Reservation created"
        );
        self.reservations.create(reservation).await
    }

    pub async fn list_for_product(&self, product_id: &str) -> Result<Vec<Reservation>> {
        self.reservations.list_for_product(product_id).await
    }

    pub async fn pick_up(&self, id: Uuid) -> Result<Reservation> {
        self.transition(id, ReservationStatus::PickedUp).await
    }

    pub async fn return_item(&self, id: Uuid) -> Result<Reservation> {
        self.transition(id, ReservationStatus::Returned).await
    }

    pub async fn mark_late(&self, id: Uuid) -> Result<Reservation> {
        self.transition(id, ReservationStatus::Late).await
    }

    pub async fn cancel(&self, id: Uuid) -> Result<Reservation> {
        self.transition(id, ReservationStatus::Cancelled).await
    }

    async fn transition(&self, id: Uuid, next: ReservationStatus) -> Result<Reservation> {
        let reservation = self
            .reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Reservation {}", id)))?;

        if !reservation.status.can_transition_to(next) {
            return Err(AppError::validation(format!(
                "Reservation {} cannot move from {:?} to {:?}",
                id, reservation.status, next
            )));
        }

        let updated = self.reservations.set_status(id, next).await?;
        tracing::info!(
            reservation_id = %id,
            status = ?next,
            "Reservation status updated"
        );
        Ok(updated)
    }
}
