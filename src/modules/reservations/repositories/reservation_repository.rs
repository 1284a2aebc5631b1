use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::modules::reservations::models::{Reservation, ReservationStatus};

/// Store of reservation records for availability and lifecycle updates.
///
/// Records are append-and-update only; there is deliberately no delete.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn create(&self, reservation: Reservation) -> Result<Reservation>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>>;

    /// All reservations ever taken for a product, any status
    async fn list_for_product(&self, product_id: &str) -> Result<Vec<Reservation>>;

    async fn set_status(&self, id: Uuid, status: ReservationStatus) -> Result<Reservation>;
}

/// In-memory reservation store, the snapshot the evaluator computes against
pub struct InMemoryReservationRepository {
    reservations: RwLock<HashMap<Uuid, Reservation>>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self {
            reservations: RwLock::new(HashMap::new()),
        }
    }

}

impl Default for InMemoryReservationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn create(&self, reservation: Reservation) -> Result<Reservation> {
        let mut store = self.reservations.write().await;
        store.insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>> {
        Ok(self.reservations.read().await.get(&id).cloned())
    }

    async fn list_for_product(&self, product_id: &str) -> Result<Vec<Reservation>> {
        let store = self.reservations.read().await;
        let mut reservations: Vec<Reservation> = store
            .values()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect();
        reservations.sort_by_key(|r| r.window.from);
        Ok(reservations)
    }

    async fn set_status(&self, id: Uuid, status: ReservationStatus) -> Result<Reservation> {
        let mut store = self.reservations.write().await;
        let reservation = store.get_mut(&id).ok_or_else(|| {
            crate::core::AppError::not_found(format!("Reservation {}", id))
        })?;
        reservation.status = status;
        reservation.updated_at = chrono::Utc::now();
        Ok(reservation.clone())
    }
}
