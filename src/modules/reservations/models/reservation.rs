use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::date_range::DateRange;

/// Lifecycle state of a reservation.
///
/// Owned by the order-management flow; the engine only consumes it to decide
/// whether a reservation still holds a physical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Reserved,
    PickedUp,
    Returned,
    Late,
    Cancelled,
}

impl ReservationStatus {
    /// Whether the reservation still holds a unit against availability.
    ///
    /// Late returns still physically hold the item, so they count.
    pub fn holds_unit(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Reserved | ReservationStatus::PickedUp | ReservationStatus::Late
        )
    }

    /// Legal lifecycle moves; anything else is rejected
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, next),
            (Reserved, PickedUp)
                | (Reserved, Cancelled)
                | (PickedUp, Returned)
                | (PickedUp, Late)
                | (Late, Returned)
        )
    }
}

/// A unit committed to a customer for a date range.
///
/// One record holds exactly one unit. Records are never deleted; cancelled
/// and returned reservations stay behind as the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub product_id: String,
    pub window: DateRange,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(product_id: impl Into<String>, window: DateRange) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            product_id: product_id.into(),
            window,
            status: ReservationStatus::Reserved,
            created_at: now,
            updated_at: now,
        }
    }
}
