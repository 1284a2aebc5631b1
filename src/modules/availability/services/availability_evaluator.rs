use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::date_range::DateRange;
use crate::modules::catalog::Product;
use crate::modules::reservations::models::Reservation;

/// Three-tier availability bucket shown on product cards and detail pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    /// No overlapping holds at all
    Green,
    /// Some units held for an overlapping window, at least one free
    Yellow,
    /// Every on-hand unit held, or the product is not rentable
    Red,
}

/// Availability bucket plus a short human-readable summary.
///
/// The wording is presentational; the bucket thresholds are contract.
#[derive(Debug, Clone, Serialize)]
pub struct Availability {
    pub status: AvailabilityStatus,
    pub text: String,
}

/// Computes availability from the product snapshot and its reservations.
///
/// Pure: callers fetch a consistent reservation snapshot first and re-run
/// the evaluation whenever the requested window changes.
pub struct AvailabilityEvaluator;

impl AvailabilityEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate availability for a requested window, or aggregate
    /// availability when no window is given.
    ///
    /// Without a window, a unit counts as held while any active
    /// reservation's window has not yet ended. Aggregate red therefore
    /// means every unit is held now or by a future booking, not that the
    /// product will never be free.
    pub fn evaluate(
        &self,
        product: &Product,
        reservations: &[Reservation],
        requested: Option<DateRange>,
    ) -> Availability {
        self.evaluate_at(product, reservations, requested, Utc::now())
    }

    /// Same as [`evaluate`](Self::evaluate) with an injectable clock.
    /// `now` only feeds the aggregate not-yet-ended filter; windowed
    /// evaluation ignores it.
    pub fn evaluate_at(
        &self,
        product: &Product,
        reservations: &[Reservation],
        requested: Option<DateRange>,
        now: DateTime<Utc>,
    ) -> Availability {
        if !product.rentable {
            return Availability {
                status: AvailabilityStatus::Red,
                text: "Not available for rent".to_string(),
            };
        }

        if product.qty_on_hand == 0 {
            return Availability {
                status: AvailabilityStatus::Red,
                text: "Out of stock".to_string(),
            };
        }

        // A reservation holds a unit while its status is reserved,
        // picked_up or late. Overlap is inclusive on both boundaries.
        let held = reservations
            .iter()
            .filter(|r| r.status.holds_unit())
            .filter(|r| match requested {
                Some(range) => r.window.overlaps(&range),
                None => r.window.ends_at_or_after(now),
            })
            .count();

        let qty = product.qty_on_hand as usize;

        if held == 0 {
            return Availability {
                status: AvailabilityStatus::Green,
                text: "Available".to_string(),
            };
        }

        if held < qty {
            let left = qty - held;
            let text = match requested {
                Some(_) => format!("Only {} left for these dates", left),
                None => format!("Only {} left right now", left),
            };
            return Availability {
                status: AvailabilityStatus::Yellow,
                text,
            };
        }

        let text = match requested {
            Some(_) => "Not available for selected dates".to_string(),
            None => "All units currently reserved".to_string(),
        };
        Availability {
            status: AvailabilityStatus::Red,
            text,
        }
    }
}

impl Default for AvailabilityEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
