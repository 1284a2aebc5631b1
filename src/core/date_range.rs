use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};

/// A rental window: `to` must be strictly after `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    /// Create a validated range
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self> {
        if to <= from {
            return Err(AppError::invalid_date_range(format!(
                "end ({}) must be strictly after start ({})",
                to, from
            )));
        }
        Ok(Self { from, to })
    }

    /// Inclusive-boundary overlap check.
    ///
    /// A reservation ending exactly when the next one starts counts as a
    /// conflict, so same-day handovers are never promised.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// Whether the range has not yet fully elapsed at `now`
    pub fn ends_at_or_after(&self, now: DateTime<Utc>) -> bool {
        self.to >= now
    }
}
