// Reservations module: records and lifecycle feeding availability

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Reservation, ReservationStatus};
pub use repositories::{InMemoryReservationRepository, ReservationRepository};
pub use services::ReservationService;
