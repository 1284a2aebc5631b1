pub mod reservation_repository;

pub use reservation_repository::{InMemoryReservationRepository, ReservationRepository};
