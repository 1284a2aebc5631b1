//! RentKaro Rental Pricing & Availability Engine
//!
//! Tenure-based price derivation, deposit computation, date-range
//! availability against reservations, and quotation/invoice totals, exposed
//! behind a thin HTTP surface. The ERP of record and the storefront UI live
//! elsewhere; this crate performs no outbound I/O.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::AppState;
pub use modules::availability;
pub use modules::catalog;
pub use modules::pricing;
pub use modules::quotations;
pub use modules::reservations;
