//! Application state and route wiring, shared by the server binary and the
//! integration test harness.

use std::sync::Arc;

use actix_web::web;

use crate::config::PricingConfig;
use crate::core::error::Result;
use crate::modules::availability::controllers::availability_controller;
use crate::modules::availability::AvailabilityEvaluator;
use crate::modules::catalog::controllers::product_controller;
use crate::modules::catalog::{InMemoryProductRepository, ProductRepository};
use crate::modules::health::controllers::health_controller;
use crate::modules::pricing::controllers::pricing_controller;
use crate::modules::pricing::{PricelistResolver, RentalPriceCalculator};
use crate::modules::quotations::controllers::quotation_controller;
use crate::modules::quotations::TotalsCalculator;
use crate::modules::reservations::controllers::reservation_controller;
use crate::modules::reservations::{
    InMemoryReservationRepository, ReservationRepository, ReservationService,
};

/// Everything the HTTP layer needs, wired once at startup
#[derive(Clone)]
pub struct AppState {
    pub pricing_config: PricingConfig,
    pub products: Arc<dyn ProductRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub resolver: Arc<PricelistResolver>,
    pub price_calculator: Arc<RentalPriceCalculator>,
    pub availability: Arc<AvailabilityEvaluator>,
    pub totals: Arc<TotalsCalculator>,
    pub reservation_service: Arc<ReservationService>,
}

impl AppState {
    pub fn new(
        pricing_config: PricingConfig,
        products: Arc<dyn ProductRepository>,
        reservations: Arc<dyn ReservationRepository>,
    ) -> Result<Self> {
        let resolver = Arc::new(PricelistResolver::built_in(
            pricing_config.deposit_fraction,
            &pricing_config.default_pricelist,
        )?);
        let price_calculator = Arc::new(RentalPriceCalculator::new(resolver.clone()));
        let reservation_service = Arc::new(ReservationService::new(
            reservations.clone(),
            products.clone(),
        ));

        Ok(Self {
            pricing_config,
            products,
            reservations,
            resolver,
            price_calculator,
            availability: Arc::new(AvailabilityEvaluator::new()),
            totals: Arc::new(TotalsCalculator::new()),
            reservation_service,
        })
    }

    /// State backed by the seeded demo catalog and an empty reservation book
    pub fn seeded(pricing_config: PricingConfig) -> Result<Self> {
        Self::new(
            pricing_config,
            Arc::new(InMemoryProductRepository::seeded()),
            Arc::new(InMemoryReservationRepository::new()),
        )
    }

    /// Register shared data and all routes on an actix app
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.pricing_config.clone()))
            .app_data(web::Data::new(self.products.clone()))
            .app_data(web::Data::new(self.reservations.clone()))
            .app_data(web::Data::new(self.resolver.clone()))
            .app_data(web::Data::new(self.price_calculator.clone()))
            .app_data(web::Data::new(self.availability.clone()))
            .app_data(web::Data::new(self.totals.clone()))
            .app_data(web::Data::new(self.reservation_service.clone()))
            .route("/health", web::get().to(health_controller::health_check))
            .route(
                "/products",
                web::get().to(product_controller::list_products),
            )
            .route(
                "/products/{id}",
                web::get().to(product_controller::get_product),
            )
            .route(
                "/products/{id}/availability",
                web::get().to(availability_controller::get_availability),
            )
            .route(
                "/products/{id}/reservations",
                web::get().to(reservation_controller::list_product_reservations),
            )
            .route(
                "/pricing/quote",
                web::post().to(pricing_controller::quote),
            )
            .route(
                "/pricing/pricelists",
                web::get().to(pricing_controller::list_pricelists),
            )
            .route(
                "/quotations/totals",
                web::post().to(quotation_controller::compute_totals),
            )
            .route(
                "/reservations",
                web::post().to(reservation_controller::create_reservation),
            )
            .route(
                "/reservations/{id}/pickup",
                web::post().to(reservation_controller::pick_up),
            )
            .route(
                "/reservations/{id}/return",
                web::post().to(reservation_controller::return_item),
            )
            .route(
                "/reservations/{id}/late",
                web::post().to(reservation_controller::mark_late),
            )
            .route(
                "/reservations/{id}/cancel",
                web::post().to(reservation_controller::cancel),
            );
    }
}
