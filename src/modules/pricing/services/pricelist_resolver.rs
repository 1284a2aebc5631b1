use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::error::{AppError, Result};
use crate::modules::pricing::models::{
    DiscountRule, Pricelist, Rate, RateDescriptor, Tenure, TenureRates,
};

/// Pricelist every unknown plan name degrades to unless configured otherwise.
///
/// The catalog experience must never hard-fail on a bad plan name, so the
/// fallback is explicit and logged rather than an error.
pub const DEFAULT_PRICELIST: &str = "standard";

/// Single source of truth for tenure-to-rate mappings.
///
/// The storefront used to recompute these tables in the product card, the
/// rental selector and the admin mock pricelists, each slightly differently.
/// Every call site now resolves through this registry.
#[derive(Debug)]
pub struct PricelistResolver {
    pricelists: HashMap<String, Pricelist>,
    fallback: String,
}

impl PricelistResolver {
    /// `fallback` is the pricelist used when a request names no pricelist or
    /// an unknown one. It must be among `pricelists`.
    pub fn new(pricelists: Vec<Pricelist>, fallback: impl Into<String>) -> Result<Self> {
        let fallback = fallback.into();
        let pricelists: HashMap<String, Pricelist> = pricelists
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();

        if !pricelists.contains_key(&fallback) {
            return Err(AppError::Configuration(format!(
                "Default pricelist '{}' is not registered",
                fallback
            )));
        }

        Ok(Self {
            pricelists,
            fallback,
        })
    }

    /// The built-in customer-segment pricelists.
    ///
    /// `deposit_fraction` is the configured default; individual pricelists
    /// may override it (corporate holds a lower deposit). `fallback` names
    /// the pricelist unknown plan names degrade to.
    pub fn built_in(deposit_fraction: Decimal, fallback: &str) -> Result<Self> {
        let standard_rates = TenureRates::new(
            Rate::Multiplier(dec!(0.01)),
            Rate::Multiplier(dec!(0.06)),
            Rate::Multiplier(dec!(0.28)),
            Rate::Multiplier(dec!(0.90)),
        )?;

        // Students rent on the standard table with a flat 10% off
        let student_rates = standard_rates.clone();
        let student_discounts = vec![DiscountRule::percent(dec!(10))?];

        // Corporate plans are negotiated flat rates per tenure unit
        let corporate_rates = TenureRates::new(
            Rate::Absolute(dec!(99)),
            Rate::Absolute(dec!(499)),
            Rate::Absolute(dec!(2499)),
            Rate::Absolute(dec!(7999)),
        )?;

        Self::new(
            vec![
                Pricelist::new("standard", standard_rates, deposit_fraction, vec![])?,
                Pricelist::new("student", student_rates, deposit_fraction, student_discounts)?,
                Pricelist::new("corporate", corporate_rates, dec!(0.05), vec![])?,
            ],
            fallback,
        )
    }

    /// Resolve a (pricelist, tenure) pair to a rate descriptor.
    ///
    /// Pure lookup: an unknown pricelist name degrades to the configured
    /// fallback with a warning. Unknown tenures cannot reach here; they are
    /// rejected when the tenure string is parsed.
    pub fn resolve(&self, pricelist_name: Option<&str>, tenure: Tenure) -> RateDescriptor {
        let requested = pricelist_name.unwrap_or(&self.fallback);

        let pricelist = match self.pricelists.get(requested) {
            Some(pricelist) => pricelist,
            None => {
                tracing::warn!(
                    pricelist = %requested,
                    fallback = %self.fallback,
                    "Unknown pricelist, falling back to default"
                );
                self.pricelists
                    .get(&self.fallback)
                    .expect("fallback pricelist is checked at construction")
            }
        };

        RateDescriptor {
            pricelist: pricelist.name.clone(),
            tenure,
            rate: pricelist.rates.get(tenure),
            deposit_fraction: pricelist.deposit_fraction,
            discounts: pricelist.discounts.clone(),
        }
    }

    /// Names of all registered pricelists
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.pricelists.keys().cloned().collect();
        names.sort();
        names
    }
}
