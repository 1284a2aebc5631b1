use rust_decimal::Decimal;

/// Decimal places of the minor currency unit (INR paise)
pub const DISPLAY_SCALE: u32 = 2;

/// Round an amount to the minor currency unit.
///
/// Intermediate pricing math stays unrounded; this is applied only at
/// display and total-aggregation points so rounding error never compounds
/// across line items.
pub fn round_display(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp(DISPLAY_SCALE);
    // pin the scale so 0 serializes as "0.00", not "0"
    rounded.rescale(DISPLAY_SCALE);
    rounded
}

/// Validate that a rate expressed as a fraction lies in [0, 1].
pub fn validate_fraction(name: &str, value: Decimal) -> Result<(), String> {
    if value < Decimal::ZERO {
        return Err(format!("{} cannot be negative, got {}", name, value));
    }
    if value > Decimal::ONE {
        return Err(format!("{} cannot exceed 1.0 (100%), got {}", name, value));
    }
    Ok(())
}
