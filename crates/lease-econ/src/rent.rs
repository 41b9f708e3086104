use rust_decimal::Decimal;

/// Rent multiplier for a 1-based contract year.
///
/// Flat lookup: 1.00 for years 1-2, 1.10 for years 3-5, 1.21 from year 6 on.
pub fn rent_multiplier(year: u32) -> Decimal {
    match year {
        0..=2 => Decimal::ONE,
        3..=5 => Decimal::new(110, 2),
        _ => Decimal::new(121, 2),
    }
}

/// Effective monthly rent for `year` given the base monthly rent.
///
/// Example:
/// assert_eq!(escalated_rent(3, Decimal::new(30_000, 0)), Decimal::new(33_000, 0));
pub fn escalated_rent(year: u32, base_monthly: Decimal) -> Decimal {
    base_monthly * rent_multiplier(year)
}
