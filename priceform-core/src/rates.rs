//! Default conversion rates offered when the rate field is empty.
//!
//! These are pre-filled suggestions only; the user can overwrite them and
//! the form never replaces a value that is already present.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::Currency;

/// Default NOK conversion rate for a currency, if one is configured.
///
/// NOK itself has no entry: a NOK price needs no conversion.
pub fn default_rate(currency: Currency) -> Option<Decimal> {
    match currency {
        Currency::Usd => Some(dec!(10.5)),
        Currency::Eur => Some(dec!(11.2)),
        Currency::Sek => Some(dec!(0.95)),
        Currency::Dkk => Some(dec!(1.55)),
        Currency::Nok => None,
    }
}
