//! Submit-time validation for the currency conversion fields.
//!
//! The decision is pure: it reads the raw selector values and field texts
//! and either passes or names the field to reject. Surfacing the message
//! and moving focus is the page layer's job.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{InputMode, is_base_selection};
use crate::parse::parse_decimal_or_zero;

pub const INVALID_RATE_MESSAGE: &str = "Please enter a valid conversion rate.";
pub const INVALID_NOK_PRICE_MESSAGE: &str = "Please enter a valid NOK price.";

/// The two value fields a submit check can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    ConversionRate,
    NokPrice,
}

/// A rejected submit: the field to focus and the blocking message to show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmitBlock {
    pub field: ValueField,
    pub message: &'static str,
}

/// Decides whether the form may submit.
///
/// NOK or empty selections always pass: no conversion input is required.
/// Otherwise the field the current mode activates must parse to a positive
/// value. An unrecognized mode passes unchecked; the form can reach that
/// state and nothing validates it (see the mode-selector notes in
/// DESIGN.md).
pub fn check_submit(
    selection: &str,
    mode: Option<InputMode>,
    conversion_rate_text: &str,
    nok_price_text: &str,
) -> Result<(), SubmitBlock> {
    if is_base_selection(selection) {
        return Ok(());
    }

    match mode {
        Some(InputMode::ConversionRate) => {
            if parse_decimal_or_zero(conversion_rate_text) <= Decimal::ZERO {
                return Err(SubmitBlock {
                    field: ValueField::ConversionRate,
                    message: INVALID_RATE_MESSAGE,
                });
            }
            Ok(())
        }
        Some(InputMode::NokPrice) => {
            if parse_decimal_or_zero(nok_price_text) <= Decimal::ZERO {
                return Err(SubmitBlock {
                    field: ValueField::NokPrice,
                    message: INVALID_NOK_PRICE_MESSAGE,
                });
            }
            Ok(())
        }
        None => Ok(()),
    }
}
