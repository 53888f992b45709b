use serde::{Deserialize, Serialize};

/// Which of the two equivalent values the user supplies for a foreign
/// currency: a conversion rate, or the absolute NOK price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    ConversionRate,
    NokPrice,
}

impl InputMode {
    /// The code stored in the form's mode selector.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::ConversionRate => "conversion_rate",
            Self::NokPrice => "nok_price",
        }
    }

    /// Parses a mode selector value.
    ///
    /// Returns `None` for anything outside the two known codes. The form
    /// can render with such a value (uninitialized or stale), and callers
    /// treat `None` as "do nothing" for both visibility and validation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "conversion_rate" => Some(Self::ConversionRate),
            "nok_price" => Some(Self::NokPrice),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_both_codes() {
        assert_eq!(
            InputMode::parse(InputMode::ConversionRate.as_code()),
            Some(InputMode::ConversionRate)
        );
        assert_eq!(
            InputMode::parse(InputMode::NokPrice.as_code()),
            Some(InputMode::NokPrice)
        );
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(InputMode::parse(""), None);
        assert_eq!(InputMode::parse("CONVERSION_RATE"), None);
        assert_eq!(InputMode::parse("rate"), None);
    }
}
