use serde::{Deserialize, Serialize};

/// Currencies a license instance price can be entered in.
///
/// NOK is the baseline: prices entered in NOK need no conversion input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Nok,
    Eur,
    Sek,
    Usd,
    Dkk,
}

impl Currency {
    /// The code stored in the form's currency selector.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Nok => "NOK",
            Self::Eur => "EUR",
            Self::Sek => "SEK",
            Self::Usd => "USD",
            Self::Dkk => "DKK",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "NOK" => Some(Self::Nok),
            "EUR" => Some(Self::Eur),
            "SEK" => Some(Self::Sek),
            "USD" => Some(Self::Usd),
            "DKK" => Some(Self::Dkk),
            _ => None,
        }
    }

    /// Human-readable label shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nok => "Norwegian Krone (NOK)",
            Self::Eur => "Euro (EUR)",
            Self::Sek => "Swedish Krona (SEK)",
            Self::Usd => "US Dollar (USD)",
            Self::Dkk => "Danish Krone (DKK)",
        }
    }
}

/// Whether a raw selector value needs no conversion input.
///
/// An unselected (empty) currency is treated exactly like NOK. Any other
/// non-empty value counts as foreign, even one outside the known set, so
/// gating works on the raw string rather than the parsed [`Currency`].
pub fn is_base_selection(selection: &str) -> bool {
    selection.is_empty() || selection == Currency::Nok.as_code()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_code() {
        for currency in [
            Currency::Nok,
            Currency::Eur,
            Currency::Sek,
            Currency::Usd,
            Currency::Dkk,
        ] {
            assert_eq!(Currency::parse(currency.as_code()), Some(currency));
        }
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(Currency::parse("GBP"), None);
        assert_eq!(Currency::parse(""), None);
        assert_eq!(Currency::parse("nok"), None);
    }

    #[test]
    fn empty_selection_is_base() {
        assert!(is_base_selection(""));
    }

    #[test]
    fn nok_selection_is_base() {
        assert!(is_base_selection("NOK"));
    }

    #[test]
    fn foreign_selection_is_not_base() {
        assert!(!is_base_selection("EUR"));
        assert!(!is_base_selection("USD"));
    }

    #[test]
    fn unknown_nonempty_selection_is_not_base() {
        // Gating follows the raw value, so an unexpected code still
        // activates the conversion fields.
        assert!(!is_base_selection("GBP"));
    }
}
