use crate::fiat_currency::FiatCurrency;
use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// Represents all user prefs. Intended for saving to a file. editing in settings dialog, etc.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    currency: FiatCurrency,
}

impl UserPrefs {
    pub fn new(currency: FiatCurrency) -> Self {
        Self { currency }
    }

    /// The currency the coin table starts out priced in.
    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    /// Reads prefs from environment variables.
    ///
    /// # Environment Variables
    /// - `FIAT_CURRENCY`: any supported code, case-insensitive. defaults to USD.
    pub fn from_env() -> Self {
        let currency = match env::var("FIAT_CURRENCY") {
            Ok(code) => Self::parse_currency(&code),
            Err(_) => FiatCurrency::default(),
        };
        Self { currency }
    }

    fn parse_currency(code: &str) -> FiatCurrency {
        FiatCurrency::from_str(code.trim()).unwrap_or_else(|_| {
            warn!("unsupported FIAT_CURRENCY {:?}, using default", code);
            FiatCurrency::default()
        })
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_currency() {
        assert_eq!(UserPrefs::parse_currency(" eur "), FiatCurrency::EUR);
    }

    #[test]
    fn unknown_currency_falls_back_to_default() {
        assert_eq!(UserPrefs::parse_currency("doge"), FiatCurrency::USD);
    }
}
