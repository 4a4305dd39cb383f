//! Defines the currency context shared by every screen.

use api::fiat_currency::FiatCurrency;
use dioxus::prelude::*;

/// The currency all prices are quoted in, provided as a Dioxus context.
///
/// Screens hand the signal down to the components that need it rather than
/// having those components look the context up themselves.
#[derive(Clone, Copy)]
pub struct CurrencyState {
    pub currency: Signal<FiatCurrency>,
}

impl CurrencyState {
    /// The symbol shown in front of prices, e.g. '$'.
    pub fn symbol(&self) -> &'static str {
        self.currency.read().symbol()
    }
}
