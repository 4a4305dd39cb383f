//! The market snapshot of a single coin, as delivered by the provider.

use serde::Deserialize;
use serde::Serialize;

/// One coin's market data, priced in the currency the list was fetched in.
///
/// Field names follow the provider's JSON so the response deserializes
/// directly into `Vec<Coin>`. Extra fields in the response are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub current_price: f64,
    /// `None` when the provider has no 24h history for the coin.
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap: f64,
}

impl Coin {
    /// True when the coin is up over the last 24h.
    pub fn is_profit(&self) -> bool {
        self.price_change_percentage_24h.unwrap_or_default() > 0.0
    }

    /// Case-insensitive substring match of `needle` against name or symbol.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }
}
