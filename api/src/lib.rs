//! This crate contains the shared market-data types and the fullstack server
//! functions the coin table calls.

pub mod coin;
pub mod config;
pub mod fiat_currency;
pub mod format;
pub mod market;
pub mod prefs;

use coin::Coin;
use dioxus::prelude::*;
use fiat_currency::FiatCurrency;
use prefs::user_prefs::UserPrefs;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file.  For now it just
/// returns the default settings, which read from env vars.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

/// Retrieves the full coin list priced in `currency`.
#[post("/api/coin_list")]
pub async fn coin_list(currency: FiatCurrency) -> Result<Vec<Coin>, ApiError> {
    use market::coin_gecko::CoinGecko;
    use market::MarketProvider;

    let coins = CoinGecko::default().coin_list(currency).await?;
    dioxus_logger::tracing::debug!("fetched {} coins in {}", coins.len(), currency.code());
    Ok(coins)
}

/// Retrieves a single coin by id, priced in `currency`.
#[post("/api/coin")]
pub async fn coin(id: String, currency: FiatCurrency) -> Result<Coin, ApiError> {
    use market::coin_gecko::CoinGecko;
    use market::MarketProvider;

    Ok(CoinGecko::default().coin(&id, currency).await?)
}
