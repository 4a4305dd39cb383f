//! Defines traits and implementations for external market-data providers.

use crate::coin::Coin;
use crate::fiat_currency::FiatCurrency;
use thiserror::Error;

/// Why a coin list could not be retrieved.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset, ...).
    #[error("request to market provider failed: {0}")]
    Request(#[source] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("market provider returned HTTP {0}")]
    Status(u16),
    /// The body was not a list of coins.
    #[error("could not decode market provider response: {0}")]
    Decode(#[source] reqwest::Error),
    /// A lookup by id matched no coin.
    #[error("no coin with id {0:?}")]
    NotFound(String),
}

/// A trait for any service that can list coins with their market data.
pub trait MarketProvider {
    /// Fetches the full coin list priced in `currency`, ordered by market cap.
    async fn coin_list(&self, currency: FiatCurrency) -> Result<Vec<Coin>, FetchError>;

    /// Fetches a single coin by its provider id.
    async fn coin(&self, id: &str, currency: FiatCurrency) -> Result<Coin, FetchError>;
}

/// Provides market data from the public CoinGecko API.
pub mod coin_gecko {
    use super::*;
    use crate::config::MarketConfig;

    /// An implementation of the `MarketProvider` trait for CoinGecko's
    /// `/coins/markets` endpoint.
    pub struct CoinGecko {
        client: reqwest::Client,
        config: MarketConfig,
    }

    impl CoinGecko {
        pub fn new(config: MarketConfig) -> Self {
            Self {
                client: reqwest::Client::new(),
                config,
            }
        }

        async fn markets(
            &self,
            currency: FiatCurrency,
            ids: Option<&str>,
        ) -> Result<Vec<Coin>, FetchError> {
            let per_page = self.config.per_page.to_string();
            let vs_currency = currency.vs_currency();
            let mut query = vec![
                ("vs_currency", vs_currency.as_str()),
                ("order", "market_cap_desc"),
                ("per_page", per_page.as_str()),
                ("page", "1"),
                ("sparkline", "false"),
            ];
            if let Some(ids) = ids {
                query.push(("ids", ids));
            }

            let resp = self
                .client
                .get(self.config.markets_url())
                .query(&query)
                .send()
                .await
                .map_err(FetchError::Request)?;

            let status = resp.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            resp.json::<Vec<Coin>>().await.map_err(FetchError::Decode)
        }
    }

    impl Default for CoinGecko {
        fn default() -> Self {
            Self::new(MarketConfig::from_env())
        }
    }

    impl MarketProvider for CoinGecko {
        async fn coin_list(&self, currency: FiatCurrency) -> Result<Vec<Coin>, FetchError> {
            self.markets(currency, None).await
        }

        async fn coin(&self, id: &str, currency: FiatCurrency) -> Result<Coin, FetchError> {
            self.markets(currency, Some(id))
                .await?
                .into_iter()
                .next()
                .ok_or_else(|| FetchError::NotFound(id.to_string()))
        }
    }
}
