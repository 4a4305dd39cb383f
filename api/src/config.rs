//! Server-side settings for the market-data provider.

use dioxus_logger::tracing::warn;
use std::env;

/// Connection settings for the coin list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketConfig {
    /// Base URL the `/coins/markets` path is appended to. No trailing slash.
    pub base_url: String,
    /// Number of coins requested per fetch.
    pub per_page: u16,
}

impl MarketConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.coingecko.com/api/v3";
    pub const DEFAULT_PER_PAGE: u16 = 100;
    /// The provider rejects larger pages.
    pub const MAX_PER_PAGE: u16 = 250;

    pub fn new(base_url: impl Into<String>, per_page: u16) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            per_page: per_page.clamp(1, Self::MAX_PER_PAGE),
        }
    }

    /// Creates a MarketConfig from environment variables, falling back to
    /// in-code defaults.
    ///
    /// # Environment Variables
    /// - `COIN_API_BASE_URL`: provider base URL.
    /// - `COIN_LIST_PER_PAGE`: coins per fetch, 1 to 250.
    pub fn from_env() -> Self {
        let base_url = env::var("COIN_API_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        let per_page = match env::var("COIN_LIST_PER_PAGE") {
            Ok(val) => Self::parse_per_page(&val),
            Err(_) => Self::DEFAULT_PER_PAGE,
        };

        Self::new(base_url, per_page)
    }

    fn parse_per_page(val: &str) -> u16 {
        match val.trim().parse::<u16>() {
            Ok(n) if (1..=Self::MAX_PER_PAGE).contains(&n) => n,
            _ => {
                warn!(
                    "invalid COIN_LIST_PER_PAGE {:?}, using {}",
                    val,
                    Self::DEFAULT_PER_PAGE
                );
                Self::DEFAULT_PER_PAGE
            }
        }
    }

    /// Full URL of the markets endpoint.
    pub fn markets_url(&self) -> String {
        format!("{}/coins/markets", self.base_url)
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL, Self::DEFAULT_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let config = MarketConfig::new("http://localhost:1234/", 10);
        assert_eq!(config.markets_url(), "http://localhost:1234/coins/markets");
    }

    #[test]
    fn clamps_per_page() {
        assert_eq!(MarketConfig::new("x", 0).per_page, 1);
        assert_eq!(MarketConfig::new("x", 1000).per_page, MarketConfig::MAX_PER_PAGE);
    }

    #[test]
    fn rejects_bad_per_page() {
        assert_eq!(MarketConfig::parse_per_page("50"), 50);
        assert_eq!(MarketConfig::parse_per_page("0"), MarketConfig::DEFAULT_PER_PAGE);
        assert_eq!(MarketConfig::parse_per_page("lots"), MarketConfig::DEFAULT_PER_PAGE);
    }
}
