//! Plain view state behind the coin table: search, paging and the
//! bookkeeping that keeps a slow, outdated fetch from clobbering a newer one.

use std::fmt::Display;

use api::coin::Coin;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// Coins whose name or symbol contains `search`, ignoring case, in their
/// original order. An empty search keeps every coin.
pub fn filter_coins<'a>(coins: &'a [Coin], search: &str) -> Vec<&'a Coin> {
    let needle = search.to_lowercase();
    coins.iter().filter(|coin| coin.matches(&needle)).collect()
}

/// The slice of `items` shown on 1-based `page`.
///
/// Pages past the end yield an empty slice. Page 0 is treated as page 1.
pub fn page_window<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Number of page buttons needed for `len` items.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Router path of a coin's detail screen.
pub fn coin_detail_path(id: &str) -> String {
    format!("/coins/{id}")
}

/// Identifies one issued fetch. Later fetches carry larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Everything the coin table remembers between renders.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinTableState {
    coins: Vec<Coin>,
    loading: bool,
    search: String,
    page: usize,
    latest: FetchTicket,
}

impl Default for CoinTableState {
    fn default() -> Self {
        Self {
            coins: Vec::new(),
            loading: false,
            search: String::new(),
            page: 1,
            latest: FetchTicket(0),
        }
    }
}

impl CoinTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replaces the search term. The page is left alone, so a narrower
    /// search can leave the current page empty.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn filtered(&self) -> Vec<&Coin> {
        filter_coins(&self.coins, &self.search)
    }

    /// Marks a new fetch as in flight and returns its ticket.
    ///
    /// Any fetch issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest = FetchTicket(self.latest.0 + 1);
        self.loading = true;
        self.latest
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// Outcomes of stale fetches are dropped and leave `loading` untouched,
    /// since a newer fetch is still pending. A failed current fetch is logged
    /// and keeps the coins from before. Returns whether the outcome was the
    /// current one.
    pub fn complete_fetch<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Coin>, E>,
    ) -> bool {
        if ticket != self.latest {
            info!("discarding stale coin list (fetch {:?}, latest {:?})", ticket, self.latest);
            return false;
        }

        match result {
            Ok(coins) => self.coins = coins,
            Err(e) => error!("Failed to fetch coins data: {e}"),
        }
        self.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(id: &str, symbol: &str, name: &str) -> Coin {
        Coin {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            image: format!("https://img/{id}.png"),
            current_price: 1.0,
            price_change_percentage_24h: Some(0.5),
            market_cap: 1_000_000.0,
        }
    }

    fn numbered_coins(n: usize) -> Vec<Coin> {
        (0..n)
            .map(|i| coin(&format!("c{i}"), &format!("s{i}"), &format!("Coin {i}")))
            .collect()
    }

    fn bitcoin() -> Coin {
        Coin {
            id: "btc".to_string(),
            symbol: "btc".to_string(),
            name: "Bitcoin".to_string(),
            image: String::new(),
            current_price: 50000.0,
            price_change_percentage_24h: Some(-2.5),
            market_cap: 900000000000.0,
        }
    }

    #[test]
    fn filter_is_case_insensitive_over_name_or_symbol() {
        let coins = vec![
            coin("bitcoin", "btc", "Bitcoin"),
            coin("ethereum", "eth", "Ethereum"),
            coin("wrapped-bitcoin", "wbtc", "Wrapped Bitcoin"),
            coin("tether", "usdt", "Tether"),
        ];

        let ids = |found: Vec<&Coin>| found.iter().map(|c| c.id.clone()).collect::<Vec<_>>();

        assert_eq!(ids(filter_coins(&coins, "BIT")), ["bitcoin", "wrapped-bitcoin"]);
        assert_eq!(ids(filter_coins(&coins, "usdt")), ["tether"]);
        assert_eq!(ids(filter_coins(&coins, "Eth")), ["ethereum"]);
        assert!(filter_coins(&coins, "doge").is_empty());
    }

    #[test]
    fn empty_search_keeps_everything_in_order() {
        let coins = numbered_coins(7);
        let all = filter_coins(&coins, "");
        assert_eq!(all.len(), 7);
        assert!(all.iter().zip(&coins).all(|(a, b)| *a == b));
    }

    #[test]
    fn third_page_of_25_holds_last_five() {
        let coins = numbered_coins(25);
        let window = page_window(&coins, 3);
        assert_eq!(window.len(), 5);
        assert_eq!(window[0].id, "c20");
        assert_eq!(window[4].id, "c24");
        assert_eq!(page_count(coins.len()), 3);
    }

    #[test]
    fn pages_are_at_most_ten_and_empty_past_the_end() {
        let coins = numbered_coins(20);
        assert_eq!(page_window(&coins, 1).len(), 10);
        assert_eq!(page_window(&coins, 2)[0].id, "c10");
        assert!(page_window(&coins, 3).is_empty());
        assert!(page_window(&coins, usize::MAX).is_empty());
        assert!(page_window::<Coin>(&[], 1).is_empty());
    }

    #[test]
    fn page_counts() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
    }

    #[test]
    fn detail_path_uses_coin_id() {
        assert_eq!(coin_detail_path("bitcoin"), "/coins/bitcoin");
    }

    #[test]
    fn search_scenario_over_fetched_bitcoin() {
        let mut state = CoinTableState::new();
        let ticket = state.begin_fetch();
        state.complete_fetch::<String>(ticket, Ok(vec![bitcoin()]));

        state.set_search("bit");
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(page_count(state.filtered().len()), 1);

        state.set_search("eth");
        assert!(state.filtered().is_empty());
        assert_eq!(page_count(state.filtered().len()), 0);
    }

    #[test]
    fn narrowing_search_does_not_reset_page() {
        let mut state = CoinTableState::new();
        let ticket = state.begin_fetch();
        state.complete_fetch::<String>(ticket, Ok(numbered_coins(25)));
        state.set_page(3);

        state.set_search("Coin 1");
        assert_eq!(state.page(), 3);
        // "Coin 1" and "Coin 10".."Coin 19" leave 11 matches, two pages.
        assert_eq!(state.filtered().len(), 11);
        assert!(page_window(&state.filtered(), state.page()).is_empty());
    }

    #[test]
    fn page_never_drops_below_one() {
        let mut state = CoinTableState::new();
        assert_eq!(state.page(), 1);
        state.set_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn loading_flag_follows_fetch() {
        let mut state = CoinTableState::new();
        assert!(!state.is_loading());
        let ticket = state.begin_fetch();
        assert!(state.is_loading());
        assert!(state.complete_fetch::<String>(ticket, Ok(vec![bitcoin()])));
        assert!(!state.is_loading());
        assert_eq!(state.coins(), [bitcoin()]);
    }

    #[test]
    fn failed_fetch_keeps_previous_coins() {
        let mut state = CoinTableState::new();
        let first = state.begin_fetch();
        state.complete_fetch::<String>(first, Ok(vec![bitcoin()]));

        let second = state.begin_fetch();
        let applied = state.complete_fetch(second, Err("network error".to_string()));

        assert!(applied);
        assert!(!state.is_loading());
        assert_eq!(state.coins(), [bitcoin()]);
    }

    #[test]
    fn failed_first_fetch_leaves_table_empty() {
        let mut state = CoinTableState::new();
        let ticket = state.begin_fetch();
        state.complete_fetch(ticket, Err("connection refused"));
        assert!(!state.is_loading());
        assert!(state.coins().is_empty());
    }

    #[test]
    fn stale_fetch_cannot_overwrite_newer_one() {
        let mut state = CoinTableState::new();
        let usd = state.begin_fetch();
        let eur = state.begin_fetch();
        assert!(usd < eur);

        // the older request resolves first but is no longer wanted.
        assert!(!state.complete_fetch::<String>(usd, Ok(numbered_coins(3))));
        assert!(state.is_loading());
        assert!(state.coins().is_empty());

        assert!(state.complete_fetch::<String>(eur, Ok(vec![bitcoin()])));
        assert!(!state.is_loading());
        assert_eq!(state.coins(), [bitcoin()]);

        // and arriving after the newer one changes nothing either.
        assert!(!state.complete_fetch::<String>(usd, Ok(numbered_coins(3))));
        assert_eq!(state.coins(), [bitcoin()]);
    }
}
