//=============================================================================
// File: src/hooks/use_coin_list.rs
//=============================================================================
use api::fiat_currency::FiatCurrency;
use dioxus::prelude::*;

use crate::view_state::CoinTableState;

/// Holds the coin table's state and refetches the coin list whenever
/// `currency` changes.
///
/// Requests are not cancelled when the currency changes again; each one is
/// tagged and only the most recently issued one may update the state.
pub fn use_coin_list(currency: Signal<FiatCurrency>) -> Signal<CoinTableState> {
    let mut state = use_signal(CoinTableState::new);

    use_effect(move || {
        // reading the signal subscribes this effect to currency changes.
        let currency = currency();
        let ticket = state.write().begin_fetch();

        spawn(async move {
            let result = api::coin_list(currency).await;
            state.write().complete_fetch(ticket, result);
        });
    });

    state
}
