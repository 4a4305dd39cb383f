//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::components::coin_table::CoinTable;
use crate::currency::CurrencyState;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let currency = use_context::<CurrencyState>().currency;
    let navigator = use_navigator();

    rsx! {
        CoinTable {
            currency,
            on_navigate: move |path: String| {
                match path.parse::<Route>() {
                    Ok(route) => {
                        navigator.push(route);
                    }
                    Err(_) => warn!("ignoring navigation to unknown path {path}"),
                }
            },
        }
    }
}
