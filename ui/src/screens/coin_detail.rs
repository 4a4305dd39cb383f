//=============================================================================
// File: src/screens/coin_detail.rs
//=============================================================================
use api::format::format_change;
use api::format::format_market_cap;
use api::format::format_price;
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::currency::CurrencyState;
use crate::Route;

#[component]
pub fn CoinDetail(id: String) -> Element {
    let currency_state = use_context::<CurrencyState>();
    let currency = currency_state.currency;

    let coin_id = id.clone();
    let mut coin = use_resource(move || {
        let id = coin_id.clone();
        let currency = currency();
        async move { api::coin(id, currency).await }
    });

    let symbol = currency_state.symbol();

    rsx! {
        Card {
            Link {
                to: Route::Home {},
                "← All coins"
            }
            match &*coin.read() {
                None => rsx! {
                    h3 {
                        "{id}"
                    }
                    progress {}
                },
                Some(Err(e)) => rsx! {
                    h3 {
                        "Error"
                    }
                    p {
                        "Failed to load coin {id}: {e}"
                    }
                    button {
                        onclick: move |_| coin.restart(),
                        "Retry"
                    }
                },
                Some(Ok(coin)) => rsx! {
                    header {
                        style: "display: flex; align-items: center; gap: 1rem;",
                        img {
                            src: "{coin.image}",
                            alt: "{coin.name}",
                            width: "64",
                            height: "64",
                        }
                        h2 {
                            style: "margin: 0;",
                            "{coin.name} "
                            small {
                                style: "text-transform: uppercase; color: var(--pico-muted-color);",
                                "{coin.symbol}"
                            }
                        }
                    }
                    table {
                        tbody {
                            tr {
                                th { "Price" }
                                td { "{symbol} {format_price(coin.current_price)}" }
                            }
                            tr {
                                th { "24h Change" }
                                td { "{format_change(coin.price_change_percentage_24h)}" }
                            }
                            tr {
                                th { "Market Cap" }
                                td { "{symbol} {format_market_cap(coin.market_cap)}" }
                            }
                        }
                    }
                },
            }
        }
    }
}
