//=============================================================================
// File: src/components/coin_table.rs
//=============================================================================
use api::coin::Coin;
use api::fiat_currency::FiatCurrency;
use api::format::format_change;
use api::format::format_market_cap;
use api::format::format_price;
use dioxus::prelude::*;

use crate::compat;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::hooks::use_coin_list::use_coin_list;
use crate::view_state::coin_detail_path;
use crate::view_state::page_count;
use crate::view_state::page_window;

/// Where the page scrolls to after a page button is pressed; just above the table.
const TABLE_TOP_Y: f64 = 450.0;

const COLUMNS: [&str; 4] = ["Coin", "Price", "24h Change", "Market Cap"];

#[component]
fn CoinRow(coin: Coin, symbol: &'static str, on_navigate: EventHandler<String>) -> Element {
    let path = coin_detail_path(&coin.id);
    let change_color = if coin.is_profit() {
        "var(--pico-ins-color)"
    } else {
        "var(--pico-del-color)"
    };

    rsx! {
        tr {
            style: "cursor: pointer;",
            onclick: move |_| on_navigate.call(path.clone()),
            td {
                div {
                    style: "display: flex; align-items: center; gap: 1rem; white-space: nowrap;",
                    img {
                        src: "{coin.image}",
                        alt: "{coin.name}",
                        width: "40",
                        height: "40",
                    }
                    div {
                        style: "display: flex; flex-direction: column;",
                        strong {
                            style: "text-transform: uppercase;",
                            "{coin.symbol}"
                        }
                        small {
                            style: "color: var(--pico-muted-color);",
                            "{coin.name}"
                        }
                    }
                }
            }
            td {
                style: "text-align: right;",
                "{symbol} {format_price(coin.current_price)}"
            }
            td {
                style: "text-align: right; font-weight: bold; color: {change_color};",
                "{format_change(coin.price_change_percentage_24h)}"
            }
            td {
                style: "text-align: right;",
                "{symbol} {format_market_cap(coin.market_cap)}"
            }
        }
    }
}

fn page_button_type(n: usize, page: usize) -> ButtonType {
    if n == page {
        ButtonType::Primary
    } else {
        ButtonType::Secondary
    }
}

/// Searchable, paginated table of coins priced in `currency`.
///
/// Clicking a row calls `on_navigate` with the coin's detail path.
#[component]
pub fn CoinTable(currency: Signal<FiatCurrency>, on_navigate: EventHandler<String>) -> Element {
    let mut state = use_coin_list(currency);
    let symbol = currency.read().symbol();

    let (rows, pages, page, loading, search) = {
        let view = state.read();
        let filtered = view.filtered();
        let rows: Vec<Coin> = page_window(&filtered, view.page())
            .iter()
            .map(|&coin| coin.clone())
            .collect();
        (
            rows,
            page_count(filtered.len()),
            view.page(),
            view.is_loading(),
            view.search().to_string(),
        )
    };

    let empty_hint = if search.is_empty() {
        "The coin list is empty right now.".to_string()
    } else {
        format!("Nothing matches \"{search}\".")
    };

    rsx! {
        Card {
            h3 {
                style: "text-align: center;",
                "Cryptocurrency Prices by Market Cap"
            }
            input {
                r#type: "search",
                placeholder: "Search For a Cryptocurrency...",
                value: "{search}",
                oninput: move |evt| state.write().set_search(evt.value()),
            }
            div {
                style: "overflow-x: auto;",
                if loading {
                    progress {}
                } else if pages == 0 {
                    EmptyState {
                        title: "No coins found",
                        description: empty_hint,
                        icon: rsx! { "🔍" },
                    }
                } else {
                    table {
                        thead {
                            tr {
                                for head in COLUMNS {
                                    th {
                                        key: "{head}",
                                        style: {
                                            if head == "Coin" { "text-align: left;" } else { "text-align: right;" }
                                        },
                                        "{head}"
                                    }
                                }
                            }
                        }
                        tbody {
                            for coin in rows {
                                CoinRow {
                                    key: "{coin.id}",
                                    coin: coin.clone(),
                                    symbol,
                                    on_navigate,
                                }
                            }
                        }
                    }
                }
            }
            nav {
                style: "display: flex; flex-wrap: wrap; justify-content: center; gap: 0.5rem;",
                for n in 1..=pages {
                    Button {
                        key: "{n}",
                        button_type: page_button_type(n, page),
                        outline: n != page,
                        current: n == page,
                        on_click: move |_| {
                            state.write().set_page(n);
                            compat::scroll_to_y(TABLE_TOP_Y);
                        },
                        "{n}"
                    }
                }
            }
        }
    }
}
