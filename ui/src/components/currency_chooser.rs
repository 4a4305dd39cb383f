// ui/src/components/currency_chooser.rs
#![allow(non_snake_case)]

use api::fiat_currency::FiatCurrency;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

/// Currencies whose code or name contains `filter`, ignoring case.
fn matching_currencies(filter: &str) -> Vec<FiatCurrency> {
    let filter_lower = filter.to_lowercase();
    FiatCurrency::iter()
        .filter(|fiat| {
            fiat.name().to_lowercase().contains(&filter_lower)
                || fiat.code().to_lowercase().contains(&filter_lower)
        })
        .collect()
}

/// A dropdown button for picking the currency all prices are quoted in.
#[component]
pub fn CurrencyChooser(mut currency: Signal<FiatCurrency>) -> Element {
    let mut is_open = use_signal(|| false);
    let mut filter_text = use_signal(|| "".to_string());

    let selected = currency();
    let filtered_fiats = matching_currencies(&filter_text.read());

    rsx! {
        div {
            style: "position: relative;",
            button {
                class: "secondary outline",
                style: "padding: 0.375rem 0.75rem; font-size: 0.875rem;",
                title: "Choose the currency prices are shown in.",
                onclick: move |_| is_open.toggle(),
                "{selected.symbol()} {selected.code()} ↓"
            }
            if is_open() {
                // Backdrop to catch clicks outside the dropdown
                div {
                    style: "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 9; background: transparent;",
                    onclick: move |_| is_open.set(false),
                }
                div {
                    // Stop click propagation to prevent the backdrop from closing the dropdown
                    onclick: |e| e.stop_propagation(),
                    style: "
                        position: absolute;
                        right: 0;
                        min-width: 16rem;
                        z-index: 10;
                        background-color: var(--pico-card-background-color);
                        border: 1px solid var(--pico-card-border-color);
                        border-radius: var(--pico-border-radius);
                        padding: 0.5rem;
                        margin-top: 0.25rem;
                    ",
                    input {
                        r#type: "text",
                        placeholder: "Search currencies...",
                        value: "{filter_text}",
                        oninput: move |evt| filter_text.set(evt.value()),
                        style: "margin-bottom: 0.5rem; width: 100%;",
                        onmounted: move |mounted| {
                            spawn(async move {
                                mounted.data.set_focus(true).await.ok();
                            });
                        },
                    }
                    ul {
                        role: "listbox",
                        style: "list-style: none; margin: 0; padding: 0; max-height: 250px; overflow-y: auto;",
                        for fiat in filtered_fiats {
                            li {
                                key: "{fiat.code()}",
                                style: "display: flex; align-items: center; cursor: pointer; padding: 0.3rem; white-space: nowrap;",
                                onclick: move |_| {
                                    currency.set(fiat);
                                    filter_text.set(String::new());
                                    is_open.set(false);
                                },
                                span {
                                    style: {
                                        if fiat == selected { "width: 1.5rem;" } else { "width: 1.5rem; visibility: hidden;" }
                                    },
                                    "✓"
                                }
                                span {
                                    "{fiat.code()} - {fiat.name()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
