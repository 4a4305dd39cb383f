// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
mod currency;
pub mod hooks;
mod screens;
pub mod view_state;

use api::prefs::user_prefs::UserPrefs;
use components::currency_chooser::CurrencyChooser;
use components::pico::Container;
use currency::CurrencyState;
use screens::coin_detail::CoinDetail;
use screens::home::Home;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.amber.min.css";

/// The routes of the app. `Shell` wraps every screen with the header.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/coins/:id")]
        CoinDetail { id: String },
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    .app-header nav {
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .app-header .brand {
        color: var(--pico-primary);
        font-weight: bold;
        text-decoration: none;
    }

    tbody tr:hover td {
        background-color: var(--pico-card-sectioning-background-color);
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let prefs_future = use_server_future(move || async move { api::get_user_prefs().await })?;

    let body = match &*prefs_future.read() {
        Some(Ok(prefs)) => {
            dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
            rsx! {
                LoadedApp {
                    user_prefs: *prefs,
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when prefs are ready.
#[component]
fn LoadedApp(user_prefs: UserPrefs) -> Element {
    let currency = use_signal(|| user_prefs.currency());
    use_context_provider(|| CurrencyState { currency });

    rsx! {
        Router::<Route> {}
    }
}

/// Layout shared by all routes: brand link and currency picker above the screen.
#[component]
fn Shell() -> Element {
    let currency = use_context::<CurrencyState>().currency;

    rsx! {
        Container {
            header {
                class: "app-header",
                nav {
                    ul {
                        li {
                            Link {
                                class: "brand",
                                to: Route::Home {},
                                "Crypto Hunter"
                            }
                        }
                    }
                    ul {
                        li {
                            CurrencyChooser {
                                currency,
                            }
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::coin_detail_path;

    #[test]
    fn coin_detail_path_parses_to_detail_route() {
        let route: Route = coin_detail_path("bitcoin").parse().unwrap();
        assert_eq!(
            route,
            Route::CoinDetail {
                id: "bitcoin".to_string()
            }
        );
    }

    #[test]
    fn root_path_is_home() {
        let route: Route = "/".parse().unwrap();
        assert_eq!(route, Route::Home {});
    }
}
