// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use web_sys::ScrollBehavior;
    use web_sys::ScrollToOptions;

    /// Smoothly scrolls the browser window so that `top` is the first visible row.
    pub fn scroll_to_y(top: f64) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use dioxus::document;

    /// Smoothly scrolls the webview so that `top` is the first visible row.
    pub fn scroll_to_y(top: f64) {
        // no web_sys outside the browser; the webview still runs js.
        let _ = document::eval(&format!(
            "window.scrollTo({{ top: {top}, behavior: 'smooth' }});"
        ));
    }
}
