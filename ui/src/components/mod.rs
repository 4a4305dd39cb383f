//! Shared components used by the screens. The coin table lives here along
//! with the small pico.css wrappers it is built from.
pub mod coin_table;
pub mod currency_chooser;
pub mod empty_state;
pub mod pico;
