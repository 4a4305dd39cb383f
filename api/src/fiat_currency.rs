//! Defines the fiat currencies that coin prices can be quoted in.

use serde::Deserialize;
use serde::Serialize;

/// A fiat currency accepted by the market-data provider as a `vs_currency`.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    AUD,
    BRL,
    CAD,
    CHF,
    CNY,
    EUR,
    GBP,
    INR,
    JPY,
    KRW,
    MXN,
    #[default]
    USD,
    ZAR,
}

impl FiatCurrency {
    /// The ISO 4217 code, e.g. "USD".
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// The lowercase code the provider expects in its `vs_currency` parameter.
    pub fn vs_currency(&self) -> String {
        self.code().to_ascii_lowercase()
    }

    /// Returns the graphical symbol shown in front of prices (e.g. '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::AUD => "A$",
            Self::BRL => "R$",
            Self::CAD => "C$",
            Self::CHF => "CHF",
            Self::CNY => "¥",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::INR => "₹",
            Self::JPY => "¥",
            Self::KRW => "₩",
            Self::MXN => "$",
            Self::USD => "$",
            Self::ZAR => "R",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AUD => "Australian Dollar",
            Self::BRL => "Brazilian Real",
            Self::CAD => "Canadian Dollar",
            Self::CHF => "Swiss Franc",
            Self::CNY => "Chinese Yuan",
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::INR => "Indian Rupee",
            Self::JPY => "Japanese Yen",
            Self::KRW => "South Korean Won",
            Self::MXN => "Mexican Peso",
            Self::USD => "United States Dollar",
            Self::ZAR => "South African Rand",
        }
    }
}
