//! Structured records carried through the opaque transform.
//!
//! Field names serialize in camelCase and in declaration order, so the JSON
//! payload matches links produced by the web playground.

use serde::{Deserialize, Serialize};

use crate::catalog::{CustomCurrencyType, SymbolSpecifier};
use crate::defaults::DEFAULT_AMOUNT;

/// One currency line of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyEntry {
    pub currency_option_id: String,
    pub custom_currency: String,
    pub amount: String,
    pub is_custom_currency: bool,
    pub is_max: bool,
    pub custom_currency_type: CustomCurrencyType,
    pub custom_currency_symbol_specifier: SymbolSpecifier,
}

impl Default for CurrencyEntry {
    fn default() -> Self {
        Self {
            currency_option_id: String::new(),
            custom_currency: String::new(),
            amount: DEFAULT_AMOUNT.to_owned(),
            is_custom_currency: false,
            is_max: false,
            custom_currency_type: CustomCurrencyType::Id,
            custom_currency_symbol_specifier: SymbolSpecifier::Auto,
        }
    }
}

/// Ordered currency lines. Defaults to a single default entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyList(pub Vec<CurrencyEntry>);

impl Default for CurrencyList {
    fn default() -> Self {
        Self(vec![CurrencyEntry::default()])
    }
}

impl CurrencyList {
    #[must_use]
    pub fn entries(&self) -> &[CurrencyEntry] {
        &self.0
    }

    pub fn push(&mut self, entry: CurrencyEntry) {
        self.0.push(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<CurrencyEntry>> for CurrencyList {
    fn from(entries: Vec<CurrencyEntry>) -> Self {
        Self(entries)
    }
}

/// The asset paying transfer fees: a currency entry without amount or max flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeAsset {
    pub currency_option_id: String,
    pub custom_currency: String,
    pub is_custom_currency: bool,
    pub custom_currency_type: CustomCurrencyType,
    pub custom_currency_symbol_specifier: SymbolSpecifier,
}

impl Default for FeeAsset {
    fn default() -> Self {
        Self {
            currency_option_id: String::new(),
            custom_currency: String::new(),
            is_custom_currency: false,
            custom_currency_type: CustomCurrencyType::Id,
            custom_currency_symbol_specifier: SymbolSpecifier::Auto,
        }
    }
}

impl From<&CurrencyEntry> for FeeAsset {
    fn from(entry: &CurrencyEntry) -> Self {
        Self {
            currency_option_id: entry.currency_option_id.clone(),
            custom_currency: entry.custom_currency.clone(),
            is_custom_currency: entry.is_custom_currency,
            custom_currency_type: entry.custom_currency_type,
            custom_currency_symbol_specifier: entry.custom_currency_symbol_specifier,
        }
    }
}
