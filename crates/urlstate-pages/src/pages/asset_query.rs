//! Asset query page.
//!
//! Most parameters are conditional on the selected query function: a
//! parameter is written only while the form would render its input. Every
//! predicate reads the override snapshot first.

use serde::{Deserialize, Serialize};
use urlstate_core::{
    Codec, DecodeError, DecodePolicy, FilterSet, FilterSetBuilder, OptionSetCodec,
    OptionalTokenCodec, QueryString, TokenCodec, UrlState, effective,
};

use crate::address::DEFAULT_ADDRESS;
use crate::catalog::{AssetsQuery, CurrencyType, SymbolSpecifier, is_relay_chain};
use crate::defaults::{ASSET_QUERY_CHAIN_WHEN_ABSENT, ASSET_QUERY_DESTINATION_WHEN_ABSENT};
use crate::fields::{FLAG, RECIPIENT, SUBSTRATE_CHAIN, TEXT};

const FUNC: TokenCodec<AssetsQuery> = TokenCodec::new(AssetsQuery::AssetsObject);
const CHAIN: OptionSetCodec = SUBSTRATE_CHAIN.when_absent(ASSET_QUERY_CHAIN_WHEN_ABSENT);
const DESTINATION: OptionSetCodec =
    SUBSTRATE_CHAIN.when_absent(ASSET_QUERY_DESTINATION_WHEN_ABSENT);
const CURRENCY_TYPE: TokenCodec<CurrencyType> = TokenCodec::new(CurrencyType::Symbol);
const SYMBOL_SPECIFIER: OptionalTokenCodec<SymbolSpecifier> = OptionalTokenCodec::new();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetQueryState {
    pub func: AssetsQuery,
    pub chain: String,
    pub destination: String,
    pub currency: String,
    /// Decoded for the form but never written back.
    pub amount: String,
    pub address: String,
    pub use_api: bool,
    pub currency_type: CurrencyType,
    pub custom_currency_symbol_specifier: Option<SymbolSpecifier>,
}

impl Default for AssetQueryState {
    fn default() -> Self {
        Self {
            func: AssetsQuery::AssetsObject,
            chain: ASSET_QUERY_CHAIN_WHEN_ABSENT.to_owned(),
            destination: ASSET_QUERY_DESTINATION_WHEN_ABSENT.to_owned(),
            currency: String::new(),
            amount: String::new(),
            address: DEFAULT_ADDRESS.to_owned(),
            use_api: false,
            currency_type: CurrencyType::Symbol,
            custom_currency_symbol_specifier: None,
        }
    }
}

fn shows_chain(state: &AssetQueryState, form: Option<&AssetQueryState>) -> bool {
    !effective(state, form).func.hides_chain()
}

fn shows_destination(state: &AssetQueryState, form: Option<&AssetQueryState>) -> bool {
    effective(state, form).func.takes_destination()
}

fn shows_currency(state: &AssetQueryState, form: Option<&AssetQueryState>) -> bool {
    effective(state, form).func.takes_currency()
}

fn shows_address(state: &AssetQueryState, form: Option<&AssetQueryState>) -> bool {
    effective(state, form).func.takes_address()
}

fn shows_currency_type(state: &AssetQueryState, form: Option<&AssetQueryState>) -> bool {
    let view = effective(state, form);
    view.func.supports_currency_type() && !is_relay_chain(&view.chain)
}

fn shows_symbol_specifier(state: &AssetQueryState, form: Option<&AssetQueryState>) -> bool {
    shows_currency_type(state, form) && effective(state, form).currency_type == CurrencyType::Symbol
}

impl UrlState for AssetQueryState {
    const PAGE: &'static str = "asset-query";

    fn decode(query: &QueryString, _policy: DecodePolicy) -> Result<Self, DecodeError> {
        Ok(Self {
            func: FUNC.decode(query.get("func")),
            chain: CHAIN.decode(query.get("chain")),
            destination: DESTINATION.decode(query.get("destination")),
            currency: TEXT.decode(query.get("currency")),
            amount: TEXT.decode(query.get("amount")),
            address: RECIPIENT.decode(query.get("address")),
            use_api: FLAG.decode(query.get("useApi")),
            currency_type: CURRENCY_TYPE.decode(query.get("currencyType")),
            custom_currency_symbol_specifier: SYMBOL_SPECIFIER
                .decode(query.get("customCurrencySymbolSpecifier")),
        })
    }

    fn filters() -> FilterSet<Self> {
        FilterSetBuilder::new()
            .field("func", |s: &Self| &s.func, FUNC)
            .field_if("chain", |s: &Self| &s.chain, CHAIN, shows_chain)
            .field_if("destination", |s: &Self| &s.destination, DESTINATION, shows_destination)
            .field_if("currency", |s: &Self| &s.currency, TEXT, shows_currency)
            .field_if("address", |s: &Self| &s.address, RECIPIENT, shows_address)
            .field("useApi", |s: &Self| &s.use_api, FLAG)
            .field_if(
                "currencyType",
                |s: &Self| &s.currency_type,
                CURRENCY_TYPE,
                shows_currency_type,
            )
            .field_if(
                "customCurrencySymbolSpecifier",
                |s: &Self| &s.custom_currency_symbol_specifier,
                SYMBOL_SPECIFIER,
                shows_symbol_specifier,
            )
            .build()
    }
}
