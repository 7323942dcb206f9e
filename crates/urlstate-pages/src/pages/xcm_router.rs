//! XCM router page.

use serde::{Deserialize, Serialize};
use urlstate_core::{
    Codec, DecodeError, DecodePolicy, FilterSet, FilterSetBuilder, OptionSetCodec, PercentCodec,
    QueryString, UrlState,
};

use crate::address::DEFAULT_ADDRESS;
use crate::defaults::{DEFAULT_AMOUNT, DEFAULT_SUBSTRATE_CHAIN, XCM_ROUTER_TO_WHEN_ABSENT};
use crate::fields::{AMOUNT, CHAIN, EXCHANGES, FLAG, PERCENT, RECIPIENT, SUBSTRATE_CHAIN, TEXT};

const TO: OptionSetCodec = CHAIN.when_absent(XCM_ROUTER_TO_WHEN_ABSENT);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XcmRouterState {
    pub from: String,
    /// Exchanges to route through; empty means automatic selection.
    pub exchange: Vec<String>,
    pub to: String,
    pub currency_from_option_id: String,
    pub currency_to_option_id: String,
    pub amount: String,
    pub recipient_address: String,
    pub slippage_pct: String,
    pub use_api: bool,
}

impl Default for XcmRouterState {
    fn default() -> Self {
        Self {
            from: DEFAULT_SUBSTRATE_CHAIN.to_owned(),
            exchange: Vec::new(),
            to: XCM_ROUTER_TO_WHEN_ABSENT.to_owned(),
            currency_from_option_id: String::new(),
            currency_to_option_id: String::new(),
            amount: DEFAULT_AMOUNT.to_owned(),
            recipient_address: DEFAULT_ADDRESS.to_owned(),
            slippage_pct: PercentCodec::FALLBACK.to_owned(),
            use_api: false,
        }
    }
}

impl UrlState for XcmRouterState {
    const PAGE: &'static str = "xcm-router";

    fn decode(query: &QueryString, _policy: DecodePolicy) -> Result<Self, DecodeError> {
        Ok(Self {
            from: SUBSTRATE_CHAIN.decode(query.get("from")),
            exchange: EXCHANGES.decode(query.get("exchange")),
            to: TO.decode(query.get("to")),
            currency_from_option_id: TEXT.decode(query.get("currencyFromOptionId")),
            currency_to_option_id: TEXT.decode(query.get("currencyToOptionId")),
            amount: AMOUNT.decode(query.get("amount")),
            recipient_address: RECIPIENT.decode(query.get("recipientAddress")),
            slippage_pct: PERCENT.decode(query.get("slippagePct")),
            use_api: FLAG.decode(query.get("useApi")),
        })
    }

    fn filters() -> FilterSet<Self> {
        FilterSetBuilder::new()
            .field("from", |s: &Self| &s.from, SUBSTRATE_CHAIN)
            .field("exchange", |s: &Self| &s.exchange, EXCHANGES)
            .field("to", |s: &Self| &s.to, TO)
            .field("currencyFromOptionId", |s: &Self| &s.currency_from_option_id, TEXT)
            .field("currencyToOptionId", |s: &Self| &s.currency_to_option_id, TEXT)
            .field("recipientAddress", |s: &Self| &s.recipient_address, RECIPIENT)
            .field("amount", |s: &Self| &s.amount, AMOUNT)
            .field("slippagePct", |s: &Self| &s.slippage_pct, PERCENT)
            .field("useApi", |s: &Self| &s.use_api, FLAG)
            .build()
    }
}
