//! EVM transfer page.

use serde::{Deserialize, Serialize};
use urlstate_core::{
    Codec, DecodeError, DecodePolicy, FilterSet, FilterSetBuilder, OptionSetCodec, QueryString,
    UrlState,
};

use crate::address::DEFAULT_ADDRESS;
use crate::defaults::{DEFAULT_AMOUNT, DEFAULT_EVM_CHAIN, EVM_TRANSFER_TO_WHEN_ABSENT};
use crate::fields::{AMOUNT, CHAIN, EVM_CHAIN, FLAG, RECIPIENT, TEXT};

const TO: OptionSetCodec = CHAIN.when_absent(EVM_TRANSFER_TO_WHEN_ABSENT);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvmTransferState {
    pub from: String,
    pub to: String,
    pub currency_option_id: String,
    pub address: String,
    pub ah_address: String,
    pub amount: String,
    pub use_viem: bool,
}

impl Default for EvmTransferState {
    fn default() -> Self {
        Self {
            from: DEFAULT_EVM_CHAIN.to_owned(),
            to: EVM_TRANSFER_TO_WHEN_ABSENT.to_owned(),
            currency_option_id: String::new(),
            address: DEFAULT_ADDRESS.to_owned(),
            ah_address: String::new(),
            amount: DEFAULT_AMOUNT.to_owned(),
            use_viem: false,
        }
    }
}

impl UrlState for EvmTransferState {
    const PAGE: &'static str = "evm-transfer";

    fn decode(query: &QueryString, _policy: DecodePolicy) -> Result<Self, DecodeError> {
        Ok(Self {
            from: EVM_CHAIN.decode(query.get("from")),
            to: TO.decode(query.get("to")),
            currency_option_id: TEXT.decode(query.get("currencyOptionId")),
            address: RECIPIENT.decode(query.get("address")),
            ah_address: TEXT.decode(query.get("ahAddress")),
            amount: AMOUNT.decode(query.get("amount")),
            use_viem: FLAG.decode(query.get("useViem")),
        })
    }

    fn filters() -> FilterSet<Self> {
        FilterSetBuilder::new()
            .field("from", |s: &Self| &s.from, EVM_CHAIN)
            .field("to", |s: &Self| &s.to, TO)
            .field("currencyOptionId", |s: &Self| &s.currency_option_id, TEXT)
            .field("address", |s: &Self| &s.address, RECIPIENT)
            .field("ahAddress", |s: &Self| &s.ah_address, TEXT)
            .field("amount", |s: &Self| &s.amount, AMOUNT)
            .field("useViem", |s: &Self| &s.use_viem, FLAG)
            .build()
    }
}
