//! Asset claim page.

use serde::{Deserialize, Serialize};
use urlstate_core::{
    Codec, DecodeError, DecodePolicy, FilterSet, FilterSetBuilder, QueryString, UrlState,
};

use crate::address::DEFAULT_ADDRESS;
use crate::defaults::{DEFAULT_AMOUNT, DEFAULT_ASSET_CLAIM_CHAIN};
use crate::fields::{AMOUNT, ASSET_CLAIM_CHAIN, FLAG, RECIPIENT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetClaimState {
    pub from: String,
    pub address: String,
    pub amount: String,
    pub use_api: bool,
}

impl Default for AssetClaimState {
    fn default() -> Self {
        Self {
            from: DEFAULT_ASSET_CLAIM_CHAIN.to_owned(),
            address: DEFAULT_ADDRESS.to_owned(),
            amount: DEFAULT_AMOUNT.to_owned(),
            use_api: false,
        }
    }
}

impl UrlState for AssetClaimState {
    const PAGE: &'static str = "asset-claim";

    fn decode(query: &QueryString, _policy: DecodePolicy) -> Result<Self, DecodeError> {
        Ok(Self {
            from: ASSET_CLAIM_CHAIN.decode(query.get("from")),
            address: RECIPIENT.decode(query.get("address")),
            amount: AMOUNT.decode(query.get("amount")),
            use_api: FLAG.decode(query.get("useApi")),
        })
    }

    fn filters() -> FilterSet<Self> {
        FilterSetBuilder::new()
            .field("from", |s: &Self| &s.from, ASSET_CLAIM_CHAIN)
            .field("address", |s: &Self| &s.address, RECIPIENT)
            .field("amount", |s: &Self| &s.amount, AMOUNT)
            .field("useApi", |s: &Self| &s.use_api, FLAG)
            .build()
    }
}
