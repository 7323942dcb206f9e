//! XCM transfer page.
//!
//! The currency list and fee asset travel as opaque JSON payloads; under
//! [`DecodePolicy::Strict`] a malformed payload fails the mount.

use serde::{Deserialize, Serialize};
use urlstate_core::{
    Codec, DecodeError, DecodePolicy, FilterSet, FilterSetBuilder, QueryString, UrlState,
    decode_param,
};

use crate::address::DEFAULT_ADDRESS;
use crate::defaults::{DEFAULT_CHAIN, DEFAULT_SUBSTRATE_CHAIN};
use crate::fields::{CHAIN, CURRENCIES, FEE_ASSET, FLAG, RECIPIENT, SUBSTRATE_CHAIN, TEXT};
use crate::records::{CurrencyList, FeeAsset};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XcmTransferState {
    pub from: String,
    pub to: String,
    pub currencies: CurrencyList,
    pub fee_asset: FeeAsset,
    pub address: String,
    pub ah_address: String,
    pub use_api: bool,
    pub use_xcm_format_check: bool,
}

impl Default for XcmTransferState {
    fn default() -> Self {
        Self {
            from: DEFAULT_SUBSTRATE_CHAIN.to_owned(),
            to: DEFAULT_CHAIN.to_owned(),
            currencies: CurrencyList::default(),
            fee_asset: FeeAsset::default(),
            address: DEFAULT_ADDRESS.to_owned(),
            ah_address: String::new(),
            use_api: false,
            use_xcm_format_check: false,
        }
    }
}

impl UrlState for XcmTransferState {
    const PAGE: &'static str = "xcm-transfer";

    fn decode(query: &QueryString, policy: DecodePolicy) -> Result<Self, DecodeError> {
        Ok(Self {
            from: SUBSTRATE_CHAIN.decode(query.get("from")),
            to: CHAIN.decode(query.get("to")),
            currencies: decode_param(&CURRENCIES, query, "currencies", policy)?,
            fee_asset: decode_param(&FEE_ASSET, query, "feeAsset", policy)?,
            address: RECIPIENT.decode(query.get("address")),
            ah_address: TEXT.decode(query.get("ahAddress")),
            use_api: FLAG.decode(query.get("useApi")),
            use_xcm_format_check: FLAG.decode(query.get("useXcmFormatCheck")),
        })
    }

    fn filters() -> FilterSet<Self> {
        FilterSetBuilder::new()
            .field("from", |s: &Self| &s.from, SUBSTRATE_CHAIN)
            .field("to", |s: &Self| &s.to, CHAIN)
            .field("currencies", |s: &Self| &s.currencies, CURRENCIES)
            .field("feeAsset", |s: &Self| &s.fee_asset, FEE_ASSET)
            .field("address", |s: &Self| &s.address, RECIPIENT)
            .field("ahAddress", |s: &Self| &s.ah_address, TEXT)
            .field("useApi", |s: &Self| &s.use_api, FLAG)
            .field("useXcmFormatCheck", |s: &Self| &s.use_xcm_format_check, FLAG)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CustomCurrencyType, SymbolSpecifier};
    use crate::records::CurrencyEntry;
    use pretty_assertions::assert_eq;
    use urlstate_core::{DecodeStage, SyncPlan, opaque_encode};

    #[test]
    fn empty_query_decodes_to_default() {
        let state = XcmTransferState::decode(&QueryString::new(), DecodePolicy::Strict).unwrap();
        assert_eq!(state, XcmTransferState::default());
        assert_eq!(state.currencies.len(), 1);
        assert_eq!(state.currencies.entries()[0].amount, "10");
    }

    #[test]
    fn multi_currency_transfer_round_trips() {
        let state = XcmTransferState {
            from: "Hydration".into(),
            to: "Ethereum".into(),
            currencies: vec![
                CurrencyEntry {
                    currency_option_id: "HDX-native".into(),
                    amount: "1.5".into(),
                    ..CurrencyEntry::default()
                },
                CurrencyEntry {
                    custom_currency: "{\"parents\":1,\"interior\":\"Here\"}".into(),
                    is_custom_currency: true,
                    custom_currency_type: CustomCurrencyType::OverridenLocation,
                    custom_currency_symbol_specifier: SymbolSpecifier::ForeignAbstract,
                    is_max: true,
                    ..CurrencyEntry::default()
                },
            ]
            .into(),
            fee_asset: FeeAsset {
                currency_option_id: "DOT".into(),
                ..FeeAsset::default()
            },
            address: "0xde709f2102306220921060314715629080e2fb77".into(),
            ah_address: "14E5nqKAp3oAJcmzgZhUD2RcptBeUBScxKHgJKU4HPNcKVf3".into(),
            use_api: true,
            use_xcm_format_check: true,
        };
        let plan = SyncPlan::compute(&XcmTransferState::filters(), &state, None);
        let query = QueryString::parse(&plan.apply_to(&QueryString::new()).serialize());
        let back = XcmTransferState::decode(&query, DecodePolicy::Strict).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn malformed_currencies_follow_policy() {
        let raw = format!("currencies={}", opaque_encode("[{\"amount\":"));
        let query = QueryString::parse(&raw);

        let lenient = XcmTransferState::decode(&query, DecodePolicy::Lenient).unwrap();
        assert_eq!(lenient.currencies, CurrencyList::default());

        let err = XcmTransferState::decode(&query, DecodePolicy::Strict).unwrap_err();
        assert_eq!(err.param.as_deref(), Some("currencies"));
        assert_eq!(err.stage, DecodeStage::Json);
    }

    #[test]
    fn invalid_chains_fall_back() {
        let query = QueryString::parse("from=Ethereum&to=Narnia");
        let state = XcmTransferState::decode(&query, DecodePolicy::Lenient).unwrap();
        assert_eq!(state.from, "Astar");
        assert_eq!(state.to, "Hydration");
    }
}
