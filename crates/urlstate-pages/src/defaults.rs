//! Documented defaults.
//!
//! [`DEFAULT_TABLE`] lists, per page and parameter, what a freshly loaded page
//! writes back to the address bar when the parameter is absent and when it
//! holds the unknown token `garbage-token`. `context` is a query prefix that
//! makes a conditional parameter visible.

use self::Expected::{Input, Omitted, Record, SameAsAbsent, Value};
use crate::pages::PageKind;
use crate::pages::PageKind as K;

pub use crate::address::DEFAULT_ADDRESS;

pub const DEFAULT_AMOUNT: &str = "10";
pub const DEFAULT_SUBSTRATE_CHAIN: &str = "Astar";
pub const DEFAULT_CHAIN: &str = "Hydration";
pub const DEFAULT_EVM_CHAIN: &str = "Ethereum";
pub const DEFAULT_ASSET_CLAIM_CHAIN: &str = "Polkadot";
pub const DEFAULT_PALLET: &str = "XTokens";

/// Absent-parameter defaults that differ from the invalid-value fallback.
pub const ASSET_QUERY_CHAIN_WHEN_ABSENT: &str = "Acala";
pub const ASSET_QUERY_DESTINATION_WHEN_ABSENT: &str = "Astar";
pub const PALLET_QUERY_CHAIN_WHEN_ABSENT: &str = "Acala";
pub const EVM_TRANSFER_TO_WHEN_ABSENT: &str = "AssetHubPolkadot";
pub const XCM_ROUTER_TO_WHEN_ABSENT: &str = "Hydration";

/// The unknown token used by [`DEFAULT_TABLE`]'s invalid column.
pub const INVALID_TOKEN: &str = "garbage-token";

/// What the canonical query holds for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// This exact value.
    Value(&'static str),
    /// The parameter is removed.
    Omitted,
    /// A non-empty structured payload (the default record).
    Record,
    /// Whatever the absent column yields.
    SameAsAbsent,
    /// The raw input, unchanged (free-form fields).
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDefault {
    pub page: PageKind,
    pub context: &'static str,
    pub param: &'static str,
    pub absent: Expected,
    pub invalid: Expected,
}

const fn row(
    page: PageKind,
    context: &'static str,
    param: &'static str,
    absent: Expected,
    invalid: Expected,
) -> ParamDefault {
    ParamDefault {
        page,
        context,
        param,
        absent,
        invalid,
    }
}

pub const DEFAULT_TABLE: &[ParamDefault] = &[
    row(K::ApiType, "", "apiType", Omitted, Omitted),
    // XCM transfer
    row(K::XcmTransfer, "", "from", Value("Astar"), Value("Astar")),
    row(K::XcmTransfer, "", "to", Value("Hydration"), Value("Hydration")),
    row(K::XcmTransfer, "", "currencies", Record, SameAsAbsent),
    row(K::XcmTransfer, "", "feeAsset", Record, SameAsAbsent),
    row(K::XcmTransfer, "", "address", Value(DEFAULT_ADDRESS), Value(DEFAULT_ADDRESS)),
    row(K::XcmTransfer, "", "ahAddress", Omitted, Input),
    row(K::XcmTransfer, "", "useApi", Value("false"), Value("false")),
    row(K::XcmTransfer, "", "useXcmFormatCheck", Value("false"), Value("false")),
    // EVM transfer
    row(K::EvmTransfer, "", "from", Value("Ethereum"), Value("Ethereum")),
    row(K::EvmTransfer, "", "to", Value("AssetHubPolkadot"), Value("Hydration")),
    row(K::EvmTransfer, "", "currencyOptionId", Omitted, Input),
    row(K::EvmTransfer, "", "address", Value(DEFAULT_ADDRESS), Value(DEFAULT_ADDRESS)),
    row(K::EvmTransfer, "", "ahAddress", Omitted, Input),
    row(K::EvmTransfer, "", "amount", Value("10"), Input),
    row(K::EvmTransfer, "", "useViem", Value("false"), Value("false")),
    // Asset query
    row(K::AssetQuery, "", "func", Value("ASSETS_OBJECT"), Value("ASSETS_OBJECT")),
    row(K::AssetQuery, "", "chain", Value("Acala"), Value("Astar")),
    row(K::AssetQuery, "", "destination", Omitted, Omitted),
    row(K::AssetQuery, "func=SUPPORTED_ASSETS", "destination", Value("Astar"), Value("Astar")),
    row(K::AssetQuery, "", "currency", Omitted, Omitted),
    row(K::AssetQuery, "func=ASSET_ID", "currency", Omitted, Input),
    row(K::AssetQuery, "", "address", Omitted, Omitted),
    row(K::AssetQuery, "func=ASSET_BALANCE", "address", Value(DEFAULT_ADDRESS), Value(DEFAULT_ADDRESS)),
    row(K::AssetQuery, "", "useApi", Value("false"), Value("false")),
    row(K::AssetQuery, "", "currencyType", Omitted, Omitted),
    row(K::AssetQuery, "func=ASSET_INFO", "currencyType", Value("symbol"), Value("symbol")),
    row(K::AssetQuery, "func=ASSET_INFO&chain=Kusama", "currencyType", Omitted, Omitted),
    row(K::AssetQuery, "func=ASSET_INFO", "customCurrencySymbolSpecifier", Omitted, Omitted),
    // Pallet query
    row(K::PalletQuery, "", "func", Value("ALL_PALLETS"), Value("ALL_PALLETS")),
    row(K::PalletQuery, "", "chain", Value("Acala"), Value("Astar")),
    row(K::PalletQuery, "", "pallet", Omitted, Omitted),
    row(K::PalletQuery, "func=PALLET_INDEX", "pallet", Value("XTokens"), Input),
    row(K::PalletQuery, "", "useApi", Value("false"), Value("false")),
    // Asset claim
    row(K::AssetClaim, "", "from", Value("Polkadot"), Value("Polkadot")),
    row(K::AssetClaim, "", "address", Value(DEFAULT_ADDRESS), Value(DEFAULT_ADDRESS)),
    row(K::AssetClaim, "", "amount", Value("10"), Input),
    row(K::AssetClaim, "", "useApi", Value("false"), Value("false")),
    // XCM router
    row(K::XcmRouter, "", "from", Value("Astar"), Value("Astar")),
    row(K::XcmRouter, "", "exchange", Omitted, Omitted),
    row(K::XcmRouter, "", "to", Value("Hydration"), Value("Hydration")),
    row(K::XcmRouter, "", "currencyFromOptionId", Omitted, Input),
    row(K::XcmRouter, "", "currencyToOptionId", Omitted, Input),
    row(K::XcmRouter, "", "recipientAddress", Value(DEFAULT_ADDRESS), Value(DEFAULT_ADDRESS)),
    row(K::XcmRouter, "", "amount", Value("10"), Input),
    row(K::XcmRouter, "", "slippagePct", Value("1"), Value("1")),
    row(K::XcmRouter, "", "useApi", Value("false"), Value("false")),
    // XCM analyser
    row(K::XcmAnalyser, "", "input", Omitted, Omitted),
    row(K::XcmAnalyser, "", "useApi", Value("false"), Value("false")),
];
