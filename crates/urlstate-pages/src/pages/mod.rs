//! The eight playground pages.
//!
//! Each module holds one page store (plain data decoded from the query
//! string) and the factory for its descriptor list.

pub mod api_type;
pub mod asset_claim;
pub mod asset_query;
pub mod evm_transfer;
pub mod pallet_query;
pub mod xcm_analyser;
pub mod xcm_router;
pub mod xcm_transfer;

pub use api_type::SelectedApiTypeState;
pub use asset_claim::AssetClaimState;
pub use asset_query::AssetQueryState;
pub use evm_transfer::EvmTransferState;
pub use pallet_query::PalletQueryState;
pub use xcm_analyser::XcmAnalyserState;
pub use xcm_router::XcmRouterState;
pub use xcm_transfer::XcmTransferState;

use urlstate_core::{DecodeError, DecodePolicy, QueryString, SyncPlan, UrlState, token_enum};

token_enum! {
    /// Page identifiers, as used by hosts to mount a page by name.
    pub enum PageKind {
        ApiType => "api-type",
        XcmTransfer => "xcm-transfer",
        EvmTransfer => "evm-transfer",
        AssetQuery => "asset-query",
        PalletQuery => "pallet-query",
        AssetClaim => "asset-claim",
        XcmRouter => "xcm-router",
        XcmAnalyser => "xcm-analyser",
    }
}

impl PageKind {
    /// Owned parameter names, in registration order.
    #[must_use]
    pub fn params(self) -> Vec<&'static str> {
        match self {
            Self::ApiType => params_of::<SelectedApiTypeState>(),
            Self::XcmTransfer => params_of::<XcmTransferState>(),
            Self::EvmTransfer => params_of::<EvmTransferState>(),
            Self::AssetQuery => params_of::<AssetQueryState>(),
            Self::PalletQuery => params_of::<PalletQueryState>(),
            Self::AssetClaim => params_of::<AssetClaimState>(),
            Self::XcmRouter => params_of::<XcmRouterState>(),
            Self::XcmAnalyser => params_of::<XcmAnalyserState>(),
        }
    }

    /// Decode `query` and compute the plan a freshly mounted page would apply.
    pub fn canonical_plan(
        self,
        query: &QueryString,
        policy: DecodePolicy,
    ) -> Result<SyncPlan, DecodeError> {
        match self {
            Self::ApiType => plan_of::<SelectedApiTypeState>(query, policy),
            Self::XcmTransfer => plan_of::<XcmTransferState>(query, policy),
            Self::EvmTransfer => plan_of::<EvmTransferState>(query, policy),
            Self::AssetQuery => plan_of::<AssetQueryState>(query, policy),
            Self::PalletQuery => plan_of::<PalletQueryState>(query, policy),
            Self::AssetClaim => plan_of::<AssetClaimState>(query, policy),
            Self::XcmRouter => plan_of::<XcmRouterState>(query, policy),
            Self::XcmAnalyser => plan_of::<XcmAnalyserState>(query, policy),
        }
    }

    /// Serialized canonical query for `query` (owned keys rewritten, foreign
    /// keys kept).
    pub fn canonicalize(
        self,
        query: &QueryString,
        policy: DecodePolicy,
    ) -> Result<String, DecodeError> {
        Ok(self.canonical_plan(query, policy)?.apply_to(query).serialize())
    }
}

fn params_of<P: UrlState>() -> Vec<&'static str> {
    P::filters().params().collect()
}

fn plan_of<P: UrlState>(query: &QueryString, policy: DecodePolicy) -> Result<SyncPlan, DecodeError> {
    let state = P::decode(query, policy)?;
    Ok(SyncPlan::compute(&P::filters(), &state, None))
}
