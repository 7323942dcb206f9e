//! Pallet query page.

use serde::{Deserialize, Serialize};
use urlstate_core::{
    Codec, DecodeError, DecodePolicy, FilterSet, FilterSetBuilder, OptionSetCodec, QueryString,
    TextCodec, TokenCodec, UrlState, effective,
};

use crate::catalog::PalletsQuery;
use crate::defaults::{DEFAULT_PALLET, PALLET_QUERY_CHAIN_WHEN_ABSENT};
use crate::fields::{FLAG, SUBSTRATE_CHAIN};

const FUNC: TokenCodec<PalletsQuery> = TokenCodec::new(PalletsQuery::AllPallets);
const CHAIN: OptionSetCodec = SUBSTRATE_CHAIN.when_absent(PALLET_QUERY_CHAIN_WHEN_ABSENT);
// Pallet names are not validated.
const PALLET: TextCodec = TextCodec::with_default(DEFAULT_PALLET);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PalletQueryState {
    pub func: PalletsQuery,
    pub chain: String,
    pub pallet: String,
    pub use_api: bool,
}

impl Default for PalletQueryState {
    fn default() -> Self {
        Self {
            func: PalletsQuery::AllPallets,
            chain: PALLET_QUERY_CHAIN_WHEN_ABSENT.to_owned(),
            pallet: DEFAULT_PALLET.to_owned(),
            use_api: false,
        }
    }
}

fn shows_pallet(state: &PalletQueryState, form: Option<&PalletQueryState>) -> bool {
    effective(state, form).func == PalletsQuery::PalletIndex
}

impl UrlState for PalletQueryState {
    const PAGE: &'static str = "pallet-query";

    fn decode(query: &QueryString, _policy: DecodePolicy) -> Result<Self, DecodeError> {
        Ok(Self {
            func: FUNC.decode(query.get("func")),
            chain: CHAIN.decode(query.get("chain")),
            pallet: PALLET.decode(query.get("pallet")),
            use_api: FLAG.decode(query.get("useApi")),
        })
    }

    fn filters() -> FilterSet<Self> {
        FilterSetBuilder::new()
            .field("func", |s: &Self| &s.func, FUNC)
            .field("chain", |s: &Self| &s.chain, CHAIN)
            .field_if("pallet", |s: &Self| &s.pallet, PALLET, shows_pallet)
            .field("useApi", |s: &Self| &s.use_api, FLAG)
            .build()
    }
}
