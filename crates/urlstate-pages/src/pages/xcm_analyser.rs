//! XCM analyser page. `input` is free-form multi-line text (a location or a
//! full XCM program) carried through the opaque transform.

use serde::{Deserialize, Serialize};
use urlstate_core::{
    Codec, DecodeError, DecodePolicy, FilterSet, FilterSetBuilder, QueryString, UrlState,
    decode_param,
};

use crate::fields::{CODE, FLAG};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XcmAnalyserState {
    pub input: String,
    pub use_api: bool,
}

impl UrlState for XcmAnalyserState {
    const PAGE: &'static str = "xcm-analyser";

    fn decode(query: &QueryString, policy: DecodePolicy) -> Result<Self, DecodeError> {
        Ok(Self {
            input: decode_param(&CODE, query, "input", policy)?,
            use_api: FLAG.decode(query.get("useApi")),
        })
    }

    fn filters() -> FilterSet<Self> {
        FilterSetBuilder::new()
            .field("input", |s: &Self| &s.input, CODE)
            .field("useApi", |s: &Self| &s.use_api, FLAG)
            .build()
    }
}
