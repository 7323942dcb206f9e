//! Selected API type, shared by every page.

use serde::{Deserialize, Serialize};
use urlstate_core::{
    Codec, DecodeError, DecodePolicy, FilterSet, FilterSetBuilder, OptionalTokenCodec,
    QueryString, UrlState,
};

use crate::catalog::ApiType;

const API_TYPE: OptionalTokenCodec<ApiType> = OptionalTokenCodec::new();

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectedApiTypeState {
    pub selected_api_type: Option<ApiType>,
}

impl UrlState for SelectedApiTypeState {
    const PAGE: &'static str = "api-type";

    fn decode(query: &QueryString, _policy: DecodePolicy) -> Result<Self, DecodeError> {
        Ok(Self {
            selected_api_type: API_TYPE.decode(query.get("apiType")),
        })
    }

    fn filters() -> FilterSet<Self> {
        FilterSetBuilder::new()
            .field("apiType", |s: &Self| &s.selected_api_type, API_TYPE)
            .build()
    }
}
