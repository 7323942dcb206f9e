#![forbid(unsafe_code)]

//! ParaSpell playground pages.
//!
//! Option sets, documented defaults, and one [`UrlState`] store per page with
//! its descriptor list. Hosts mount a page with
//! [`PageSession::mount`](urlstate_core::PageSession::mount) or by name through
//! [`PageKind`].
//!
//! # Example
//!
//! ```
//! use urlstate_core::{MemoryAddressBar, PageSession, SyncConfig};
//! use urlstate_pages::XcmRouterState;
//!
//! let bar = MemoryAddressBar::with_search("/xcm-router", "slippagePct=150&exchange=Acala,Foo");
//! let mut page = PageSession::<XcmRouterState, _>::mount(bar, SyncConfig::default()).unwrap();
//! assert_eq!(page.state().slippage_pct, "1");
//! assert_eq!(page.state().exchange, ["Acala"]);
//!
//! page.commit().unwrap();
//! assert_eq!(page.address_bar().history_len(), 1);
//! ```

pub mod address;
pub mod catalog;
pub mod defaults;
pub mod fields;
pub mod pages;
pub mod records;

pub use address::{DEFAULT_ADDRESS, is_valid_evm_address, is_valid_ss58, is_valid_wallet_address};
pub use catalog::{
    ApiType, AssetsQuery, CurrencyType, CustomCurrencyType, PalletsQuery, SymbolSpecifier,
};
pub use defaults::{DEFAULT_TABLE, Expected, ParamDefault};
pub use pages::{
    AssetClaimState, AssetQueryState, EvmTransferState, PageKind, PalletQueryState,
    SelectedApiTypeState, XcmAnalyserState, XcmRouterState, XcmTransferState,
};
pub use records::{CurrencyEntry, CurrencyList, FeeAsset};

#[doc(no_inline)]
pub use urlstate_core::UrlState;
