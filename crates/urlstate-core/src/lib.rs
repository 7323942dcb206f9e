#![forbid(unsafe_code)]

//! urlstate core
//!
//! Mirrors transient UI state into the address-bar query string so that a
//! page configuration is shareable, bookmarkable and restorable on reload.
//!
//! # Key Components
//!
//! - [`Codec`] - Total encode/decode pairs, one per semantic field type
//! - [`FilterDescriptor`] - Binds a query parameter to a value source, codec and predicate
//! - [`FilterSetBuilder`] - Ordered, duplicate-checked descriptor assembly
//! - [`SyncEngine`] - Compute phase + reconciliation phase
//! - [`AddressBar`] - Navigation surface the engine writes to
//! - [`PageSession`] - A mounted page: decoded state, override, engine, address bar
//!
//! # Architecture
//!
//! ```text
//!   QueryString ──decode──▶ page state ──observe──▶ SyncPlan ──commit──▶ AddressBar
//!        ▲                                                                   │
//!        └───────────────────────── replace (never push) ◀──────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. **Owned keys only**: reconciliation never touches parameters no descriptor names.
//! 2. **No empty parameters**: an empty or omitted encoding removes the key.
//! 3. **No redundant navigation**: an unchanged serialized query performs no write.
//! 4. **History neutrality**: writes replace the current entry, never push.

pub mod address_bar;
pub mod codec;
pub mod config;
pub mod error;
pub mod filter;
pub mod query;
pub mod session;
pub mod sync;

pub use address_bar::{AddressBar, MemoryAddressBar};
pub use codec::{
    BoolCodec, CodeBlobCodec, Codec, OptionSetCodec, OptionalTextCodec, OptionalTokenCodec,
    PercentCodec, StructuredCodec, TextCodec, Token, TokenCodec, TokenListCodec, ValidatedCodec,
    decode_param, opaque_decode, opaque_encode,
};
pub use config::{DecodePolicy, SyncConfig};
pub use error::{
    DecodeError, DecodeStage, FilterError, NavigationError, Result, SessionError,
};
pub use filter::{FilterDescriptor, FilterSet, FilterSetBuilder, Predicate, effective};
pub use query::QueryString;
pub use session::{PageSession, UrlState};
pub use sync::{ParamTarget, Reconciliation, SyncEngine, SyncPlan, SyncStats};
