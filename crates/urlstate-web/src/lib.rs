#![forbid(unsafe_code)]

//! Browser frontend for urlstate.
//!
//! Two layers:
//! - [`bridge`]: target-independent JSON sessions. Any playground page can be
//!   mounted by name over any [`AddressBar`](urlstate_core::AddressBar) and
//!   driven with JSON snapshots of its state and form override.
//! - `wasm` (wasm32 only): `BrowserAddressBar` over `window.location` and
//!   `window.history.replaceState`, plus the `UrlStateSession` JS class.

pub mod bridge;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use bridge::{BridgeError, JsonPage, open_page, open_page_by_name};

#[cfg(target_arch = "wasm32")]
pub use wasm::{BrowserAddressBar, UrlStateSession};

/// Native builds expose the JS class as a plain boxed session so hosts and
/// tests share one surface.
#[cfg(not(target_arch = "wasm32"))]
pub type UrlStateSession = Box<dyn JsonPage>;
