//! JSON sessions over any address bar.
//!
//! The JS side never sees Rust page types. It mounts a page by name and
//! exchanges JSON snapshots shaped like the page store (camelCase fields).
//! State snapshots fill missing fields with defaults; overrides fill them
//! from canonical state.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use urlstate_core::{
    AddressBar, PageSession, SessionError, SyncConfig, SyncStats, Token, UrlState,
};
use urlstate_pages::{
    AssetClaimState, AssetQueryState, EvmTransferState, PageKind, PalletQueryState,
    SelectedApiTypeState, XcmAnalyserState, XcmRouterState, XcmTransferState,
};

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum BridgeError {
    /// No page is registered under this name.
    UnknownPage(String),
    /// A snapshot did not match the page store.
    Json(serde_json::Error),
    Session(SessionError),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPage(name) => write!(f, "unknown page `{name}`"),
            Self::Json(e) => write!(f, "invalid page snapshot: {e}"),
            Self::Session(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownPage(_) => None,
            Self::Json(e) => Some(e),
            Self::Session(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<SessionError> for BridgeError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sessions
// ─────────────────────────────────────────────────────────────────────────────

/// A mounted page driven through JSON snapshots.
pub trait JsonPage {
    /// Page identifier.
    fn page(&self) -> &'static str;

    /// Canonical state as JSON.
    fn state_json(&self) -> Result<String, BridgeError>;

    /// Replace canonical state.
    fn set_state_json(&mut self, json: &str) -> Result<(), BridgeError>;

    /// Override snapshot as JSON, if a form is active.
    fn overlay_json(&self) -> Result<Option<String>, BridgeError>;

    /// Replace the override snapshot; `None` clears it. Fields missing from
    /// the snapshot keep their canonical value.
    fn set_overlay_json(&mut self, json: Option<&str>) -> Result<(), BridgeError>;

    /// Promote the override to canonical state.
    fn submit(&mut self);

    /// Re-decode from the address bar (back/forward navigation).
    fn reload(&mut self) -> Result<(), BridgeError>;

    /// Reconcile with the address bar. Returns whether a write happened.
    fn commit(&mut self) -> Result<bool, BridgeError>;

    /// Current query string of the underlying address bar.
    fn search(&self) -> Result<String, BridgeError>;

    fn has_pending(&self) -> bool;

    fn stats(&self) -> SyncStats;
}

impl<P, B> JsonPage for PageSession<P, B>
where
    P: UrlState + Serialize + DeserializeOwned,
    B: AddressBar,
{
    fn page(&self) -> &'static str {
        P::PAGE
    }

    fn state_json(&self) -> Result<String, BridgeError> {
        Ok(serde_json::to_string(self.state())?)
    }

    fn set_state_json(&mut self, json: &str) -> Result<(), BridgeError> {
        let state: P = serde_json::from_str(json)?;
        self.set_state(state);
        Ok(())
    }

    fn overlay_json(&self) -> Result<Option<String>, BridgeError> {
        self.overlay()
            .map(serde_json::to_string)
            .transpose()
            .map_err(BridgeError::from)
    }

    fn set_overlay_json(&mut self, json: Option<&str>) -> Result<(), BridgeError> {
        let overlay = json.map(|json| merge_onto(self.state(), json)).transpose()?;
        self.set_overlay(overlay);
        Ok(())
    }

    fn submit(&mut self) {
        PageSession::submit(self);
    }

    fn reload(&mut self) -> Result<(), BridgeError> {
        Ok(PageSession::reload(self)?)
    }

    fn commit(&mut self) -> Result<bool, BridgeError> {
        Ok(PageSession::commit(self)?.wrote())
    }

    fn search(&self) -> Result<String, BridgeError> {
        self.address_bar()
            .search()
            .map_err(|e| BridgeError::Session(e.into()))
    }

    fn has_pending(&self) -> bool {
        PageSession::has_pending(self)
    }

    fn stats(&self) -> SyncStats {
        PageSession::stats(self)
    }
}

/// Overlay the top-level fields of `patch` on `base`.
fn merge_onto<P>(base: &P, patch: &str) -> Result<P, BridgeError>
where
    P: Serialize + DeserializeOwned,
{
    let Value::Object(updates) = serde_json::from_str::<Value>(patch)? else {
        return Ok(serde_json::from_str(patch)?);
    };
    let mut merged = serde_json::to_value(base)?;
    if let Value::Object(fields) = &mut merged {
        fields.extend(updates);
    }
    Ok(serde_json::from_value(merged)?)
}

fn mount<P, B>(bar: B, config: SyncConfig) -> Result<Box<dyn JsonPage>, BridgeError>
where
    P: UrlState + Serialize + DeserializeOwned,
    B: AddressBar + 'static,
{
    Ok(Box::new(PageSession::<P, B>::mount(bar, config)?))
}

/// Mount `page` over `bar`.
pub fn open_page<B: AddressBar + 'static>(
    page: PageKind,
    bar: B,
    config: SyncConfig,
) -> Result<Box<dyn JsonPage>, BridgeError> {
    match page {
        PageKind::ApiType => mount::<SelectedApiTypeState, B>(bar, config),
        PageKind::XcmTransfer => mount::<XcmTransferState, B>(bar, config),
        PageKind::EvmTransfer => mount::<EvmTransferState, B>(bar, config),
        PageKind::AssetQuery => mount::<AssetQueryState, B>(bar, config),
        PageKind::PalletQuery => mount::<PalletQueryState, B>(bar, config),
        PageKind::AssetClaim => mount::<AssetClaimState, B>(bar, config),
        PageKind::XcmRouter => mount::<XcmRouterState, B>(bar, config),
        PageKind::XcmAnalyser => mount::<XcmAnalyserState, B>(bar, config),
    }
}

/// Mount the page registered as `name` (e.g. `"xcm-transfer"`).
pub fn open_page_by_name<B: AddressBar + 'static>(
    name: &str,
    bar: B,
    config: SyncConfig,
) -> Result<Box<dyn JsonPage>, BridgeError> {
    let page = PageKind::from_token(name).ok_or_else(|| {
        tracing::warn!(page = name, "refusing to mount unknown page");
        BridgeError::UnknownPage(name.to_owned())
    })?;
    open_page(page, bar, config)
}
