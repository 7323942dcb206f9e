//! Mounted pages.
//!
//! A [`PageSession`] owns one page's canonical state, the transient override
//! (unsubmitted form values), its [`SyncEngine`] and the [`AddressBar`] it
//! mirrors into. Every mutation recomputes the plan; the host decides when to
//! [`commit`](PageSession::commit) (typically once per render).
//!
//! ```ignore
//! let mut session = PageSession::<XcmTransferState, _>::mount(bar, SyncConfig::from_env())?;
//! session.update(|s| s.from = "Hydration".into());
//! session.commit()?;
//! ```

use std::fmt;

use crate::address_bar::AddressBar;
use crate::config::{DecodePolicy, SyncConfig};
use crate::error::{DecodeError, Result};
use crate::filter::FilterSet;
use crate::query::QueryString;
use crate::sync::{Reconciliation, SyncEngine, SyncStats};

/// Page state that round-trips through the query string.
pub trait UrlState: Sized + 'static {
    /// Stable page identifier for logs.
    const PAGE: &'static str;

    /// Build initial state from the query string. Every field is resolved
    /// through its codec, so absent or invalid parameters yield defaults.
    fn decode(query: &QueryString, policy: DecodePolicy) -> std::result::Result<Self, DecodeError>;

    /// The page's descriptor list.
    fn filters() -> FilterSet<Self>;
}

/// One mounted page bound to an address bar.
pub struct PageSession<P: UrlState, B: AddressBar> {
    state: P,
    overlay: Option<P>,
    engine: SyncEngine<P>,
    bar: B,
    policy: DecodePolicy,
    revision: u64,
}

impl<P: UrlState, B: AddressBar> PageSession<P, B> {
    /// Decode initial state from `bar` and compute the first plan.
    pub fn mount(bar: B, config: SyncConfig) -> Result<Self> {
        let query = QueryString::parse(&bar.search()?);
        let policy = config.decode_policy;
        let state = P::decode(&query, policy)?;
        let engine = SyncEngine::new(P::filters(), config);
        tracing::info!(
            page = P::PAGE,
            backend = bar.name(),
            params = query.len(),
            "mounted page session"
        );
        let mut session = Self {
            state,
            overlay: None,
            engine,
            bar,
            policy,
            revision: 0,
        };
        session.observe();
        Ok(session)
    }

    fn observe(&mut self) {
        self.revision += 1;
        self.engine.observe(&self.state, self.overlay.as_ref());
    }

    /// Canonical (submitted) state.
    #[must_use]
    pub fn state(&self) -> &P {
        &self.state
    }

    /// Unsubmitted form values, if any.
    #[must_use]
    pub fn overlay(&self) -> Option<&P> {
        self.overlay.as_ref()
    }

    /// What the page shows: the override when present, else the state.
    #[must_use]
    pub fn view(&self) -> &P {
        self.overlay.as_ref().unwrap_or(&self.state)
    }

    pub fn set_state(&mut self, state: P) {
        self.state = state;
        self.observe();
    }

    /// Mutate canonical state in place.
    pub fn update(&mut self, f: impl FnOnce(&mut P)) {
        f(&mut self.state);
        self.observe();
    }

    /// Replace the override snapshot (`None` clears it).
    pub fn set_overlay(&mut self, overlay: Option<P>) {
        self.overlay = overlay;
        self.observe();
    }

    pub fn clear_overlay(&mut self) {
        self.set_overlay(None);
    }

    /// Promote the override to canonical state (form submit).
    pub fn submit(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            self.state = overlay;
        }
        self.observe();
    }

    /// Re-decode state from the address bar, e.g. after back navigation.
    ///
    /// Drops the override and leaves the address bar untouched until the next
    /// commit.
    pub fn reload(&mut self) -> Result<()> {
        let query = QueryString::parse(&self.bar.search()?);
        self.state = P::decode(&query, self.policy)?;
        self.overlay = None;
        tracing::debug!(page = P::PAGE, "reloaded state from address bar");
        self.observe();
        Ok(())
    }

    /// Reconcile the pending plan with the address bar.
    pub fn commit(&mut self) -> Result<Reconciliation> {
        Ok(self.engine.commit(&mut self.bar)?)
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.engine.has_pending()
    }

    #[must_use]
    pub fn address_bar(&self) -> &B {
        &self.bar
    }

    /// Mutable access for simulated navigation. Call
    /// [`reload`](Self::reload) afterwards to pick up the new query.
    pub fn address_bar_mut(&mut self) -> &mut B {
        &mut self.bar
    }

    #[must_use]
    pub fn stats(&self) -> SyncStats {
        self.engine.stats()
    }

    /// Incremented on every state or override change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Unmount, returning the state and the address bar.
    #[must_use]
    pub fn into_parts(self) -> (P, B) {
        (self.state, self.bar)
    }
}

impl<P: UrlState + fmt::Debug, B: AddressBar + fmt::Debug> fmt::Debug for PageSession<P, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageSession")
            .field("page", &P::PAGE)
            .field("state", &self.state)
            .field("overlay", &self.overlay)
            .field("engine", &self.engine)
            .field("bar", &self.bar)
            .field("revision", &self.revision)
            .finish()
    }
}
