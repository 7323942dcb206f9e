//! Two-phase synchronization: compute, then reconcile.
//!
//! # Compute
//!
//! [`SyncPlan::compute`] evaluates every descriptor against the canonical
//! state and the optional override. Descriptors whose predicate is false or
//! whose encoding is empty contribute [`ParamTarget::Omit`].
//!
//! # Reconcile
//!
//! [`SyncEngine::commit`] reads the live query, applies the plan to a copy
//! (owned keys set or deleted, foreign keys untouched), and replaces the
//! address bar entry only if the serialized result differs.
//!
//! Several `observe` calls between two commits coalesce: only the latest plan
//! is applied.

use std::fmt;

use crate::address_bar::AddressBar;
use crate::config::SyncConfig;
use crate::error::NavigationError;
use crate::filter::FilterSet;
use crate::query::QueryString;

/// Desired state of one owned parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamTarget {
    /// Write this non-empty value.
    Set(String),
    /// Remove the parameter.
    Omit,
}

impl ParamTarget {
    #[must_use]
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Set(value) => Some(value),
            Self::Omit => None,
        }
    }
}

/// Ordered desired values for every owned parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncPlan {
    targets: Vec<(&'static str, ParamTarget)>,
}

impl SyncPlan {
    /// Evaluate `filters` against one state snapshot.
    #[must_use]
    pub fn compute<S, O>(filters: &FilterSet<S, O>, state: &S, overlay: Option<&O>) -> Self
    where
        S: 'static,
        O: 'static,
    {
        Self {
            targets: filters
                .iter()
                .map(|d| (d.param(), d.evaluate(state, overlay)))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, param: &str) -> Option<&ParamTarget> {
        self.targets
            .iter()
            .find(|(p, _)| *p == param)
            .map(|(_, t)| t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamTarget)> + '_ {
        self.targets.iter().map(|(p, t)| (*p, t))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Number of parameters the plan writes.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|(_, t)| matches!(t, ParamTarget::Set(_)))
            .count()
    }

    /// Apply the plan to a copy of `current`. Keys the plan does not own are
    /// kept in place.
    #[must_use]
    pub fn apply_to(&self, current: &QueryString) -> QueryString {
        let mut next = current.clone();
        for (param, target) in &self.targets {
            next.set_or_delete(param, target.as_value());
        }
        next
    }
}

impl fmt::Display for SyncPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (param, target) in &self.targets {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            match target {
                ParamTarget::Set(value) => write!(f, "{param}={value}")?,
                ParamTarget::Omit => write!(f, "-{param}")?,
            }
        }
        Ok(())
    }
}

/// Outcome of one reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Serialized query already matched; nothing was written.
    Unchanged,
    /// The current entry was replaced.
    Replaced { previous: String, next: String },
}

impl Reconciliation {
    #[must_use]
    pub fn wrote(&self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}

/// Counters for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Plans computed.
    pub cycles: u64,
    /// Address bar replacements performed.
    pub writes: u64,
    /// Commits that found the query already up to date.
    pub skipped: u64,
    /// Pending plans replaced by a newer one before commit.
    pub superseded: u64,
    /// Commits that failed at the address bar.
    pub failures: u64,
}

/// Owns a page's descriptors and the plan awaiting commit.
pub struct SyncEngine<S, O = S> {
    filters: FilterSet<S, O>,
    config: SyncConfig,
    pending: Option<SyncPlan>,
    stats: SyncStats,
}

impl<S: 'static, O: 'static> SyncEngine<S, O> {
    #[must_use]
    pub fn new(filters: FilterSet<S, O>, config: SyncConfig) -> Self {
        Self {
            filters,
            config,
            pending: None,
            stats: SyncStats::default(),
        }
    }

    #[must_use]
    pub fn filters(&self) -> &FilterSet<S, O> {
        &self.filters
    }

    #[must_use]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Compute phase: record the plan for a new state snapshot.
    ///
    /// Replaces any plan not yet committed.
    pub fn observe(&mut self, state: &S, overlay: Option<&O>) {
        let plan = SyncPlan::compute(&self.filters, state, overlay);
        self.stats.cycles += 1;
        if self.config.trace_plans {
            tracing::debug!(
                owned = plan.len(),
                set = plan.set_count(),
                plan = %plan,
                "computed sync plan"
            );
        }
        if self.pending.replace(plan).is_some() {
            self.stats.superseded += 1;
            tracing::trace!("superseded uncommitted sync plan");
        }
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&SyncPlan> {
        self.pending.as_ref()
    }

    /// Reconcile phase for the pending plan.
    ///
    /// With nothing pending this is a no-op. On a navigation error the plan is
    /// kept so the next commit retries it.
    pub fn commit<B>(&mut self, bar: &mut B) -> Result<Reconciliation, NavigationError>
    where
        B: AddressBar + ?Sized,
    {
        let Some(plan) = self.pending.take() else {
            return Ok(Reconciliation::Unchanged);
        };
        match self.reconcile(&plan, bar) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                self.pending = Some(plan);
                Err(err)
            }
        }
    }

    /// Compute and reconcile in one step.
    pub fn sync<B>(
        &mut self,
        state: &S,
        overlay: Option<&O>,
        bar: &mut B,
    ) -> Result<Reconciliation, NavigationError>
    where
        B: AddressBar + ?Sized,
    {
        self.observe(state, overlay);
        self.commit(bar)
    }

    /// Apply `plan` against the live query string of `bar`.
    pub fn reconcile<B>(
        &mut self,
        plan: &SyncPlan,
        bar: &mut B,
    ) -> Result<Reconciliation, NavigationError>
    where
        B: AddressBar + ?Sized,
    {
        let current = QueryString::parse(&bar.search()?);
        let previous = current.serialize();
        let next = plan.apply_to(&current).serialize();

        if next == previous {
            self.stats.skipped += 1;
            tracing::trace!(backend = bar.name(), "query already in sync");
            return Ok(Reconciliation::Unchanged);
        }

        if !bar.is_available() {
            self.stats.failures += 1;
            tracing::warn!(backend = bar.name(), "address bar unavailable, write deferred");
            return Err(NavigationError::Unavailable(format!(
                "{} is not writable",
                bar.name()
            )));
        }

        if let Err(err) = bar.replace_search(&next) {
            self.stats.failures += 1;
            tracing::warn!(backend = bar.name(), error = %err, "address bar write failed");
            return Err(err);
        }
        self.stats.writes += 1;
        tracing::debug!(
            backend = bar.name(),
            previous = %previous,
            next = %next,
            "replaced query string"
        );
        Ok(Reconciliation::Replaced { previous, next })
    }

    #[must_use]
    pub fn stats(&self) -> SyncStats {
        self.stats
    }
}

impl<S, O> fmt::Debug for SyncEngine<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncEngine")
            .field("filters", &self.filters.len())
            .field("config", &self.config)
            .field("pending", &self.pending.is_some())
            .field("stats", &self.stats)
            .finish()
    }
}
