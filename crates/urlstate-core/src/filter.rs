//! Filter descriptors and their ordered builder.
//!
//! A [`FilterDescriptor`] binds one query parameter to a value source, a
//! codec and an optional inclusion predicate. Descriptors hold no mutable data
//! and are rebuilt freely; a page owns one [`FilterSet`] built once at mount.
//!
//! `S` is the canonical page state and `O` the transient override (form
//! values). When an override is present it wins for every field it supplies.

use std::collections::HashMap;
use std::fmt;

use crate::codec::Codec;
use crate::error::FilterError;
use crate::sync::ParamTarget;

/// Pure inclusion rule over canonical state and the optional override.
pub type Predicate<S, O> = fn(&S, Option<&O>) -> bool;

type Encoder<S, O> = Box<dyn Fn(&S, Option<&O>) -> Option<String>>;

/// Declarative binding of one query parameter.
pub struct FilterDescriptor<S, O = S> {
    param: &'static str,
    encoder: Encoder<S, O>,
    include: Option<Predicate<S, O>>,
}

impl<S: 'static, O: 'static> FilterDescriptor<S, O> {
    /// Bespoke descriptor: `source` derives an owned value from both snapshots.
    pub fn derived<V, C>(param: &'static str, source: fn(&S, Option<&O>) -> V, codec: C) -> Self
    where
        V: 'static,
        C: Codec<Value = V> + 'static,
    {
        Self {
            param,
            encoder: Box::new(move |state, overlay| codec.encode(&source(state, overlay))),
            include: None,
        }
    }

    /// Field read from canonical state, overridden by `overlay` when it yields a value.
    pub fn field<V, C>(
        param: &'static str,
        canonical: fn(&S) -> &V,
        overlay: fn(&O) -> Option<&V>,
        codec: C,
    ) -> Self
    where
        V: 'static,
        C: Codec<Value = V> + 'static,
    {
        Self {
            param,
            encoder: Box::new(move |state, over| {
                let value = over.and_then(overlay).unwrap_or_else(|| canonical(state));
                codec.encode(value)
            }),
            include: None,
        }
    }

    /// Only serialize the parameter while `predicate` holds.
    #[must_use]
    pub fn include_if(mut self, predicate: Predicate<S, O>) -> Self {
        self.include = Some(predicate);
        self
    }

    #[must_use]
    pub fn param(&self) -> &'static str {
        self.param
    }

    #[must_use]
    pub fn is_conditional(&self) -> bool {
        self.include.is_some()
    }

    /// Evaluate the inclusion predicate (always true when none is set).
    #[must_use]
    pub fn is_included(&self, state: &S, overlay: Option<&O>) -> bool {
        self.include.is_none_or(|p| p(state, overlay))
    }

    /// Compute this descriptor's contribution for one cycle.
    #[must_use]
    pub fn evaluate(&self, state: &S, overlay: Option<&O>) -> ParamTarget {
        if !self.is_included(state, overlay) {
            return ParamTarget::Omit;
        }
        match (self.encoder)(state, overlay) {
            Some(value) if !value.is_empty() => ParamTarget::Set(value),
            _ => ParamTarget::Omit,
        }
    }
}

impl<S, O> fmt::Debug for FilterDescriptor<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterDescriptor")
            .field("param", &self.param)
            .field("conditional", &self.include.is_some())
            .finish_non_exhaustive()
    }
}

/// Ordered, immutable descriptor list for one page.
pub struct FilterSet<S, O = S> {
    descriptors: Vec<FilterDescriptor<S, O>>,
}

impl<S, O> FilterSet<S, O> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterDescriptor<S, O>> + '_ {
        self.descriptors.iter()
    }

    /// Owned parameter names, in registration order.
    pub fn params(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors.iter().map(|d| d.param)
    }

    #[must_use]
    pub fn get(&self, param: &str) -> Option<&FilterDescriptor<S, O>> {
        self.descriptors.iter().find(|d| d.param == param)
    }
}

impl<S, O> fmt::Debug for FilterSet<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.descriptors.iter()).finish()
    }
}

/// Fluent accumulator of descriptors in caller order.
pub struct FilterSetBuilder<S, O = S> {
    descriptors: Vec<FilterDescriptor<S, O>>,
}

impl<S: 'static, O: 'static> Default for FilterSetBuilder<S, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: 'static, O: 'static> FilterSetBuilder<S, O> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Append a fully custom descriptor.
    #[must_use]
    pub fn custom(mut self, descriptor: FilterDescriptor<S, O>) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Shorthand: canonical accessor plus an override accessor under a
    /// possibly different name.
    #[must_use]
    pub fn field_with_override<V, C>(
        self,
        param: &'static str,
        canonical: fn(&S) -> &V,
        overlay: fn(&O) -> Option<&V>,
        codec: C,
    ) -> Self
    where
        V: 'static,
        C: Codec<Value = V> + 'static,
    {
        self.custom(FilterDescriptor::field(param, canonical, overlay, codec))
    }

    /// Build, rejecting duplicate parameter names.
    pub fn try_build(self) -> Result<FilterSet<S, O>, FilterError> {
        let mut seen: HashMap<&'static str, usize> = HashMap::new();
        for (idx, descriptor) in self.descriptors.iter().enumerate() {
            if let Some(&first) = seen.get(descriptor.param) {
                return Err(FilterError::DuplicateParam {
                    param: descriptor.param,
                    first,
                    duplicate: idx,
                });
            }
            seen.insert(descriptor.param, idx);
        }
        Ok(FilterSet {
            descriptors: self.descriptors,
        })
    }

    /// Build the descriptor list.
    ///
    /// Duplicate parameter names are a construction defect: debug builds
    /// panic, release builds log an error and keep the first descriptor.
    #[must_use]
    pub fn build(self) -> FilterSet<S, O> {
        let mut seen: HashMap<&'static str, usize> = HashMap::new();
        let mut descriptors = Vec::with_capacity(self.descriptors.len());
        for (idx, descriptor) in self.descriptors.into_iter().enumerate() {
            if let Some(&first) = seen.get(descriptor.param) {
                let err = FilterError::DuplicateParam {
                    param: descriptor.param,
                    first,
                    duplicate: idx,
                };
                debug_assert!(false, "{err}");
                tracing::error!(error = %err, "dropping duplicate filter descriptor");
                continue;
            }
            seen.insert(descriptor.param, idx);
            descriptors.push(descriptor);
        }
        FilterSet { descriptors }
    }
}

impl<S: 'static> FilterSetBuilder<S, S> {
    /// Shorthand for pages whose override has the same shape as the state:
    /// the value is read from the override when present, else from state.
    #[must_use]
    pub fn field<V, C>(self, param: &'static str, get: fn(&S) -> &V, codec: C) -> Self
    where
        V: 'static,
        C: Codec<Value = V> + 'static,
    {
        self.custom(FilterDescriptor::derived_ref(param, get, codec))
    }

    /// Like [`field`](Self::field), serialized only while `predicate` holds.
    #[must_use]
    pub fn field_if<V, C>(
        self,
        param: &'static str,
        get: fn(&S) -> &V,
        codec: C,
        predicate: Predicate<S, S>,
    ) -> Self
    where
        V: 'static,
        C: Codec<Value = V> + 'static,
    {
        self.custom(FilterDescriptor::derived_ref(param, get, codec).include_if(predicate))
    }
}

impl<S: 'static> FilterDescriptor<S, S> {
    /// Field read from the override snapshot when present, else from state.
    pub fn derived_ref<V, C>(param: &'static str, get: fn(&S) -> &V, codec: C) -> Self
    where
        V: 'static,
        C: Codec<Value = V> + 'static,
    {
        Self {
            param,
            encoder: Box::new(move |state, overlay| codec.encode(get(overlay.unwrap_or(state)))),
            include: None,
        }
    }
}

/// The snapshot a predicate should read: the override when present.
#[must_use]
pub fn effective<'a, S>(state: &'a S, overlay: Option<&'a S>) -> &'a S {
    overlay.unwrap_or(state)
}
