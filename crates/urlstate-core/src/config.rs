//! Synchronization configuration.
//!
//! Hosts build a [`SyncConfig`] directly or read it from the environment:
//!
//! ```bash
//! URLSTATE_DECODE_POLICY=strict URLSTATE_TRACE=1 cargo test
//! ```
//!
//! On `wasm32-unknown-unknown` the environment is empty, so
//! [`SyncConfig::from_env`] yields the defaults.

/// How malformed structured payloads are handled at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecodePolicy {
    /// Fall back to the documented default record and log a warning.
    #[default]
    Lenient,
    /// Surface a [`DecodeError`](crate::DecodeError) so the host can report an invalid link.
    Strict,
}

impl DecodePolicy {
    /// Parse `strict` / `lenient` (case-insensitive).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("strict") {
            Some(Self::Strict)
        } else if raw.eq_ignore_ascii_case("lenient") {
            Some(Self::Lenient)
        } else {
            None
        }
    }
}

/// Engine and session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncConfig {
    /// Policy applied when decoding the incoming query string at mount.
    pub decode_policy: DecodePolicy,
    /// Log every computed plan at debug level, not only writes.
    pub trace_plans: bool,
}

impl SyncConfig {
    /// Environment variable selecting the decode policy.
    pub const DECODE_POLICY_VAR: &'static str = "URLSTATE_DECODE_POLICY";
    /// Environment variable enabling plan tracing.
    pub const TRACE_VAR: &'static str = "URLSTATE_TRACE";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decode policy.
    #[must_use]
    pub fn decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    /// Enable or disable plan tracing.
    #[must_use]
    pub fn trace_plans(mut self, enabled: bool) -> Self {
        self.trace_plans = enabled;
        self
    }

    /// Read configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Unknown or unparsable values keep the defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(Self::DECODE_POLICY_VAR) {
            match DecodePolicy::parse(&raw) {
                Some(policy) => config.decode_policy = policy,
                None => tracing::warn!(
                    var = Self::DECODE_POLICY_VAR,
                    value = %raw,
                    "unknown decode policy, keeping default"
                ),
            }
        }
        if let Some(raw) = lookup(Self::TRACE_VAR) {
            config.trace_plans = raw == "1" || raw.eq_ignore_ascii_case("true");
        }
        config
    }
}
