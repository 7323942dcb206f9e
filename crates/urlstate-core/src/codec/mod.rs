//! Codec registry: bidirectional mapping between typed domain values and
//! address-bar-safe strings.
//!
//! # Contract
//!
//! - `encode` is total over valid domain values. `None` means "omit from URL".
//! - `decode` is total over every input, including absent and malformed
//!   strings. Ambiguity resolves to the codec's documented default.
//! - `try_decode` is the fallible view used under [`DecodePolicy::Strict`];
//!   only the opaque (structured / code blob) codecs ever return an error.

mod opaque;
mod scalar;
mod token;

pub use opaque::{CodeBlobCodec, StructuredCodec, opaque_decode, opaque_encode};
pub use scalar::{BoolCodec, OptionalTextCodec, PercentCodec, TextCodec, ValidatedCodec};
pub use token::{OptionSetCodec, OptionalTokenCodec, Token, TokenCodec, TokenListCodec};

use crate::config::DecodePolicy;
use crate::error::DecodeError;
use crate::query::QueryString;

/// An encode/decode pair for one semantic field type.
pub trait Codec {
    /// Domain value carried by the field.
    type Value;

    /// Encode a value for the query string. `None` omits the parameter.
    fn encode(&self, value: &Self::Value) -> Option<String>;

    /// Decode a raw parameter (`None` when absent). Never fails.
    fn decode(&self, raw: Option<&str>) -> Self::Value;

    /// Decode, reporting malformed input instead of substituting a default.
    fn try_decode(&self, raw: Option<&str>) -> Result<Self::Value, DecodeError> {
        Ok(self.decode(raw))
    }
}

impl<C: Codec + ?Sized> Codec for &C {
    type Value = C::Value;

    fn encode(&self, value: &Self::Value) -> Option<String> {
        (**self).encode(value)
    }

    fn decode(&self, raw: Option<&str>) -> Self::Value {
        (**self).decode(raw)
    }

    fn try_decode(&self, raw: Option<&str>) -> Result<Self::Value, DecodeError> {
        (**self).try_decode(raw)
    }
}

/// Decode `param` from `query` under `policy`.
///
/// Lenient decoding never fails: a malformed payload is logged and replaced by
/// the codec's absent-parameter default.
pub fn decode_param<C: Codec>(
    codec: &C,
    query: &QueryString,
    param: &str,
    policy: DecodePolicy,
) -> Result<C::Value, DecodeError> {
    let raw = query.get(param);
    match codec.try_decode(raw) {
        Ok(value) => Ok(value),
        Err(err) => match policy {
            DecodePolicy::Strict => Err(err.for_param(param)),
            DecodePolicy::Lenient => {
                tracing::warn!(
                    param,
                    stage = %err.stage,
                    error = %err.detail,
                    "malformed query parameter, using default"
                );
                Ok(codec.decode(None))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeStage;
    use tracing_test::traced_test;

    #[test]
    fn decode_param_reads_first_value() {
        let q = QueryString::parse("useApi=1&useApi=false");
        assert_eq!(
            decode_param(&BoolCodec, &q, "useApi", DecodePolicy::Strict),
            Ok(true)
        );
    }

    #[test]
    fn strict_policy_names_the_parameter() {
        let q = QueryString::parse("input=%25%25not-base64");
        let err = decode_param(&CodeBlobCodec, &q, "input", DecodePolicy::Strict).unwrap_err();
        assert_eq!(err.param.as_deref(), Some("input"));
        assert_eq!(err.stage, DecodeStage::Base64);
    }

    #[traced_test]
    #[test]
    fn lenient_policy_falls_back_and_warns() {
        let q = QueryString::parse("input=%25%25not-base64");
        let value = decode_param(&CodeBlobCodec, &q, "input", DecodePolicy::Lenient).unwrap();
        assert_eq!(value, "");
        assert!(logs_contain("malformed query parameter"));
    }

    #[test]
    fn scalar_codecs_never_fail_under_strict() {
        let q = QueryString::parse("slippagePct=abc");
        assert_eq!(
            decode_param(&PercentCodec, &q, "slippagePct", DecodePolicy::Strict),
            Ok("1".to_string())
        );
    }
}
