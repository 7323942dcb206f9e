//! Opaque transform for structured and free-form payloads.
//!
//! ```text
//! encode: text ──base64──▶ ascii ──percent-escape──▶ parameter value
//! decode: parameter value ──unescape──▶ ascii ──base64──▶ bytes ──utf8 | latin-1──▶ text
//! ```
//!
//! Links produced by `btoa` carry Latin-1 bytes; bytes that are not valid
//! UTF-8 are read as Latin-1.
//!
//! Padding is written on encode and optional on decode, so hand-trimmed links
//! still parse.

use std::marker::PhantomData;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::Codec;
use crate::error::{DecodeError, DecodeStage};

const OPAQUE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Apply the opaque transform to `text`.
#[must_use]
pub fn opaque_encode(text: &str) -> String {
    let ascii = OPAQUE.encode(text.as_bytes());
    urlencoding::encode(&ascii).into_owned()
}

/// Reverse the opaque transform.
pub fn opaque_decode(raw: &str) -> Result<String, DecodeError> {
    let ascii = urlencoding::decode(raw)
        .map_err(|e| DecodeError::new(DecodeStage::PercentEscape, e.to_string()))?;
    let bytes = OPAQUE
        .decode(ascii.trim().as_bytes())
        .map_err(|e| DecodeError::new(DecodeStage::Base64, e.to_string()))?;
    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|err| err.into_bytes().into_iter().map(char::from).collect()))
}

/// A serde record carried through the opaque transform as JSON.
///
/// Absence decodes to `T::default()`; malformed input also decodes to the
/// default through [`Codec::decode`], and is reported by [`Codec::try_decode`].
pub struct StructuredCodec<T>(PhantomData<fn() -> T>);

impl<T> StructuredCodec<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for StructuredCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for StructuredCodec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StructuredCodec<T> {}

impl<T> std::fmt::Debug for StructuredCodec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StructuredCodec")
            .field(&std::any::type_name::<T>())
            .finish()
    }
}

impl<T> Codec for StructuredCodec<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    type Value = T;

    fn encode(&self, value: &T) -> Option<String> {
        match serde_json::to_string(value) {
            Ok(json) => Some(opaque_encode(&json)),
            Err(e) => {
                tracing::error!(
                    record = std::any::type_name::<T>(),
                    error = %e,
                    "structured value is not serializable, omitting"
                );
                None
            }
        }
    }

    fn decode(&self, raw: Option<&str>) -> T {
        self.try_decode(raw).unwrap_or_default()
    }

    fn try_decode(&self, raw: Option<&str>) -> Result<T, DecodeError> {
        let Some(raw) = raw.filter(|s| !s.is_empty()) else {
            return Ok(T::default());
        };
        let json = opaque_decode(raw)?;
        serde_json::from_str(&json).map_err(|e| DecodeError::new(DecodeStage::Json, e.to_string()))
    }
}

/// Free-form multi-line text (e.g. a JSON location the user edits).
///
/// Absence decodes to the empty string; empty text is omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeBlobCodec;

impl Codec for CodeBlobCodec {
    type Value = String;

    fn encode(&self, value: &String) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        Some(opaque_encode(value))
    }

    fn decode(&self, raw: Option<&str>) -> String {
        self.try_decode(raw).unwrap_or_default()
    }

    fn try_decode(&self, raw: Option<&str>) -> Result<String, DecodeError> {
        match raw.filter(|s| !s.is_empty()) {
            None => Ok(String::new()),
            Some(raw) => opaque_decode(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    struct Entry {
        option_id: String,
        amount: String,
        is_max: bool,
    }

    impl Default for Entry {
        fn default() -> Self {
            Self {
                option_id: String::new(),
                amount: "10".into(),
                is_max: false,
            }
        }
    }

    #[test]
    fn opaque_matches_btoa_then_encode_uri_component() {
        // btoa('{"a":1}') == "eyJhIjoxfQ==", then '=' escapes to %3D.
        assert_eq!(opaque_encode("{\"a\":1}"), "eyJhIjoxfQ%3D%3D");
        assert_eq!(opaque_decode("eyJhIjoxfQ%3D%3D").unwrap(), "{\"a\":1}");
    }

    #[test]
    fn opaque_decode_tolerates_missing_padding() {
        assert_eq!(opaque_decode("eyJhIjoxfQ").unwrap(), "{\"a\":1}");
    }

    #[test]
    fn opaque_decode_reports_stage() {
        assert_eq!(
            opaque_decode("!!!").unwrap_err().stage,
            DecodeStage::Base64
        );
        assert_eq!(
            opaque_decode("%FF").unwrap_err().stage,
            DecodeStage::PercentEscape
        );
    }

    #[test]
    fn opaque_decode_reads_latin1_bytes() {
        // btoa('{"a":"\u00e9"}'): the 0xe9 byte alone is not UTF-8.
        assert_eq!(opaque_decode("eyJhIjoi6SJ9").unwrap(), "{\"a\":\"é\"}");
        assert_eq!(opaque_decode("%2Fw%3D%3D").unwrap(), "\u{ff}");
    }

    #[test]
    fn structured_decodes_latin1_payload() {
        let codec = StructuredCodec::<Entry>::new();
        // btoa('{"optionId":"caf\u00e9"}')
        let decoded = codec.try_decode(Some("eyJvcHRpb25JZCI6ImNhZukifQ%3D%3D")).unwrap();
        assert_eq!(decoded.option_id, "café");
    }

    #[test]
    fn structured_round_trip() {
        let codec = StructuredCodec::<Entry>::new();
        let entry = Entry {
            option_id: "DOT-native".into(),
            amount: "2.5".into(),
            is_max: true,
        };
        let encoded = codec.encode(&entry).unwrap();
        assert_eq!(codec.decode(Some(&encoded)), entry);
    }

    #[test]
    fn structured_absent_is_default() {
        let codec = StructuredCodec::<Entry>::new();
        assert_eq!(codec.decode(None), Entry::default());
        assert_eq!(codec.try_decode(Some("")).unwrap(), Entry::default());
    }

    #[test]
    fn structured_malformed_json_is_reported() {
        let codec = StructuredCodec::<Entry>::new();
        let raw = opaque_encode("{not json");
        let err = codec.try_decode(Some(&raw)).unwrap_err();
        assert_eq!(err.stage, DecodeStage::Json);
        assert_eq!(codec.decode(Some(&raw)), Entry::default());
    }

    #[test]
    fn structured_missing_fields_use_defaults() {
        let codec = StructuredCodec::<Entry>::new();
        let raw = opaque_encode("{\"optionId\":\"KSM\"}");
        let decoded = codec.decode(Some(&raw));
        assert_eq!(decoded.option_id, "KSM");
        assert_eq!(decoded.amount, "10");
    }

    #[test]
    fn code_blob_round_trip_multiline() {
        let text = "{\n  \"parents\": 1,\n  \"interior\": \"Here\"\n}".to_string();
        let encoded = CodeBlobCodec.encode(&text).unwrap();
        assert!(!encoded.contains('\n'));
        assert_eq!(CodeBlobCodec.decode(Some(&encoded)), text);
    }

    #[test]
    fn code_blob_empty_and_absent() {
        assert_eq!(CodeBlobCodec.encode(&String::new()), None);
        assert_eq!(CodeBlobCodec.decode(None), "");
    }
}
