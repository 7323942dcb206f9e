//! Scalar codecs: booleans, free text, percentages, validated identifiers.

use super::Codec;

/// Boolean toggle: `"true"` / `"false"`.
///
/// Decoding is tolerant: true iff the trimmed, lower-cased input is `"true"`
/// or `"1"`; anything else (including absence) is false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolCodec;

impl Codec for BoolCodec {
    type Value = bool;

    fn encode(&self, value: &bool) -> Option<String> {
        Some(if *value { "true" } else { "false" }.to_owned())
    }

    fn decode(&self, raw: Option<&str>) -> bool {
        raw.map(|s| s.trim().to_ascii_lowercase())
            .is_some_and(|s| s == "true" || s == "1")
    }
}

/// Free text, passed through unchanged. Absent decodes to `absent`.
///
/// Empty text encodes to an empty string, which the engine omits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCodec {
    absent: &'static str,
}

impl TextCodec {
    #[must_use]
    pub const fn new() -> Self {
        Self { absent: "" }
    }

    /// Text field whose absent value is `absent` (e.g. amount `"10"`).
    #[must_use]
    pub const fn with_default(absent: &'static str) -> Self {
        Self { absent }
    }
}

impl Codec for TextCodec {
    type Value = String;

    fn encode(&self, value: &String) -> Option<String> {
        Some(value.clone())
    }

    fn decode(&self, raw: Option<&str>) -> String {
        raw.unwrap_or(self.absent).to_owned()
    }
}

/// Optional free text; `None` is omitted and absence decodes to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalTextCodec;

impl Codec for OptionalTextCodec {
    type Value = Option<String>;

    fn encode(&self, value: &Option<String>) -> Option<String> {
        value.clone()
    }

    fn decode(&self, raw: Option<&str>) -> Option<String> {
        raw.filter(|s| !s.is_empty()).map(str::to_owned)
    }
}

/// Percentage in `[0, 100]`, carried as its decimal string.
///
/// Absent, empty, non-numeric, non-finite and out-of-range input decode to
/// [`PercentCodec::FALLBACK`]. Valid input is normalized to its shortest
/// decimal rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PercentCodec;

impl PercentCodec {
    pub const FALLBACK: &'static str = "1";

    /// Normalize `raw` if it is a percentage in range.
    #[must_use]
    pub fn normalize(raw: &str) -> Option<String> {
        let num: f64 = raw.trim().parse().ok()?;
        if !num.is_finite() || !(0.0..=100.0).contains(&num) {
            return None;
        }
        if num == 0.0 {
            // Covers "-0".
            return Some("0".to_owned());
        }
        Some(num.to_string())
    }
}

impl Codec for PercentCodec {
    type Value = String;

    fn encode(&self, value: &String) -> Option<String> {
        Some(value.clone())
    }

    fn decode(&self, raw: Option<&str>) -> String {
        raw.filter(|s| !s.is_empty())
            .and_then(Self::normalize)
            .unwrap_or_else(|| Self::FALLBACK.to_owned())
    }
}

/// Text accepted only when `is_valid` holds, else replaced by `fallback`.
///
/// Used for addresses, where the fallback is a placeholder address.
#[derive(Clone, Copy)]
pub struct ValidatedCodec {
    is_valid: fn(&str) -> bool,
    fallback: &'static str,
}

impl ValidatedCodec {
    #[must_use]
    pub const fn new(is_valid: fn(&str) -> bool, fallback: &'static str) -> Self {
        Self { is_valid, fallback }
    }

    #[must_use]
    pub const fn fallback(&self) -> &'static str {
        self.fallback
    }
}

impl std::fmt::Debug for ValidatedCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedCodec")
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl Codec for ValidatedCodec {
    type Value = String;

    fn encode(&self, value: &String) -> Option<String> {
        Some(value.clone())
    }

    fn decode(&self, raw: Option<&str>) -> String {
        match raw {
            Some(s) if (self.is_valid)(s) => s.to_owned(),
            _ => self.fallback.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_encode_literals() {
        assert_eq!(BoolCodec.encode(&true).as_deref(), Some("true"));
        assert_eq!(BoolCodec.encode(&false).as_deref(), Some("false"));
    }

    #[test]
    fn bool_decode_is_tolerant() {
        assert!(BoolCodec.decode(Some("true")));
        assert!(BoolCodec.decode(Some(" TRUE ")));
        assert!(BoolCodec.decode(Some("1")));
        assert!(!BoolCodec.decode(Some("yes")));
        assert!(!BoolCodec.decode(Some("0")));
        assert!(!BoolCodec.decode(Some("")));
    }

    #[test]
    fn bool_absent_is_false() {
        assert!(!BoolCodec.decode(None));
    }

    #[test]
    fn text_default_applies_only_when_absent() {
        let amount = TextCodec::with_default("10");
        assert_eq!(amount.decode(None), "10");
        assert_eq!(amount.decode(Some("2.5")), "2.5");
        assert_eq!(TextCodec::new().decode(None), "");
    }

    #[test]
    fn optional_text_omits_none() {
        assert_eq!(OptionalTextCodec.encode(&None), None);
        assert_eq!(OptionalTextCodec.decode(Some("")), None);
        assert_eq!(OptionalTextCodec.decode(Some("x")), Some("x".to_string()));
    }

    #[test]
    fn percent_out_of_range_falls_back() {
        assert_eq!(PercentCodec.decode(Some("150")), "1");
        assert_eq!(PercentCodec.decode(Some("-1")), "1");
        assert_eq!(PercentCodec.decode(Some("100.01")), "1");
    }

    #[test]
    fn percent_non_numeric_falls_back() {
        assert_eq!(PercentCodec.decode(None), "1");
        assert_eq!(PercentCodec.decode(Some("")), "1");
        assert_eq!(PercentCodec.decode(Some("abc")), "1");
        assert_eq!(PercentCodec.decode(Some("NaN")), "1");
        assert_eq!(PercentCodec.decode(Some("inf")), "1");
    }

    #[test]
    fn percent_bounds_are_inclusive_and_normalized() {
        assert_eq!(PercentCodec.decode(Some("0")), "0");
        assert_eq!(PercentCodec.decode(Some("100")), "100");
        assert_eq!(PercentCodec.decode(Some("05")), "5");
        assert_eq!(PercentCodec.decode(Some("0.50")), "0.5");
        assert_eq!(PercentCodec.decode(Some("-0")), "0");
    }

    #[test]
    fn validated_uses_fallback_for_invalid() {
        let codec = ValidatedCodec::new(|s| s.starts_with("0x"), "0xdead");
        assert_eq!(codec.decode(Some("0xabc")), "0xabc");
        assert_eq!(codec.decode(Some("abc")), "0xdead");
        assert_eq!(codec.decode(None), "0xdead");
        assert_eq!(codec.fallback(), "0xdead");
    }
}
