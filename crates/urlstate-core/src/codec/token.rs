//! Enumerated-token codecs.
//!
//! Two flavours of option set:
//! - [`Token`] enums for small closed sets (query selectors, currency types).
//! - `&'static [&'static str]` catalogs for large identifier sets (chain names).

use super::Codec;

/// A closed set of string tokens.
///
/// Usually implemented through [`token_enum!`](crate::token_enum).
pub trait Token: Copy + Eq + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// The token written to the query string.
    fn as_str(self) -> &'static str;

    /// Parse an exact token.
    #[must_use]
    fn from_token(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == raw)
    }
}

/// Declare a [`Token`] enum with serde names matching its tokens.
///
/// ```ignore
/// urlstate_core::token_enum! {
///     /// Which API backs the page.
///     pub enum ApiType {
///         Pjs => "PJS",
///         Papi => "PAPI",
///     }
/// }
/// ```
#[macro_export]
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $($(#[$vmeta])* #[serde(rename = $token)] $variant),+
        }

        impl $crate::codec::Token for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::codec::Token::as_str(*self))
            }
        }
    };
}

/// A required [`Token`] field.
///
/// Invalid input decodes to `fallback`; absence decodes to `absent`, which
/// defaults to `fallback`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCodec<T: Token> {
    fallback: T,
    absent: T,
}

impl<T: Token> TokenCodec<T> {
    #[must_use]
    pub const fn new(fallback: T) -> Self {
        Self {
            fallback,
            absent: fallback,
        }
    }

    /// Use a different default when the parameter is missing entirely.
    #[must_use]
    pub const fn when_absent(mut self, absent: T) -> Self {
        self.absent = absent;
        self
    }
}

impl<T: Token> Codec for TokenCodec<T> {
    type Value = T;

    fn encode(&self, value: &T) -> Option<String> {
        Some(value.as_str().to_owned())
    }

    fn decode(&self, raw: Option<&str>) -> T {
        match raw {
            None => self.absent,
            Some(s) => T::from_token(s).unwrap_or(self.fallback),
        }
    }
}

/// An optional [`Token`] field; unknown or absent input decodes to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalTokenCodec<T: Token>(std::marker::PhantomData<T>);

impl<T: Token> OptionalTokenCodec<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: Token> Default for OptionalTokenCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Token> Codec for OptionalTokenCodec<T> {
    type Value = Option<T>;

    fn encode(&self, value: &Option<T>) -> Option<String> {
        value.map(|t| t.as_str().to_owned())
    }

    fn decode(&self, raw: Option<&str>) -> Option<T> {
        raw.and_then(T::from_token)
    }
}

/// A string validated against a static option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSetCodec {
    options: &'static [&'static str],
    fallback: &'static str,
    absent: &'static str,
}

impl OptionSetCodec {
    #[must_use]
    pub const fn new(options: &'static [&'static str], fallback: &'static str) -> Self {
        Self {
            options,
            fallback,
            absent: fallback,
        }
    }

    /// Use a different default when the parameter is missing entirely.
    ///
    /// The absent default is itself validated, so an absent default outside
    /// the option set decodes to `fallback`.
    #[must_use]
    pub const fn when_absent(mut self, absent: &'static str) -> Self {
        self.absent = absent;
        self
    }

    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.options.iter().any(|o| *o == raw)
    }
}

impl Codec for OptionSetCodec {
    type Value = String;

    fn encode(&self, value: &String) -> Option<String> {
        Some(value.clone())
    }

    fn decode(&self, raw: Option<&str>) -> String {
        let candidate = raw.unwrap_or(self.absent);
        if self.contains(candidate) {
            candidate.to_owned()
        } else {
            self.fallback.to_owned()
        }
    }
}

/// Comma-joined list of tokens from a static option set.
///
/// Decoding drops empty segments and silently drops unknown ones. An empty
/// list encodes to omit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenListCodec {
    options: &'static [&'static str],
}

impl TokenListCodec {
    #[must_use]
    pub const fn new(options: &'static [&'static str]) -> Self {
        Self { options }
    }
}

impl Codec for TokenListCodec {
    type Value = Vec<String>;

    fn encode(&self, value: &Vec<String>) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        Some(value.join(","))
    }

    fn decode(&self, raw: Option<&str>) -> Vec<String> {
        raw.unwrap_or_default()
            .split(',')
            .filter(|s| !s.is_empty() && self.options.iter().any(|o| o == s))
            .map(str::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::token_enum! {
        enum Flavor {
            Vanilla => "vanilla",
            Mint => "mint",
            Rum => "rumRaisin",
        }
    }

    const EXCHANGES: &[&str] = &["Acala", "Hydration", "Karura"];
    const CHAINS: &[&str] = &["Acala", "Astar", "Hydration"];

    #[test]
    fn token_enum_round_trips_names() {
        assert_eq!(Flavor::Rum.as_str(), "rumRaisin");
        assert_eq!(Flavor::from_token("mint"), Some(Flavor::Mint));
        assert_eq!(Flavor::from_token("Mint"), None);
        assert_eq!(Flavor::Vanilla.to_string(), "vanilla");
        assert_eq!(Flavor::ALL.len(), 3);
    }

    #[test]
    fn token_enum_serde_uses_tokens() {
        assert_eq!(serde_json::to_string(&Flavor::Rum).unwrap(), "\"rumRaisin\"");
        let parsed: Flavor = serde_json::from_str("\"mint\"").unwrap();
        assert_eq!(parsed, Flavor::Mint);
    }

    const FLAVOR: TokenCodec<Flavor> = TokenCodec::new(Flavor::Vanilla).when_absent(Flavor::Mint);

    #[test]
    fn token_codec_invalid_and_absent_defaults() {
        let codec = FLAVOR;
        assert_eq!(codec.decode(Some("rumRaisin")), Flavor::Rum);
        assert_eq!(codec.decode(Some("garbage-token")), Flavor::Vanilla);
        assert_eq!(codec.decode(None), Flavor::Mint);
    }

    #[test]
    fn optional_token_codec() {
        let codec = OptionalTokenCodec::<Flavor>::new();
        assert_eq!(codec.decode(None), None);
        assert_eq!(codec.decode(Some("bogus")), None);
        assert_eq!(codec.decode(Some("mint")), Some(Flavor::Mint));
        assert_eq!(codec.encode(&None), None);
        assert_eq!(codec.encode(&Some(Flavor::Rum)).as_deref(), Some("rumRaisin"));
    }

    #[test]
    fn option_set_distinguishes_absent_from_invalid() {
        let codec = OptionSetCodec::new(CHAINS, "Astar").when_absent("Acala");
        assert_eq!(codec.decode(None), "Acala");
        assert_eq!(codec.decode(Some("Narnia")), "Astar");
        assert_eq!(codec.decode(Some("Hydration")), "Hydration");
    }

    #[test]
    fn option_set_absent_default_is_validated() {
        let codec = OptionSetCodec::new(CHAINS, "Hydration").when_absent("Ethereum");
        assert_eq!(codec.decode(None), "Hydration");
    }

    #[test]
    fn token_list_drops_unknown_and_empty_segments() {
        let codec = TokenListCodec::new(EXCHANGES);
        assert_eq!(
            codec.decode(Some("Acala,Foo,Hydration")),
            vec!["Acala".to_string(), "Hydration".to_string()]
        );
        assert_eq!(codec.decode(Some(",,Karura,")), vec!["Karura".to_string()]);
        assert!(codec.decode(None).is_empty());
    }

    #[test]
    fn token_list_empty_is_omitted() {
        let codec = TokenListCodec::new(EXCHANGES);
        assert_eq!(codec.encode(&Vec::new()), None);
        assert_eq!(
            codec
                .encode(&vec!["Acala".to_string(), "Karura".to_string()])
                .as_deref(),
            Some("Acala,Karura")
        );
    }
}
