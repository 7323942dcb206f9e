//! Session E2E Tests
//!
//! Drives a [`PageSession`] against a [`MemoryAddressBar`] through a sequence
//! of edits, commits and history moves.
//!
//! ```sh
//! cargo test -p urlstate-core --test sync_e2e
//! ```
//!
//! # Invariants
//!
//! 1. **History neutrality**: commits never add history entries.
//! 2. **Idempotence**: a commit with unchanged state performs no write.
//! 3. **Foreign keys**: parameters no descriptor owns survive every commit.
//! 4. **Restorability**: reloading from the written URL reproduces the state.

use serde::{Deserialize, Serialize};
use urlstate_core::{
    BoolCodec, Codec, DecodeError, DecodePolicy, FilterSet, FilterSetBuilder, MemoryAddressBar,
    PageSession, QueryString, Reconciliation, StructuredCodec, SyncConfig, TextCodec, UrlState,
    decode_param, effective,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Fee {
    currency_option_id: String,
    is_custom_currency: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct Transfer {
    from: String,
    address: String,
    use_fee_asset: bool,
    fee_asset: Fee,
}

impl UrlState for Transfer {
    const PAGE: &'static str = "transfer";

    fn decode(query: &QueryString, policy: DecodePolicy) -> Result<Self, DecodeError> {
        Ok(Self {
            from: TextCodec::with_default("Astar").decode(query.get("from")),
            address: TextCodec::new().decode(query.get("address")),
            use_fee_asset: BoolCodec.decode(query.get("useFeeAsset")),
            fee_asset: decode_param(&StructuredCodec::<Fee>::new(), query, "feeAsset", policy)?,
        })
    }

    fn filters() -> FilterSet<Self> {
        FilterSetBuilder::new()
            .field("from", |s: &Self| &s.from, TextCodec::new())
            .field("address", |s: &Self| &s.address, TextCodec::new())
            .field("useFeeAsset", |s: &Self| &s.use_fee_asset, BoolCodec)
            .field_if(
                "feeAsset",
                |s: &Self| &s.fee_asset,
                StructuredCodec::<Fee>::new(),
                |s, o| effective(s, o).use_fee_asset,
            )
            .build()
    }
}

fn mount(search: &str) -> PageSession<Transfer, MemoryAddressBar> {
    let bar = MemoryAddressBar::with_search("/xcm-sdk/xcm-transfer", search);
    PageSession::mount(bar, SyncConfig::default()).unwrap()
}

#[test]
fn edits_never_push_history() {
    let mut session = mount("");
    session.commit().unwrap();
    for chain in ["Acala", "Hydration", "Moonbeam", "Acala"] {
        session.update(|s| s.from = chain.into());
        session.commit().unwrap();
    }
    assert_eq!(session.address_bar().history_len(), 1);
    assert_eq!(session.stats().writes, 5);
}

#[test]
fn second_commit_is_a_noop() {
    let mut session = mount("from=Acala");
    assert!(session.commit().unwrap().wrote());
    session.update(|_| {});
    assert_eq!(session.commit().unwrap(), Reconciliation::Unchanged);
    assert_eq!(session.address_bar().replacements(), 1);
}

#[test]
fn foreign_parameters_survive() {
    let mut session = mount("utm_source=newsletter&from=Acala&lang=en");
    session.update(|s| s.from = "Hydration".into());
    session.commit().unwrap();
    let q = QueryString::parse(session.address_bar().current());
    assert_eq!(q.get("utm_source"), Some("newsletter"));
    assert_eq!(q.get("lang"), Some("en"));
    assert_eq!(q.get("from"), Some("Hydration"));
}

#[test]
fn conditional_structured_param_appears_and_disappears() {
    let mut session = mount("");
    session.update(|s| {
        s.use_fee_asset = true;
        s.fee_asset.currency_option_id = "DOT-native".into();
    });
    session.commit().unwrap();
    let q = QueryString::parse(session.address_bar().current());
    assert!(q.contains("feeAsset"));

    session.update(|s| s.use_fee_asset = false);
    session.commit().unwrap();
    let q = QueryString::parse(session.address_bar().current());
    assert!(!q.contains("feeAsset"));
    assert_eq!(q.get("useFeeAsset"), Some("false"));
}

#[test]
fn written_url_restores_state() {
    let mut session = mount("");
    session.update(|s| {
        s.from = "Moonbeam".into();
        s.address = "0x1234".into();
        s.use_fee_asset = true;
        s.fee_asset = Fee {
            currency_option_id: "GLMR".into(),
            is_custom_currency: true,
        };
    });
    session.commit().unwrap();
    let (state, bar) = session.into_parts();

    let reopened = mount(bar.current());
    assert_eq!(reopened.state(), &state);
}

#[test]
fn back_navigation_is_not_rewritten() {
    let mut session = mount("from=Acala");
    session.commit().unwrap();
    let first_entry = session.address_bar().current().to_owned();

    session.address_bar_mut().push("from=Hydration");
    session.reload().unwrap();
    session.commit().unwrap();

    session.address_bar_mut().back();
    session.reload().unwrap();
    assert_eq!(session.commit().unwrap(), Reconciliation::Unchanged);
    assert_eq!(session.address_bar().current(), first_entry);
    assert_eq!(session.address_bar().history_len(), 2);
}

#[test]
fn failed_write_is_retried_on_next_commit() {
    let mut session = mount("");
    session.address_bar_mut().set_reject_writes(true);
    assert!(session.commit().is_err());
    assert!(session.has_pending());

    session.address_bar_mut().set_reject_writes(false);
    assert!(session.commit().unwrap().wrote());
    assert_eq!(
        QueryString::parse(session.address_bar().current()).get("from"),
        Some("Astar")
    );
}
