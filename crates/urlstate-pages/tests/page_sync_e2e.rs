//! End-to-end checks for the playground pages.
//!
//! # Invariants
//!
//! 1. Every row of `DEFAULT_TABLE` holds: a freshly mounted page writes the
//!    documented value for an absent parameter and for `garbage-token`.
//! 2. A page mounted on its own canonical URL performs no navigation.
//! 3. Canonicalization is idempotent for arbitrary non-empty owned values.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use urlstate_core::{
    DecodePolicy, MemoryAddressBar, PageSession, ParamTarget, QueryString, Reconciliation,
    SyncConfig, SyncPlan, Token, UrlState,
};
use urlstate_pages::catalog::PalletsQuery;
use urlstate_pages::defaults::INVALID_TOKEN;
use urlstate_pages::records::CurrencyEntry;
use urlstate_pages::{
    CurrencyList, DEFAULT_TABLE, Expected, PageKind, PalletQueryState, XcmRouterState,
    XcmTransferState,
};

fn query_for(context: &str, extra: Option<(&str, &str)>) -> QueryString {
    let mut query = QueryString::parse(context);
    if let Some((key, value)) = extra {
        query.set(key, value);
    }
    query
}

fn target(page: PageKind, query: &QueryString, param: &str) -> ParamTarget {
    let plan = page
        .canonical_plan(query, DecodePolicy::Lenient)
        .expect("lenient decoding never fails");
    plan.get(param)
        .cloned()
        .unwrap_or_else(|| panic!("{} does not own {param}", page.as_str()))
}

fn check(expected: Expected, actual: &ParamTarget, absent: &ParamTarget, label: &str) {
    match expected {
        Expected::Value(v) => assert_eq!(actual, &ParamTarget::Set(v.to_owned()), "{label}"),
        Expected::Omitted => assert_eq!(actual, &ParamTarget::Omit, "{label}"),
        Expected::Record => assert!(
            matches!(actual, ParamTarget::Set(v) if !v.is_empty()),
            "{label}: expected a record, got {actual:?}"
        ),
        Expected::SameAsAbsent => assert_eq!(actual, absent, "{label}"),
        Expected::Input => {
            assert_eq!(actual, &ParamTarget::Set(INVALID_TOKEN.to_owned()), "{label}");
        }
    }
}

// ───────────────────────────────────────────────────────────────────────────
// Documented defaults
// ───────────────────────────────────────────────────────────────────────────

#[test]
fn default_table_holds() {
    for row in DEFAULT_TABLE {
        let label = format!("{}?{} [{}]", row.page.as_str(), row.context, row.param);

        let absent = target(row.page, &query_for(row.context, None), row.param);
        check(row.absent, &absent, &absent, &format!("{label} absent"));

        let invalid = target(
            row.page,
            &query_for(row.context, Some((row.param, INVALID_TOKEN))),
            row.param,
        );
        check(row.invalid, &invalid, &absent, &format!("{label} invalid"));
    }
}

#[test]
fn default_table_covers_every_param() {
    for page in PageKind::ALL.iter().copied() {
        for param in page.params() {
            assert!(
                DEFAULT_TABLE
                    .iter()
                    .any(|row| row.page == page && row.param == param),
                "{}: {param} has no documented default",
                page.as_str()
            );
        }
    }
}

// ───────────────────────────────────────────────────────────────────────────
// Scenarios
// ───────────────────────────────────────────────────────────────────────────

#[test]
fn out_of_range_slippage_falls_back() {
    let state = XcmRouterState::decode(&QueryString::parse("slippagePct=150"), DecodePolicy::Lenient)
        .unwrap();
    assert_eq!(state.slippage_pct, "1");
}

#[test]
fn absent_flag_is_false() {
    let state = XcmRouterState::decode(&QueryString::new(), DecodePolicy::Lenient).unwrap();
    assert!(!state.use_api);
}

#[test]
fn unknown_exchanges_dropped() {
    let state = XcmRouterState::decode(
        &QueryString::parse("exchange=Acala,Foo,Hydration"),
        DecodePolicy::Lenient,
    )
    .unwrap();
    assert_eq!(state.exchange, ["Acala", "Hydration"]);
}

#[test]
fn absent_currency_list_is_one_default_entry() {
    let state = XcmTransferState::decode(&QueryString::new(), DecodePolicy::Lenient).unwrap();
    assert_eq!(state.currencies, CurrencyList(vec![CurrencyEntry::default()]));
    let json = serde_json::to_value(&state.currencies).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "currencyOptionId": "",
            "customCurrency": "",
            "amount": "10",
            "isCustomCurrency": false,
            "isMax": false,
            "customCurrencyType": "id",
            "customCurrencySymbolSpecifier": "auto"
        }])
    );
}

#[test]
fn pallet_omitted_unless_pallet_index() {
    let state = PalletQueryState {
        func: PalletsQuery::AllPallets,
        pallet: "Balances".into(),
        ..PalletQueryState::default()
    };
    let query = SyncPlan::compute(&PalletQueryState::filters(), &state, None)
        .apply_to(&QueryString::parse("pallet=Balances"));
    assert!(!query.contains("pallet"));
}

// ───────────────────────────────────────────────────────────────────────────
// Mounting
// ───────────────────────────────────────────────────────────────────────────

#[test]
fn canonical_url_mount_is_a_noop() {
    let canonical = PageKind::XcmTransfer
        .canonicalize(&QueryString::new(), DecodePolicy::Lenient)
        .unwrap();
    let bar = MemoryAddressBar::with_search("/xcm-sdk/xcm-transfer", &canonical);
    let mut page = PageSession::<XcmTransferState, _>::mount(bar, SyncConfig::default()).unwrap();
    assert_eq!(page.commit().unwrap(), Reconciliation::Unchanged);
    assert_eq!(page.address_bar().replacements(), 0);
}

#[test]
fn form_edits_replace_the_entry() {
    let bar = MemoryAddressBar::with_search("/xcm-router", "ref=docs");
    let mut page = PageSession::<XcmRouterState, _>::mount(bar, SyncConfig::default()).unwrap();
    page.commit().unwrap();

    let mut form = page.state().clone();
    form.exchange = vec!["Hydration".into()];
    form.slippage_pct = "0.5".into();
    page.set_overlay(Some(form));
    page.commit().unwrap();

    let search = QueryString::parse(page.address_bar().current());
    assert_eq!(search.get("ref"), Some("docs"));
    assert_eq!(search.get("exchange"), Some("Hydration"));
    assert_eq!(search.get("slippagePct"), Some("0.5"));
    assert_eq!(page.address_bar().history_len(), 1);
}

#[test]
fn pallet_appears_after_form_switches_function() {
    let bar = MemoryAddressBar::with_search("/pallet-query", "pallet=Balances");
    let mut page = PageSession::<PalletQueryState, _>::mount(bar, SyncConfig::default()).unwrap();
    page.commit().unwrap();
    assert!(!QueryString::parse(page.address_bar().current()).contains("pallet"));

    page.update(|s| s.func = PalletsQuery::PalletIndex);
    page.commit().unwrap();
    assert_eq!(
        QueryString::parse(page.address_bar().current()).get("pallet"),
        Some("Balances")
    );
}

// ───────────────────────────────────────────────────────────────────────────
// Properties
// ───────────────────────────────────────────────────────────────────────────

fn page_strategy() -> impl Strategy<Value = PageKind> {
    prop::sample::select(PageKind::ALL.to_vec())
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9_.,-]{1,12}",
        Just("true".to_owned()),
        Just("Acala".to_owned()),
        Just("PALLET_INDEX".to_owned()),
        Just("ASSET_BALANCE".to_owned()),
        Just("150".to_owned()),
    ]
}

proptest! {
    #[test]
    fn canonicalize_is_idempotent(
        page in page_strategy(),
        picks in prop::collection::vec((any::<prop::sample::Index>(), value_strategy()), 0..6),
    ) {
        let params = page.params();
        let mut query = QueryString::parse("utm=1");
        for (index, value) in &picks {
            query.set(params[index.index(params.len())], value.as_str());
        }
        let once = page.canonicalize(&query, DecodePolicy::Lenient).unwrap();
        let twice = page
            .canonicalize(&QueryString::parse(&once), DecodePolicy::Lenient)
            .unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.starts_with("utm=1"));
    }
}
