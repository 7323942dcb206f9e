#![forbid(unsafe_code)]

use urlstate_core::{AddressBar, DecodePolicy, NavigationError, SyncConfig};
use wasm_bindgen::prelude::*;

use crate::bridge::{BridgeError, JsonPage, open_page_by_name};

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn window() -> Result<web_sys::Window, NavigationError> {
    web_sys::window().ok_or_else(|| NavigationError::Unavailable("no window".to_owned()))
}

/// The page's own address bar: reads `location.search`, writes through
/// `history.replaceState` so the back button never sees sync writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserAddressBar;

impl AddressBar for BrowserAddressBar {
    fn name(&self) -> &str {
        "browser"
    }

    fn search(&self) -> Result<String, NavigationError> {
        window()?
            .location()
            .search()
            .map_err(|e| NavigationError::Unavailable(describe(&e)))
    }

    fn replace_search(&mut self, search: &str) -> Result<(), NavigationError> {
        let window = window()?;
        let location = window.location();
        let mut url = location
            .pathname()
            .map_err(|e| NavigationError::Unavailable(describe(&e)))?;
        if !search.is_empty() {
            url.push('?');
            url.push_str(search);
        }
        // Keep the fragment; replaceState with a bare path would drop it.
        if let Ok(hash) = location.hash() {
            url.push_str(&hash);
        }
        let history = window
            .history()
            .map_err(|e| NavigationError::Unavailable(describe(&e)))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
            .map_err(|e| NavigationError::Rejected(describe(&e)))
    }

    fn is_available(&self) -> bool {
        web_sys::window().is_some()
    }
}

fn to_js(err: BridgeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_json(text: &str) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(text)
}

fn stringify(value: &JsValue) -> Result<String, JsValue> {
    js_sys::JSON::stringify(value)?
        .as_string()
        .ok_or_else(|| JsValue::from_str("snapshot is not serializable"))
}

fn config_from(options: Option<JsValue>) -> SyncConfig {
    let Some(options) = options.filter(|o| o.is_object()) else {
        return SyncConfig::default();
    };
    let flag = |key: &str| {
        js_sys::Reflect::get(&options, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    };
    let policy = if flag("strict") {
        DecodePolicy::Strict
    } else {
        DecodePolicy::Lenient
    };
    SyncConfig::new()
        .decode_policy(policy)
        .trace_plans(flag("trace"))
}

/// One playground page bound to the browser address bar.
///
/// ```js
/// const session = new UrlStateSession("xcm-router", { strict: false });
/// session.setOverlay({ slippagePct: "0.5" });
/// session.commit();
/// ```
#[wasm_bindgen]
pub struct UrlStateSession {
    inner: Box<dyn JsonPage>,
}

#[wasm_bindgen]
impl UrlStateSession {
    /// Mount `page`, decoding initial state from `location.search`.
    ///
    /// Options: `strict` (reject malformed structured parameters) and `trace`
    /// (log every computed plan).
    #[wasm_bindgen(constructor)]
    pub fn new(page: &str, options: Option<JsValue>) -> Result<UrlStateSession, JsValue> {
        let inner = open_page_by_name(page, BrowserAddressBar, config_from(options)).map_err(to_js)?;
        Ok(Self { inner })
    }

    pub fn page(&self) -> String {
        self.inner.page().to_owned()
    }

    /// Canonical state as a plain object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        parse_json(&self.inner.state_json().map_err(to_js)?)
    }

    #[wasm_bindgen(js_name = setState)]
    pub fn set_state(&mut self, state: JsValue) -> Result<(), JsValue> {
        let json = stringify(&state)?;
        self.inner.set_state_json(&json).map_err(to_js)
    }

    /// Form override, or `null` when no form is active.
    pub fn overlay(&self) -> Result<JsValue, JsValue> {
        match self.inner.overlay_json().map_err(to_js)? {
            Some(json) => parse_json(&json),
            None => Ok(JsValue::NULL),
        }
    }

    /// Replace the form override; `null`/`undefined` clears it. Fields the
    /// override leaves out keep their canonical value.
    #[wasm_bindgen(js_name = setOverlay)]
    pub fn set_overlay(&mut self, overlay: JsValue) -> Result<(), JsValue> {
        if overlay.is_null() || overlay.is_undefined() {
            return self.inner.set_overlay_json(None).map_err(to_js);
        }
        let json = stringify(&overlay)?;
        self.inner.set_overlay_json(Some(&json)).map_err(to_js)
    }

    pub fn submit(&mut self) {
        self.inner.submit();
    }

    /// Call from a `popstate` listener.
    pub fn reload(&mut self) -> Result<(), JsValue> {
        self.inner.reload().map_err(to_js)
    }

    /// Reconcile with the address bar; call after each render. Returns
    /// whether the URL was replaced.
    pub fn commit(&mut self) -> Result<bool, JsValue> {
        self.inner.commit().map_err(to_js)
    }

    #[wasm_bindgen(js_name = hasPending)]
    pub fn has_pending(&self) -> bool {
        self.inner.has_pending()
    }

    /// `[cycles, writes, skipped, superseded, failures]`.
    pub fn stats(&self) -> Vec<f64> {
        let s = self.inner.stats();
        [s.cycles, s.writes, s.skipped, s.superseded, s.failures]
            .into_iter()
            .map(|n| n as f64)
            .collect()
    }
}
