//! Navigation surfaces the sync engine reads from and writes to.
//!
//! # Design
//!
//! The engine needs two things from the host: the current query string and a
//! way to replace it without adding a history entry. [`AddressBar`] is that
//! seam. [`MemoryAddressBar`] simulates a browser tab (path, history stack,
//! cursor) for tests and headless hosts; the browser implementation lives in
//! the `urlstate-web` crate.

use std::fmt;

use crate::error::NavigationError;

/// A location whose query string can be read and replaced in place.
pub trait AddressBar {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Current query string, with or without the leading `?`.
    fn search(&self) -> Result<String, NavigationError>;

    /// Replace the current entry's query string.
    ///
    /// `search` is the serialized query without `?`; empty means "no query".
    /// Must not create a new history entry.
    fn replace_search(&mut self, search: &str) -> Result<(), NavigationError>;

    /// Check if the surface is present and writable. The engine reports
    /// [`NavigationError::Unavailable`] instead of writing when this is false.
    fn is_available(&self) -> bool {
        true
    }
}

impl<B: AddressBar + ?Sized> AddressBar for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn search(&self) -> Result<String, NavigationError> {
        (**self).search()
    }

    fn replace_search(&mut self, search: &str) -> Result<(), NavigationError> {
        (**self).replace_search(search)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

impl<B: AddressBar + ?Sized> AddressBar for &mut B {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn search(&self) -> Result<String, NavigationError> {
        (**self).search()
    }

    fn replace_search(&mut self, search: &str) -> Result<(), NavigationError> {
        (**self).replace_search(search)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory Address Bar
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory tab: one path plus a history stack of query strings.
///
/// [`push`](Self::push) models user navigation (a new entry); the engine only
/// ever calls [`replace_search`](AddressBar::replace_search), which rewrites the
/// entry under the cursor.
#[derive(Clone)]
pub struct MemoryAddressBar {
    path: String,
    entries: Vec<String>,
    cursor: usize,
    replacements: usize,
    reject_writes: bool,
}

impl Default for MemoryAddressBar {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryAddressBar {
    /// Tab at `path` with an empty query string.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            entries: vec![String::new()],
            cursor: 0,
            replacements: 0,
            reject_writes: false,
        }
    }

    /// Tab at `path` opened with `search` (leading `?` optional).
    #[must_use]
    pub fn with_search(path: impl Into<String>, search: &str) -> Self {
        let mut bar = Self::new(path);
        bar.entries[0] = normalize(search);
        bar
    }

    /// Refuse every subsequent write, like a sandboxed frame.
    #[must_use]
    pub fn rejecting_writes(mut self, reject: bool) -> Self {
        self.reject_writes = reject;
        self
    }

    pub fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Simulated user navigation: drops forward entries and pushes a new one.
    pub fn push(&mut self, search: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(normalize(search));
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    /// Number of successful in-place replacements.
    #[must_use]
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query string of the current entry, without `?`.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Full relative location, e.g. `/xcm-sdk/xcm-transfer?from=Acala`.
    #[must_use]
    pub fn location(&self) -> String {
        let search = self.current();
        if search.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{search}", self.path)
        }
    }
}

fn normalize(search: &str) -> String {
    search.strip_prefix('?').unwrap_or(search).to_owned()
}

impl AddressBar for MemoryAddressBar {
    fn name(&self) -> &str {
        "MemoryAddressBar"
    }

    fn search(&self) -> Result<String, NavigationError> {
        Ok(self.current().to_owned())
    }

    fn replace_search(&mut self, search: &str) -> Result<(), NavigationError> {
        if self.reject_writes {
            return Err(NavigationError::Rejected(format!(
                "write to {} refused",
                self.path
            )));
        }
        self.entries[self.cursor] = normalize(search);
        self.replacements += 1;
        Ok(())
    }

    fn is_available(&self) -> bool {
        !self.reject_writes
    }
}

impl fmt::Debug for MemoryAddressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryAddressBar")
            .field("location", &self.location())
            .field("history", &self.entries.len())
            .field("cursor", &self.cursor)
            .field("replacements", &self.replacements)
            .finish()
    }
}
