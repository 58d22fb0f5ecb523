//! Cached rendering of the invoice listing view
//!
//! Stands in for the page cache kept in front of the listing route:
//! rendered pages are held per path until a write action revalidates them.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::actions::Revalidator;

/// Thread-safe page cache keyed by request path.
#[derive(Clone, Default)]
pub struct ListingCache {
    pages: Arc<RwLock<HashMap<String, Value>>>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached page for `path`, if one is warm.
    pub fn get(&self, path: &str) -> Option<Value> {
        self.pages
            .read()
            .ok()
            .and_then(|pages| pages.get(path).cloned())
    }

    /// Store a rendered page for `path`.
    pub fn put(&self, path: &str, page: Value) {
        if let Ok(mut pages) = self.pages.write() {
            pages.insert(path.to_string(), page);
        }
    }
}

impl Revalidator for ListingCache {
    fn revalidate(&self, path: &str) {
        if let Ok(mut pages) = self.pages.write() {
            pages.remove(path);
        }
        debug!(path, "revalidated listing cache");
    }
}
