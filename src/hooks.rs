//! Filter Hooks - Named Extension Points
//!
//! The registry is an explicit value threaded through each render.
//! Callbacks may return any JSON value; consumers validate the result type.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::presentation::Presentation;

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "test-hooks")]
static FILTER_CALL_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
pub fn get_filter_call_count() -> u32 {
    FILTER_CALL_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_filter_call_count() {
    FILTER_CALL_COUNT.store(0, Ordering::SeqCst);
}

pub const OPENGRAPH_IMAGE: &str = "wpseo_opengraph_image";
pub const OPENGRAPH_DESCRIPTION: &str = "wpseo_opengraph_desc";
pub const TWITTER_DESCRIPTION: &str = "wpseo_twitter_description";
pub const META_DESCRIPTION: &str = "wpseo_metadesc";

/// Every hook name the presenters in this crate invoke.
pub const KNOWN_HOOKS: [&str; 4] = [
    META_DESCRIPTION,
    OPENGRAPH_DESCRIPTION,
    OPENGRAPH_IMAGE,
    TWITTER_DESCRIPTION,
];

pub type FilterFn = Box<dyn Fn(Value, &Presentation) -> Value + Send + Sync>;

/// Filter registry - ordered callbacks per hook name
#[derive(Default)]
pub struct FilterRegistry {
    filters: BTreeMap<String, Vec<FilterFn>>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a callback; callbacks run in registration order.
    pub fn add_filter<F>(&mut self, hook: &str, filter: F)
    where
        F: Fn(Value, &Presentation) -> Value + Send + Sync + 'static,
    {
        self.filters
            .entry(hook.to_string())
            .or_default()
            .push(Box::new(filter));
    }

    pub fn has_filters(&self, hook: &str) -> bool {
        self.filters.get(hook).map_or(false, |f| !f.is_empty())
    }

    pub fn remove_all(&mut self, hook: &str) {
        self.filters.remove(hook);
    }

    pub fn hook_names(&self) -> Vec<&str> {
        self.filters.keys().map(String::as_str).collect()
    }

    /// Run `value` through every callback of `hook`, each receiving the
    /// previous output. No callbacks means the value comes back unchanged.
    pub fn apply(&self, hook: &str, value: Value, presentation: &Presentation) -> Value {
        let Some(filters) = self.filters.get(hook) else {
            return value;
        };

        filters.iter().fold(value, |acc, filter| {
            #[cfg(feature = "test-hooks")]
            FILTER_CALL_COUNT.fetch_add(1, Ordering::SeqCst);

            filter(acc, presentation)
        })
    }

    /// Filter a string, keeping `original` when a callback returns a non-string.
    pub fn filtered_string(&self, hook: &str, original: &str, presentation: &Presentation) -> String {
        let filtered = self.apply(hook, Value::String(original.to_string()), presentation);
        expect_string(hook, filtered).unwrap_or_else(|| original.to_string())
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: BTreeMap<&str, usize> = self
            .filters
            .iter()
            .map(|(hook, filters)| (hook.as_str(), filters.len()))
            .collect();
        f.debug_struct("FilterRegistry").field("filters", &counts).finish()
    }
}

/// Type guard for filter results.
pub fn expect_string(hook: &str, value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        other => {
            tracing::debug!(hook, returned = %other, "discarding non-string filter result");
            None
        }
    }
}
