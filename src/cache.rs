//! Content-addressed cache of generated code.
//!
//! Hosts re-run embedded-code resolution many times per keystroke, almost
//! always with unchanged `<php>` blocks.  Each block keeps the last text it
//! was generated from together with the generated codes; the generator only
//! runs again when the text differs by exact comparison.
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::types::Code;

/// Identity of one block inside one file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// The host's identity for the file (usually its path).
    pub file: String,
    /// The block name within the file (e.g. "customBlock_0").
    pub block: String,
}

impl CacheKey {
    pub fn new(file: impl Into<String>, block: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            block: block.into(),
        }
    }
}

#[derive(Debug, Default)]
struct CacheEntry {
    content: String,
    codes: Arc<[Code]>,
}

/// Per-block store of the last generated codes.
///
/// The comparison and the recomputation happen while holding the lock, so
/// two concurrent passes over the same block never both regenerate or
/// overwrite each other's result.
#[derive(Debug, Default)]
pub struct FragmentCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl FragmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the codes for `content`, running `compute` only when the text
    /// stored for `key` differs from `content`.
    ///
    /// A fresh key starts out with empty text and no codes, so an empty
    /// block never triggers `compute` and yields no codes.
    pub fn get_or_compute<F>(&self, key: &CacheKey, content: &str, compute: F) -> Arc<[Code]>
    where
        F: FnOnce(&str) -> Vec<Code>,
    {
        let mut entries = self.entries.lock();
        let entry = entries.entry(key.clone()).or_default();

        if entry.content != content {
            tracing::debug!(file = %key.file, block = %key.block, "fragment changed, regenerating");
            entry.content = content.to_string();
            entry.codes = compute(content).into();
        } else {
            tracing::debug!(
                file = %key.file,
                block = %key.block,
                "fragment unchanged, reusing codes"
            );
        }

        Arc::clone(&entry.codes)
    }

    /// Drop every entry belonging to `file`.
    pub fn invalidate_file(&self, file: &str) {
        self.entries.lock().retain(|key, _| key.file != file);
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn codes_for(text: &str) -> Vec<Code> {
        vec![Code::Text(text.to_uppercase())]
    }

    #[test]
    fn identical_text_reuses_codes() {
        let cache = FragmentCache::new();
        let key = CacheKey::new("App.vue", "customBlock_0");
        let calls = Cell::new(0);
        let compute = |text: &str| {
            calls.set(calls.get() + 1);
            codes_for(text)
        };

        let first = cache.get_or_compute(&key, "$a = 1;", compute);
        let second = cache.get_or_compute(&key, "$a = 1;", compute);

        assert_eq!(calls.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn changed_text_recomputes() {
        let cache = FragmentCache::new();
        let key = CacheKey::new("App.vue", "customBlock_0");

        let first = cache.get_or_compute(&key, "a", codes_for);
        let second = cache.get_or_compute(&key, "b", codes_for);

        assert_eq!(first[0], Code::Text("A".into()));
        assert_eq!(second[0], Code::Text("B".into()));
    }

    #[test]
    fn empty_text_on_a_fresh_key_is_a_hit() {
        let cache = FragmentCache::new();
        let key = CacheKey::new("App.vue", "customBlock_0");
        let codes = cache.get_or_compute(&key, "", |_| panic!("should not compute"));
        assert!(codes.is_empty());
    }

    #[test]
    fn blocks_and_files_are_independent() {
        let cache = FragmentCache::new();
        let calls = Cell::new(0);
        let compute = |text: &str| {
            calls.set(calls.get() + 1);
            codes_for(text)
        };
        let a0 = CacheKey::new("A.vue", "customBlock_0");
        let a1 = CacheKey::new("A.vue", "customBlock_1");
        let b0 = CacheKey::new("B.vue", "customBlock_0");

        for _ in 0..2 {
            cache.get_or_compute(&a0, "x", compute);
            cache.get_or_compute(&a1, "y", compute);
            cache.get_or_compute(&b0, "x", compute);
        }
        assert_eq!(calls.get(), 3);
        assert_eq!(cache.len(), 3);

        cache.invalidate_file("A.vue");
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
