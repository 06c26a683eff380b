//! Caller-side caching of compiled stylesheets.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};

use crate::compiler::{CompiledOutput, Compiler};
use crate::settings::Preset;

struct Entry {
    fingerprint: u64,
    output: Arc<CompiledOutput>,
}

/// Holds the last compiled stylesheet and recompiles when presets change.
///
/// The cache is keyed by a fingerprint of the whole preset list, so any edit
/// to any preset invalidates it. Recompiling happens while the lock is held,
/// so concurrent callers never run more than one compile at a time.
///
/// # Example
///
/// ```rust
/// use formstyler::{Preset, StylesheetCache};
/// use std::sync::Arc;
///
/// let cache = StylesheetCache::default();
/// let presets = vec![Preset::new("Contact", "contact")];
///
/// let first = cache.get_or_compile(&presets);
/// let second = cache.get_or_compile(&presets);
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
#[derive(Default)]
pub struct StylesheetCache {
    compiler: Compiler,
    entry: Mutex<Option<Entry>>,
}

impl StylesheetCache {
    pub fn new(compiler: Compiler) -> Self {
        Self {
            compiler,
            entry: Mutex::new(None),
        }
    }

    /// Returns the cached output for `presets`, compiling it if the cache is
    /// empty or was built from a different preset list.
    pub fn get_or_compile(&self, presets: &[Preset]) -> Arc<CompiledOutput> {
        let fingerprint = fingerprint(presets);
        let mut entry = self.entry.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(cached) = entry.as_ref() {
            if cached.fingerprint == fingerprint {
                return Arc::clone(&cached.output);
            }
        }

        let output = Arc::new(self.compiler.compile(presets));
        log::info!(
            "recompiled stylesheet for {} presets ({} bytes)",
            presets.len(),
            output.css.len()
        );
        for skip in &output.skipped {
            log::warn!("stylesheet skipped {}", skip);
        }

        *entry = Some(Entry {
            fingerprint,
            output: Arc::clone(&output),
        });
        output
    }

    /// Returns the cached output without compiling.
    pub fn cached(&self) -> Option<Arc<CompiledOutput>> {
        let entry = self.entry.lock().unwrap_or_else(|e| e.into_inner());
        entry.as_ref().map(|cached| Arc::clone(&cached.output))
    }

    /// Drops the cached output.
    pub fn invalidate(&self) {
        let mut entry = self.entry.lock().unwrap_or_else(|e| e.into_inner());
        *entry = None;
    }
}

fn fingerprint(presets: &[Preset]) -> u64 {
    let mut hasher = DefaultHasher::new();
    presets.hash(&mut hasher);
    hasher.finish()
}
