//! Cached availability check for analyzer-backed parsers

use std::fmt::Display;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone)]
struct ProbeEntry {
    key: String,
    supported: bool,
}

/// Remembers the outcome of an expensive probe for one settings key.
///
/// The probe runs again only when the key changes. Concurrent callers may
/// both probe on a miss; the results are identical so the last write wins.
#[derive(Debug, Default)]
pub struct AvailabilityProbe {
    cache: Mutex<Option<ProbeEntry>>,
}

impl AvailabilityProbe {
    pub const fn new() -> Self {
        Self {
            cache: Mutex::new(None),
        }
    }

    /// Return the cached result for `key`, running `probe` on a miss.
    ///
    /// Any probe error maps to `false`.
    pub fn check<F, E>(&self, key: &str, probe: F) -> bool
    where
        F: FnOnce() -> Result<(), E>,
        E: Display,
    {
        if let Some(supported) = self.cached(key) {
            return supported;
        }

        let supported = match probe() {
            Ok(()) => true,
            Err(e) => {
                log::debug!("analyzer probe failed for {key}: {e}");
                false
            }
        };
        log::debug!("analyzer probe for {key}: supported={supported}");

        *self.cache.lock().unwrap_or_else(PoisonError::into_inner) = Some(ProbeEntry {
            key: key.to_string(),
            supported,
        });
        supported
    }

    /// Cached result, if the last probe used `key`
    pub fn cached(&self, key: &str) -> Option<bool> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .filter(|entry| entry.key == key)
            .map(|entry| entry.supported)
    }

    /// Forget the cached result
    pub fn invalidate(&self) {
        *self.cache.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
