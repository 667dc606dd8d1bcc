//! Optional process-wide resolver cache.
//!
//! Resolver construction is cheap but not free; long-running hosts that
//! query the same handful of zones can memoise instances here. The
//! cache is opt-in with an explicit lifecycle: nothing is allocated and
//! nothing is retained unless [`init`] has been called, and
//! [`teardown`] releases every cached resolver.
//!
//! Entries are keyed by canonical zone id, so every alias spelling of a
//! zone shares one resolver.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hashbrown::HashMap;
use log::debug;

use crate::error::TzResult;
use crate::resolver::Resolver;

type ResolverMap = HashMap<String, Arc<Resolver>>;

static RESOLVERS: Mutex<Option<ResolverMap>> = Mutex::new(None);

fn lock() -> MutexGuard<'static, Option<ResolverMap>> {
    RESOLVERS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Enables the cache. Idempotent; an already initialised cache keeps
/// its entries.
pub fn init() {
    let mut guard = lock();
    if guard.is_none() {
        *guard = Some(HashMap::new());
    }
}

/// Disables the cache and drops every cached resolver.
pub fn teardown() {
    *lock() = None;
}

/// Returns a resolver for `id`, reusing a cached instance when one
/// exists for the same canonical zone.
///
/// Lookups are case-insensitive. On an uninitialised cache this
/// degrades to plain construction.
pub fn fetch(id: &str) -> TzResult<Arc<Resolver>> {
    {
        let guard = lock();
        if let Some(map) = guard.as_ref() {
            if let Some(cached) = map.get(&id.to_ascii_lowercase()) {
                return Ok(Arc::clone(cached));
            }
        }
    }

    // Construct outside the lock; a racing thread may do the same.
    let resolver = Arc::new(Resolver::new(id)?);

    let mut guard = lock();
    let Some(map) = guard.as_mut() else {
        // Uninitialised or torn down, hand back the instance uncached.
        return Ok(resolver);
    };
    // Re-check under the canonical id so alias spellings collapse onto
    // one entry and the loser of a race discards its instance.
    let key = resolver.id().to_ascii_lowercase();
    if let Some(existing) = map.get(&key) {
        return Ok(Arc::clone(existing));
    }
    debug!("caching resolver for zone {}", resolver.id());
    map.insert(key, Arc::clone(&resolver));
    Ok(resolver)
}
