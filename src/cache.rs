//! Memoised permuters keyed by domain size.
//!
//! [`get_position`](crate::random_perm::get_position) re-derives the round
//! constants on every call. `PermuterCache` keeps one [`Permuter`] per domain
//! size so repeated lookups only pay for the rounds. Output is identical to
//! the uncached path.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::error::{PermutationError, validate_domain};
use crate::random_perm::Permuter;

#[derive(Debug, Default)]
pub struct PermuterCache {
    entries: RwLock<HashMap<u64, Arc<Permuter>>>,
}

impl PermuterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache shared by every caller.
    pub fn global() -> &'static PermuterCache {
        static CACHE: OnceLock<PermuterCache> = OnceLock::new();
        CACHE.get_or_init(PermuterCache::new)
    }

    /// Returns the permuter for `n`, building it on first use.
    pub fn permuter(&self, n: i64) -> Result<Arc<Permuter>, PermutationError> {
        let domain = validate_domain(n)?;
        if let Some(found) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&domain)
        {
            return Ok(Arc::clone(found));
        }

        // Derive outside the lock; a concurrent miss builds an equal value.
        debug!(n = domain, "permuter cache miss");
        let built = Arc::new(Permuter::new(n)?);
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(entries.entry(domain).or_insert(built)))
    }

    pub fn get_position(&self, n: i64, position: i64) -> Result<u64, PermutationError> {
        self.permuter(n)?.permute(position)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
