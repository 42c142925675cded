//! Thread-safe memoization of display names.

use crate::{TypeDesc, display::format_type};
use core::hash::{Hash, Hasher};
use hashbrown::HashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Configuration options for a [`DisplayNames`] cache.
///
/// # Example
///
/// ```
/// use warden_types::{CacheOptions, DisplayNames};
///
/// let names = DisplayNames::with_options(CacheOptions { capacity: 64 });
/// assert!(names.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct CacheOptions {
    /// Number of entries to preallocate.
    ///
    /// Default: 0
    pub capacity: usize,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self { capacity: 0 }
    }
}

/// Cache key comparing descriptors by identity.
#[derive(Clone, Copy)]
struct ByAddress<'a>(&'a TypeDesc<'a>);

impl Hash for ByAddress<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.0, state)
    }
}

impl PartialEq for ByAddress<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.0, other.0)
    }
}

impl Eq for ByAddress<'_> {}

/// Display-name cache keyed by descriptor identity.
///
/// Names are computed on first lookup and kept until [`clear`](Self::clear)
/// is called. Any number of threads may look up names concurrently: when
/// several of them miss on the same descriptor at once, each computes the
/// name, the first insert wins and every caller gets that stored string.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use warden_types::{DisplayNames, TypeRegistry};
///
/// let arena = Bump::new();
/// let registry = TypeRegistry::new(&arena);
/// let names = DisplayNames::new();
///
/// let ty = registry.array_of_rank(registry.int(), 2);
/// assert_eq!(&*names.type_string(ty), "int[,]");
/// ```
pub struct DisplayNames<'a> {
    names: RwLock<HashMap<ByAddress<'a>, Arc<str>>>,
    computed: AtomicUsize,
}

impl<'a> DisplayNames<'a> {
    pub fn new() -> Self {
        Self::with_options(CacheOptions::default())
    }

    pub fn with_options(options: CacheOptions) -> Self {
        Self {
            names: RwLock::new(HashMap::with_capacity(options.capacity)),
            computed: AtomicUsize::new(0),
        }
    }

    /// Get the display name of `ty`, computing and caching it on a miss.
    pub fn type_string(&self, ty: &'a TypeDesc<'a>) -> Arc<str> {
        let key = ByAddress(ty);
        if let Some(name) = self.names.read().get(&key) {
            return Arc::clone(name);
        }

        // Computed outside the lock; racing misses produce equal strings.
        let computed: Arc<str> = Arc::from(format_type(ty));
        self.computed.fetch_add(1, Ordering::Relaxed);

        let name = Arc::clone(
            self.names
                .write()
                .entry(key)
                .or_insert_with(|| Arc::clone(&computed)),
        );
        tracing::trace!(
            name = %name,
            inserted = Arc::ptr_eq(&name, &computed),
            "computed display name"
        );
        name
    }

    /// Get a cached name without computing it.
    pub fn get(&self, ty: &'a TypeDesc<'a>) -> Option<Arc<str>> {
        self.names.read().get(&ByAddress(ty)).cloned()
    }

    pub fn contains(&self, ty: &'a TypeDesc<'a>) -> bool {
        self.names.read().contains_key(&ByAddress(ty))
    }

    /// Number of cached names.
    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of times a name was computed because of a cache miss.
    pub fn computed(&self) -> usize {
        self.computed.load(Ordering::Relaxed)
    }

    /// Drop all cached names. Later lookups recompute identical strings.
    pub fn clear(&self) {
        self.names.write().clear();
    }
}

impl Default for DisplayNames<'_> {
    fn default() -> Self {
        Self::new()
    }
}
