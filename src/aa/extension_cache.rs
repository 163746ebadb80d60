use super::{Extension, ExtensionSet, LabelType, Semantics};
use std::{cell::RefCell, collections::HashMap};

/// The extension(s) recorded for a semantics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CachedExtensions<T>
where
    T: LabelType,
{
    Unique(Extension<T>),
    Multiple(ExtensionSet<T>),
}

#[derive(Clone)]
struct CacheEntry<T>
where
    T: LabelType,
{
    revision: u64,
    extensions: CachedExtensions<T>,
}

/// A cache mapping semantics to the extensions computed for them.
///
/// Each entry records the revision of the framework it was computed at.
/// Mutating the framework increments its revision, which makes all the entries stale at once.
#[derive(Clone)]
pub(crate) struct ExtensionCache<T>
where
    T: LabelType,
{
    revision: u64,
    entries: RefCell<HashMap<Semantics, CacheEntry<T>>>,
}

impl<T> Default for ExtensionCache<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self {
            revision: 0,
            entries: RefCell::new(HashMap::new()),
        }
    }
}

impl<T> ExtensionCache<T>
where
    T: LabelType,
{
    pub(crate) fn invalidate(&mut self) {
        self.revision += 1;
    }

    pub(crate) fn clear(&mut self) {
        self.invalidate();
        self.entries.get_mut().clear();
    }

    pub(crate) fn records(&self, semantics: Semantics) -> bool {
        self.entries
            .borrow()
            .get(&semantics)
            .is_some_and(|e| e.revision == self.revision)
    }

    pub(crate) fn get(&self, semantics: Semantics) -> Option<CachedExtensions<T>> {
        self.entries
            .borrow()
            .get(&semantics)
            .filter(|e| e.revision == self.revision)
            .map(|e| e.extensions.clone())
    }

    pub(crate) fn store(&self, semantics: Semantics, extensions: CachedExtensions<T>) {
        self.entries.borrow_mut().insert(
            semantics,
            CacheEntry {
                revision: self.revision,
                extensions,
            },
        );
    }
}
