//! Construction-time configuration for a store.

/// Placeholder request: either a bare count or explicit seed records.
///
/// Seeds double as the count: `Seeds(v)` materializes `v.len()` placeholders,
/// each carrying its seed in order. `Count(n)` materializes `n` bare
/// placeholders.
#[derive(Clone, Debug)]
pub enum Placeholders<T> {
    Count(usize),
    Seeds(Vec<T>),
}

impl<T> Placeholders<T> {
    pub fn count(&self) -> usize {
        match self {
            Placeholders::Count(count) => *count,
            Placeholders::Seeds(seeds) => seeds.len(),
        }
    }

    /// Resolve into the canonical (count, seeds) pair.
    pub(crate) fn into_parts(self) -> (usize, Vec<T>) {
        match self {
            Placeholders::Count(count) => (count, Vec::new()),
            Placeholders::Seeds(seeds) => (seeds.len(), seeds),
        }
    }
}

impl<T> Default for Placeholders<T> {
    fn default() -> Self {
        Placeholders::Count(0)
    }
}

impl<T> From<usize> for Placeholders<T> {
    fn from(count: usize) -> Self {
        Placeholders::Count(count)
    }
}

impl<T> From<Vec<T>> for Placeholders<T> {
    fn from(seeds: Vec<T>) -> Self {
        Placeholders::Seeds(seeds)
    }
}

/// Options accepted by [`KeyedStore::with_config`](crate::KeyedStore::with_config).
#[derive(Clone, Debug)]
pub struct Config<T> {
    /// Placeholder records to materialize up front.
    pub placeholders: Placeholders<T>,
    /// Explicit sizes for the sectioned view; `None` uses the default fixed
    /// chunk size.
    pub section_sizes: Option<Vec<usize>>,
    /// Emit diagnostic events for callback failures.
    pub debug: bool,
}

impl<T> Default for Config<T> {
    fn default() -> Self {
        Self {
            placeholders: Placeholders::default(),
            section_sizes: None,
            debug: false,
        }
    }
}
