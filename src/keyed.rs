//! The identity contract for stored elements.

use core::fmt::Debug;
use core::hash::Hash;

/// Identity contract for elements held in a [`KeyedStore`](crate::KeyedStore).
///
/// `id` is the element's raw identity field. Uniqueness runs on this value
/// unless a store-level key extractor is installed (see
/// [`KeyedStore::set_key_extractor`](crate::KeyedStore::set_key_extractor));
/// `id` remains the fallback whenever the extractor fails.
pub trait Keyed {
    /// The computed identity value. `Debug` is required so failure reports
    /// can name the element they concern.
    type Key: Eq + Hash + Clone + Debug;

    fn id(&self) -> Self::Key;
}
