//! keyed-store: an in-memory ordered collection that keeps its elements
//! unique by an identity key, supports prepend/append/positional insertion,
//! carries lazily-retired "placeholder" entries for skeleton/loading UIs, and
//! can partition its contents into fixed or variable-size contiguous sections
//! on demand.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the uniqueness/index invariant, the placeholder lifecycle,
//!   and the insertion/replacement/deletion algorithms in one small core
//!   with every mutation funneled through a single insertion routine.
//! - Pieces:
//!   - KeyedStore<T, S>: the core. Elements live in a slot map; a `Vec` of
//!     slot keys is the authoritative order and a hash index maps each
//!     computed identity key to its slot, so lookups are O(1) average while
//!     structural edits only splice the order vector.
//!   - Entry<T> / Placeholder<T>: a stored slot is either a real element or
//!     a skeleton record; the enum tag is what the clearing pass filters on.
//!   - Config<T> / Placeholders<T>: construction options; the placeholder
//!     request is a tagged union of a bare count or explicit seed records,
//!     resolved once at construction.
//!   - Sectioner / Section<I>: partitions the ordered contents into
//!     contiguous chunks, either default-sized or by an explicit size list.
//!
//! Invariants
//! - Uniqueness: no two elements in the order share a computed key; a later
//!   duplicate is silently discarded before any side effect on the contents.
//! - Index coherence: the index maps exactly the keys of the real elements
//!   in the order, each to its own element; placeholders are never indexed.
//! - Placeholder lifecycle: present placeholders are retired exactly once,
//!   by the first insertion attempt to reach the core routine; the cleared
//!   flag never reverts, not even across `reset`.
//! - Order: relative insertion order of surviving elements is preserved
//!   except where a prepend or positional insert explicitly asked otherwise.
//!
//! Callbacks and failure policy
//! - An optional key extractor overrides `Keyed::id`; an optional before-add
//!   hook runs once per accepted element and may mutate it in place. Both
//!   report failure through `Result`; a failure is surfaced on the `tracing`
//!   channel (when the store was configured with `debug`) and execution
//!   continues with the documented fallback. Nothing in the core aborts a
//!   batch or leaves the order/index pair inconsistent.
//! - Lookups that miss return `None`; nothing here panics on absent keys,
//!   out-of-bounds positions, or unmatched predicates.
//!
//! Constraints and non-goals
//! - Single-threaded: the boxed callbacks are not `Send`, and the invariants
//!   are not safe under concurrent mutation; wrap the store in one exclusive
//!   lock if that is ever needed.
//! - Re-entry from a callback into the same store is unrepresentable: all
//!   mutating methods take `&mut self`.
//! - No persistence, no serialization, no schema validation of elements.
//! - Sections are recomputed from the current order on access, never cached.

mod config;
mod entry;
mod keyed;
mod sections;
mod store;
mod store_proptest;

// Public surface
pub use config::{Config, Placeholders};
pub use entry::{Entry, Placeholder};
pub use keyed::Keyed;
pub use sections::{Section, Sectioner, DEFAULT_SECTION_SIZE};
pub use store::{AddContext, KeyedStore, Removed, StoreId};
