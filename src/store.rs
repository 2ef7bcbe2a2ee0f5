//! KeyedStore: the identity-indexed ordered collection.

use core::fmt;
use core::hash::BuildHasher;
use std::collections::hash_map::RandomState;
use std::error::Error;
use std::sync::atomic::{AtomicU64, Ordering};

use hashbrown::HashMap;
use slotmap::{DefaultKey, SlotMap};
use tracing::warn;

use crate::config::Config;
use crate::entry::{Entry, Placeholder};
use crate::keyed::Keyed;
use crate::sections::{Section, Sectioner};

/// Unique per-instance identifier; only carried in diagnostics.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct StoreId(u64);

impl StoreId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        StoreId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Context handed to the before-add hook for each accepted element.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AddContext {
    pub is_prepend: bool,
}

/// A removed element together with its pre-deletion position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Removed<T> {
    pub element: T,
    pub index: usize,
}

type BoxError = Box<dyn Error>;
type KeyExtractor<T> = Box<dyn Fn(&T) -> Result<<T as Keyed>::Key, BoxError>>;
type BeforeAddHook<T> = Box<dyn FnMut(&mut T, AddContext) -> Result<(), BoxError>>;

struct Registered {
    slot: DefaultKey,
    // First-registration order, reported by `keys()`.
    seq: u64,
}

/// An ordered collection that keeps its elements unique by identity key.
///
/// Elements live in a slot map; `order` holds slot keys (the authoritative
/// sequence) and `index` maps each computed identity key to its slot, so
/// lookups stay O(1) while prepends, positional inserts, and deletions only
/// splice the order vector. Every mutation funnels through one internal
/// insertion routine: the only place placeholders are cleared, the before-add
/// hook runs, and the index is updated.
pub struct KeyedStore<T: Keyed, S = RandomState> {
    id: StoreId,
    slots: SlotMap<DefaultKey, Entry<T>>,
    order: Vec<DefaultKey>,
    index: HashMap<T::Key, Registered, S>,
    next_seq: u64,
    placeholder_count: usize,
    placeholders_cleared: bool,
    sectioner: Sectioner,
    key_extractor: Option<KeyExtractor<T>>,
    before_add: Option<BeforeAddHook<T>>,
    debug: bool,
}

impl<T: Keyed> KeyedStore<T> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config<T>) -> Self {
        Self::with_config_and_hasher(config, RandomState::default())
    }
}

impl<T: Keyed> Default for KeyedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> KeyedStore<T, S>
where
    T: Keyed,
    S: BuildHasher + Clone + Default,
{
    pub fn with_config_and_hasher(config: Config<T>, hasher: S) -> Self {
        let Config {
            placeholders,
            section_sizes,
            debug,
        } = config;
        let (placeholder_count, seeds) = placeholders.into_parts();
        let mut store = Self {
            id: StoreId::next(),
            slots: SlotMap::with_key(),
            order: Vec::new(),
            index: HashMap::with_hasher(hasher),
            next_seq: 0,
            placeholder_count,
            placeholders_cleared: false,
            sectioner: Sectioner::new(section_sizes),
            key_extractor: None,
            before_add: None,
            debug,
        };
        store.materialize_placeholders(seeds);
        store
    }

    fn materialize_placeholders(&mut self, seeds: Vec<T>) {
        let mut seeds = seeds.into_iter();
        for index in 0..self.placeholder_count {
            let seed = seeds.next();
            let slot = self
                .slots
                .insert(Entry::Placeholder(Placeholder { index, seed }));
            self.order.push(slot);
        }
    }

    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Number of real elements; placeholders are excluded while they stand.
    pub fn len(&self) -> usize {
        let held = if self.has_placeholders() {
            self.placeholder_count
        } else {
            0
        };
        self.order.len().saturating_sub(held)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_contents(&self) -> bool {
        self.len() > 0
    }

    pub fn has_placeholders(&self) -> bool {
        self.placeholder_count > 0 && !self.placeholders_cleared
    }

    /// Ordered iterator over the current contents, placeholders included.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.order.iter().map(move |&slot| &self.slots[slot])
    }

    /// The element registered under `key`. O(1).
    pub fn get(&self, key: &T::Key) -> Option<&T> {
        let registered = self.index.get(key)?;
        self.slots.get(registered.slot)?.as_real()
    }

    /// True iff `key` is registered and the stored element still computes to
    /// that key. The recheck guards against an index entry left stale by a
    /// later change of extractor.
    pub fn contains_key(&self, key: &T::Key) -> bool {
        match self.get(key) {
            Some(element) => self.extract_key(element) == *key,
            None => false,
        }
    }

    /// The entry at position `index` in the current order.
    pub fn get_at(&self, index: usize) -> Option<&Entry<T>> {
        let slot = self.order.get(index)?;
        self.slots.get(*slot)
    }

    /// Position of the first element whose raw `id` equals `key`.
    ///
    /// This deliberately matches on [`Keyed::id`], never the configured key
    /// extractor; callers depend on the asymmetry.
    pub fn position_of_id(&self, key: &T::Key) -> Option<usize> {
        self.iter().position(|entry| {
            entry
                .as_real()
                .map(|element| element.id() == *key)
                .unwrap_or(false)
        })
    }

    /// First real element matching the predicate, in order.
    pub fn find_by<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter_map(Entry::as_real)
            .find(|&element| predicate(element))
    }

    /// All registered keys, in first-registration order.
    pub fn keys(&self) -> Vec<T::Key> {
        let mut keys: Vec<(u64, T::Key)> = self
            .index
            .iter()
            .map(|(key, registered)| (registered.seq, key.clone()))
            .collect();
        keys.sort_unstable_by_key(|&(seq, _)| seq);
        keys.into_iter().map(|(_, key)| key).collect()
    }

    /// Appends `element` unless its computed key is already registered.
    /// Returns whether the element was accepted.
    pub fn add(&mut self, element: T) -> bool {
        self.insert_unique(element, None, false)
    }

    /// Appends each element in order, skipping duplicates. Returns the number
    /// accepted.
    pub fn add_all(&mut self, elements: impl IntoIterator<Item = T>) -> usize {
        let mut accepted = 0;
        for element in elements {
            if self.insert_unique(element, None, false) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Inserts `element` at the front unless its computed key is already
    /// registered. Returns whether the element was accepted.
    pub fn prepend(&mut self, element: T) -> bool {
        self.insert_unique(element, Some(0), true)
    }

    /// Prepends a batch ahead of the previous contents while keeping the
    /// batch's own order: prepending `[a, b]` to `[x]` yields `[a, b, x]`.
    /// Each accepted element lands immediately before the previously-existing
    /// front. Returns the number accepted.
    pub fn prepend_all(&mut self, elements: impl IntoIterator<Item = T>) -> usize {
        let mut at = 0;
        for element in elements {
            if self.insert_unique(element, Some(at), true) {
                at += 1;
            }
        }
        at
    }

    /// Replaces the element sharing `element`'s computed key, keeping its
    /// position; an absent key degrades to an append. Returns the displaced
    /// element, if any.
    pub fn replace(&mut self, element: T) -> Option<T> {
        let key = self.extract_key(&element);
        match self.remove(&key) {
            Some(removed) => {
                self.insert_unique(element, Some(removed.index), false);
                Some(removed.element)
            }
            None => {
                self.insert_unique(element, None, false);
                None
            }
        }
    }

    /// Removes the element registered under `key`, reporting it together
    /// with its pre-deletion position.
    pub fn remove(&mut self, key: &T::Key) -> Option<Removed<T>> {
        let registered = self.index.remove(key)?;
        let index = self
            .order
            .iter()
            .position(|&slot| slot == registered.slot)?;
        self.order.remove(index);
        let element = match self.slots.remove(registered.slot)? {
            Entry::Real(element) => element,
            Entry::Placeholder(_) => return None,
        };
        Some(Removed { element, index })
    }

    /// Removes every placeholder entry. Idempotent: a no-op when none were
    /// configured or they were already cleared. Filters by the placeholder
    /// tag, not by position, so it stays correct even with real elements
    /// interleaved.
    pub fn clear_placeholders(&mut self) {
        if self.placeholder_count == 0 || self.placeholders_cleared {
            return;
        }
        let slots = &mut self.slots;
        self.order.retain(|&slot| {
            let is_placeholder = slots
                .get(slot)
                .map(Entry::is_placeholder)
                .unwrap_or(false);
            if is_placeholder {
                slots.remove(slot);
            }
            !is_placeholder
        });
        self.placeholders_cleared = true;
    }

    /// Empties the contents and the identity index. Placeholders are not
    /// re-materialized and the cleared flag keeps its value; configuration
    /// and callbacks survive.
    pub fn reset(&mut self) {
        self.order.clear();
        self.index.clear();
        self.slots.clear();
    }

    /// Partitions the current contents through the sectioner. Recomputed on
    /// every call, never cached.
    pub fn sections(&self) -> Vec<Section<&Entry<T>>> {
        self.sectioner.partition(self.iter())
    }

    /// Installs (or replaces) the identity-key extractor. An `Err` from the
    /// extractor is reported and the element's raw `id` is used instead.
    pub fn set_key_extractor<F>(&mut self, extractor: F)
    where
        F: Fn(&T) -> Result<T::Key, BoxError> + 'static,
    {
        self.key_extractor = Some(Box::new(extractor));
    }

    /// Installs (or replaces) the before-add hook, invoked once per accepted
    /// element right before it is indexed and inserted. The hook may mutate
    /// the element in place; an `Err` is reported and insertion proceeds.
    pub fn set_before_add<F>(&mut self, hook: F)
    where
        F: FnMut(&mut T, AddContext) -> Result<(), BoxError> + 'static,
    {
        self.before_add = Some(Box::new(hook));
    }

    // The single insertion routine behind add/prepend/replace.
    fn insert_unique(&mut self, mut element: T, at: Option<usize>, is_prepend: bool) -> bool {
        // Any insertion attempt retires the placeholders, even one that is
        // about to be discarded as a duplicate.
        self.clear_placeholders();

        let key = self.extract_key(&element);
        if self.index.contains_key(&key) {
            // Duplicate: expected steady state, not a fault.
            return false;
        }

        if let Some(hook) = self.before_add.as_mut() {
            if let Err(err) = hook(&mut element, AddContext { is_prepend }) {
                if self.debug {
                    warn!(
                        store = %self.id,
                        element = ?key,
                        error = %err,
                        "before-add hook failed; inserting anyway"
                    );
                }
            }
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        let slot = self.slots.insert(Entry::Real(element));
        self.index.insert(key, Registered { slot, seq });
        match at {
            Some(position) => self.order.insert(position.min(self.order.len()), slot),
            None => self.order.push(slot),
        }
        true
    }

    fn extract_key(&self, element: &T) -> T::Key {
        if let Some(extractor) = &self.key_extractor {
            match extractor(element) {
                Ok(key) => return key,
                Err(err) => {
                    if self.debug {
                        warn!(
                            store = %self.id,
                            element = ?element.id(),
                            error = %err,
                            "key extractor failed; falling back to id"
                        );
                    }
                }
            }
        }
        element.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Placeholders;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Person {
        id: u32,
        name: &'static str,
    }

    impl Keyed for Person {
        type Key = u32;
        fn id(&self) -> u32 {
            self.id
        }
    }

    fn person(id: u32, name: &'static str) -> Person {
        Person { id, name }
    }

    fn ids<S: BuildHasher + Clone + Default>(store: &KeyedStore<Person, S>) -> Vec<u32> {
        store
            .iter()
            .filter_map(Entry::as_real)
            .map(|p| p.id)
            .collect()
    }

    /// Invariant: construction with a bare count yields that many placeholder
    /// entries, indexed 0.., excluded from `len`.
    #[test]
    fn placeholders_materialize_at_construction() {
        let store: KeyedStore<Person> = KeyedStore::with_config(Config {
            placeholders: 5.into(),
            ..Config::default()
        });
        assert!(store.has_placeholders());
        assert_eq!(store.len(), 0);
        assert!(!store.has_contents());

        let entries: Vec<_> = store.iter().collect();
        assert_eq!(entries.len(), 5);
        for (i, entry) in entries.iter().enumerate() {
            let placeholder = entry.as_placeholder().expect("placeholder entry");
            assert_eq!(placeholder.index, i);
            assert!(placeholder.seed.is_none());
        }
    }

    /// Invariant: seeded placeholders carry their seed data in order, and the
    /// seed list doubles as the count.
    #[test]
    fn seeded_placeholders_keep_their_seeds() {
        let store: KeyedStore<Person> = KeyedStore::with_config(Config {
            placeholders: Placeholders::Seeds(vec![person(1, "draft"), person(2, "draft")]),
            ..Config::default()
        });
        assert!(store.has_placeholders());
        assert_eq!(store.len(), 0);

        let seeds: Vec<_> = store
            .iter()
            .map(|e| e.as_placeholder().unwrap().seed.clone())
            .collect();
        assert_eq!(seeds, vec![Some(person(1, "draft")), Some(person(2, "draft"))]);
    }

    /// Invariant: appends keep input order; a later duplicate is
    /// discarded and the earlier element's identity and position survive.
    #[test]
    fn duplicate_append_is_discarded() {
        let mut store = KeyedStore::new();
        let accepted = store.add_all(vec![
            person(123, "Lincoln"),
            person(234, "Daniel"),
            person(123, "Sam"),
        ]);
        assert_eq!(accepted, 2);
        assert_eq!(store.len(), 2);
        assert_eq!(ids(&store), vec![123, 234]);
        assert_eq!(store.get(&123).unwrap().name, "Lincoln");
    }

    /// Invariant: prepended batches land ahead of previous contents in
    /// the batch's own order.
    #[test]
    fn prepend_batches_keep_batch_order() {
        let mut store = KeyedStore::new();
        store.prepend_all(vec![person(1, "a"), person(2, "b")]);
        store.prepend_all(vec![person(3, "c"), person(4, "d")]);
        assert_eq!(ids(&store), vec![3, 4, 1, 2]);
    }

    /// Invariant: a prepend batch skips duplicates without disturbing the
    /// placement of the accepted elements.
    #[test]
    fn prepend_skips_duplicates() {
        let mut store = KeyedStore::new();
        store.add_all(vec![person(123, "Lincoln"), person(234, "Daniel")]);
        let accepted = store.prepend_all(vec![person(123, "Sam"), person(345, "Colin")]);
        assert_eq!(accepted, 1);
        assert_eq!(ids(&store), vec![345, 123, 234]);
    }

    /// Invariant: replacing a present key is positionally stable and
    /// returns the displaced element.
    #[test]
    fn replace_keeps_position() {
        let mut store = KeyedStore::new();
        store.add_all(vec![person(1, "a"), person(2, "b"), person(3, "c")]);
        let displaced = store.replace(person(2, "b2"));
        assert_eq!(displaced, Some(person(2, "b")));
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.get(&2).unwrap().name, "b2");
    }

    /// Invariant: replacing an absent key appends.
    #[test]
    fn replace_absent_key_appends() {
        let mut store = KeyedStore::new();
        store.add_all(vec![person(1, "a"), person(2, "b")]);
        let displaced = store.replace(person(3, "c"));
        assert!(displaced.is_none());
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    /// Invariant: removal reports the element and its pre-deletion
    /// position; removing an absent key returns `None`.
    #[test]
    fn remove_reports_element_and_position() {
        let mut store = KeyedStore::new();
        store.add_all(vec![person(123, "Lincoln"), person(234, "Daniel"), person(345, "")]);

        let removed = store.remove(&234).expect("present");
        assert_eq!(removed.element, person(234, "Daniel"));
        assert_eq!(removed.index, 1);
        assert_eq!(ids(&store), vec![123, 345]);

        assert!(store.remove(&12).is_none());
    }

    /// Invariant: after a removal, the key is gone from both the order
    /// and the index.
    #[test]
    fn remove_unregisters_the_key() {
        let mut store = KeyedStore::new();
        store.add(person(1, "a"));
        store.remove(&1);
        assert!(store.get(&1).is_none());
        assert!(!store.contains_key(&1));
        assert!(store.position_of_id(&1).is_none());
        assert!(store.is_empty());
    }

    /// Invariant: the first real insertion clears every placeholder.
    #[test]
    fn first_insert_clears_placeholders() {
        let mut store = KeyedStore::with_config(Config {
            placeholders: 3.into(),
            ..Config::default()
        });
        assert!(store.has_placeholders());

        store.add(person(1, "a"));
        assert!(!store.has_placeholders());
        assert_eq!(store.len(), 1);
        assert!(store.iter().all(|e| !e.is_placeholder()));
    }

    /// Invariant: clearing placeholders twice is the same as once.
    #[test]
    fn clear_placeholders_is_idempotent() {
        let mut store: KeyedStore<Person> = KeyedStore::with_config(Config {
            placeholders: 4.into(),
            ..Config::default()
        });
        store.clear_placeholders();
        assert!(!store.has_placeholders());
        assert_eq!(store.iter().count(), 0);

        store.clear_placeholders();
        assert!(!store.has_placeholders());
        assert_eq!(store.iter().count(), 0);
    }

    /// Invariant: `keys()` reports first-registration order even when the
    /// list order diverges through prepends.
    #[test]
    fn keys_follow_registration_order() {
        let mut store = KeyedStore::new();
        store.add(person(1, "a"));
        store.add(person(2, "b"));
        store.prepend(person(3, "c"));
        assert_eq!(ids(&store), vec![3, 1, 2]);
        assert_eq!(store.keys(), vec![1, 2, 3]);
    }

    /// Invariant: lookups that miss return `None`, never panic.
    #[test]
    fn lookups_miss_gracefully() {
        let store: KeyedStore<Person> = KeyedStore::new();
        assert!(store.get(&1).is_none());
        assert!(store.get_at(0).is_none());
        assert!(store.position_of_id(&1).is_none());
        assert!(store.find_by(|p| p.name == "Daniel").is_none());
        assert!(!store.contains_key(&1));
    }

    /// Invariant: `find_by` returns the first match in order.
    #[test]
    fn find_by_returns_first_match() {
        let mut store = KeyedStore::new();
        store.add_all(vec![
            person(1, "Lincoln"),
            person(2, "Daniel"),
            person(3, "Daniel"),
        ]);
        assert_eq!(store.find_by(|p| p.name == "Daniel"), Some(&person(2, "Daniel")));
    }

    /// Invariant: the hook runs once per accepted element, never for a
    /// duplicate, and sees the prepend flag.
    #[test]
    fn hook_runs_per_accepted_element() {
        let calls: Rc<RefCell<Vec<(u32, bool)>>> = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&calls);

        let mut store = KeyedStore::new();
        store.set_before_add(move |element: &mut Person, ctx| {
            log.borrow_mut().push((element.id, ctx.is_prepend));
            Ok(())
        });

        store.add_all(vec![person(1, "a"), person(2, "b"), person(1, "dup")]);
        store.prepend(person(3, "c"));

        assert_eq!(*calls.borrow(), vec![(1, false), (2, false), (3, true)]);
    }

    /// Invariant: the hook may mutate the element in place before it is
    /// indexed and inserted.
    #[test]
    fn hook_mutates_in_place() {
        let mut store = KeyedStore::new();
        store.set_before_add(|element: &mut Person, _ctx| {
            element.name = "stamped";
            Ok(())
        });
        store.add(person(1, "raw"));
        assert_eq!(store.get(&1).unwrap().name, "stamped");
    }

    /// Invariant: a failing hook is reported but never blocks the insertion.
    #[test]
    fn hook_failure_does_not_block_insert() {
        let mut store = KeyedStore::new();
        store.set_before_add(|_element: &mut Person, _ctx| Err("hook broke".into()));
        assert!(store.add(person(1, "a")));
        assert_eq!(store.len(), 1);
    }

    /// Invariant: a failing extractor falls back to the raw id, so the
    /// element still deduplicates by `id`.
    #[test]
    fn extractor_failure_falls_back_to_id() {
        let mut store = KeyedStore::new();
        store.set_key_extractor(|_p: &Person| Err("extractor broke".into()));
        store.add(person(1, "a"));
        assert!(!store.add(person(1, "b")));
        assert_eq!(store.get(&1).unwrap().name, "a");
    }

    /// Invariant: `contains_key` rechecks the stored element's computed key,
    /// so an index entry left stale by an extractor swap reads as absent.
    #[test]
    fn contains_key_guards_against_stale_index() {
        let mut store = KeyedStore::new();
        store.add(person(1, "a"));
        assert!(store.contains_key(&1));

        // Registered under id 1; the new extractor now computes 100+id.
        store.set_key_extractor(|p: &Person| Ok(p.id + 100));
        assert!(store.get(&1).is_some());
        assert!(!store.contains_key(&1));
    }

    /// Invariant: `position_of_id` scans the raw `id`, ignoring the
    /// configured extractor.
    #[test]
    fn position_of_id_ignores_the_extractor() {
        let mut store = KeyedStore::new();
        store.set_key_extractor(|p: &Person| Ok(p.id + 100));
        store.add_all(vec![person(1, "a"), person(2, "b")]);

        // Indexed under 101/102, but the positional scan matches raw ids.
        assert_eq!(store.position_of_id(&2), Some(1));
        assert!(store.position_of_id(&102).is_none());
        assert!(store.get(&102).is_some());
    }

    /// Invariant: `reset` empties order and index but keeps configuration,
    /// callbacks, and the placeholder-cleared flag.
    #[test]
    fn reset_preserves_configuration() {
        let mut store = KeyedStore::new();
        store.set_before_add(|element: &mut Person, _ctx| {
            element.name = "stamped";
            Ok(())
        });
        store.add_all(vec![person(1, "a"), person(2, "b")]);

        store.reset();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
        assert!(store.keys().is_empty());

        // The hook survives the reset.
        store.add(person(3, "raw"));
        assert_eq!(store.get(&3).unwrap().name, "stamped");
    }

    /// Invariant: resetting a store whose placeholders were never cleared
    /// drops the placeholder entries without re-materializing them, and `len`
    /// stays at zero rather than going negative.
    #[test]
    fn reset_with_standing_placeholders() {
        let mut store: KeyedStore<Person> = KeyedStore::with_config(Config {
            placeholders: 5.into(),
            ..Config::default()
        });
        store.reset();
        assert_eq!(store.iter().count(), 0);
        assert_eq!(store.len(), 0);
        // The configured count was never retired by an insertion.
        assert!(store.has_placeholders());
    }

    /// Invariant: sections are recomputed from the current order on every
    /// access.
    #[test]
    fn sections_track_the_current_order() {
        let mut store = KeyedStore::with_config(Config {
            section_sizes: Some(vec![1, 2]),
            ..Config::default()
        });
        store.add_all(vec![person(1, "a"), person(2, "b"), person(3, "c")]);

        let sizes: Vec<usize> = store.sections().iter().map(|s| s.items.len()).collect();
        assert_eq!(sizes, vec![1, 2]);

        store.remove(&1);
        let sizes: Vec<usize> = store.sections().iter().map(|s| s.items.len()).collect();
        assert_eq!(sizes, vec![1, 1]);
    }

    /// Invariant: every store instance gets a distinct diagnostic id.
    #[test]
    fn store_ids_are_unique() {
        let a: KeyedStore<Person> = KeyedStore::new();
        let b: KeyedStore<Person> = KeyedStore::new();
        assert_ne!(a.id(), b.id());
    }
}
