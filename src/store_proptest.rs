#![cfg(test)]

// Property tests for KeyedStore kept inside the crate so they can pin the
// core invariants without going through the integration surface.
//
// Model: a Vec of (id, payload) pairs maintained by the same dedup rules,
// scanned naively. After every operation the store's real contents must
// equal the model exactly, and the index must agree with a linear scan.

use crate::{Config, Entry, Keyed, KeyedStore};
use proptest::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Item {
    id: u8,
    payload: u16,
}

impl Keyed for Item {
    type Key = u8;
    fn id(&self) -> u8 {
        self.id
    }
}

#[derive(Clone, Debug)]
enum Op {
    Add(u8, u16),
    Prepend(u8, u16),
    PrependBatch(Vec<(u8, u16)>),
    Replace(u8, u16),
    Remove(u8),
    Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..16, any::<u16>()).prop_map(|(id, p)| Op::Add(id, p)),
        3 => (0u8..16, any::<u16>()).prop_map(|(id, p)| Op::Prepend(id, p)),
        2 => proptest::collection::vec((0u8..16, any::<u16>()), 0..4).prop_map(Op::PrependBatch),
        2 => (0u8..16, any::<u16>()).prop_map(|(id, p)| Op::Replace(id, p)),
        3 => (0u8..16).prop_map(Op::Remove),
        1 => Just(Op::Reset),
    ]
}

fn model_contains(model: &[Item], id: u8) -> Option<usize> {
    model.iter().position(|item| item.id == id)
}

proptest! {
    /// After any operation sequence, the store's real contents equal a naive
    /// Vec model, the index agrees with a scan, and no key appears twice.
    #[test]
    fn store_matches_naive_model(ops in proptest::collection::vec(op_strategy(), 1..64)) {
        let mut store: KeyedStore<Item> = KeyedStore::new();
        let mut model: Vec<Item> = Vec::new();

        for op in ops {
            match op {
                Op::Add(id, payload) => {
                    let accepted = store.add(Item { id, payload });
                    prop_assert_eq!(accepted, model_contains(&model, id).is_none());
                    if accepted {
                        model.push(Item { id, payload });
                    }
                }
                Op::Prepend(id, payload) => {
                    let accepted = store.prepend(Item { id, payload });
                    prop_assert_eq!(accepted, model_contains(&model, id).is_none());
                    if accepted {
                        model.insert(0, Item { id, payload });
                    }
                }
                Op::PrependBatch(batch) => {
                    let items: Vec<Item> =
                        batch.into_iter().map(|(id, payload)| Item { id, payload }).collect();
                    store.prepend_all(items.clone());
                    // Accepted elements land ahead of previous contents in
                    // batch order; duplicates (against contents or earlier
                    // batch entries) are skipped.
                    let mut at = 0;
                    for item in items {
                        if model_contains(&model, item.id).is_none() {
                            model.insert(at, item);
                            at += 1;
                        }
                    }
                }
                Op::Replace(id, payload) => {
                    store.replace(Item { id, payload });
                    match model_contains(&model, id) {
                        Some(i) => model[i] = Item { id, payload },
                        None => model.push(Item { id, payload }),
                    }
                }
                Op::Remove(id) => {
                    let removed = store.remove(&id);
                    match model_contains(&model, id) {
                        Some(i) => {
                            let removed = removed.expect("model says present");
                            prop_assert_eq!(removed.index, i);
                            prop_assert_eq!(&removed.element, &model.remove(i));
                        }
                        None => prop_assert!(removed.is_none()),
                    }
                }
                Op::Reset => {
                    store.reset();
                    model.clear();
                }
            }

            // Order equality against the model.
            let contents: Vec<Item> =
                store.iter().filter_map(Entry::as_real).cloned().collect();
            prop_assert_eq!(&contents, &model);
            prop_assert_eq!(store.len(), model.len());

            // Index coherence: each model id resolves to its element, and
            // nothing else resolves.
            for id in 0u8..16 {
                match model_contains(&model, id) {
                    Some(i) => {
                        prop_assert_eq!(store.get(&id), Some(&model[i]));
                        prop_assert!(store.contains_key(&id));
                        prop_assert_eq!(store.position_of_id(&id), Some(i));
                    }
                    None => {
                        prop_assert!(store.get(&id).is_none());
                        prop_assert!(!store.contains_key(&id));
                        prop_assert!(store.position_of_id(&id).is_none());
                    }
                }
            }
        }
    }

    /// Sections always tile the contents: concatenating the sections in
    /// order reproduces the order, regardless of the configured sizes.
    #[test]
    fn sections_tile_the_contents(
        sizes in proptest::option::of(proptest::collection::vec(0usize..6, 0..6)),
        ids in proptest::collection::vec(0u8..32, 0..40),
    ) {
        let mut store: KeyedStore<Item> = KeyedStore::with_config(Config {
            section_sizes: sizes,
            ..Config::default()
        });
        for id in ids {
            store.add(Item { id, payload: 0 });
        }

        let flattened: Vec<&Entry<Item>> = store
            .sections()
            .into_iter()
            .flat_map(|section| section.items)
            .collect();
        let contents: Vec<&Entry<Item>> = store.iter().collect();
        prop_assert_eq!(flattened, contents);
    }
}
