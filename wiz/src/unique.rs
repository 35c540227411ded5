// Frequency based selection: elements occurring once, or more than once.
//
// All functions take an owned collection and hand back the same collection
// type, so a `VecDeque` stays a `VecDeque` and a caller's own newtype around
// a `Vec` stays that newtype.

use std::hash::Hash;

use ahash::{HashMap, HashSet};

/// The elements that occur exactly once, in their original order.
pub fn find_uniques<C>(collection: C) -> C
where
    C: IntoIterator + FromIterator<C::Item>,
    C::Item: Eq + Hash,
{
    let items = collection.into_iter().collect::<Vec<_>>();
    let keep = occurrence_mask(items.iter(), |count, _| count == 1);
    retain(items, keep)
}

/// The elements whose projected key occurs exactly once, in their original
/// order.
///
/// The original elements are returned, not the keys.
pub fn find_uniques_by<C, K, F>(collection: C, projection: F) -> C
where
    C: IntoIterator + FromIterator<C::Item>,
    K: Eq + Hash,
    F: FnMut(&C::Item) -> K,
{
    let items = collection.into_iter().collect::<Vec<_>>();
    let keep = occurrence_mask(items.iter().map(projection), |count, _| count == 1);
    retain(items, keep)
}

/// The values that occur more than once.
///
/// Every duplicated value is reported a single time, at the position of its
/// first occurrence.
pub fn find_duplicates<C>(collection: C) -> C
where
    C: IntoIterator + FromIterator<C::Item>,
    C::Item: Eq + Hash,
{
    let items = collection.into_iter().collect::<Vec<_>>();
    let keep = occurrence_mask(items.iter(), |count, first| count > 1 && first);
    retain(items, keep)
}

/// The elements whose projected key occurs more than once.
///
/// For each duplicated key the first element carrying it is reported.
pub fn find_duplicates_by<C, K, F>(collection: C, projection: F) -> C
where
    C: IntoIterator + FromIterator<C::Item>,
    K: Eq + Hash,
    F: FnMut(&C::Item) -> K,
{
    let items = collection.into_iter().collect::<Vec<_>>();
    let keep = occurrence_mask(items.iter().map(projection), |count, first| {
        count > 1 && first
    });
    retain(items, keep)
}

/// Decide for each position whether to keep it.
///
/// The first pass counts how often each key occurs. The second pass calls
/// `keep` with that count and whether this is the key's first occurrence.
fn occurrence_mask<K, I, F>(keys: I, keep: F) -> Vec<bool>
where
    I: Iterator<Item = K>,
    K: Eq + Hash,
    F: Fn(usize, bool) -> bool,
{
    let keys = keys.collect::<Vec<_>>();
    let mut counts: HashMap<&K, usize> = HashMap::default();
    for key in &keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    let mut seen: HashSet<&K> = HashSet::default();
    keys.iter()
        .map(|key| {
            let first = seen.insert(key);
            keep(counts[&key], first)
        })
        .collect()
}

fn retain<C, T>(items: Vec<T>, keep: Vec<bool>) -> C
where
    C: FromIterator<T>,
{
    items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect()
}
