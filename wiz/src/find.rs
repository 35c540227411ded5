// Searching ordered sequences and unordered mappings.

/// The index of the first element equal to `value`.
pub fn index_of<T: PartialEq>(seq: &[T], value: &T) -> Option<usize> {
    seq.iter().position(|item| item == value)
}

/// The index of the last element equal to `value`.
pub fn last_index_of<T: PartialEq>(seq: &[T], value: &T) -> Option<usize> {
    seq.iter().rposition(|item| item == value)
}

/// Whether any element equals `value`.
pub fn contains<T: PartialEq>(seq: &[T], value: &T) -> bool {
    index_of(seq, value).is_some()
}

/// Whether any element satisfies `predicate`.
pub fn contains_by<T, P>(seq: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    find(seq, predicate).is_some()
}

/// The first element satisfying `predicate`.
///
/// Elements are tested front to back; the search stops at the first match.
pub fn find<T, P>(seq: &[T], predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    find_index_of(seq, predicate).map(|(_, item)| item)
}

/// The first element satisfying `predicate`, together with its index.
pub fn find_index_of<T, P>(seq: &[T], mut predicate: P) -> Option<(usize, &T)>
where
    P: FnMut(&T) -> bool,
{
    seq.iter().enumerate().find(|&(_, item)| predicate(item))
}

/// The last element satisfying `predicate`, together with its index.
///
/// Elements are tested back to front, so `predicate` sees them in reverse
/// order and the highest matching index wins.
pub fn find_last_index_of<T, P>(seq: &[T], mut predicate: P) -> Option<(usize, &T)>
where
    P: FnMut(&T) -> bool,
{
    seq.iter().enumerate().rev().find(|&(_, item)| predicate(item))
}

/// The first element satisfying `predicate`, or `fallback` if there is
/// none.
pub fn find_or_else<T, P>(seq: &[T], fallback: T, predicate: P) -> T
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    match find(seq, predicate) {
        Some(item) => item.clone(),
        None => fallback,
    }
}

/// The first key, in the mapping's own iteration order, whose value equals
/// `value`.
///
/// Works with anything that iterates as `(&K, &V)`, such as `&HashMap` or
/// `&BTreeMap`. For hash maps the iteration order is unspecified, so when
/// several keys share the value any one of them may be returned.
pub fn find_key<'a, K, V, M>(mapping: M, value: &V) -> Option<&'a K>
where
    M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: PartialEq + 'a,
{
    find_key_by(mapping, |_, v| v == value)
}

/// The first key, in the mapping's own iteration order, whose entry
/// satisfies `predicate`.
pub fn find_key_by<'a, K, V, M, P>(mapping: M, mut predicate: P) -> Option<&'a K>
where
    M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: 'a,
    P: FnMut(&K, &V) -> bool,
{
    mapping
        .into_iter()
        .find(|&(k, v)| predicate(k, v))
        .map(|(k, _)| k)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use ahash::HashMap;

    use super::*;

    #[test]
    fn test_index_of() {
        assert_eq!(index_of(&[0, 1, 2, 1, 2, 3], &2), Some(2));
        assert_eq!(index_of(&[0, 1, 2, 1, 2, 3], &6), None);
    }

    #[test]
    fn test_last_index_of() {
        assert_eq!(last_index_of(&[0, 1, 2, 1, 2, 3], &2), Some(4));
        assert_eq!(last_index_of(&[0, 1, 2, 1, 2, 3], &6), None);
    }

    #[test]
    fn test_contains() {
        assert!(contains(&["a", "b"], &"b"));
        assert!(!contains(&["a", "b"], &"c"));
        assert!(!contains::<u8>(&[], &0));
        assert!(contains_by(&[1, 4, 9], |n| n % 2 == 0));
    }

    #[test]
    fn test_find_visits_front_to_back() {
        let seq = ["a", "b", "c", "d"];
        let mut visited = Vec::new();
        let result = find(&seq, |item| {
            visited.push(*item);
            *item == "b"
        });

        assert_eq!(result, Some(&"b"));
        assert_eq!(visited, vec!["a", "b"]);
    }

    #[test]
    fn test_find_missing() {
        assert_eq!(find(&["foobar"], |item| *item == "b"), None);
        assert_eq!(find::<i32, _>(&[], |_| true), None);
    }

    #[test]
    fn test_find_index_of() {
        let seq = ["a", "b", "c", "d", "b"];
        let mut visited = Vec::new();
        let result = find_index_of(&seq, |item| {
            visited.push(*item);
            *item == "b"
        });

        assert_eq!(result, Some((1, &"b")));
        assert_eq!(visited, vec!["a", "b"]);
        assert_eq!(find_index_of(&["foobar"], |item| *item == "b"), None);
    }

    #[test]
    fn test_find_last_index_of_visits_back_to_front() {
        let seq = ["a", "b", "c", "d", "b"];
        let mut visited = Vec::new();
        let result = find_last_index_of(&seq, |item| {
            visited.push(*item);
            false
        });

        assert_eq!(result, None);
        assert_eq!(visited, vec!["b", "d", "c", "b", "a"]);
        assert_eq!(
            find_last_index_of(&seq, |item| *item == "b"),
            Some((4, &"b"))
        );
    }

    #[test]
    fn test_find_or_else() {
        let seq = ["a", "b", "c", "d"];
        assert_eq!(find_or_else(&seq, "x", |item| *item == "b"), "b");
        assert_eq!(find_or_else(&["foobar"], "x", |item| *item == "b"), "x");
    }

    #[test]
    fn test_find_key() {
        let mut mapping = HashMap::default();
        mapping.insert("foo", 1);
        mapping.insert("bar", 2);
        mapping.insert("baz", 3);

        assert_eq!(find_key(&mapping, &2), Some(&"bar"));
        assert_eq!(find_key(&mapping, &42), None);
    }

    #[test]
    fn test_find_key_struct_values() {
        #[derive(Debug, PartialEq)]
        struct Label(&'static str);

        let mapping = BTreeMap::from([
            ("foo", Label("foo")),
            ("bar", Label("bar")),
            ("baz", Label("baz")),
        ]);

        assert_eq!(find_key(&mapping, &Label("foo")), Some(&"foo"));
        assert_eq!(find_key(&mapping, &Label("hello world")), None);
    }

    #[test]
    fn test_find_key_first_in_iteration_order() {
        let mapping = BTreeMap::from([(3, 'x'), (1, 'x'), (2, 'y')]);
        assert_eq!(find_key(&mapping, &'x'), Some(&1));
    }

    #[test]
    fn test_find_key_by() {
        let mapping = BTreeMap::from([("foo", 1), ("bar", 2), ("baz", 3)]);

        assert_eq!(find_key_by(&mapping, |k, _| *k == "foo"), Some(&"foo"));
        assert_eq!(find_key_by(&mapping, |_, v| *v > 1), Some(&"bar"));
        assert_eq!(find_key_by(&mapping, |_, _| false), None);
    }

    #[test]
    fn test_find_key_empty() {
        let mapping: HashMap<String, i32> = HashMap::default();
        assert_eq!(find_key(&mapping, &0), None);
    }
}
