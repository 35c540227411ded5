use std::iter::FusedIterator;

/// A lazy iterator pairing two equally long sources by position.
///
/// Created by [`zip`](crate::zip) or [`try_zip`](crate::try_zip), which
/// check the lengths up front, so both sources run out together.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Zip<K, V> {
    keys: K,
    values: V,
}

impl<K, V> Zip<K, V>
where
    K: ExactSizeIterator,
    V: ExactSizeIterator,
{
    pub(crate) fn new(keys: K, values: V) -> Self {
        debug_assert_eq!(keys.len(), values.len());
        Self { keys, values }
    }
}

impl<K, V> Iterator for Zip<K, V>
where
    K: ExactSizeIterator,
    V: ExactSizeIterator,
{
    type Item = (K::Item, V::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        let value = self.values.next()?;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.keys.len().min(self.values.len());
        (remaining, Some(remaining))
    }
}

impl<K, V> ExactSizeIterator for Zip<K, V>
where
    K: ExactSizeIterator,
    V: ExactSizeIterator,
{
}

impl<K, V> FusedIterator for Zip<K, V>
where
    K: ExactSizeIterator + FusedIterator,
    V: ExactSizeIterator + FusedIterator,
{
}
