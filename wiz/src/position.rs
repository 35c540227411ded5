use crate::error::{Error, Result};

/// The first element, if any.
pub fn first<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// The first element, or `T::default()` when empty.
pub fn first_or_empty<T: Default + Clone>(seq: &[T]) -> T {
    first(seq).cloned().unwrap_or_default()
}

/// The first element, or `fallback` when empty.
pub fn first_or<T: Clone>(seq: &[T], fallback: T) -> T {
    first(seq).cloned().unwrap_or(fallback)
}

/// The last element, if any.
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// The last element, or `T::default()` when empty.
pub fn last_or_empty<T: Default + Clone>(seq: &[T]) -> T {
    last(seq).cloned().unwrap_or_default()
}

/// The last element, or `fallback` when empty.
pub fn last_or<T: Clone>(seq: &[T], fallback: T) -> T {
    last(seq).cloned().unwrap_or(fallback)
}

/// The element at `index`.
///
/// A negative index counts from the end, so `-1` is the last element.
/// Returns [`Error::OutOfBounds`] when the index does not resolve to a
/// position in `seq`.
pub fn nth<T>(seq: &[T], index: isize) -> Result<&T> {
    let position = if index >= 0 {
        Some(index.unsigned_abs())
    } else {
        seq.len().checked_sub(index.unsigned_abs())
    };
    position
        .and_then(|position| seq.get(position))
        .ok_or(Error::OutOfBounds(index))
}
