//! Lazy sequence combinators.
//!
//! Every combinator here wraps a source iterator without consuming it.
//! Nothing happens until the consumer calls `next`; a consumer that stops
//! calling `next` stops the whole pipeline, including any caller supplied
//! closures further up. [`reduce`] is the only terminal operation.
//!
//! ```rust
//! use wiz_iter::{filter, map, reduce};
//!
//! let evens = filter(1..=10, |n| n % 2 == 0);
//! let squares = map(evens, |n| n * n);
//! assert_eq!(reduce(squares, |acc, n| acc + n, 0), 220);
//! ```

mod chain;
pub mod error;
mod filter;
mod map;
mod zip;

pub use chain::Chain;
pub use error::{Error, Result};
pub use filter::Filter;
pub use map::Map;
pub use zip::Zip;

/// Yield only the elements of `iter` for which `predicate` holds.
///
/// Relative order is preserved.
pub fn filter<I, P>(iter: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter::new(iter.into_iter(), predicate)
}

/// Yield `transform(e)` for every element `e` of `iter`, in order.
pub fn map<I, F, R>(iter: I, transform: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    Map::new(iter.into_iter(), transform)
}

/// Fold `iter` from left to right, starting at `initial`.
///
/// This drains the source completely.
pub fn reduce<I, F, R>(iter: I, mut combine: F, initial: R) -> R
where
    I: IntoIterator,
    F: FnMut(R, I::Item) -> R,
{
    let mut acc = initial;
    for item in iter {
        acc = combine(acc, item);
    }
    acc
}

/// Yield every element of each source in turn.
///
/// Sources are opened lazily, one after the other.
pub fn chain<S>(sources: S) -> Chain<S::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Chain::new(sources.into_iter())
}

/// Pair up the elements of `keys` and `values` by position.
///
/// # Panics
///
/// Panics if the two inputs do not have the same length. Use [`try_zip`]
/// when a mismatch is an expected condition.
pub fn zip<K, V>(keys: K, values: V) -> Zip<K::IntoIter, V::IntoIter>
where
    K: IntoIterator,
    V: IntoIterator,
    K::IntoIter: ExactSizeIterator,
    V::IntoIter: ExactSizeIterator,
{
    match try_zip(keys, values) {
        Ok(zip) => zip,
        Err(e) => panic!("{}", e),
    }
}

/// Pair up the elements of `keys` and `values` by position, or fail with
/// [`Error::LengthMismatch`] if their lengths differ.
pub fn try_zip<K, V>(keys: K, values: V) -> Result<Zip<K::IntoIter, V::IntoIter>>
where
    K: IntoIterator,
    V: IntoIterator,
    K::IntoIter: ExactSizeIterator,
    V::IntoIter: ExactSizeIterator,
{
    let keys = keys.into_iter();
    let values = values.into_iter();
    if keys.len() != values.len() {
        return Err(Error::LengthMismatch {
            left: keys.len(),
            right: values.len(),
        });
    }
    Ok(Zip::new(keys, values))
}
