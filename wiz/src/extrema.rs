// Smallest, largest, earliest and latest elements.
//
// Empty input is not an error here: the element type's default is returned
// instead. Ties always go to the element seen first.

use chrono::{DateTime, TimeZone};

/// The smallest element by natural ordering, or `T::default()` when empty.
///
/// Incomparable elements (such as NaN) never replace the current minimum.
pub fn min<T>(seq: &[T]) -> T
where
    T: PartialOrd + Default + Clone,
{
    min_by(seq, |item, min| item < min)
}

/// The largest element by natural ordering, or `T::default()` when empty.
pub fn max<T>(seq: &[T]) -> T
where
    T: PartialOrd + Default + Clone,
{
    max_by(seq, |item, max| item > max)
}

/// The smallest element according to `less`.
///
/// `less(candidate, min)` must return true only when the candidate is
/// strictly smaller than the current minimum.
pub fn min_by<T, F>(seq: &[T], less: F) -> T
where
    T: Default + Clone,
    F: FnMut(&T, &T) -> bool,
{
    best_by(seq, less)
        .map(|(_, item)| item.clone())
        .unwrap_or_default()
}

/// The largest element according to `greater`.
///
/// `greater(candidate, max)` must return true only when the candidate is
/// strictly larger than the current maximum.
pub fn max_by<T, F>(seq: &[T], greater: F) -> T
where
    T: Default + Clone,
    F: FnMut(&T, &T) -> bool,
{
    best_by(seq, greater)
        .map(|(_, item)| item.clone())
        .unwrap_or_default()
}

/// The smallest element with its index, or `None` when empty.
pub fn min_index<T: PartialOrd>(seq: &[T]) -> Option<(usize, &T)> {
    best_by(seq, |item, min| item < min)
}

/// The largest element with its index, or `None` when empty.
pub fn max_index<T: PartialOrd>(seq: &[T]) -> Option<(usize, &T)> {
    best_by(seq, |item, max| item > max)
}

/// The earliest of `times`, or the default (zero) time when there are none.
pub fn earliest<Tz, I>(times: I) -> DateTime<Tz>
where
    Tz: TimeZone,
    DateTime<Tz>: Default,
    I: IntoIterator<Item = DateTime<Tz>>,
{
    extreme_time(times, |time, earliest| time < earliest)
}

/// The latest of `times`, or the default (zero) time when there are none.
pub fn latest<Tz, I>(times: I) -> DateTime<Tz>
where
    Tz: TimeZone,
    DateTime<Tz>: Default,
    I: IntoIterator<Item = DateTime<Tz>>,
{
    extreme_time(times, |time, latest| time > latest)
}

/// The element whose projected time is earliest, or `T::default()` when
/// empty.
pub fn earliest_by<T, Tz, F>(seq: &[T], projection: F) -> T
where
    T: Default + Clone,
    Tz: TimeZone,
    F: FnMut(&T) -> DateTime<Tz>,
{
    best_by_key(seq, projection, |time, earliest| time < earliest)
}

/// The element whose projected time is latest, or `T::default()` when
/// empty.
pub fn latest_by<T, Tz, F>(seq: &[T], projection: F) -> T
where
    T: Default + Clone,
    Tz: TimeZone,
    F: FnMut(&T) -> DateTime<Tz>,
{
    best_by_key(seq, projection, |time, latest| time > latest)
}

/// Scan left to right, replacing the best so far only when `better` says
/// the candidate strictly beats it.
fn best_by<T, F>(seq: &[T], mut better: F) -> Option<(usize, &T)>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut iter = seq.iter().enumerate();
    let mut best = iter.next()?;
    for (i, item) in iter {
        if better(item, best.1) {
            best = (i, item);
        }
    }
    Some(best)
}

// the projection is evaluated once per element
fn best_by_key<T, K, P, F>(seq: &[T], mut projection: P, mut better: F) -> T
where
    T: Default + Clone,
    P: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    let mut iter = seq.iter();
    let Some(first) = iter.next() else {
        return T::default();
    };
    let mut best = first;
    let mut best_key = projection(first);
    for item in iter {
        let key = projection(item);
        if better(&key, &best_key) {
            best = item;
            best_key = key;
        }
    }
    best.clone()
}

fn extreme_time<Tz, I, F>(times: I, mut better: F) -> DateTime<Tz>
where
    Tz: TimeZone,
    DateTime<Tz>: Default,
    I: IntoIterator<Item = DateTime<Tz>>,
    F: FnMut(&DateTime<Tz>, &DateTime<Tz>) -> bool,
{
    let mut times = times.into_iter();
    let Some(mut best) = times.next() else {
        return DateTime::default();
    };
    for time in times {
        if better(&time, &best) {
            best = time;
        }
    }
    best
}
