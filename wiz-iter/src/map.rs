use std::fmt;
use std::iter::FusedIterator;

/// A lazy iterator that transforms each element of its source.
///
/// Created by [`map`](crate::map).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
    iter: I,
    transform: F,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(iter: I, transform: F) -> Self {
        Self { iter, transform }
    }
}

impl<I, F, R> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.iter.next().map(&mut self.transform)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, R> DoubleEndedIterator for Map<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(I::Item) -> R,
{
    fn next_back(&mut self) -> Option<R> {
        self.iter.next_back().map(&mut self.transform)
    }
}

impl<I, F, R> ExactSizeIterator for Map<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> R,
{
}

impl<I, F, R> FusedIterator for Map<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> R,
{
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("iter", &self.iter).finish()
    }
}
