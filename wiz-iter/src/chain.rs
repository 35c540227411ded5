use std::fmt;
use std::iter::FusedIterator;

/// A lazy iterator over several sources, one after the other.
///
/// Created by [`chain`](crate::chain).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<S>
where
    S: Iterator,
    S::Item: IntoIterator,
{
    sources: S,
    current: Option<<S::Item as IntoIterator>::IntoIter>,
}

impl<S> Chain<S>
where
    S: Iterator,
    S::Item: IntoIterator,
{
    pub(crate) fn new(sources: S) -> Self {
        Self {
            sources,
            current: None,
        }
    }
}

impl<S> Iterator for Chain<S>
where
    S: Iterator,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = &mut self.current {
                if let Some(item) = current.next() {
                    return Some(item);
                }
                self.current = None;
            }
            // the current source is drained; only now open the next one
            self.current = Some(self.sources.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = match &self.current {
            Some(current) => current.size_hint(),
            None => (0, Some(0)),
        };
        // without opening the remaining sources we only know their
        // length if there are none left
        match self.sources.size_hint() {
            (_, Some(0)) => (lower, upper),
            _ => (lower, None),
        }
    }
}

impl<S> FusedIterator for Chain<S>
where
    S: FusedIterator,
    S::Item: IntoIterator,
{
}

impl<S> fmt::Debug for Chain<S>
where
    S: Iterator + fmt::Debug,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("sources", &self.sources)
            .field("current", &self.current)
            .finish()
    }
}
