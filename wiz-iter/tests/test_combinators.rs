use std::cell::Cell;

use wiz_iter::{chain, filter, map, reduce, try_zip, zip, Error};

/// A source that counts how many elements have been pulled from it.
struct Counted<'a, I> {
    iter: I,
    pulled: &'a Cell<usize>,
}

impl<I: Iterator> Iterator for Counted<'_, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        self.pulled.set(self.pulled.get() + 1);
        Some(item)
    }
}

#[test]
fn test_pipeline_pulls_only_what_is_consumed() {
    let pulled = Cell::new(0);
    let source = Counted {
        iter: 1..=1000,
        pulled: &pulled,
    };
    let multiples_of_three = filter(source, |n| n % 3 == 0);
    let doubled = map(multiples_of_three, |n| n * 2);

    let total = reduce(doubled.take(4), |acc, n| acc + n, 0);

    // 3, 6, 9, 12 doubled
    assert_eq!(total, 60);
    assert_eq!(pulled.get(), 12);
}

#[test]
fn test_map_pipeline_pulls_exactly_k() {
    let pulled = Cell::new(0);
    let source = Counted {
        iter: 0..100,
        pulled: &pulled,
    };
    let collected = map(source, |n| n.to_string()).take(5).collect::<Vec<_>>();

    assert_eq!(collected, vec!["0", "1", "2", "3", "4"]);
    assert_eq!(pulled.get(), 5);
}

#[test]
fn test_chain_yields_all_of_a_then_b() {
    let a = vec![1, 2, 3];
    let b = vec![4, 5];
    let result = chain([a.iter(), b.iter()]).copied().collect::<Vec<_>>();

    assert_eq!(result.len(), a.len() + b.len());
    assert_eq!(result, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_chain_of_filtered_sources() {
    let by_four = |n: &i32| n % 4 == 0;
    let low = filter(0..10, by_four);
    let high = filter(100..110, by_four);
    let result = chain([low, high]).collect::<Vec<_>>();
    assert_eq!(result, vec![0, 4, 8, 100, 104, 108]);
}

#[test]
fn test_zip_into_map() {
    let names = ["ada", "grace"];
    let years = [1815, 1906];
    let lookup = zip(names, years).collect::<std::collections::HashMap<_, _>>();
    assert_eq!(lookup["grace"], 1906);
}

#[test]
fn test_try_zip_error_message() {
    let err = try_zip(vec![1], Vec::<i32>::new()).unwrap_err();
    assert_eq!(err, Error::LengthMismatch { left: 1, right: 0 });
    insta::assert_snapshot!(err.to_string(), @"zip: lengths differ (1 != 0)");
}
