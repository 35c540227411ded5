//! Generic helpers for collections.
//!
//! The functions here cover the loops application code writes over and over:
//! searching ([`find`], [`index_of`], [`find_key`]), frequency based
//! selection ([`find_uniques`], [`find_duplicates`]), extrema ([`min`],
//! [`max_by`], [`earliest`]), positional access ([`first`], [`nth`]) and
//! random sampling ([`sample`], [`samples`]).
//!
//! Read-only operations borrow a slice. Operations that return a
//! sub-sequence take the collection by value and return the same collection
//! type. Lazy combinators live in [`iter`].
//!
//! ```rust
//! let words = vec!["apple", "pear", "apple", "fig"];
//!
//! assert_eq!(wiz::index_of(&words, &"pear"), Some(1));
//! assert_eq!(wiz::find_duplicates(words.clone()), vec!["apple"]);
//! assert_eq!(wiz::find_uniques(words.clone()), vec!["pear", "fig"]);
//! assert_eq!(wiz::nth(&words, -1), Ok(&"fig"));
//! ```

pub mod error;
mod extrema;
mod find;
mod position;
mod sample;
mod unique;

pub use wiz_iter as iter;

pub use error::{Error, Result};
pub use extrema::{
    earliest, earliest_by, latest, latest_by, max, max_by, max_index, min, min_by, min_index,
};
pub use find::{
    contains, contains_by, find, find_index_of, find_key, find_key_by, find_last_index_of,
    find_or_else, index_of, last_index_of,
};
pub use position::{first, first_or, first_or_empty, last, last_or, last_or_empty, nth};
pub use sample::{sample, sample_with, samples, samples_with, Sampler};
pub use unique::{find_duplicates, find_duplicates_by, find_uniques, find_uniques_by};
