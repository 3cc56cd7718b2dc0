//! A small word-list spell checker.
//!
//! A dictionary is a flat list of words. It's loaded into a [`WordIndex`], a fixed-size hash
//! table of chained buckets, and documents are then checked token by token with a
//! [`SpellChecker`]. Each word missing from the index is reported as a [`Misspelling`] together
//! with the dictionary words one edit away from it: an adjacent transposition, a dropped first or
//! last byte, or a letter added to either end. See [`Candidates`] for the exact order.
//!
//! Words are byte strings compared exactly, with no decoding or normalization. A dictionary and
//! a document in the same encoding always agree, whatever that encoding is.
//!
//! ```
//! use spellscan::{Mode, SpellChecker};
//!
//! let words = "the\ncat\nsat\n";
//! let mut checker = SpellChecker::from_words(words.split_whitespace(), 3, Mode::Ignore).unwrap();
//!
//! let misspellings: Vec<_> = checker.scan("the cta sat.").collect();
//! assert_eq!(misspellings.len(), 1);
//! assert_eq!(misspellings[0].word, b"cta");
//! assert_eq!(misspellings[0].suggestions, [b"cat"]);
//! assert_eq!(
//!     misspellings[0].to_string(),
//!     "Misspelled word: cta\nSuggestions: cat"
//! );
//! ```
//!
//! The core of the crate is `no_std` (it needs `alloc`). Reading files is behind the `std`
//! feature and the `spellscan` command line tool behind the `cli` feature.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod candidates;
mod checker;
#[cfg(feature = "std")]
pub mod fs;
pub mod hash;
mod index;
mod report;
mod tokenize;

use alloc::collections::TryReserveError;

pub use candidates::{candidates, Candidates};
pub use checker::{Mode, Scan, SpellChecker};
pub use index::WordIndex;
pub use report::{Misspelling, NO_TYPO};
pub use tokenize::{tokens, Tokens, DELIMITERS};

/// Errors which can occur while building a [`WordIndex`] or loading files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The bucket array of a [`WordIndex`] could not be allocated.
    #[error("failed to allocate the word index: {0}")]
    Reserve(#[from] TryReserveError),
    /// A dictionary or document could not be opened or read.
    #[cfg(feature = "std")]
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
