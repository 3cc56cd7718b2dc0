use core::{fmt, hash::BuildHasher};

use crate::{
    alloc::{boxed::Box, vec::Vec},
    hash::{bucket_of, BuildPolynomialHasher},
    Error,
};

/// A set of words stored in a fixed number of chained buckets.
///
/// The bucket count is chosen once, up front, from the size of the word list and the table is
/// never resized. Each bucket is a chain of distinct words kept in insertion order so that a
/// lookup hashes the word and then scans a (hopefully short) chain for an exact, byte-for-byte
/// match. Collisions only lengthen chains: a table with a single bucket is a linear search but
/// is still correct.
///
/// Words are byte strings. Nothing is decoded or normalized, so a word list in any encoding
/// matches documents in the same encoding, and bytes which aren't valid UTF-8 are kept as they
/// are. Anything which is `AsRef<[u8]>` can be inserted or looked up, `&str` included.
///
/// The hasher is generic like the standard library's collections. By default words are placed
/// with the polynomial hash in [`crate::hash`] which keeps bucket placement stable across runs.
pub struct WordIndex<S = BuildPolynomialHasher> {
    buckets: Vec<Vec<Box<[u8]>>>,
    len: usize,
    build_hasher: S,
}

impl WordIndex<BuildPolynomialHasher> {
    /// Creates an empty index with `capacity` buckets.
    ///
    /// A `capacity` of zero is treated as one. Fails with [`Error::Reserve`] if the bucket array
    /// cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::with_capacity_and_hasher(capacity, BuildPolynomialHasher)
    }

    /// Builds an index from the contents of a word list.
    ///
    /// Words are separated by ASCII whitespace (space, `\t`, `\n`, `\x0b`, `\x0c` and `\r`) and
    /// inserted in order. The table gets one bucket per line of the list.
    pub fn from_word_list(text: &[u8]) -> Result<Self, Error> {
        let mut index = Self::with_capacity(line_count(text))?;
        index.extend(text.split(is_word_list_space).filter(|word| !word.is_empty()));
        Ok(index)
    }
}

fn is_word_list_space(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Counts lines the way `str::lines` does: a final line needn't end in a newline.
fn line_count(text: &[u8]) -> usize {
    let newlines = text.iter().filter(|&&byte| byte == b'\n').count();
    match text.last() {
        Some(&last) if last != b'\n' => newlines + 1,
        _ => newlines,
    }
}

impl<S: BuildHasher> WordIndex<S> {
    /// Creates an empty index with `capacity` buckets and the given hasher.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Result<Self, Error> {
        let size = capacity.max(1);
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(size)?;
        // The reservation above covers the whole array: this doesn't allocate again.
        buckets.resize_with(size, Vec::new);

        Ok(Self {
            buckets,
            len: 0,
            build_hasher,
        })
    }

    fn bucket_index(&self, word: &[u8]) -> usize {
        bucket_of(&self.build_hasher, word, self.buckets.len())
    }

    /// Adds a copy of `word` to the index.
    ///
    /// Returns `false` and leaves the index unchanged if the word is already present.
    pub fn insert<W: AsRef<[u8]> + ?Sized>(&mut self, word: &W) -> bool {
        let word = word.as_ref();
        let idx = self.bucket_index(word);
        let bucket = &mut self.buckets[idx];
        if bucket.iter().any(|stored| stored.as_ref() == word) {
            return false;
        }

        bucket.push(Box::from(word));
        self.len += 1;
        true
    }

    /// Checks whether `word` is in the index. Comparison is exact and case-sensitive.
    pub fn contains<W: AsRef<[u8]> + ?Sized>(&self, word: &W) -> bool {
        let word = word.as_ref();
        self.buckets[self.bucket_index(word)]
            .iter()
            .any(|stored| stored.as_ref() == word)
    }
}

impl<S> WordIndex<S> {
    /// The number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of buckets. This never changes after construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Iterates over the words bucket by bucket and in insertion order within each bucket.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.buckets.iter().flatten().map(|word| word.as_ref())
    }

    /// The length of the longest bucket chain.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or_default()
    }

    /// The number of buckets holding at least one word.
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| !bucket.is_empty()).count()
    }
}

impl<'a, W, S> Extend<&'a W> for WordIndex<S>
where
    W: AsRef<[u8]> + ?Sized + 'a,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = &'a W>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S> fmt::Debug for WordIndex<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordIndex")
            .field("words", &self.len)
            .field("buckets", &self.buckets.len())
            .field("longest_chain", &self.longest_chain())
            .finish_non_exhaustive()
    }
}
