//! The bucket hash used by [`WordIndex`](crate::WordIndex).
//!
//! This is a plain polynomial rolling hash: each byte of the word is folded in as
//! `total = total * 101 + byte`, wrapping on overflow. It has no cryptographic properties and no
//! resistance to crafted inputs, but it is cheap and, most importantly, deterministic: the same
//! word always lands in the same bucket for a given table size.

use core::hash::{BuildHasher, Hasher};

const MULTIPLIER: u64 = 101;

/// A [`Hasher`] computing the polynomial hash of the bytes written to it.
///
/// Note that the `Hash` implementations of `str` and `[u8]` write a terminator or length
/// prefix along with the contents. The index avoids that by writing the word's bytes directly
/// with [`Hasher::write`], see [`bucket_of`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PolynomialHasher {
    total: u64,
}

impl Hasher for PolynomialHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.total = self
                .total
                .wrapping_mul(MULTIPLIER)
                .wrapping_add(byte as u64);
        }
    }

    fn finish(&self) -> u64 {
        self.total
    }
}

/// The default [`BuildHasher`] for [`WordIndex`](crate::WordIndex).
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildPolynomialHasher;

impl BuildHasher for BuildPolynomialHasher {
    type Hasher = PolynomialHasher;

    fn build_hasher(&self) -> Self::Hasher {
        PolynomialHasher::default()
    }
}

/// Hashes the bytes of `word` with a fresh hasher from `build_hasher`.
pub(crate) fn make_hash<S: BuildHasher>(build_hasher: &S, word: &[u8]) -> u64 {
    let mut state = build_hasher.build_hasher();
    state.write(word);
    state.finish()
}

/// Maps `word` to a bucket in `0..modulus`.
///
/// # Panics
///
/// Panics if `modulus` is zero. `WordIndex` never holds fewer than one bucket.
pub fn bucket_of<S: BuildHasher>(build_hasher: &S, word: &[u8], modulus: usize) -> usize {
    assert!(modulus > 0, "bucket modulus must be non-zero");
    (make_hash(build_hasher, word) % modulus as u64) as usize
}

#[cfg(test)]
mod test {
    use super::*;

    fn hash(word: &str, modulus: usize) -> usize {
        bucket_of(&BuildPolynomialHasher, word.as_bytes(), modulus)
    }

    #[test]
    fn empty_word_is_bucket_zero() {
        assert_eq!(hash("", 1), 0);
        assert_eq!(hash("", 7), 0);
        assert_eq!(make_hash(&BuildPolynomialHasher, b""), 0);
    }

    #[test]
    fn polynomial_values() {
        assert_eq!(make_hash(&BuildPolynomialHasher, b"a"), 97);
        assert_eq!(make_hash(&BuildPolynomialHasher, b"ab"), 97 * 101 + 98);
        assert_eq!(
            make_hash(&BuildPolynomialHasher, b"cat"),
            (99 * 101 + 97) * 101 + 116
        );
        assert_eq!(hash("ab", 1000), (97 * 101 + 98) % 1000);
    }

    #[test]
    fn overflow_wraps() {
        // Long enough to overflow a u64 many times over.
        let word = "z".repeat(64);
        let expected = word
            .bytes()
            .fold(0u64, |total, b| total.wrapping_mul(101).wrapping_add(b as u64));
        assert_eq!(make_hash(&BuildPolynomialHasher, word.as_bytes()), expected);
        assert!(hash(&word, 13) < 13);
    }

    #[test]
    fn deterministic() {
        for word in ["hello", "world", "naïve", ""] {
            assert_eq!(hash(word, 31), hash(word, 31));
        }
    }

    #[test]
    fn any_bytes_hash() {
        assert_eq!(make_hash(&BuildPolynomialHasher, b"\xff"), 255);
        assert_eq!(
            make_hash(&BuildPolynomialHasher, b"x\xff"),
            120 * 101 + 255
        );
        assert_ne!(
            make_hash(&BuildPolynomialHasher, b"x\xff"),
            make_hash(&BuildPolynomialHasher, b"x\xfe")
        );
    }

    #[test]
    fn modulus_one_is_always_zero() {
        for word in ["a", "bb", "spellscan"] {
            assert_eq!(hash(word, 1), 0);
        }
    }

    #[test]
    #[should_panic]
    fn zero_modulus_panics() {
        hash("a", 0);
    }
}
