//! Generation of single-edit candidates for a misspelled word.
//!
//! The candidates are produced lazily and always in the same order. That order is the order
//! suggestions are reported in, so it is part of the contract:
//!
//! 1. Every adjacent transposition, left to right.
//! 2. The word with its first byte dropped.
//! 3. The word with its last byte dropped (only for words of two or more bytes).
//! 4. Each of `a..=z` prepended to the word.
//! 5. Each of `a..=z` appended to the word.
//!
//! Words are byte strings, so positions are byte positions. Candidates aren't deduplicated
//! across rules. "aa" for example produces "a" both by dropping the first and by dropping the
//! last byte.

use crate::alloc::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Swap the byte at this offset with the one after it.
    Transpose(usize),
    DropFirst,
    DropLast,
    InsertFront(u8),
    InsertEnd(u8),
    Done,
}

/// An iterator over the edit-distance-1 candidates of a word.
///
/// Each item is a freshly allocated buffer: nothing is shared between candidates.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    word: &'a [u8],
    rule: Rule,
}

impl<'a> Candidates<'a> {
    pub fn new<W: AsRef<[u8]> + ?Sized>(word: &'a W) -> Self {
        Self {
            word: word.as_ref(),
            rule: Rule::Transpose(0),
        }
    }

    fn transpose(&self, offset: usize) -> Option<Vec<u8>> {
        if offset + 1 >= self.word.len() {
            return None;
        }
        let mut candidate = self.word.to_vec();
        candidate.swap(offset, offset + 1);
        Some(candidate)
    }

    fn insert(&self, letter: u8, at_front: bool) -> Vec<u8> {
        let mut candidate = Vec::with_capacity(self.word.len() + 1);
        if at_front {
            candidate.push(letter);
            candidate.extend_from_slice(self.word);
        } else {
            candidate.extend_from_slice(self.word);
            candidate.push(letter);
        }
        candidate
    }
}

impl Iterator for Candidates<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.rule {
                Rule::Transpose(offset) => match self.transpose(offset) {
                    Some(candidate) => {
                        self.rule = Rule::Transpose(offset + 1);
                        return Some(candidate);
                    }
                    None => self.rule = Rule::DropFirst,
                },
                Rule::DropFirst => {
                    self.rule = Rule::DropLast;
                    if let Some((_, rest)) = self.word.split_first() {
                        return Some(rest.to_vec());
                    }
                }
                Rule::DropLast => {
                    self.rule = Rule::InsertFront(b'a');
                    if self.word.len() > 1 {
                        return Some(self.word[..self.word.len() - 1].to_vec());
                    }
                }
                Rule::InsertFront(letter) if letter <= b'z' => {
                    self.rule = Rule::InsertFront(letter + 1);
                    return Some(self.insert(letter, true));
                }
                Rule::InsertFront(_) => self.rule = Rule::InsertEnd(b'a'),
                Rule::InsertEnd(letter) if letter <= b'z' => {
                    self.rule = Rule::InsertEnd(letter + 1);
                    return Some(self.insert(letter, false));
                }
                Rule::InsertEnd(_) => self.rule = Rule::Done,
                Rule::Done => return None,
            }
        }
    }
}

/// Collects all candidates for `word`, in order.
pub fn candidates<W: AsRef<[u8]> + ?Sized>(word: &W) -> Vec<Vec<u8>> {
    Candidates::new(word).collect()
}

#[cfg(test)]
mod test {
    use crate::alloc::{format, string::String, vec};

    use super::*;

    fn letters() -> impl Iterator<Item = char> {
        'a'..='z'
    }

    /// Candidates of an ASCII word, as strings.
    fn all(word: &str) -> Vec<String> {
        Candidates::new(word)
            .map(|candidate| String::from_utf8(candidate).unwrap())
            .collect()
    }

    #[test]
    fn single_character_word() {
        let all = all("x");
        assert_eq!(all.len(), 53);
        // Drop-first is the only non-insertion candidate.
        assert_eq!(all[0], "");
        let front: Vec<_> = letters().map(|l| format!("{l}x")).collect();
        let end: Vec<_> = letters().map(|l| format!("x{l}")).collect();
        assert_eq!(&all[1..27], front.as_slice());
        assert_eq!(&all[27..], end.as_slice());
    }

    #[test]
    fn empty_word() {
        let all = candidates("");
        assert_eq!(all.len(), 52);
        assert!(all.iter().all(|candidate| candidate.len() == 1));
    }

    #[test]
    fn rule_order() {
        let all = all("abc");
        assert_eq!(all.len(), 2 + 1 + 1 + 26 + 26);
        assert_eq!(&all[..4], &["bac", "acb", "bc", "ab"]);
        assert_eq!(all[4], "aabc");
        assert_eq!(all[29], "zabc");
        assert_eq!(all[30], "abca");
        assert_eq!(all[55], "abcz");
    }

    #[test]
    fn transposition_finds_swapped_letters() {
        let all = all("cta");
        assert_eq!(&all[..2], &["tca", "cat"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let all = all("aa");
        assert_eq!(&all[..3], &["aa", "a", "a"]);
        assert_eq!(all.iter().filter(|c| *c == "aaa").count(), 2);
    }

    #[test]
    fn edits_are_bytewise() {
        // "é" is two bytes in UTF-8, so "éa" is a three byte word.
        let all = candidates("éa");
        assert_eq!(all.len(), 2 + 1 + 1 + 26 + 26);
        assert_eq!(all[0], b"\xa9\xc3a");
        assert_eq!(all[1], b"\xc3a\xa9");
        assert_eq!(all[2], b"\xa9a");
        assert_eq!(all[3], b"\xc3\xa9");
        assert_eq!(all[4], "aéa".as_bytes());
        assert_eq!(all[30], "éaa".as_bytes());

        let all = candidates(b"\xffx");
        assert_eq!(all[0], b"x\xff");
    }

    #[test]
    fn iterator_is_fused_at_the_end() {
        let mut iter = Candidates::new("ab");
        assert_eq!(iter.by_ref().count(), 55);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn distance_one_completeness() {
        for word in ["cat", "hello", "a", "ab", "spelling"] {
            let mut typos = vec![];

            // Adjacent swaps.
            for i in 0..word.len().saturating_sub(1) {
                let mut swapped = word.as_bytes().to_vec();
                swapped.swap(i, i + 1);
                typos.push(swapped);
            }
            for letter in letters() {
                // Extra letters which the drop rules undo.
                typos.push(format!("{letter}{word}").into_bytes());
                typos.push(format!("{word}{letter}").into_bytes());
            }
            // Missing first or last letters which the insert rules undo.
            if word.len() > 1 {
                typos.push(word[1..].as_bytes().to_vec());
                typos.push(word[..word.len() - 1].as_bytes().to_vec());
            }

            for typo in typos {
                if typo == word.as_bytes() {
                    continue;
                }
                assert!(
                    Candidates::new(&typo).any(|candidate| candidate == word.as_bytes()),
                    "expected {word:?} among the candidates of {typo:?}"
                );
            }
        }
    }
}
