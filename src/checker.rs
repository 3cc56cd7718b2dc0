use core::{fmt, hash::BuildHasher};

use crate::{
    alloc::{string::String, vec::Vec},
    candidates::Candidates,
    hash::BuildPolynomialHasher,
    report::{Misspelling, NO_TYPO},
    tokenize::{tokens, Tokens},
    Error, WordIndex,
};

/// What to do with a misspelled word once it has been reported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Add the word to the dictionary so later occurrences are accepted.
    Add,
    /// Leave the dictionary alone: every occurrence is reported.
    #[default]
    Ignore,
}

impl Mode {
    /// Interprets a command line flag. `"add"` selects [`Mode::Add`], anything else
    /// [`Mode::Ignore`].
    pub fn from_flag(flag: &str) -> Self {
        if flag == "add" {
            Self::Add
        } else {
            Self::Ignore
        }
    }
}

/// Checks documents against a [`WordIndex`].
///
/// The checker is built from an already loaded index and then fed tokens in document order.
/// Misspelled tokens come back as [`Misspelling`]s carrying every dictionary word one edit away.
/// In [`Mode::Add`] the checker also writes to the index: a reported word is learned so that it
/// isn't reported again within the same run.
///
/// Like the index, the checker works on bytes. Tokens are compared exactly as they appear in
/// the document.
pub struct SpellChecker<S = BuildPolynomialHasher> {
    index: WordIndex<S>,
    mode: Mode,
    found_typo: bool,
    tokens_checked: usize,
    misspelled: usize,
}

impl SpellChecker<BuildPolynomialHasher> {
    /// Loads `words` in order into a fresh index with `capacity` buckets.
    pub fn from_words<'a, I, W>(words: I, capacity: usize, mode: Mode) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a W>,
        W: AsRef<[u8]> + ?Sized + 'a,
    {
        let mut index = WordIndex::with_capacity(capacity)?;
        index.extend(words);
        Ok(Self::new(index, mode))
    }
}

impl<S: BuildHasher> SpellChecker<S> {
    pub fn new(index: WordIndex<S>, mode: Mode) -> Self {
        Self {
            index,
            mode,
            found_typo: false,
            tokens_checked: 0,
            misspelled: 0,
        }
    }

    /// Checks whether the word is in the dictionary.
    pub fn check<W: AsRef<[u8]> + ?Sized>(&self, word: &W) -> bool {
        self.index.contains(word)
    }

    /// Fills `out` with the dictionary words one edit away from `word`.
    ///
    /// `out` is cleared first. Suggestions are in candidate order and are not deduplicated.
    pub fn suggest<W: AsRef<[u8]> + ?Sized>(&self, word: &W, out: &mut Vec<Vec<u8>>) {
        out.clear();
        out.extend(Candidates::new(word).filter(|candidate| self.index.contains(candidate)));
    }

    /// Checks a single token, returning a report if it is misspelled.
    ///
    /// Empty tokens are never looked up.
    pub fn check_token<W: AsRef<[u8]> + ?Sized>(&mut self, token: &W) -> Option<Misspelling> {
        let token = token.as_ref();
        if token.is_empty() {
            return None;
        }

        self.tokens_checked += 1;
        if self.index.contains(token) {
            return None;
        }

        self.found_typo = true;
        self.misspelled += 1;

        let mut suggestions = Vec::new();
        self.suggest(token, &mut suggestions);

        if self.mode == Mode::Add && self.index.insert(token) {
            log::trace!("learned {:?}", String::from_utf8_lossy(token));
        }

        Some(Misspelling {
            word: token.to_vec(),
            suggestions,
        })
    }

    /// Returns an iterator over the misspellings in `text`, in document order.
    ///
    /// Tokens are checked as the iterator is advanced. In [`Mode::Add`] a word learned from an
    /// earlier token affects the later ones.
    pub fn scan<'c, 't, T>(&'c mut self, text: &'t T) -> Scan<'c, 't, S>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        Scan {
            checker: self,
            tokens: tokens(text),
        }
    }

    /// Checks `text` and appends the full report to `out`.
    ///
    /// Each misspelling is followed by a blank line. If nothing has been misspelled so far,
    /// including in earlier calls, a single `No typo!` line is written instead.
    pub fn check_text<T: AsRef<[u8]> + ?Sized>(&mut self, text: &T, out: &mut Vec<u8>) {
        for misspelling in self.scan(text) {
            misspelling.write_to(out);
            out.extend_from_slice(b"\n\n");
        }
        self.finish(out);
    }

    /// Appends the end-of-scan summary: `No typo!` if no token was misspelled, otherwise nothing.
    pub fn finish(&self, out: &mut Vec<u8>) {
        if !self.found_typo {
            out.extend_from_slice(NO_TYPO.as_bytes());
            out.push(b'\n');
        }
    }
}

impl<S> SpellChecker<S> {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether any token has been reported as misspelled.
    pub fn found_typo(&self) -> bool {
        self.found_typo
    }

    /// The number of (non-empty) tokens checked so far.
    pub fn tokens_checked(&self) -> usize {
        self.tokens_checked
    }

    /// The number of tokens reported as misspelled so far.
    pub fn misspelled(&self) -> usize {
        self.misspelled
    }

    pub fn index(&self) -> &WordIndex<S> {
        &self.index
    }

    pub fn into_index(self) -> WordIndex<S> {
        self.index
    }
}

impl<S> fmt::Debug for SpellChecker<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpellChecker")
            .field("index", &self.index)
            .field("mode", &self.mode)
            .field("found_typo", &self.found_typo)
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`SpellChecker::scan`].
pub struct Scan<'c, 't, S> {
    checker: &'c mut SpellChecker<S>,
    tokens: Tokens<'t>,
}

impl<S: BuildHasher> Iterator for Scan<'_, '_, S> {
    type Item = Misspelling;

    fn next(&mut self) -> Option<Self::Item> {
        for token in self.tokens.by_ref() {
            if let Some(misspelling) = self.checker.check_token(token) {
                return Some(misspelling);
            }
        }
        None
    }
}
