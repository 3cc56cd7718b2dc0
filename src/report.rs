use core::fmt::{self, Write as _};

use crate::alloc::vec::Vec;

/// The line written after a scan which found no misspelled words.
pub const NO_TYPO: &str = "No typo!";

/// A word missing from the dictionary along with the dictionary words one edit away from it.
///
/// Words are kept as the bytes found in the document. [`Misspelling::write_to`] reproduces them
/// exactly while the `Display` impl replaces invalid UTF-8 with U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    pub word: Vec<u8>,
    /// Suggestions in discovery order. A suggestion reachable by two edits appears twice.
    pub suggestions: Vec<Vec<u8>>,
}

impl Misspelling {
    /// The report as a sequence of byte slices:
    ///
    /// ```text
    /// Misspelled word: teh
    /// Suggestions: the
    /// ```
    ///
    /// There's no trailing newline. Reports separate misspellings with a blank line.
    fn pieces(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let suggestions = self
            .suggestions
            .iter()
            .enumerate()
            .flat_map(|(idx, suggestion)| {
                let separator: &[u8] = if idx == 0 { b"" } else { b" " };
                [separator, suggestion.as_slice()]
            });
        [
            b"Misspelled word: ".as_slice(),
            self.word.as_slice(),
            b"\nSuggestions: ".as_slice(),
        ]
        .into_iter()
        .chain(suggestions)
    }

    /// Appends the two report lines to `out`, byte for byte.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        for piece in self.pieces() {
            out.extend_from_slice(piece);
        }
    }
}

impl fmt::Display for Misspelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in self.pieces() {
            for chunk in piece.utf8_chunks() {
                f.write_str(chunk.valid())?;
                if !chunk.invalid().is_empty() {
                    f.write_char(char::REPLACEMENT_CHARACTER)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::alloc::{format, vec};

    use super::*;

    fn teh() -> Misspelling {
        Misspelling {
            word: b"teh".to_vec(),
            suggestions: vec![b"the".to_vec(), b"eh".to_vec()],
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", teh()),
            "Misspelled word: teh\nSuggestions: the eh"
        );
    }

    #[test]
    fn display_without_suggestions() {
        let misspelling = Misspelling {
            word: b"qqq".to_vec(),
            suggestions: vec![],
        };
        assert_eq!(
            format!("{misspelling}"),
            "Misspelled word: qqq\nSuggestions: "
        );
    }

    #[test]
    fn write_to_matches_display() {
        let mut out = Vec::new();
        teh().write_to(&mut out);
        assert_eq!(out, format!("{}", teh()).as_bytes());
    }

    #[test]
    fn write_to_keeps_raw_bytes() {
        let misspelling = Misspelling {
            word: b"\xffx".to_vec(),
            suggestions: vec![b"x\xff".to_vec()],
        };
        let mut out = Vec::new();
        misspelling.write_to(&mut out);
        assert_eq!(out, b"Misspelled word: \xffx\nSuggestions: x\xff");
        assert_eq!(
            format!("{misspelling}"),
            "Misspelled word: \u{fffd}x\nSuggestions: x\u{fffd}"
        );
    }
}
