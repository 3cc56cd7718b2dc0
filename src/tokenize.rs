use core::slice::Split;

/// Bytes separating the words of a checked document.
///
/// Nothing else splits a token: hyphens, apostrophes, digits, tabs and carriage returns all stay
/// part of the word they touch.
pub const DELIMITERS: &[u8] = b" ,.:;!\n";

fn is_delimiter(byte: &u8) -> bool {
    DELIMITERS.contains(byte)
}

/// Splits `text` into the words to check, in document order.
///
/// Runs of delimiters never produce empty tokens. The text doesn't need to be valid UTF-8.
pub fn tokens<T: AsRef<[u8]> + ?Sized>(text: &T) -> Tokens<'_> {
    Tokens {
        inner: text.as_ref().split(is_delimiter as fn(&u8) -> bool),
    }
}

/// Iterator returned by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: Split<'a, u8, fn(&u8) -> bool>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(|token| !token.is_empty())
    }
}
