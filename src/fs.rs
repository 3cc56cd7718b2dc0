//! Loading dictionaries and documents from disk.
//!
//! Files are read as raw bytes and never decoded: words are compared byte for byte, so a word
//! list only has to be in the same encoding as the documents checked against it. Word lists in
//! the wild aren't always UTF-8 though. Older dictionaries are often ISO-8859-1 or another
//! legacy encoding, so [`guess_encoding`] is offered to spot a dictionary and a document which
//! can't agree.

use std::{
    path::{Path, PathBuf},
    vec::Vec,
};

use encoding_rs::Encoding;

use crate::{Error, WordIndex};

/// Reads the contents of a file as-is.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, Error> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: PathBuf::from(path),
        source,
    })?;
    if let Some(encoding) = guess_encoding(&bytes) {
        log::debug!("{} looks like {}", path.display(), encoding.name());
    }
    Ok(bytes)
}

/// Guesses the encoding of `bytes`. Returns `None` for pure ASCII, which reads the same in
/// every encoding a word list is likely to use.
pub fn guess_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    if bytes.is_ascii() {
        return None;
    }
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    Some(detector.guess(None, true))
}

/// Loads a word list file into a [`WordIndex`].
///
/// The index gets one bucket per line of the file. See [`WordIndex::from_word_list`].
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<WordIndex, Error> {
    let path = path.as_ref();
    let words = read(path)?;
    let index = WordIndex::from_word_list(&words)?;
    log::debug!(
        "loaded {} words from {} into {} buckets ({} occupied, longest chain {})",
        index.len(),
        path.display(),
        index.capacity(),
        index.occupied_buckets(),
        index.longest_chain(),
    );
    Ok(index)
}
