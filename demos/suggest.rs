/*
Prints the words of a word list one edit away from WORD, with timings.

WORD is looked up as-is: it's not checked against the word list first.

## Usage

```
$ cargo run --example suggest /usr/share/dict/words teh
Loaded 104334 words in 31ms
Suggestions for "teh": "the", "eh" (checked in 19µs)
```
*/
use std::time::Instant;

use spellscan::{fs, Mode, SpellChecker};

fn main() {
    let mut args = std::env::args().skip(1);
    let (path, word) = match (args.next(), args.next()) {
        (Some(path), Some(word)) => (path, word),
        _ => {
            eprintln!("Usage: suggest WORDLIST WORD");
            std::process::exit(1);
        }
    };

    let now = Instant::now();
    let index = match fs::load_dictionary(&path) {
        Ok(index) => index,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    println!("Loaded {} words in {}ms", index.len(), now.elapsed().as_millis());
    let checker = SpellChecker::new(index, Mode::Ignore);

    let mut suggestions = Vec::new();
    let now = Instant::now();
    checker.suggest(&word, &mut suggestions);
    let time = now.elapsed();
    if suggestions.is_empty() {
        println!("No suggestions found for {word:?} (checked in {time:?})");
    } else {
        println!(
            "Suggestions for {word:?}: {} (checked in {time:?})",
            quoted(&suggestions)
        );
    }
}

/// Formats suggestions as a comma separated list of quoted words.
fn quoted(suggestions: &[Vec<u8>]) -> String {
    suggestions
        .iter()
        .map(|suggestion| format!("{:?}", String::from_utf8_lossy(suggestion)))
        .collect::<Vec<_>>()
        .join(", ")
}
