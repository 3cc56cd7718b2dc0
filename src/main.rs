//! The `spellscan` command line tool.
//!
//! ```text
//! $ spellscan words.dic letter.txt ignore
//! Misspelled word: teh
//! Suggestions: the eh
//!
//! ```

use std::{
    ffi::OsString,
    io::{self, Write},
    path::PathBuf,
    process,
};

use clap::Parser;
use env_logger::{Builder, Env};
use spellscan::{fs, Mode, SpellChecker, WordIndex};

/// Reports the words of a document which are missing from a word list, along with the listed
/// words a single edit away from them.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Word list: words separated by whitespace, usually one per line.
    #[arg(allow_hyphen_values = true)]
    dictionary: PathBuf,
    /// Document to check.
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
    /// `add` learns each misspelled word after its first report. Any other value (for example
    /// `ignore`) reports every occurrence.
    #[arg(allow_hyphen_values = true)]
    mode: OsString,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Spell(#[from] spellscan::Error),
    #[error("failed to write the report: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Usage errors are reported by clap with exit status 2.
    fn exit_code(&self) -> i32 {
        match self {
            Self::Spell(spellscan::Error::Reserve(_)) => 3,
            Self::Spell(spellscan::Error::Io { .. }) | Self::Output(_) => 1,
        }
    }
}

fn main() {
    let args = Args::parse();

    Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    // Both files are read up front so a failure never leaves a partial report behind.
    let words = fs::read(&args.dictionary)?;
    let text = fs::read(&args.input)?;
    let encodings = (fs::guess_encoding(&words), fs::guess_encoding(&text));
    if let (Some(dictionary), Some(input)) = encodings {
        if dictionary != input {
            log::warn!(
                "{} looks like {} but {} looks like {}: words are compared byte for byte",
                args.dictionary.display(),
                dictionary.name(),
                args.input.display(),
                input.name(),
            );
        }
    }

    let index = WordIndex::from_word_list(&words)?;
    log::debug!("loaded {index:?} from {}", args.dictionary.display());

    let mode = Mode::from_flag(args.mode.to_str().unwrap_or_default());
    log::debug!("checking {} in {mode:?} mode", args.input.display());
    let mut checker = SpellChecker::new(index, mode);

    let mut report = Vec::new();
    checker.check_text(&text, &mut report);
    let mut out = io::stdout().lock();
    out.write_all(&report)?;
    out.flush()?;

    log::info!(
        "checked {} words: {} misspelled, {} words in the dictionary",
        checker.tokens_checked(),
        checker.misspelled(),
        checker.index().len(),
    );
    Ok(())
}
