use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("could not open word list {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read word list")]
    Read(#[from] io::Error),
}

type Error = WordListError;
type Result<T> = std::result::Result<T, Error>;

/// Splits the input on whitespace, every token becomes one word, verbatim.
///
/// ```
/// use word_wizard::words::read_words;
///
/// let words = read_words("star rats\n\n  Tsar!\tarts\n".as_bytes()).unwrap();
/// assert_eq!(vec!["star", "rats", "Tsar!", "arts"], words);
/// ```
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        words.extend(line.split_whitespace().map(str::to_owned));
    }

    Ok(words)
}

pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let words = read_words(BufReader::with_capacity(1024 * 64, file))?;
    info!(path = %path.display(), words = words.len(), "loaded word list");

    Ok(words)
}
