//! Naive anagram search over a plain word list.
//!
//! Every lookup sorts the letters of every word, so this is O(words * len log len).
//! It's kept around as a baseline to measure the [`AnagramTable`](crate::anagram_table::AnagramTable) against,
//! and as an oracle for tests.

/// Letters of `word` lowercased and sorted, everything else dropped.
///
/// ```
/// use word_wizard::linear::sorted_letters;
///
/// assert_eq!("arst", sorted_letters("T.s.A.r!"));
/// ```
pub fn sorted_letters(word: &str) -> String {
    let mut letters: Vec<u8> = word
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    letters.sort_unstable();

    // Only ASCII letters survive the filter
    letters.into_iter().map(char::from).collect()
}

#[derive(Debug, Default, Clone)]
pub struct LinearIndex {
    words: Vec<String>,
}

impl LinearIndex {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Every word with the same sorted letters as `query`, in list order
    pub fn lookup(&self, query: &str) -> Vec<&str> {
        let key = sorted_letters(query);

        self.words
            .iter()
            .filter(|word| sorted_letters(word) == key)
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LinearIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
