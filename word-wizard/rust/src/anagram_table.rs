use std::{
    fmt::{self, Debug, Formatter},
    mem,
};

use thiserror::Error;
use tracing::debug;

use crate::signature::Signature;

#[derive(Error, Debug, PartialEq)]
pub enum AnagramTableError {
    #[error("load factor must be finite and non-negative, got {0}")]
    InvalidLoadFactor(f64),
    #[error("can not allocate {0} buckets")]
    TooManyBuckets(f64),
}

type Error = AnagramTableError;
type Result<T> = std::result::Result<T, Error>;

struct Entry {
    signature: Signature,
    word: String,
}

// Largest bucket array a `Vec` can represent
const MAX_BUCKETS: usize = isize::MAX as usize / mem::size_of::<Vec<Entry>>();

/// Closed addressing hash table where words are keyed by their [`Signature`].
///
/// All anagrams of a word hash to the same bucket. A bucket may also hold words
/// of other signatures that happen to collide, lookups filter those out.
///
/// The number of buckets is decided once, from the size of the initial word list.
/// Later inserts never rehash, so a table that keeps growing after construction
/// degrades towards a linear scan per bucket. Use [`AnagramTable::load_factor`] and
/// [`AnagramTable::longest_bucket`] to spot that.
///
/// ```
/// use word_wizard::anagram_table::AnagramTable;
///
/// let table = AnagramTable::from_words(["star", "rats", "apple", "tsar"]);
///
/// assert_eq!(vec!["star", "rats", "tsar"], table.lookup("arts"));
/// assert!(table.lookup("zzz").is_empty());
/// ```
pub struct AnagramTable {
    buckets: Vec<Vec<Entry>>,
    len: usize,
}

impl AnagramTable {
    pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

    /// Builds the table from a complete word list, using [`AnagramTable::DEFAULT_LOAD_FACTOR`].
    /// Words are stored verbatim, in input order, duplicates included.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        // Fewer buckets than words, so this always fits
        let bucket_count = (words.len() as f64 * Self::DEFAULT_LOAD_FACTOR) as usize + 1;
        Self::build(words, (0..bucket_count).map(|_| Vec::new()).collect())
    }

    /// Same as [`AnagramTable::from_words`], with a custom factor for sizing the bucket array
    /// Can return either of
    /// * `Result::Err(AnagramTableError::InvalidLoadFactor)` if the factor is negative, NaN or infinite
    /// * `Result::Err(AnagramTableError::TooManyBuckets)` if the bucket array can't be allocated
    /// * `Result::Ok(AnagramTable)`
    ///
    /// ```
    /// use word_wizard::anagram_table::AnagramTable;
    ///
    /// let table = AnagramTable::with_load_factor(["a", "b", "c", "d"], 2.0).unwrap();
    /// assert_eq!(9, table.bucket_count());
    ///
    /// assert!(AnagramTable::with_load_factor(["a"], -1.0).is_err());
    /// ```
    pub fn with_load_factor<I, S>(words: I, load_factor: f64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !load_factor.is_finite() || load_factor < 0.0 {
            return Err(Error::InvalidLoadFactor(load_factor));
        }

        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        let requested = (words.len() as f64 * load_factor).floor();
        if requested >= MAX_BUCKETS as f64 {
            return Err(Error::TooManyBuckets(requested));
        }

        // Always at least one bucket, even for an empty word list
        let bucket_count = requested as usize + 1;

        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(bucket_count)
            .map_err(|_| Error::TooManyBuckets(requested))?;
        buckets.resize_with(bucket_count, Vec::new);

        Ok(Self::build(words, buckets))
    }

    fn build(words: Vec<String>, buckets: Vec<Vec<Entry>>) -> Self {
        let mut table = Self { buckets, len: 0 };

        for word in words {
            table.insert(word);
        }

        debug!(
            words = table.len,
            buckets = table.bucket_count(),
            longest_bucket = table.longest_bucket(),
            "built anagram table"
        );

        table
    }

    /// Appends `word` to the bucket of its signature. Never resizes the table.
    pub fn insert<S: Into<String>>(&mut self, word: S) {
        let word = word.into();
        let signature = Signature::of(&word);
        let index = self.bucket_index(&signature);

        self.buckets[index].push(Entry { signature, word });
        self.len += 1;
    }

    /// Every stored anagram of `query`, in insertion order
    pub fn lookup(&self, query: &str) -> Vec<&str> {
        self.anagrams(query).collect()
    }

    /// Lazy version of [`AnagramTable::lookup`]
    pub fn anagrams<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> + 'a {
        let signature = Signature::of(query);

        self.bucket(&signature)
            .iter()
            .filter(move |entry| entry.signature == signature)
            .map(|entry| entry.word.as_str())
    }

    /// Whether any stored word is an anagram of `query`
    pub fn contains_anagram(&self, query: &str) -> bool {
        self.anagrams(query).next().is_some()
    }

    /// Whether the bucket `query` hashes to holds anything at all.
    /// The entries may all be collisions, see [`AnagramTable::contains_anagram`] for an exact answer.
    pub fn has_candidates(&self, query: &str) -> bool {
        !self.bucket(&Signature::of(query)).is_empty()
    }

    /// Total number of words inserted, across all signatures
    pub fn len(&self) -> usize {
        self.len
    }

    /// True until the first word is inserted.
    /// Says nothing about any particular key.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Words per bucket. Fixed bucket count means this keeps growing with inserts.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.bucket_count() as f64
    }

    pub fn longest_bucket(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[inline(always)]
    fn bucket(&self, signature: &Signature) -> &[Entry] {
        &self.buckets[self.bucket_index(signature)]
    }

    #[inline(always)]
    fn bucket_index(&self, signature: &Signature) -> usize {
        (signature.bucket_hash() % self.buckets.len() as u64) as usize
    }
}

impl<S: Into<String>> FromIterator<S> for AnagramTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

impl<S: Into<String>> Extend<S> for AnagramTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl Debug for AnagramTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnagramTable")
            .field("len", &self.len)
            .field("bucket_count", &self.bucket_count())
            .field("longest_bucket", &self.longest_bucket())
            .finish()
    }
}
