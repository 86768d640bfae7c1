//! Anagram lookups over a word list.
//!
//! Words are grouped by their [`signature::Signature`], the case-insensitive count of each letter,
//! in an [`anagram_table::AnagramTable`]. Looking up any string returns every stored word made of
//! exactly the same letters.

pub mod anagram_table;
pub mod linear;
pub mod signature;
pub mod stats;
pub mod words;

pub use anagram_table::{AnagramTable, AnagramTableError};
pub use signature::Signature;
