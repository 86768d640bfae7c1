use std::fmt::{self, Debug, Formatter};

const ALPHABET_LEN: usize = 26;

/// Case-insensitive letter frequencies of a word, a through z.
///
/// Anything outside `[A-Za-z]` is ignored, so `"T.s.A.r!"` and `"star"` share a signature.
/// Two words are anagrams of each other exactly when their signatures are equal.
///
/// ```
/// use word_wizard::signature::Signature;
///
/// assert_eq!(Signature::of("Listen"), Signature::of("silent"));
/// assert_ne!(Signature::of("listen"), Signature::of("listens"));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    counts: [u32; ALPHABET_LEN],
}

impl Signature {
    /// The signature of a word without letters
    pub const fn empty() -> Self {
        Self {
            counts: [0; ALPHABET_LEN],
        }
    }

    pub fn of(word: &str) -> Self {
        let mut signature = Self::empty();
        for &c in word.as_bytes() {
            signature.increment(c);
        }

        signature
    }

    /// Occurrences of `letter`, ignoring case. Non-letters always count 0.
    pub fn count(&self, letter: u8) -> u32 {
        letter_index(letter).map_or(0, |idx| self.counts[idx])
    }

    /// Total number of letters counted
    pub fn letters(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Order-sensitive mix of the 26 counts.
    /// Depends on nothing but the counts, so all anagrams share a hash.
    /// Different signatures may still collide, callers compare signatures afterwards.
    pub fn bucket_hash(&self) -> u64 {
        self.counts.iter().fold(0u64, |seed, &count| {
            seed ^ (count as u64)
                .wrapping_add(0x9e37_79b9)
                .wrapping_add(seed << 6)
                .wrapping_add(seed >> 2)
        })
    }

    #[inline(always)]
    fn increment(&mut self, c: u8) {
        if let Some(idx) = letter_index(c) {
            self.counts[idx] = self.counts[idx].saturating_add(1);
        }
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let letters = (b'a'..=b'z')
            .zip(self.counts.iter())
            .filter(|&(_, &count)| count != 0)
            .map(|(letter, count)| (letter as char, count));

        f.debug_map().entries(letters).finish()
    }
}

// Lowercasing via `| 32` maps every ASCII letter into a..z.
// Everything else, including UTF-8 continuation and lead bytes, lands outside 0..26.
#[inline(always)]
fn letter_index(c: u8) -> Option<usize> {
    let idx = (c | 0x20).wrapping_sub(b'a') as usize;
    (idx < ALPHABET_LEN).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::sorted_letters;
    use proptest::prelude::*;

    #[test]
    fn empty_word() {
        let signature = Signature::of("");
        assert_eq!(Signature::empty(), signature);
        assert!(signature.is_empty());
        assert_eq!(0, signature.letters());
    }

    #[test]
    fn no_letters() {
        let signature = Signature::of("123 !?-_ [`{@");
        assert!(signature.is_empty());
        assert_eq!(Signature::of(""), signature);
    }

    #[test]
    fn punctuation_and_case() {
        assert_eq!(Signature::of("star"), Signature::of("T.s.A.r!"));
    }

    #[test]
    fn non_ascii_ignored() {
        assert_eq!(Signature::of("caf"), Signature::of("café"));
        assert_eq!(Signature::of("ae"), Signature::of("æaé€e"));
    }

    #[test]
    fn counts() {
        let signature = Signature::of("Mississippi");
        assert_eq!(1, signature.count(b'm'));
        assert_eq!(1, signature.count(b'M'));
        assert_eq!(4, signature.count(b'i'));
        assert_eq!(4, signature.count(b's'));
        assert_eq!(2, signature.count(b'p'));
        assert_eq!(0, signature.count(b'z'));
        assert_eq!(0, signature.count(b'!'));
        assert_eq!(11, signature.letters());
    }

    #[test]
    fn boundary_bytes() {
        // Neighbours of the letter ranges must not leak into a or z
        let signature = Signature::of("@[`{");
        assert!(signature.is_empty());

        let signature = Signature::of("AZaz");
        assert_eq!(2, signature.count(b'a'));
        assert_eq!(2, signature.count(b'z'));
        assert_eq!(4, signature.letters());
    }

    #[test]
    fn hash_distinguishes_signatures() {
        assert_ne!(Signature::of("ab").bucket_hash(), Signature::of("bb").bucket_hash());
        assert_ne!(Signature::of("star").bucket_hash(), Signature::of("apple").bucket_hash());
    }

    #[test]
    fn hash_is_order_sensitive() {
        // Same multiset of counts, moved between letters
        assert_ne!(Signature::of("aab").bucket_hash(), Signature::of("abb").bucket_hash());
        assert_ne!(Signature::of("az").bucket_hash(), Signature::of("by").bucket_hash());
    }

    #[test]
    fn debug_lists_letters() {
        assert_eq!("{'a': 1, 'r': 1, 's': 1, 't': 1}", format!("{:?}", Signature::of("Rats")));
        assert_eq!("{}", format!("{:?}", Signature::empty()));
    }

    fn shuffled_with_noise() -> impl Strategy<Value = (String, String)> {
        "[a-zA-Z0-9 .!']{0,24}".prop_flat_map(|word| {
            let chars: Vec<char> = word.chars().collect();
            (Just(word), Just(chars).prop_shuffle(), any::<bool>())
        })
        .prop_map(|(word, shuffled, flip_case)| {
            let shuffled: String = shuffled
                .into_iter()
                .map(|c| if flip_case { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                .filter(|c| !c.is_ascii_digit())
                .collect();
            (word, shuffled)
        })
    }

    proptest! {
        #[test]
        fn permutations_share_signature((word, shuffled) in shuffled_with_noise()) {
            prop_assert_eq!(Signature::of(&word), Signature::of(&shuffled));
            prop_assert_eq!(Signature::of(&word).bucket_hash(), Signature::of(&shuffled).bucket_hash());
        }

        #[test]
        fn signature_equality_matches_letter_profile(a in "[a-eA-E.]{0,8}", b in "[a-eA-E.]{0,8}") {
            let same_profile = sorted_letters(&a) == sorted_letters(&b);
            prop_assert_eq!(same_profile, Signature::of(&a) == Signature::of(&b));
        }

        #[test]
        fn hash_is_a_function_of_signature(a in "\\PC{0,16}", b in "\\PC{0,16}") {
            if Signature::of(&a) == Signature::of(&b) {
                prop_assert_eq!(Signature::of(&a).bucket_hash(), Signature::of(&b).bucket_hash());
            }
        }
    }
}
