//! Candidate words and the interned vocabulary.

use std::{
    collections::HashSet,
    fmt::{self, Display},
};

/// A candidate word, stored as its sequence of characters.
///
/// Words are compared and hashed by content. Storage is `char`-based so the
/// alphabet is arbitrary; overlap offsets always index characters, never
/// bytes.
///
/// # Examples
///
/// ```
/// use fillword_core::Word;
///
/// let word = Word::new("CAT");
/// assert_eq!(word.len(), 3);
/// assert_eq!(word.char_at(1), 'A');
/// assert_eq!(word.to_string(), "CAT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: Box<[char]>,
}

impl Word {
    /// Creates a word from a string slice.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Returns the number of characters in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the word has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the character at offset `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than [`len`](Self::len). Use
    /// [`chars`](Self::chars) with [`slice::get`] when the offset is not
    /// known to be in range.
    #[must_use]
    pub fn char_at(&self, i: usize) -> char {
        self.chars[i]
    }

    /// Returns the characters of the word as a slice.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Identifier of a word within a [`Vocabulary`].
///
/// Word ids are only meaningful for the vocabulary that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
    /// Returns the id as an index into the vocabulary's word list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// An interned, duplicate-free candidate word list.
///
/// The vocabulary assigns each distinct word a [`WordId`] in insertion
/// order. Duplicate inputs are collapsed to the first occurrence.
///
/// # Examples
///
/// ```
/// use fillword_core::Vocabulary;
///
/// let vocab: Vocabulary = ["CAT", "DOG", "CAT"].into_iter().collect();
/// assert_eq!(vocab.len(), 2);
///
/// let cat = vocab.ids().next().unwrap();
/// assert_eq!(vocab.get(cat).to_string(), "CAT");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the vocabulary contains no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word for an id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this vocabulary.
    #[must_use]
    pub fn get(&self, id: WordId) -> &Word {
        &self.words[id.index()]
    }

    /// Returns an iterator over all word ids in insertion order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn ids(&self) -> impl Iterator<Item = WordId> + use<> {
        (0..self.words.len() as u32).map(WordId)
    }

    /// Returns an iterator over all `(id, word)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.ids().zip(&self.words)
    }
}

impl<S> FromIterator<S> for Vocabulary
where
    S: AsRef<str>,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = S>,
    {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for text in iter {
            let word = Word::new(text.as_ref());
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_basics() {
        let word = Word::new("CAT");
        assert_eq!(word.len(), 3);
        assert!(!word.is_empty());
        assert_eq!(word.char_at(0), 'C');
        assert_eq!(word.chars(), &['C', 'A', 'T']);
        assert_eq!(word.to_string(), "CAT");

        assert!(Word::new("").is_empty());
    }

    #[test]
    fn test_word_char_length_not_byte_length() {
        // Offsets index characters, so multi-byte alphabets work.
        let word = Word::new("ÆON");
        assert_eq!(word.len(), 3);
        assert_eq!(word.char_at(0), 'Æ');
    }

    #[test]
    fn test_vocabulary_dedup_keeps_first() {
        let vocab: Vocabulary = ["DOG", "CAT", "DOG"].into_iter().collect();
        assert_eq!(vocab.len(), 2);

        let words: Vec<_> = vocab.iter().map(|(_, w)| w.to_string()).collect();
        assert_eq!(words, ["DOG", "CAT"]);
    }

    #[test]
    fn test_vocabulary_ids_match_get() {
        let vocab: Vocabulary = ["A", "BB", "CCC"].into_iter().collect();
        for (id, word) in vocab.iter() {
            assert_eq!(vocab.get(id), word);
        }
        assert_eq!(vocab.ids().count(), 3);
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocab = Vocabulary::new();
        assert!(vocab.is_empty());
        assert_eq!(vocab.ids().count(), 0);
    }
}
