use std::{collections::HashSet, ops::Deref};

use wordsearch_core::Word;

/// A cleaned, duplicate-free list of words for one puzzle.
///
/// # Examples
///
/// ```
/// use wordsearch_book::WordList;
///
/// let list = WordList::from_raw(["Árbol", "sol", "", "  SOL ", "mar-azul", "123"]);
/// let words = list.iter().map(ToString::to_string).collect::<Vec<_>>();
/// assert_eq!(words, ["ÁRBOL", "SOL", "MARAZUL"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Builds a list from raw user input.
    ///
    /// Each entry keeps only its letters, uppercased; accents are kept. Entries left empty
    /// are dropped, and repeated words keep only their first occurrence.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .filter_map(|entry| Word::clean(entry.as_ref()))
            .collect()
    }

    /// Returns the words.
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Returns the length of the longest word, or 0 for an empty list.
    #[must_use]
    pub fn longest(&self) -> usize {
        self.words.iter().map(Word::len).max().unwrap_or(0)
    }
}

impl Deref for WordList {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        let mut seen = HashSet::new();
        let words = iter
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();
        Self { words }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_cleans_and_dedupes() {
        let list = WordList::from_raw(["gato", "Perro", "GATO", "g a t o", "casa!"]);
        assert_eq!(
            list.as_slice(),
            [
                Word::new("GATO").unwrap(),
                Word::new("PERRO").unwrap(),
                Word::new("CASA").unwrap(),
            ]
        );
    }

    #[test]
    fn test_from_raw_keeps_accented_words() {
        let list = WordList::from_raw(["Niño", "Árbol", "Canción", "NIÑO"]);
        let words = list.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(words, ["NIÑO", "ÁRBOL", "CANCIÓN"]);
        assert_eq!(list.longest(), 7);
    }

    #[test]
    fn test_from_raw_drops_empty_entries() {
        let list = WordList::from_raw(["", "  ", "42", "ñ"]);
        assert!(list.is_empty());
        assert_eq!(list.longest(), 0);
    }

    #[test]
    fn test_longest() {
        let list = WordList::from_raw(vec![String::from("sol"), String::from("murcielago")]);
        assert_eq!(list.longest(), 10);
        assert_eq!(list.len(), 2);
    }
}
