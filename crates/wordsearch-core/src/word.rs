//! Words to hide in a grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Letter;

/// Errors returned when building a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The word has no letters.
    #[display("word is empty")]
    Empty,
    /// The word contains a character that is not a letter.
    #[display("invalid character {ch:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Character index of the offending character.
        index: usize,
    },
}

/// A non-empty sequence of letters, one per grid cell.
///
/// Words are always uppercase and may contain any alphabetic character,
/// accented or not. Use [`Word::new`] (or [`str::parse`]) for input that must
/// already be a single alphabetic word, and [`Word::clean`] for free-form
/// entries like `"Gas Mask"` that should be squeezed down to their letters.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Word;
///
/// let word = Word::new("Luna")?;
/// assert_eq!(word.to_string(), "LUNA");
/// assert_eq!(word.len(), 4);
///
/// assert!(Word::new("gas mask").is_err());
/// assert_eq!(Word::clean("Gas Mask").unwrap().to_string(), "GASMASK");
/// assert_eq!(Word::clean("1920s").unwrap().to_string(), "S");
/// assert_eq!(Word::clean("Canción").unwrap().to_string(), "CANCIÓN");
/// assert_eq!(Word::clean("---"), None);
/// # Ok::<(), wordsearch_core::WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// Creates a word from a string of letters, uppercasing it.
    ///
    /// A letter whose uppercase form is several characters expands to all of
    /// them (`ß` becomes `SS`).
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Empty`] for an empty string and
    /// [`WordError::InvalidCharacter`] for the first character that is not a
    /// letter.
    pub fn new(s: &str) -> Result<Self, WordError> {
        let mut letters = Vec::with_capacity(s.len());
        for (index, ch) in s.chars().enumerate() {
            if !ch.is_alphabetic() {
                return Err(WordError::InvalidCharacter { ch, index });
            }
            for upper in ch.to_uppercase() {
                let letter =
                    Letter::from_char(upper).ok_or(WordError::InvalidCharacter { ch, index })?;
                letters.push(letter);
            }
        }
        Self::from_letters(letters)
    }

    /// Creates a word from the letters of `s`, dropping everything else.
    ///
    /// `s` is uppercased first, then spaces, punctuation, digits and other
    /// non-alphabetic characters are removed. Accented letters are kept.
    /// Returns `None` if no letters remain.
    #[must_use]
    pub fn clean(s: &str) -> Option<Self> {
        let letters = s
            .chars()
            .flat_map(char::to_uppercase)
            .filter_map(Letter::from_char)
            .collect();
        Self::from_letters(letters).ok()
    }

    /// Creates a word from letters.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Empty`] if `letters` is empty.
    pub fn from_letters(letters: Vec<Letter>) -> Result<Self, WordError> {
        if letters.is_empty() {
            return Err(WordError::Empty);
        }
        Ok(Self { letters })
    }

    /// Returns the letters of the word.
    #[must_use]
    #[inline]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the number of letters (and thus grid cells) in the word.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; words have at least one letter.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
