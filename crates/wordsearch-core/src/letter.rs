//! Grid letter representation.

use std::fmt::{self, Display};

/// An uppercase alphabetic character.
///
/// Every filled grid cell holds exactly one `Letter`. Any alphabetic
/// character is accepted, so words like `NIÑO` keep their accents. Lowercase
/// input is folded to uppercase on construction; anything else is rejected.
/// Filler letters are drawn from [`Letter::ALL`], the plain `A`-`Z` alphabet.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Letter;
///
/// let letter = Letter::from_char('q').unwrap();
/// assert_eq!(letter.as_char(), 'Q');
/// assert_eq!(letter.index(), Some(16));
///
/// assert_eq!(Letter::from_char('ñ').unwrap().as_char(), 'Ñ');
/// assert_eq!(Letter::from_char('Ñ').unwrap().index(), None);
/// assert_eq!(Letter::from_char('7'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// Array containing all letters from `A` to `Z`.
    ///
    /// Used as the alphabet for filler letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::Letter;
    ///
    /// assert_eq!(Letter::ALL.len(), 26);
    /// assert_eq!(Letter::ALL[0].as_char(), 'A');
    /// assert_eq!(Letter::ALL[25].as_char(), 'Z');
    /// ```
    pub const ALL: [Self; 26] = {
        let mut all = [Self('A'); 26];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 26 {
            all[i] = Self((b'A' + i as u8) as char);
            i += 1;
        }
        all
    };

    /// Creates a letter from an ASCII byte, folding lowercase to uppercase.
    ///
    /// Returns `None` for bytes that are not ASCII letters.
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_uppercase() as char))
        } else {
            None
        }
    }

    /// Creates a letter from a character, folding lowercase to uppercase.
    ///
    /// Returns `None` for characters that are not alphabetic, and for
    /// characters whose uppercase form is more than one character (`ß`
    /// becomes `SS`). [`Word`](crate::Word) construction expands those.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if !ch.is_alphabetic() {
            return None;
        }
        let mut upper = ch.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(upper), None) if upper.is_alphabetic() => Some(Self(upper)),
            _ => None,
        }
    }

    /// Returns the letter as an uppercase character.
    #[must_use]
    #[inline]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Returns the zero-based index in [`Letter::ALL`] (`A` = 0, `Z` = 25).
    ///
    /// Returns `None` for letters outside `A`-`Z`.
    #[must_use]
    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn index(self) -> Option<u8> {
        if self.0.is_ascii_uppercase() {
            Some(self.0 as u8 - b'A')
        } else {
            None
        }
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
