//! Candidate words and their clues.

/// Error returned when an answer cannot be normalized into a placeable word.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The answer contains no letters once whitespace is removed.
    #[display("answer {raw:?} is empty after removing whitespace")]
    Empty {
        /// The answer text as supplied.
        raw: String,
    },
}

/// A candidate answer paired with its clue.
///
/// The answer is normalized on construction: all whitespace is removed and
/// letters are upper-cased. The clue is kept verbatim.
///
/// # Examples
///
/// ```
/// use xwordgen_core::WordEntry;
///
/// let entry = WordEntry::new("ice cream", "Frozen dessert")?;
/// assert_eq!(entry.answer(), "ICECREAM");
/// assert_eq!(entry.len(), 8);
/// assert_eq!(entry.clue(), "Frozen dessert");
/// # Ok::<(), xwordgen_core::WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    answer: String,
    letters: Vec<char>,
    clue: String,
}

impl WordEntry {
    /// Creates a normalized word entry.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Empty`] if the answer has no non-whitespace
    /// characters.
    pub fn new(answer: impl AsRef<str>, clue: impl Into<String>) -> Result<Self, WordError> {
        let raw = answer.as_ref();
        let letters = raw
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect::<Vec<_>>();
        if letters.is_empty() {
            return Err(WordError::Empty {
                raw: raw.to_owned(),
            });
        }
        Ok(Self {
            answer: letters.iter().collect(),
            letters,
            clue: clue.into(),
        })
    }

    /// Returns the normalized answer.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the letters of the normalized answer.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns the clue text.
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Returns the answer length in letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; normalized answers hold at least one letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl<A, C> TryFrom<(A, C)> for WordEntry
where
    A: AsRef<str>,
    C: Into<String>,
{
    type Error = WordError;

    fn try_from((answer, clue): (A, C)) -> Result<Self, Self::Error> {
        Self::new(answer, clue)
    }
}
