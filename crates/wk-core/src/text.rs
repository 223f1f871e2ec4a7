//! Unstructured random text: letters drawn uniformly from an alphabet.

use tracing::debug;

use crate::error::{GenError, GenResult};
use crate::rng::{RandomSource, pick_index};

/// The default alphabet: lowercase, uppercase, then eight spaces, so a space
/// is eight times as likely as any single letter.
pub const DEFAULT_LETTERS: [char; 60] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', ' ', ' ', ' ', ' ',
    ' ', ' ', ' ',
];

/// Options for [`unstructured_random`].
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Minimum number of characters (inclusive).
    pub min_length: u64,
    /// Maximum number of characters (inclusive).
    pub max_length: u64,
    /// Alphabet to draw from; `None` uses [`DEFAULT_LETTERS`].
    pub letters: Option<Vec<char>>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 1000,
            letters: None,
        }
    }
}

impl TextOptions {
    /// Set both length bounds.
    pub fn with_length(mut self, min_length: u64, max_length: u64) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Use a custom alphabet. Repeated characters weigh more.
    pub fn with_letters(mut self, letters: impl IntoIterator<Item = char>) -> Self {
        self.letters = Some(letters.into_iter().collect());
        self
    }

    /// The alphabet in effect.
    pub fn alphabet(&self) -> &[char] {
        self.letters.as_deref().unwrap_or(&DEFAULT_LETTERS)
    }
}

/// Check that `min <= max`.
pub(crate) fn check_lengths(min_length: u64, max_length: u64) -> GenResult<()> {
    if min_length > max_length {
        return Err(GenError::InvalidArgument(format!(
            "min_length ({min_length}) is greater than max_length ({max_length})"
        )));
    }
    Ok(())
}

/// Generate `L` characters drawn uniformly, with replacement, from the
/// alphabet, where `L` is drawn uniformly from the length bounds.
///
/// # Errors
/// [`GenError::InvalidArgument`] if `min_length > max_length`, or if the
/// alphabet is empty and a non-zero length was drawn.
pub fn unstructured_random<S: RandomSource + ?Sized>(
    options: &TextOptions,
    rng: &mut S,
) -> GenResult<String> {
    check_lengths(options.min_length, options.max_length)?;
    let letters = options.alphabet();

    let length = rng.range_inclusive(options.min_length, options.max_length);
    if length > 0 && letters.is_empty() {
        return Err(GenError::InvalidArgument("alphabet is empty".to_string()));
    }
    debug!(length, alphabet = letters.len(), "generating unstructured text");

    let mut text = String::new();
    for _ in 0..length {
        text.push(letters[pick_index(rng, letters.len())]);
    }
    Ok(text)
}
