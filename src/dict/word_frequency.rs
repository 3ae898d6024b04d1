use super::{DictionaryError, Result};
use std::cmp::Ordering;
use std::fmt;

/// A word paired with how often it occurs.
///
/// Ordering and equality only look at the word, so two entries for the same word
/// with different frequencies compare equal.
#[derive(Debug, Clone)]
pub struct WordFrequency {
	word: String,
	frequency: u64,
}

impl WordFrequency {
	/// # Errors
	///
	/// Will return `Err` if `word` is empty
	pub fn new(word: impl Into<String>, frequency: u64) -> Result<Self> {
		let word = word.into();
		if word.is_empty() {
			return Err(DictionaryError::EmptyWord);
		}

		Ok(Self { word, frequency })
	}

	/// Caller guarantees `word` is not empty.
	pub(crate) fn from_parts(word: String, frequency: u64) -> Self {
		debug_assert!(!word.is_empty());
		Self { word, frequency }
	}

	#[must_use]
	pub fn word(&self) -> &str {
		&self.word
	}

	#[must_use]
	pub fn frequency(&self) -> u64 {
		self.frequency
	}

	#[must_use]
	pub fn into_parts(self) -> (String, u64) {
		(self.word, self.frequency)
	}
}

impl TryFrom<(String, i64)> for WordFrequency {
	type Error = DictionaryError;

	fn try_from((word, frequency): (String, i64)) -> Result<Self> {
		let frequency =
			u64::try_from(frequency).map_err(|_| DictionaryError::NegativeFrequency(frequency))?;
		Self::new(word, frequency)
	}
}

impl TryFrom<(&str, u64)> for WordFrequency {
	type Error = DictionaryError;

	fn try_from((word, frequency): (&str, u64)) -> Result<Self> {
		Self::new(word, frequency)
	}
}

impl PartialEq for WordFrequency {
	fn eq(&self, other: &Self) -> bool {
		self.word == other.word
	}
}

impl Eq for WordFrequency {}

impl PartialOrd for WordFrequency {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for WordFrequency {
	fn cmp(&self, other: &Self) -> Ordering {
		self.word.cmp(&other.word)
	}
}

impl PartialEq<str> for WordFrequency {
	fn eq(&self, other: &str) -> bool {
		self.word == other
	}
}

impl fmt::Display for WordFrequency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.word, self.frequency)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_word_rejected() {
		assert_eq!(WordFrequency::new("", 4), Err(DictionaryError::EmptyWord));
	}

	#[test]
	fn test_negative_frequency_rejected() {
		let entry = WordFrequency::try_from(("cat".to_string(), -1));
		assert_eq!(entry, Err(DictionaryError::NegativeFrequency(-1)));

		let entry = WordFrequency::try_from(("cat".to_string(), 7)).unwrap();
		assert_eq!(entry.frequency(), 7);
		assert_eq!(WordFrequency::try_from(("", 7)), Err(DictionaryError::EmptyWord));
	}

	#[test]
	fn test_equality_and_ordering_by_word() {
		let a = WordFrequency::new("car", 3).unwrap();
		let b = WordFrequency::new("car", 30).unwrap();
		let c = WordFrequency::new("cart", 1).unwrap();

		assert_eq!(a, b);
		assert!(a < c);
		assert!(a == *"car");
		assert_eq!(c.to_string(), "cart 1");
	}
}
