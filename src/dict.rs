mod backend;
mod error;
mod hashtable;
mod ranking;
mod sorted;
mod tst;
mod word_frequency;

pub use backend::*;
pub use error::*;
pub use hashtable::*;
pub use sorted::*;
pub use tst::*;
pub use word_frequency::*;

/// Maximum number of suggestions returned by [`PrefixDictionary::autocomplete`].
pub const AUTOCOMPLETE_LIMIT: usize = 3;

/// Operations shared by every dictionary backend.
///
/// Backends must agree on every result: the same contents give the same search
/// frequencies and the same autocomplete lists, ties included.
pub trait PrefixDictionary {
	/// Short label used in logs.
	fn name(&self) -> &'static str;

	/// Replace the contents with `entries`, inserting them in order.
	///
	/// A word that appears more than once keeps its last frequency.
	fn build(&mut self, entries: Vec<WordFrequency>);

	/// Store `entry`, overwriting the frequency if the word is already present.
	fn insert(&mut self, entry: WordFrequency);

	/// # Errors
	///
	/// Will return `Err` if `word` is empty
	fn search(&self, word: &str) -> Result<u64>;

	/// # Errors
	///
	/// Will return `Err` if `word` is empty
	fn contains(&self, word: &str) -> Result<bool>;

	/// Store `entry` only if its word is absent.
	///
	/// Returns `false` and leaves the stored frequency untouched otherwise.
	fn add(&mut self, entry: WordFrequency) -> bool;

	/// Returns whether `word` was present.
	///
	/// # Errors
	///
	/// Will return `Err` if `word` is empty
	fn delete(&mut self, word: &str) -> Result<bool>;

	/// Up to [`AUTOCOMPLETE_LIMIT`] stored words starting with `prefix`, most
	/// frequent first. Equal frequencies are ordered by word.
	fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency>;

	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

pub(crate) fn check_word(word: &str) -> Result<()> {
	if word.is_empty() {
		Err(DictionaryError::EmptyWord)
	} else {
		Ok(())
	}
}
