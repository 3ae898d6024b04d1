use super::ranking::MostFrequent;
use super::{AUTOCOMPLETE_LIMIT, PrefixDictionary, Result, WordFrequency, check_word};
use crate::{elapsed_secs, now};
use tracing::{debug, info};

/// Entries kept in a vector ordered by word, located with binary search.
#[derive(Debug, Clone, Default)]
pub struct SortedArrayDictionary {
	entries: Vec<WordFrequency>,
}

impl SortedArrayDictionary {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	fn position(&self, word: &str) -> std::result::Result<usize, usize> {
		self.entries.binary_search_by(|entry| entry.word().cmp(word))
	}
}

impl PrefixDictionary for SortedArrayDictionary {
	fn name(&self) -> &'static str {
		"list"
	}

	fn build(&mut self, mut entries: Vec<WordFrequency>) {
		let t0 = now();
		let count = entries.len();

		// stable, so duplicates stay in input order and the last one is moved forward
		entries.sort();
		entries.dedup_by(|later, kept| {
			if later == kept {
				std::mem::swap(later, kept);
				true
			} else {
				false
			}
		});
		self.entries = entries;

		info!(
			"build {} for {count} entries ({} distinct) in {:.3}s",
			self.name(),
			self.entries.len(),
			elapsed_secs(&t0)
		);
	}

	fn insert(&mut self, entry: WordFrequency) {
		match self.position(entry.word()) {
			Ok(index) => self.entries[index] = entry,
			Err(index) => self.entries.insert(index, entry),
		}
	}

	fn search(&self, word: &str) -> Result<u64> {
		check_word(word)?;
		Ok(self
			.position(word)
			.map_or(0, |index| self.entries[index].frequency()))
	}

	fn contains(&self, word: &str) -> Result<bool> {
		check_word(word)?;
		Ok(self.position(word).is_ok())
	}

	fn add(&mut self, entry: WordFrequency) -> bool {
		match self.position(entry.word()) {
			Ok(_) => {
				debug!("{} already stored, not adding", entry.word());
				false
			}
			Err(index) => {
				self.entries.insert(index, entry);
				true
			}
		}
	}

	fn delete(&mut self, word: &str) -> Result<bool> {
		check_word(word)?;
		match self.position(word) {
			Ok(index) => {
				self.entries.remove(index);
				Ok(true)
			}
			Err(_) => {
				debug!("{word} is not stored, nothing to delete");
				Ok(false)
			}
		}
	}

	fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
		let start = self.entries.partition_point(|entry| entry.word() < prefix);

		let mut best = MostFrequent::new(AUTOCOMPLETE_LIMIT);
		for entry in self.entries[start..]
			.iter()
			.take_while(|entry| entry.word().starts_with(prefix))
		{
			if entry.frequency() > 0 && best.admits(entry.frequency()) {
				best.offer(entry, entry.frequency());
			}
		}

		best.into_vec()
			.into_iter()
			.map(|(entry, _)| entry.clone())
			.collect()
	}

	fn len(&self) -> usize {
		self.entries.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_build_sorts_and_keeps_last_duplicate() {
		let mut dict = SortedArrayDictionary::new();
		dict.build(vec![
			WordFrequency::new("pear", 1).unwrap(),
			WordFrequency::new("apple", 2).unwrap(),
			WordFrequency::new("pear", 7).unwrap(),
			WordFrequency::new("fig", 3).unwrap(),
			WordFrequency::new("pear", 5).unwrap(),
		]);

		let words: Vec<_> = dict.entries.iter().map(WordFrequency::word).collect();
		assert_eq!(words, vec!["apple", "fig", "pear"]);
		assert_eq!(dict.search("pear"), Ok(5));
	}

	#[test]
	fn test_add_and_delete_keep_order() {
		let mut dict = SortedArrayDictionary::new();
		for word in ["m", "c", "x", "a"] {
			assert!(dict.add(WordFrequency::new(word, 1).unwrap()));
		}
		assert_eq!(dict.delete("c"), Ok(true));

		let words: Vec<_> = dict.entries.iter().map(WordFrequency::word).collect();
		assert_eq!(words, vec!["a", "m", "x"]);
	}

	#[test]
	fn test_autocomplete_scans_prefix_range_only() {
		let mut dict = SortedArrayDictionary::new();
		dict.build(vec![
			WordFrequency::new("bat", 1).unwrap(),
			WordFrequency::new("ba", 2).unwrap(),
			WordFrequency::new("b", 3).unwrap(),
			WordFrequency::new("c", 100).unwrap(),
			WordFrequency::new("a", 100).unwrap(),
		]);

		let words: Vec<_> = dict
			.autocomplete("ba")
			.iter()
			.map(|e| (e.word().to_string(), e.frequency()))
			.collect();
		assert_eq!(words, vec![("ba".to_string(), 2), ("bat".to_string(), 1)]);
	}
}
