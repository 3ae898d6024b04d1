use super::ranking::MostFrequent;
use super::{AUTOCOMPLETE_LIMIT, PrefixDictionary, Result, WordFrequency, check_word};
use crate::{elapsed_secs, now};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, info};

/// Word to frequency map. Lookups are constant time, autocomplete scans every entry.
#[derive(Debug, Clone, Default)]
pub struct HashMapDictionary {
	frequencies: HashMap<String, u64>,
}

impl HashMapDictionary {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}

impl PrefixDictionary for HashMapDictionary {
	fn name(&self) -> &'static str {
		"hashtable"
	}

	fn build(&mut self, entries: Vec<WordFrequency>) {
		let t0 = now();
		let count = entries.len();

		self.frequencies.clear();
		self.frequencies.reserve(count);
		for entry in entries {
			self.insert(entry);
		}

		info!(
			"build {} for {count} entries ({} distinct) in {:.3}s",
			self.name(),
			self.frequencies.len(),
			elapsed_secs(&t0)
		);
	}

	fn insert(&mut self, entry: WordFrequency) {
		let (word, frequency) = entry.into_parts();
		self.frequencies.insert(word, frequency);
	}

	fn search(&self, word: &str) -> Result<u64> {
		check_word(word)?;
		Ok(self.frequencies.get(word).copied().unwrap_or(0))
	}

	fn contains(&self, word: &str) -> Result<bool> {
		check_word(word)?;
		Ok(self.frequencies.contains_key(word))
	}

	fn add(&mut self, entry: WordFrequency) -> bool {
		let (word, frequency) = entry.into_parts();
		match self.frequencies.entry(word) {
			Entry::Occupied(occupied) => {
				debug!("{} already stored, not adding", occupied.key());
				false
			}
			Entry::Vacant(vacant) => {
				vacant.insert(frequency);
				true
			}
		}
	}

	fn delete(&mut self, word: &str) -> Result<bool> {
		check_word(word)?;
		let removed = self.frequencies.remove(word).is_some();
		if !removed {
			debug!("{word} is not stored, nothing to delete");
		}

		Ok(removed)
	}

	fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
		let mut matches: Vec<(&String, u64)> = self
			.frequencies
			.iter()
			.filter(|(word, frequency)| **frequency > 0 && word.starts_with(prefix))
			.map(|(word, frequency)| (word, *frequency))
			.collect();
		// map order is arbitrary, ties must resolve by word
		matches.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

		let mut best = MostFrequent::new(AUTOCOMPLETE_LIMIT);
		for (word, frequency) in matches {
			best.offer(word, frequency);
		}

		best.into_vec()
			.into_iter()
			.map(|(word, frequency)| WordFrequency::from_parts(word.clone(), frequency))
			.collect()
	}

	fn len(&self) -> usize {
		self.frequencies.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_autocomplete_ties_resolved_by_word() {
		let mut dict = HashMapDictionary::new();
		dict.build(
			["kiwi", "kale", "kelp", "kumquat", "leek"]
				.into_iter()
				.map(|word| WordFrequency::new(word, 4).unwrap())
				.collect(),
		);

		let words: Vec<_> = dict
			.autocomplete("k")
			.into_iter()
			.map(|e| e.word().to_string())
			.collect();
		assert_eq!(words, vec!["kale", "kelp", "kiwi"]);
	}

	#[test]
	fn test_add_does_not_overwrite() {
		let mut dict = HashMapDictionary::new();
		assert!(dict.add(WordFrequency::new("leek", 2).unwrap()));
		assert!(!dict.add(WordFrequency::new("leek", 9).unwrap()));
		assert_eq!(dict.search("leek"), Ok(2));
		assert_eq!(dict.len(), 1);
	}
}
