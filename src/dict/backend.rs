use super::{
	DictionaryError, HashMapDictionary, PrefixDictionary, SortedArrayDictionary, TernarySearchTree,
};
use std::fmt;
use std::str::FromStr;

/// The dictionary implementations that can be created by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
	SortedArray,
	HashTable,
	TernarySearchTree,
}

impl Backend {
	pub const ALL: [Self; 3] = [Self::SortedArray, Self::HashTable, Self::TernarySearchTree];

	/// An empty dictionary of this kind.
	#[must_use]
	pub fn create(self) -> Box<dyn PrefixDictionary> {
		match self {
			Self::SortedArray => Box::new(SortedArrayDictionary::new()),
			Self::HashTable => Box::new(HashMapDictionary::new()),
			Self::TernarySearchTree => Box::new(TernarySearchTree::new()),
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::SortedArray => "list",
			Self::HashTable => "hashtable",
			Self::TernarySearchTree => "tst",
		}
	}
}

impl fmt::Display for Backend {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Backend {
	type Err = DictionaryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"list" | "sorted" => Ok(Self::SortedArray),
			"hashtable" | "hashmap" => Ok(Self::HashTable),
			"tst" => Ok(Self::TernarySearchTree),
			_ => Err(DictionaryError::UnknownBackend(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_names() {
		assert_eq!("tst".parse::<Backend>(), Ok(Backend::TernarySearchTree));
		assert_eq!(" HashMap ".parse::<Backend>(), Ok(Backend::HashTable));
		assert_eq!("sorted".parse::<Backend>(), Ok(Backend::SortedArray));
		assert_eq!(
			"btree".parse::<Backend>(),
			Err(DictionaryError::UnknownBackend("btree".to_string()))
		);
	}

	#[test]
	fn test_created_name_matches_display() {
		for backend in Backend::ALL {
			let dict = backend.create();
			assert_eq!(dict.name(), backend.to_string());
			assert!(dict.is_empty());
		}
	}
}
