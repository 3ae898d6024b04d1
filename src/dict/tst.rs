use super::ranking::MostFrequent;
use super::{AUTOCOMPLETE_LIMIT, PrefixDictionary, Result, WordFrequency, check_word};
use crate::{elapsed_secs, now};
use std::cmp::Ordering;
use tracing::{debug, info};

#[derive(Debug, Clone)]
struct Node {
	letter: char,
	left: Option<Box<Node>>,
	middle: Option<Box<Node>>,
	right: Option<Box<Node>>,
	frequency: u64,
	is_terminal: bool,
}

impl Node {
	fn new(letter: char) -> Self {
		Self {
			letter,
			left: None,
			middle: None,
			right: None,
			frequency: 0,
			is_terminal: false,
		}
	}

	fn is_leaf(&self) -> bool {
		self.left.is_none() && self.middle.is_none() && self.right.is_none()
	}

	fn count(node: Option<&Self>) -> usize {
		node.map_or(0, |node| {
			1 + Self::count(node.left.as_deref())
				+ Self::count(node.middle.as_deref())
				+ Self::count(node.right.as_deref())
		})
	}
}

/// Store `frequency` under the word `letter` + `rest`, creating missing nodes on the way.
///
/// Returns the subtree to put back into `slot`. `added` is set when the word was not
/// stored before.
fn insert_into(
	slot: Option<Box<Node>>,
	letter: char,
	rest: &[char],
	frequency: u64,
	added: &mut bool,
) -> Box<Node> {
	let mut node = slot.unwrap_or_else(|| Box::new(Node::new(letter)));

	match letter.cmp(&node.letter) {
		Ordering::Less => {
			node.left = Some(insert_into(node.left.take(), letter, rest, frequency, added));
		}
		Ordering::Greater => {
			node.right = Some(insert_into(node.right.take(), letter, rest, frequency, added));
		}
		Ordering::Equal => match rest.split_first() {
			Some((&next, rest)) => {
				node.middle = Some(insert_into(node.middle.take(), next, rest, frequency, added));
			}
			None => {
				*added = !node.is_terminal;
				node.frequency = frequency;
				node.is_terminal = true;
			}
		},
	}

	node
}

/// The node reached by spelling `letter` + `rest`, terminal or not.
fn find<'a>(node: Option<&'a Node>, letter: char, rest: &[char]) -> Option<&'a Node> {
	let node = node?;

	match letter.cmp(&node.letter) {
		Ordering::Less => find(node.left.as_deref(), letter, rest),
		Ordering::Greater => find(node.right.as_deref(), letter, rest),
		Ordering::Equal => match rest.split_first() {
			Some((&next, rest)) => find(node.middle.as_deref(), next, rest),
			None => Some(node),
		},
	}
}

/// Unmark the word `letter` + `rest`, dropping its node when nothing hangs below it.
///
/// Only the node of the word itself is pruned; ancestors left without children stay.
fn remove_from(mut node: Box<Node>, letter: char, rest: &[char]) -> Option<Box<Node>> {
	match letter.cmp(&node.letter) {
		Ordering::Less => {
			node.left = node.left.take().and_then(|left| remove_from(left, letter, rest));
		}
		Ordering::Greater => {
			node.right = node.right.take().and_then(|right| remove_from(right, letter, rest));
		}
		Ordering::Equal => match rest.split_first() {
			Some((&next, rest)) => {
				node.middle = node
					.middle
					.take()
					.and_then(|middle| remove_from(middle, next, rest));
			}
			None => {
				if node.is_leaf() {
					return None;
				}
				node.frequency = 0;
				node.is_terminal = false;
			}
		},
	}

	Some(node)
}

/// Offer every word stored below `node` to `best`, in word order.
///
/// `suffix` holds the letters matched on the way down and is restored on return.
/// Words with frequency 0 read as absent through `search` and are never suggested.
fn collect_suffixes(node: Option<&Node>, suffix: &mut String, best: &mut MostFrequent<String>) {
	let Some(node) = node else {
		return;
	};

	collect_suffixes(node.left.as_deref(), suffix, best);

	suffix.push(node.letter);
	if node.is_terminal && node.frequency > 0 && best.admits(node.frequency) {
		best.offer(suffix.clone(), node.frequency);
	}
	collect_suffixes(node.middle.as_deref(), suffix, best);
	suffix.pop();

	collect_suffixes(node.right.as_deref(), suffix, best);
}

/// Ternary search tree keyed by the `char`s of each word.
#[derive(Debug, Clone, Default)]
pub struct TernarySearchTree {
	root: Option<Box<Node>>,
	len: usize,
}

impl TernarySearchTree {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of allocated nodes, including non-terminal ones.
	#[must_use]
	pub fn node_count(&self) -> usize {
		Node::count(self.root.as_deref())
	}

	fn locate(&self, word: &str) -> Result<Option<&Node>> {
		check_word(word)?;
		let letters: Vec<char> = word.chars().collect();
		Ok(letters
			.split_first()
			.and_then(|(&first, rest)| find(self.root.as_deref(), first, rest)))
	}

	fn stored(&self, word: &str) -> Result<Option<&Node>> {
		Ok(self.locate(word)?.filter(|node| node.is_terminal))
	}
}

impl PrefixDictionary for TernarySearchTree {
	fn name(&self) -> &'static str {
		"tst"
	}

	fn build(&mut self, entries: Vec<WordFrequency>) {
		let t0 = now();
		self.root = None;
		self.len = 0;

		let count = entries.len();
		for entry in entries {
			self.insert(entry);
		}

		info!(
			"build {} for {count} entries ({} nodes) in {:.3}s",
			self.name(),
			self.node_count(),
			elapsed_secs(&t0)
		);
	}

	fn insert(&mut self, entry: WordFrequency) {
		let (word, frequency) = entry.into_parts();
		let letters: Vec<char> = word.chars().collect();
		let Some((&first, rest)) = letters.split_first() else {
			return;
		};

		let mut added = false;
		self.root = Some(insert_into(self.root.take(), first, rest, frequency, &mut added));
		if added {
			self.len += 1;
		}
	}

	fn search(&self, word: &str) -> Result<u64> {
		Ok(self.stored(word)?.map_or(0, |node| node.frequency))
	}

	fn contains(&self, word: &str) -> Result<bool> {
		Ok(self.stored(word)?.is_some())
	}

	fn add(&mut self, entry: WordFrequency) -> bool {
		if let Ok(Some(node)) = self.stored(entry.word()) {
			debug!(
				"{} already stored with frequency {}, not adding",
				entry.word(),
				node.frequency
			);
			return false;
		}

		self.insert(entry);
		true
	}

	fn delete(&mut self, word: &str) -> Result<bool> {
		if self.stored(word)?.is_none() {
			debug!("{word} is not stored, nothing to delete");
			return Ok(false);
		}

		let letters: Vec<char> = word.chars().collect();
		if let Some((&first, rest)) = letters.split_first() {
			self.root = self
				.root
				.take()
				.and_then(|root| remove_from(root, first, rest));
			self.len -= 1;
		}

		Ok(true)
	}

	/// Words are ranked from the subtree below the last letter of `prefix`.
	///
	/// Only the middle child of that node continues the prefix; its left and right
	/// children hold other letters at the same position. When `prefix` is the root's
	/// letter this is simply the root's middle child. An empty `prefix` ranks the
	/// whole tree.
	fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
		let mut best = MostFrequent::new(AUTOCOMPLETE_LIMIT);

		let subtree = if prefix.is_empty() {
			self.root.as_deref()
		} else {
			let Ok(Some(node)) = self.locate(prefix) else {
				return Vec::new();
			};
			if node.is_terminal && node.frequency > 0 {
				best.offer(String::new(), node.frequency);
			}
			node.middle.as_deref()
		};
		collect_suffixes(subtree, &mut String::new(), &mut best);

		best.into_vec()
			.into_iter()
			.map(|(suffix, frequency)| {
				WordFrequency::from_parts(format!("{prefix}{suffix}"), frequency)
			})
			.collect()
	}

	fn len(&self) -> usize {
		self.len
	}
}
