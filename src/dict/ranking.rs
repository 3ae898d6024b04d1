/// Keeps the `limit` most frequent items offered to it.
///
/// Kept items are ordered by descending frequency. An item is placed after every
/// kept item of equal or higher frequency, so among equal frequencies the item
/// offered first wins.
#[derive(Debug)]
pub(crate) struct MostFrequent<T> {
	limit: usize,
	kept: Vec<(T, u64)>,
}

impl<T> MostFrequent<T> {
	pub(crate) fn new(limit: usize) -> Self {
		Self {
			limit,
			kept: Vec::with_capacity(limit + 1),
		}
	}

	fn position(&self, frequency: u64) -> usize {
		self.kept.partition_point(|(_, kept)| *kept >= frequency)
	}

	/// Whether an item with `frequency` would be kept if offered now.
	pub(crate) fn admits(&self, frequency: u64) -> bool {
		self.position(frequency) < self.limit
	}

	pub(crate) fn offer(&mut self, item: T, frequency: u64) {
		let position = self.position(frequency);
		if position < self.limit {
			self.kept.insert(position, (item, frequency));
			self.kept.truncate(self.limit);
		}
	}

	pub(crate) fn into_vec(self) -> Vec<(T, u64)> {
		self.kept
	}
}
