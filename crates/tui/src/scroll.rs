//! Scroll position of the grouped results list.

use docpal_core::EnsureVisible;

/// Maps flattened result positions to list rows and keeps the selection on
/// screen.
///
/// Every group starts with a header row, so item `n` lives at row
/// `n + headers above it`. Requests to reveal an item are recorded and
/// applied by the next [`layout`](Self::layout), which runs during render
/// once the new results and the viewport height are known.
#[derive(Debug, Clone, Default)]
pub struct ResultsViewport {
	offset: usize,
	height: usize,
	item_rows: Vec<usize>,
	group_starts: Vec<usize>,
	total_rows: usize,
	pending: Option<usize>,
}

impl ResultsViewport {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// First visible row.
	#[must_use]
	pub fn offset(&self) -> usize {
		self.offset
	}

	#[must_use]
	pub fn height(&self) -> usize {
		self.height
	}

	/// Header and item rows in the current layout.
	#[must_use]
	pub fn total_rows(&self) -> usize {
		self.total_rows
	}

	/// Row occupied by flattened item `item`.
	#[must_use]
	pub fn row_of(&self, item: usize) -> Option<usize> {
		self.item_rows.get(item).copied()
	}

	/// Scroll back to the top and forget any pending reveal.
	pub fn reset(&mut self) {
		self.offset = 0;
		self.pending = None;
	}

	/// Recompute rows for groups of `group_sizes` items shown in `height`
	/// rows, then apply the pending reveal.
	pub fn layout(&mut self, group_sizes: impl IntoIterator<Item = usize>, height: usize) {
		self.height = height;
		self.item_rows.clear();
		self.group_starts.clear();

		let mut row = 0;
		for size in group_sizes {
			if size == 0 {
				continue;
			}
			row += 1;
			self.group_starts.push(self.item_rows.len());
			self.item_rows.extend(row..row + size);
			row += size;
		}
		self.total_rows = row;

		let max_offset = self.total_rows.saturating_sub(self.height);
		self.offset = self.offset.min(max_offset);

		if let Some(item) = self.pending.take() {
			self.reveal(item);
		}
	}

	/// Nearest placement: scroll the minimum amount that shows the item. The
	/// first item of a group also brings its header into view.
	fn reveal(&mut self, item: usize) {
		let Some(row) = self.row_of(item) else {
			return;
		};
		if self.height == 0 {
			return;
		}

		let top = if self.group_starts.contains(&item) {
			row - 1
		} else {
			row
		};
		if top < self.offset {
			self.offset = top;
		} else if row >= self.offset + self.height {
			self.offset = row + 1 - self.height;
		}
	}
}

impl EnsureVisible for ResultsViewport {
	fn ensure_visible(&mut self, item: usize) {
		self.pending = Some(item);
	}
}
