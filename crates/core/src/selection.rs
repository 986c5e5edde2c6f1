//! Keyboard selection over the flattened result list.
//!
//! Transitions are pure functions of the current index and the list length.
//! Scrolling is a side effect owned by the rendering surface and is reached
//! through the [`EnsureVisible`] capability.

/// Discrete user intents, independent of which physical keys produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
	MoveDown,
	MoveUp,
	/// The query text was edited; carries the full new text.
	QueryChanged(String),
	Commit,
	Cancel,
}

/// Capability to scroll a flattened item into view.
///
/// Implementations should use "nearest" placement: scroll the minimum amount
/// needed to show the item fully, and do nothing when it already is.
pub trait EnsureVisible {
	fn ensure_visible(&mut self, item: usize);
}

/// [`EnsureVisible`] for surfaces without a scrollable container.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScroll;

impl EnsureVisible for NoScroll {
	fn ensure_visible(&mut self, _item: usize) {}
}

impl<T: EnsureVisible + ?Sized> EnsureVisible for &mut T {
	fn ensure_visible(&mut self, item: usize) {
		(**self).ensure_visible(item);
	}
}

/// Tracks the selected offset into the flattened list.
///
/// The offset is always `0` for an empty list and never exceeds `len - 1`
/// otherwise; there is no wraparound at either end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionController {
	selected: usize,
}

impl SelectionController {
	#[must_use]
	pub fn selected(&self) -> usize {
		self.selected
	}

	/// Move one item down, clamping at the last item. Returns whether the
	/// selection changed.
	pub fn move_down(&mut self, len: usize) -> bool {
		let next = (self.selected + 1).min(len.saturating_sub(1));
		self.set(next)
	}

	/// Move one item up, clamping at the first item.
	pub fn move_up(&mut self) -> bool {
		let next = self.selected.saturating_sub(1);
		self.set(next)
	}

	/// Return to the first item; used whenever the result list is replaced.
	pub fn reset(&mut self) -> bool {
		self.set(0)
	}

	fn set(&mut self, next: usize) -> bool {
		let changed = next != self.selected;
		self.selected = next;
		changed
	}
}
