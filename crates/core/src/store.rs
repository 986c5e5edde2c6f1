//! Observable state shared between components.
//!
//! A [`Store`] is owned by a single composition root and handed out by
//! reference; components read it through [`Store::get_snapshot`] and learn
//! about changes by subscribing. It is single-threaded on purpose and
//! performs no locking.

use std::fmt;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&T)>;

pub struct Store<T> {
	value: T,
	listeners: Vec<(SubscriptionId, Listener<T>)>,
	next_id: u64,
}

impl<T> Store<T> {
	pub fn new(value: T) -> Self {
		Self {
			value,
			listeners: Vec::new(),
			next_id: 0,
		}
	}

	/// Borrow the current value.
	pub fn get(&self) -> &T {
		&self.value
	}

	/// Register `listener` to run after every change.
	pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
		let id = SubscriptionId(self.next_id);
		self.next_id += 1;
		self.listeners.push((id, Box::new(listener)));
		id
	}

	/// Remove a listener. Returns `false` if it was not registered.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let before = self.listeners.len();
		self.listeners.retain(|(existing, _)| *existing != id);
		self.listeners.len() != before
	}

	#[must_use]
	pub fn subscriber_count(&self) -> usize {
		self.listeners.len()
	}

	fn notify(&mut self) {
		for (_, listener) in &mut self.listeners {
			listener(&self.value);
		}
	}
}

impl<T: Clone> Store<T> {
	/// Copy of the current value.
	#[must_use]
	pub fn get_snapshot(&self) -> T {
		self.value.clone()
	}
}

impl<T: PartialEq> Store<T> {
	/// Replace the value, notifying subscribers only if it changed.
	pub fn set(&mut self, value: T) -> bool {
		if self.value == value {
			return false;
		}
		self.value = value;
		self.notify();
		true
	}

	/// Derive the next value from the current one.
	pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
		let next = f(&self.value);
		self.set(next)
	}
}

impl<T: Default> Default for Store<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Store")
			.field("value", &self.value)
			.field("subscribers", &self.listeners.len())
			.finish()
	}
}
