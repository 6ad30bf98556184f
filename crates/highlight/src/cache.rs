use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// Pool of host resources keyed by style.
///
/// Resources are created on first use and live until a release pass finds
/// them outside the active set.
#[derive(Debug)]
pub struct DecorationTypeCache<K, T> {
	entries: FxHashMap<K, T>,
}

impl<K, T> Default for DecorationTypeCache<K, T> {
	fn default() -> Self {
		Self {
			entries: FxHashMap::default(),
		}
	}
}

impl<K: Copy + Eq + Hash, T> DecorationTypeCache<K, T> {
	/// Creates an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of live resources.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no resource is live.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns true if a resource exists for `key`.
	pub fn contains(&self, key: &K) -> bool {
		self.entries.contains_key(key)
	}

	/// Returns the resource for `key` without creating it.
	pub fn get(&self, key: &K) -> Option<&T> {
		self.entries.get(key)
	}

	/// Returns the resource for `key`, creating it on first use.
	///
	/// A failed creation leaves the cache unchanged.
	pub fn resolve<E>(&mut self, key: K, create: impl FnOnce(&K) -> Result<T, E>) -> Result<&T, E> {
		use std::collections::hash_map::Entry;

		match self.entries.entry(key) {
			Entry::Occupied(entry) => Ok(entry.into_mut()),
			Entry::Vacant(entry) => {
				let value = create(&key)?;
				Ok(entry.insert(value))
			}
		}
	}

	/// Disposes every resource whose key is not in `active`.
	///
	/// Returns the number of resources released.
	pub fn release_unused(&mut self, active: &FxHashSet<K>, mut dispose: impl FnMut(K, T)) -> usize {
		let stale: Vec<K> = self.entries.keys().filter(|key| !active.contains(*key)).copied().collect();
		for key in &stale {
			if let Some(value) = self.entries.remove(key) {
				dispose(*key, value);
			}
		}
		stale.len()
	}

	/// Disposes every resource.
	pub fn dispose_all(&mut self, mut dispose: impl FnMut(K, T)) {
		for (key, value) in self.entries.drain() {
			dispose(key, value);
		}
	}
}
