// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use std::{
	fmt::{self, Debug},
	ops::Deref,
	sync::Arc,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

/// Arc-backed copy-on-write vector.
///
/// `clone` is O(1) and shares the underlying allocation; the first mutation
/// through a shared handle forks the storage. Sliced column views lean on
/// this: they clone the storage handle instead of copying values.
pub struct CowVec<T> {
	inner: Arc<Vec<T>>,
}

impl<T> CowVec<T> {
	pub fn new(data: Vec<T>) -> Self {
		Self {
			inner: Arc::new(data),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			inner: Arc::new(Vec::with_capacity(capacity)),
		}
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.inner.capacity()
	}

	pub fn get(&self, idx: usize) -> Option<&T> {
		self.inner.get(idx)
	}

	pub fn as_slice(&self) -> &[T] {
		self.inner.as_slice()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.inner.iter()
	}

	/// True when another handle shares this allocation.
	pub fn is_shared(&self) -> bool {
		Arc::strong_count(&self.inner) > 1
	}
}

impl<T: Clone> CowVec<T> {
	fn make_mut(&mut self) -> &mut Vec<T> {
		if self.is_shared() {
			trace!(len = self.inner.len(), "forking shared storage");
		}
		Arc::make_mut(&mut self.inner)
	}

	pub fn push(&mut self, value: T) {
		self.make_mut().push(value);
	}

	pub fn set(&mut self, idx: usize, value: T) {
		self.make_mut()[idx] = value;
	}

	pub fn clear(&mut self) {
		self.make_mut().clear();
	}

	pub fn extend_from_slice(&mut self, other: &[T]) {
		self.make_mut().extend_from_slice(other);
	}

	pub fn extend(&mut self, iter: impl Iterator<Item = T>) {
		self.make_mut().extend(iter);
	}

	/// Decompose into the inner Vec, cloning only when the storage is shared.
	pub fn into_vec(self) -> Vec<T> {
		match Arc::try_unwrap(self.inner) {
			Ok(v) => v,
			Err(shared) => shared.as_ref().clone(),
		}
	}
}

impl<T> Clone for CowVec<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<T> Deref for CowVec<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.inner.as_slice()
	}
}

impl<T: Debug> Debug for CowVec<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.inner.iter()).finish()
	}
}

impl<T: PartialEq> PartialEq for CowVec<T> {
	fn eq(&self, other: &Self) -> bool {
		self.inner.as_slice() == other.inner.as_slice()
	}
}

impl<T> Default for CowVec<T> {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl<T> FromIterator<T> for CowVec<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl<T: Serialize> Serialize for CowVec<T> {
	fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
		self.inner.serialize(serializer)
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CowVec<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(Self::new(Vec::deserialize(deserializer)?))
	}
}
