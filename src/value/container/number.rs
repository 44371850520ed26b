// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use serde::{Deserialize, Serialize};

use crate::{
	util::{bitvec::BitVec, cowvec::CowVec},
	value::{
		Value,
		is::{IsNumber, Negate},
	},
};

/// Fixed-width numeric column storage: one value slot per position plus a
/// validity bit. Undefined slots hold `T::default()` as a placeholder and
/// are never read back as values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct NumberContainer<T>
where
	T: IsNumber,
{
	values: CowVec<T>,
	bitvec: BitVec,
}

impl<T> NumberContainer<T>
where
	T: IsNumber,
{
	pub fn new(values: Vec<T>, bitvec: BitVec) -> Self {
		debug_assert_eq!(values.len(), bitvec.len());
		Self {
			values: CowVec::new(values),
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: CowVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(values: Vec<T>) -> Self {
		let len = values.len();
		Self {
			values: CowVec::new(values),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.values.len(), self.bitvec.len());
		self.values.len()
	}

	pub fn capacity(&self) -> usize {
		self.values.capacity()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn push(&mut self, value: T) {
		self.values.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.values.push(T::default());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		if self.is_defined(index) {
			self.values.get(index)
		} else {
			None
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self.get(index) {
			Some(&v) => v.into(),
			None => Value::Undefined,
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.bitvec.count_ones() == self.len()
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn values(&self) -> &CowVec<T> {
		&self.values
	}

	pub fn extend_range(&mut self, other: &Self, start: usize, end: usize) {
		for i in start..end {
			match other.get(i) {
				Some(&v) => self.push(v),
				None => self.push_undefined(),
			}
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
		(0..self.len()).map(|i| self.get(i).copied())
	}

	/// New container holding the negation of every defined value in
	/// `[start, end)`; undefined slots carry over.
	pub fn negate(&self, start: usize, end: usize) -> Self
	where
		T: Negate,
	{
		let mut result = Self::with_capacity(end - start);
		for i in start..end {
			match self.get(i) {
				Some(&v) => result.push(v.negate()),
				None => result.push_undefined(),
			}
		}
		result
	}
}

impl<T: IsNumber> Default for NumberContainer<T> {
	fn default() -> Self {
		Self::with_capacity(0)
	}
}
