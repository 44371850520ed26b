// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use serde::{Deserialize, Serialize};

use crate::{util::bitvec::BitVec, value::Value};

/// Boolean column storage, bit-packed on both sides: one bitvec for the
/// values, one for validity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoolContainer {
	data: BitVec,
	bitvec: BitVec,
}

impl BoolContainer {
	pub fn new(data: BitVec, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data,
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: BitVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(values: Vec<bool>) -> Self {
		let len = values.len();
		Self {
			data: BitVec::from_slice(&values),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.data.len(), self.bitvec.len());
		self.data.len()
	}

	pub fn capacity(&self) -> usize {
		self.data.capacity()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: bool) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(false);
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		if self.is_defined(index) {
			Some(self.data.get(index))
		} else {
			None
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self.get(index) {
			Some(v) => Value::Boolean(v),
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

	pub fn data(&self) -> &BitVec {
		&self.data
	}

	pub fn extend_range(&mut self, other: &Self, start: usize, end: usize) {
		for i in start..end {
			match other.get(i) {
				Some(v) => self.push(v),
				None => self.push_undefined(),
			}
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
		(0..self.len()).map(|i| self.get(i))
	}
}

impl Default for BoolContainer {
	fn default() -> Self {
		Self::with_capacity(0)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_from_vec() {
		let container = BoolContainer::from_vec(vec![true, false, true]);

		assert_eq!(container.len(), 3);
		assert_eq!(container.get(0), Some(true));
		assert_eq!(container.get(1), Some(false));
		assert!(container.is_fully_defined());
	}

	#[test]
	fn test_push_and_push_undefined() {
		let mut container = BoolContainer::with_capacity(3);

		container.push(true);
		container.push_undefined();
		container.push(false);

		assert_eq!(container.len(), 3);
		assert_eq!(container.get(0), Some(true));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get(2), Some(false));
	}

	#[test]
	fn test_get_value() {
		let mut container = BoolContainer::from_vec(vec![true]);
		container.push_undefined();

		assert_eq!(container.get_value(0), Value::Boolean(true));
		assert_eq!(container.get_value(1), Value::Undefined);
	}

	#[test]
	fn test_extend_range() {
		let mut target = BoolContainer::from_vec(vec![true]);
		let mut source = BoolContainer::from_vec(vec![false, true]);
		source.push_undefined();

		target.extend_range(&source, 0, 3);

		assert_eq!(target.len(), 4);
		assert_eq!(target.get(1), Some(false));
		assert_eq!(target.get(2), Some(true));
		assert_eq!(target.get(3), None);
	}

	#[test]
	fn test_iter() {
		let mut container = BoolContainer::from_vec(vec![true, false]);
		container.push_undefined();

		let collected: Vec<Option<bool>> = container.iter().collect();
		assert_eq!(collected, vec![Some(true), Some(false), None]);
	}
}
