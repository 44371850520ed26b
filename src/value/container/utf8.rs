// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use serde::{Deserialize, Serialize};

use crate::{
	error::ColumnError,
	util::{bitvec::BitVec, cowvec::CowVec},
	value::Value,
};

/// Variable-length text storage: one byte arena plus an offset table of
/// length N+1 marking element boundaries.
///
/// Appends accept raw bytes without validation; decoding to `&str` happens
/// at read time and fails with [`ColumnError::InvalidUtf8`] on bad stored
/// bytes. Writers are expected to store valid UTF-8.
///
/// Offsets are 32-bit: one container addresses at most `u32::MAX` bytes of
/// arena.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	bytes: CowVec<u8>,
	offsets: CowVec<u32>,
	bitvec: BitVec,
}

impl Utf8Container {
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		let mut offsets = CowVec::with_capacity(capacity + 1);
		offsets.push(0);
		Self {
			bytes: CowVec::default(),
			offsets,
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(values: Vec<&str>) -> Self {
		let mut container = Self::with_capacity(values.len());
		for value in values {
			container.push(value);
		}
		container
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.offsets.len(), self.bitvec.len() + 1);
		self.bitvec.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bitvec.is_empty()
	}

	/// Total bytes held in the arena.
	pub fn arena_len(&self) -> usize {
		self.bytes.len()
	}

	pub fn push(&mut self, value: &str) {
		self.push_bytes(value.as_bytes());
	}

	pub fn push_bytes(&mut self, value: &[u8]) {
		self.bytes.extend_from_slice(value);
		self.offsets.push(self.bytes.len() as u32);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.offsets.push(self.bytes.len() as u32);
		self.bitvec.push(false);
	}

	/// Decoded element at `index`; `Ok(None)` when out of range or
	/// undefined.
	pub fn get(&self, index: usize) -> crate::Result<Option<&str>> {
		match self.bytes_at(index) {
			Some(bytes) => match std::str::from_utf8(bytes) {
				Ok(s) => Ok(Some(s)),
				Err(_) => Err(ColumnError::InvalidUtf8 {
					index,
				}),
			},
			None => Ok(None),
		}
	}

	/// Raw stored bytes at `index`, skipping UTF-8 validation.
	pub fn bytes_at(&self, index: usize) -> Option<&[u8]> {
		if !self.is_defined(index) {
			return None;
		}
		let start = self.offsets[index] as usize;
		let end = self.offsets[index + 1] as usize;
		Some(&self.bytes.as_slice()[start..end])
	}

	pub fn get_value(&self, index: usize) -> crate::Result<Value> {
		Ok(match self.get(index)? {
			Some(s) => Value::Utf8(s.to_string()),
			None => Value::Undefined,
		})
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

	pub fn extend_range(&mut self, other: &Self, start: usize, end: usize) {
		for i in start..end {
			match other.bytes_at(i) {
				Some(bytes) => self.push_bytes(bytes),
				None => self.push_undefined(),
			}
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = crate::Result<Option<&str>>> + '_ {
		(0..self.len()).map(|i| self.get(i))
	}
}

impl Default for Utf8Container {
	fn default() -> Self {
		Self::new()
	}
}
