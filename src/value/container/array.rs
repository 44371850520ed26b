// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use serde::{Deserialize, Serialize};

use crate::{
	column::Column,
	util::{bitvec::BitVec, cowvec::CowVec},
	value::r#type::Type,
};

/// Variable-length list storage: all elements concatenated into one child
/// column, with an offset table of length N+1 mapping each outer position
/// to its `[start, end)` run in the child.
///
/// An undefined position repeats the previous boundary, so its run is empty.
///
/// Offsets are 32-bit: the child column holds at most `u32::MAX` values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayContainer {
	child: Box<Column>,
	offsets: CowVec<u32>,
	bitvec: BitVec,
}

impl ArrayContainer {
	pub fn new(element: &Type) -> Self {
		Self::with_capacity(element, 0)
	}

	pub fn with_capacity(element: &Type, capacity: usize) -> Self {
		let mut offsets = CowVec::with_capacity(capacity + 1);
		offsets.push(0);
		Self {
			child: Box::new(Column::new(element)),
			offsets,
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.offsets.len(), self.bitvec.len() + 1);
		self.bitvec.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bitvec.is_empty()
	}

	pub fn child(&self) -> &Column {
		&self.child
	}

	/// Append one list element: the values of `element` become the run for
	/// the new outer position.
	pub fn push(&mut self, element: &Column) -> crate::Result<()> {
		self.child.extend_from(element)?;
		self.offsets.push(self.child.len() as u32);
		self.bitvec.push(true);
		Ok(())
	}

	pub fn push_undefined(&mut self) {
		self.offsets.push(self.child.len() as u32);
		self.bitvec.push(false);
	}

	/// Zero-copy slice of the child column over the run at `index`; `None`
	/// when out of range or undefined.
	pub fn get(&self, index: usize) -> Option<Column> {
		let (start, end) = self.offset_at(index)?;
		self.child.slice(start, end - start).ok()
	}

	/// `[start, end)` run of the element at `index` within the child.
	pub fn offset_at(&self, index: usize) -> Option<(usize, usize)> {
		if !self.is_defined(index) {
			return None;
		}
		Some((self.offsets[index] as usize, self.offsets[index + 1] as usize))
	}

	pub fn size_at(&self, index: usize) -> Option<usize> {
		self.offset_at(index).map(|(start, end)| end - start)
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

	pub fn extend_range(&mut self, other: &Self, start: usize, end: usize) -> crate::Result<()> {
		for i in start..end {
			match other.offset_at(i) {
				Some((s, e)) => {
					self.child.extend_storage(&other.child, s, e)?;
					self.offsets.push(self.child.len() as u32);
					self.bitvec.push(true);
				}
				None => self.push_undefined(),
			}
		}
		Ok(())
	}
}
