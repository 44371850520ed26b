// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use serde::{Deserialize, Serialize};

use crate::{
	column::Column,
	error::ColumnError,
	util::{bitvec::BitVec, cowvec::CowVec},
	value::r#type::Type,
};

/// Map storage: contiguous key and value runs held in two child columns
/// that grow in lockstep, with one offset table covering both.
///
/// Invariant: the key and value children always have equal length.
///
/// Offsets are 32-bit: the children hold at most `u32::MAX` entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapContainer {
	keys: Box<Column>,
	values: Box<Column>,
	offsets: CowVec<u32>,
	bitvec: BitVec,
}

impl MapContainer {
	pub fn new(key: &Type, value: &Type) -> Self {
		Self::with_capacity(key, value, 0)
	}

	pub fn with_capacity(key: &Type, value: &Type, capacity: usize) -> Self {
		let mut offsets = CowVec::with_capacity(capacity + 1);
		offsets.push(0);
		Self {
			keys: Box::new(Column::new(key)),
			values: Box::new(Column::new(value)),
			offsets,
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.keys.len(), self.values.len());
		self.bitvec.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bitvec.is_empty()
	}

	pub fn keys(&self) -> &Column {
		&self.keys
	}

	pub fn values(&self) -> &Column {
		&self.values
	}

	/// Append one map entry run. Keys and values must pair up one to one;
	/// a failed check leaves the container untouched.
	pub fn push(&mut self, keys: &Column, values: &Column) -> crate::Result<()> {
		if keys.len() != values.len() {
			return Err(ColumnError::LengthMismatch {
				expected: keys.len(),
				found: values.len(),
			});
		}
		if keys.get_type() != self.keys.get_type() {
			return Err(ColumnError::type_mismatch(self.keys.get_type(), keys.get_type()));
		}
		if values.get_type() != self.values.get_type() {
			return Err(ColumnError::type_mismatch(self.values.get_type(), values.get_type()));
		}

		self.keys.extend_from(keys)?;
		self.values.extend_from(values)?;
		self.offsets.push(self.keys.len() as u32);
		self.bitvec.push(true);
		Ok(())
	}

	pub fn push_undefined(&mut self) {
		self.offsets.push(self.keys.len() as u32);
		self.bitvec.push(false);
	}

	/// Zero-copy slice of the key child for the run at `index`.
	pub fn map_keys(&self, index: usize) -> Option<Column> {
		let (start, end) = self.offset_at(index)?;
		self.keys.slice(start, end - start).ok()
	}

	/// Zero-copy slice of the value child for the run at `index`.
	pub fn map_values(&self, index: usize) -> Option<Column> {
		let (start, end) = self.offset_at(index)?;
		self.values.slice(start, end - start).ok()
	}

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
					self.keys.extend_storage(&other.keys, s, e)?;
					self.values.extend_storage(&other.values, s, e)?;
					self.offsets.push(self.keys.len() as u32);
					self.bitvec.push(true);
				}
				None => self.push_undefined(),
			}
		}
		Ok(())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::Value;

	#[test]
	fn test_push_and_runs() {
		let mut container = MapContainer::new(&Type::Utf8, &Type::Int8);

		container.push(&Column::utf8(vec!["a", "b"]), &Column::int8(vec![1, 2])).unwrap();
		container.push(&Column::utf8(vec!["c"]), &Column::int8(vec![3])).unwrap();

		assert_eq!(container.len(), 2);
		assert_eq!(container.offset_at(0), Some((0, 2)));
		assert_eq!(container.offset_at(1), Some((2, 3)));
		assert_eq!(container.keys().len(), container.values().len());
	}

	#[test]
	fn test_push_length_mismatch_leaves_state() {
		let mut container = MapContainer::new(&Type::Utf8, &Type::Int8);

		let err = container.push(&Column::utf8(vec!["a", "b"]), &Column::int8(vec![1])).unwrap_err();

		assert_eq!(err, ColumnError::LengthMismatch {
			expected: 2,
			found: 1
		});
		assert_eq!(container.len(), 0);
		assert_eq!(container.keys().len(), 0);
	}

	#[test]
	fn test_push_type_mismatch() {
		let mut container = MapContainer::new(&Type::Utf8, &Type::Int8);
		assert!(container.push(&Column::int4(vec![1]), &Column::int8(vec![1])).is_err());
		assert_eq!(container.keys().len(), 0);
	}

	#[test]
	fn test_map_keys_and_values() {
		let mut container = MapContainer::new(&Type::Utf8, &Type::Int4);
		container.push(&Column::utf8(vec!["x", "y"]), &Column::int4(vec![7, 8])).unwrap();

		let keys = container.map_keys(0).unwrap();
		let values = container.map_values(0).unwrap();

		assert_eq!(keys.len(), 2);
		assert_eq!(keys.get_value(1).unwrap(), Value::utf8("y"));
		assert_eq!(values.get_value(0).unwrap(), Value::Int4(7));
	}

	#[test]
	fn test_push_undefined() {
		let mut container = MapContainer::new(&Type::Utf8, &Type::Int4);
		container.push_undefined();

		assert_eq!(container.len(), 1);
		assert!(!container.is_defined(0));
		assert!(container.map_keys(0).is_none());
	}

	#[test]
	fn test_extend_range() {
		let mut a = MapContainer::new(&Type::Utf8, &Type::Int4);
		let mut b = MapContainer::new(&Type::Utf8, &Type::Int4);
		b.push(&Column::utf8(vec!["k"]), &Column::int4(vec![9])).unwrap();
		b.push_undefined();

		a.extend_range(&b, 0, 2).unwrap();

		assert_eq!(a.len(), 2);
		assert_eq!(a.size_at(0), Some(1));
		assert!(!a.is_defined(1));
		assert_eq!(a.keys().len(), a.values().len());
	}
}
