// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
	column::Column,
	error::ColumnError,
	util::bitvec::BitVec,
	value::r#type::RowFields,
};

/// Row storage: one child column per named field, plus row-level validity
/// and an explicit logical length.
///
/// Rows are built top-down: `set_length` declares the row count before the
/// children are filled, and `set_child` swaps a fully built child in later.
/// An undefined row does not force its children to be undefined at that
/// position; children stay independently addressable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowContainer {
	fields: Arc<RowFields>,
	children: Vec<Column>,
	bitvec: BitVec,
	length: usize,
}

impl RowContainer {
	pub fn new(fields: Arc<RowFields>) -> Self {
		let children = fields.types().iter().map(Column::new).collect();
		Self {
			fields,
			children,
			bitvec: BitVec::new(),
			length: 0,
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.bitvec.len(), self.length);
		self.length
	}

	pub fn is_empty(&self) -> bool {
		self.length == 0
	}

	pub fn fields(&self) -> &Arc<RowFields> {
		&self.fields
	}

	pub fn children_size(&self) -> usize {
		self.children.len()
	}

	pub fn child_at(&self, index: usize) -> Option<&Column> {
		self.children.get(index)
	}

	pub fn child_by_name(&self, name: &str) -> Option<&Column> {
		self.children.get(self.fields.child_index(name)?)
	}

	/// Replace the child at `index`. The replacement must match the field's
	/// declared type and, unless empty, the declared row length.
	pub fn set_child(&mut self, index: usize, column: Column) -> crate::Result<()> {
		let expected = self.fields.child_at(index).ok_or(ColumnError::OutOfRange {
			index,
			length: self.children.len(),
		})?;
		if column.get_type() != expected {
			return Err(ColumnError::type_mismatch(expected, column.get_type()));
		}
		// An empty child is allowed so rows can be assembled top-down.
		if !column.is_empty() && column.len() != self.length {
			return Err(ColumnError::LengthMismatch {
				expected: self.length,
				found: column.len(),
			});
		}
		debug!(field = self.fields.name_of(index), "replacing row child");
		self.children[index] = column;
		Ok(())
	}

	/// Grow the row to `length` positions, all defined. Shrinking is not
	/// supported.
	pub fn set_length(&mut self, length: usize) -> crate::Result<()> {
		if length < self.length {
			return Err(ColumnError::LengthMismatch {
				expected: self.length,
				found: length,
			});
		}
		while self.length < length {
			self.bitvec.push(true);
			self.length += 1;
		}
		Ok(())
	}

	pub fn set_defined(&mut self, index: usize, defined: bool) -> crate::Result<()> {
		if index >= self.length {
			return Err(ColumnError::out_of_range(index, self.length));
		}
		self.bitvec.set(index, defined);
		Ok(())
	}

	pub fn push_undefined(&mut self) {
		self.bitvec.push(false);
		self.length += 1;
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.length && self.bitvec.get(index)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.bitvec.count_ones() == self.length
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn extend_range(&mut self, other: &Self, start: usize, end: usize) -> crate::Result<()> {
		if self.fields != other.fields {
			return Err(ColumnError::type_mismatch(
				format!("row with fields {:?}", self.fields.names()),
				format!("row with fields {:?}", other.fields.names()),
			));
		}
		for (child, other_child) in self.children.iter_mut().zip(other.children.iter()) {
			child.extend_storage(other_child, start, end)?;
		}
		for i in start..end {
			self.bitvec.push(other.is_defined(i));
			self.length += 1;
		}
		Ok(())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::{Type, Value};

	fn person_fields() -> Arc<RowFields> {
		match Type::row(vec![("name", Type::Utf8), ("age", Type::Int4)]).unwrap() {
			Type::Row(fields) => fields,
			_ => unreachable!(),
		}
	}

	#[test]
	fn test_new_seeds_children() {
		let container = RowContainer::new(person_fields());

		assert_eq!(container.children_size(), 2);
		assert_eq!(container.child_at(0).unwrap().get_type(), &Type::Utf8);
		assert_eq!(container.child_at(1).unwrap().get_type(), &Type::Int4);
		assert!(container.child_at(2).is_none());
	}

	#[test]
	fn test_top_down_construction() {
		let mut container = RowContainer::new(person_fields());

		container.set_length(2).unwrap();
		container.set_child(0, Column::utf8(vec!["ada", "bob"])).unwrap();
		container.set_child(1, Column::int4(vec![36, 41])).unwrap();

		assert_eq!(container.len(), 2);
		assert!(container.is_defined(0));
		assert_eq!(container.child_by_name("age").unwrap().get_value(1).unwrap(), Value::Int4(41));
	}

	#[test]
	fn test_set_child_type_mismatch() {
		let mut container = RowContainer::new(person_fields());
		assert!(container.set_child(0, Column::int4(vec![1])).is_err());
	}

	#[test]
	fn test_set_child_out_of_range() {
		let mut container = RowContainer::new(person_fields());
		let err = container.set_child(5, Column::int4(vec![])).unwrap_err();
		assert_eq!(err, ColumnError::OutOfRange {
			index: 5,
			length: 2
		});
	}

	#[test]
	fn test_set_child_length_mismatch() {
		let mut container = RowContainer::new(person_fields());
		container.set_length(3).unwrap();

		let err = container.set_child(1, Column::int4(vec![1, 2])).unwrap_err();
		assert_eq!(err, ColumnError::LengthMismatch {
			expected: 3,
			found: 2
		});

		// an empty replacement stays allowed for top-down construction
		container.set_child(1, Column::new(&Type::Int4)).unwrap();
	}

	#[test]
	fn test_set_length_cannot_shrink() {
		let mut container = RowContainer::new(person_fields());
		container.set_length(3).unwrap();
		assert!(container.set_length(1).is_err());
		assert_eq!(container.len(), 3);
	}

	#[test]
	fn test_set_defined_leaves_children_addressable() {
		let mut container = RowContainer::new(person_fields());
		container.set_length(2).unwrap();
		container.set_child(1, Column::int4(vec![1, 2])).unwrap();

		container.set_defined(0, false).unwrap();

		assert!(!container.is_defined(0));
		// row-level undefined does not propagate into the child
		assert_eq!(container.child_at(1).unwrap().get_value(0).unwrap(), Value::Int4(1));
	}

	#[test]
	fn test_push_undefined() {
		let mut container = RowContainer::new(person_fields());
		container.push_undefined();

		assert_eq!(container.len(), 1);
		assert!(!container.is_defined(0));
	}
}
