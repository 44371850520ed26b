// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use serde::{Deserialize, Serialize};

use crate::{
	error::ColumnError,
	value::{
		Value,
		container::{BoolContainer, NumberContainer, Utf8Container},
		r#type::Type,
	},
};

pub mod data;
pub mod push;

pub use data::{AsSlice, ColumnData};
pub use push::Push;

/// A logical sequence of typed values with validity tracking.
///
/// A column is either a root, which owns its storage and accepts appends,
/// or a view produced by [`Column::slice`]: a window (`offset`, `length`)
/// over storage shared with its parent. Views are read-only; mutating
/// through one fails with [`ColumnError::NotAppendable`]. Storage is
/// copy-on-write, so slicing never copies values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
	ty: Type,
	data: ColumnData,
	offset: usize,
	length: usize,
	view: bool,
}

impl Column {
	pub fn new(ty: &Type) -> Self {
		Self::with_capacity(ty, 0)
	}

	pub fn with_capacity(ty: &Type, capacity: usize) -> Self {
		let data = ColumnData::with_capacity(ty, capacity);
		let length = data.len();
		Self {
			ty: ty.clone(),
			data,
			offset: 0,
			length,
			view: false,
		}
	}

	fn root(ty: Type, data: ColumnData) -> Self {
		let length = data.len();
		Self {
			ty,
			data,
			offset: 0,
			length,
			view: false,
		}
	}

	pub fn bool(values: Vec<bool>) -> Self {
		Self::root(Type::Bool, ColumnData::Bool(BoolContainer::from_vec(values)))
	}

	pub fn int1(values: Vec<i8>) -> Self {
		Self::root(Type::Int1, ColumnData::Int1(NumberContainer::from_vec(values)))
	}

	pub fn int2(values: Vec<i16>) -> Self {
		Self::root(Type::Int2, ColumnData::Int2(NumberContainer::from_vec(values)))
	}

	pub fn int4(values: Vec<i32>) -> Self {
		Self::root(Type::Int4, ColumnData::Int4(NumberContainer::from_vec(values)))
	}

	pub fn int8(values: Vec<i64>) -> Self {
		Self::root(Type::Int8, ColumnData::Int8(NumberContainer::from_vec(values)))
	}

	pub fn float4(values: Vec<f32>) -> Self {
		Self::root(Type::Float4, ColumnData::Float4(NumberContainer::from_vec(values)))
	}

	pub fn float8(values: Vec<f64>) -> Self {
		Self::root(Type::Float8, ColumnData::Float8(NumberContainer::from_vec(values)))
	}

	pub fn utf8(values: Vec<&str>) -> Self {
		Self::root(Type::Utf8, ColumnData::Utf8(Utf8Container::from_vec(values)))
	}

	pub fn get_type(&self) -> &Type {
		&self.ty
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}

	pub fn len(&self) -> usize {
		self.length
	}

	pub fn is_empty(&self) -> bool {
		self.length == 0
	}

	/// Start of this column's window within the underlying storage; zero
	/// for a root column.
	pub fn offset(&self) -> usize {
		self.offset
	}

	pub fn is_view(&self) -> bool {
		self.view
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.length && self.data.is_defined(self.offset + index)
	}

	pub fn undefined_count(&self) -> usize {
		(0..self.length).filter(|&i| !self.is_defined(i)).count()
	}

	pub fn is_fully_defined(&self) -> bool {
		self.undefined_count() == 0
	}

	fn ensure_appendable(&self) -> crate::Result<()> {
		if self.view {
			return Err(ColumnError::NotAppendable);
		}
		Ok(())
	}

	fn check_index(&self, index: usize) -> crate::Result<()> {
		if index >= self.length {
			return Err(ColumnError::out_of_range(index, self.length));
		}
		Ok(())
	}

	/// Append one scalar value; the value's kind must match the column's.
	pub fn push_value(&mut self, value: Value) -> crate::Result<()> {
		if value.is_undefined() {
			return self.push_undefined();
		}
		self.ensure_appendable()?;
		match (&mut self.data, value) {
			(ColumnData::Bool(container), Value::Boolean(v)) => container.push(v),
			(ColumnData::Int1(container), Value::Int1(v)) => container.push(v),
			(ColumnData::Int2(container), Value::Int2(v)) => container.push(v),
			(ColumnData::Int4(container), Value::Int4(v)) => container.push(v),
			(ColumnData::Int8(container), Value::Int8(v)) => container.push(v),
			(ColumnData::Float4(container), Value::Float4(v)) => container.push(v),
			(ColumnData::Float8(container), Value::Float8(v)) => container.push(v),
			(ColumnData::Utf8(container), Value::Utf8(v)) => container.push(&v),
			(_, value) => {
				let found = value.get_type().map(|t| t.to_string()).unwrap_or_default();
				return Err(ColumnError::type_mismatch(&self.ty, found));
			}
		}
		self.length += 1;
		Ok(())
	}

	pub fn push_undefined(&mut self) -> crate::Result<()> {
		self.ensure_appendable()?;
		self.data.push_undefined();
		self.length += 1;
		Ok(())
	}

	/// Append one list element to an array column.
	pub fn push_list(&mut self, element: &Column) -> crate::Result<()> {
		self.ensure_appendable()?;
		match &mut self.data {
			ColumnData::Array(container) => {
				container.push(element)?;
				self.length += 1;
				Ok(())
			}
			_ => Err(ColumnError::unsupported_operation("push_list", &self.ty)),
		}
	}

	/// Append one key/value run to a map column.
	pub fn push_entries(&mut self, keys: &Column, values: &Column) -> crate::Result<()> {
		self.ensure_appendable()?;
		match &mut self.data {
			ColumnData::Map(container) => {
				container.push(keys, values)?;
				self.length += 1;
				Ok(())
			}
			_ => Err(ColumnError::unsupported_operation("push_entries", &self.ty)),
		}
	}

	/// Append every visible value of `other`, which must have the same
	/// type.
	pub fn extend_from(&mut self, other: &Column) -> crate::Result<()> {
		self.ensure_appendable()?;
		if other.ty != self.ty {
			return Err(ColumnError::type_mismatch(&self.ty, &other.ty));
		}
		self.extend_storage(other, other.offset, other.offset + other.length)
	}

	pub(crate) fn extend_storage(&mut self, other: &Column, start: usize, end: usize) -> crate::Result<()> {
		self.data.extend_range(&other.data, start, end)?;
		self.length = self.data.len();
		Ok(())
	}

	/// Scalar value at `index`. Undefined positions read back as
	/// [`Value::Undefined`]; callers distinguishing stored defaults from
	/// undefined should check [`Column::is_defined`] first.
	pub fn get_value(&self, index: usize) -> crate::Result<Value> {
		self.check_index(index)?;
		let storage = self.offset + index;
		match &self.data {
			ColumnData::Bool(container) => Ok(container.get_value(storage)),
			ColumnData::Int1(container) => Ok(container.get_value(storage)),
			ColumnData::Int2(container) => Ok(container.get_value(storage)),
			ColumnData::Int4(container) => Ok(container.get_value(storage)),
			ColumnData::Int8(container) => Ok(container.get_value(storage)),
			ColumnData::Float4(container) => Ok(container.get_value(storage)),
			ColumnData::Float8(container) => Ok(container.get_value(storage)),
			ColumnData::Utf8(container) => container.get_value(storage),
			_ => Err(ColumnError::unsupported_operation("get_value", &self.ty)),
		}
	}

	/// Zero-copy view over `[offset, offset + length)` of this column.
	/// Slices of slices compose: offsets add up, storage stays shared.
	pub fn slice(&self, offset: usize, length: usize) -> crate::Result<Column> {
		let end = offset.checked_add(length).ok_or(ColumnError::OutOfRange {
			index: usize::MAX,
			length: self.length,
		})?;
		if end > self.length {
			return Err(ColumnError::out_of_range(end, self.length));
		}
		Ok(Column {
			ty: self.ty.clone(),
			data: self.data.clone(),
			offset: self.offset + offset,
			length,
			view: true,
		})
	}

	/// Logically deep copy. Storage is copy-on-write, so this is O(1) and
	/// the result observes no subsequent mutation of the original or its
	/// children.
	pub fn deep_copy(&self) -> Column {
		self.clone()
	}

	/// New column with every defined value negated; undefined positions
	/// carry over. Numeric columns only.
	pub fn negate(&self) -> crate::Result<Column> {
		let start = self.offset;
		let end = self.offset + self.length;
		let data = match &self.data {
			ColumnData::Int1(container) => ColumnData::Int1(container.negate(start, end)),
			ColumnData::Int2(container) => ColumnData::Int2(container.negate(start, end)),
			ColumnData::Int4(container) => ColumnData::Int4(container.negate(start, end)),
			ColumnData::Int8(container) => ColumnData::Int8(container.negate(start, end)),
			ColumnData::Float4(container) => ColumnData::Float4(container.negate(start, end)),
			ColumnData::Float8(container) => ColumnData::Float8(container.negate(start, end)),
			_ => return Err(ColumnError::unsupported_operation("negate", &self.ty)),
		};
		Ok(Self::root(self.ty.clone(), data))
	}

	/// List element at `index` of an array column, as a zero-copy child
	/// slice; `None` when the position is undefined.
	pub fn list_at(&self, index: usize) -> crate::Result<Option<Column>> {
		self.check_index(index)?;
		match &self.data {
			ColumnData::Array(container) => Ok(container.get(self.offset + index)),
			_ => Err(ColumnError::unsupported_operation("list_at", &self.ty)),
		}
	}

	/// Key run at `index` of a map column, as a zero-copy child slice.
	pub fn map_keys(&self, index: usize) -> crate::Result<Option<Column>> {
		self.check_index(index)?;
		match &self.data {
			ColumnData::Map(container) => Ok(container.map_keys(self.offset + index)),
			_ => Err(ColumnError::unsupported_operation("map_keys", &self.ty)),
		}
	}

	/// Value run at `index` of a map column, as a zero-copy child slice.
	pub fn map_values(&self, index: usize) -> crate::Result<Option<Column>> {
		self.check_index(index)?;
		match &self.data {
			ColumnData::Map(container) => Ok(container.map_values(self.offset + index)),
			_ => Err(ColumnError::unsupported_operation("map_values", &self.ty)),
		}
	}

	/// `[start, end)` run of the element at `index` within the child
	/// column of an array or map.
	pub fn offset_at(&self, index: usize) -> crate::Result<Option<(usize, usize)>> {
		self.check_index(index)?;
		match &self.data {
			ColumnData::Array(container) => Ok(container.offset_at(self.offset + index)),
			ColumnData::Map(container) => Ok(container.offset_at(self.offset + index)),
			_ => Err(ColumnError::unsupported_operation("offset_at", &self.ty)),
		}
	}

	pub fn size_at(&self, index: usize) -> crate::Result<Option<usize>> {
		self.check_index(index)?;
		match &self.data {
			ColumnData::Array(container) => Ok(container.size_at(self.offset + index)),
			ColumnData::Map(container) => Ok(container.size_at(self.offset + index)),
			_ => Err(ColumnError::unsupported_operation("size_at", &self.ty)),
		}
	}

	/// Field child `index` of a row column, windowed to this column's
	/// view. Cheap: child storage is shared copy-on-write.
	pub fn child_at(&self, index: usize) -> crate::Result<Column> {
		match &self.data {
			ColumnData::Row(container) => {
				let child = container.child_at(index).ok_or(ColumnError::OutOfRange {
					index,
					length: container.children_size(),
				})?;
				if self.view {
					return child.slice(self.offset, self.length);
				}
				Ok(child.clone())
			}
			_ => Err(ColumnError::unsupported_operation("child_at", &self.ty)),
		}
	}

	pub fn children_size(&self) -> crate::Result<usize> {
		match &self.data {
			ColumnData::Row(container) => Ok(container.children_size()),
			_ => Err(ColumnError::unsupported_operation("children_size", &self.ty)),
		}
	}

	/// Replace field child `index` of a row column.
	pub fn set_child(&mut self, index: usize, column: Column) -> crate::Result<()> {
		self.ensure_appendable()?;
		match &mut self.data {
			ColumnData::Row(container) => container.set_child(index, column),
			_ => Err(ColumnError::unsupported_operation("set_child", &self.ty)),
		}
	}

	/// Grow a row column to `length` positions ahead of its children.
	pub fn set_length(&mut self, length: usize) -> crate::Result<()> {
		self.ensure_appendable()?;
		match &mut self.data {
			ColumnData::Row(container) => {
				container.set_length(length)?;
				self.length = length;
				Ok(())
			}
			_ => Err(ColumnError::unsupported_operation("set_length", &self.ty)),
		}
	}

	/// Flip row-level validity at `index` of a row column.
	pub fn set_defined(&mut self, index: usize, defined: bool) -> crate::Result<()> {
		self.ensure_appendable()?;
		self.check_index(index)?;
		match &mut self.data {
			ColumnData::Row(container) => container.set_defined(index, defined),
			_ => Err(ColumnError::unsupported_operation("set_defined", &self.ty)),
		}
	}

	/// Contiguous value buffer of this column's window. Panics on kind
	/// mismatch, like indexing.
	pub fn as_slice<T>(&self) -> &[T]
	where
		ColumnData: AsSlice<T>,
	{
		&AsSlice::as_slice(&self.data)[self.offset..self.offset + self.length]
	}
}
