// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use serde::{Deserialize, Serialize};

use crate::{
	error::ColumnError,
	util::bitvec::BitVec,
	value::{
		container::{ArrayContainer, BoolContainer, MapContainer, NumberContainer, RowContainer, Utf8Container},
		r#type::Type,
	},
};

/// Typed column storage: one variant per supported kind.
///
/// The kind set is closed, so dispatch is a plain match instead of an open
/// trait-object hierarchy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Int1(NumberContainer<i8>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	Float4(NumberContainer<f32>),
	Float8(NumberContainer<f64>),
	Utf8(Utf8Container),
	Array(ArrayContainer),
	Map(MapContainer),
	Row(RowContainer),
}

impl ColumnData {
	/// Construct empty storage for `ty`, pre-seeding composite children
	/// from the descriptor's child types.
	pub fn with_capacity(ty: &Type, capacity: usize) -> Self {
		match ty {
			Type::Bool => ColumnData::Bool(BoolContainer::with_capacity(capacity)),
			Type::Int1 => ColumnData::Int1(NumberContainer::with_capacity(capacity)),
			Type::Int2 => ColumnData::Int2(NumberContainer::with_capacity(capacity)),
			Type::Int4 => ColumnData::Int4(NumberContainer::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(NumberContainer::with_capacity(capacity)),
			Type::Float4 => ColumnData::Float4(NumberContainer::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(NumberContainer::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Utf8Container::with_capacity(capacity)),
			Type::Array(element) => ColumnData::Array(ArrayContainer::with_capacity(element, capacity)),
			Type::Map {
				key,
				value,
			} => ColumnData::Map(MapContainer::with_capacity(key, value, capacity)),
			Type::Row(fields) => ColumnData::Row(RowContainer::new(fields.clone())),
		}
	}

	pub fn kind_name(&self) -> &'static str {
		match self {
			ColumnData::Bool(_) => "bool",
			ColumnData::Int1(_) => "int1",
			ColumnData::Int2(_) => "int2",
			ColumnData::Int4(_) => "int4",
			ColumnData::Int8(_) => "int8",
			ColumnData::Float4(_) => "float4",
			ColumnData::Float8(_) => "float8",
			ColumnData::Utf8(_) => "utf8",
			ColumnData::Array(_) => "array",
			ColumnData::Map(_) => "map",
			ColumnData::Row(_) => "row",
		}
	}

	/// Storage length, independent of any view window above it.
	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(container) => container.len(),
			ColumnData::Int1(container) => container.len(),
			ColumnData::Int2(container) => container.len(),
			ColumnData::Int4(container) => container.len(),
			ColumnData::Int8(container) => container.len(),
			ColumnData::Float4(container) => container.len(),
			ColumnData::Float8(container) => container.len(),
			ColumnData::Utf8(container) => container.len(),
			ColumnData::Array(container) => container.len(),
			ColumnData::Map(container) => container.len(),
			ColumnData::Row(container) => container.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, index: usize) -> bool {
		match self {
			ColumnData::Bool(container) => container.is_defined(index),
			ColumnData::Int1(container) => container.is_defined(index),
			ColumnData::Int2(container) => container.is_defined(index),
			ColumnData::Int4(container) => container.is_defined(index),
			ColumnData::Int8(container) => container.is_defined(index),
			ColumnData::Float4(container) => container.is_defined(index),
			ColumnData::Float8(container) => container.is_defined(index),
			ColumnData::Utf8(container) => container.is_defined(index),
			ColumnData::Array(container) => container.is_defined(index),
			ColumnData::Map(container) => container.is_defined(index),
			ColumnData::Row(container) => container.is_defined(index),
		}
	}

	pub fn bitvec(&self) -> &BitVec {
		match self {
			ColumnData::Bool(container) => container.bitvec(),
			ColumnData::Int1(container) => container.bitvec(),
			ColumnData::Int2(container) => container.bitvec(),
			ColumnData::Int4(container) => container.bitvec(),
			ColumnData::Int8(container) => container.bitvec(),
			ColumnData::Float4(container) => container.bitvec(),
			ColumnData::Float8(container) => container.bitvec(),
			ColumnData::Utf8(container) => container.bitvec(),
			ColumnData::Array(container) => container.bitvec(),
			ColumnData::Map(container) => container.bitvec(),
			ColumnData::Row(container) => container.bitvec(),
		}
	}

	pub fn push_undefined(&mut self) {
		match self {
			ColumnData::Bool(container) => container.push_undefined(),
			ColumnData::Int1(container) => container.push_undefined(),
			ColumnData::Int2(container) => container.push_undefined(),
			ColumnData::Int4(container) => container.push_undefined(),
			ColumnData::Int8(container) => container.push_undefined(),
			ColumnData::Float4(container) => container.push_undefined(),
			ColumnData::Float8(container) => container.push_undefined(),
			ColumnData::Utf8(container) => container.push_undefined(),
			ColumnData::Array(container) => container.push_undefined(),
			ColumnData::Map(container) => container.push_undefined(),
			ColumnData::Row(container) => container.push_undefined(),
		}
	}

	/// Append positions `[start, end)` of `other`'s storage onto `self`.
	/// Out-of-range positions append as undefined.
	pub fn extend_range(&mut self, other: &Self, start: usize, end: usize) -> crate::Result<()> {
		match (self, other) {
			(ColumnData::Bool(target), ColumnData::Bool(source)) => {
				target.extend_range(source, start, end);
			}
			(ColumnData::Int1(target), ColumnData::Int1(source)) => {
				target.extend_range(source, start, end);
			}
			(ColumnData::Int2(target), ColumnData::Int2(source)) => {
				target.extend_range(source, start, end);
			}
			(ColumnData::Int4(target), ColumnData::Int4(source)) => {
				target.extend_range(source, start, end);
			}
			(ColumnData::Int8(target), ColumnData::Int8(source)) => {
				target.extend_range(source, start, end);
			}
			(ColumnData::Float4(target), ColumnData::Float4(source)) => {
				target.extend_range(source, start, end);
			}
			(ColumnData::Float8(target), ColumnData::Float8(source)) => {
				target.extend_range(source, start, end);
			}
			(ColumnData::Utf8(target), ColumnData::Utf8(source)) => {
				target.extend_range(source, start, end);
			}
			(ColumnData::Array(target), ColumnData::Array(source)) => {
				target.extend_range(source, start, end)?;
			}
			(ColumnData::Map(target), ColumnData::Map(source)) => {
				target.extend_range(source, start, end)?;
			}
			(ColumnData::Row(target), ColumnData::Row(source)) => {
				target.extend_range(source, start, end)?;
			}
			(target, source) => {
				return Err(ColumnError::type_mismatch(target.kind_name(), source.kind_name()));
			}
		}
		Ok(())
	}
}

/// Direct access to the contiguous value buffer of a numeric column.
pub trait AsSlice<T> {
	fn as_slice(&self) -> &[T];
}

macro_rules! impl_as_slice {
	($t:ty, $variant:ident) => {
		impl AsSlice<$t> for ColumnData {
			fn as_slice(&self) -> &[$t] {
				match self {
					ColumnData::$variant(container) => container.values().as_slice(),
					other => panic!(
						"called `as_slice::<{}>()` on a {} column",
						stringify!($t),
						other.kind_name()
					),
				}
			}
		}
	};
}

impl_as_slice!(i8, Int1);
impl_as_slice!(i16, Int2);
impl_as_slice!(i32, Int4);
impl_as_slice!(i64, Int8);
impl_as_slice!(f32, Float4);
impl_as_slice!(f64, Float8);
