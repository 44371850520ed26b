// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use crate::{column::Column, value::Value};

/// Appending a native scalar to a column without going through [`Value`]
/// at the call site.
pub trait Push<T> {
	fn push(&mut self, value: T) -> crate::Result<()>;
}

impl Column {
	pub fn push<T>(&mut self, value: T) -> crate::Result<()>
	where
		Self: Push<T>,
	{
		<Self as Push<T>>::push(self, value)
	}
}

macro_rules! impl_push {
	($native:ty => $variant:ident) => {
		impl Push<$native> for Column {
			fn push(&mut self, value: $native) -> crate::Result<()> {
				self.push_value(Value::$variant(value))
			}
		}
	};
}

impl_push!(bool => Boolean);
impl_push!(i8 => Int1);
impl_push!(i16 => Int2);
impl_push!(i32 => Int4);
impl_push!(i64 => Int8);
impl_push!(f32 => Float4);
impl_push!(f64 => Float8);

impl Push<&str> for Column {
	fn push(&mut self, value: &str) -> crate::Result<()> {
		self.push_value(Value::Utf8(value.to_string()))
	}
}

impl Push<String> for Column {
	fn push(&mut self, value: String) -> crate::Result<()> {
		self.push_value(Value::Utf8(value))
	}
}

impl Push<Value> for Column {
	fn push(&mut self, value: Value) -> crate::Result<()> {
		self.push_value(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::r#type::Type;

	#[test]
	fn test_push_native_scalars() {
		let mut bools = Column::new(&Type::Bool);
		bools.push(true).unwrap();
		assert_eq!(bools.get_value(0).unwrap(), Value::Boolean(true));

		let mut floats = Column::new(&Type::Float4);
		floats.push(1.5f32).unwrap();
		assert_eq!(floats.get_value(0).unwrap(), Value::Float4(1.5));
	}

	#[test]
	fn test_push_str_and_string() {
		let mut column = Column::new(&Type::Utf8);
		column.push("abc").unwrap();
		column.push("def".to_string()).unwrap();

		assert_eq!(column.get_value(1).unwrap(), Value::utf8("def"));
	}

	#[test]
	fn test_push_wrong_native_fails() {
		let mut column = Column::new(&Type::Int2);
		assert!(column.push(1i64).is_err());
		assert!(column.is_empty());
	}
}
