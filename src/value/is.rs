// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use std::fmt::{Debug, Display};

use serde::{Serialize, de::DeserializeOwned};

use crate::value::Value;

/// Marker for element types storable in a fixed-width numeric container.
pub trait IsNumber:
	Display + Clone + Copy + Debug + PartialEq + PartialOrd + Default + Into<Value> + Serialize + DeserializeOwned + 'static
{
}

impl IsNumber for i8 {}
impl IsNumber for i16 {}
impl IsNumber for i32 {}
impl IsNumber for i64 {}
impl IsNumber for f32 {}
impl IsNumber for f64 {}

/// Unary negation over numeric element types. Integers wrap at the type
/// boundary; floats go through IEEE negation.
pub trait Negate: IsNumber {
	fn negate(self) -> Self;
}

impl Negate for i8 {
	fn negate(self) -> Self {
		self.wrapping_neg()
	}
}

impl Negate for i16 {
	fn negate(self) -> Self {
		self.wrapping_neg()
	}
}

impl Negate for i32 {
	fn negate(self) -> Self {
		self.wrapping_neg()
	}
}

impl Negate for i64 {
	fn negate(self) -> Self {
		self.wrapping_neg()
	}
}

impl Negate for f32 {
	fn negate(self) -> Self {
		-self
	}
}

impl Negate for f64 {
	fn negate(self) -> Self {
		-self
	}
}
