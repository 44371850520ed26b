// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

//! Columnar value containers with validity tracking, zero-copy slicing
//! and nested array, map and row composition.

pub mod column;
pub mod error;
pub mod util;
pub mod value;

pub use column::{AsSlice, Column, ColumnData, Push};
pub use error::{ColumnError, Result};
pub use util::{BitVec, CowVec};
pub use value::{RowFields, Type, Value};
