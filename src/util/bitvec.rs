// SPDX-License-Identifier: MIT
// Copyright (c) 2025 colvec contributors

use serde::{Deserialize, Serialize};

use crate::util::cowvec::CowVec;

/// Packed bit vector used for validity tracking and boolean column data.
///
/// A set bit means the position is defined. Bits past `len` in the last
/// byte are always zero, so byte-wise comparison and popcount stay exact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BitVec {
	bits: CowVec<u8>,
	len: usize,
}

impl<'de> Deserialize<'de> for BitVec {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		use serde::de::Error;

		#[derive(Deserialize)]
		struct Helper {
			bits: CowVec<u8>,
			len: usize,
		}

		let h = Helper::deserialize(deserializer)?;
		if h.bits.len() != h.len.div_ceil(8) {
			return Err(D::Error::custom(format!(
				"bit storage of {} bytes cannot back {} bits",
				h.bits.len(),
				h.len
			)));
		}
		if h.len % 8 != 0 && h.bits[h.bits.len() - 1] >> (h.len % 8) != 0 {
			return Err(D::Error::custom("non-zero bits past the declared length"));
		}
		Ok(BitVec {
			bits: h.bits,
			len: h.len,
		})
	}
}

impl BitVec {
	pub fn new() -> Self {
		Self {
			bits: CowVec::default(),
			len: 0,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: CowVec::with_capacity(capacity.div_ceil(8)),
			len: 0,
		}
	}

	pub fn repeat(len: usize, bit: bool) -> Self {
		let mut result = Self::with_capacity(len);
		for _ in 0..len {
			result.push(bit);
		}
		result
	}

	pub fn from_slice(bits: &[bool]) -> Self {
		let mut result = Self::with_capacity(bits.len());
		for &bit in bits {
			result.push(bit);
		}
		result
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn capacity(&self) -> usize {
		self.bits.capacity() * 8
	}

	pub fn push(&mut self, bit: bool) {
		if self.len % 8 == 0 {
			self.bits.push(0);
		}
		if bit {
			let byte = self.len / 8;
			self.bits.set(byte, self.bits[byte] | 1 << (self.len % 8));
		}
		self.len += 1;
	}

	pub fn get(&self, idx: usize) -> bool {
		debug_assert!(idx < self.len);
		self.bits[idx / 8] & 1 << (idx % 8) != 0
	}

	pub fn set(&mut self, idx: usize, bit: bool) {
		debug_assert!(idx < self.len);
		let byte = idx / 8;
		if bit {
			self.bits.set(byte, self.bits[byte] | 1 << (idx % 8));
		} else {
			self.bits.set(byte, self.bits[byte] & !(1 << (idx % 8)));
		}
	}

	pub fn clear(&mut self) {
		self.bits.clear();
		self.len = 0;
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().map(|b| b.count_ones() as usize).sum()
	}

	pub fn count_zeros(&self) -> usize {
		self.len - self.count_ones()
	}

	pub fn extend(&mut self, other: &Self) {
		for bit in other.iter() {
			self.push(bit);
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
		(0..self.len).map(|i| self.get(i))
	}
}

impl Default for BitVec {
	fn default() -> Self {
		Self::new()
	}
}
