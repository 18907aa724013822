//! Symbol parameters
//!
//! A [`ParameterSet`] packs how many chars, ints, floats and custom blobs a
//! symbol type carries into a single `u32`, one byte per kind:
//!
//! ```text
//!   31      24 23      16 15       8 7        0
//!  +----------+----------+----------+----------+
//!  |  chars   |   ints   |  floats  | customs  |
//!  +----------+----------+----------+----------+
//! ```
//!
//! [`ParameterData`] holds the values themselves in a byte buffer laid out
//! in the same kind order.

mod data;

pub use data::ParameterData;

use crate::{LsysError, LsysResult};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Add;

/// Maximum number of parameters of a single kind
pub const MAX_PARAMS: u8 = u8::MAX;

/// Encoded width of a char parameter in bytes
pub const CHAR_SIZE: usize = 1;
/// Encoded width of an int parameter in bytes (little-endian `i32`)
pub const INT_SIZE: usize = 4;
/// Encoded width of a float parameter in bytes (little-endian `f32`)
pub const FLOAT_SIZE: usize = 4;

/// The four kinds of parameter a symbol can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Char,
    Int,
    Float,
    Custom,
}

impl ParameterKind {
    /// All kinds, in storage order
    pub const ALL: [ParameterKind; 4] = [
        ParameterKind::Char,
        ParameterKind::Int,
        ParameterKind::Float,
        ParameterKind::Custom,
    ];

    const fn shift(self) -> u32 {
        match self {
            ParameterKind::Char => 24,
            ParameterKind::Int => 16,
            ParameterKind::Float => 8,
            ParameterKind::Custom => 0,
        }
    }

    /// Packed value of a set holding exactly one parameter of this kind
    pub const fn unit(self) -> u32 {
        1 << self.shift()
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParameterKind::Char => "char",
            ParameterKind::Int => "int",
            ParameterKind::Float => "float",
            ParameterKind::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Packed parameter counts of a symbol type
///
/// Sets compose by per-kind addition; a kind never carries into its
/// neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParameterSet(u32);

impl ParameterSet {
    /// The set without any parameters
    pub const EMPTY: ParameterSet = ParameterSet(0);

    pub const fn new(chars: u8, ints: u8, floats: u8, customs: u8) -> Self {
        Self(
            ((chars as u32) << ParameterKind::Char.shift())
                | ((ints as u32) << ParameterKind::Int.shift())
                | ((floats as u32) << ParameterKind::Float.shift())
                | ((customs as u32) << ParameterKind::Custom.shift()),
        )
    }

    /// Build a set by listing one kind per parameter, in any order
    ///
    /// # Panics
    ///
    /// Panics if any kind is listed more than [`MAX_PARAMS`] times.
    #[track_caller]
    pub fn from_kinds(kinds: &[ParameterKind]) -> Self {
        fatal(Self::try_from_kinds(kinds))
    }

    pub fn try_from_kinds(kinds: &[ParameterKind]) -> LsysResult<Self> {
        let mut counts = [0u8; 4];
        for (slot, kind) in counts.iter_mut().zip(ParameterKind::ALL) {
            let count = kinds.iter().filter(|k| **k == kind).count();
            *slot = u8::try_from(count)
                .map_err(|_| LsysError::TooManyParameters { kind, count })?;
        }
        Ok(Self::new(counts[0], counts[1], counts[2], counts[3]))
    }

    /// Reinterpret a raw packed value
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of parameters of one kind
    pub const fn count(self, kind: ParameterKind) -> u8 {
        ((self.0 >> kind.shift()) & 0xff) as u8
    }

    /// Byte length of the storage for this set, given the custom blob width
    pub fn required_data_size(self, custom_width: u8) -> usize {
        self.count(ParameterKind::Char) as usize * CHAR_SIZE
            + self.count(ParameterKind::Int) as usize * INT_SIZE
            + self.count(ParameterKind::Float) as usize * FLOAT_SIZE
            + self.count(ParameterKind::Custom) as usize * custom_width as usize
    }

    /// Per-kind sum, failing instead of carrying into the next field
    pub fn checked_add(self, other: ParameterSet) -> LsysResult<Self> {
        let mut counts = [0u8; 4];
        for (slot, kind) in counts.iter_mut().zip(ParameterKind::ALL) {
            let count = self.count(kind) as usize + other.count(kind) as usize;
            *slot = u8::try_from(count)
                .map_err(|_| LsysError::TooManyParameters { kind, count })?;
        }
        Ok(Self::new(counts[0], counts[1], counts[2], counts[3]))
    }
}

impl Add for ParameterSet {
    type Output = ParameterSet;

    /// # Panics
    ///
    /// Panics if a kind would exceed [`MAX_PARAMS`].
    #[track_caller]
    fn add(self, other: ParameterSet) -> ParameterSet {
        fatal(self.checked_add(other))
    }
}

impl From<ParameterKind> for ParameterSet {
    fn from(kind: ParameterKind) -> Self {
        Self(kind.unit())
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl Serialize for ParameterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Turn a grammar defect into a panic at the caller's location
#[track_caller]
pub(crate) fn fatal<T>(result: LsysResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}
