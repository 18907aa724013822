//! Export of generated sequences
//!
//! Symbols are exported as decoded records rather than raw buffers, so the
//! output can be read without knowing the byte layout.

mod json;

pub use json::{to_json, to_json_value};

use crate::param::ParameterKind;
use crate::represent::{represent_bytes, represent_char};
use crate::symbol::Symbol;
use serde::Serialize;

/// Decoded view of one symbol
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolRecord<'a, T> {
    pub symbol: &'a T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chars: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ints: Vec<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub floats: Vec<f32>,
    /// Custom blobs as unspaced hex
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customs: Vec<String>,
}

impl<'a, T> From<&'a Symbol<T>> for SymbolRecord<'a, T> {
    fn from(symbol: &'a Symbol<T>) -> Self {
        let set = symbol.parameter_set();
        let indices = |kind: ParameterKind| 0..set.count(kind);

        Self {
            symbol: symbol.key(),
            chars: indices(ParameterKind::Char)
                .map(|i| represent_char(symbol.get_char(i)))
                .collect(),
            ints: indices(ParameterKind::Int).map(|i| symbol.get_int(i)).collect(),
            floats: indices(ParameterKind::Float)
                .map(|i| symbol.get_float(i))
                .collect(),
            customs: indices(ParameterKind::Custom)
                .map(|i| represent_bytes(&symbol.get_custom(i), false))
                .collect(),
        }
    }
}
