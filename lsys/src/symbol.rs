//! Symbol types and symbol instances

use crate::param::{ParameterData, ParameterSet};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A sequence of symbols, one generation of an L-system
pub type LString<T> = Vec<Symbol<T>>;

/// A letter of the grammar's alphabet
///
/// Identity is the key alone: two types with equal keys compare and hash
/// equal even if their parameter metadata differs.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolType<T> {
    #[serde(rename = "symbol")]
    key: T,
    parameters: ParameterSet,
    custom_width: u8,
}

impl<T> SymbolType<T> {
    /// A type without parameters
    pub fn new(key: T) -> Self {
        Self::with_custom(key, ParameterSet::EMPTY, 0)
    }

    pub fn with_parameters(key: T, parameters: ParameterSet) -> Self {
        Self::with_custom(key, parameters, 0)
    }

    /// A type whose custom parameters are blobs of `custom_width` bytes
    pub fn with_custom(key: T, parameters: ParameterSet, custom_width: u8) -> Self {
        Self {
            key,
            parameters,
            custom_width,
        }
    }

    pub fn key(&self) -> &T {
        &self.key
    }

    pub fn parameters(&self) -> ParameterSet {
        self.parameters
    }

    pub fn custom_width(&self) -> u8 {
        self.custom_width
    }

    /// Whether `other` carries the same parameter layout, regardless of key
    pub fn same_layout(&self, other: &SymbolType<T>) -> bool {
        self.parameters == other.parameters && self.custom_width == other.custom_width
    }
}

impl<T: PartialEq> PartialEq for SymbolType<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T: Eq> Eq for SymbolType<T> {}

impl<T: Hash> Hash for SymbolType<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for SymbolType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.key, f)
    }
}

/// One instance of a symbol type with its own parameter values
#[derive(Debug, Clone)]
pub struct Symbol<T> {
    symbol_type: SymbolType<T>,
    data: ParameterData,
}

impl<T> Symbol<T> {
    /// A symbol with all parameters zeroed
    pub fn new(symbol_type: SymbolType<T>) -> Self {
        let data = ParameterData::new(symbol_type.parameters(), symbol_type.custom_width());
        Self { symbol_type, data }
    }

    pub fn symbol_type(&self) -> &SymbolType<T> {
        &self.symbol_type
    }

    pub fn key(&self) -> &T {
        self.symbol_type.key()
    }

    pub fn parameter_set(&self) -> ParameterSet {
        self.symbol_type.parameters()
    }

    pub fn custom_width(&self) -> u8 {
        self.symbol_type.custom_width()
    }

    /// Parameter storage, for the fallible `try_*` accessors
    pub fn params(&self) -> &ParameterData {
        &self.data
    }

    pub fn params_mut(&mut self) -> &mut ParameterData {
        &mut self.data
    }

    #[track_caller]
    pub fn get_char(&self, index: u8) -> u8 {
        self.data.get_char(index)
    }

    #[track_caller]
    pub fn get_int(&self, index: u8) -> i32 {
        self.data.get_int(index)
    }

    #[track_caller]
    pub fn get_float(&self, index: u8) -> f32 {
        self.data.get_float(index)
    }

    #[track_caller]
    pub fn get_custom(&self, index: u8) -> Vec<u8> {
        self.data.get_custom(index)
    }

    #[track_caller]
    pub fn set_char(&mut self, value: u8, index: u8) {
        self.data.set_char(value, index)
    }

    #[track_caller]
    pub fn set_int(&mut self, value: i32, index: u8) {
        self.data.set_int(value, index)
    }

    #[track_caller]
    pub fn set_float(&mut self, value: f32, index: u8) {
        self.data.set_float(value, index)
    }

    #[track_caller]
    pub fn set_custom(&mut self, value: &[u8], index: u8) {
        self.data.set_custom(value, index)
    }

    #[track_caller]
    pub fn with_char(mut self, value: u8, index: u8) -> Self {
        self.set_char(value, index);
        self
    }

    #[track_caller]
    pub fn with_int(mut self, value: i32, index: u8) -> Self {
        self.set_int(value, index);
        self
    }

    #[track_caller]
    pub fn with_float(mut self, value: f32, index: u8) -> Self {
        self.set_float(value, index);
        self
    }

    #[track_caller]
    pub fn with_custom(mut self, value: &[u8], index: u8) -> Self {
        self.set_custom(value, index);
        self
    }
}

impl<T> From<SymbolType<T>> for Symbol<T> {
    fn from(symbol_type: SymbolType<T>) -> Self {
        Symbol::new(symbol_type)
    }
}

impl<T: PartialEq> PartialEq for Symbol<T> {
    fn eq(&self, other: &Self) -> bool {
        self.symbol_type == other.symbol_type && self.data == other.data
    }
}

impl<T: fmt::Display> fmt::Display for Symbol<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&crate::represent::represent_symbol(self, true))
        } else {
            fmt::Display::fmt(&self.symbol_type, f)
        }
    }
}
