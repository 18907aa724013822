//! Textual representations used for diagnostics and golden tests
//!
//! - A parameter set renders as its packed value in 8 hex digits.
//! - A symbol renders as its key, followed, when parameters are shown and
//!   the type has any, by `(chars ints floats customs)` separated by spaces.
//! - A char parameter renders as itself when it is printable ASCII and as
//!   `\xNN` otherwise, so a byte such as `0xe9` never reads as a Latin-1
//!   letter.
//! - A custom blob renders as two lowercase hex digits per byte. Every byte
//!   is zero-padded (`05`, not `5`) and there is no trailing separator, so
//!   unspaced output can be split back into bytes.

use crate::param::{ParameterKind, ParameterSet};
use crate::symbol::{Symbol, SymbolType};
use std::fmt::Display;

pub fn represent_set(set: ParameterSet) -> String {
    set.to_string()
}

/// Hex bytes, separated by a space unless `spaced` is false
pub fn represent_bytes(data: &[u8], spaced: bool) -> String {
    let separator = if spaced { " " } else { "" };
    data.iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(separator)
}

/// One char parameter
pub fn represent_char(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        char::from(byte).to_string()
    } else {
        format!("\\x{:02x}", byte)
    }
}

pub fn represent_symbol<T: Display>(symbol: &Symbol<T>, show_params: bool) -> String {
    let mut out = symbol.key().to_string();
    let set = symbol.parameter_set();
    if !show_params || set.is_empty() {
        return out;
    }

    let mut values = Vec::new();
    for kind in ParameterKind::ALL {
        for index in 0..set.count(kind) {
            let value = match kind {
                ParameterKind::Char => represent_char(symbol.get_char(index)),
                ParameterKind::Int => symbol.get_int(index).to_string(),
                ParameterKind::Float => symbol.get_float(index).to_string(),
                ParameterKind::Custom => represent_bytes(&symbol.get_custom(index), false),
            };
            values.push(value);
        }
    }
    out.push('(');
    out.push_str(&values.join(" "));
    out.push(')');
    out
}

/// A whole generation, symbol after symbol without separators
pub fn represent_string<T: Display>(symbols: &[Symbol<T>], show_params: bool) -> String {
    symbols
        .iter()
        .map(|symbol| represent_symbol(symbol, show_params))
        .collect()
}

pub fn represent_types<T: Display>(types: &[SymbolType<T>]) -> String {
    types.iter().map(|t| t.to_string()).collect()
}
