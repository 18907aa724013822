//! # L-system Engine
//!
//! **Parametric Lindenmayer systems**
//!
//! An L-system rewrites every symbol of a sequence in parallel, generation
//! after generation, starting from an axiom. Symbols can carry typed
//! parameters that rules copy from the rewritten symbol into its successors.
//!
//! ## Quick Start
//!
//! ```rust
//! use lsys::{represent_string, LSystem, LsysResult, Rule, Symbol, SymbolType};
//!
//! fn main() -> LsysResult<()> {
//!     let a = SymbolType::new('A');
//!     let b = SymbolType::new('B');
//!
//!     let mut algae = LSystem::new(vec![Symbol::new(a.clone())]);
//!     algae.add_rule(Rule::new(a.clone(), vec![a.clone(), b.clone()]));
//!     algae.add_rule(Rule::new(b, vec![a]));
//!
//!     let generation = algae.generate(4)?;
//!     assert_eq!(represent_string(&generation, false), "ABAABABA");
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Parameters
//! A [`ParameterSet`] packs how many char, int, float and custom-blob
//! parameters a symbol type has. [`ParameterData`] stores the values in a
//! fixed little-endian byte layout.
//!
//! ### Symbols
//! A [`SymbolType`] is an identity key plus a parameter layout. A [`Symbol`]
//! is an instance with its own values.
//!
//! ### Rules
//! A [`Rule`] rewrites one symbol type into a sequence of symbols and copies
//! parameters across with [`ParamCopy`] directives. A type without a rule is
//! terminal and passes through unchanged.

pub mod engine;
pub mod error;
pub mod param;
pub mod represent;
pub mod resource_limits;
pub mod rule;
pub mod serializers;
pub mod symbol;
pub mod validator;

pub use engine::LSystem;
pub use error::LsysError;
pub use param::{ParameterData, ParameterKind, ParameterSet, MAX_PARAMS};
pub use represent::{represent_bytes, represent_char, represent_set, represent_string};
pub use resource_limits::ResourceLimits;
pub use rule::{ContextHook, Neighborhood, ParamCopy, Rule};
pub use symbol::{LString, Symbol, SymbolType};
pub use validator::Validator;

/// Result type for L-system operations
pub type LsysResult<T> = Result<T, LsysError>;

#[cfg(test)]
mod tests;
