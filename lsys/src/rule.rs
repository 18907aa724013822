//! Production rules
//!
//! A rule rewrites one predecessor type into an ordered sequence of output
//! symbols. Each output position can carry copy directives that move a
//! parameter of the input symbol into a parameter of the same kind on the
//! produced symbol. Parameters without a directive keep the value of the
//! output template, which is zero unless the rule was built from symbols.

use crate::param::{ParameterKind, ParameterSet};
use crate::symbol::{LString, Symbol, SymbolType};
use crate::LsysResult;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Copy input parameter `source` of `kind` to output parameter `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ParamCopy {
    pub kind: ParameterKind,
    pub source: u8,
    pub target: u8,
}

impl ParamCopy {
    pub const fn new(kind: ParameterKind, source: u8, target: u8) -> Self {
        Self {
            kind,
            source,
            target,
        }
    }

    pub const fn char(source: u8, target: u8) -> Self {
        Self::new(ParameterKind::Char, source, target)
    }

    pub const fn int(source: u8, target: u8) -> Self {
        Self::new(ParameterKind::Int, source, target)
    }

    pub const fn float(source: u8, target: u8) -> Self {
        Self::new(ParameterKind::Float, source, target)
    }

    pub const fn custom(source: u8, target: u8) -> Self {
        Self::new(ParameterKind::Custom, source, target)
    }
}

/// The unchanged neighbours of a symbol in the generation being rewritten
#[derive(Debug)]
pub struct Neighborhood<'a, T> {
    pub before: &'a [Symbol<T>],
    pub after: &'a [Symbol<T>],
}

impl<'a, T> Neighborhood<'a, T> {
    /// Split `generation` around position `index`
    pub fn around(generation: &'a [Symbol<T>], index: usize) -> Self {
        Self {
            before: &generation[..index],
            after: &generation[index + 1..],
        }
    }

    /// The neighbourhood of a symbol that stands alone
    pub fn empty() -> Self {
        Self {
            before: &[],
            after: &[],
        }
    }
}

// Manual impls: derive would require `T: Clone`/`T: Copy`.
impl<T> Clone for Neighborhood<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Neighborhood<'_, T> {}

/// Context-sensitive extension of a rule
///
/// Runs after the copy directives, with read-only access to the previous
/// generation around the rewritten symbol. It may only adjust the symbols
/// the rule just produced.
pub trait ContextHook<T>: Send + Sync {
    fn apply(
        &self,
        input: &Symbol<T>,
        neighbors: &Neighborhood<'_, T>,
        produced: &mut [Symbol<T>],
    );
}

impl<T, F> ContextHook<T> for F
where
    F: Fn(&Symbol<T>, &Neighborhood<'_, T>, &mut [Symbol<T>]) + Send + Sync,
{
    fn apply(
        &self,
        input: &Symbol<T>,
        neighbors: &Neighborhood<'_, T>,
        produced: &mut [Symbol<T>],
    ) {
        self(input, neighbors, produced)
    }
}

/// Rewrite instruction for one symbol type
#[derive(Clone)]
pub struct Rule<T> {
    predecessor: SymbolType<T>,
    templates: Vec<Symbol<T>>,
    copies: Vec<Vec<ParamCopy>>,
    context_hook: Option<Arc<dyn ContextHook<T>>>,
}

impl<T> Rule<T> {
    /// A rule producing fresh, zeroed symbols of the given types
    ///
    /// An empty `outputs` deletes the predecessor.
    pub fn new(predecessor: SymbolType<T>, outputs: Vec<SymbolType<T>>) -> Self {
        Self::from_symbols(predecessor, outputs.into_iter().map(Symbol::new).collect())
    }

    /// A rule whose outputs start from the given symbols' parameter values
    pub fn from_symbols(predecessor: SymbolType<T>, outputs: Vec<Symbol<T>>) -> Self {
        let copies = vec![Vec::new(); outputs.len()];
        Self {
            predecessor,
            templates: outputs,
            copies,
            context_hook: None,
        }
    }

    /// Attach a copy directive to output `position`
    ///
    /// # Panics
    ///
    /// Panics if the rule has no output at `position`.
    #[track_caller]
    pub fn with_copy(mut self, position: usize, copy: ParamCopy) -> Self {
        assert!(
            position < self.templates.len(),
            "copy directive for output {} but the rule produces {} symbols",
            position,
            self.templates.len()
        );
        self.copies[position].push(copy);
        self
    }

    #[track_caller]
    pub fn with_copies(
        mut self,
        position: usize,
        copies: impl IntoIterator<Item = ParamCopy>,
    ) -> Self {
        for copy in copies {
            self = self.with_copy(position, copy);
        }
        self
    }

    pub fn with_context_hook(mut self, hook: impl ContextHook<T> + 'static) -> Self {
        self.context_hook = Some(Arc::new(hook));
        self
    }

    pub fn predecessor(&self) -> &SymbolType<T> {
        &self.predecessor
    }

    /// Output types, in production order
    pub fn outputs(&self) -> impl Iterator<Item = &SymbolType<T>> {
        self.templates.iter().map(Symbol::symbol_type)
    }

    pub fn templates(&self) -> &[Symbol<T>] {
        &self.templates
    }

    /// Copy directives of output `position`
    pub fn copies(&self, position: usize) -> &[ParamCopy] {
        self.copies.get(position).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True for a rule that deletes its predecessor
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Whether the rule reads the neighbourhood of the rewritten symbol
    pub fn uses_context(&self) -> bool {
        self.context_hook.is_some()
    }

    /// Sum of the output parameter sets
    pub fn output_parameters(&self) -> LsysResult<ParameterSet> {
        self.outputs()
            .try_fold(ParameterSet::EMPTY, |acc, t| acc.checked_add(t.parameters()))
    }
}

impl<T: PartialEq> Rule<T> {
    pub fn applies(&self, symbol: &Symbol<T>) -> bool {
        *symbol.symbol_type() == self.predecessor
    }
}

impl<T: Clone> Rule<T> {
    /// Materialize the production for `symbol`
    ///
    /// # Panics
    ///
    /// Panics if a copy directive does not fit the input or output types.
    #[track_caller]
    pub fn produce(&self, symbol: &Symbol<T>, neighbors: &Neighborhood<'_, T>) -> LString<T> {
        crate::param::fatal(self.try_produce(symbol, neighbors))
    }

    pub fn try_produce(
        &self,
        symbol: &Symbol<T>,
        neighbors: &Neighborhood<'_, T>,
    ) -> LsysResult<LString<T>> {
        let mut produced = Vec::with_capacity(self.templates.len());
        for (template, copies) in self.templates.iter().zip(&self.copies) {
            let mut output = template.clone();
            for copy in copies {
                output.params_mut().try_copy_from(
                    symbol.params(),
                    copy.kind,
                    copy.source,
                    copy.target,
                )?;
            }
            produced.push(output);
        }

        if let Some(hook) = &self.context_hook {
            hook.apply(symbol, neighbors, &mut produced);
        }

        Ok(produced)
    }
}

impl<T: fmt::Display> Rule<T> {
    /// `A->AB`
    pub fn representation(&self) -> String {
        format!(
            "{}->{}",
            self.predecessor,
            self.outputs().map(|t| t.to_string()).collect::<String>()
        )
    }
}

impl<T: fmt::Debug> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("predecessor", &self.predecessor)
            .field("templates", &self.templates)
            .field("copies", &self.copies)
            .field("context_hook", &self.context_hook.is_some())
            .finish()
    }
}
