use crate::rule::{Neighborhood, Rule};
use crate::symbol::{LString, Symbol, SymbolType};
use crate::{LsysError, LsysResult, ResourceLimits, Validator};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// The rewriting engine
///
/// Holds an axiom and at most one rule per symbol type. Generating never
/// changes the system; it is a function of the axiom, the rule table and
/// the generation count.
#[derive(Clone)]
pub struct LSystem<T> {
    axiom: LString<T>,
    rules: HashMap<SymbolType<T>, Rule<T>>,
    limits: ResourceLimits,
}

impl<T> LSystem<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new(axiom: LString<T>) -> Self {
        Self::with_limits(axiom, ResourceLimits::default())
    }

    /// Create a system with custom resource limits
    pub fn with_limits(axiom: LString<T>, limits: ResourceLimits) -> Self {
        Self {
            axiom,
            rules: HashMap::new(),
            limits,
        }
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    pub fn set_limits(&mut self, limits: ResourceLimits) {
        self.limits = limits;
    }

    pub fn axiom(&self) -> &[Symbol<T>] {
        &self.axiom
    }

    pub fn set_axiom(&mut self, axiom: LString<T>) {
        self.axiom = axiom;
    }

    /// Register `rule` for its predecessor type
    ///
    /// A rule already registered for the same type is replaced and returned.
    pub fn add_rule(&mut self, rule: Rule<T>) -> Option<Rule<T>> {
        let predecessor = rule.predecessor().clone();
        let replaced = self.rules.insert(predecessor, rule);
        if let Some(old) = &replaced {
            debug!(outputs = old.len(), "replaced existing rule");
        }
        replaced
    }

    pub fn remove_rule(&mut self, predecessor: &SymbolType<T>) -> Option<Rule<T>> {
        self.rules.remove(predecessor)
    }

    pub fn rule_for(&self, predecessor: &SymbolType<T>) -> Option<&Rule<T>> {
        self.rules.get(predecessor)
    }

    /// All registered rules, in no particular order
    pub fn rules(&self) -> impl Iterator<Item = &Rule<T>> {
        self.rules.values()
    }

    /// Every type in the axiom, plus every predecessor and output type of
    /// the registered rules
    pub fn symbol_types(&self) -> HashSet<SymbolType<T>> {
        let mut types: HashSet<SymbolType<T>> =
            self.axiom.iter().map(|s| s.symbol_type().clone()).collect();
        for rule in self.rules.values() {
            types.insert(rule.predecessor().clone());
            types.extend(rule.outputs().cloned());
        }
        types
    }

    /// Check every rule against the types it reads and writes
    pub fn validate(&self) -> LsysResult<()>
    where
        T: fmt::Display,
    {
        Validator.validate(self)
    }

    /// Generation `generations` of the axiom; generation 0 is the axiom
    ///
    /// # Panics
    ///
    /// Panics if a rule's copy directive does not fit its types. Run
    /// [`validate`](Self::validate) first to report those as errors.
    pub fn generate(&self, generations: usize) -> LsysResult<LString<T>> {
        self.generate_from(self.axiom.clone(), generations)
    }

    /// Continue rewriting `start` for `generations` more passes
    pub fn generate_from(&self, start: LString<T>, generations: usize) -> LsysResult<LString<T>> {
        if generations > self.limits.max_generations {
            return Err(LsysError::ResourceLimitExceeded {
                limit_name: "max_generations".to_string(),
                limit_value: self.limits.max_generations.to_string(),
                actual_value: generations.to_string(),
                suggestion: format!(
                    "Request at most {} generations or raise the limit",
                    self.limits.max_generations
                ),
            });
        }

        debug!(generations, start_len = start.len(), "generating");
        let mut current = start;
        for pass in 0..generations {
            let next = self.rewrite(&current)?;
            trace!(pass, input_len = current.len(), output_len = next.len(), "rewrite pass");
            current = next;
        }
        debug!(generations, result_len = current.len(), "generation complete");

        Ok(current)
    }

    /// One synchronous pass over `generation`
    ///
    /// Every production reads the unchanged input; symbols without a rule
    /// are copied through with their parameters.
    pub fn rewrite(&self, generation: &[Symbol<T>]) -> LsysResult<LString<T>> {
        let length = generation
            .iter()
            .map(|symbol| self.rules.get(symbol.symbol_type()).map_or(1, Rule::len))
            .fold(0usize, usize::saturating_add);

        if length > self.limits.max_sequence_length {
            return Err(LsysError::ResourceLimitExceeded {
                limit_name: "max_sequence_length".to_string(),
                limit_value: self.limits.max_sequence_length.to_string(),
                actual_value: length.to_string(),
                suggestion: format!(
                    "The next generation would hold {} symbols; generate fewer generations or raise the limit",
                    length
                ),
            });
        }

        let mut next = Vec::with_capacity(length);
        for (index, symbol) in generation.iter().enumerate() {
            match self.rules.get(symbol.symbol_type()) {
                Some(rule) => {
                    let neighbors = Neighborhood::around(generation, index);
                    next.extend(rule.produce(symbol, &neighbors));
                }
                None => next.push(symbol.clone()),
            }
        }

        Ok(next)
    }
}

impl<T: fmt::Debug> fmt::Debug for LSystem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LSystem")
            .field("axiom", &self.axiom)
            .field("rules", &self.rules.values().collect::<Vec<_>>())
            .field("limits", &self.limits)
            .finish()
    }
}
