//! Grammar validation
//!
//! Catches the defects that would otherwise panic during generation:
//! copy directives reading or writing parameters a type does not declare,
//! and one identity key carrying two different parameter layouts.

use crate::param::ParameterKind;
use crate::rule::Rule;
use crate::symbol::SymbolType;
use crate::{LSystem, LsysError, LsysResult};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Checks an [`LSystem`] before it is generated
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Validate all rules and type definitions, collecting every problem
    pub fn validate<T>(&self, system: &LSystem<T>) -> LsysResult<()>
    where
        T: Eq + Hash + Clone + fmt::Display,
    {
        let mut rules: Vec<&Rule<T>> = system.rules().collect();
        rules.sort_by_key(|rule| rule.predecessor().to_string());

        let mut errors = Vec::new();
        for rule in &rules {
            errors.extend(check_copies(rule));
        }
        errors.extend(check_layouts(system.axiom().iter().map(|s| s.symbol_type()), &rules));

        LsysError::collect(errors)
    }
}

fn check_copies<T: fmt::Display>(rule: &Rule<T>) -> Vec<LsysError> {
    let mut errors = Vec::new();
    let input = rule.predecessor();

    for (position, output) in rule.outputs().enumerate() {
        for copy in rule.copies(position) {
            let invalid = |message: String| LsysError::InvalidCopyDirective {
                rule: rule.representation(),
                position,
                message,
            };

            let available = input.parameters().count(copy.kind);
            if copy.source >= available {
                errors.push(invalid(format!(
                    "reads {} parameter {} but '{}' declares {}",
                    copy.kind, copy.source, input, available
                )));
            }

            let declared = output.parameters().count(copy.kind);
            if copy.target >= declared {
                errors.push(invalid(format!(
                    "writes {} parameter {} but '{}' declares {}",
                    copy.kind, copy.target, output, declared
                )));
            }

            if copy.kind == ParameterKind::Custom && input.custom_width() != output.custom_width()
            {
                errors.push(invalid(format!(
                    "copies a {}-byte custom parameter into a {}-byte one",
                    input.custom_width(),
                    output.custom_width()
                )));
            }
        }
    }

    errors
}

fn check_layouts<'a, T>(
    axiom: impl Iterator<Item = &'a SymbolType<T>>,
    rules: &[&'a Rule<T>],
) -> Vec<LsysError>
where
    T: Eq + Hash + fmt::Display + 'a,
{
    let mut seen: HashMap<&T, &SymbolType<T>> = HashMap::new();
    let mut reported: HashSet<&T> = HashSet::new();
    let mut errors = Vec::new();

    let from_rules = rules
        .iter()
        .copied()
        .flat_map(|rule| std::iter::once(rule.predecessor()).chain(rule.outputs()));

    for symbol_type in axiom.chain(from_rules) {
        match seen.get(symbol_type.key()) {
            Some(first) if !first.same_layout(symbol_type) => {
                if !reported.insert(symbol_type.key()) {
                    continue;
                }
                errors.push(LsysError::ConflictingSymbolType {
                    symbol: symbol_type.to_string(),
                    message: format!(
                        "parameters {} with custom width {} versus {} with custom width {}",
                        first.parameters(),
                        first.custom_width(),
                        symbol_type.parameters(),
                        symbol_type.custom_width()
                    ),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(symbol_type.key(), symbol_type);
            }
        }
    }

    errors
}
