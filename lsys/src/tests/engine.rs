use crate::param::ParameterSet;
use crate::represent::represent_string;
use crate::rule::{ParamCopy, Rule};
use crate::symbol::{Symbol, SymbolType};
use crate::{LSystem, LsysError, ResourceLimits};

fn algae() -> LSystem<char> {
    let a = SymbolType::new('A');
    let b = SymbolType::new('B');
    let mut system = LSystem::new(vec![Symbol::new(a.clone())]);
    system.add_rule(Rule::new(a.clone(), vec![a.clone(), b.clone()]));
    system.add_rule(Rule::new(b, vec![a]));
    system
}

#[test]
fn test_generate_zero_is_axiom() {
    let system = algae();
    assert_eq!(system.generate(0).unwrap(), system.axiom());
}

#[test]
fn test_algae_generations() {
    let system = algae();
    let expected = ["A", "AB", "ABA", "ABAAB", "ABAABABA"];
    for (n, want) in expected.iter().enumerate() {
        let generation = system.generate(n).unwrap();
        assert_eq!(represent_string(&generation, false), *want, "generation {}", n);
    }
}

#[test]
fn test_generate_does_not_change_system() {
    let system = algae();
    let before = system.axiom().to_vec();
    system.generate(5).unwrap();
    assert_eq!(system.axiom(), before.as_slice());
    assert_eq!(system.rules().count(), 2);
}

#[test]
fn test_rewrite_is_one_pass() {
    let system = algae();
    let first = system.rewrite(system.axiom()).unwrap();
    let second = system.rewrite(&first).unwrap();
    assert_eq!(second, system.generate(2).unwrap());
}

#[test]
fn test_generate_from_continues() {
    let system = algae();
    let three = system.generate(3).unwrap();
    assert_eq!(
        system.generate_from(three, 2).unwrap(),
        system.generate(5).unwrap()
    );
}

#[test]
fn test_add_rule_replaces() {
    let a = SymbolType::new('A');
    let b = SymbolType::new('B');
    let c = SymbolType::new('C');
    let mut system = algae();

    let replaced = system.add_rule(Rule::new(b.clone(), vec![c.clone(), a.clone()]));
    assert_eq!(replaced.map(|r| r.representation()), Some("B->A".to_string()));
    assert_eq!(system.rule_for(&b).map(|r| r.representation()), Some("B->CA".to_string()));

    system.set_axiom(vec![Symbol::new(a), Symbol::new(c.clone()), Symbol::new(c)]);
    let generation = system.generate(2).unwrap();
    assert_eq!(represent_string(&generation, false), "ABCACC");
}

#[test]
fn test_remove_rule_makes_type_terminal() {
    let b = SymbolType::new('B');
    let mut system = algae();
    assert!(system.remove_rule(&b).is_some());
    assert!(system.remove_rule(&b).is_none());
    assert_eq!(represent_string(&system.generate(3).unwrap(), false), "ABBB");
}

#[test]
fn test_terminals_keep_parameters() {
    let t = SymbolType::with_custom('T', ParameterSet::new(1, 1, 1, 1), 2);
    let a = SymbolType::new('A');
    let terminal = Symbol::new(t)
        .with_char(b'q', 0)
        .with_int(-99, 0)
        .with_float(f32::INFINITY, 0)
        .with_custom(&[1, 2], 0);

    let mut system = LSystem::new(vec![terminal.clone(), Symbol::new(a.clone())]);
    system.add_rule(Rule::new(a.clone(), vec![a.clone(), a]));

    let generation = system.generate(4).unwrap();
    assert_eq!(generation.len(), 17);
    assert_eq!(generation[0], terminal);
    assert_eq!(generation[0].params().as_bytes(), terminal.params().as_bytes());
}

#[test]
fn test_parallel_rewrite_sees_previous_generation() {
    // A and B swap places each pass, carrying their ints along.
    let a = SymbolType::with_parameters('A', ParameterSet::new(0, 1, 0, 0));
    let b = SymbolType::with_parameters('B', ParameterSet::new(0, 1, 0, 0));
    let mut system = LSystem::new(vec![
        Symbol::new(a.clone()).with_int(1, 0),
        Symbol::new(b.clone()).with_int(2, 0),
    ]);
    system.add_rule(Rule::new(a.clone(), vec![b.clone()]).with_copy(0, ParamCopy::int(0, 0)));
    system.add_rule(Rule::new(b.clone(), vec![a.clone()]).with_copy(0, ParamCopy::int(0, 0)));

    let one = system.generate(1).unwrap();
    assert_eq!(represent_string(&one, true), "B(1)A(2)");
    let two = system.generate(2).unwrap();
    assert_eq!(represent_string(&two, true), "A(1)B(2)");
}

#[test]
fn test_deletion_scenario() {
    let a = SymbolType::new('A');
    let b = SymbolType::new('B');
    let mut system = LSystem::new(
        "ABBAB"
            .chars()
            .map(|c| Symbol::new(if c == 'A' { a.clone() } else { b.clone() }))
            .collect(),
    );
    system.add_rule(Rule::new(b, vec![]));

    assert_eq!(represent_string(&system.generate(1).unwrap(), false), "AA");
    assert_eq!(represent_string(&system.generate(5).unwrap(), false), "AA");
}

#[test]
fn test_identity_rule_differs_from_no_rule_only_in_parameters() {
    let a = SymbolType::with_parameters('A', ParameterSet::new(0, 1, 0, 0));
    let start = Symbol::new(a.clone()).with_int(5, 0);

    let mut copying = LSystem::new(vec![start.clone()]);
    copying.add_rule(Rule::new(a.clone(), vec![a.clone()]).with_copy(0, ParamCopy::int(0, 0)));
    assert_eq!(copying.generate(3).unwrap(), vec![start.clone()]);

    let mut resetting = LSystem::new(vec![start]);
    resetting.add_rule(Rule::new(a.clone(), vec![a.clone()]));
    assert_eq!(resetting.generate(1).unwrap(), vec![Symbol::new(a)]);
}

#[test]
fn test_symbol_types_cover_axiom_and_rules() {
    let mut system = algae();
    system.add_rule(Rule::new(SymbolType::new('X'), vec![SymbolType::new('Y')]));

    let mut keys: Vec<char> = system.symbol_types().iter().map(|t| *t.key()).collect();
    keys.sort();
    assert_eq!(keys, vec!['A', 'B', 'X', 'Y']);
}

#[test]
fn test_generation_limit() {
    let limits = ResourceLimits {
        max_generations: 3,
        ..ResourceLimits::default()
    };
    let mut system = algae();
    system.set_limits(limits);

    assert!(system.generate(3).is_ok());
    match system.generate(4) {
        Err(LsysError::ResourceLimitExceeded { limit_name, .. }) => {
            assert_eq!(limit_name, "max_generations");
        }
        other => panic!("Expected ResourceLimitExceeded, got {:?}", other),
    }
}

#[test]
fn test_sequence_length_limit() {
    let a = SymbolType::new('A');
    let limits = ResourceLimits {
        max_sequence_length: 8,
        ..ResourceLimits::default()
    };
    let mut system = LSystem::with_limits(vec![Symbol::new(a.clone())], limits);
    system.add_rule(Rule::new(a.clone(), vec![a.clone(), a]));

    assert_eq!(system.generate(3).unwrap().len(), 8);
    match system.generate(4) {
        Err(LsysError::ResourceLimitExceeded {
            limit_name,
            actual_value,
            ..
        }) => {
            assert_eq!(limit_name, "max_sequence_length");
            assert_eq!(actual_value, "16");
        }
        other => panic!("Expected ResourceLimitExceeded, got {:?}", other),
    }
}

/// A key with equality, hashing and display but no `Debug`
#[derive(Clone, PartialEq, Eq, Hash)]
enum Cell {
    Live,
    Dead,
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Cell::Live => "L",
            Cell::Dead => "D",
        })
    }
}

#[test]
fn test_keys_without_debug() {
    let live = SymbolType::new(Cell::Live);
    let dead = SymbolType::new(Cell::Dead);
    let mut system = LSystem::new(vec![Symbol::new(live.clone())]);

    assert!(system
        .add_rule(Rule::new(live.clone(), vec![live.clone()]))
        .is_none());
    assert!(system
        .add_rule(Rule::new(live.clone(), vec![live.clone(), dead.clone()]))
        .is_some());
    system.add_rule(Rule::new(dead.clone(), vec![dead]));

    assert!(system.validate().is_ok());
    assert_eq!(system.symbol_types().len(), 2);
    assert_eq!(represent_string(&system.generate(3).unwrap(), false), "LDDD");
}
