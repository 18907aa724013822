use crate::param::ParameterSet;
use crate::serializers::{to_json, to_json_value, SymbolRecord};
use crate::symbol::{Symbol, SymbolType};
use serde_json::json;

#[test]
fn test_record_decodes_parameters() {
    let t = SymbolType::with_custom('A', ParameterSet::new(1, 1, 1, 1), 2);
    let symbol = Symbol::new(t)
        .with_char(b'k', 0)
        .with_int(12, 0)
        .with_float(0.5, 0)
        .with_custom(&[0xbe, 0xef], 0);

    let record = SymbolRecord::from(&symbol);
    assert_eq!(record.symbol, &'A');
    assert_eq!(record.chars, vec!["k".to_string()]);
    assert_eq!(record.ints, vec![12]);
    assert_eq!(record.floats, vec![0.5]);
    assert_eq!(record.customs, vec!["beef".to_string()]);
}

#[test]
fn test_json_skips_empty_groups() {
    let a = SymbolType::with_parameters('A', ParameterSet::new(0, 0, 1, 0));
    let symbols = vec![
        Symbol::new(a).with_float(0.5, 0),
        Symbol::new(SymbolType::new('B')),
    ];

    assert_eq!(
        to_json(&symbols).unwrap(),
        r#"[{"symbol":"A","floats":[0.5]},{"symbol":"B"}]"#
    );
}

#[test]
fn test_json_value() {
    let symbols = vec![Symbol::new(SymbolType::with_parameters(
        "seg",
        ParameterSet::new(0, 2, 0, 0),
    ))
    .with_int(-1, 1)];

    assert_eq!(
        to_json_value(&symbols).unwrap(),
        json!([{"symbol": "seg", "ints": [0, -1]}])
    );
}

#[test]
fn test_symbol_type_serializes_metadata() {
    let t = SymbolType::with_custom('X', ParameterSet::new(0, 1, 0, 2), 3);
    assert_eq!(
        serde_json::to_value(&t).unwrap(),
        json!({"symbol": "X", "parameters": "00010002", "custom_width": 3})
    );
}

#[test]
fn test_record_escapes_non_ascii_chars() {
    let t = SymbolType::with_parameters('A', ParameterSet::new(1, 0, 0, 0));
    let symbol = Symbol::new(t).with_char(0xff, 0);
    let record = SymbolRecord::from(&symbol);
    assert_eq!(record.chars, vec!["\\xff".to_string()]);
}
