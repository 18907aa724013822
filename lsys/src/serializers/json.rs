use super::SymbolRecord;
use crate::symbol::Symbol;
use crate::LsysResult;
use serde::Serialize;
use serde_json::Value;

/// Export a sequence as a JSON array of symbol records
///
/// Example output for `A(0.5)B`:
/// ```json
/// [{"symbol":"A","floats":[0.5]},{"symbol":"B"}]
/// ```
///
/// Non-finite floats have no JSON form and are written as `null`.
pub fn to_json<T: Serialize>(symbols: &[Symbol<T>]) -> LsysResult<String> {
    let records: Vec<SymbolRecord<'_, T>> = symbols.iter().map(SymbolRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}

pub fn to_json_value<T: Serialize>(symbols: &[Symbol<T>]) -> LsysResult<Value> {
    let records: Vec<SymbolRecord<'_, T>> = symbols.iter().map(SymbolRecord::from).collect();
    Ok(serde_json::to_value(&records)?)
}
