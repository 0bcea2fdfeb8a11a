//! Statement formatting.

use shimgen_core::Parameter;

/// Structural stub value.
pub const EMPTY_OBJECT: &str = "{}";

/// Format one statement binding `scope`, optionally to `value`.
///
/// Undotted scopes introduce a fresh `var`; dotted scopes assign onto a
/// root that an earlier statement already introduced.
///
/// ```
/// use shimgen_lib::format::assign;
///
/// assert_eq!(assign("M", Some("{}")), "var M = {};");
/// assert_eq!(assign("M.x", None), "M.x;");
/// ```
pub fn assign(scope: &str, value: Option<&str>) -> String {
    let mut statement = String::with_capacity(scope.len() + value.map_or(0, str::len) + 8);
    if !scope.contains('.') {
        statement.push_str("var ");
    }
    statement.push_str(scope);
    if let Some(value) = value {
        statement.push_str(" = ");
        statement.push_str(value);
    }
    statement.push(';');
    statement
}

/// Empty function expression taking `parameters` by name.
pub fn function(parameters: &[Parameter]) -> String {
    let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
    format!("function ({}) {{}}", names.join(","))
}
