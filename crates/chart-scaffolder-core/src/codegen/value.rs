//! Default prop values and their rendering as JSX attribute syntax
//!
//! Catalog defaults are classified into [`PropValue`] once, when the catalog is
//! deserialized. [`serialize`] then maps each variant to the text that follows
//! `name=` in a JSX attribute:
//!
//! | Value                  | Output                                   |
//! |------------------------|------------------------------------------|
//! | boolean / number       | `{true}`, `{42}`                         |
//! | function reference     | `{d => d.value}`                         |
//! | string                 | `"age"`                                  |
//! | array                  | `{[` + one JSON element per line + `]}`  |
//! | object                 | `{{` + the JSON key/value lines + `}}`   |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::builder::reindent;
use crate::error::SerializeError;

/// Indentation applied to nested lines when none is requested
pub const DEFAULT_INDENT: usize = 4;

/// Deepest array/object nesting [`serialize`] accepts
pub const MAX_DEPTH: usize = 64;

/// Key marking a JSON object as a function reference: `{"$function": "d => d.x"}`
pub const FUNCTION_KEY: &str = "$function";

/// A catalog default, classified by runtime type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum PropValue {
    Boolean(bool),
    Number(Number),
    /// Source text of a function-like expression, emitted unquoted
    FunctionRef(String),
    String(String),
    Array(Vec<Value>),
    Structure(Map<String, Value>),
    Null,
}

impl PropValue {
    /// Short name of the variant, for listings
    pub fn kind(&self) -> &'static str {
        match self {
            PropValue::Boolean(_) => "boolean",
            PropValue::Number(_) => "number",
            PropValue::FunctionRef(_) => "function",
            PropValue::String(_) => "string",
            PropValue::Array(_) => "array",
            PropValue::Structure(_) => "object",
            PropValue::Null => "null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => PropValue::Null,
            Value::Bool(b) => PropValue::Boolean(b),
            Value::Number(n) => PropValue::Number(n),
            Value::String(s) => PropValue::String(s),
            Value::Array(items) => PropValue::Array(items),
            Value::Object(map) => match function_source(&map) {
                Some(source) => PropValue::FunctionRef(source.to_string()),
                None => PropValue::Structure(map),
            },
        }
    }
}

impl From<PropValue> for Value {
    fn from(value: PropValue) -> Self {
        match value {
            PropValue::Null => Value::Null,
            PropValue::Boolean(b) => Value::Bool(b),
            PropValue::Number(n) => Value::Number(n),
            PropValue::String(s) => Value::String(s),
            PropValue::Array(items) => Value::Array(items),
            PropValue::Structure(map) => Value::Object(map),
            PropValue::FunctionRef(source) => {
                let mut map = Map::new();
                map.insert(FUNCTION_KEY.to_string(), Value::String(source));
                Value::Object(map)
            }
        }
    }
}

/// Render `value` as the right-hand side of a JSX attribute.
///
/// `indent` is the number of spaces put in front of every nested line of an
/// array or object literal, and in front of its closing bracket.
pub fn serialize(value: &PropValue, indent: usize) -> Result<String, SerializeError> {
    match value {
        PropValue::Boolean(b) => Ok(expression(&b.to_string())),
        PropValue::Number(n) => Ok(expression(&n.to_string())),
        PropValue::FunctionRef(source) => {
            let source = source.trim();
            if source.is_empty() {
                return Err(SerializeError::EmptyFunction);
            }
            Ok(expression(source))
        }
        PropValue::String(s) => string_literal(s),
        PropValue::Array(items) => array_literal(items, indent),
        PropValue::Structure(map) => structure_literal(map, indent),
        PropValue::Null => Ok(expression("null")),
    }
}

/// [`serialize`] with [`DEFAULT_INDENT`]
pub fn serialize_default(value: &PropValue) -> Result<String, SerializeError> {
    serialize(value, DEFAULT_INDENT)
}

fn expression(text: &str) -> String {
    format!("{{{}}}", text)
}

fn string_literal(s: &str) -> Result<String, SerializeError> {
    // JSX attribute strings have no escapes and decode HTML entities; fall back
    // to a JS string expression
    if s.contains(['"', '&', '\n', '\r']) {
        return Ok(expression(&serde_json::to_string(s)?));
    }
    Ok(format!("\"{}\"", s))
}

fn array_literal(items: &[Value], indent: usize) -> Result<String, SerializeError> {
    check_nested(items.iter())?;

    let mut elements = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let mut element = reindent(&serde_json::to_string_pretty(item)?, indent);
        if i + 1 < items.len() {
            element.push(',');
        }
        elements.push(element);
    }

    Ok(format!(
        "{{[\n{}\n{}]}}",
        elements.join("\n"),
        " ".repeat(indent)
    ))
}

fn structure_literal(map: &Map<String, Value>, indent: usize) -> Result<String, SerializeError> {
    check_nested(map.values())?;

    let pretty = serde_json::to_string_pretty(map)?;
    let lines: Vec<&str> = pretty.lines().collect();
    // Drop the outer `{` and `}` lines; `{}` is a single line with no body
    let body = if lines.len() > 2 {
        lines[1..lines.len() - 1].join("\n")
    } else {
        String::new()
    };

    Ok(format!(
        "{{{{\n{}\n{}}}}}",
        reindent(&body, indent),
        " ".repeat(indent)
    ))
}

/// Source text of a `{"$function": "..."}` marker object
fn function_source(map: &Map<String, Value>) -> Option<&str> {
    match map.get(FUNCTION_KEY) {
        Some(Value::String(source)) if map.len() == 1 => Some(source),
        _ => None,
    }
}

/// Reject excessive nesting and function markers below the top level, which
/// JSON pretty-printing would emit as plain objects. Walks iteratively so
/// hostile input cannot blow the stack here.
fn check_nested<'a>(children: impl Iterator<Item = &'a Value>) -> Result<(), SerializeError> {
    let mut stack: Vec<(&Value, usize)> = children.map(|v| (v, 1)).collect();
    while let Some((value, depth)) = stack.pop() {
        if depth > MAX_DEPTH {
            return Err(SerializeError::TooDeep { max: MAX_DEPTH });
        }
        match value {
            Value::Array(items) => stack.extend(items.iter().map(|v| (v, depth + 1))),
            Value::Object(map) => {
                if let Some(source) = function_source(map) {
                    return Err(SerializeError::NestedFunction {
                        source_text: source.to_string(),
                    });
                }
                stack.extend(map.values().map(|v| (v, depth + 1)));
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn value(v: Value) -> PropValue {
        PropValue::from(v)
    }

    #[test]
    fn test_scalars_become_expressions() {
        assert_eq!(serialize_default(&value(json!(true))).unwrap(), "{true}");
        assert_eq!(serialize_default(&value(json!(false))).unwrap(), "{false}");
        assert_eq!(serialize_default(&value(json!(42))).unwrap(), "{42}");
        assert_eq!(serialize_default(&value(json!(-0.5))).unwrap(), "{-0.5}");
    }

    #[test]
    fn test_string_is_quoted() {
        assert_eq!(serialize_default(&value(json!("x"))).unwrap(), "\"x\"");
        assert_eq!(serialize_default(&value(json!(""))).unwrap(), "\"\"");
    }

    #[test]
    fn test_string_with_quote_becomes_expression() {
        let out = serialize_default(&value(json!("say \"hi\""))).unwrap();
        assert_eq!(out, r#"{"say \"hi\""}"#);
    }

    #[test]
    fn test_function_reference_is_unquoted() {
        let f = value(json!({ "$function": "d => d.value" }));
        assert_eq!(f, PropValue::FunctionRef("d => d.value".to_string()));
        assert_eq!(serialize_default(&f).unwrap(), "{d => d.value}");
    }

    #[test]
    fn test_blank_function_is_rejected() {
        let f = PropValue::FunctionRef("   ".to_string());
        assert!(matches!(serialize_default(&f), Err(SerializeError::EmptyFunction)));
    }

    #[test]
    fn test_function_key_with_siblings_is_a_plain_object() {
        let v = value(json!({ "$function": "f", "other": 1 }));
        assert!(matches!(v, PropValue::Structure(_)));
    }

    #[test]
    fn test_string_with_entity_becomes_expression() {
        let out = serialize_default(&value(json!("a &amp; b"))).unwrap();
        assert_eq!(out, r#"{"a &amp; b"}"#);
    }

    #[test]
    fn test_function_inside_structure_is_rejected() {
        let v = value(json!({ "format": { "$function": "d => d" } }));
        match serialize_default(&v) {
            Err(SerializeError::NestedFunction { source_text }) => assert_eq!(source_text, "d => d"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_function_inside_array_is_rejected() {
        let v = value(json!([1, { "$function": "() => 2" }]));
        assert!(matches!(
            serialize_default(&v),
            Err(SerializeError::NestedFunction { .. })
        ));
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(serialize_default(&value(json!([]))).unwrap(), "{[\n\n    ]}");
    }

    #[test]
    fn test_array_one_element_per_line() {
        assert_eq!(
            serialize_default(&value(json!([1, 2]))).unwrap(),
            "{[\n    1,\n    2\n    ]}"
        );
        assert_eq!(
            serialize(&value(json!(["a", "b"])), 2).unwrap(),
            "{[\n  \"a\",\n  \"b\"\n  ]}"
        );
    }

    #[test]
    fn test_array_of_objects_reindents_every_line() {
        let out = serialize(&value(json!([{ "a": 1 }])), 2).unwrap();
        assert_eq!(out, "{[\n  {\n    \"a\": 1\n  }\n  ]}");
    }

    #[test]
    fn test_empty_structure() {
        assert_eq!(serialize_default(&value(json!({}))).unwrap(), "{{\n\n    }}");
    }

    #[test]
    fn test_structure_strips_outer_braces() {
        let out = serialize_default(&value(json!({ "top": 10, "left": 20 }))).unwrap();
        assert_eq!(out, "{{\n      \"top\": 10,\n      \"left\": 20\n    }}");
    }

    #[test]
    fn test_nested_structure_keeps_json_indentation() {
        let out = serialize(&value(json!({ "margin": { "top": 1 } })), 0).unwrap();
        assert_eq!(out, "{{\n  \"margin\": {\n    \"top\": 1\n  }\n}}");
    }

    #[test]
    fn test_null_is_an_expression() {
        assert_eq!(serialize_default(&PropValue::Null).unwrap(), "{null}");
    }

    #[test]
    fn test_excessive_nesting_is_rejected() {
        let mut v = json!(1);
        for _ in 0..(MAX_DEPTH + 1) {
            v = json!([v]);
        }
        assert!(matches!(
            serialize_default(&value(v)),
            Err(SerializeError::TooDeep { .. })
        ));
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let v = value(json!({ "b": [1, { "c": true }], "a": "x" }));
        assert_eq!(serialize_default(&v).unwrap(), serialize_default(&v).unwrap());
    }

    #[test]
    fn test_function_reference_round_trips_through_json() {
        let f = PropValue::FunctionRef("() => null".to_string());
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json, json!({ "$function": "() => null" }));
        assert_eq!(serde_json::from_value::<PropValue>(json).unwrap(), f);
    }
}
