//! Type-directed value coercion.
//!
//! Two symmetric pipelines turn input values into runtime values checked
//! against a [`Type`][crate::ast::Type]:
//!
//! * [`coerce_literal_value`] interprets an AST literal, substituting
//!   variables from the current bindings; it returns the first error it
//!   encounters, because its callers (argument assembly) only need yes/no.
//! * [`coerce_input_value`] interprets an already-parsed JSON value — the
//!   shape variable input arrives in — and accumulates every error of one
//!   call, each annotated with a `value.foo[0].bar` path, so a client sees
//!   all problems at once.
//!
//! [`coerce_variable_values`], [`coerce_argument_values`], and
//! [`coerce_directive_values`] assemble operation variables and
//! field/directive argument maps over these two primitives.

mod arguments;
mod input;
mod literal;
mod variables;

pub use self::arguments::coerce_argument_values;
pub use self::arguments::coerce_directive_values;
pub use self::input::coerce_input_value;
pub use self::literal::coerce_literal_value;
pub use self::variables::coerce_variable_values;

use crate::ast::Value;
use crate::error::Error;
use crate::JsonValue;

/// Convert a default value from its AST form to the runtime representation.
///
/// Defaults are literals: a variable reference inside one is a schema bug
/// and reported as such.
pub(crate) fn ast_value_to_json(value: &Value) -> Result<JsonValue, Error> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Variable(name) => Err(Error::coercion(format!(
            "variable \"${name}\" is not allowed in a default value"
        ))),
        Value::Enum(value) => Ok(value.as_str().into()),
        Value::String(value) => Ok(value.as_str().into()),
        Value::Boolean(value) => Ok((*value).into()),
        Value::Int(value) => Ok(JsonValue::Number((*value).into())),
        Value::Float(value) => Ok(crate::schema::json_float(value.into_inner())),
        Value::List(values) => values.iter().map(|value| ast_value_to_json(value)).collect(),
        Value::Object(fields) => fields
            .iter()
            .map(|(name, value)| Ok((name.as_str(), ast_value_to_json(value)?)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use serde_json_bytes::json;

    #[test]
    fn defaults_convert_structurally() {
        let value = Value::Object(vec![
            ("a".into(), Node::new(Value::Int(1))),
            (
                "b".into(),
                Node::new(Value::List(vec![
                    Node::new(Value::Enum("RED".into())),
                    Node::new(Value::Null),
                ])),
            ),
        ]);
        assert_eq!(
            ast_value_to_json(&value).unwrap(),
            json!({"a": 1, "b": ["RED", null]})
        );
    }

    #[test]
    fn variables_are_rejected_in_defaults() {
        let value = Value::List(vec![Node::new(Value::Variable("x".into()))]);
        assert_eq!(
            ast_value_to_json(&value).unwrap_err().message(),
            "variable \"$x\" is not allowed in a default value"
        );
    }
}
