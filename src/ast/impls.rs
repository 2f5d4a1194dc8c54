use super::*;
use crate::lexer::TokenSpan;
use std::fmt;
use std::fmt::Write;

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Definition {
    pub fn span(&self) -> Option<TokenSpan> {
        match self {
            Definition::Operation(node) => node.span(),
            Definition::Fragment(node) => node.span(),
        }
    }
}

impl Selection {
    pub fn span(&self) -> Option<TokenSpan> {
        match self {
            Selection::Field(node) => node.span(),
            Selection::FragmentSpread(node) => node.span(),
            Selection::InlineFragment(node) => node.span(),
        }
    }
}

impl Field {
    /// The key this field's value is stored under in a response: the alias
    /// if one was given, the field name otherwise.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl OperationType {
    pub fn name(self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

impl Default for OperationType {
    fn default() -> Self {
        OperationType::Query
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Type {
    pub fn named(name: impl Into<Name>) -> Self {
        Type::Named(name.into())
    }

    pub fn non_null_named(name: impl Into<Name>) -> Self {
        Type::NonNullNamed(name.into())
    }

    pub fn list(item: Type) -> Self {
        Type::List(Box::new(item))
    }

    pub fn non_null_list(item: Type) -> Self {
        Type::NonNullList(Box::new(item))
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Type::NonNullNamed(_) | Type::NonNullList(_))
    }

    /// The name of the named type this reference bottoms out at.
    pub fn inner_named_type(&self) -> &Name {
        match self {
            Type::Named(name) | Type::NonNullNamed(name) => name,
            Type::List(inner) | Type::NonNullList(inner) => inner.inner_named_type(),
        }
    }
}

/// Prints `T`, `T!`, `[T]`, or `[T]!`.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Named(name) => f.write_str(name),
            Type::NonNullNamed(name) => write!(f, "{name}!"),
            Type::List(inner) => write!(f, "[{inner}]"),
            Type::NonNullList(inner) => write!(f, "[{inner}]!"),
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Value::Variable(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&str> {
        match self {
            Value::Enum(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node<Value>]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(Name, Node<Value>)]> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

/// Prints the value in GraphQL literal syntax, as it appears in diagnostics.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Enum(name) => f.write_str(name),
            Value::Variable(name) => write!(f, "${name}"),
            Value::String(value) => write_quoted(f, value),
            Value::Float(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::List(values) => {
                f.write_char('[')?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", **value)?;
                }
                f.write_char(']')
            }
            Value::Object(fields) => {
                f.write_char('{')?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {}", **value)?;
                }
                f.write_char('}')
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04X}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn types_display_in_graphql_syntax() {
        assert_eq!(Type::named("Int").to_string(), "Int");
        assert_eq!(Type::non_null_named("Int").to_string(), "Int!");
        assert_eq!(Type::list(Type::named("Int")).to_string(), "[Int]");
        assert_eq!(
            Type::non_null_list(Type::non_null_named("Int")).to_string(),
            "[Int!]!"
        );
    }

    #[test]
    fn values_display_in_graphql_syntax() {
        let value = Value::Object(vec![
            ("int".into(), Node::new(Value::Int(42))),
            ("float".into(), Node::new(Value::Float(4.5.into()))),
            ("string".into(), Node::new(Value::String("a \"b\"\n".into()))),
            ("color".into(), Node::new(Value::Enum("RED".into()))),
            ("var".into(), Node::new(Value::Variable("x".into()))),
            (
                "list".into(),
                Node::new(Value::List(vec![
                    Node::new(Value::Null),
                    Node::new(Value::Boolean(true)),
                ])),
            ),
        ]);
        assert_eq!(
            value.to_string(),
            r#"{int: 42, float: 4.5, string: "a \"b\"\n", color: RED, var: $x, list: [null, true]}"#
        );
    }

    #[test]
    fn shorthand_operations_are_queries() {
        let operation = OperationDefinition {
            operation_type: OperationType::default(),
            name: None,
            variables: Vec::new(),
            directives: Vec::new(),
            selection_set: Node::new(SelectionSet::default()),
        };
        assert_eq!(operation.operation_type, OperationType::Query);
    }

    #[test]
    fn response_key_prefers_the_alias() {
        let mut field = Field {
            alias: None,
            name: "name".into(),
            arguments: Vec::new(),
            directives: Vec::new(),
            selection_set: None,
        };
        assert_eq!(field.response_key(), "name");
        field.alias = Some("other".into());
        assert_eq!(field.response_key(), "other");
    }
}
