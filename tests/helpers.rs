use graphql_front::ast::Type;
use graphql_front::ast::Value;
use graphql_front::schema::built_in_scalars;
use graphql_front::schema::EnumType;
use graphql_front::schema::EnumValueDef;
use graphql_front::schema::InputObjectType;
use graphql_front::schema::InputValueDef;
use graphql_front::schema::TypeMap;
use graphql_front::JsonMap;
use graphql_front::JsonValue;
use graphql_front::Node;

/// The built-in scalars plus the enum and input-object types the coercion
/// tests exercise.
pub fn test_types() -> TypeMap {
    let mut types = built_in_scalars();
    types.insert(
        "Color".into(),
        EnumType::new(
            "Color",
            [
                EnumValueDef::new("RED"),
                EnumValueDef::new("GREEN"),
                EnumValueDef::new("BLUE"),
            ],
        )
        .into(),
    );
    types.insert(
        "TestInput".into(),
        InputObjectType::new(
            "TestInput",
            [
                InputValueDef::new("int", Type::named("Int")).with_default(42),
                InputValueDef::new("bool", Type::named("Boolean")),
                InputValueDef::new("requiredBool", Type::non_null_named("Boolean")),
            ],
        )
        .into(),
    );
    types.insert(
        "TestInputObject".into(),
        InputObjectType::new(
            "TestInputObject",
            [
                InputValueDef::new("foo", Type::non_null_named("Int")),
                InputValueDef::new("bar", Type::named("Int")),
            ],
        )
        .into(),
    );
    types.insert(
        "Size".into(),
        InputObjectType::new(
            "Size",
            [
                InputValueDef::new("width", Type::named("Int")),
                InputValueDef::new("height", Type::named("Int")),
            ],
        )
        .into(),
    );
    types
}

pub fn object(fields: Vec<(&str, Value)>) -> Node<Value> {
    Node::new(Value::Object(
        fields
            .into_iter()
            .map(|(name, value)| (name.to_string(), Node::new(value)))
            .collect(),
    ))
}

pub fn list(items: Vec<Value>) -> Node<Value> {
    Node::new(Value::List(items.into_iter().map(Node::new).collect()))
}

pub fn var(name: &str) -> Node<Value> {
    Node::new(Value::Variable(name.into()))
}

/// Unwrap a `json!({...})` literal into a map of variable bindings.
pub fn json_map(value: JsonValue) -> JsonMap {
    match value {
        JsonValue::Object(map) => map,
        _ => panic!("expected an object"),
    }
}
