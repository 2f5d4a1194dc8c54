//! The slice of the type system the coercion engine consumes.
//!
//! The schema registry proper — building, validating, and storing a full
//! GraphQL schema — belongs to an outer layer. Coercion only needs the
//! *input* side of the type system: scalar adapters, enum value maps,
//! input-object field definitions, argument definitions, and a name-keyed
//! registry to resolve [`Type`] references against. Those interfaces are
//! defined here, together with adapters for the five built-in scalars.

use crate::ast::Name;
use crate::ast::Type;
use crate::ast::Value;
use crate::node::Node;
use crate::JsonValue;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Name-keyed registry of input type definitions, supplied by the schema
/// layer. [`Type`] references used in coercion resolve against this map;
/// types absent from it (including object, interface, and union types) are
/// not valid input types.
pub type TypeMap = IndexMap<Name, InputTypeDef>;

/// A named type usable in input positions.
#[derive(Debug, Clone)]
pub enum InputTypeDef {
    Scalar(Node<ScalarType>),
    Enum(Node<EnumType>),
    InputObject(Node<InputObjectType>),
}

impl InputTypeDef {
    pub fn name(&self) -> &str {
        match self {
            InputTypeDef::Scalar(def) => &def.name,
            InputTypeDef::Enum(def) => &def.name,
            InputTypeDef::InputObject(def) => &def.name,
        }
    }
}

impl From<ScalarType> for InputTypeDef {
    fn from(def: ScalarType) -> Self {
        InputTypeDef::Scalar(Node::new(def))
    }
}

impl From<EnumType> for InputTypeDef {
    fn from(def: EnumType) -> Self {
        InputTypeDef::Enum(Node::new(def))
    }
}

impl From<InputObjectType> for InputTypeDef {
    fn from(def: InputObjectType) -> Self {
        InputTypeDef::InputObject(Node::new(def))
    }
}

/// A scalar type together with its coercion adapter.
#[derive(Clone)]
pub struct ScalarType {
    pub name: Name,
    coercer: Arc<dyn ScalarCoercer>,
}

impl ScalarType {
    pub fn new(name: impl Into<Name>, coercer: impl ScalarCoercer + 'static) -> Self {
        Self {
            name: name.into(),
            coercer: Arc::new(coercer),
        }
    }

    pub fn coerce_literal(&self, value: &Value) -> Result<JsonValue, ScalarError> {
        self.coercer.coerce_literal(value)
    }

    pub fn coerce_input(&self, value: &JsonValue) -> Result<JsonValue, ScalarError> {
        self.coercer.coerce_input(value)
    }

    pub fn int() -> Self {
        Self::new("Int", IntCoercer)
    }

    pub fn float() -> Self {
        Self::new("Float", FloatCoercer)
    }

    pub fn string() -> Self {
        Self::new("String", StringCoercer)
    }

    pub fn boolean() -> Self {
        Self::new("Boolean", BooleanCoercer)
    }

    pub fn id() -> Self {
        Self::new("ID", IdCoercer)
    }
}

impl fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarType").field("name", &self.name).finish()
    }
}

/// Owns host-type acceptance for one scalar.
///
/// `coerce_literal` serves the AST pipeline; `coerce_input` serves the
/// variable-input pipeline. A [`ScalarError`]'s message becomes the
/// `; <sub-message>` suffix of the wrapping coercion error.
pub trait ScalarCoercer: Send + Sync {
    fn coerce_literal(&self, value: &Value) -> Result<JsonValue, ScalarError>;

    fn coerce_input(&self, value: &JsonValue) -> Result<JsonValue, ScalarError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ScalarError {
    pub message: String,
}

impl ScalarError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An enum type with its defined values, in declaration order.
#[derive(Debug, Clone)]
pub struct EnumType {
    pub name: Name,
    pub values: IndexMap<Name, EnumValueDef>,
}

impl EnumType {
    pub fn new(name: impl Into<Name>, values: impl IntoIterator<Item = EnumValueDef>) -> Self {
        Self {
            name: name.into(),
            values: values
                .into_iter()
                .map(|def| (def.name.clone(), def))
                .collect(),
        }
    }

    pub fn value(&self, name: &str) -> Option<&EnumValueDef> {
        self.values.get(name)
    }
}

/// One defined enum value and the internal value it coerces to.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValueDef {
    pub name: Name,
    pub value: JsonValue,
}

impl EnumValueDef {
    /// A value whose internal representation is its own name.
    pub fn new(name: impl Into<Name>) -> Self {
        let name = name.into();
        let value = name.as_str().into();
        Self { name, value }
    }

    pub fn with_value(name: impl Into<Name>, value: impl Into<JsonValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An input object type with its field definitions, in declaration order.
#[derive(Debug, Clone)]
pub struct InputObjectType {
    pub name: Name,
    pub fields: IndexMap<Name, Node<InputValueDef>>,
}

impl InputObjectType {
    pub fn new(name: impl Into<Name>, fields: impl IntoIterator<Item = InputValueDef>) -> Self {
        Self {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|def| (def.name.clone(), Node::new(def)))
                .collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Node<InputValueDef>> {
        self.fields.get(name)
    }
}

/// Definition of one input value: an input-object field or an argument.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValueDef {
    pub name: Name,
    pub ty: Type,
    pub default_value: Option<Node<Value>>,
}

impl InputValueDef {
    pub fn new(name: impl Into<Name>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default_value = Some(Node::new(default.into()));
        self
    }
}

/// Definition of a directive and its arguments.
#[derive(Debug, Clone)]
pub struct DirectiveDef {
    pub name: Name,
    pub arguments: Vec<Node<InputValueDef>>,
}

impl DirectiveDef {
    pub fn new(name: impl Into<Name>, arguments: impl IntoIterator<Item = InputValueDef>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into_iter().map(Node::new).collect(),
        }
    }
}

/// A finite `f64` as a JSON number (`null` for the non-finite values, which
/// no literal produces).
pub(crate) fn json_float(value: f64) -> JsonValue {
    serde_json_bytes::serde_json::Number::from_f64(value)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

/// A [`TypeMap`] holding the five built-in scalars.
pub fn built_in_scalars() -> TypeMap {
    [
        ScalarType::int(),
        ScalarType::float(),
        ScalarType::string(),
        ScalarType::boolean(),
        ScalarType::id(),
    ]
    .into_iter()
    .map(|scalar| (scalar.name.clone(), scalar.into()))
    .collect()
}

struct IntCoercer;

impl ScalarCoercer for IntCoercer {
    fn coerce_literal(&self, value: &Value) -> Result<JsonValue, ScalarError> {
        match value {
            Value::Int(i) => Ok(JsonValue::Number((*i).into())),
            _ => Err(ScalarError::new(format!(
                "Int cannot represent non-integer value: {value}"
            ))),
        }
    }

    fn coerce_input(&self, value: &JsonValue) -> Result<JsonValue, ScalarError> {
        if let Some(i) = value.as_i64() {
            return if i32::try_from(i).is_ok() {
                Ok(value.clone())
            } else {
                Err(ScalarError::new(format!(
                    "Int cannot represent non 32-bit signed integer value: {value}"
                )))
            };
        }
        if let Some(f) = value.as_f64() {
            if f.is_finite() && f.fract() == 0.0 {
                return if f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) {
                    Ok(value.clone())
                } else {
                    Err(ScalarError::new(format!(
                        "Int cannot represent non 32-bit signed integer value: {value}"
                    )))
                };
            }
        }
        Err(ScalarError::new(format!(
            "Int cannot represent non-integer value: {value}"
        )))
    }
}

struct FloatCoercer;

impl ScalarCoercer for FloatCoercer {
    fn coerce_literal(&self, value: &Value) -> Result<JsonValue, ScalarError> {
        match value {
            Value::Int(i) => Ok(JsonValue::Number((*i).into())),
            Value::Float(f) => Ok(json_float(f.into_inner())),
            _ => Err(ScalarError::new(format!(
                "Float cannot represent non numeric value: {value}"
            ))),
        }
    }

    fn coerce_input(&self, value: &JsonValue) -> Result<JsonValue, ScalarError> {
        match value.as_f64() {
            Some(f) if f.is_finite() => Ok(value.clone()),
            _ => Err(ScalarError::new(format!(
                "Float cannot represent non numeric value: {value}"
            ))),
        }
    }
}

struct StringCoercer;

impl ScalarCoercer for StringCoercer {
    fn coerce_literal(&self, value: &Value) -> Result<JsonValue, ScalarError> {
        match value {
            Value::String(s) => Ok(s.as_str().into()),
            _ => Err(ScalarError::new(format!(
                "String cannot represent a non string value: {value}"
            ))),
        }
    }

    fn coerce_input(&self, value: &JsonValue) -> Result<JsonValue, ScalarError> {
        if value.is_string() {
            Ok(value.clone())
        } else {
            Err(ScalarError::new(format!(
                "String cannot represent a non string value: {value}"
            )))
        }
    }
}

struct BooleanCoercer;

impl ScalarCoercer for BooleanCoercer {
    fn coerce_literal(&self, value: &Value) -> Result<JsonValue, ScalarError> {
        match value {
            Value::Boolean(b) => Ok((*b).into()),
            _ => Err(ScalarError::new(format!(
                "Boolean cannot represent a non boolean value: {value}"
            ))),
        }
    }

    fn coerce_input(&self, value: &JsonValue) -> Result<JsonValue, ScalarError> {
        if value.is_boolean() {
            Ok(value.clone())
        } else {
            Err(ScalarError::new(format!(
                "Boolean cannot represent a non boolean value: {value}"
            )))
        }
    }
}

struct IdCoercer;

impl ScalarCoercer for IdCoercer {
    fn coerce_literal(&self, value: &Value) -> Result<JsonValue, ScalarError> {
        match value {
            Value::String(s) => Ok(s.as_str().into()),
            Value::Int(i) => Ok(JsonValue::String(i.to_string().into())),
            _ => Err(ScalarError::new(format!("ID cannot represent value: {value}"))),
        }
    }

    fn coerce_input(&self, value: &JsonValue) -> Result<JsonValue, ScalarError> {
        if value.is_string() {
            return Ok(value.clone());
        }
        if let Some(i) = value.as_i64() {
            return Ok(JsonValue::String(i.to_string().into()));
        }
        Err(ScalarError::new(format!("ID cannot represent value: {value}")))
    }
}
