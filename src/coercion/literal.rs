use super::ast_value_to_json;
use crate::ast::Type;
use crate::ast::Value;
use crate::error::Error;
use crate::node::Node;
use crate::schema::InputObjectType;
use crate::schema::InputTypeDef;
use crate::schema::TypeMap;
use crate::JsonMap;
use crate::JsonValue;

/// Coerce an AST literal to `ty`, substituting variables from `variables`.
///
/// Variable bindings are assumed pre-coerced (validation precedes
/// execution) and pass through unchanged. Fails fast: the first error is
/// returned, without accumulation.
pub fn coerce_literal_value(
    value: Option<&Node<Value>>,
    ty: &Type,
    types: &TypeMap,
    variables: &JsonMap,
) -> Result<JsonValue, Error> {
    let Some(value) = value else {
        return Err(Error::coercion(format!("undefined value for type \"{ty}\"")));
    };
    coerce(value, ty, types, variables)
}

fn coerce(
    value: &Node<Value>,
    ty: &Type,
    types: &TypeMap,
    variables: &JsonMap,
) -> Result<JsonValue, Error> {
    // Variables are resolved against the full type, so a null binding can
    // be checked against the non-null wrapper before it is unwrapped.
    if let Value::Variable(name) = value.as_ref() {
        return match variables.get(name.as_str()) {
            None => Err(Error::coercion(format!(
                "value of variable \"${name}\" is undefined"
            ))),
            Some(bound) if bound.is_null() && ty.is_non_null() => Err(Error::coercion(format!(
                "variable \"${name}\" does not accept null value"
            ))),
            Some(bound) => Ok(bound.clone()),
        };
    }
    if value.is_null() {
        return if ty.is_non_null() {
            Err(Error::coercion(format!(
                "null cannot be assigned to non-null type \"{ty}\""
            )))
        } else {
            Ok(JsonValue::Null)
        };
    }
    let ty_name = match ty {
        Type::List(item) | Type::NonNullList(item) => {
            return coerce_list(value, item, types, variables);
        }
        Type::Named(name) | Type::NonNullNamed(name) => name,
    };
    let Some(def) = types.get(ty_name.as_str()) else {
        return Err(Error::coercion(format!(
            "could not coerce {} to type \"{ty_name}\"",
            value.as_ref()
        )));
    };
    match def {
        InputTypeDef::Scalar(scalar) => scalar.coerce_literal(value).map_err(|scalar_error| {
            Error::coercion(format!(
                "Expected type {}; {}",
                scalar.name, scalar_error.message
            ))
            .with_cause(Error::generic(scalar_error.message))
        }),
        InputTypeDef::Enum(enum_def) => match value.as_ref() {
            Value::Enum(name) => enum_def
                .value(name)
                .map(|value_def| value_def.value.clone())
                .ok_or_else(|| {
                    Error::coercion(format!(
                        "Expected type {}, found {}.",
                        enum_def.name,
                        value.as_ref()
                    ))
                }),
            other => Err(Error::coercion(format!(
                "Expected type {}, found {other}.",
                enum_def.name
            ))),
        },
        InputTypeDef::InputObject(object) => coerce_object(value, object, types, variables),
    }
}

fn coerce_list(
    value: &Node<Value>,
    item_ty: &Type,
    types: &TypeMap,
    variables: &JsonMap,
) -> Result<JsonValue, Error> {
    let Value::List(items) = value.as_ref() else {
        // A non-list literal coerces as a one-element list.
        let coerced = coerce(value, item_ty, types, variables)?;
        return Ok(JsonValue::Array(vec![coerced]));
    };
    let mut coerced = Vec::with_capacity(items.len());
    for item in items {
        // An element bound to a missing variable becomes null, unless the
        // element type forbids it, in which case the whole list is invalid.
        if let Value::Variable(name) = item.as_ref() {
            if !variables.contains_key(name.as_str()) {
                if item_ty.is_non_null() {
                    return Err(Error::coercion(format!(
                        "value of variable \"${name}\" is undefined"
                    )));
                }
                coerced.push(JsonValue::Null);
                continue;
            }
        }
        coerced.push(coerce(item, item_ty, types, variables)?);
    }
    Ok(JsonValue::Array(coerced))
}

fn coerce_object(
    value: &Node<Value>,
    object: &InputObjectType,
    types: &TypeMap,
    variables: &JsonMap,
) -> Result<JsonValue, Error> {
    let Value::Object(fields) = value.as_ref() else {
        return Err(Error::coercion(format!(
            "could not coerce {} to type \"{}\"",
            value.as_ref(),
            object.name
        )));
    };
    let mut coerced = JsonMap::new();
    // Unknown field names in the literal are ignored here; validation
    // reports them.
    for (field_name, field) in &object.fields {
        let provided = fields
            .iter()
            .find(|(name, _)| name == field_name)
            .map(|(_, value)| value);
        // A field whose value is a missing variable counts as not provided.
        let provided = match provided {
            Some(value) => match value.as_ref() {
                Value::Variable(name) if !variables.contains_key(name.as_str()) => None,
                _ => Some(value),
            },
            None => None,
        };
        match provided {
            Some(field_value) => {
                coerced.insert(
                    field_name.as_str(),
                    coerce(field_value, &field.ty, types, variables)?,
                );
            }
            None => {
                if let Some(default) = &field.default_value {
                    coerced.insert(field_name.as_str(), ast_value_to_json(default)?);
                } else if field.ty.is_non_null() {
                    return Err(Error::coercion(format!(
                        "missing value for non-null input object field \"{}.{field_name}\"",
                        object.name
                    )));
                }
            }
        }
    }
    Ok(JsonValue::Object(coerced))
}
