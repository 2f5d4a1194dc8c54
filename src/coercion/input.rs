use super::ast_value_to_json;
use crate::ast::Type;
use crate::error::format_path;
use crate::error::Error;
use crate::error::PathElement;
use crate::schema::InputObjectType;
use crate::schema::InputTypeDef;
use crate::schema::TypeMap;
use crate::source::LineColumn;
use crate::suggestion::did_you_mean;
use crate::suggestion::suggestion_list;
use crate::JsonMap;
use crate::JsonValue;

/// Coerce an already-parsed input value (variable input) to `ty`.
///
/// Unlike the AST pipeline this accumulates: all errors of one call are
/// returned together, in declaration order for input-object fields and index
/// order for lists, depth-first. Each error carries `location` (resolved by
/// the caller from the blame AST node) and the path of the offending value.
pub fn coerce_input_value(
    value: &JsonValue,
    ty: &Type,
    types: &TypeMap,
    location: Option<LineColumn>,
) -> Result<JsonValue, Vec<Error>> {
    coerce(value, ty, types, location, None)
}

/// One step of the value path, chained up the stack.
#[derive(Clone, Copy)]
struct PathLink<'a> {
    parent: Option<&'a PathLink<'a>>,
    element: &'a PathElement,
}

fn path_vec(path: Option<&PathLink<'_>>) -> Vec<PathElement> {
    let mut elements = Vec::new();
    let mut link = path;
    while let Some(current) = link {
        elements.push(current.element.clone());
        link = current.parent;
    }
    elements.reverse();
    elements
}

fn coercion_error(
    base: impl Into<String>,
    location: Option<LineColumn>,
    path: Option<&PathLink<'_>>,
    sub_message: Option<String>,
    cause: Option<Error>,
) -> Error {
    let path = path_vec(path);
    let mut message = base.into();
    if !path.is_empty() {
        message.push_str(" at ");
        message.push_str(&format_path(&path));
    }
    match sub_message {
        Some(sub) => {
            message.push_str("; ");
            message.push_str(&sub);
        }
        None => message.push('.'),
    }
    let mut error = Error::coercion(message)
        .with_location(location)
        .with_path(path);
    if let Some(cause) = cause {
        error = error.with_cause(cause);
    }
    error
}

fn coerce(
    value: &JsonValue,
    ty: &Type,
    types: &TypeMap,
    location: Option<LineColumn>,
    path: Option<&PathLink<'_>>,
) -> Result<JsonValue, Vec<Error>> {
    if value.is_null() {
        return if ty.is_non_null() {
            Err(vec![coercion_error(
                format!("Expected non-nullable type {ty} not to be null"),
                location,
                path,
                None,
                None,
            )])
        } else {
            Ok(JsonValue::Null)
        };
    }
    let ty_name = match ty {
        Type::List(item) | Type::NonNullList(item) => {
            return coerce_list(value, item, types, location, path);
        }
        Type::Named(name) | Type::NonNullNamed(name) => name,
    };
    let Some(def) = types.get(ty_name.as_str()) else {
        return Err(vec![coercion_error(
            format!("could not coerce {value} to type \"{ty_name}\""),
            location,
            path,
            None,
            None,
        )]);
    };
    match def {
        InputTypeDef::Scalar(scalar) => match scalar.coerce_input(value) {
            Ok(coerced) => Ok(coerced),
            Err(scalar_error) => Err(vec![coercion_error(
                format!("Expected type {}", scalar.name),
                location,
                path,
                Some(scalar_error.message.clone()),
                Some(Error::generic(scalar_error.message)),
            )]),
        },
        InputTypeDef::Enum(enum_def) => {
            if let Some(name) = value.as_str() {
                if let Some(value_def) = enum_def.value(name) {
                    return Ok(value_def.value.clone());
                }
            }
            let suggestions = match value.as_str() {
                Some(name) => {
                    suggestion_list(name, enum_def.values.keys().map(String::as_str))
                }
                None => Vec::new(),
            };
            Err(vec![coercion_error(
                format!("Expected type {}", enum_def.name),
                location,
                path,
                did_you_mean(&suggestions),
                None,
            )])
        }
        InputTypeDef::InputObject(object) => coerce_object(value, object, types, location, path),
    }
}

fn coerce_list(
    value: &JsonValue,
    item_ty: &Type,
    types: &TypeMap,
    location: Option<LineColumn>,
    path: Option<&PathLink<'_>>,
) -> Result<JsonValue, Vec<Error>> {
    let Some(items) = value.as_array() else {
        // A non-sequence value coerces as a one-element list, at the same
        // path.
        let coerced = coerce(value, item_ty, types, location, path)?;
        return Ok(JsonValue::Array(vec![coerced]));
    };
    let mut coerced = Vec::with_capacity(items.len());
    let mut errors = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let element = PathElement::ListIndex(index);
        let link = PathLink {
            parent: path,
            element: &element,
        };
        match coerce(item, item_ty, types, location, Some(&link)) {
            Ok(value) => coerced.push(value),
            Err(item_errors) => errors.extend(item_errors),
        }
    }
    if errors.is_empty() {
        Ok(JsonValue::Array(coerced))
    } else {
        Err(errors)
    }
}

fn coerce_object(
    value: &JsonValue,
    object: &InputObjectType,
    types: &TypeMap,
    location: Option<LineColumn>,
    path: Option<&PathLink<'_>>,
) -> Result<JsonValue, Vec<Error>> {
    let Some(map) = value.as_object() else {
        return Err(vec![coercion_error(
            format!("Expected type {} to be an object", object.name),
            location,
            path,
            None,
            None,
        )]);
    };
    let mut coerced = JsonMap::new();
    let mut errors = Vec::new();
    for (field_name, field) in &object.fields {
        let element = PathElement::Field(field_name.clone());
        let link = PathLink {
            parent: path,
            element: &element,
        };
        match map.get(field_name.as_str()) {
            Some(field_value) => {
                match coerce(field_value, &field.ty, types, location, Some(&link)) {
                    Ok(value) => {
                        coerced.insert(field_name.as_str(), value);
                    }
                    Err(field_errors) => errors.extend(field_errors),
                }
            }
            None => {
                if let Some(default) = &field.default_value {
                    match ast_value_to_json(default) {
                        Ok(value) => {
                            coerced.insert(field_name.as_str(), value);
                        }
                        Err(error) => errors.push(error),
                    }
                } else if field.ty.is_non_null() {
                    let field_path = path_vec(Some(&link));
                    errors.push(
                        Error::coercion(format!(
                            "Field {} of required type {} was not provided.",
                            format_path(&field_path),
                            field.ty
                        ))
                        .with_location(location)
                        .with_path(field_path),
                    );
                }
            }
        }
    }
    for key in map.keys() {
        if !object.fields.contains_key(key.as_str()) {
            let suggestions =
                suggestion_list(key.as_str(), object.fields.keys().map(String::as_str));
            errors.push(coercion_error(
                format!(
                    "Field \"{}\" is not defined by type {}",
                    key.as_str(),
                    object.name
                ),
                location,
                path,
                did_you_mean(&suggestions),
                None,
            ));
        }
    }
    if errors.is_empty() {
        Ok(JsonValue::Object(coerced))
    } else {
        Err(errors)
    }
}
