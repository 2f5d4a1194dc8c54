use super::coerce_input_value;
use super::coerce_literal_value;
use crate::ast::VariableDefinition;
use crate::error::Error;
use crate::lexer::TokenStream;
use crate::node::Node;
use crate::schema::TypeMap;
use crate::JsonMap;

/// Coerce client-supplied variable values to the types declared by an
/// operation's variable definitions.
///
/// Definitions are processed in order and errors accumulate, so a request
/// with several bad variables reports all of them. A definition absent from
/// `values` takes its default when it has one and is otherwise omitted from
/// the coerced map (when nullable) or reported (when non-null). Supplying a
/// `TokenStream` lets errors point at the offending variable definition.
pub fn coerce_variable_values(
    tokens: Option<&TokenStream>,
    variable_definitions: &[Node<VariableDefinition>],
    types: &TypeMap,
    values: &JsonMap,
) -> Result<JsonMap, Vec<Error>> {
    let mut coerced = JsonMap::new();
    let mut errors = Vec::new();
    for def in variable_definitions {
        let name = def.name.as_str();
        let location = tokens
            .zip(def.span())
            .map(|(tokens, span)| tokens.line_column(span.first));
        match values.get_key_value(name) {
            Some((key, value)) => {
                if value.is_null() && def.ty.is_non_null() {
                    errors.push(
                        Error::coercion(format!(
                            "Variable \"${name}\" of non-null type \"{}\" must not be null.",
                            def.ty
                        ))
                        .with_location(location),
                    );
                    continue;
                }
                match coerce_input_value(value, &def.ty, types, location) {
                    Ok(value) => {
                        coerced.insert(key.clone(), value);
                    }
                    Err(value_errors) => {
                        for error in value_errors {
                            errors.push(
                                Error::coercion(format!(
                                    "Variable \"${name}\" got invalid value {value}; {}",
                                    error.message
                                ))
                                .with_location(location)
                                .with_path(error.path.clone())
                                .with_cause(error),
                            );
                        }
                    }
                }
            }
            None => {
                if let Some(default) = &def.default_value {
                    // Defaults are literals coerced with no variables in
                    // scope.
                    match coerce_literal_value(Some(default), &def.ty, types, &JsonMap::new()) {
                        Ok(value) => {
                            coerced.insert(name, value);
                        }
                        Err(error) => errors.push(error.with_location(location)),
                    }
                } else if def.ty.is_non_null() {
                    errors.push(
                        Error::coercion(format!(
                            "Variable \"${name}\" of required type \"{}\" was not provided.",
                            def.ty
                        ))
                        .with_location(location),
                    );
                }
            }
        }
    }
    if errors.is_empty() {
        Ok(coerced)
    } else {
        Err(errors)
    }
}
