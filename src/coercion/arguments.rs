use super::ast_value_to_json;
use super::coerce_literal_value;
use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Value;
use crate::error::Error;
use crate::lexer::TokenStream;
use crate::node::Node;
use crate::schema::DirectiveDef;
use crate::schema::InputValueDef;
use crate::schema::TypeMap;
use crate::JsonMap;
use crate::JsonValue;

/// Build the coerced argument map for a field or directive.
///
/// Combines the definition's argument specs with the arguments provided on
/// an AST node and the current variable bindings. Fails on the first
/// problem: argument assembly only needs yes/no, and its caller aborts the
/// field on any failure. A bound variable's value is used verbatim — the
/// variable was coerced when the request's variable values were, and
/// validation has already matched its declared type against the argument.
pub fn coerce_argument_values(
    tokens: Option<&TokenStream>,
    arg_defs: &[Node<InputValueDef>],
    arguments: &[Node<Argument>],
    types: &TypeMap,
    variables: &JsonMap,
) -> Result<JsonMap, Error> {
    let mut coerced = JsonMap::new();
    for def in arg_defs {
        let name = def.name.as_str();
        let Some(argument) = arguments.iter().find(|argument| argument.name == def.name) else {
            if let Some(default) = &def.default_value {
                coerced.insert(name, ast_value_to_json(default)?);
            } else if def.ty.is_non_null() {
                return Err(Error::coercion(format!(
                    "Argument \"{name}\" of required type \"{}\" was provided.",
                    def.ty
                )));
            }
            continue;
        };
        let location = tokens
            .zip(argument.value.span())
            .map(|(tokens, span)| tokens.line_column(span.first));
        match argument.value.as_ref() {
            Value::Variable(variable_name) => {
                match variables.get(variable_name.as_str()) {
                    Some(bound) => {
                        if bound.is_null() && def.ty.is_non_null() {
                            return Err(Error::coercion(format!(
                                "Argument \"{name}\" of non-null type \"{}\" must not be null.",
                                def.ty
                            ))
                            .with_location(location));
                        }
                        coerced.insert(name, bound.clone());
                    }
                    None => {
                        if let Some(default) = &def.default_value {
                            coerced.insert(name, ast_value_to_json(default)?);
                        } else if def.ty.is_non_null() {
                            return Err(Error::coercion(format!(
                                "Argument \"{name}\" of required type \"{}\" was provided \
                                 the variable \"${variable_name}\" which was not provided \
                                 a runtime value.",
                                def.ty
                            ))
                            .with_location(location));
                        }
                        // Nullable and unbound: the argument is omitted.
                    }
                }
            }
            Value::Null => {
                if def.ty.is_non_null() {
                    return Err(Error::coercion(format!(
                        "Argument \"{name}\" of non-null type \"{}\" must not be null.",
                        def.ty
                    ))
                    .with_location(location));
                }
                coerced.insert(name, JsonValue::Null);
            }
            _ => match coerce_literal_value(Some(&argument.value), &def.ty, types, variables) {
                Ok(value) => {
                    coerced.insert(name, value);
                }
                Err(inner) => {
                    return Err(Error::coercion(format!(
                        "Argument \"{name}\" has invalid value {}.",
                        argument.value.as_ref()
                    ))
                    .with_location(location)
                    .with_cause(inner));
                }
            },
        }
    }
    Ok(coerced)
}

/// Build the coerced argument map for the first directive on `directives`
/// matching `def`, or an empty map when the node carries no such directive.
pub fn coerce_directive_values(
    tokens: Option<&TokenStream>,
    def: &DirectiveDef,
    directives: &[Node<Directive>],
    types: &TypeMap,
    variables: &JsonMap,
) -> Result<JsonMap, Error> {
    match directives
        .iter()
        .find(|directive| directive.name == def.name)
    {
        Some(directive) => {
            coerce_argument_values(tokens, &def.arguments, &directive.arguments, types, variables)
        }
        None => Ok(JsonMap::new()),
    }
}
