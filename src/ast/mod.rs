//! *Abstract Syntax Tree* for executable GraphQL documents.
//!
//! This AST represents operations, fragments, selections, input values, type
//! references, and directives. Nodes are wrapped in [`Node`], a
//! reference-counted smart pointer carrying the token range the node was
//! parsed from, so any node can recover its covering `[first, last]` tokens
//! — surrounding punctuation included — for source-location reporting.
//!
//! The families here are closed: a `match` over [`Definition`],
//! [`Selection`], [`Value`], or [`Type`] is exhaustive. Type-system
//! definition syntax is out of scope; the schema side of the coercion
//! engine lives in [`crate::schema`].

use crate::node::Node;
use ordered_float::OrderedFloat;

mod impls;

/// A GraphQL identifier.
pub type Name = String;

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Definition {
    Operation(Node<OperationDefinition>),
    Fragment(Node<FragmentDefinition>),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct OperationDefinition {
    /// [`OperationType::Query`] for the shorthand form `{ field }` where the
    /// operation-type keyword is absent.
    pub operation_type: OperationType,
    pub name: Option<Name>,
    pub variables: Vec<Node<VariableDefinition>>,
    pub directives: Vec<Node<Directive>>,
    pub selection_set: Node<SelectionSet>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FragmentDefinition {
    pub name: Name,
    /// Experimental fragment variable definitions.
    pub variables: Vec<Node<VariableDefinition>>,
    pub type_condition: Name,
    pub directives: Vec<Node<Directive>>,
    pub selection_set: Node<SelectionSet>,
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

/// A brace-enclosed list of selections. An empty set still spans its brace
/// tokens through the wrapping [`Node`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Selection {
    Field(Node<Field>),
    FragmentSpread(Node<FragmentSpread>),
    InlineFragment(Node<InlineFragment>),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Node<Argument>>,
    pub directives: Vec<Node<Directive>>,
    pub selection_set: Option<Node<SelectionSet>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FragmentSpread {
    pub fragment_name: Name,
    pub directives: Vec<Node<Directive>>,
}

/// At least one of type condition, directives, and selection set is present
/// on every parsed inline fragment.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct InlineFragment {
    pub type_condition: Option<Name>,
    pub directives: Vec<Node<Directive>>,
    pub selection_set: Node<SelectionSet>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Argument {
    pub name: Name,
    pub value: Node<Value>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Node<Argument>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct VariableDefinition {
    pub name: Name,
    pub ty: Type,
    pub default_value: Option<Node<Value>>,
    pub directives: Vec<Node<Directive>>,
}

/// A reference to a type defined in the schema.
///
/// Non-null of non-null is not representable: the non-null variants wrap a
/// name or a list directly.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Type {
    Named(Name),
    NonNullNamed(Name),
    List(Box<Type>),
    NonNullList(Box<Type>),
}

/// An input-value literal.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Value {
    Null,
    Enum(Name),
    Variable(Name),
    String(
        /// The value after escape sequences are resolved.
        String,
    ),
    Float(OrderedFloat<f64>),
    Int(i32),
    Boolean(bool),
    List(Vec<Node<Value>>),
    Object(Vec<(Name, Node<Value>)>),
}
