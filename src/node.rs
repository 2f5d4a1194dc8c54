use crate::lexer::TokenSpan;
use std::fmt;
use std::hash;
use triomphe::Arc;

/// Smart pointer to some GraphQL AST node.
///
/// Thread-safe and reference-counted, so nodes can be shared between
/// documents without cloning entire subtrees. Additionally carries an
/// optional [`TokenSpan`]: the `[first, last]` range of tokens the node was
/// parsed from, including surrounding punctuation, which lets diagnostics
/// point at relevant parts of the input.
///
/// Equality and hashing ignore the span, so structurally equal nodes parsed
/// from different places compare equal.
#[derive(Hash, Eq, PartialEq)]
pub struct Node<T>(Arc<NodeInner<T>>);

#[derive(Clone)]
struct NodeInner<T> {
    span: Option<TokenSpan>,
    node: T,
}

impl<T> Node<T> {
    /// Create a new `Node` for something created programmatically, not
    /// parsed from an input document.
    pub fn new(node: T) -> Self {
        Self(Arc::new(NodeInner { span: None, node }))
    }

    /// Create a new `Node` for something parsed from the given token range.
    pub fn with_span(node: T, span: TokenSpan) -> Self {
        Self(Arc::new(NodeInner {
            span: Some(span),
            node,
        }))
    }

    /// The smallest token range enclosing all of this node's lexemes,
    /// or `None` for a synthetic node.
    pub fn span(&self) -> Option<TokenSpan> {
        self.0.span
    }

    /// Returns the given `node` at the same span as `self` (e.g. for a type
    /// conversion).
    pub fn same_span<U>(&self, node: U) -> Node<U> {
        Node(Arc::new(NodeInner {
            span: self.0.span,
            node,
        }))
    }

    /// Returns whether two `Node`s point to the same memory allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns a mutable reference to `T`, cloning it if necessary.
    ///
    /// See [`Arc::make_mut`].
    pub fn make_mut(&mut self) -> &mut T
    where
        T: Clone,
    {
        &mut Arc::make_mut(&mut self.0).node
    }

    /// Returns a mutable reference to `T` if this `Node` is uniquely owned.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        Arc::get_mut(&mut self.0).map(|inner| &mut inner.node)
    }
}

impl<T> std::ops::Deref for Node<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0.node
    }
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(span) = self.span() {
            write!(f, "@{:?}..{:?} ", span.first, span.last)?;
        }
        self.0.node.fmt(f)
    }
}

impl<T: Eq> Eq for NodeInner<T> {}

impl<T: PartialEq> PartialEq for NodeInner<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node // span not included
    }
}

impl<T: hash::Hash> hash::Hash for NodeInner<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.node.hash(state) // span not included
    }
}

impl<T> AsRef<T> for Node<T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T: Default> Default for Node<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenId;

    #[test]
    fn equality_ignores_span() {
        let span = TokenSpan::new(TokenId::new(1), TokenId::new(3));
        let synthetic = Node::new("a");
        let parsed = Node::with_span("a", span);
        assert_eq!(synthetic, parsed);
        assert!(!synthetic.ptr_eq(&parsed));
        assert_eq!(parsed.span(), Some(span));
        assert_eq!(synthetic.span(), None);
    }

    #[test]
    fn make_mut_is_copy_on_write() {
        let mut node = Node::new(vec![1]);
        let shared = node.clone();
        node.make_mut().push(2);
        assert_eq!(*node, vec![1, 2]);
        assert_eq!(*shared, vec![1]);
    }
}
