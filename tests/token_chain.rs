use graphql_front::ast::Argument;
use graphql_front::ast::Field;
use graphql_front::ast::Selection;
use graphql_front::ast::SelectionSet;
use graphql_front::ast::Value;
use graphql_front::Lexer;
use graphql_front::Node;
use graphql_front::TokenId;
use graphql_front::TokenKind;
use graphql_front::TokenSpan;
use graphql_front::TokenStream;
use pretty_assertions::assert_eq;

fn lex(input: &str) -> TokenStream {
    Lexer::new(input).finish().expect("lexes without errors")
}

/// Walking prev/next round-trips every token, and the chain is anchored at
/// SOF and EOF.
#[test]
fn chain_integrity() {
    let source = unindent::unindent(
        r#"
        query q {
          # leading comment
          a(x: 1.5, y: """block""")
        }"#,
    );
    let source = source.as_str();
    let stream = lex(source);
    for (id, token) in stream.iter() {
        if let Some(prev) = stream.prev(id) {
            assert_eq!(stream.next(prev), Some(id));
        } else {
            assert_eq!(token.kind(), TokenKind::Sof);
            assert_eq!(token.index(), 0);
        }
        if let Some(next) = stream.next(id) {
            assert_eq!(stream.prev(next), Some(id));
        } else {
            assert_eq!(token.kind(), TokenKind::Eof);
            assert_eq!(token.index(), source.len());
        }
    }
    assert_eq!(stream.get(stream.sof()).kind(), TokenKind::Sof);
    assert_eq!(stream.get(stream.eof()).kind(), TokenKind::Eof);
}

/// Every token's lexeme is reproduced by slicing the source at its
/// offset/length, even where the token value was processed.
#[test]
fn source_coverage() {
    let source = "query q { a(x: 1.5, s: \"a\\tb\") # trailing\n}";
    let stream = lex(source);
    for (id, token) in stream.iter() {
        assert_eq!(stream.lexeme(id), &source[token.index()..token.end()]);
        match token.kind() {
            TokenKind::Name | TokenKind::Int | TokenKind::Float => {
                assert_eq!(token.value(), stream.lexeme(id));
            }
            TokenKind::StringValue => {
                assert_eq!(token.value(), "a\tb");
                assert_eq!(stream.lexeme(id), "\"a\\tb\"");
            }
            _ => {}
        }
    }
}

/// AST spans recorded over the chain enclose their children's spans, with
/// surrounding punctuation included.
#[test]
fn ranges_enclose_children() {
    // Token ids:    0    1  2  3  4   5  6  7  8  9
    //               SOF  {  a  (  id  :  4  )  }  EOF
    let stream = lex("{ a(id: 4) }");

    let value = Node::with_span(Value::Int(4), TokenSpan::single(TokenId::new(6)));
    let argument = Node::with_span(
        Argument {
            name: "id".into(),
            value: value.clone(),
        },
        TokenSpan::new(TokenId::new(4), TokenId::new(6)),
    );
    let field = Node::with_span(
        Field {
            alias: None,
            name: "a".into(),
            arguments: vec![argument.clone()],
            directives: Vec::new(),
            selection_set: None,
        },
        TokenSpan::new(TokenId::new(2), TokenId::new(7)),
    );
    let selection_set = Node::with_span(
        SelectionSet {
            selections: vec![Selection::Field(field.clone())],
        },
        TokenSpan::new(TokenId::new(1), TokenId::new(8)),
    );

    // The set's range starts at `{` and ends at `}`; the field's ends at its
    // closing `)`.
    assert_eq!(stream.lexeme(selection_set.span().unwrap().first), "{");
    assert_eq!(stream.lexeme(selection_set.span().unwrap().last), "}");
    assert_eq!(stream.lexeme(field.span().unwrap().last), ")");

    let pairs: [(TokenSpan, TokenSpan); 3] = [
        (selection_set.span().unwrap(), field.span().unwrap()),
        (field.span().unwrap(), argument.span().unwrap()),
        (argument.span().unwrap(), value.span().unwrap()),
    ];
    for (parent, child) in pairs {
        let parent_first = stream.get(parent.first);
        let parent_last = stream.get(parent.last);
        let child_first = stream.get(child.first);
        let child_last = stream.get(child.last);
        assert!(parent_first.index() <= child_first.index());
        assert!(parent_last.end() >= child_last.end());
    }
}

/// An empty selection set still spans its brace tokens.
#[test]
fn empty_braces_keep_their_span() {
    let stream = lex("{ }");
    let selection_set = Node::with_span(
        SelectionSet::default(),
        TokenSpan::new(TokenId::new(1), TokenId::new(2)),
    );
    let span = selection_set.span().unwrap();
    assert_eq!(stream.get(span.first).kind(), TokenKind::LCurly);
    assert_eq!(stream.get(span.last).kind(), TokenKind::RCurly);
}

/// A variable value's range spans `$` through the name.
#[test]
fn variable_values_span_dollar_through_name() {
    let stream = lex("$foo");
    let variable = Node::with_span(
        Value::Variable("foo".into()),
        TokenSpan::new(TokenId::new(1), TokenId::new(2)),
    );
    let span = variable.span().unwrap();
    assert_eq!(stream.get(span.first).kind(), TokenKind::Dollar);
    assert_eq!(stream.lexeme(span.last), "foo");
    let start = stream.get(span.first).index();
    let end = stream.get(span.last).end();
    assert_eq!(&"$foo"[start..end], "$foo");
}

/// Punctuation is reachable from interior tokens through the chain, and
/// comments occupy their own links.
#[test]
fn braces_are_reachable_through_the_chain() {
    let stream = lex("{ a }");
    // `a` is token 2; its neighbours are the braces.
    let a = TokenId::new(2);
    assert_eq!(stream.lexeme(a), "a");
    let prev = stream.prev(a).unwrap();
    let next = stream.next(a).unwrap();
    assert_eq!(stream.get(prev).kind(), TokenKind::LCurly);
    assert_eq!(stream.get(next).kind(), TokenKind::RCurly);

    let stream = lex("{ # c\na }");
    // With a comment in between, the chain neighbour is the comment itself.
    let a = TokenId::new(3);
    assert_eq!(stream.lexeme(a), "a");
    let prev = stream.prev(a).unwrap();
    assert_eq!(stream.get(prev).kind(), TokenKind::Comment);
    assert_eq!(stream.get(stream.prev(prev).unwrap()).kind(), TokenKind::LCurly);
}
