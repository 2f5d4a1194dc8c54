//! On-demand scanner for GraphQL documents.
//!
//! [`Lexer`] turns a [`Source`] into a chain of [`Token`]s, lexing one token
//! at a time as the caller pumps [`advance`][Lexer::advance]. Every token —
//! comments included — is recorded in the chain in source order, so the
//! higher-level parser can attach precise token ranges to AST nodes and a
//! printer can recover comments; `advance` and
//! [`lookahead`][Lexer::lookahead] themselves only ever return non-ignored
//! tokens.

mod block_string;
mod cursor;
mod token;

pub use self::block_string::dedent_block_string_value;
pub use self::token::Token;
pub use self::token::TokenId;
pub use self::token::TokenKind;
pub use self::token::TokenSpan;
pub use self::token::TokenStream;

use self::cursor::Cursor;
use crate::error::Error;
use crate::source::Source;
use std::sync::Arc;

/// A streaming lexer over one [`Source`].
///
/// Upon construction the current token is a synthetic [`TokenKind::Sof`].
/// Lexical errors are fatal for the current parse: the failed position is
/// not consumed, and lexing the same position again reports the same error.
pub struct Lexer {
    source: Arc<Source>,
    tokens: Vec<Token>,
    offset: usize,
    current: TokenId,
    pending: Option<TokenId>,
}

impl Lexer {
    pub fn new(source: impl Into<Source>) -> Self {
        Self {
            source: Arc::new(source.into()),
            tokens: vec![Token::punctuator(TokenKind::Sof, 0, 0)],
            offset: 0,
            current: TokenId::new(0),
            pending: None,
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    /// The current non-ignored token.
    pub fn current(&self) -> &Token {
        &self.tokens[self.current.index()]
    }

    pub fn current_id(&self) -> TokenId {
        self.current
    }

    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    /// Move to the next non-ignored token, lexing on demand.
    ///
    /// Once [`TokenKind::Eof`] has been reached, every further call returns
    /// the same token.
    pub fn advance(&mut self) -> Result<TokenId, Error> {
        if let Some(id) = self.pending.take() {
            self.current = id;
            return Ok(id);
        }
        if self.current().kind() == TokenKind::Eof {
            return Ok(self.current);
        }
        let id = self.lex_non_ignored()?;
        self.current = id;
        Ok(id)
    }

    /// The next non-ignored token, without consuming it.
    pub fn lookahead(&mut self) -> Result<TokenId, Error> {
        if let Some(id) = self.pending {
            return Ok(id);
        }
        if self.current().kind() == TokenKind::Eof {
            return Ok(self.current);
        }
        let id = self.lex_non_ignored()?;
        self.pending = Some(id);
        Ok(id)
    }

    /// Lex the remainder of the document and return the completed chain.
    pub fn finish(mut self) -> Result<TokenStream, Error> {
        while self.current().kind() != TokenKind::Eof {
            self.advance()?;
        }
        Ok(TokenStream::new(self.source, self.tokens))
    }

    fn lex_non_ignored(&mut self) -> Result<TokenId, Error> {
        loop {
            let (token, next_offset) = next_token(&self.source, self.offset)?;
            self.offset = next_offset;
            let id = TokenId::new(self.tokens.len());
            let ignored = token.kind().is_ignored();
            self.tokens.push(token);
            if !ignored {
                return Ok(id);
            }
        }
    }
}

fn next_token(source: &Source, offset: usize) -> Result<(Token, usize), Error> {
    let mut cursor = Cursor::new(source.text(), offset);
    skip_ignored(&mut cursor);
    let start = cursor.offset();
    let token = match cursor.peek() {
        None => Token::punctuator(TokenKind::Eof, start, 0),
        Some(b'"') => string_value(source, &mut cursor)?,
        Some(b'#') => comment(&mut cursor),
        Some(b'.') => spread(source, &mut cursor)?,
        Some(b'-' | b'0'..=b'9') => number(source, &mut cursor)?,
        Some(c) if is_name_start(c) => name(&mut cursor),
        Some(b'!') => single(TokenKind::Bang, &mut cursor),
        Some(b'$') => single(TokenKind::Dollar, &mut cursor),
        Some(b'&') => single(TokenKind::Amp, &mut cursor),
        Some(b'(') => single(TokenKind::LParen, &mut cursor),
        Some(b')') => single(TokenKind::RParen, &mut cursor),
        Some(b':') => single(TokenKind::Colon, &mut cursor),
        Some(b'=') => single(TokenKind::Eq, &mut cursor),
        Some(b'@') => single(TokenKind::At, &mut cursor),
        Some(b'[') => single(TokenKind::LBracket, &mut cursor),
        Some(b']') => single(TokenKind::RBracket, &mut cursor),
        Some(b'{') => single(TokenKind::LCurly, &mut cursor),
        Some(b'|') => single(TokenKind::Pipe, &mut cursor),
        Some(b'}') => single(TokenKind::RCurly, &mut cursor),
        Some(b'\'') => {
            return Err(Error::syntax(
                "Unexpected single quote character ('), did you mean to use a double quote (\")?",
                source.line_column(start),
            ))
        }
        Some(c) => {
            let rendered = print_char(cursor.peek_char());
            let message = if c < 0x20 {
                format!("Cannot contain the invalid character {rendered}.")
            } else {
                format!("Cannot parse the unexpected character {rendered}.")
            };
            return Err(Error::syntax(message, source.line_column(start)));
        }
    };
    Ok((token, cursor.offset()))
}

/// Consume ignored characters: an initial BOM, whitespace, commas, and line
/// terminators. Comments are not ignored *characters*; they become tokens.
fn skip_ignored(cursor: &mut Cursor) {
    if cursor.offset() == 0 && cursor.peek_char() == Some('\u{FEFF}') {
        cursor.bump_char();
    }
    while matches!(cursor.peek(), Some(b'\t' | b' ' | b',' | b'\n' | b'\r')) {
        cursor.bump();
    }
}

fn single(kind: TokenKind, cursor: &mut Cursor) -> Token {
    let start = cursor.offset();
    cursor.bump();
    Token::punctuator(kind, start, 1)
}

fn spread(source: &Source, cursor: &mut Cursor) -> Result<Token, Error> {
    let start = cursor.offset();
    if cursor.peek_at(1) == Some(b'.') && cursor.peek_at(2) == Some(b'.') {
        cursor.bump();
        cursor.bump();
        cursor.bump();
        Ok(Token::punctuator(TokenKind::Spread, start, 3))
    } else {
        Err(Error::syntax(
            "Cannot parse the unexpected character \".\".",
            source.line_column(start),
        ))
    }
}

fn name(cursor: &mut Cursor) -> Token {
    let start = cursor.offset();
    cursor.bump();
    while matches!(cursor.peek(), Some(c) if is_name_continue(c)) {
        cursor.bump();
    }
    let text = cursor.slice(start);
    Token::new(TokenKind::Name, start, text.len(), text.to_string())
}

fn number(source: &Source, cursor: &mut Cursor) -> Result<Token, Error> {
    let start = cursor.offset();
    let mut kind = TokenKind::Int;
    cursor.eat(b'-');
    if cursor.eat(b'0') {
        if matches!(cursor.peek(), Some(c) if c.is_ascii_digit()) {
            return Err(Error::syntax(
                format!(
                    "Invalid number, unexpected digit after 0: {}.",
                    print_char(cursor.peek_char())
                ),
                source.line_column(cursor.offset()),
            ));
        }
    } else {
        expect_digits(source, cursor)?;
    }
    if cursor.eat(b'.') {
        kind = TokenKind::Float;
        expect_digits(source, cursor)?;
    }
    if matches!(cursor.peek(), Some(b'e' | b'E')) {
        kind = TokenKind::Float;
        cursor.bump();
        if matches!(cursor.peek(), Some(b'+' | b'-')) {
            cursor.bump();
        }
        expect_digits(source, cursor)?;
    }
    let text = cursor.slice(start);
    Ok(Token::new(kind, start, text.len(), text.to_string()))
}

fn expect_digits(source: &Source, cursor: &mut Cursor) -> Result<(), Error> {
    if !matches!(cursor.peek(), Some(c) if c.is_ascii_digit()) {
        return Err(Error::syntax(
            format!(
                "Invalid number, expected digit but got: {}.",
                print_char(cursor.peek_char())
            ),
            source.line_column(cursor.offset()),
        ));
    }
    while matches!(cursor.peek(), Some(c) if c.is_ascii_digit()) {
        cursor.bump();
    }
    Ok(())
}

fn string_value(source: &Source, cursor: &mut Cursor) -> Result<Token, Error> {
    if cursor.peek_at(1) == Some(b'"') && cursor.peek_at(2) == Some(b'"') {
        return block_string_token(source, cursor);
    }
    let start = cursor.offset();
    cursor.bump(); // opening quote
    let mut value = String::new();
    loop {
        match cursor.peek() {
            None | Some(b'\n' | b'\r') => {
                return Err(Error::syntax(
                    "Unterminated string.",
                    source.line_column(cursor.offset()),
                ));
            }
            Some(b'"') => {
                cursor.bump();
                break;
            }
            Some(b'\\') => escaped_character(source, cursor, &mut value)?,
            Some(c) if c < 0x20 && c != b'\t' => {
                return Err(Error::syntax(
                    format!(
                        "Invalid character within String: {}.",
                        print_char(cursor.peek_char())
                    ),
                    source.line_column(cursor.offset()),
                ));
            }
            Some(_) => {
                if let Some(c) = cursor.bump_char() {
                    value.push(c);
                }
            }
        }
    }
    Ok(Token::new(
        TokenKind::StringValue,
        start,
        cursor.offset() - start,
        value,
    ))
}

fn escaped_character(source: &Source, cursor: &mut Cursor, value: &mut String) -> Result<(), Error> {
    let backslash = cursor.offset();
    cursor.bump(); // backslash
    let escaped = match cursor.peek() {
        Some(b'"') => '"',
        Some(b'\\') => '\\',
        Some(b'/') => '/',
        Some(b'b') => '\u{0008}',
        Some(b'f') => '\u{000C}',
        Some(b'n') => '\n',
        Some(b'r') => '\r',
        Some(b't') => '\t',
        Some(b'u') => {
            cursor.bump();
            return unicode_escape(source, cursor, backslash, value);
        }
        None => {
            return Err(Error::syntax(
                "Unterminated string.",
                source.line_column(cursor.offset()),
            ));
        }
        Some(_) => {
            let escape: String = cursor.peek_char().map(String::from).unwrap_or_default();
            return Err(Error::syntax(
                format!("Invalid character escape sequence: \\{escape}."),
                source.line_column(backslash),
            ));
        }
    };
    cursor.bump();
    value.push(escaped);
    Ok(())
}

fn unicode_escape(
    source: &Source,
    cursor: &mut Cursor,
    backslash: usize,
    value: &mut String,
) -> Result<(), Error> {
    let hex_start = cursor.offset();
    let mut code: u32 = 0;
    for _ in 0..4 {
        match cursor.peek().map(char::from).and_then(|c| c.to_digit(16)) {
            Some(digit) => {
                code = code * 16 + digit;
                cursor.bump();
            }
            None => return Err(invalid_unicode_escape(source, hex_start, backslash)),
        }
    }
    match char::from_u32(code) {
        Some(c) => {
            value.push(c);
            Ok(())
        }
        // Not a Unicode scalar value (an unpaired surrogate).
        None => Err(invalid_unicode_escape(source, hex_start, backslash)),
    }
}

fn invalid_unicode_escape(source: &Source, hex_start: usize, backslash: usize) -> Error {
    let sequence: String = source.text()[hex_start..].chars().take(4).collect();
    Error::syntax(
        format!("Invalid character escape sequence: \\u{sequence}."),
        source.line_column(backslash),
    )
}

fn block_string_token(source: &Source, cursor: &mut Cursor) -> Result<Token, Error> {
    let start = cursor.offset();
    cursor.bump();
    cursor.bump();
    cursor.bump();
    let mut raw = String::new();
    loop {
        match cursor.peek() {
            None => {
                return Err(Error::syntax(
                    "Unterminated string.",
                    source.line_column(cursor.offset()),
                ));
            }
            Some(b'"') if cursor.peek_at(1) == Some(b'"') && cursor.peek_at(2) == Some(b'"') => {
                cursor.bump();
                cursor.bump();
                cursor.bump();
                break;
            }
            Some(b'\\')
                if cursor.peek_at(1) == Some(b'"')
                    && cursor.peek_at(2) == Some(b'"')
                    && cursor.peek_at(3) == Some(b'"') =>
            {
                raw.push_str("\"\"\"");
                cursor.bump();
                cursor.bump();
                cursor.bump();
                cursor.bump();
            }
            Some(c) if c < 0x20 && !matches!(c, b'\t' | b'\n' | b'\r') => {
                return Err(Error::syntax(
                    format!(
                        "Invalid character within String: {}.",
                        print_char(cursor.peek_char())
                    ),
                    source.line_column(cursor.offset()),
                ));
            }
            Some(_) => {
                if let Some(c) = cursor.bump_char() {
                    raw.push(c);
                }
            }
        }
    }
    let value = dedent_block_string_value(&raw);
    Ok(Token::new(
        TokenKind::BlockString,
        start,
        cursor.offset() - start,
        value,
    ))
}

fn comment(cursor: &mut Cursor) -> Token {
    let start = cursor.offset();
    cursor.bump(); // '#'
    let text_start = cursor.offset();
    while matches!(cursor.peek(), Some(c) if c >= 0x20 || c == b'\t') {
        cursor.bump();
    }
    let text = cursor.slice(text_start);
    Token::new(
        TokenKind::Comment,
        start,
        cursor.offset() - start,
        text.to_string(),
    )
}

fn is_name_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_name_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Render a character the way diagnostics expect: printable ASCII quoted,
/// everything else as `"\uXXXX"`, end of input as `<EOF>`.
fn print_char(c: Option<char>) -> String {
    match c {
        None => "<EOF>".to_string(),
        Some(c @ ' '..='~') => match c {
            '"' => "\"\\\"\"".to_string(),
            '\\' => "\"\\\\\"".to_string(),
            c => format!("\"{c}\""),
        },
        Some(c) => format!("\"\\u{:04X}\"", c as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use pretty_assertions::assert_eq;

    fn lex(input: &str) -> TokenStream {
        Lexer::new(input).finish().expect("lexes without errors")
    }

    fn lex_error(input: &str) -> Error {
        Lexer::new(input).finish().expect_err("expected a lex error")
    }

    fn kinds(stream: &TokenStream) -> Vec<TokenKind> {
        stream.iter().map(|(_, token)| token.kind()).collect()
    }

    #[test]
    fn lexes_a_query() {
        let stream = lex("query queryName($foo: ComplexType) { field(id: 123) }");
        expect![[r#"
            SOF@0:0
            NAME@0:5 "query"
            NAME@6:15 "queryName"
            L_PAREN@15:16
            DOLLAR@16:17
            NAME@17:20 "foo"
            COLON@20:21
            NAME@22:33 "ComplexType"
            R_PAREN@33:34
            L_CURLY@35:36
            NAME@37:42 "field"
            L_PAREN@42:43
            NAME@43:45 "id"
            COLON@45:46
            INT@47:50 "123"
            R_PAREN@50:51
            R_CURLY@52:53
            EOF@53:53
        "#]]
        .assert_eq(&format!("{stream:?}"));
    }

    #[test]
    fn lexes_punctuators() {
        let stream = lex("! $ & ( ) ... : = @ [ ] { | }");
        assert_eq!(
            kinds(&stream),
            vec![
                TokenKind::Sof,
                TokenKind::Bang,
                TokenKind::Dollar,
                TokenKind::Amp,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Spread,
                TokenKind::Colon,
                TokenKind::Eq,
                TokenKind::At,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LCurly,
                TokenKind::Pipe,
                TokenKind::RCurly,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keywords_lex_as_names() {
        let stream = lex("true false null on fragment query");
        let values: Vec<&str> = stream
            .iter()
            .filter(|(_, token)| token.kind() == TokenKind::Name)
            .map(|(_, token)| token.value())
            .collect();
        assert_eq!(values, vec!["true", "false", "null", "on", "fragment", "query"]);
    }

    #[test]
    fn commas_and_bom_are_ignored() {
        let stream = lex("\u{FEFF}a, b,,\tc\r\nd");
        let values: Vec<&str> = stream
            .iter()
            .filter(|(_, token)| token.kind() == TokenKind::Name)
            .map(|(_, token)| token.value())
            .collect();
        assert_eq!(values, vec!["a", "b", "c", "d"]);
        // Offsets include the three BOM bytes.
        assert_eq!(stream.iter().nth(1).unwrap().1.index(), 3);
    }

    #[test]
    fn lexes_numbers() {
        let cases = [
            ("4", TokenKind::Int),
            ("-4", TokenKind::Int),
            ("0", TokenKind::Int),
            ("9", TokenKind::Int),
            ("4.123", TokenKind::Float),
            ("-4.123", TokenKind::Float),
            ("0.123", TokenKind::Float),
            ("123e4", TokenKind::Float),
            ("123E4", TokenKind::Float),
            ("123e-4", TokenKind::Float),
            ("123e+4", TokenKind::Float),
            ("-1.123e4", TokenKind::Float),
            ("-1.123E4", TokenKind::Float),
            ("-1.123e+4", TokenKind::Float),
            ("-1.123e4567", TokenKind::Float),
        ];
        for (input, kind) in cases {
            let stream = lex(input);
            let (_, token) = stream.iter().nth(1).unwrap();
            assert_eq!(token.kind(), kind, "{input}");
            assert_eq!(token.value(), input, "{input}");
        }
    }

    #[test]
    fn number_errors() {
        let cases = [
            ("00", "Invalid number, unexpected digit after 0: \"0\".", 2),
            ("01", "Invalid number, unexpected digit after 0: \"1\".", 2),
            ("-", "Invalid number, expected digit but got: <EOF>.", 2),
            ("-A", "Invalid number, expected digit but got: \"A\".", 2),
            ("1.", "Invalid number, expected digit but got: <EOF>.", 3),
            ("1.A", "Invalid number, expected digit but got: \"A\".", 3),
            ("1.0e", "Invalid number, expected digit but got: <EOF>.", 5),
            ("1.0eA", "Invalid number, expected digit but got: \"A\".", 5),
        ];
        for (input, message, column) in cases {
            let error = lex_error(input);
            assert_eq!(error.message(), message, "{input}");
            assert_eq!(error.locations[0].column, column, "{input}");
            assert_eq!(error.locations[0].line, 1, "{input}");
        }
    }

    #[test]
    fn lexes_strings() {
        let cases = [
            (r#""simple""#, "simple"),
            (r#"" white space ""#, " white space "),
            (r#""quote \"""#, "quote \""),
            (r#""escaped \n\r\b\t\f""#, "escaped \n\r\u{8}\t\u{c}"),
            (r#""slashes \\ \/""#, "slashes \\ /"),
            (r#""unicode \u1234\u5678\u90AB\uCDEF""#, "unicode \u{1234}\u{5678}\u{90AB}\u{CDEF}"),
            (r#""\u00E9""#, "é"),
            (r#""""#, ""),
        ];
        for (input, value) in cases {
            let stream = lex(input);
            let (_, token) = stream.iter().nth(1).unwrap();
            assert_eq!(token.kind(), TokenKind::StringValue, "{input}");
            assert_eq!(token.value(), value, "{input}");
            // The lexeme is recoverable from the source even though the
            // value had its escapes resolved.
            assert_eq!(&input[token.index()..token.end()], input);
        }
    }

    #[test]
    fn string_errors() {
        let cases = [
            (r#""no end"#, "Unterminated string.", 8),
            ("\"multi\nline\"", "Unterminated string.", 7),
            ("\"multi\rline\"", "Unterminated string.", 7),
            ("\"bad \u{7} esc\"", "Invalid character within String: \"\\u0007\".", 6),
            (r#""bad \x esc""#, "Invalid character escape sequence: \\x.", 6),
            (r#""bad \u1 esc""#, "Invalid character escape sequence: \\u1 es.", 6),
            (r#""bad \u0XX1 esc""#, "Invalid character escape sequence: \\u0XX1.", 6),
            (r#""bad \uXXXX esc""#, "Invalid character escape sequence: \\uXXXX.", 6),
            (r#""bad \uD800 esc""#, "Invalid character escape sequence: \\uD800.", 6),
        ];
        for (input, message, column) in cases {
            let error = lex_error(input);
            assert_eq!(error.message(), message, "{input}");
            assert_eq!(error.locations[0].column, column, "{input}");
        }
    }

    #[test]
    fn lexes_block_strings() {
        let cases = [
            (r#""""simple""""#, "simple"),
            (r#"""" white space """"#, " white space "),
            (r#""""contains " quote""""#, "contains \" quote"),
            (r#""""contains \""" triple quote""""#, "contains \"\"\" triple quote"),
            ("\"\"\"multi\nline\"\"\"", "multi\nline"),
            ("\"\"\"multi\rline\r\nnormalized\"\"\"", "multi\nline\nnormalized"),
            (r#""""unescaped \n\r\b\t\f \u1234""""#, "unescaped \\n\\r\\b\\t\\f \\u1234"),
            ("\"\"\"\n  hello\n  world\n\"\"\"", "hello\nworld"),
        ];
        for (input, value) in cases {
            let stream = lex(input);
            let (_, token) = stream.iter().nth(1).unwrap();
            assert_eq!(token.kind(), TokenKind::BlockString, "{input}");
            assert_eq!(token.value(), value, "{input}");
        }
    }

    #[test]
    fn unterminated_block_string() {
        let error = lex_error(r#""""no end"#);
        assert_eq!(error.message(), "Unterminated string.");
    }

    #[test]
    fn lexes_comments_into_the_chain() {
        let stream = lex("a # note\nb");
        assert_eq!(
            kinds(&stream),
            vec![
                TokenKind::Sof,
                TokenKind::Name,
                TokenKind::Comment,
                TokenKind::Name,
                TokenKind::Eof,
            ]
        );
        let (_, comment) = stream.iter().nth(2).unwrap();
        assert_eq!(comment.value(), " note");
        assert_eq!(stream.lexeme(TokenId::new(2)), "# note");
    }

    #[test]
    fn advance_skips_comments() {
        let mut lexer = Lexer::new("a # note\nb");
        assert_eq!(lexer.current().kind(), TokenKind::Sof);
        let a = lexer.advance().unwrap();
        assert_eq!(lexer.token(a).value(), "a");
        let b = lexer.advance().unwrap();
        assert_eq!(lexer.token(b).value(), "b");
        assert_eq!(lexer.advance().unwrap(), lexer.current_id());
        assert_eq!(lexer.current().kind(), TokenKind::Eof);
    }

    #[test]
    fn lookahead_does_not_consume() {
        let mut lexer = Lexer::new("a b");
        let peeked = lexer.lookahead().unwrap();
        assert_eq!(lexer.current().kind(), TokenKind::Sof);
        assert_eq!(lexer.lookahead().unwrap(), peeked);
        let advanced = lexer.advance().unwrap();
        assert_eq!(advanced, peeked);
        assert_eq!(lexer.token(advanced).value(), "a");
    }

    #[test]
    fn eof_is_sticky() {
        let mut lexer = Lexer::new("a");
        lexer.advance().unwrap();
        let eof = lexer.advance().unwrap();
        assert_eq!(lexer.token(eof).kind(), TokenKind::Eof);
        assert_eq!(lexer.advance().unwrap(), eof);
        assert_eq!(lexer.lookahead().unwrap(), eof);
    }

    #[test]
    fn eof_offset_is_the_document_length() {
        let stream = lex("query { a }");
        let eof = stream.get(stream.eof());
        assert_eq!(eof.index(), 11);
        assert_eq!(eof.len(), 0);
    }

    #[test]
    fn spread_errors() {
        for input in [".", "..", ". .."] {
            let error = lex_error(input);
            assert_eq!(error.message(), "Cannot parse the unexpected character \".\".");
            assert_eq!(error.locations[0].column, 1, "{input}");
        }
    }

    #[test]
    fn unexpected_character_errors() {
        let error = lex_error("?");
        assert_eq!(error.message(), "Cannot parse the unexpected character \"?\".");

        let error = lex_error("\u{7}");
        assert_eq!(error.message(), "Cannot contain the invalid character \"\\u0007\".");

        let error = lex_error("æ");
        assert_eq!(error.message(), "Cannot parse the unexpected character \"\\u00E6\".");

        let error = lex_error("'hi'");
        assert_eq!(
            error.message(),
            "Unexpected single quote character ('), did you mean to use a double quote (\")?"
        );
    }

    #[test]
    fn errors_repeat_without_consuming() {
        let mut lexer = Lexer::new("a ?");
        lexer.advance().unwrap();
        let first = lexer.advance().expect_err("lex error");
        let second = lexer.advance().expect_err("lex error");
        assert_eq!(first, second);
    }

    #[test]
    fn error_locations_span_lines() {
        let error = lex_error("query {\n  field(arg: \"no end\n}");
        assert_eq!(error.message(), "Unterminated string.");
        assert_eq!(error.locations[0].line, 2);
        assert_eq!(error.locations[0].column, 21);
    }
}
