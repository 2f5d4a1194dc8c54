use crate::source::LineColumn;
use crate::source::Source;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Synthetic start-of-file token; always the first token in a chain.
    Sof,
    /// End-of-file token; always the last token in a chain, with zero length
    /// at the end of the document.
    Eof,
    Bang,
    Dollar,
    Amp,
    LParen,
    RParen,
    Spread,
    Colon,
    Eq,
    At,
    LBracket,
    RBracket,
    LCurly,
    RCurly,
    Pipe,
    Name,
    Int,
    Float,
    StringValue,
    BlockString,
    Comment,
}

impl TokenKind {
    /// Whether tokens of this kind are skipped by the lexer's non-ignored
    /// stream. Ignored tokens still appear in the token chain.
    pub fn is_ignored(self) -> bool {
        matches!(self, TokenKind::Comment)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            TokenKind::Sof => "SOF",
            TokenKind::Eof => "EOF",
            TokenKind::Bang => "BANG",
            TokenKind::Dollar => "DOLLAR",
            TokenKind::Amp => "AMP",
            TokenKind::LParen => "L_PAREN",
            TokenKind::RParen => "R_PAREN",
            TokenKind::Spread => "SPREAD",
            TokenKind::Colon => "COLON",
            TokenKind::Eq => "EQ",
            TokenKind::At => "AT",
            TokenKind::LBracket => "L_BRACKET",
            TokenKind::RBracket => "R_BRACKET",
            TokenKind::LCurly => "L_CURLY",
            TokenKind::RCurly => "R_CURLY",
            TokenKind::Pipe => "PIPE",
            TokenKind::Name => "NAME",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::StringValue => "STRING",
            TokenKind::BlockString => "BLOCK_STRING",
            TokenKind::Comment => "COMMENT",
        }
    }
}

/// Identifies one token within a [`TokenStream`].
///
/// Ids are positions in the chain: adjacent ids are adjacent tokens in
/// source order, ignored tokens included.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(u32);

impl TokenId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `[first, last]` token range of an AST node, ids into the
/// [`TokenStream`] the node was parsed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenSpan {
    pub first: TokenId,
    pub last: TokenId,
}

impl TokenSpan {
    pub fn new(first: TokenId, last: TokenId) -> Self {
        Self { first, last }
    }

    /// A span covering a single token.
    pub fn single(id: TokenId) -> Self {
        Self { first: id, last: id }
    }
}

/// One lexical token.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    index: usize,
    len: usize,
    value: String,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, index: usize, len: usize, value: String) -> Self {
        Self {
            kind,
            index,
            len,
            value,
        }
    }

    pub(crate) fn punctuator(kind: TokenKind, index: usize, len: usize) -> Self {
        Self::new(kind, index, len, String::new())
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte offset of the token's first byte in the source.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte length of the token's lexeme.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte offset one past the token's last byte.
    pub fn end(&self) -> usize {
        self.index + self.len
    }

    /// The processed token text: escape sequences resolved for strings, the
    /// dedented body for block strings, the text after `#` for comments, the
    /// verbatim lexeme for names and numbers, and empty for punctuators.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.kind.name(), self.index, self.end())?;
        if !self.value.is_empty() {
            write!(f, " {:?}", self.value)?;
        }
        Ok(())
    }
}

/// A completed token chain: every token of one document in source order,
/// ignored tokens included, starting at [`TokenKind::Sof`] and ending at
/// [`TokenKind::Eof`].
///
/// The stream owns the [`Source`] the tokens index into, so it can resolve
/// ids to tokens, raw lexemes, and line/column locations.
pub struct TokenStream {
    source: Arc<Source>,
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn new(source: Arc<Source>, tokens: Vec<Token>) -> Self {
        debug_assert_eq!(tokens.first().map(Token::kind), Some(TokenKind::Sof));
        debug_assert_eq!(tokens.last().map(Token::kind), Some(TokenKind::Eof));
        Self { source, tokens }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        false // a stream always holds at least SOF and EOF
    }

    pub fn get(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    /// The id of the synthetic start-of-file token.
    pub fn sof(&self) -> TokenId {
        TokenId::new(0)
    }

    /// The id of the end-of-file token.
    pub fn eof(&self) -> TokenId {
        TokenId::new(self.tokens.len() - 1)
    }

    /// The previous token in the chain, `None` for [`Self::sof`].
    pub fn prev(&self, id: TokenId) -> Option<TokenId> {
        id.index().checked_sub(1).map(TokenId::new)
    }

    /// The next token in the chain, `None` for [`Self::eof`].
    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        let next = id.index() + 1;
        (next < self.tokens.len()).then(|| TokenId::new(next))
    }

    /// The raw lexeme of a token, sliced out of the source.
    pub fn lexeme(&self, id: TokenId) -> &str {
        let token = self.get(id);
        &self.source.text()[token.index()..token.end()]
    }

    /// The 1-based location of a token's first byte.
    pub fn line_column(&self, id: TokenId) -> LineColumn {
        self.source.line_column(self.get(id).index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &Token)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(|(index, token)| (TokenId::new(index), token))
    }
}

impl Index<TokenId> for TokenStream {
    type Output = Token;

    fn index(&self, id: TokenId) -> &Token {
        self.get(id)
    }
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{token:?}")?;
        }
        Ok(())
    }
}
