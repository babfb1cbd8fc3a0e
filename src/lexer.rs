use std::{fmt::Display, ops::Range};

use logos::Logos;

use crate::{error::LexError, quantity::core::SigFigNumber};

/// Represents a lexical token in an arithmetic expression.
/// The variants are listed in matching priority order, though the patterns
/// are disjoint at their first character, so no position ever needs a tie
/// broken.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// A single whitespace character.
    ///
    /// Whitespace is yielded rather than skipped; consumers that do not
    /// care filter it out, as
    /// [`expression_stack`](crate::expression_stack) does.
    #[regex(r"\s")]
    Whitespace,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    ///
    /// Always an operator: quantity literals carry no leading sign, so a
    /// unary minus is not representable inside a literal.
    #[token("-")]
    Subtract,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// Quantity literal tokens, such as `3.49`, `.5`, `2e10` or `5c`.
    /// Carries the parsed quantity rather than the matched text.
    #[regex(r"([0-9]+\.?[0-9]*|\.[0-9]+)(e[0-9]*)?c?", parse_quantity)]
    Quantity(SigFigNumber),
}

/// Parses a quantity literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(SigFigNumber)`: The parsed quantity if successful.
/// - `None`: If the slice is not a valid quantity literal.
fn parse_quantity(lex: &logos::Lexer<Token>) -> Option<SigFigNumber> {
    SigFigNumber::parse(lex.slice())
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Whitespace => write!(f, " "),
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
            Self::Add => write!(f, "+"),
            Self::Subtract => write!(f, "-"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::Quantity(quantity) => write!(f, "{quantity}"),
        }
    }
}

/// A token together with the source byte offset where it begins.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    /// The classified token.
    pub token: Token,
    /// The byte offset of the token's first character.
    pub index: usize,
}

/// A pull-based stream of spanned tokens over an expression.
///
/// One token is produced per step, in source order. Tokenizing the same
/// source twice yields identical results; independent streams share no
/// state beyond the borrowed source text.
///
/// # Example
/// ```
/// use sigfig::lexer::{Token, Tokens};
///
/// let mut tokens = Tokens::new("2 + 2");
/// let first = tokens.next().unwrap().unwrap();
///
/// assert_eq!(first.index, 0);
/// assert!(matches!(first.token, Token::Quantity(_)));
/// ```
pub struct Tokens<'source> {
    lexer: logos::Lexer<'source, Token>,
}

impl<'source> Tokens<'source> {
    /// Begins a token stream at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { lexer: Token::lexer(source) }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<SpannedToken, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next()?;
        let span = self.lexer.span();

        Some(match token {
            Ok(token) => Ok(SpannedToken { token, index: span.start }),
            Err(()) => Err(error_at(self.lexer.source(), &span)),
        })
    }
}

/// Classifies an error span. A span that begins like a quantity can only be
/// a literal the quantity parser rejected; anything else is an unrecognized
/// character, reported with a window of surrounding source.
fn error_at(source: &str, span: &Range<usize>) -> LexError {
    let slice = &source[span.start..span.end];

    if slice.starts_with(|c: char| c.is_ascii_digit()) || (slice.len() > 1 && slice.starts_with('.'))
    {
        LexError::InvalidQuantity { literal: slice.to_string(),
                                    index:   span.start, }
    } else {
        LexError::UnknownToken { index:   span.start,
                                 context: context_window(source, span.start), }
    }
}

/// Up to three characters of context on either side of `index`.
fn context_window(source: &str, index: usize) -> String {
    let offset = source[..index].chars().count();
    let start = offset.saturating_sub(3);
    let end = (offset + 3).min(source.chars().count());

    source.chars().skip(start).take(end - start).collect()
}
