//! # sigfig
//!
//! sigfig is a precision-aware calculator core written in Rust.
//! It models quantities that carry a significant-figure count (or an exact
//! marker), propagates precision through arithmetic, renders quantities
//! back to text, and tokenizes arithmetic expressions over them.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::LexError,
    lexer::{SpannedToken, Token, Tokens},
};

/// Provides unified error types for lexing and quantity construction.
///
/// This module defines all errors the crate can raise. It standardizes
/// error reporting and carries detailed information about failures,
/// including source positions for lexing errors and the rejected inputs
/// for construction errors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, quantity model).
/// - Attaches positions, context windows, and offending values.
/// - Supports integration with standard error handling traits and
///   reporting utilities.
pub mod error;
/// The lexer module tokenizes expression source text.
///
/// The lexer reads the raw source and produces a stream of tokens:
/// operators, parentheses, whitespace, and quantity literals. Quantity
/// tokens are converted to typed quantities as they are matched, so the
/// stream carries values rather than raw numerals.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Parses quantity literals into [`quantity::core::SigFigNumber`]s.
/// - Reports lexical errors for unrecognized input.
pub mod lexer;
/// The quantity module defines the precision-aware number model.
///
/// This module declares the quantity type and its precision marker, along
/// with literal parsing, rounding, display rules, and arithmetic that
/// propagates significant figures.
///
/// # Responsibilities
/// - Defines `SigFigNumber` and `Precision`.
/// - Recovers figure counts from literal text and renders them back.
/// - Implements arithmetic with precision propagation.
pub mod quantity;

/// Returns the flat token stack for an expression.
///
/// This is the crate's pipeline entry point: it drives the lexer over the
/// whole source, drops whitespace tokens, and keeps the rest in source
/// order with their offsets, quantities already converted to typed values.
/// Building an expression tree on top of the stack is left to the caller.
///
/// # Errors
/// Returns a [`LexError`] if any position in the source matches no token
/// pattern.
///
/// # Examples
/// ```
/// use sigfig::{expression_stack, lexer::Token};
///
/// let stack = expression_stack("3.49 + (5c * 3c)").unwrap();
///
/// assert_eq!(stack.len(), 7);
/// assert_eq!(stack[1].index, 5);
/// assert!(matches!(stack[1].token, Token::Add));
///
/// // An unrecognized character is an error, not a partial stack.
/// let err = expression_stack("3 & 4").unwrap_err();
/// assert_eq!(err.to_string(), "Unknown token at character index 2: ... 3 & 4 ...");
/// ```
pub fn expression_stack(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let mut stack = Vec::new();

    for spanned in Tokens::new(source) {
        let spanned = spanned?;

        if !matches!(spanned.token, Token::Whitespace) {
            stack.push(spanned);
        }
    }

    Ok(stack)
}
