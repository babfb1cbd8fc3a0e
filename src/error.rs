/// Lexing errors.
///
/// Defines the error type raised while tokenizing an expression: an
/// unrecognized character, with its position and surrounding context, or a
/// quantity slice the literal parser rejected.
pub mod lex_error;
/// Value errors.
///
/// Defines the error type raised by invalid quantity construction: a
/// non-finite magnitude or a non-positive significant-figure count.
pub mod value_error;

pub use lex_error::LexError;
pub use value_error::ValueError;
