#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// No token pattern matches at the current scan position.
    UnknownToken {
        /// The byte index of the offending character.
        index:   usize,
        /// A short window of source text around the offending character.
        context: String,
    },
    /// A matched quantity slice was rejected by the literal parser. The
    /// quantity pattern only produces parseable text, so reaching this is
    /// an invariant violation, reported rather than swallowed.
    InvalidQuantity {
        /// The matched quantity text.
        literal: String,
        /// The byte index where the quantity begins.
        index:   usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownToken { index, context } => {
                write!(f, "Unknown token at character index {index}: ... {context} ...")
            },

            Self::InvalidQuantity { literal, index } => {
                write!(f,
                       "Quantity literal '{literal}' at character index {index} does not parse.")
            },
        }
    }
}

impl std::error::Error for LexError {}
