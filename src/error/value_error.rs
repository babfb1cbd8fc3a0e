#[derive(Debug, Clone, Copy, PartialEq)]
/// Represents all errors that can occur when constructing a quantity or
/// reassigning its precision. These are caller mistakes and fail fast;
/// nothing is silently coerced.
pub enum ValueError {
    /// The magnitude was NaN or infinite.
    NonFiniteValue {
        /// The rejected magnitude.
        value: f64,
    },
    /// The significant-figure count was zero or negative.
    InvalidFigures {
        /// The rejected figure count.
        figures: i64,
    },
}

impl std::fmt::Display for ValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteValue { value } => {
                write!(f, "Invalid magnitude {value}: a quantity must be a finite number.")
            },

            Self::InvalidFigures { figures } => {
                write!(f, "Invalid precision: {figures} significant figures is not a positive count.")
            },
        }
    }
}

impl std::error::Error for ValueError {}
