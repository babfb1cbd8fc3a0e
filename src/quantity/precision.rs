use std::fmt::Display;

/// How many digits of a quantity are trustworthy.
///
/// A measured quantity carries a finite count of significant figures; a
/// counted or defined quantity carries none of the usual rounding
/// uncertainty and is marked `Exact`. The variants are ordered so that
/// comparisons treat `Exact` as more precise than any finite count, which
/// is exactly the comparison multiplication and division need when they
/// keep the less precise operand's figure count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    /// A finite count of significant figures.
    ///
    /// Public construction requires a positive count; arithmetic on
    /// nearly-cancelling operands may derive a smaller one internally.
    Figures(i64),
    /// Infinite precision, written with the `c` suffix in literals.
    Exact,
}

impl Precision {
    /// Returns `true` if the precision is [`Exact`](Self::Exact).
    ///
    /// # Example
    /// ```
    /// use sigfig::quantity::precision::Precision;
    ///
    /// assert!(Precision::Exact.is_exact());
    /// assert!(!Precision::Figures(3).is_exact());
    /// ```
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact)
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Figures(figures) => write!(f, "{figures}"),
            Self::Exact => write!(f, "exact"),
        }
    }
}
