use crate::quantity::{core::SigFigNumber, precision::Precision};

impl SigFigNumber {
    /// Parses a quantity literal, recovering both the magnitude and the
    /// significant-figure count the text states.
    ///
    /// The literal is `[-]digits[.digits]` or `[-].digits`, optionally
    /// followed by `e[-]digits` (the exponent contributes no figures) and
    /// optionally suffixed with `c` for an exact quantity. Whitespace is
    /// stripped and case is ignored. Text outside the grammar — including
    /// numerals with no significant digit at all, such as `0` — yields
    /// `None`.
    ///
    /// # Example
    /// ```
    /// use sigfig::quantity::{core::SigFigNumber, precision::Precision};
    ///
    /// let measured = SigFigNumber::parse("100.0").unwrap();
    /// assert_eq!(measured.value(), 100.0);
    /// assert_eq!(measured.precision(), Precision::Figures(4));
    ///
    /// let counted = SigFigNumber::parse("5c").unwrap();
    /// assert!(counted.precision().is_exact());
    ///
    /// assert!(SigFigNumber::parse("abc").is_none());
    /// assert!(SigFigNumber::parse("0").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let literal: String = text.chars()
                                  .filter(|c| !c.is_whitespace())
                                  .flat_map(char::to_lowercase)
                                  .collect();

        if literal.contains('c') {
            let value = parse_numeral(&literal.replacen('c', "", 1))?;
            return Some(Self::from_parts(value, Precision::Exact));
        }

        let value = parse_numeral(&literal)?;
        let mantissa = literal.split('e').next().unwrap_or(&literal);
        let figures = count_figures(mantissa)?;

        Some(Self::from_parts(value, Precision::Figures(figures)))
    }
}

/// Parses the numeral part of a literal as a magnitude.
///
/// The quantity grammar admits an exponent marker with no digits after it
/// (`3e` means `3`), which `f64`'s own grammar rejects, so a bare trailing
/// `e` is dropped first. Non-finite results are rejected.
fn parse_numeral(numeral: &str) -> Option<f64> {
    let numeral = numeral.strip_suffix('e').unwrap_or(numeral);

    numeral.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Counts the significant figures a plain numeral states, or `None` when
/// the text has no recognized shape or no significant digit.
///
/// After an optional leading `-`, the text must be ASCII digits with at
/// most one point. Leading zeros never count. Trailing zeros count only
/// when a decimal point is present; in a pure integer they are ambiguous
/// and are discarded. In a fraction-only numeral the count starts at the
/// first nonzero digit.
fn count_figures(numeral: &str) -> Option<i64> {
    let unsigned = numeral.strip_prefix('-').unwrap_or(numeral);

    let (integral, fraction) = match unsigned.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (unsigned, None),
    };

    if !is_digits(integral) || !fraction.is_none_or(is_digits) {
        return None;
    }

    let integral = integral.trim_start_matches('0');

    let count = match fraction {
        None => integral.trim_end_matches('0').len(),
        Some(fraction) if integral.is_empty() => fraction.trim_start_matches('0').len(),
        Some(fraction) => integral.len() + fraction.len(),
    };

    if count == 0 {
        return None;
    }

    i64::try_from(count).ok()
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|byte| byte.is_ascii_digit())
}
