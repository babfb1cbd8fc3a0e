use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    ops,
};

use ordered_float::OrderedFloat;

use crate::{error::ValueError, quantity::precision::Precision};

/// A quantity whose magnitude carries an explicit precision.
///
/// The magnitude is an ordinary `f64`; the precision is a significant-figure
/// count or the exact marker. The last significant place — the base-10
/// position of the lowest-order digit that still counts — is the other view
/// of the same information and is derived from the stored precision and the
/// magnitude, so the two can never disagree.
///
/// Arithmetic propagates precision: multiplication and division keep the
/// fewer figures of the two operands, addition and subtraction keep the
/// coarser last significant place. Every operation returns a fresh value;
/// operands are never touched.
#[derive(Debug, Clone, Copy)]
pub struct SigFigNumber {
    value:     f64,
    precision: Precision,
}

impl SigFigNumber {
    /// Constructs a quantity from a magnitude and a precision.
    ///
    /// # Errors
    /// - `ValueError::NonFiniteValue` if the magnitude is NaN or infinite.
    /// - `ValueError::InvalidFigures` if the figure count is not positive.
    ///
    /// # Example
    /// ```
    /// use sigfig::{
    ///     error::ValueError,
    ///     quantity::{core::SigFigNumber, precision::Precision},
    /// };
    ///
    /// let length = SigFigNumber::new(2.0, Precision::Figures(2)).unwrap();
    /// assert_eq!(length.value(), 2.0);
    ///
    /// let err = SigFigNumber::new(f64::NAN, Precision::Exact).unwrap_err();
    /// assert!(matches!(err, ValueError::NonFiniteValue { .. }));
    ///
    /// let err = SigFigNumber::new(1.0, Precision::Figures(0)).unwrap_err();
    /// assert!(matches!(err, ValueError::InvalidFigures { figures: 0 }));
    /// ```
    pub const fn new(value: f64, precision: Precision) -> Result<Self, ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NonFiniteValue { value });
        }

        match check_figures(precision) {
            Ok(()) => Ok(Self { value, precision }),
            Err(error) => Err(error),
        }
    }

    /// Constructs a quantity without validation, for results the model
    /// itself derives (parsed literals, arithmetic).
    pub(crate) const fn from_parts(value: f64, precision: Precision) -> Self {
        Self { value, precision }
    }

    /// Returns the magnitude.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the precision.
    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Returns the last significant place: the base-10 exponent of the
    /// lowest-order significant digit, or `None` for an exact quantity
    /// (conceptually negative infinity — rounding never discards digits).
    ///
    /// # Example
    /// ```
    /// use sigfig::quantity::{core::SigFigNumber, precision::Precision};
    ///
    /// let mass = SigFigNumber::parse(".0050").unwrap();
    /// assert_eq!(mass.precision(), Precision::Figures(2));
    /// assert_eq!(mass.last_place(), Some(-4));
    ///
    /// let counted = SigFigNumber::parse("12c").unwrap();
    /// assert_eq!(counted.last_place(), None);
    /// ```
    #[must_use]
    pub fn last_place(&self) -> Option<i64> {
        match self.precision {
            Precision::Exact => None,
            Precision::Figures(figures) => Some(order(self.value) - figures + 1),
        }
    }

    /// Reassigns the precision; the last significant place follows from the
    /// unchanged magnitude.
    ///
    /// # Errors
    /// `ValueError::InvalidFigures` if the figure count is not positive.
    ///
    /// # Example
    /// ```
    /// use sigfig::quantity::{core::SigFigNumber, precision::Precision};
    ///
    /// let mut reading = SigFigNumber::parse("100").unwrap();
    /// assert_eq!(reading.precision(), Precision::Figures(1));
    ///
    /// reading.set_precision(Precision::Figures(3)).unwrap();
    /// assert_eq!(reading.last_place(), Some(0));
    /// assert_eq!(reading.display(false), "100.");
    /// ```
    pub const fn set_precision(&mut self, precision: Precision) -> Result<(), ValueError> {
        match check_figures(precision) {
            Ok(()) => {
                self.precision = precision;
                Ok(())
            },
            Err(error) => Err(error),
        }
    }

    /// Reassigns the last significant place; the figure count is re-derived
    /// from the unchanged magnitude. An exact quantity is requested through
    /// [`set_precision`](Self::set_precision) instead, since no finite
    /// place describes it.
    ///
    /// # Example
    /// ```
    /// use sigfig::quantity::{core::SigFigNumber, precision::Precision};
    ///
    /// let mut total = SigFigNumber::parse("4150").unwrap();
    /// total.set_last_place(2);
    /// assert_eq!(total.precision(), Precision::Figures(2));
    /// ```
    pub fn set_last_place(&mut self, place: i64) {
        self.precision = Precision::Figures(order(self.value) - place + 1);
    }

    /// Returns the quantity rounded half-away-from-zero at its last
    /// significant place, keeping the figure count. Exact quantities round
    /// to themselves. Idempotent.
    ///
    /// # Example
    /// ```
    /// use sigfig::quantity::{core::SigFigNumber, precision::Precision};
    ///
    /// let speed = SigFigNumber::new(3.49, Precision::Figures(2)).unwrap();
    /// assert_eq!(speed.rounded().value(), 3.5);
    /// assert_eq!(speed.rounded().rounded(), speed.rounded());
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded(&self) -> Self {
        match self.last_place() {
            None => *self,
            Some(place) => {
                let scale = 10f64.powi(place as i32);
                Self { value:     (self.value / scale).round() * scale,
                       precision: self.precision, }
            },
        }
    }

    /// Renders the rounded magnitude in fixed-point notation, with one
    /// fractional digit per significant place below the units. An exact
    /// quantity keeps every digit of its magnitude.
    ///
    /// # Example
    /// ```
    /// use sigfig::quantity::core::SigFigNumber;
    ///
    /// assert_eq!(SigFigNumber::parse("0.5").unwrap().float_string(), "0.5");
    /// assert_eq!(SigFigNumber::parse("100.0").unwrap().float_string(), "100.0");
    /// ```
    #[must_use]
    pub fn float_string(&self) -> String {
        let rounded = self.rounded();

        match self.last_place() {
            None => rounded.value.to_string(),
            Some(place) => {
                let digits = usize::try_from(-place).unwrap_or(0);
                format!("{:.digits$}", rounded.value)
            },
        }
    }

    /// Renders the magnitude in scientific notation, with one mantissa
    /// digit per significant figure. A zero magnitude, or a figure count
    /// that arithmetic has driven to zero or below, renders as `"0"`.
    ///
    /// When `html` is set the exponent becomes a `<sup>` element instead of
    /// an `e` suffix.
    ///
    /// # Example
    /// ```
    /// use sigfig::quantity::{core::SigFigNumber, precision::Precision};
    ///
    /// let distance = SigFigNumber::new(1234.0, Precision::Figures(3)).unwrap();
    /// assert_eq!(distance.scientific(false), "1.23e3");
    /// assert_eq!(distance.scientific(true), "1.23<sup>3</sup>");
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn scientific(&self, html: bool) -> String {
        if self.value == 0.0 {
            return "0".to_string();
        }

        let exponent = order(self.value);
        let mantissa = self.value / 10f64.powi(exponent as i32);

        let rendered = match self.precision {
            Precision::Exact => mantissa.to_string(),
            Precision::Figures(figures) if figures > 0 => {
                let digits = usize::try_from(figures - 1).unwrap_or(0);
                format!("{mantissa:.digits$}")
            },
            Precision::Figures(_) => return "0".to_string(),
        };

        if html {
            format!("{rendered}<sup>{exponent}</sup>")
        } else {
            format!("{rendered}e{exponent}")
        }
    }

    /// Renders the quantity, rounded, in the shortest notation that still
    /// states its precision unambiguously.
    ///
    /// Exact quantities take the `c` suffix. A last significant place in
    /// the fraction, or in the units with a nonzero units digit, renders as
    /// plain fixed-point text. A units-place quantity ending in zero takes
    /// a trailing decimal point to mark that zero significant. Above the
    /// units the fixed-point text is kept only when re-parsing it recovers
    /// the same figure count; otherwise the trailing zeros are ambiguous
    /// and the rendering falls back to scientific notation.
    ///
    /// # Example
    /// ```
    /// use sigfig::quantity::{core::SigFigNumber, precision::Precision};
    ///
    /// let sum = SigFigNumber::parse("1.2").unwrap() + SigFigNumber::parse("3.45").unwrap();
    /// assert_eq!(sum.display(false), "4.7");
    ///
    /// let area = SigFigNumber::new(1200.0, Precision::Figures(3)).unwrap();
    /// assert_eq!(area.display(false), "1.20e3");
    ///
    /// assert_eq!(SigFigNumber::parse("5c").unwrap().display(false), "5c");
    /// ```
    #[must_use]
    pub fn display(&self, html: bool) -> String {
        let rounded = self.rounded();

        let Some(place) = rounded.last_place() else {
            return format!("{}c", rounded.float_string());
        };

        if place < 0 {
            return rounded.float_string();
        }

        if place == 0 {
            if rounded.value % 10.0 == 0.0 {
                return format!("{}.", rounded.float_string());
            }
            return rounded.float_string();
        }

        match Self::parse(&rounded.float_string()) {
            Some(recovered) if recovered.precision == rounded.precision => rounded.float_string(),
            _ => self.scientific(html),
        }
    }
}

/// The base-10 order of magnitude of a value.
///
/// Zero is given order 0 so a derived figure count stays finite.
#[allow(clippy::cast_possible_truncation)]
fn order(value: f64) -> i64 {
    if value == 0.0 {
        return 0;
    }

    value.abs().log10().floor() as i64
}

const fn check_figures(precision: Precision) -> Result<(), ValueError> {
    match precision {
        Precision::Figures(figures) if figures < 1 => Err(ValueError::InvalidFigures { figures }),
        _ => Ok(()),
    }
}

impl ops::Mul for SigFigNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { value:     self.value * rhs.value,
               precision: self.precision.min(rhs.precision), }
    }
}

impl ops::Div for SigFigNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self { value:     self.value / rhs.value,
               precision: self.precision.min(rhs.precision), }
    }
}

impl ops::Add for SigFigNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        with_summed_place(self.value + rhs.value, self, rhs)
    }
}

impl ops::Sub for SigFigNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        with_summed_place(self.value - rhs.value, self, rhs)
    }
}

/// Builds a sum or difference: the coarser of the operands' last
/// significant places carries over, and the figure count is re-derived
/// against the result's own magnitude. Two exact operands stay exact.
fn with_summed_place(value: f64, lhs: SigFigNumber, rhs: SigFigNumber) -> SigFigNumber {
    let precision = match (lhs.last_place(), rhs.last_place()) {
        (None, None) => Precision::Exact,
        (Some(place), None) | (None, Some(place)) => Precision::Figures(order(value) - place + 1),
        (Some(left), Some(right)) => Precision::Figures(order(value) - left.max(right) + 1),
    };

    SigFigNumber::from_parts(value, precision)
}

impl Display for SigFigNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(false))
    }
}

impl PartialEq for SigFigNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.value) == OrderedFloat(other.value) && self.precision == other.precision
    }
}

impl Eq for SigFigNumber {}

impl Hash for SigFigNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.value).hash(state);
        self.precision.hash(state);
    }
}
