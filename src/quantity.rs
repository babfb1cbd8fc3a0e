/// The quantity type itself.
///
/// Declares [`SigFigNumber`](core::SigFigNumber): construction and
/// validation, the precision and last-significant-place views, rounding,
/// fixed-point and scientific rendering, and arithmetic operators with
/// precision propagation.
pub mod core;
/// Literal parsing.
///
/// Recovers a quantity from its text form, including the
/// significant-figure count the spelling of the numeral implies.
mod literal;
/// Precision markers.
///
/// Declares [`Precision`](precision::Precision), the significant-figure
/// count or exact sentinel carried by every quantity.
pub mod precision;
