use std::fs;

use sigfig::{
    error::{LexError, ValueError},
    expression_stack,
    lexer::{SpannedToken, Token, Tokens},
    quantity::{core::SigFigNumber, precision::Precision},
};

fn quantity(literal: &str) -> SigFigNumber {
    SigFigNumber::parse(literal).unwrap_or_else(|| panic!("'{literal}' should parse"))
}

fn figures_of(literal: &str) -> Precision {
    quantity(literal).precision()
}

fn display_of(literal: &str) -> String {
    quantity(literal).display(false)
}

#[test]
fn literal_figure_counts() {
    assert_eq!(figures_of("100"), Precision::Figures(1));
    assert_eq!(figures_of("100.0"), Precision::Figures(4));
    assert_eq!(figures_of(".0050"), Precision::Figures(2));
    assert_eq!(figures_of("007"), Precision::Figures(1));
    assert_eq!(figures_of("120.50"), Precision::Figures(5));
    assert_eq!(figures_of("500."), Precision::Figures(3));
    assert_eq!(figures_of("-4.20"), Precision::Figures(3));
    assert_eq!(figures_of("0.5"), Precision::Figures(1));
}

#[test]
fn exponents_contribute_no_figures() {
    let parsed = quantity("3e2");
    assert_eq!(parsed.value(), 300.0);
    assert_eq!(parsed.precision(), Precision::Figures(1));

    assert_eq!(figures_of("2.50e3"), Precision::Figures(3));
    assert_eq!(figures_of("1.5e-3"), Precision::Figures(2));

    // A bare exponent marker means ten to the zero.
    assert_eq!(quantity("3e").value(), 3.0);
}

#[test]
fn exact_marker() {
    assert!(figures_of("5c").is_exact());
    assert!(figures_of("0.25c").is_exact());
    assert!(figures_of(" 12 C ").is_exact());
    assert_eq!(quantity("5c").value(), 5.0);
}

#[test]
fn rejected_literals() {
    for literal in ["", " ", "0", "0.0", "000", ".", "0.", ".0", "abc", "1a", "+5", "e5", "--5",
                    "1.2.3", "c"]
    {
        assert!(SigFigNumber::parse(literal).is_none(), "'{literal}' should not parse");
    }
}

#[test]
fn multiplication_and_division_keep_fewer_figures() {
    let product = quantity("2.0") * quantity("3.00");
    assert_eq!(product.precision(), Precision::Figures(2));
    assert_eq!(product.display(false), "6.0");

    let scaled = quantity("2.0") * quantity("3c");
    assert_eq!(scaled.precision(), Precision::Figures(2));

    let exact = quantity("5c") * quantity("3c");
    assert!(exact.precision().is_exact());
    assert_eq!(exact.display(false), "15c");

    let quotient = quantity("10.0") / quantity("3c");
    assert_eq!(quotient.precision(), Precision::Figures(3));
    assert_eq!(quotient.display(false), "3.33");
}

#[test]
fn addition_and_subtraction_keep_coarser_place() {
    let sum = quantity("1.2") + quantity("3.45");
    assert_eq!(sum.display(false), "4.7");

    let coarse = quantity("100") + quantity("1.5");
    assert_eq!(coarse.precision(), Precision::Figures(1));
    assert_eq!(coarse.display(false), "100");

    let difference = quantity("3.45") - quantity("1.2");
    assert_eq!(difference.display(false), "2.3");

    let exact = quantity("5c") - quantity("3c");
    assert!(exact.precision().is_exact());
    assert_eq!(exact.display(false), "2c");

    let anchored = quantity("5c") + quantity("1.2");
    assert_eq!(anchored.last_place(), Some(-1));
    assert_eq!(anchored.display(false), "6.2");
}

#[test]
fn zero_difference_displays() {
    let zero = quantity("5.0") - quantity("5.0");
    assert_eq!(zero.precision(), Precision::Figures(2));
    assert_eq!(zero.display(false), "0.0");
}

#[test]
fn display_marks_significant_trailing_zero() {
    let twenty = SigFigNumber::new(20.0, Precision::Figures(2)).unwrap();
    assert_eq!(twenty.display(false), "20.");

    let twenty_five = SigFigNumber::new(25.0, Precision::Figures(2)).unwrap();
    assert_eq!(twenty_five.display(false), "25");

    assert_eq!(display_of("500."), "500.");
}

#[test]
fn display_falls_back_to_scientific() {
    let area = SigFigNumber::new(1200.0, Precision::Figures(3)).unwrap();
    assert_eq!(area.display(false), "1.20e3");
    assert_eq!(area.display(true), "1.20<sup>3</sup>");

    // No figure is lost re-reading "1250", so fixed-point text stands.
    let unambiguous = SigFigNumber::new(1250.0, Precision::Figures(3)).unwrap();
    assert_eq!(unambiguous.display(false), "1250");
}

#[test]
fn display_of_fractional_places() {
    assert_eq!(display_of("100.0"), "100.0");
    assert_eq!(display_of(".0050"), "0.0050");
    assert_eq!(display_of("45.00"), "45.00");
}

#[test]
fn exact_display() {
    assert_eq!(display_of("5c"), "5c");
    assert_eq!(display_of("2.5c"), "2.5c");
    assert_eq!(display_of("0c"), "0c");
}

#[test]
fn scientific_rendering() {
    let distance = SigFigNumber::new(1234.0, Precision::Figures(3)).unwrap();
    assert_eq!(distance.scientific(false), "1.23e3");

    let negative = SigFigNumber::new(-1200.0, Precision::Figures(2)).unwrap();
    assert_eq!(negative.scientific(false), "-1.2e3");

    let tiny = SigFigNumber::new(0.0015, Precision::Figures(2)).unwrap();
    assert_eq!(tiny.scientific(false), "1.5e-3");

    let zero = quantity("5.0") - quantity("5.0");
    assert_eq!(zero.scientific(false), "0");
}

#[test]
fn rounding_is_idempotent() {
    let speed = SigFigNumber::new(9.96, Precision::Figures(2)).unwrap();
    assert_eq!(speed.rounded().value(), 10.0);
    assert_eq!(speed.display(false), "10.");

    for literal in ["3.49", "9.96", "1.2", ".0050", "5c"] {
        let rounded = quantity(literal).rounded();
        assert_eq!(rounded.rounded(), rounded, "'{literal}' should round once");
    }
}

#[test]
fn precision_reassignment() {
    let mut reading = quantity("100");
    reading.set_precision(Precision::Figures(3)).unwrap();
    assert_eq!(reading.display(false), "100.");

    reading.set_precision(Precision::Exact).unwrap();
    assert_eq!(reading.display(false), "100c");

    let err = reading.set_precision(Precision::Figures(0)).unwrap_err();
    assert!(matches!(err, ValueError::InvalidFigures { figures: 0 }));

    let mut total = quantity("4150");
    total.set_last_place(2);
    assert_eq!(total.precision(), Precision::Figures(2));
    assert_eq!(total.display(false), "4200");
}

#[test]
fn construction_validation() {
    assert!(matches!(SigFigNumber::new(f64::NAN, Precision::Exact),
                     Err(ValueError::NonFiniteValue { .. })));
    assert!(matches!(SigFigNumber::new(f64::INFINITY, Precision::Figures(3)),
                     Err(ValueError::NonFiniteValue { .. })));
    assert!(matches!(SigFigNumber::new(1.0, Precision::Figures(-2)),
                     Err(ValueError::InvalidFigures { figures: -2 })));
    assert!(SigFigNumber::new(-273.15, Precision::Figures(5)).is_ok());
}

#[test]
fn token_stream_with_offsets() {
    let tokens: Vec<SpannedToken> =
        Tokens::new("3.49 + (5c * 3c)").collect::<Result<_, _>>().unwrap();

    let number = |value, precision| {
        Token::Quantity(SigFigNumber::new(value, precision).unwrap())
    };

    let expected =
        vec![SpannedToken { token: number(3.49, Precision::Figures(3)),
                            index: 0, },
             SpannedToken { token: Token::Whitespace,
                            index: 4, },
             SpannedToken { token: Token::Add,
                            index: 5, },
             SpannedToken { token: Token::Whitespace,
                            index: 6, },
             SpannedToken { token: Token::OpenParen,
                            index: 7, },
             SpannedToken { token: number(5.0, Precision::Exact),
                            index: 8, },
             SpannedToken { token: Token::Whitespace,
                            index: 10, },
             SpannedToken { token: Token::Multiply,
                            index: 11, },
             SpannedToken { token: Token::Whitespace,
                            index: 12, },
             SpannedToken { token: number(3.0, Precision::Exact),
                            index: 13, },
             SpannedToken { token: Token::CloseParen,
                            index: 15, },];

    assert_eq!(tokens, expected);
}

#[test]
fn expression_stack_filters_whitespace() {
    let stack = expression_stack("3.49 + (5c * 3c)").unwrap();

    assert_eq!(stack.len(), 7);
    assert!(stack.iter().all(|spanned| !matches!(spanned.token, Token::Whitespace)));
    assert_eq!(stack[0].index, 0);
    assert!(matches!(stack[4].token, Token::Multiply));
    assert_eq!(stack[6].index, 15);
}

#[test]
fn unknown_character_is_error() {
    let err = expression_stack("3 & 4").unwrap_err();

    assert!(matches!(err, LexError::UnknownToken { index: 2, .. }));
    assert_eq!(err.to_string(), "Unknown token at character index 2: ... 3 & 4 ...");
}

#[test]
fn error_display() {
    assert_eq!(ValueError::InvalidFigures { figures: 0 }.to_string(),
               "Invalid precision: 0 significant figures is not a positive count.");
    assert_eq!(LexError::UnknownToken { index:   7,
                                        context: "1 % 2".to_string(), }.to_string(),
               "Unknown token at character index 7: ... 1 % 2 ...");
}

#[test]
fn lexer_is_restartable() {
    let source = "1.0 / .5e1 - 2c";

    let first: Vec<_> = Tokens::new(source).collect();
    let second: Vec<_> = Tokens::new(source).collect();

    assert_eq!(first, second);
}

#[test]
fn minus_is_always_subtract() {
    let stack = expression_stack("-3.0").unwrap();

    assert_eq!(stack.len(), 2);
    assert!(matches!(stack[0].token, Token::Subtract));
    assert!(matches!(stack[1].token, Token::Quantity(_)));
    assert_eq!(stack[1].index, 1);
}

#[test]
fn adjacent_literals_split_greedily() {
    let stack = expression_stack("3.4.5").unwrap();

    assert_eq!(stack.len(), 2);
    assert_eq!(stack[1].index, 3);

    let Token::Quantity(first) = &stack[0].token else {
        panic!("expected a quantity");
    };
    assert_eq!(first.precision(), Precision::Figures(2));
}

#[test]
fn round_trip_stability() {
    for literal in ["100", "100.0", ".0050", "12", "1.2", "0.5", "500.", "3e2", "45.00",
                    "2.50e3", "5c", "0.25c"]
    {
        let parsed = quantity(literal);
        let redisplayed = quantity(&parsed.display(false));

        assert_eq!(redisplayed.precision(),
                   parsed.precision(),
                   "'{literal}' should round-trip");
    }
}

#[test]
fn quantities_are_hashable() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    seen.insert(quantity("1.2"));
    seen.insert(quantity("1.20"));
    seen.insert(quantity("1.2"));

    assert_eq!(seen.len(), 2);
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.expr").unwrap();
    let stack = expression_stack(&contents).unwrap();

    assert!(stack.len() > 10);
}
