//! Length attribute values such as `fo:font-size="12pt"`.
//!
//! A length is a decimal number with an optional leading `-`, immediately
//! followed by one of the units `cm`, `mm`, `in`, `pt`, `pc`, `px` or `%`.
//! Anything else (signs other than `-`, exponents, surrounding whitespace,
//! other units) is not a length. Invalid input is `None`, never an error.

use std::fmt;

use cssparser::{Parser, ParserInput, Token};

/// Unit of a [`Length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Cm,
    Mm,
    In,
    Pt,
    Pc,
    Px,
    Percent,
}

impl LengthUnit {
    fn from_dimension(unit: &str) -> Option<Self> {
        Some(match unit {
            "cm" => LengthUnit::Cm,
            "mm" => LengthUnit::Mm,
            "in" => LengthUnit::In,
            "pt" => LengthUnit::Pt,
            "pc" => LengthUnit::Pc,
            "px" => LengthUnit::Px,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::In => "in",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Px => "px",
            LengthUnit::Percent => "%",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed length: value and unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn is_percentage(&self) -> bool {
        self.unit == LengthUnit::Percent
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Parse any length, including negative values and percentages.
pub fn parse_length(input: &str) -> Option<Length> {
    let mut parser_input = ParserInput::new(input);
    let mut parser = Parser::new(&mut parser_input);

    let unit = match parser.next_including_whitespace().ok()? {
        Token::Dimension { unit, .. } => LengthUnit::from_dimension(unit.as_ref())?,
        Token::Percentage { .. } => LengthUnit::Percent,
        _ => return None,
    };
    if parser.next_including_whitespace_and_comments().is_ok() {
        return None;
    }

    // Re-read the number from the source: the tokenizer accepts forms
    // (`+`, exponents) that lengths do not, and only yields f32.
    let number = input.get(..input.len().checked_sub(unit.as_str().len())?)?;
    if !is_decimal(number) {
        return None;
    }
    let value = number.parse::<f64>().ok()?;
    Some(Length::new(value, unit))
}

/// `-?` followed by `digits[.digits]` or `.digits` with a non-zero digit.
fn is_decimal(number: &str) -> bool {
    let unsigned = number.strip_prefix('-').unwrap_or(number);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if !all_digits(whole) || !fraction.is_none_or(all_digits) {
        return false;
    }
    if !whole.is_empty() {
        return true;
    }
    fraction.is_some_and(|f| f.bytes().any(|b| b != b'0'))
}

/// Length strictly greater than zero, percentages excluded.
pub fn parse_positive_length(input: &str) -> Option<Length> {
    parse_length(input).filter(|length| length.value > 0.0 && !length.is_percentage())
}

/// Length greater than or equal to zero, percentages excluded.
pub fn parse_non_negative_length(input: &str) -> Option<Length> {
    parse_length(input).filter(|length| length.value >= 0.0 && !length.is_percentage())
}

/// Percentage of any sign.
pub fn parse_percentage(input: &str) -> Option<Length> {
    parse_length(input).filter(Length::is_percentage)
}

/// `fo:font-size`: a positive length or a percentage.
pub fn parse_fo_font_size(input: &str) -> Option<Length> {
    parse_positive_length(input).or_else(|| parse_percentage(input))
}

/// `fo:line-height`: a non-negative length or a percentage.
pub fn parse_fo_line_height(input: &str) -> Option<Length> {
    parse_non_negative_length(input).or_else(|| parse_percentage(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length_units() {
        assert_eq!(parse_length("12.5pt"), Some(Length::new(12.5, LengthUnit::Pt)));
        assert_eq!(parse_length("2cm"), Some(Length::new(2.0, LengthUnit::Cm)));
        assert_eq!(parse_length("0.5in"), Some(Length::new(0.5, LengthUnit::In)));
        assert_eq!(parse_length("3mm"), Some(Length::new(3.0, LengthUnit::Mm)));
        assert_eq!(parse_length("1pc"), Some(Length::new(1.0, LengthUnit::Pc)));
        assert_eq!(parse_length("16px"), Some(Length::new(16.0, LengthUnit::Px)));
        assert_eq!(parse_length("150%"), Some(Length::new(150.0, LengthUnit::Percent)));
    }

    #[test]
    fn test_parse_length_keeps_sign() {
        assert_eq!(parse_length("-3%"), Some(Length::new(-3.0, LengthUnit::Percent)));
        assert_eq!(parse_length("-.25cm"), Some(Length::new(-0.25, LengthUnit::Cm)));
    }

    #[test]
    fn test_parse_length_rejects() {
        for input in [
            "abc", "", "12", "pt", "12em", "12 pt", " 12pt", "12pt ", "+12pt", "1e2pt", "12PT",
            "12pt3", ".0pt", "--1pt", "12pt;",
        ] {
            assert_eq!(parse_length(input), None, "{input:?}");
        }
    }

    #[test]
    fn test_is_decimal() {
        assert!(is_decimal("0"));
        assert!(is_decimal("007.50"));
        assert!(is_decimal("-1.5"));
        assert!(is_decimal(".5"));
        assert!(is_decimal("0.0"));
        assert!(!is_decimal(".0"));
        assert!(!is_decimal("."));
        assert!(!is_decimal("-"));
        assert!(!is_decimal("1.2.3"));
        assert!(!is_decimal("+1"));
    }

    #[test]
    fn test_positive_and_non_negative() {
        assert_eq!(parse_positive_length("1pt"), Some(Length::new(1.0, LengthUnit::Pt)));
        assert_eq!(parse_positive_length("0pt"), None);
        assert_eq!(parse_positive_length("-3%"), None);
        assert_eq!(parse_positive_length("50%"), None);
        assert_eq!(
            parse_non_negative_length("0pt"),
            Some(Length::new(0.0, LengthUnit::Pt))
        );
        assert_eq!(parse_non_negative_length("-1pt"), None);
        assert_eq!(parse_non_negative_length("10%"), None);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(
            parse_percentage("-3%"),
            Some(Length::new(-3.0, LengthUnit::Percent))
        );
        assert_eq!(parse_percentage("3pt"), None);
    }

    #[test]
    fn test_fo_font_size() {
        assert_eq!(parse_fo_font_size("12pt"), Some(Length::new(12.0, LengthUnit::Pt)));
        assert_eq!(
            parse_fo_font_size("120%"),
            Some(Length::new(120.0, LengthUnit::Percent))
        );
        assert_eq!(parse_fo_font_size("0pt"), None);
        assert_eq!(parse_fo_font_size("abc"), None);
    }

    #[test]
    fn test_fo_line_height() {
        assert_eq!(parse_fo_line_height("0cm"), Some(Length::new(0.0, LengthUnit::Cm)));
        assert_eq!(
            parse_fo_line_height("100%"),
            Some(Length::new(100.0, LengthUnit::Percent))
        );
        assert_eq!(parse_fo_line_height("-1mm"), None);
        assert_eq!(parse_fo_line_height("abc"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::new(12.5, LengthUnit::Pt).to_string(), "12.5pt");
        assert_eq!(Length::new(-3.0, LengthUnit::Percent).to_string(), "-3%");
    }
}
