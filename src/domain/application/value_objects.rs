use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

lazy_static! {
    static ref EMAIL_REGEX: regex::Regex = regex::Regex::new(r"\S+@\S+\.\S+").unwrap();
    static ref PORTFOLIO_URL_REGEX: regex::Regex =
        regex::Regex::new(r"^https?://\S+\.\S+$").unwrap();
    static ref DECIMAL_REGEX: regex::Regex =
        regex::Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap();
    static ref DIGITS_REGEX: regex::Regex = regex::Regex::new(r"^[0-9]+$").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmailAddress {
    #[validate(regex(path = *EMAIL_REGEX))]
    pub value: String,
}

impl EmailAddress {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let email = Self { value };
        email.validate()?;
        Ok(email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PortfolioUrl {
    #[validate(regex(path = *PORTFOLIO_URL_REGEX))]
    pub value: String,
}

impl PortfolioUrl {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let url = Self { value };
        url.validate()?;
        Ok(url)
    }
}

/// How strictly phone numbers are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhonePolicy {
    /// Anything that coerces to a number: signs, decimals, exponents,
    /// `0x`/`0o`/`0b` literals and `Infinity` all pass.
    #[default]
    Numeric,
    /// ASCII digits only, surrounding whitespace ignored.
    Digits,
}

impl PhonePolicy {
    pub fn accepts(self, raw: &str) -> bool {
        match self {
            PhonePolicy::Numeric => numeric_value(raw).is_some(),
            PhonePolicy::Digits => DIGITS_REGEX.is_match(raw.trim()),
        }
    }
}

impl FromStr for PhonePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(PhonePolicy::Numeric),
            "digits" => Ok(PhonePolicy::Digits),
            other => Err(format!("expected \"numeric\" or \"digits\", got {other:?}")),
        }
    }
}

/// Loose numeric coercion of form text.
///
/// Blank input coerces to `0`. Returns `None` when the text is not a number
/// (`NaN` itself included).
pub fn numeric_value(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return Some(
            digits
                .chars()
                .filter_map(|c| c.to_digit(radix))
                .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d)),
        );
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if DECIMAL_REGEX.is_match(text) {
        text.parse::<f64>().ok()
    } else {
        None
    }
}
