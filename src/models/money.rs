//! Money type for representing currency amounts
//!
//! Wraps `rust_decimal::Decimal` so that amounts like daily allowances split
//! out of a monthly budget stay exact. Serializes as a plain JSON number.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency symbols recognised in front of an amount
pub const CURRENCY_SYMBOLS: &[&str] = &["₩", "$", "€", "£", "¥"];

/// A monetary amount in the user's currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wrap a decimal amount
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use ticcle::models::Money;
    /// let amount = Money::from_major(30000);
    /// assert_eq!(amount.to_string(), "30,000");
    /// ```
    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Split the amount into `parts` equal shares, rounded to two decimal places
    ///
    /// Returns `None` when `parts` is zero.
    pub fn split_evenly(&self, parts: u32) -> Option<Self> {
        if parts == 0 {
            return None;
        }
        self.0
            .checked_div(Decimal::from(parts))
            .map(|share| {
                Self(share.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
            })
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "30000", "30,000", "-5000", "₩30,000", "-₩2,000",
    /// "₩-2,000", "$10.50". Only the symbols in `CURRENCY_SYMBOLS` are
    /// stripped; any other non-numeric text is an error.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        Self::parse_with_symbol(s, "")
    }

    /// Like [`Money::parse`], also accepting `symbol` in front of the number
    pub fn parse_with_symbol(s: &str, symbol: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let mut rest = s.trim();
        let mut negative = false;
        if let Some(stripped) = rest.strip_prefix('-') {
            negative = true;
            rest = stripped.trim_start();
        }

        let known = std::iter::once(symbol)
            .chain(CURRENCY_SYMBOLS.iter().copied())
            .filter(|sym| !sym.is_empty());
        for sym in known {
            if let Some(stripped) = rest.strip_prefix(sym) {
                rest = stripped.trim_start();
                break;
            }
        }

        if let Some(stripped) = rest.strip_prefix('-') {
            if negative {
                return Err(invalid());
            }
            negative = true;
            rest = stripped;
        }

        let digits: String = rest.chars().filter(|c| *c != ',').collect();
        if !digits.chars().any(|c| c.is_ascii_digit())
            || digits.chars().any(|c| !c.is_ascii_digit() && c != '.')
        {
            return Err(invalid());
        }

        let value = Decimal::from_str(&digits).map_err(|_| invalid())?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol, e.g. `₩30,000` or `-₩2,000`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, group_thousands(self.0.abs()))
        } else {
            format!("{}{}", symbol, group_thousands(self.0))
        }
    }
}

/// Render a non-negative decimal with `,` between thousands
fn group_thousands(value: Decimal) -> String {
    let normalized = value.normalize().to_string();
    let (int_part, frac_part) = match normalized.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (normalized, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{}.{}", grouped, frac),
        None => grouped,
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(""))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_major(30000).to_string(), "30,000");
        assert_eq!(Money::from_major(999).to_string(), "999");
        assert_eq!(Money::from_major(1234567).to_string(), "1,234,567");
        assert_eq!(Money::new(dec!(1000.50)).to_string(), "1,000.5");
        assert_eq!(Money::from_major(-2000).to_string(), "-2,000");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_major(25000).format_with_symbol("₩"), "₩25,000");
        assert_eq!(Money::from_major(-2000).format_with_symbol("₩"), "-₩2,000");
        assert_eq!(Money::zero().format_with_symbol("$"), "$0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(1000);
        let b = Money::from_major(500);

        assert_eq!(a + b, Money::from_major(1500));
        assert_eq!(a - b, Money::from_major(500));
        assert_eq!(-a, Money::from_major(-1000));
        assert!((b - a).is_negative());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("30000").unwrap(), Money::from_major(30000));
        assert_eq!(Money::parse("30,000").unwrap(), Money::from_major(30000));
        assert_eq!(Money::parse("₩30,000").unwrap(), Money::from_major(30000));
        assert_eq!(Money::parse("$10.50").unwrap(), Money::new(dec!(10.50)));
        assert_eq!(Money::parse("-5000").unwrap(), Money::from_major(-5000));
        assert_eq!(Money::parse(" 12 ").unwrap(), Money::from_major(12));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("abc123").is_err());
        assert!(Money::parse("x-5").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("-₩-5").is_err());
        assert!(Money::parse("₩").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("KRW 500").is_err());
    }

    #[test]
    fn test_parse_sign_around_symbol() {
        assert_eq!(Money::parse("-₩2,000").unwrap(), Money::from_major(-2000));
        assert_eq!(Money::parse("₩-500").unwrap(), Money::from_major(-500));
        assert_eq!(Money::parse("$ 7").unwrap(), Money::from_major(7));
    }

    #[test]
    fn test_parse_with_configured_symbol() {
        assert_eq!(
            Money::parse_with_symbol("CHF 1,200", "CHF").unwrap(),
            Money::from_major(1200)
        );
        assert!(Money::parse("CHF 1,200").is_err());
        assert_eq!(
            Money::parse_with_symbol("₩300", "CHF").unwrap(),
            Money::from_major(300)
        );
    }

    #[test]
    fn test_split_evenly() {
        let monthly = Money::from_major(310000);
        assert_eq!(monthly.split_evenly(31), Some(Money::from_major(10000)));

        let odd = Money::from_major(100000);
        assert_eq!(odd.split_evenly(30), Some(Money::new(dec!(3333.33))));

        assert_eq!(monthly.split_evenly(0), None);
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_major(100).is_positive());
        assert!(Money::from_major(-100).is_negative());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_major(100),
            Money::from_major(200),
            Money::from_major(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total, Money::from_major(600));
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serializes_as_number() {
        let m = Money::from_major(30000);
        let value = serde_json::to_value(m).unwrap();
        assert!(value.is_number());
        assert_eq!(value.as_f64(), Some(30000.0));

        let from_int: Money = serde_json::from_str("30000").unwrap();
        assert_eq!(from_int, m);
    }
}
