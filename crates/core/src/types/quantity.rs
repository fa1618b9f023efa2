//! Line item quantities.
//!
//! A [`Quantity`] is always at least one. Out-of-range requests are clamped
//! rather than rejected, so there is no error type here.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// A quantity of one or more units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, returning `None` for zero.
    #[must_use]
    pub const fn new(units: u32) -> Option<Self> {
        match NonZeroU32::new(units) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }

    /// Create a quantity from any requested value, clamping into `1..=u32::MAX`.
    ///
    /// Zero and negative requests become one.
    #[must_use]
    pub fn clamped(requested: i64) -> Self {
        let units = u32::try_from(requested.max(1)).unwrap_or(u32::MAX);
        Self::new(units).unwrap_or(Self::ONE)
    }

    /// Interpret free-form user input from a quantity field.
    ///
    /// Reads the leading integer after any whitespace and an optional sign,
    /// ignoring what follows ("2.5" is 2, "3abc" is 3). Input with no leading
    /// digits yields one; parsed values are clamped like [`Quantity::clamped`].
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim_start();
        let (negative, rest) = trimmed.strip_prefix('-').map_or_else(
            || (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
            |rest| (true, rest),
        );
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let digits = rest.get(..len).unwrap_or_default();

        if digits.is_empty() || negative {
            return Self::ONE;
        }
        // All digits, so the only possible failure is overflow.
        Self::clamped(digits.parse::<i64>().unwrap_or(i64::MAX))
    }

    /// The number of units.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Add two quantities, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0.get()))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(Quantity::new(0), None);
        assert_eq!(Quantity::new(3).map(Quantity::get), Some(3));
    }

    #[test]
    fn test_clamped_never_below_one() {
        assert_eq!(Quantity::clamped(0).get(), 1);
        assert_eq!(Quantity::clamped(-5).get(), 1);
        assert_eq!(Quantity::clamped(i64::MIN).get(), 1);
        assert_eq!(Quantity::clamped(4).get(), 4);
    }

    #[test]
    fn test_clamped_caps_at_u32_max() {
        assert_eq!(Quantity::clamped(i64::MAX).get(), u32::MAX);
    }

    #[test]
    fn test_from_input() {
        assert_eq!(Quantity::from_input("3").get(), 3);
        assert_eq!(Quantity::from_input(" 2 ").get(), 2);
        assert_eq!(Quantity::from_input("").get(), 1);
        assert_eq!(Quantity::from_input("abc").get(), 1);
        assert_eq!(Quantity::from_input("-4").get(), 1);
        assert_eq!(Quantity::from_input("0").get(), 1);
    }

    #[test]
    fn test_from_input_reads_leading_integer() {
        assert_eq!(Quantity::from_input("2.5").get(), 2);
        assert_eq!(Quantity::from_input("3abc").get(), 3);
        assert_eq!(Quantity::from_input("+4").get(), 4);
        assert_eq!(Quantity::from_input("  7 units").get(), 7);
        assert_eq!(Quantity::from_input("-2.5").get(), 1);
        assert_eq!(Quantity::from_input(".5").get(), 1);
        assert_eq!(Quantity::from_input("99999999999").get(), u32::MAX);
        assert_eq!(Quantity::from_input("99999999999999999999999").get(), u32::MAX);
    }

    #[test]
    fn test_saturating_add() {
        let max = Quantity::clamped(i64::MAX);
        assert_eq!(max.saturating_add(Quantity::ONE), max);
        assert_eq!(Quantity::ONE.saturating_add(Quantity::ONE).get(), 2);
    }

    #[test]
    fn test_default_is_one() {
        assert_eq!(Quantity::default(), Quantity::ONE);
    }
}
