//! Estimated fare amounts.

use std::fmt;

/// A non-negative fare in pounds, rounded to whole pence.
///
/// # Examples
///
/// ```
/// use fare_server::domain::Fare;
///
/// let fare = Fare::from_pounds(2.004).unwrap();
/// assert_eq!(fare.pounds(), 2.0);
/// assert_eq!(fare.to_string(), "2.00");
///
/// assert!(Fare::from_pounds(-1.0).is_none());
/// assert!(Fare::from_pounds(f64::NAN).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Fare(f64);

impl Fare {
    /// Round an amount to two decimal places.
    ///
    /// Exact half pennies round to the even penny, so `0.125` becomes `0.12`
    /// and `0.375` becomes `0.38`.
    ///
    /// Returns `None` for negative or non-finite amounts.
    pub fn from_pounds(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        // `+ 0.0` normalises a rounded `-0.0`
        Some(Fare((amount * 100.0).round_ties_even() / 100.0 + 0.0))
    }

    /// Returns the amount in pounds.
    pub fn pounds(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_pence() {
        assert_eq!(Fare::from_pounds(3.0000000000000004).unwrap().pounds(), 3.0);
        assert_eq!(Fare::from_pounds(1.256).unwrap().pounds(), 1.26);
        assert_eq!(Fare::from_pounds(0.0).unwrap().pounds(), 0.0);
    }

    #[test]
    fn half_pennies_round_to_even() {
        assert_eq!(Fare::from_pounds(0.125).unwrap().pounds(), 0.12);
        assert_eq!(Fare::from_pounds(0.375).unwrap().pounds(), 0.38);
        assert_eq!(Fare::from_pounds(0.625).unwrap().to_string(), "0.62");
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Fare::from_pounds(1.5).unwrap().to_string(), "1.50");
        assert_eq!(Fare::from_pounds(12.0).unwrap().to_string(), "12.00");
    }

    #[test]
    fn rejects_invalid() {
        assert!(Fare::from_pounds(-0.01).is_none());
        assert!(Fare::from_pounds(f64::INFINITY).is_none());
    }

    #[test]
    fn ordering() {
        let cheap = Fare::from_pounds(1.5).unwrap();
        let dear = Fare::from_pounds(3.0).unwrap();
        assert!(cheap < dear);
    }
}
