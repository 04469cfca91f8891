//! Monetary price type.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The value is negative.
    #[error("price cannot be negative")]
    Negative,
    /// The input could not be parsed as a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// A non-negative monetary amount, stored as an exact decimal.
///
/// Backed by [`rust_decimal::Decimal`] so arithmetic is exact; never use
/// floats for money. Maps to `NUMERIC(10, 2)` in Postgres.
///
/// ## Examples
///
/// ```
/// use emporium_core::Price;
///
/// let price = Price::parse("19.99").unwrap();
/// assert_eq!(price.display(), "$19.99");
///
/// assert!(Price::parse("-1.00").is_err());
/// assert!(Price::parse("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Construct a `Price` from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the value is below zero.
    pub fn new(value: Decimal) -> Result<Self, PriceError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(PriceError::Negative);
        }
        Ok(Self(value.round_dp(2)))
    }

    /// Parse a `Price` from a string such as `"19.99"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid decimal or is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let value: Decimal = s
            .trim()
            .parse()
            .map_err(|_| PriceError::Invalid(s.to_owned()))?;
        Self::new(value)
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display with a currency symbol, e.g. `$19.99`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <Decimal as sqlx::Decode<'_, sqlx::Postgres>>::decode(value)?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Decimal as sqlx::Encode<'_, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let price = Price::parse("19.99").unwrap();
        assert_eq!(price.to_string(), "19.99");
        assert_eq!(price.display(), "$19.99");
    }

    #[test]
    fn test_parse_zero() {
        let price = Price::parse("0").unwrap();
        assert_eq!(price.display(), "$0.00");
    }

    #[test]
    fn test_rounds_to_cents() {
        let price = Price::parse("10.999").unwrap();
        assert_eq!(price.display(), "$11.00");
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(Price::parse("-1.00"), Err(PriceError::Negative)));
    }

    #[test]
    fn test_invalid_rejected() {
        assert!(matches!(Price::parse("abc"), Err(PriceError::Invalid(_))));
    }

    #[test]
    fn test_ordering() {
        let cheap = Price::parse("1.50").unwrap();
        let expensive = Price::parse("100.00").unwrap();
        assert!(cheap < expensive);
    }
}
