use std::fmt;

use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::BigInt;
use diesel::sqlite::Sqlite;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest value a `NUMERIC(8,2)` column can hold.
pub const MAX_HUNDREDTHS: i64 = 99_999_999;

/// Non-negative fixed-point quantity with two fractional digits, stored as
/// integer hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, AsExpression, FromSqlRow)]
#[diesel(sql_type = BigInt)]
pub struct Amount(i64);

#[derive(Debug, PartialEq)]
pub enum AmountError {
    NotFinite,
    Negative,
    TooLarge,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::NotFinite => write!(f, "amount must be a finite number"),
            AmountError::Negative => write!(f, "amount must not be negative"),
            AmountError::TooLarge => write!(f, "amount must not exceed 999999.99"),
        }
    }
}

impl Amount {
    pub fn from_hundredths(hundredths: i64) -> Result<Self, AmountError> {
        if hundredths < 0 {
            Err(AmountError::Negative)
        } else if hundredths > MAX_HUNDREDTHS {
            Err(AmountError::TooLarge)
        } else {
            Ok(Amount(hundredths))
        }
    }

    /// Rounds half away from zero to two decimals.
    pub fn from_f64(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        let scaled = (value * 100.0).round();
        if scaled > MAX_HUNDREDTHS as f64 {
            return Err(AmountError::TooLarge);
        }
        Self::from_hundredths(scaled as i64)
    }

    pub fn hundredths(self) -> i64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl ToSql<BigInt, Sqlite> for Amount {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        <i64 as ToSql<BigInt, Sqlite>>::to_sql(&self.0, out)
    }
}

impl FromSql<BigInt, Sqlite> for Amount {
    fn from_sql(bytes: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let hundredths = <i64 as FromSql<BigInt, Sqlite>>::from_sql(bytes)?;
        Amount::from_hundredths(hundredths).map_err(|e| e.to_string().into())
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Amount::from_f64(value).map_err(serde::de::Error::custom)
    }
}
