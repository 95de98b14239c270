//! Deserialize a `BigInt` from its decimal string form or a native number.

use crate::bigint::BigInt;
use core::fmt;
use serde::de::{Deserialize, Deserializer, Error, Visitor};

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string")
            }

            fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
            where
                E: Error,
            {
                value.parse().map_err(Error::custom)
            }
        }

        deserializer.deserialize_str(BigIntVisitor)
    }
}
