//! Serialize a `BigInt` as its decimal string form.

use crate::bigint::BigInt;
use serde::ser::{Serialize, Serializer};

impl Serialize for BigInt {
    /// Serializes as a decimal string, so values beyond any native integer
    /// range survive formats that would otherwise truncate them.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
