//! Billing amounts.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An amount charged to the account, in US dollars.
///
/// The service sends prices as JSON numbers. Equality and hashing go through
/// [`Price::to_bits`], so `Price` is `Eq` and can sit in records: `0.0` and
/// `-0.0` differ, and every NaN equals every other NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Price(f64);

impl Price {
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// IEEE 754 bit pattern, with every NaN collapsed to the canonical one.
    #[must_use]
    pub fn to_bits(&self) -> u64 {
        if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Eq for Price {}

impl Hash for Price {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

// Always shows a fractional part: `12.0`, `0.5`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self)
    }
}
