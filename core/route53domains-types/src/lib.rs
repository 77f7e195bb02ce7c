//! Core type definitions for the Route 53 Domains model.
//!
//! This crate defines the service-agnostic building blocks that the record
//! layer is generated from:
//! - The error taxonomy shared by every record and registry
//! - [`EnumRegistry`] and the [`string_enum!`] macro for closed,
//!   string-backed value sets
//! - The service's enumerations (country codes, operation types, ...)
//! - [`Timestamp`], the wire-level date value, and [`Price`]
//!
//! Record shapes themselves live in `route53domains-model`.

mod registry;

mod country;
mod enums;
mod price;
mod timestamp;

pub use country::CountryCode;
pub use enums::{
    ContactType, DomainAvailability, ExtraParamName, OperationStatus, OperationType,
    ReachabilityStatus, Transferable,
};
pub use price::Price;
pub use registry::EnumRegistry;
pub use timestamp::Timestamp;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by field setters and registry lookups.
///
/// All of them are synchronous and local to the caller of `set_*` or
/// `parse`; nothing in this layer retries or swallows them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A value violates a length, pattern or range constraint of its field.
    #[error("invalid value for {record}.{field}: {violation}")]
    Validation {
        record: &'static str,
        field: &'static str,
        violation: Violation,
    },

    /// A token is not a member of a closed enum registry.
    #[error("unknown {registry} value: {value:?}")]
    UnknownEnumValue {
        registry: &'static str,
        value: String,
    },

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl Error {
    /// Returns the wire name of the offending field, if this is a validation error.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Returns true for constraint violations raised by a setter.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true for registry lookups that missed.
    #[must_use]
    pub fn is_unknown_enum_value(&self) -> bool {
        matches!(self, Self::UnknownEnumValue { .. })
    }
}

/// The constraint a rejected value broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("length {actual} exceeds maximum {max}")]
    TooLong { max: usize, actual: usize },

    #[error("value does not match pattern {pattern}")]
    PatternMismatch { pattern: &'static str },

    #[error("{actual} is outside the range {min}..={max}")]
    OutOfRange { min: i64, max: i64, actual: i64 },
}
