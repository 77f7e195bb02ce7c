//! Typed request/response records for Route 53 Domains.
//!
//! Every record is a schema-defined aggregate of independently nullable
//! fields:
//! - [`RecordSchema`] / [`FieldSchema`] describe fields, their semantic
//!   [`FieldType`] and their [`Constraint`]s, in declaration order
//! - [`TypedRecord`] is the shared surface (validation, presence checks,
//!   the run-independent hash)
//! - [`typed_record!`] generates getters, validating `set_*` methods and
//!   fluent `with_*` builders for each shape
//!
//! Setters check constraints synchronously and return
//! [`Error::Validation`]; registry lookups return
//! [`Error::UnknownEnumValue`]. Unset is always `None` and never collides
//! with an empty string, zero or an empty sequence.
//!
//! Records are single-owner values. Getters hand out shared borrows only,
//! so field storage can change only through the setters.

pub mod record;
mod schema;
pub mod value;

mod contact;
mod domain;
mod operations;

pub use contact::{ContactDetail, ExtraParam};
pub use domain::{
    BillingRecord, DomainSuggestion, DomainSummary, DomainTransferability, HOST_NAME_PATTERN, Nameserver,
    OperationSummary, Tag,
};
pub use operations::*;
pub use record::TypedRecord;
pub use schema::{Constraint, ElementType, FieldSchema, FieldType, RecordSchema};
pub use value::{FieldValue, ListElement};

pub use route53domains_types::{
    ContactType, CountryCode, DomainAvailability, EnumRegistry, Error, ExtraParamName,
    OperationStatus, OperationType, Price, ReachabilityStatus, Result, Timestamp, Transferable,
    Violation,
};

#[doc(hidden)]
pub mod __private {
    pub use route53domains_types::__private::serde;
}
