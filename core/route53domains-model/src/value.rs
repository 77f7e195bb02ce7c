//! Field value behaviour shared by every record.
//!
//! [`FieldValue`] is implemented for each storage type a record field can
//! hold: strings, integers, booleans, timestamps, prices, nested records and
//! sequences of strings or records. It supplies constraint checking, the
//! debug rendering and the run-independent hash.

use crate::schema::{Constraint, ElementType, FieldType};
use route53domains_types::{Price, Result, Timestamp, Violation};
use std::fmt;
use std::hash::Hash;

/// Multiplier used when folding field hashes.
pub const HASH_MULTIPLIER: i32 = 31;

/// A value that can be stored in a record field.
pub trait FieldValue: Clone + PartialEq + Eq + Hash + fmt::Debug {
    /// What a getter hands out: `&str` for strings, the value itself for
    /// small `Copy` types, a borrow for records.
    type View<'a>
    where
        Self: 'a;

    const FIELD_TYPE: FieldType;

    fn view(&self) -> Self::View<'_>;

    /// Checks this value against a field's constraints.
    fn check(&self, constraints: &[Constraint]) -> std::result::Result<(), Violation> {
        let _ = constraints;
        Ok(())
    }

    /// Validates nested records, if any.
    fn validate_nested(&self) -> Result<()> {
        Ok(())
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Hash that is identical across processes and platforms.
    fn field_hash(&self) -> i32;
}

/// A value that can be an element of a sequence field.
pub trait ListElement: FieldValue {
    const ELEMENT_TYPE: ElementType;
}

/// Folds hashes in order: `h = 31 * h + x`, starting from 1.
#[must_use]
pub fn combine_hashes(hashes: &[i32]) -> i32 {
    hashes
        .iter()
        .fold(1i32, |h, x| h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(*x))
}

impl FieldValue for String {
    type View<'a> = &'a str;

    const FIELD_TYPE: FieldType = FieldType::String;

    fn view(&self) -> &str {
        self.as_str()
    }

    fn check(&self, constraints: &[Constraint]) -> std::result::Result<(), Violation> {
        constraints.iter().try_for_each(|c| c.check_str(self))
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn field_hash(&self) -> i32 {
        self.encode_utf16().fold(0i32, |h, unit| {
            h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(i32::from(unit))
        })
    }
}

impl ListElement for String {
    const ELEMENT_TYPE: ElementType = ElementType::String;
}

impl FieldValue for i32 {
    type View<'a> = i32;

    const FIELD_TYPE: FieldType = FieldType::Integer;

    fn view(&self) -> i32 {
        *self
    }

    fn check(&self, constraints: &[Constraint]) -> std::result::Result<(), Violation> {
        constraints
            .iter()
            .try_for_each(|c| c.check_int(i64::from(*self)))
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }

    fn field_hash(&self) -> i32 {
        *self
    }
}

impl FieldValue for bool {
    type View<'a> = bool;

    const FIELD_TYPE: FieldType = FieldType::Boolean;

    fn view(&self) -> bool {
        *self
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }

    fn field_hash(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }
}

impl FieldValue for Timestamp {
    type View<'a> = Timestamp;

    const FIELD_TYPE: FieldType = FieldType::Timestamp;

    fn view(&self) -> Timestamp {
        *self
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }

    fn field_hash(&self) -> i32 {
        let millis = self.epoch_millis();
        (millis ^ ((millis as u64) >> 32) as i64) as i32
    }
}

impl FieldValue for Price {
    type View<'a> = Price;

    const FIELD_TYPE: FieldType = FieldType::Double;

    fn view(&self) -> Price {
        *self
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }

    fn field_hash(&self) -> i32 {
        let bits = self.to_bits();
        (bits ^ (bits >> 32)) as i32
    }
}

impl<T: ListElement> FieldValue for Vec<T> {
    type View<'a>
        = &'a [T]
    where
        Self: 'a;

    const FIELD_TYPE: FieldType = FieldType::List(T::ELEMENT_TYPE);

    fn view(&self) -> &[T] {
        self.as_slice()
    }

    // Constraints of a sequence field apply to each element.
    fn check(&self, constraints: &[Constraint]) -> std::result::Result<(), Violation> {
        self.iter().try_for_each(|item| item.check(constraints))
    }

    fn validate_nested(&self) -> Result<()> {
        self.iter().try_for_each(FieldValue::validate_nested)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }

    fn field_hash(&self) -> i32 {
        let hashes: Vec<i32> = self.iter().map(FieldValue::field_hash).collect();
        combine_hashes(&hashes)
    }
}
