use regex_lite::Regex;
use route53domains_types::Violation;
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

/// Describes a record type's fields, in declaration order.
///
/// This is what a wire serializer walks: every field has a stable wire name,
/// a semantic type and the constraints a setter enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSchema],
}

impl RecordSchema {
    /// Looks up a field by its wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Wire names of all fields, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|f| f.name)
    }
}

/// One field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Wire name (e.g. `"DomainName"`).
    pub name: &'static str,
    pub field_type: FieldType,
    pub constraints: &'static [Constraint],
}

impl FieldSchema {
    /// Maximum length, if the field declares one.
    #[must_use]
    pub fn max_length(&self) -> Option<usize> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::MaxLength(max) => Some(*max),
            _ => None,
        })
    }

    /// Inclusive numeric range, if the field declares one.
    #[must_use]
    pub fn range(&self) -> Option<(i64, i64)> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::Range { min, max } => Some((*min, *max)),
            _ => None,
        })
    }
}

/// The semantic type of a field.
///
/// Enum fields carry the registry name; their values are stored as raw
/// tokens so that values added server-side still deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Double,
    Boolean,
    Timestamp,
    Record(&'static str),
    Enum(&'static str),
    List(ElementType),
}

/// The element type of a sequence field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    String,
    Record(&'static str),
}

/// A declared restriction on a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Maximum length in UTF-16 code units, the unit the service counts in.
    MaxLength(usize),
    /// Regular expression the whole value must match.
    Pattern(&'static str),
    /// Inclusive numeric bounds.
    Range { min: i64, max: i64 },
}

impl Constraint {
    /// Checks a string value. Range constraints do not apply to strings.
    pub fn check_str(&self, value: &str) -> Result<(), Violation> {
        match *self {
            Self::MaxLength(max) => {
                let actual = value.encode_utf16().count();
                if actual > max {
                    return Err(Violation::TooLong { max, actual });
                }
            }
            Self::Pattern(pattern) => {
                if !matches_pattern(pattern, value) {
                    return Err(Violation::PatternMismatch { pattern });
                }
            }
            Self::Range { .. } => {}
        }
        Ok(())
    }

    /// Checks an integer value. Only range constraints apply to integers.
    pub fn check_int(&self, value: i64) -> Result<(), Violation> {
        match *self {
            Self::Range { min, max } if value < min || value > max => Err(Violation::OutOfRange {
                min,
                max,
                actual: value,
            }),
            _ => Ok(()),
        }
    }
}

// Compiled once per distinct pattern; an invalid pattern rejects every value.
static PATTERNS: LazyLock<Mutex<HashMap<&'static str, Option<Regex>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn matches_pattern(pattern: &'static str, value: &str) -> bool {
    let mut patterns = PATTERNS.lock().unwrap_or_else(PoisonError::into_inner);
    patterns
        .entry(pattern)
        .or_insert_with(|| Regex::new(&format!("^(?:{pattern})$")).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}
