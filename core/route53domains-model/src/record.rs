//! Typed Record mechanics.
//!
//! Record shapes are declared with [`typed_record!`](crate::typed_record),
//! which generates the struct (every field an `Option`), its
//! [`RecordSchema`], getters, validating setters, fluent `with_*` builders,
//! value equality, the stable hash and the debug rendering.

use crate::schema::{Constraint, RecordSchema};
use crate::value::FieldValue;
use route53domains_types::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// A schema-defined aggregate of independently nullable fields.
pub trait TypedRecord: FieldValue + Default + fmt::Display + Serialize + DeserializeOwned {
    const SCHEMA: RecordSchema;

    /// Re-checks every set field, including nested records.
    ///
    /// Setters already enforce constraints; this is for records that came
    /// from a deserializer.
    fn validate(&self) -> Result<()>;

    /// Whether the named field holds a value. `None` for unknown names.
    fn is_set(&self, field: &str) -> Option<bool>;

    /// Returns the named field to the unset state. Returns false for unknown names.
    fn clear(&mut self, field: &str) -> bool;

    /// Folds field hashes in declaration order; unset fields contribute 0.
    fn stable_hash(&self) -> i32;

    /// Wire names of the fields that hold a value, in declaration order.
    fn set_fields(&self) -> Vec<&'static str> {
        Self::SCHEMA
            .field_names()
            .filter(|name| self.is_set(name) == Some(true))
            .collect()
    }

    /// Returns true if no field is set.
    fn is_empty(&self) -> bool {
        self.set_fields().is_empty()
    }
}

/// Checks a value against a field's constraints and validates nested records.
pub fn check_field<V: FieldValue>(
    record: &'static str,
    field: &'static str,
    constraints: &[Constraint],
    value: &V,
) -> Result<()> {
    value
        .check(constraints)
        .map_err(|violation| Error::Validation {
            record,
            field,
            violation,
        })?;
    value.validate_nested()
}

/// Writes `{Name: value,Name: value}` for the fields that are set.
pub struct RecordRenderer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> RecordRenderer<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> std::result::Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, empty: true })
    }

    /// Renders one field; unset fields produce no output.
    pub fn field<V: FieldValue>(&mut self, name: &str, value: Option<&V>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if !self.empty {
            self.f.write_str(",")?;
        }
        self.empty = false;
        write!(self.f, "{name}: ")?;
        value.render(self.f)
    }

    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_storage {
    (scalar $ty:ty) => { $ty };
    (token $ty:ty) => { ::std::string::String };
    (list $ty:ty) => { ::std::vec::Vec<$ty> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_field_type {
    (scalar $ty:ty) => {
        <$ty as $crate::FieldValue>::FIELD_TYPE
    };
    (token $ty:ty) => {
        $crate::FieldType::Enum(<$ty as $crate::EnumRegistry>::NAME)
    };
    (list $ty:ty) => {
        <::std::vec::Vec<$ty> as $crate::FieldValue>::FIELD_TYPE
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_accessors {
    (
        scalar [$record:literal] [$(#[$fmeta:meta])*]
        $field:ident : $ty:ty = $wire:literal [$($c:expr),*]
        => $set:ident, $with:ident
    ) => {
        $(#[$fmeta])*
        #[must_use]
        pub fn $field(&self) -> ::std::option::Option<<$ty as $crate::FieldValue>::View<'_>> {
            self.$field.as_ref().map($crate::FieldValue::view)
        }

        #[doc = concat!("Sets `", $wire, "`, checking its constraints.")]
        pub fn $set(&mut self, value: impl ::std::convert::Into<$ty>) -> $crate::Result<&mut Self> {
            let value: $ty = value.into();
            $crate::record::check_field($record, $wire, &[$($c),*], &value)?;
            self.$field = ::std::option::Option::Some(value);
            ::std::result::Result::Ok(self)
        }

        #[doc = concat!("Fluent form of setting `", $wire, "`.")]
        pub fn $with(mut self, value: impl ::std::convert::Into<$ty>) -> $crate::Result<Self> {
            self.$set(value)?;
            ::std::result::Result::Ok(self)
        }
    };

    (
        token [$record:literal] [$(#[$fmeta:meta])*]
        $field:ident : $ty:ty = $wire:literal [$($c:expr),*]
        => $set:ident, $with:ident, $value:ident, $set_strict:ident
    ) => {
        $(#[$fmeta])*
        #[must_use]
        pub fn $field(&self) -> ::std::option::Option<&str> {
            self.$field.as_deref()
        }

        #[doc = concat!("`", $wire, "` parsed into [`", stringify!($ty), "`].")]
        ///
        /// # Errors
        ///
        /// Returns `Error::UnknownEnumValue` when the stored token is not in the registry.
        pub fn $value(&self) -> $crate::Result<::std::option::Option<$ty>> {
            self.$field
                .as_deref()
                .map(<$ty as $crate::EnumRegistry>::parse)
                .transpose()
        }

        #[doc = concat!("Sets `", $wire, "` from a typed value or a raw token.")]
        pub fn $set(
            &mut self,
            value: impl ::std::convert::Into<::std::string::String>,
        ) -> $crate::Result<&mut Self> {
            let value: ::std::string::String = value.into();
            $crate::record::check_field($record, $wire, &[$($c),*], &value)?;
            self.$field = ::std::option::Option::Some(value);
            ::std::result::Result::Ok(self)
        }

        #[doc = concat!("Sets `", $wire, "` from a token that must belong to the registry.")]
        pub fn $set_strict(&mut self, token: &str) -> $crate::Result<&mut Self> {
            let value = <$ty as $crate::EnumRegistry>::parse(token)?;
            self.$set(value)
        }

        #[doc = concat!("Fluent form of setting `", $wire, "`.")]
        pub fn $with(
            mut self,
            value: impl ::std::convert::Into<::std::string::String>,
        ) -> $crate::Result<Self> {
            self.$set(value)?;
            ::std::result::Result::Ok(self)
        }
    };

    (
        list [$record:literal] [$(#[$fmeta:meta])*]
        $field:ident : $ty:ty = $wire:literal [$($c:expr),*]
        => $set:ident, $with:ident, $append:ident, $with_appended:ident
    ) => {
        $(#[$fmeta])*
        #[must_use]
        pub fn $field(&self) -> ::std::option::Option<&[$ty]> {
            self.$field.as_deref()
        }

        #[doc = concat!("Replaces the whole `", $wire, "` sequence.")]
        pub fn $set(
            &mut self,
            values: impl ::std::iter::IntoIterator<Item = impl ::std::convert::Into<$ty>>,
        ) -> $crate::Result<&mut Self> {
            let values: ::std::vec::Vec<$ty> = values.into_iter().map(::std::convert::Into::into).collect();
            $crate::record::check_field($record, $wire, &[$($c),*], &values)?;
            self.$field = ::std::option::Option::Some(values);
            ::std::result::Result::Ok(self)
        }

        #[doc = concat!("Appends to `", $wire, "`, starting a new sequence if it is unset.")]
        pub fn $append(
            &mut self,
            values: impl ::std::iter::IntoIterator<Item = impl ::std::convert::Into<$ty>>,
        ) -> $crate::Result<&mut Self> {
            let values: ::std::vec::Vec<$ty> = values.into_iter().map(::std::convert::Into::into).collect();
            $crate::record::check_field($record, $wire, &[$($c),*], &values)?;
            self.$field
                .get_or_insert_with(::std::vec::Vec::new)
                .extend(values);
            ::std::result::Result::Ok(self)
        }

        #[doc = concat!("Fluent form of replacing `", $wire, "`.")]
        pub fn $with(
            mut self,
            values: impl ::std::iter::IntoIterator<Item = impl ::std::convert::Into<$ty>>,
        ) -> $crate::Result<Self> {
            self.$set(values)?;
            ::std::result::Result::Ok(self)
        }

        #[doc = concat!("Fluent form of appending to `", $wire, "`.")]
        pub fn $with_appended(
            mut self,
            values: impl ::std::iter::IntoIterator<Item = impl ::std::convert::Into<$ty>>,
        ) -> $crate::Result<Self> {
            self.$append(values)?;
            ::std::result::Result::Ok(self)
        }
    };
}

/// Declares a Typed Record.
///
/// Each field line names its kind (`scalar`, `token` for enum-typed fields
/// stored as raw tokens, `list` for sequences), the Rust field name and
/// type, the wire name, the constraints and the generated method names:
///
/// ```
/// use route53domains_model::{typed_record, Constraint, TypedRecord};
///
/// typed_record! {
///     /// A pet.
///     pub struct Pet = "Pet" {
///         scalar name: String = "Name" [Constraint::MaxLength(8)] => set_name, with_name;
///         list tags: String = "Tags" [] => set_tags, with_tags, append_tags, with_appended_tags;
///     }
/// }
///
/// let pet = Pet::default().with_name("Rex").unwrap();
/// assert_eq!(pet.to_string(), "{Name: Rex}");
/// assert!(Pet::default().with_name("Rex the third").is_err());
/// assert_eq!(Pet::SCHEMA.fields.len(), 2);
/// ```
#[macro_export]
macro_rules! typed_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident = $record:literal {
            $(
                $(#[$fmeta:meta])*
                $kind:ident $field:ident : $ty:ty = $wire:literal [$($c:expr),*]
                => $($method:ident),+ ;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        $vis struct $name {
            $( $field: ::std::option::Option<$crate::__record_storage!($kind $ty)>, )*
        }

        impl $name {
            $(
                $crate::__record_accessors! {
                    $kind [$record] [$(#[$fmeta])*]
                    $field : $ty = $wire [$($c),*]
                    => $($method),+
                }
            )*
        }

        impl $crate::TypedRecord for $name {
            const SCHEMA: $crate::RecordSchema = $crate::RecordSchema {
                name: $record,
                fields: &[
                    $(
                        $crate::FieldSchema {
                            name: $wire,
                            field_type: $crate::__record_field_type!($kind $ty),
                            constraints: &[$($c),*],
                        },
                    )*
                ],
            };

            fn validate(&self) -> $crate::Result<()> {
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        $crate::record::check_field($record, $wire, &[$($c),*], value)?;
                    }
                )*
                ::std::result::Result::Ok(())
            }

            fn is_set(&self, field: &str) -> ::std::option::Option<bool> {
                match field {
                    $( $wire => ::std::option::Option::Some(self.$field.is_some()), )*
                    _ => ::std::option::Option::None,
                }
            }

            fn clear(&mut self, field: &str) -> bool {
                match field {
                    $(
                        $wire => {
                            self.$field = ::std::option::Option::None;
                            true
                        }
                    )*
                    _ => false,
                }
            }

            fn stable_hash(&self) -> i32 {
                let hashes: &[i32] = &[
                    $( self.$field.as_ref().map_or(0, $crate::FieldValue::field_hash), )*
                ];
                $crate::value::combine_hashes(hashes)
            }
        }

        impl $crate::FieldValue for $name {
            type View<'a> = &'a Self;

            const FIELD_TYPE: $crate::FieldType = $crate::FieldType::Record($record);

            fn view(&self) -> &Self {
                self
            }

            fn validate_nested(&self) -> $crate::Result<()> {
                <Self as $crate::TypedRecord>::validate(self)
            }

            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }

            fn field_hash(&self) -> i32 {
                <Self as $crate::TypedRecord>::stable_hash(self)
            }
        }

        impl $crate::ListElement for $name {
            const ELEMENT_TYPE: $crate::ElementType = $crate::ElementType::Record($record);
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut out = $crate::record::RecordRenderer::new(f)?;
                $( out.field($wire, self.$field.as_ref())?; )*
                out.finish()
            }
        }

        // Unset fields are left out; explicit empties are written.
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                use $crate::__private::serde::ser::SerializeStruct as _;

                let len = 0 $( + usize::from(self.$field.is_some()) )*;
                #[allow(unused_mut)]
                let mut state = serializer.serialize_struct($record, len)?;
                $(
                    match &self.$field {
                        ::std::option::Option::Some(value) => state.serialize_field($wire, value)?,
                        ::std::option::Option::None => state.skip_field($wire)?,
                    }
                )*
                state.end()
            }
        }

        // Missing keys and nulls leave a field unset; unknown keys are skipped.
        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                struct RecordVisitor;

                impl<'de> $crate::__private::serde::de::Visitor<'de> for RecordVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str(concat!("a ", $record, " object"))
                    }

                    fn visit_map<A>(self, mut map: A) -> ::std::result::Result<$name, A::Error>
                    where
                        A: $crate::__private::serde::de::MapAccess<'de>,
                    {
                        #[allow(unused_mut)]
                        let mut record = <$name as ::std::default::Default>::default();
                        while let ::std::option::Option::Some(key) =
                            map.next_key::<::std::string::String>()?
                        {
                            match key.as_str() {
                                $( $wire => record.$field = map.next_value()?, )*
                                _ => {
                                    map.next_value::<$crate::__private::serde::de::IgnoredAny>()?;
                                }
                            }
                        }
                        ::std::result::Result::Ok(record)
                    }
                }

                deserializer.deserialize_map(RecordVisitor)
            }
        }
    };
}
