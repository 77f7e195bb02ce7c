//! Closed, string-backed value sets.
//!
//! Every enumeration the service defines is declared with [`string_enum!`],
//! which produces a plain Rust enum plus the lookup table tying each variant
//! to its wire token. Parsing is exact and case-sensitive; a token outside
//! the table is an [`Error::UnknownEnumValue`](crate::Error::UnknownEnumValue),
//! never a fallback variant.

use crate::Result;
use std::fmt;
use std::hash::Hash;

/// A closed set of symbolic constants, each backed by one wire token.
pub trait EnumRegistry: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Registry name used in error messages (e.g. `"CountryCode"`).
    const NAME: &'static str;

    /// Every member, in declaration order.
    const VALUES: &'static [Self];

    /// Returns the wire token of this member.
    fn as_str(&self) -> &'static str;

    /// Looks up the member whose token is exactly `value`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownEnumValue` when no member carries `value`.
    fn parse(value: &str) -> Result<Self>;

    /// Every wire token, in declaration order.
    #[must_use]
    fn tokens() -> Vec<&'static str> {
        Self::VALUES.iter().map(Self::as_str).collect()
    }

    /// Returns true if `value` is a token of this registry.
    #[must_use]
    fn is_known(value: &str) -> bool {
        Self::VALUES.iter().any(|v| v.as_str() == value)
    }
}

/// Declares a string-backed enumeration and its [`EnumRegistry`] table.
///
/// ```
/// use route53domains_types::{string_enum, EnumRegistry};
///
/// string_enum! {
///     /// Traffic light.
///     pub enum Light = "Light" {
///         Red => "RED",
///         Green => "GREEN",
///     }
/// }
///
/// assert_eq!(Light::parse("RED").unwrap(), Light::Red);
/// assert!(Light::parse("red").is_err());
/// assert_eq!(Light::Green.to_string(), "GREEN");
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident = $registry:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::EnumRegistry for $name {
            const NAME: &'static str = $registry;
            const VALUES: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }

            fn parse(value: &str) -> $crate::Result<Self> {
                match value {
                    $( $token => Ok(Self::$variant), )+
                    other => Err($crate::Error::UnknownEnumValue {
                        registry: $registry,
                        value: other.to_owned(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(<Self as $crate::EnumRegistry>::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::EnumRegistry>::parse(s)
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                <Self as $crate::EnumRegistry>::as_str(self)
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                <$name as $crate::EnumRegistry>::as_str(&value).to_owned()
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(<Self as $crate::EnumRegistry>::as_str(self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let token = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <Self as $crate::EnumRegistry>::parse(&token)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
