//! Enumerations stored by member name.

use crate::error::{ConvertError, ConvertResult};

/// An enumeration whose members are stored by their declared names.
///
/// Implemented by [`field_enum!`](crate::field_enum); a manual
/// implementation only needs [`NAME`](FieldEnum::NAME) and
/// [`MEMBERS`](FieldEnum::MEMBERS).
pub trait FieldEnum: Copy + PartialEq + 'static {
    /// Name of the enumeration type, used in error messages.
    const NAME: &'static str;

    /// Every member with its declared name, in declaration order.
    const MEMBERS: &'static [(&'static str, Self)];

    /// Find the member declared as `raw` (case-sensitive).
    fn parse_member(raw: &str) -> ConvertResult<Self> {
        Self::MEMBERS
            .iter()
            .find(|(name, _)| *name == raw)
            .map(|(_, member)| *member)
            .ok_or_else(|| ConvertError::UnknownEnumMember {
                raw: raw.to_string(),
                enum_name: Self::NAME,
            })
    }

    /// Declared name of this member.
    fn member_name(&self) -> &'static str {
        Self::MEMBERS
            .iter()
            .find(|(_, member)| member == self)
            .map(|(name, _)| *name)
            .unwrap_or(Self::NAME)
    }
}

/// Declare an enumeration that is stored by member name.
///
/// The macro derives `Clone, Copy, Debug, PartialEq, Eq, Hash` and
/// implements [`FieldEnum`], [`FieldValue`](crate::FieldValue) (with the
/// enum conversion kind), and `Display` (the member name). Only unit
/// variants are supported.
///
/// ```
/// use sfs_convert::{field_enum, FieldEnum};
///
/// field_enum! {
///     /// Difficulty setting.
///     pub enum Difficulty { Easy, Hard }
/// }
///
/// assert_eq!(Difficulty::Hard.to_string(), "Hard");
/// assert_eq!(Difficulty::parse_member("Easy").unwrap(), Difficulty::Easy);
/// ```
#[macro_export]
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::FieldEnum for $name {
            const NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [(&'static str, Self)] =
                &[$((stringify!($variant), $name::$variant)),+];
        }

        impl $crate::FieldValue for $name {
            fn conversion(
                _registry: &$crate::ConverterRegistry,
            ) -> $crate::ConversionKind<'_, Self> {
                $crate::ConversionKind::Enum {
                    name: <Self as $crate::FieldEnum>::NAME,
                    parse: <Self as $crate::FieldEnum>::parse_member,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::FieldEnum::member_name(self))
            }
        }
    };
}
