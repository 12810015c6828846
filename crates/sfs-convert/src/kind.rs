//! Static dispatch between enum and registered conversions.

use crate::error::ConvertResult;
use crate::registry::ConverterRegistry;

/// How a raw value becomes a `T`, decided by the requested type.
pub enum ConversionKind<'r, T> {
    /// Match against the member names of an enumeration.
    Enum {
        name: &'static str,
        parse: fn(&str) -> ConvertResult<T>,
    },
    /// Use the strategy registered for `T`.
    Registered(&'r ConverterRegistry),
}

impl<T: 'static> ConversionKind<'_, T> {
    pub fn parse(&self, raw: &str) -> ConvertResult<T> {
        match self {
            ConversionKind::Enum { parse, .. } => parse(raw),
            ConversionKind::Registered(registry) => registry.parse::<T>(raw),
        }
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, ConversionKind::Enum { .. })
    }
}

impl<T> std::fmt::Debug for ConversionKind<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionKind::Enum { name, .. } => f.debug_tuple("Enum").field(name).finish(),
            ConversionKind::Registered(registry) => {
                f.debug_tuple("Registered").field(registry).finish()
            }
        }
    }
}

/// A type that can be read back from a stored value.
///
/// The default conversion kind is [`ConversionKind::Registered`]; a custom
/// value type opts in with an empty impl and a registered strategy:
///
/// ```
/// use sfs_convert::{convert, ConverterRegistry, FieldValue, FnConverter};
///
/// struct TestClass(i32);
/// impl FieldValue for TestClass {}
///
/// let mut registry = ConverterRegistry::new();
/// registry.register::<TestClass>(FnConverter::wrapping(TestClass));
/// assert_eq!(convert::<TestClass>("100", &registry).unwrap().0, 100);
/// ```
pub trait FieldValue: Sized + 'static {
    fn conversion(registry: &ConverterRegistry) -> ConversionKind<'_, Self> {
        ConversionKind::Registered(registry)
    }
}

macro_rules! registered_field_values {
    ($($target:ty),+) => {
        $(impl FieldValue for $target {})+
    };
}

registered_field_values!(i8, i16, i32, i64, i128, isize, f32, f64, bool, String);

/// Convert `raw` into a `T` using the conversion kind `T` selects.
pub fn convert<T: FieldValue>(raw: &str, registry: &ConverterRegistry) -> ConvertResult<T> {
    T::conversion(registry).parse(raw)
}
