//! The [`ValueConverter`] strategy and its built-in implementations.

use std::any::type_name;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{ConvertError, ConvertResult};

/// Strategy turning a raw stored value into a `T`.
pub trait ValueConverter<T>: Send + Sync {
    fn parse(&self, raw: &str) -> ConvertResult<T>;
}

fn parse_with_from_str<T>(raw: &str) -> ConvertResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>().map_err(|e| ConvertError::Malformed {
        raw: raw.to_string(),
        target: type_name::<T>(),
        reason: e.to_string(),
    })
}

/// Base-10 signed integer parser.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntConverter;

/// Locale-invariant decimal parser (`.` is the only decimal separator).
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatConverter;

macro_rules! from_str_converter {
    ($converter:ty => $($target:ty),+) => {
        $(
            impl ValueConverter<$target> for $converter {
                fn parse(&self, raw: &str) -> ConvertResult<$target> {
                    parse_with_from_str::<$target>(raw)
                }
            }
        )+
    };
}

from_str_converter!(IntConverter => i8, i16, i32, i64, i128, isize);
from_str_converter!(FloatConverter => f32, f64);

/// Boolean parser accepting exactly `"true"` and `"false"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoolConverter;

impl ValueConverter<bool> for BoolConverter {
    fn parse(&self, raw: &str) -> ConvertResult<bool> {
        match raw {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ConvertError::Malformed {
                raw: raw.to_string(),
                target: "bool",
                reason: "expected \"true\" or \"false\"".into(),
            }),
        }
    }
}

/// Identity conversion: the stored text is the value.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringConverter;

impl ValueConverter<String> for StringConverter {
    fn parse(&self, raw: &str) -> ConvertResult<String> {
        Ok(raw.to_string())
    }
}

/// Custom strategy backed by a parse function.
///
/// ```
/// use sfs_convert::{FnConverter, ValueConverter};
///
/// struct Count(i32);
///
/// let converter = FnConverter::wrapping(Count);
/// assert_eq!(converter.parse("100").unwrap().0, 100);
/// ```
pub struct FnConverter<T> {
    parse: Box<dyn Fn(&str) -> ConvertResult<T> + Send + Sync>,
}

impl<T> FnConverter<T> {
    /// Use `parse` as the conversion.
    pub fn new(parse: impl Fn(&str) -> ConvertResult<T> + Send + Sync + 'static) -> Self {
        Self {
            parse: Box::new(parse),
        }
    }

    /// Parse the raw string as the constructor argument `A`, then build a `T`.
    pub fn wrapping<A>(ctor: impl Fn(A) -> T + Send + Sync + 'static) -> Self
    where
        A: FromStr,
        A::Err: Display,
    {
        Self::new(move |raw| parse_with_from_str::<A>(raw).map(&ctor))
    }
}

impl<T> ValueConverter<T> for FnConverter<T> {
    fn parse(&self, raw: &str) -> ConvertResult<T> {
        (self.parse)(raw)
    }
}

impl<T> std::fmt::Debug for FnConverter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnConverter")
            .field("target", &type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(ValueConverter::<i32>::parse(&IntConverter, "42").unwrap(), 42);
        assert_eq!(
            ValueConverter::<i64>::parse(&IntConverter, "-9000000000").unwrap(),
            -9_000_000_000
        );
        assert_eq!(ValueConverter::<i8>::parse(&IntConverter, "-128").unwrap(), i8::MIN);
    }

    #[test]
    fn malformed_integers() {
        let err = ValueConverter::<i32>::parse(&IntConverter, "4.2").unwrap_err();
        assert!(matches!(err, ConvertError::Malformed { target: "i32", .. }));
        assert!(ValueConverter::<i8>::parse(&IntConverter, "300").is_err());
        assert!(ValueConverter::<i32>::parse(&IntConverter, "").is_err());
        assert!(ValueConverter::<i32>::parse(&IntConverter, " 1").is_err());
    }

    #[test]
    fn floats_ignore_locale() {
        assert_eq!(ValueConverter::<f64>::parse(&FloatConverter, "1.5").unwrap(), 1.5);
        assert_eq!(ValueConverter::<f32>::parse(&FloatConverter, "-0.25").unwrap(), -0.25);
        assert!(ValueConverter::<f64>::parse(&FloatConverter, "1,5").is_err());
    }

    #[test]
    fn booleans_are_case_sensitive() {
        assert!(BoolConverter.parse("true").unwrap());
        assert!(!BoolConverter.parse("false").unwrap());
        assert!(BoolConverter.parse("True").is_err());
        assert!(BoolConverter.parse("1").is_err());
    }

    #[test]
    fn strings_pass_through() {
        assert_eq!(StringConverter.parse("a: b").unwrap(), "a: b");
    }

    #[derive(Debug, PartialEq)]
    struct TestClass {
        count: i32,
    }

    impl TestClass {
        fn new(count: i32) -> Self {
            Self { count }
        }
    }

    #[test]
    fn fn_converter_wraps_constructor() {
        let converter = FnConverter::wrapping(TestClass::new);
        assert_eq!(converter.parse("100").unwrap(), TestClass::new(100));

        let err = converter.parse("lots").unwrap_err();
        assert!(matches!(err, ConvertError::Malformed { target: "i32", .. }));
    }

    #[test]
    fn fn_converter_custom_closure() {
        let converter = FnConverter::new(|raw: &str| Ok(raw.len()));
        assert_eq!(converter.parse("four").unwrap(), 4);
    }

    #[test]
    fn fn_converter_debug_names_target() {
        let converter = FnConverter::wrapping(TestClass::new);
        assert!(format!("{converter:?}").contains("TestClass"));
    }
}
