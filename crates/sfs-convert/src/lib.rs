//! Typed value conversion for the Section Field Store.
//!
//! Stored values are plain strings. This crate turns a raw value into a
//! typed one. Two conversion kinds exist, chosen by the static type that is
//! requested through [`FieldValue`]:
//!
//! - **Enum** -- the raw string is matched case-sensitively against the
//!   member names of a type declared with [`field_enum!`].
//! - **Registered** -- the raw string is handed to the [`ValueConverter`]
//!   registered for the type in a [`ConverterRegistry`]. A missing
//!   registration fails at call time with
//!   [`ConvertError::NoConverterRegistered`].
//!
//! # Built-in Strategies
//!
//! - [`IntConverter`] -- base-10 signed integers
//! - [`FloatConverter`] -- locale-invariant decimals
//! - [`BoolConverter`] -- exactly `"true"` / `"false"`
//! - [`StringConverter`] -- the raw string itself
//! - [`FnConverter`] -- any parse function, for custom value types
//!
//! ```
//! use sfs_convert::{convert, field_enum, ConverterRegistry};
//!
//! field_enum! {
//!     pub enum TestEnum { One, Two, Three }
//! }
//!
//! let registry = ConverterRegistry::with_builtins();
//! assert_eq!(convert::<TestEnum>("Two", &registry).unwrap(), TestEnum::Two);
//! assert_eq!(convert::<i32>("-7", &registry).unwrap(), -7);
//! assert!(convert::<TestEnum>("Four", &registry).is_err());
//! ```

pub mod converter;
pub mod enums;
pub mod error;
pub mod kind;
pub mod registry;

pub use converter::{
    BoolConverter, FloatConverter, FnConverter, IntConverter, StringConverter, ValueConverter,
};
pub use enums::FieldEnum;
pub use error::{ConvertError, ConvertResult};
pub use kind::{convert, ConversionKind, FieldValue};
pub use registry::ConverterRegistry;
