use thiserror::Error;

/// Errors produced while converting a raw value into a typed one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The raw string names no member of the enumeration.
    #[error("unknown member {raw:?} for enum {enum_name}")]
    UnknownEnumMember { raw: String, enum_name: &'static str },

    /// No strategy is registered for the requested type.
    #[error("no converter registered for type {type_name}")]
    NoConverterRegistered { type_name: &'static str },

    /// The raw string is not a valid literal of the target type.
    #[error("cannot parse {raw:?} as {target}: {reason}")]
    Malformed {
        raw: String,
        target: &'static str,
        reason: String,
    },
}

/// Convenience alias for conversion results.
pub type ConvertResult<T> = Result<T, ConvertError>;
