use tracing::debug;

use sfs_types::{
    enumerate_fields, validate_header, validate_name, validate_value, DeclaredSection,
    EnumerationConfig, FieldSource, ValidationError, ValidationResult,
};

/// Enumerate `source` under `header` and validate the result.
///
/// Fails with [`ValidationError::NoWritableFields`] when the source exposes
/// no member under `config`, rather than producing an empty section.
pub fn declare_section<T: FieldSource + ?Sized>(
    header: &str,
    source: &T,
    config: &EnumerationConfig,
) -> ValidationResult<DeclaredSection> {
    validate_header(header)?;
    let entries = enumerate_fields(source, config);
    if entries.is_empty() {
        return Err(ValidationError::NoWritableFields {
            header: header.to_string(),
        });
    }

    let section = DeclaredSection::new(header, entries);
    validate_section(&section)?;
    debug!(header, entries = section.len(), "declared section");
    Ok(section)
}

/// Check that a section can be encoded without breaking the line format.
///
/// A section without entries fails with [`ValidationError::NoWritableFields`].
pub fn validate_section(section: &DeclaredSection) -> ValidationResult<()> {
    validate_header(&section.header)?;
    if section.is_empty() {
        return Err(ValidationError::NoWritableFields {
            header: section.header.clone(),
        });
    }
    for entry in &section.entries {
        validate_name(&entry.name)?;
        validate_value(&entry.name, &entry.value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfs_types::{Entry, FieldList};

    struct TestSaveClass {
        other_var: i32,
        label: String,
    }

    impl FieldSource for TestSaveClass {
        fn enumerate(&self, fields: &mut FieldList) {
            fields.public("OtherVar2", self.other_var);
            fields.private("label", &self.label);
        }
    }

    struct Silent;

    impl FieldSource for Silent {
        fn enumerate(&self, _fields: &mut FieldList) {}
    }

    fn sample() -> TestSaveClass {
        TestSaveClass {
            other_var: 1,
            label: "x".into(),
        }
    }

    #[test]
    fn declares_enumerated_entries() {
        let section =
            declare_section("TestSaveHeader", &sample(), &EnumerationConfig::default()).unwrap();
        assert_eq!(section.header, "TestSaveHeader");
        assert_eq!(section.entries, vec![Entry::new("OtherVar2", "1"), Entry::new("label", "x")]);
    }

    #[test]
    fn public_only_config() {
        let section = declare_section("H", &sample(), &EnumerationConfig::public_only()).unwrap();
        assert_eq!(section.entries, vec![Entry::new("OtherVar2", "1")]);
    }

    #[test]
    fn no_writable_fields() {
        let err = declare_section("Empty", &Silent, &EnumerationConfig::default()).unwrap_err();
        assert_eq!(err, ValidationError::NoWritableFields { header: "Empty".into() });
    }

    #[test]
    fn bad_header_rejected() {
        let err = declare_section("a]b", &sample(), &EnumerationConfig::default()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidHeader { .. }));
    }

    #[test]
    fn multiline_value_rejected() {
        let source = TestSaveClass {
            other_var: 1,
            label: "two\nlines".into(),
        };
        let err = declare_section("H", &source, &EnumerationConfig::default()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn empty_declared_section_rejected() {
        let err = validate_section(&DeclaredSection::new("E", Vec::new())).unwrap_err();
        assert_eq!(err, ValidationError::NoWritableFields { header: "E".into() });
    }

    #[test]
    fn close_marker_header_rejected() {
        let err = declare_section("/A", &sample(), &EnumerationConfig::default()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidHeader { .. }));
    }

    #[test]
    fn validate_section_checks_names() {
        let section = DeclaredSection::new("H", vec![Entry::new("a:b", "1")]);
        assert!(matches!(validate_section(&section), Err(ValidationError::InvalidName { .. })));
    }
}
