//! The `demo` command: write two sample sections, then read a custom value.

use std::io::Write;

use colored::Colorize;
use serde_json::json;

use sfs_sdk::{
    field_enum, FieldList, FieldSource, FieldValue, FieldsReader, FieldsWriter, FileLineStore,
    FnConverter, SdkError, SfsConfig,
};

use crate::cli::{DemoArgs, OutputFormat};

field_enum! {
    pub enum TestEnum { One, Two, Three }
}

field_enum! {
    pub enum Types { TestType, Other }
}

/// Integer wrapper read back through a registered converter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestClass {
    pub count: i32,
}

impl TestClass {
    pub fn new(count: i32) -> Self {
        Self { count }
    }
}

impl std::fmt::Display for TestClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count)
    }
}

impl FieldValue for TestClass {}

pub struct TestSaveClass {
    pub test_var: TestEnum,
    pub test_var2: Types,
    pub other_var: i32,
    pub test_write_class: TestClass,
}

impl Default for TestSaveClass {
    fn default() -> Self {
        Self {
            test_var: TestEnum::One,
            test_var2: Types::TestType,
            other_var: 1,
            test_write_class: TestClass::new(100),
        }
    }
}

impl FieldSource for TestSaveClass {
    fn enumerate(&self, fields: &mut FieldList) {
        fields
            .public("testEnum", self.test_var)
            .public("testEnum2", self.test_var2)
            .public("OtherVar2", self.other_var)
            .public("testWriteClass", self.test_write_class);
    }
}

pub const HEADER: &str = "TestSaveHeader";

pub fn run(
    store: FileLineStore,
    config: &SfsConfig,
    args: &DemoArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let path = store.path().to_path_buf();
    let writer = FieldsWriter::with_config(store, config)
        .section(HEADER, &TestSaveClass::default())?
        .section("12345", &TestSaveClass::default())?;

    let value = if args.use_async {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(async {
            if args.rewrite {
                writer.rewrite_async().await?;
            } else {
                writer.write_async().await?;
            }
            let value = reader(FileLineStore::new(&path), config)
                .value_async::<TestClass>("testWriteClass", HEADER)
                .await?;
            Ok::<_, SdkError>(value)
        })?
    } else {
        if args.rewrite {
            writer.rewrite()?;
        } else {
            writer.write()?;
        }
        reader(FileLineStore::new(&path), config).value::<TestClass>("testWriteClass", HEADER)?
    };

    match format {
        OutputFormat::Json => writeln!(
            out,
            "{}",
            json!({
                "file": path.display().to_string(),
                "sections": writer.sections().len(),
                "testWriteClass": value.count,
            })
        )?,
        OutputFormat::Text => {
            writeln!(
                out,
                "{} wrote {} sections to {}",
                "✓".green().bold(),
                writer.sections().len(),
                path.display().to_string().bold()
            )?;
            writeln!(out, "testWriteClass = {} (TestClass)", value.to_string().yellow())?;
        }
    }
    Ok(())
}

fn reader(store: FileLineStore, config: &SfsConfig) -> FieldsReader<FileLineStore> {
    let mut reader = FieldsReader::with_config(store, config);
    reader.register::<TestClass>(FnConverter::wrapping(TestClass::new));
    reader
}
