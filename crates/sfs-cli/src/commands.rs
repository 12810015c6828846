use std::io::Write;

use anyhow::Context;
use colored::Colorize;
use serde_json::json;

use sfs_sdk::{Entry, FieldsReader, FieldsWriter, FileLineStore, SfsConfig};

use crate::cli::*;
use crate::demo;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => SfsConfig::load(path)?,
        None => SfsConfig::default(),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &config, &mut out)
}

/// Run one command against `cli.file`, printing to `out`.
pub fn execute(cli: &Cli, config: &SfsConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let store = FileLineStore::new(&cli.file);
    match &cli.command {
        Command::Headers => cmd_headers(&FieldsReader::with_config(store, config), cli.format, out),
        Command::List(args) => {
            cmd_list(&FieldsReader::with_config(store, config), args, cli.format, out)
        }
        Command::Count(args) => {
            cmd_count(&FieldsReader::with_config(store, config), args, cli.format, out)
        }
        Command::Get(args) => {
            cmd_get(&FieldsReader::with_config(store, config), args, cli.format, out)
        }
        Command::Patch(args) => {
            cmd_patch(&FieldsWriter::with_config(store, config), args, cli.format, out)
        }
        Command::Demo(args) => demo::run(store, config, args, cli.format, out),
    }
}

fn cmd_headers(
    reader: &FieldsReader<FileLineStore>,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let headers = reader.headers()?;
    match format {
        OutputFormat::Json => writeln!(out, "{}", json!({ "headers": headers }))?,
        OutputFormat::Text if headers.is_empty() => writeln!(out, "No sections.")?,
        OutputFormat::Text => {
            for header in &headers {
                writeln!(out, "[{}]", header.cyan())?;
            }
        }
    }
    Ok(())
}

fn cmd_list(
    reader: &FieldsReader<FileLineStore>,
    args: &SectionArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let entries = reader
        .entries(&args.header)
        .with_context(|| format!("listing section [{}]", args.header))?;
    match format {
        OutputFormat::Json => writeln!(
            out,
            "{}",
            json!({ "header": args.header, "entries": entries })
        )?,
        OutputFormat::Text => {
            writeln!(out, "[{}]", args.header.cyan().bold())?;
            for entry in &entries {
                writeln!(out, "  {}: {}", entry.name.bold(), entry.value)?;
            }
        }
    }
    Ok(())
}

fn cmd_count(
    reader: &FieldsReader<FileLineStore>,
    args: &SectionArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let count = reader.entry_count(&args.header)?;
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", json!({ "header": args.header, "count": count }))?
        }
        OutputFormat::Text => writeln!(out, "{count}")?,
    }
    Ok(())
}

fn cmd_get(
    reader: &FieldsReader<FileLineStore>,
    args: &GetArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let value = reader.raw_value(&args.name, &args.header)?;
    match format {
        OutputFormat::Json => writeln!(
            out,
            "{}",
            json!({ "header": args.header, "name": args.name, "value": value })
        )?,
        OutputFormat::Text => writeln!(out, "{value}")?,
    }
    Ok(())
}

fn cmd_patch(
    writer: &FieldsWriter<FileLineStore>,
    args: &PatchArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let old = Entry::new(&args.name, &args.old);
    let new = Entry::new(args.rename.as_deref().unwrap_or(&args.name), &args.new);
    let line = writer.patch(&args.header, &old, &new)?;
    match format {
        OutputFormat::Json => writeln!(
            out,
            "{}",
            json!({ "header": args.header, "line": line, "old": old, "new": new })
        )?,
        OutputFormat::Text => writeln!(
            out,
            "{} [{}] {} → {} (line {})",
            "✓".green().bold(),
            args.header.cyan(),
            old.to_string().dimmed(),
            new.to_string().yellow(),
            line + 1
        )?,
    }
    Ok(())
}
