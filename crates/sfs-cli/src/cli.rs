use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sfs",
    about = "Section Field Store: inspect and patch sectioned save files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Save file to operate on
    #[arg(short, long, global = true, default_value = "data.save")]
    pub file: PathBuf,

    /// TOML configuration (match mode, merge strategy, enumeration)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every section header
    Headers,
    /// Show the entries of a section
    List(SectionArgs),
    /// Count the entries of a section
    Count(SectionArgs),
    /// Print one stored value
    Get(GetArgs),
    /// Replace one entry in place
    Patch(PatchArgs),
    /// Write the sample sections and read a custom value back
    Demo(DemoArgs),
}

#[derive(Args)]
pub struct SectionArgs {
    pub header: String,
}

#[derive(Args)]
pub struct GetArgs {
    pub header: String,
    pub name: String,
}

#[derive(Args)]
pub struct PatchArgs {
    pub header: String,
    pub name: String,
    pub old: String,
    pub new: String,
    /// Rename the entry as well
    #[arg(long)]
    pub rename: Option<String>,
}

#[derive(Args)]
pub struct DemoArgs {
    /// Merge with the existing file instead of overwriting it
    #[arg(long)]
    pub rewrite: bool,
    /// Use the async store paths
    #[arg(long = "async")]
    pub use_async: bool,
}
