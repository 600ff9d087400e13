use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "xlsxsplit",
    about = "Split an xlsx workbook into one file per worksheet",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split an xlsx file into one file per sheet
    Split(SplitArgs),
    /// Print version information
    Version(VersionArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    #[arg(
        short,
        long,
        env = "XLSXSPLIT_FILE",
        value_name = "FILE",
        help = "Path to the source xlsx workbook"
    )]
    pub file: PathBuf,

    #[arg(
        short,
        long,
        env = "XLSXSPLIT_OUTPUT",
        value_name = "DIR",
        default_value = ".",
        help = "Directory the extracted sheets are written to"
    )]
    pub output: PathBuf,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct VersionArgs {
    #[arg(short, long, help = "print the version number only")]
    pub short: bool,
}

pub fn render_version(short: bool) -> String {
    let version = env!("CARGO_PKG_VERSION");
    if short {
        return format!("{version}\n");
    }
    format!(
        "{name}\n\n  Version  {version}\n  Platform {os}/{arch}\n  Compiler rustc\n",
        name = env!("CARGO_PKG_NAME"),
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
    )
}
