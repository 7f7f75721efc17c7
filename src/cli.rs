use clap::Parser;
use std::path::PathBuf;

use crate::config::ThemeMode;

#[derive(Debug, Default, Parser)]
#[command(name = "postlette")]
#[command(version = "0.1.0")]
#[command(about = "Unicode polish for social posts")]
pub struct CliArgs {
    /// Text file to open (created on first save if it does not exist)
    pub file: Option<PathBuf>,

    /// Color theme; overrides the config file
    #[arg(long, short = 'T', value_enum)]
    pub theme: Option<ThemeMode>,

    /// Config file to use instead of the default location
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the terminal is busy drawing the editor)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    /// Check if the provided path is a directory (following symlinks)
    pub fn is_directory(&self) -> bool {
        if let Some(path) = &self.file {
            std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
        } else {
            false
        }
    }
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
