use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;

use printpkg_loader::DumpLoader;

use crate::settings::Settings;

mod print;

pub use print::*;

pub fn exec() -> miette::Result<ExitCode> {
    let settings = Settings::from(Cli::parse());
    settings.init_logger();
    let loader = DumpLoader::new(".");
    let mut out = BufWriter::new(io::stdout());
    let mut err = BufWriter::new(io::stderr());
    let outcome = run(&loader, &settings, &mut out, &mut err)?;
    Ok(outcome.into())
}

/// Print the syntax trees of packages to stdout, and their definitions and uses to stderr
#[derive(Parser)]
#[clap(version, about, long_about = None)]
pub struct Cli {
    /// Package patterns: a dump file, a directory, or `dir/...` to include subdirectories
    #[clap(value_name = "PATTERN")]
    pub patterns: Vec<String>,
    /// Show log messages of this level and above (off, error, warn, info, debug, trace)
    #[clap(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: log::LevelFilter,
}
