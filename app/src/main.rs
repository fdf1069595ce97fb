use std::process::ExitCode;

mod cli;
mod settings;

fn main() -> miette::Result<ExitCode> {
    cli::exec()
}
