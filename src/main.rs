#![allow(clippy::uninlined_format_args)]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug};
use shelf::{JsonFile, Library, LibraryError, LibraryResult, cli::Cli, commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = run(cli);
    match &result {
        Ok(()) => {}
        Err(e @ LibraryError::Validation { .. }) => {
            eprintln!("⚠️  {}. Please fill in every field.", e);
        }
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("Error: {}", e);
        }
    }
    ExitCode::from(commands::exit_code(&result))
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> LibraryResult<()> {
    let mut library = Library::open(JsonFile::new(cli.file))?;
    debug!("Using library file {:?}", library.storage().path());

    let stdin = io::stdin();
    commands::execute(&mut library, cli.command, &mut stdin.lock(), &mut io::stdout())
}
