// Clap definitions in derive style

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{book::SearchField, export::ExportFormat, fs::DEFAULT_LIBRARY_PATH};

#[derive(Parser, Debug)]
#[command(name = "shelf", version, about)]
pub struct Cli {
    /// Set the level of verbosity
    /// -v for info, -vv for debug, -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Library file
    #[arg(short = 'f', long = "file", default_value = DEFAULT_LIBRARY_PATH, global = true)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the library
    Add {
        #[arg(required_unless_present = "interactive")]
        title: Option<String>,
        #[arg(required_unless_present = "interactive")]
        author: Option<String>,
        #[arg(required_unless_present = "interactive")]
        year: Option<String>,
        #[arg(required_unless_present = "interactive")]
        genre: Option<String>,

        /// Mark the book as already read
        #[arg(short, long, default_value_t = false)]
        read: bool,

        /// Prompt for each field instead
        #[arg(short, long, default_value_t = false, conflicts_with_all = ["title", "author", "year", "genre", "read"])]
        interactive: bool,
    },

    /// Remove every book with this exact title, or pick one from a list
    Remove { title: Option<String> },

    /// Search by title or author, ignoring case
    Search {
        #[arg(short, long, value_enum, default_value_t = SearchField::Title)]
        by: SearchField,

        #[arg(default_value = "")]
        term: String,
    },

    /// Show every book
    List,

    /// Show how much of the library has been read
    Stats,

    /// Write the whole library as json, csv or md
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output file, stdout when missing
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
}
