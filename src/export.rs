use std::fmt;
use std::io::Write;

use csv::Writer;

use crate::book::Book;
use crate::error::LibraryResult;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    #[value(name = "md")]
    Markdown,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "md"),
        }
    }
}

pub trait Export {
    fn to_csv(&self) -> LibraryResult<String>;
    fn to_md(&self) -> LibraryResult<String>;
    fn to_json(&self) -> LibraryResult<String>;

    fn export(&self, format: ExportFormat) -> LibraryResult<String> {
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Csv => self.to_csv(),
            ExportFormat::Markdown => self.to_md(),
        }
    }
}

impl Export for [Book] {
    fn to_csv(&self) -> LibraryResult<String> {
        // Explicit header: an empty library still exports one.
        let mut wtr = Writer::from_writer(vec![]);
        wtr.write_record(["title", "author", "year", "genre", "read"])?;
        for book in self {
            wtr.write_record([
                book.title.as_str(),
                book.author.as_str(),
                book.year.as_str(),
                book.genre.as_str(),
                if book.read { "true" } else { "false" },
            ])?;
        }
        Ok(String::from_utf8(wtr.into_inner()?)?)
    }

    fn to_md(&self) -> LibraryResult<String> {
        let mut buffer = Vec::new();
        for book in self {
            writeln!(buffer, "### {}", book.title)?;
            writeln!(
                buffer,
                "\n**Author:** {}  \n**Year:** {}  \n**Genre:** {}  \n**Status:** {}",
                book.author,
                book.year,
                book.genre,
                book.status()
            )?;
            writeln!(buffer, "\n---\n")?;
        }
        Ok(String::from_utf8(buffer)?)
    }

    fn to_json(&self) -> LibraryResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
