use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, LibraryResult};

/// A single catalog entry, stored with exactly these keys in the library file.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Free text, never parsed as a number.
    pub year: String,
    pub genre: String,
    #[serde(default)]
    pub read: bool,
}

impl Book {
    pub fn status(&self) -> &'static str {
        if self.read { "✅ Read" } else { "❌ Not read yet" }
    }

    /// Value of the field a search runs against.
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "📖 {} by {} ({}) - {} - {}",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.status()
        )
    }
}

/// User input for a book that has not been validated yet.
#[derive(Debug, Clone, Default)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read: bool,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        NewBook {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read,
        }
    }

    /// Returns the first empty required field, checked in title, author, year, genre order.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("title", &self.title),
            ("author", &self.author),
            ("year", &self.year),
            ("genre", &self.genre),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
    }

    pub fn validate(self) -> LibraryResult<Book> {
        if let Some(field) = self.missing_field() {
            return Err(LibraryError::Validation { field });
        }

        Ok(Book {
            title: self.title,
            author: self.author,
            year: self.year,
            genre: self.genre,
            read: self.read,
        })
    }
}

/// Which field a search looks at.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            year: "1965".to_string(),
            genre: "Sci-Fi".to_string(),
            read: false,
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            dune().to_string(),
            "📖 Dune by Herbert (1965) - Sci-Fi - ❌ Not read yet"
        );

        let read = Book { read: true, ..dune() };
        assert!(read.to_string().ends_with("✅ Read"));
    }

    #[test]
    fn test_validate_ok() {
        let book = NewBook::new("Dune", "Herbert", "1965", "Sci-Fi", false)
            .validate()
            .unwrap();
        assert_eq!(book, dune());
    }

    #[test]
    fn test_validate_reports_first_empty_field() {
        let err = NewBook::new("Dune", "", "", "Sci-Fi", false)
            .validate()
            .unwrap_err();
        assert!(matches!(err, LibraryError::Validation { field: "author" }));

        let err = NewBook::new("Dune", "Herbert", "1965", "", true)
            .validate()
            .unwrap_err();
        assert!(matches!(err, LibraryError::Validation { field: "genre" }));
    }

    #[test]
    fn test_year_is_free_text() {
        let book = NewBook::new("Beowulf", "Unknown", "c. 1000", "Epic", false)
            .validate()
            .unwrap();
        assert_eq!(book.year, "c. 1000");
    }

    #[test]
    fn test_missing_read_defaults_to_false() {
        let json = r#"{"title":"Dune","author":"Herbert","year":"1965","genre":"Sci-Fi"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert!(!book.read);
    }

    #[test]
    fn test_serialized_keys() {
        let value = serde_json::to_value(dune()).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        keys.sort();
        assert_eq!(keys, ["author", "genre", "read", "title", "year"]);
    }
}
