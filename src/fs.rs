use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Serialize;

use crate::{
    book::Book,
    error::{LibraryError, LibraryResult},
};

pub const DEFAULT_LIBRARY_PATH: &str = "library.txt";

/// Where the collection lives between sessions.
///
/// `save` always receives the whole collection and replaces whatever was stored before.
pub trait Storage {
    fn load(&self) -> LibraryResult<Vec<Book>>;
    fn save(&self, books: &[Book]) -> LibraryResult<()>;
}

/// The collection as a JSON array in a single file.
///
/// There is no locking: two sessions pointed at the same file will overwrite each other.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> LibraryError {
        LibraryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Storage for JsonFile {
    fn load(&self) -> LibraryResult<Vec<Book>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No library file at {:?}, starting empty", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let books: Vec<Book> =
            serde_json::from_slice(&content).map_err(|source| LibraryError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!("Loaded {} books from {:?}", books.len(), self.path);
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> LibraryResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        fs::write(&self.path, to_pretty_json(books)?).map_err(|e| self.io_error(e))?;

        debug!("Wrote {} books to {:?}", books.len(), self.path);
        Ok(())
    }
}

/// Pretty JSON with four-space indentation.
fn to_pretty_json(books: &[Book]) -> LibraryResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    books.serialize(&mut serializer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Book> {
        vec![
            Book {
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                year: "1965".to_string(),
                genre: "Sci-Fi".to_string(),
                read: false,
            },
            Book {
                title: "1984".to_string(),
                author: "Orwell".to_string(),
                year: "1949".to_string(),
                genre: "Dystopian".to_string(),
                read: true,
            },
        ]
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFile::new(dir.path().join("library.txt"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFile::new(dir.path().join("library.txt"));

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn test_save_replaces_previous_content() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFile::new(dir.path().join("library.txt"));

        store.save(&sample()).unwrap();
        store.save(&sample()[1..]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "1984");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFile::new(dir.path().join("nested").join("deeper").join("books.json"));

        store.save(&sample()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_file_format() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFile::new(dir.path().join("library.txt"));
        store.save(&sample()[..1]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let expected = "[\n    {\n        \"title\": \"Dune\",\n        \"author\": \"Herbert\",\n        \"year\": \"1965\",\n        \"genre\": \"Sci-Fi\",\n        \"read\": false\n    }\n]";
        assert_eq!(content, expected);
    }

    #[test]
    fn test_empty_collection_is_an_empty_array() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFile::new(dir.path().join("library.txt"));
        store.save(&[]).unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("library.txt");
        fs::write(&path, "[{\"title\": \"Dune\"").unwrap();

        let err = JsonFile::new(&path).load().unwrap_err();
        assert!(matches!(err, LibraryError::Parse { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("library.txt");
        fs::write(&path, b"[{\"title\": \"\xff\xfe\"}]").unwrap();

        let err = JsonFile::new(&path).load().unwrap_err();
        assert!(matches!(err, LibraryError::Parse { .. }));
    }

    #[test]
    fn test_missing_parent_dir_loads_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFile::new(dir.path().join("absent").join("library.txt"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_path_through_a_file_is_an_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "[]").unwrap();

        // NotADirectory, not NotFound: must not be mistaken for an empty library.
        let err = JsonFile::new(blocker.join("library.txt")).load().unwrap_err();
        assert!(matches!(err, LibraryError::Io { .. }));
    }

    #[test]
    fn test_wrong_shape_is_a_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("library.txt");
        fs::write(&path, "{\"title\": \"Dune\"}").unwrap();

        let err = JsonFile::new(&path).load().unwrap_err();
        assert!(matches!(err, LibraryError::Parse { .. }));
    }

    #[test]
    fn test_unreadable_path_is_an_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        // A directory exists at the path, so reading it as a file fails.
        let err = JsonFile::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, LibraryError::Io { .. }));
    }

    #[test]
    fn test_unwritable_path_is_an_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = JsonFile::new(dir.path()).save(&sample()).unwrap_err();
        assert!(matches!(err, LibraryError::Io { .. }));
    }
}
