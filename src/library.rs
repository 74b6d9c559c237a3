use log::{info, warn};

use crate::book::{Book, NewBook, SearchField};
use crate::error::LibraryResult;
use crate::fs::{JsonFile, Storage};
use crate::stats::Statistics;
use crate::utils::contains_ignore_case;

/// The in-memory collection and the storage it is mirrored to.
///
/// Every mutation writes the whole collection back before returning. If that write
/// fails, the collection is left as it was before the call.
pub struct Library<S: Storage = JsonFile> {
    storage: S,
    books: Vec<Book>,
}

impl<S: Storage> Library<S> {
    /// Loads the collection from `storage`. A missing file gives an empty library.
    pub fn open(storage: S) -> LibraryResult<Self> {
        let books = storage.load()?;
        info!("Library loaded with {} books.", books.len());
        Ok(Library { storage, books })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Every book, in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Titles in insertion order, duplicates included.
    pub fn titles(&self) -> Vec<&str> {
        self.books.iter().map(|b| b.title.as_str()).collect()
    }

    /// Validates and appends a book, then persists.
    pub fn add(&mut self, new_book: NewBook) -> LibraryResult<&[Book]> {
        let book = new_book.validate()?;
        let title = book.title.clone();

        self.books.push(book);
        if let Err(e) = self.storage.save(&self.books) {
            self.books.pop();
            return Err(e);
        }

        info!("Added '{}' ({} books)", title, self.books.len());
        Ok(&self.books)
    }

    /// Drops every book whose title equals `title` exactly, then persists.
    ///
    /// The file is rewritten even when nothing matched.
    pub fn remove(&mut self, title: &str) -> LibraryResult<&[Book]> {
        let kept: Vec<Book> = self
            .books
            .iter()
            .filter(|b| b.title != title)
            .cloned()
            .collect();
        let removed = self.books.len() - kept.len();

        self.storage.save(&kept)?;
        self.books = kept;

        if removed == 0 {
            warn!("No book titled '{}' in the library", title);
        } else {
            info!("Removed {} book(s) titled '{}'", removed, title);
        }
        Ok(&self.books)
    }

    /// Books whose `field` contains `term`, ignoring case, in insertion order.
    pub fn search(&self, field: SearchField, term: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| contains_ignore_case(b.field(field), term))
            .collect()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_books(&self.books)
    }
}
