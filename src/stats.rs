use std::fmt;

use crate::{book::Book, utils::round2};

/// Reading progress over a whole collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub read_count: usize,
    /// Percent of books read, two decimals. Zero for an empty collection.
    pub read_percentage: f64,
}

impl Statistics {
    pub fn from_books(books: &[Book]) -> Self {
        let total = books.len();
        let read_count = books.iter().filter(|b| b.read).count();

        let read_percentage = if total == 0 {
            0.0
        } else {
            round2(read_count as f64 / total as f64 * 100.0)
        };

        Statistics {
            total,
            read_count,
            read_percentage,
        }
    }

    pub fn unread_count(&self) -> usize {
        self.total - self.read_count
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📚 Total books: {}", self.total)?;
        writeln!(f, "✅ Books read: {}", self.read_count)?;
        writeln!(f, "📕 Books unread: {}", self.unread_count())?;
        write!(f, "📈 Read ratio: {:.2}%", self.read_percentage)
    }
}
