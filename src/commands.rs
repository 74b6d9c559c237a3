use std::io::{BufRead, Write};

use log::debug;

use crate::{
    book::{Book, NewBook},
    cli::Commands,
    error::{LibraryError, LibraryResult},
    export::Export,
    fs::Storage,
    library::Library,
    prompt,
};

const EMPTY_LIBRARY: &str = "ℹ️  There are no books in the library.";

/// Process exit status for the outcome of a command: 0 ok, 2 invalid input, 1 anything else.
pub fn exit_code(result: &LibraryResult<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(LibraryError::Validation { .. }) => 2,
        Err(_) => 1,
    }
}

/// Runs one command against `library`. Prompts read from `input`, everything shown goes to `output`.
pub fn execute<S: Storage, R: BufRead, W: Write>(
    library: &mut Library<S>,
    command: Commands,
    input: &mut R,
    output: &mut W,
) -> LibraryResult<()> {
    match command {
        Commands::Add {
            title,
            author,
            year,
            genre,
            read,
            interactive,
        } => {
            let new_book = if interactive {
                match prompt::ask_new_book(input, output)? {
                    Some(book) => book,
                    None => {
                        writeln!(output, "Nothing added.")?;
                        return Ok(());
                    }
                }
            } else {
                NewBook::new(
                    title.unwrap_or_default(),
                    author.unwrap_or_default(),
                    year.unwrap_or_default(),
                    genre.unwrap_or_default(),
                    read,
                )
            };

            let title = new_book.title.clone();
            library.add(new_book)?;
            writeln!(output, "✅ '{}' was added to the library.", title)?;
        }
        Commands::Remove { title } => {
            let title = match title {
                Some(t) => t,
                None if library.is_empty() => {
                    writeln!(output, "{}", EMPTY_LIBRARY)?;
                    return Ok(());
                }
                None => match prompt::choose_title(input, output, &library.titles())? {
                    Some(t) => t,
                    None => {
                        writeln!(output, "Nothing removed.")?;
                        return Ok(());
                    }
                },
            };

            let before = library.len();
            let after = library.remove(&title)?.len();
            render_removal(output, &title, before - after)?;
        }
        Commands::Search { by, term } => {
            let results = library.search(by, &term);
            if results.is_empty() {
                writeln!(output, "⚠️  No results found for {} '{}'.", by, term)?;
            } else {
                render_books(output, results)?;
            }
        }
        Commands::List => {
            if library.is_empty() {
                writeln!(output, "{}", EMPTY_LIBRARY)?;
            }
            render_books(output, library.books())?;
        }
        Commands::Stats => {
            writeln!(output, "{}", library.statistics())?;
        }
        Commands::Export {
            format,
            output: path,
        } => {
            let content = library.books().export(format)?;
            match path {
                Some(path) => {
                    std::fs::write(&path, content).map_err(|source| LibraryError::Io {
                        path: path.clone(),
                        source,
                    })?;
                    writeln!(
                        output,
                        "Exported {} books as {} to {:?}",
                        library.len(),
                        format,
                        path
                    )?;
                }
                None => {
                    write!(output, "{}", content)?;
                    if !content.ends_with('\n') {
                        writeln!(output)?;
                    }
                }
            }
        }
    }

    debug!("Command finished with {} books", library.len());
    Ok(())
}

fn render_books<'a, W: Write>(
    output: &mut W,
    books: impl IntoIterator<Item = &'a Book>,
) -> LibraryResult<()> {
    for book in books {
        writeln!(output, "{}", book)?;
    }
    Ok(())
}

fn render_removal<W: Write>(output: &mut W, title: &str, removed: usize) -> LibraryResult<()> {
    match removed {
        0 => writeln!(output, "⚠️  No book titled '{}' was found.", title)?,
        1 => writeln!(output, "🚮 '{}' was removed from the library.", title)?,
        n => writeln!(
            output,
            "🚮 {} books titled '{}' were removed from the library.",
            n, title
        )?,
    }
    Ok(())
}
