use std::io::{BufRead, Write};

use log::debug;

use crate::{book::NewBook, error::LibraryResult};

/// Reads one line, without the trailing newline. `None` once input is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> LibraryResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Asks for `label` until a non-empty answer arrives.
pub fn ask_required<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> LibraryResult<Option<String>> {
    loop {
        write!(output, "{}: ", label)?;
        output.flush()?;

        match read_line(input)? {
            None => return Ok(None),
            Some(answer) if answer.is_empty() => {
                writeln!(output, "⚠️  {} must not be empty.", label)?;
            }
            Some(answer) => return Ok(Some(answer)),
        }
    }
}

pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> LibraryResult<bool> {
    write!(output, "{} [y/N]: ", question)?;
    output.flush()?;

    let answer = read_line(input)?.unwrap_or_default().trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Collects every field of a new book. `None` if input ends before the form is complete.
pub fn ask_new_book<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> LibraryResult<Option<NewBook>> {
    let mut ask = |label: &str| -> LibraryResult<Option<String>> {
        let answer = ask_required(input, output, label)?;
        if answer.is_none() {
            debug!("Input closed while asking for {}", label);
        }
        Ok(answer)
    };

    let Some(title) = ask("Title")? else { return Ok(None) };
    let Some(author) = ask("Author")? else { return Ok(None) };
    let Some(year) = ask("Year")? else { return Ok(None) };
    let Some(genre) = ask("Genre")? else { return Ok(None) };
    let read = ask_yes_no(input, output, "Have you read this book?")?;

    Ok(Some(NewBook::new(title, author, year, genre, read)))
}

/// Lists `titles` numbered from 1 and asks for one. Empty input, `q`, or end of input cancel.
pub fn choose_title<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    titles: &[&str],
) -> LibraryResult<Option<String>> {
    for (i, title) in titles.iter().enumerate() {
        writeln!(output, "   {}. {}", i + 1, title)?;
    }

    loop {
        write!(
            output,
            "Select a book to remove [1-{}, q to cancel]: ",
            titles.len()
        )?;
        output.flush()?;

        let answer = match read_line(input)? {
            Some(answer) => answer.trim().to_lowercase(),
            None => return Ok(None),
        };
        if answer.is_empty() || answer == "q" {
            return Ok(None);
        }

        match answer.parse::<usize>() {
            Ok(n) if (1..=titles.len()).contains(&n) => {
                return Ok(Some(titles[n - 1].to_string()));
            }
            _ => writeln!(output, "⚠️  '{}' is not one of the listed numbers.", answer)?,
        }
    }
}
