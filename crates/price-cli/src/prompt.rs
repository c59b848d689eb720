//! Interactive search loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use tracing::debug;

use price_store::ProductStore;

use crate::summary::results_table;

/// Typing this (any case) ends the search loop.
pub const EXIT_COMMAND: &str = "exit";
pub const FOLDER_PROMPT: &str = "Введите путь к папке с прайс-листами: ";
pub const SEARCH_PROMPT: &str = "Введите текст для поиска (или 'exit' для выхода): ";
pub const NOT_FOUND_MESSAGE: &str = "Товары не найдены.";
pub const FAREWELL_MESSAGE: &str = "Работа завершена.";
/// Followed by the report path.
pub const REPORT_SAVED_MESSAGE: &str = "Отчёт сохранён:";

pub fn is_exit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_COMMAND)
}

/// Asks for the price-list folder.
pub fn prompt_for_folder<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "{FOLDER_PROMPT}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let folder = line.trim();
    if folder.is_empty() {
        bail!("no price-list folder given");
    }
    Ok(PathBuf::from(folder))
}

/// Reads queries until `exit` or end of input, printing matches for each.
///
/// Returns the number of queries answered.
pub fn run_prompt_loop<S, R, W>(store: &S, input: &mut R, output: &mut W) -> Result<usize>
where
    S: ProductStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut answered = 0;
    let mut line = String::new();
    loop {
        write!(output, "{SEARCH_PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let query = line.trim_end_matches(['\r', '\n']);
        if is_exit(query) {
            break;
        }

        let results = store.search(query)?;
        debug!(query, matches = results.len(), "answered query");
        if results.is_empty() {
            writeln!(output, "{NOT_FOUND_MESSAGE}")?;
        } else {
            writeln!(output, "{}", results_table(&results))?;
        }
        answered += 1;
    }
    writeln!(output, "{FAREWELL_MESSAGE}")?;
    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_is_case_insensitive() {
        assert!(is_exit("exit"));
        assert!(is_exit("EXIT"));
        assert!(is_exit(" Exit \n"));
        assert!(!is_exit("exit now"));
        assert!(!is_exit(""));
    }
}
