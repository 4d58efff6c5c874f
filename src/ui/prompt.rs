//! Interactive prompts on stdin.

use crate::errors::AppResult;
use std::io::{self, BufRead, Write};

const DIALOG_WIDTH: usize = 72;

/// Read one line. `None` on end of input.
pub fn read_line(prompt: &str) -> AppResult<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut s = String::new();
    let n = io::stdin().lock().read_line(&mut s)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim_end_matches(['\r', '\n']).to_string()))
}

/// `[y/N]` question. Anything but y/yes, including end of input, is no.
pub fn ask_yes_no(question: &str) -> AppResult<bool> {
    let answer = read_line(&format!("{question} [y/N]: "))?.unwrap_or_default();
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Print a confirmation dialog and ask for y/N.
pub fn confirm_dialog(title: &str, message: &str) -> AppResult<bool> {
    println!("┌ {title}");
    for line in textwrap::wrap(message, DIALOG_WIDTH) {
        println!("│ {line}");
    }
    ask_yes_no("└ Proceed?")
}

/// The operator must type `word` exactly.
pub fn ask_typed(word: &str) -> AppResult<bool> {
    let answer = read_line(&format!("Type {word} to continue: "))?.unwrap_or_default();
    Ok(answer.trim() == word)
}
