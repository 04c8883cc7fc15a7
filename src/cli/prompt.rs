use anyhow::{Context, Result};
use inquire::InquireError;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Enter the move name:";

/// Ask for the move name. Returns `None` when the user cancels the prompt
/// or stdin is already closed.
pub fn ask_move_name() -> Result<Option<String>> {
    // Piped input has no terminal for inquire to draw on.
    if !atty::is(atty::Stream::Stdin) {
        return read_line(&mut io::stdin().lock());
    }

    match inquire::Text::new(PROMPT).prompt() {
        Ok(name) => Ok(Some(name)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e).context("Unable to read move name"),
    }
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    print!("{PROMPT} ");
    io::stdout().flush()?;

    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("Unable to read move name from stdin")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
