//! Interactive command loop. Commands arrive one line at a time, get
//! lower-cased, and dispatch to the repository and formatter. Every error is
//! reported at this boundary and the loop keeps running; only `exit` or the
//! end of input terminates the program.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::db::Repository;
use crate::error::Error;
use crate::format::render_table;
use crate::models::TimeOfDay;

const PROMPT: &str = ">>> ";

const HELP_TEXT: &str = "Available commands:

add - record a new departure;
list - print all recorded departures;
select <HH:MM> - show departures leaving after the given time;
help - show this message;
exit - quit the program.";

/// Drive the loop against the real standard streams until the user exits.
pub fn run(repo: &Repository) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(repo, stdin.lock(), stdout.lock(), stderr.lock())
}

/// The loop proper, generic over its streams so tests can script a session
/// through in-memory buffers. Reading an empty chunk (end of input) behaves
/// like `exit` so piped sessions terminate cleanly.
pub fn run_with<R, W, E>(repo: &Repository, mut input: R, mut out: W, mut err: E) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    loop {
        let Some(line) = prompt_line(&mut input, &mut out, PROMPT)? else {
            break;
        };
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "" => continue,
            "exit" => break,
            "add" => {
                if let Err(error) = prompt_and_add(repo, &mut input, &mut out) {
                    report(&mut err, &error)?;
                }
            }
            "list" => match repo.list_all() {
                Ok(records) => {
                    writeln!(out, "{}", render_table(&records)).context("failed to write table")?
                }
                Err(error) => report(&mut err, &error)?,
            },
            "help" => writeln!(out, "{HELP_TEXT}").context("failed to write help")?,
            _ if command == "select" || command.starts_with("select ") => {
                if let Err(error) = select_command(repo, &command, &mut out) {
                    report(&mut err, &error)?;
                }
            }
            other => {
                writeln!(err, "Unknown command {other}").context("failed to report command")?
            }
        }
    }

    Ok(())
}

/// Write a prompt, flush, and read one line. `None` signals end of input.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}").context("failed to write prompt")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Walk the four `add` prompts in order, validate the numeric and time fields,
/// and hand the typed values to the repository. Ending input mid-sequence
/// counts as an abandoned command.
fn prompt_and_add<R: BufRead, W: Write>(
    repo: &Repository,
    input: &mut R,
    out: &mut W,
) -> Result<(), Error> {
    let Some(destination) = prompt_line(input, out, "Destination? ")? else {
        return Err(Error::validation("add cancelled: no more input"));
    };
    let Some(number) = prompt_line(input, out, "Train number? ")? else {
        return Err(Error::validation("add cancelled: no more input"));
    };
    let Some(time) = prompt_line(input, out, "Departure time HH:MM? ")? else {
        return Err(Error::validation("add cancelled: no more input"));
    };
    let Some(train_type) = prompt_line(input, out, "Train type? ")? else {
        return Err(Error::validation("add cancelled: no more input"));
    };

    let number: i64 = number
        .trim()
        .parse()
        .map_err(|_| Error::validation(format!("'{}' is not a train number", number.trim())))?;
    let time: TimeOfDay = time.trim().parse()?;

    repo.add(destination.trim(), number, time, train_type.trim())
}

/// Handle `select <HH:MM>`: parse the cutoff, query, and either render the
/// matches or explain that nothing leaves later.
fn select_command<W: Write>(repo: &Repository, command: &str, out: &mut W) -> Result<(), Error> {
    let cutoff = command
        .strip_prefix("select")
        .map(str::trim)
        .filter(|rest| !rest.is_empty())
        .ok_or_else(|| Error::validation("select needs a time argument, e.g. select 14:30"))?;
    let cutoff: TimeOfDay = cutoff.parse()?;

    let records = repo.select_after(cutoff)?;
    if records.is_empty() {
        writeln!(out, "No departures after this time.").context("failed to write message")?;
    } else {
        writeln!(out, "{}", render_table(&records)).context("failed to write table")?;
    }

    Ok(())
}

fn report<E: Write>(err: &mut E, error: &Error) -> Result<()> {
    writeln!(err, "{error:#}").context("failed to report error")
}
