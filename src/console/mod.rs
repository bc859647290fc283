//! Console line parsing. Each line becomes at most one shell event.

use crate::claim::ClaimField;
use crate::error::ConsoleError;
use crate::kernel::event::Event;

pub const HELP: &str = "\
Commands:
  set <field> <value>   set a field; <value> may be an option number (see 'options')
  submit                request a denial risk prediction
  show                  print the form and the last result
  options               list the suggested values per field
  help                  print this help
  quit                  leave";

/// Parses one console line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Event>, ConsoleError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match command.to_ascii_lowercase().as_str() {
        "set" => parse_set(rest)?,
        "submit" => Event::Submit,
        "show" => Event::Show,
        "options" => Event::Options,
        "help" | "?" => Event::Help,
        "quit" | "exit" => Event::Quit,
        _ => return Err(ConsoleError::UnknownCommand(command.to_string())),
    };

    Ok(Some(event))
}

fn parse_set(args: &str) -> Result<Event, ConsoleError> {
    if args.is_empty() {
        return Err(ConsoleError::MissingArgument("field"));
    }

    let (name, value) = match args.split_once(char::is_whitespace) {
        Some((name, value)) => (name, value.trim()),
        None => (args, ""),
    };

    let field: ClaimField = name
        .to_ascii_lowercase()
        .parse()
        .map_err(|_| ConsoleError::UnknownField(name.to_string()))?;

    if value.is_empty() {
        return Err(ConsoleError::MissingArgument("value"));
    }

    Ok(Event::FieldEdited {
        field,
        value: resolve_value(field, value),
    })
}

/// An in-range option number picks that option; anything else is literal.
pub fn resolve_value(field: ClaimField, value: &str) -> String {
    let options = field.options();
    match value.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].to_string(),
        _ => value.to_string(),
    }
}
