//! Scripted operator sessions.
//!
//! A session script holds one operator command per line. Each command maps to
//! exactly one store action, except `show`, which prints the current page.
//! Blank lines and lines starting with `#` are ignored.
//!
//! | Command | Action |
//! |---|---|
//! | `search <text>` / `clear` | search (empty text clears) |
//! | `page <n\|first\|prev\|next\|last>` | page change |
//! | `select <id>` / `unselect <id>` | row checkbox |
//! | `select-page` / `unselect-page` | "select all visible" checkbox |
//! | `edit <id>` / `cancel <id>` / `save <id>` | inline edit mode |
//! | `set <id> <name\|email\|role> <value>` | type into a draft field |
//! | `update <id> <name> \| <email> \| <role>` | commit a full edit |
//! | `delete <id>` / `delete-selected` | deletion |

use std::io::BufRead;

use roster_core::{Action, PageRequest, RosterEvent, RosterStore};
use roster_model::{ModelError, Record, RecordField, RecordId};
use thiserror::Error;
use tracing::{debug, warn};

use crate::logging::redact_value;

/// A parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Dispatch(Action),
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("{command}: missing {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("invalid page {0:?} (expected a number, first, prev, next or last)")]
    InvalidPage(String),
    #[error("update: expected <name> | <email> | <role>")]
    InvalidUpdate,
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Parse one script line. Returns `Ok(None)` for blank lines and comments.
///
/// # Errors
///
/// Returns an error for unknown commands or malformed arguments.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let (command, rest) = match trimmed.split_once(' ') {
        Some((command, rest)) => (command, rest),
        None => (trimmed, ""),
    };
    let action = match command {
        "show" => return Ok(Some(SessionCommand::Show)),
        "search" => Action::Search(rest.to_string()),
        "clear" => Action::clear_search(),
        "page" => Action::GoToPage(parse_page(rest.trim())?),
        "select" => Action::ToggleOne {
            id: parse_id("select", rest)?,
            checked: true,
        },
        "unselect" => Action::ToggleOne {
            id: parse_id("unselect", rest)?,
            checked: false,
        },
        "select-page" => Action::ToggleVisible { checked: true },
        "unselect-page" => Action::ToggleVisible { checked: false },
        "edit" => Action::BeginEdit(parse_id("edit", rest)?),
        "cancel" => Action::CancelEdit(parse_id("cancel", rest)?),
        "save" => Action::SaveEdit(parse_id("save", rest)?),
        "set" => parse_set(rest)?,
        "update" => parse_update(rest)?,
        "delete" => Action::DeleteOne(parse_id("delete", rest)?),
        "delete-selected" => Action::DeleteSelected,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(SessionCommand::Dispatch(action)))
}

fn parse_id(command: &'static str, rest: &str) -> Result<RecordId, ParseError> {
    let token = rest.split_whitespace().next().ok_or(ParseError::MissingArgument {
        command,
        what: "record id",
    })?;
    Ok(RecordId::new(token))
}

fn parse_page(token: &str) -> Result<PageRequest, ParseError> {
    match token {
        "" => Err(ParseError::MissingArgument {
            command: "page",
            what: "page",
        }),
        "first" => Ok(PageRequest::First),
        "prev" | "previous" => Ok(PageRequest::Previous),
        "next" => Ok(PageRequest::Next),
        "last" => Ok(PageRequest::Last),
        other => other
            .parse()
            .map(PageRequest::Number)
            .map_err(|_| ParseError::InvalidPage(other.to_string())),
    }
}

/// `set <id> <field> <value>`; the value is the rest of the line and may be empty.
fn parse_set(rest: &str) -> Result<Action, ParseError> {
    let rest = rest.trim_start();
    let (id, rest) = rest.split_once(' ').unwrap_or((rest, ""));
    let id = parse_id("set", id)?;
    let rest = rest.trim_start();
    let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
    if field.is_empty() {
        return Err(ParseError::MissingArgument {
            command: "set",
            what: "field",
        });
    }
    Ok(Action::UpdateDraft {
        id,
        field: field.parse::<RecordField>()?,
        value: value.to_string(),
    })
}

fn parse_update(rest: &str) -> Result<Action, ParseError> {
    let rest = rest.trim_start();
    let (id, fields) = rest.split_once(' ').unwrap_or((rest, ""));
    let id = parse_id("update", id)?;
    let parts: Vec<&str> = fields.split('|').map(str::trim).collect();
    let [name, email, role] = parts.as_slice() else {
        return Err(ParseError::InvalidUpdate);
    };
    Ok(Action::CommitEdit(Record::new(id, *name, *email, *role)))
}

/// What a session did, for the caller to report.
#[derive(Debug, Default)]
pub struct SessionReport {
    /// Lines that failed to parse, with 1-based line numbers.
    pub errors: Vec<(usize, ParseError)>,
    pub dispatched: usize,
}

/// Run every line of `script` against `store`.
///
/// `on_show` is called for each `show` command, `on_events` after every
/// dispatched action. With `strict`, the run stops at the first bad line.
///
/// # Errors
///
/// Returns an error only if reading the script fails.
pub fn run_script<R, S, E>(
    store: &mut RosterStore,
    script: R,
    strict: bool,
    mut on_show: S,
    mut on_events: E,
) -> std::io::Result<SessionReport>
where
    R: BufRead,
    S: FnMut(&RosterStore),
    E: FnMut(&[RosterEvent]),
{
    let mut report = SessionReport::default();
    for (index, line) in script.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Show)) => on_show(store),
            Ok(Some(SessionCommand::Dispatch(action))) => {
                if let Action::UpdateDraft { value, .. } = &action {
                    debug!(line = line_no, value = redact_value(value), "draft input");
                }
                let events = store.dispatch(action);
                report.dispatched += 1;
                on_events(&events);
            }
            Err(error) => {
                warn!(line = line_no, %error, "skipping script line");
                report.errors.push((line_no, error));
                if strict {
                    break;
                }
            }
        }
    }
    Ok(report)
}
