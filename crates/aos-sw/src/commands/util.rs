//! Helpers shared by command handlers.

use crate::error::CliError;

/// Destructive operations need `--yes`; there is no interactive prompt.
pub fn require_yes(action: &str, yes: bool) -> Result<(), CliError> {
    if yes {
        Ok(())
    } else {
        Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        })
    }
}

/// Render an optional value for tables and detail views.
pub fn opt<T: ToString>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

pub fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.into()
}
