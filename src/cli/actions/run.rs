use crate::cli::actions::{register, strength, Action};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub fn execute(action: Action) -> Result<()> {
    match action {
        Action::Register(args) => register::execute(args),
        Action::Strength(args) => strength::execute(args),
    }
}
