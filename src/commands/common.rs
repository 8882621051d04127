//! Common utilities and helper functions shared across commands.

use crate::{error::Result, storage::Outcome};
use serde::Serialize;

/// Print an outcome as a success or error notice and return whether it succeeded.
pub fn report(outcome: &Outcome) -> bool {
    match outcome {
        Outcome::Success(message) => println!("✓ {}", message),
        Outcome::Failure(message) => eprintln!("✗ {}", message),
    }
    outcome.is_success()
}

/// Outcome of an update or delete, e.g. "Team updated!" or "Team not found!"
pub fn change_outcome(found: bool, entity: &str, action: &str) -> Outcome {
    if found {
        Outcome::success(format!("{} {}!", entity, action))
    } else {
        Outcome::failure(format!("{} not found!", entity))
    }
}

/// Outcome of a delete issued without `--yes`
pub fn unconfirmed_delete(entity: &str, id: u32) -> Outcome {
    Outcome::failure(format!(
        "Not deleted: pass --yes to confirm deleting {} {}",
        entity.to_lowercase(),
        id
    ))
}

/// Pretty-print any serializable rows
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a rate to two decimals
pub fn rate(value: f64) -> String {
    format!("{:.2}", value)
}
