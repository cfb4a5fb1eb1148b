//! Workout plans and log formatting.

mod plans;

pub use plans::plan_for;

/// Stored when `/log` is sent without a description.
pub const NO_DETAILS: &str = "No details provided";

/// Normalize `/log` arguments into the stored description.
///
/// Words are re-joined with single spaces; an empty argument list becomes
/// [`NO_DETAILS`].
pub fn log_description(args: &str) -> String {
    let text = args.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        NO_DETAILS.to_string()
    } else {
        text
    }
}

/// `/stats` reply body (HTML).
pub fn stats_text(total: u64) -> String {
    format!("You've logged <b>{} workouts</b>!", total)
}
