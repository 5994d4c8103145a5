// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by the CLI and server renderers.

use chrono::{DateTime, Utc};

/// Truncates text to `max_len` characters, ending with `suffix` when cut.
///
/// Counts characters, not bytes, so multi-byte titles are safe.
///
/// # Examples
///
/// ```
/// use roulette_core::utils::truncate_with_suffix;
///
/// let result = truncate_with_suffix("Support 0402 footprints in the autorouter", 20, "…");
/// assert!(result.ends_with('…'));
/// assert_eq!(result.chars().count(), 20);
/// ```
#[must_use]
pub fn truncate_with_suffix(text: &str, max_len: usize, suffix: &str) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let keep = max_len.saturating_sub(suffix.chars().count());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(suffix);
    truncated
}

/// Truncates text with a trailing "...".
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    truncate_with_suffix(text, max_len, "...")
}

/// Formats a timestamp relative to `now` ("3 days ago", "just now").
#[must_use]
pub fn format_relative_time(dt: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*dt);

    let (count, unit) = if duration.num_days() >= 365 {
        (duration.num_days() / 365, "year")
    } else if duration.num_days() >= 30 {
        (duration.num_days() / 30, "month")
    } else if duration.num_days() > 0 {
        (duration.num_days(), "day")
    } else if duration.num_hours() > 0 {
        (duration.num_hours(), "hour")
    } else {
        return "just now".to_string();
    };

    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Formats a bounty in whole dollars, e.g. `$250`.
#[must_use]
pub fn format_bounty(amount: u64) -> String {
    format!("${amount}")
}
