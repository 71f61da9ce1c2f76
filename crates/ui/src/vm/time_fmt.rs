use chrono::{DateTime, Utc};

#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// Hours and minutes, as shown next to chat messages.
#[must_use]
pub fn format_clock(value: DateTime<Utc>) -> String {
    value.format("%H:%M").to_string()
}
