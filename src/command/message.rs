use chrono::NaiveDate;

const HEADING: &str = "#### Standup notes for";
const TAG_PREFIX: &str = "#standup-";

/// Builds the Markdown note posted back into the channel: a dated heading,
/// the caller's text verbatim, and a sortable `#standup-YYYYMMDD` tag.
pub fn standup_note(date: NaiveDate, text: &str) -> String {
    format!(
        "{} {}\n\n{}\n\n{}{}",
        HEADING,
        date.format("%A, %-d %B %Y"),
        text,
        TAG_PREFIX,
        date.format("%Y%m%d"),
    )
}
