//! Formatting helpers shared by every template variant.

use chrono::NaiveDate;

/// End label for a role with `current = true`.
pub const PRESENT_LABEL: &str = "Present";

/// Formats a stored date as abbreviated month + full year ("Jan 2020").
///
/// Accepts `YYYY-MM-DD` and `YYYY-MM` (optionally followed by a `T` time part).
/// Empty input renders empty. Anything else, a bare year included, is shown as typed.
pub fn format_month_year(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    match parse_date(raw) {
        Some(date) => date.format("%b %Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    // Full timestamps ("2020-01-15T00:00:00Z") only need their date part.
    let date_part = raw.split('T').next().unwrap_or(raw);
    if date_part.len() == 4 && date_part.bytes().all(|b| b.is_ascii_digit()) {
        return date_part
            .parse()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{date_part}-01"), "%Y-%m-%d"))
        .ok()
}

/// `"<start> - <end-or-Present>"`. `current` forces the end label regardless of `end`.
///
/// Returns `None` when there is nothing to show on either side.
pub fn format_date_range(start: &str, end: &str, current: bool) -> Option<String> {
    let start = format_month_year(start);
    let end = if current {
        PRESENT_LABEL.to_string()
    } else {
        format_month_year(end)
    };

    if start.is_empty() && end.is_empty() {
        None
    } else {
        Some(format!("{start} - {end}"))
    }
}

/// Single date, omitted when empty.
pub fn format_single_date(raw: &str) -> Option<String> {
    non_empty(format_month_year(raw))
}

/// Splits free text on line breaks, one bullet per line. Blank lines are kept as
/// empty bullets; an empty description yields no bullets.
pub fn split_bullets(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Splits a comma-separated technology string into trimmed tags.
pub fn split_technologies(technologies: &str) -> Vec<String> {
    if technologies.is_empty() {
        return vec![];
    }
    technologies
        .split(',')
        .map(|t| t.trim().to_string())
        .collect()
}

/// Profession id as an upper-case headline: "software-engineer" → "SOFTWARE ENGINEER".
pub fn profession_headline(profession: &str) -> String {
    profession.replace('-', " ").to_uppercase()
}

/// Profession id as a shell-style prompt: "software-engineer" → "$ software_engineer".
pub fn profession_prompt(profession: &str) -> String {
    format!("$ {}", profession.replace('-', "_").to_lowercase())
}

pub fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
